// src/cache/lru.rs
use crate::core::error::{AppError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

/// Null link marker for the intrusive recency list.
const NIL: usize = usize::MAX;

struct Node<K, V> {
    key: K,
    value: Option<V>,
    prev: usize,
    next: usize,
}

/// Unsynchronized LRU store: `HashMap` index into an arena-backed
/// doubly-linked list. Head = most recently used, tail = least recently used.
struct Store<K, V> {
    capacity: usize,
    map: HashMap<K, usize>,
    arena: Vec<Node<K, V>>,
    head: usize,
    tail: usize,
    free: usize,
}

impl<K: Hash + Eq + Clone, V> Store<K, V> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            arena: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
        }
    }

    fn alloc(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            value: Some(value),
            prev: NIL,
            next: NIL,
        };
        if self.free != NIL {
            let idx = self.free;
            self.free = self.arena[idx].next;
            self.arena[idx] = node;
            idx
        } else {
            self.arena.push(node);
            self.arena.len() - 1
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.arena[idx].prev, self.arena[idx].next);
        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.arena[idx].prev = NIL;
        self.arena[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.arena[idx].next = self.head;
        if self.head != NIL {
            self.arena[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn touch(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    fn release(&mut self, idx: usize) -> Option<V> {
        let value = self.arena[idx].value.take();
        self.arena[idx].next = self.free;
        self.free = idx;
        value
    }

    fn evict_tail(&mut self) {
        if self.tail == NIL {
            return;
        }
        let idx = self.tail;
        let key = self.arena[idx].key.clone();
        self.unlink(idx);
        self.map.remove(&key);
        let _ = self.release(idx);
    }
}

/// A thread-safe bounded cache with least-recently-used eviction.
///
/// All operations take `&self` and are mutually exclusive behind one mutex;
/// values are cloned out on access. `get` refreshes recency, `contains_key`
/// deliberately does not.
pub struct LruCache<K, V> {
    inner: Mutex<Store<K, V>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AppError::Validation("Capacity must be positive".into()));
        }
        Ok(Self {
            inner: Mutex::new(Store::new(capacity)),
        })
    }

    fn store(&self) -> std::sync::MutexGuard<'_, Store<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the value for `key` and marks the entry most-recently-used.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut store = self.store();
        let idx = *store.map.get(key)?;
        store.touch(idx);
        store.arena[idx].value.clone()
    }

    /// Inserts or replaces the value for `key`, marking it most-recently-used.
    /// Evicts the least-recently-used entry once per entry in excess of the
    /// capacity, so a lazily shrunk cache converges here. Returns the value
    /// previously stored for `key`.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let mut store = self.store();
        let previous = if let Some(&idx) = store.map.get(&key) {
            let old = store.arena[idx].value.replace(value);
            store.touch(idx);
            old
        } else {
            let idx = store.alloc(key.clone(), value);
            store.push_front(idx);
            store.map.insert(key, idx);
            None
        };
        while store.map.len() > store.capacity {
            store.evict_tail();
        }
        previous
    }

    /// Removes the entry for `key`, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut store = self.store();
        let idx = store.map.remove(key)?;
        store.unlink(idx);
        store.release(idx)
    }

    /// Pure existence check: does NOT refresh recency order.
    pub fn contains_key(&self, key: &K) -> bool {
        self.store().map.contains_key(key)
    }

    /// Removes all entries; capacity is unchanged.
    pub fn clear(&self) {
        let mut store = self.store();
        store.map.clear();
        store.arena.clear();
        store.head = NIL;
        store.tail = NIL;
        store.free = NIL;
    }

    pub fn len(&self) -> usize {
        self.store().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store().capacity
    }

    /// Updates the capacity. A smaller bound is not enforced immediately; the
    /// next `put` evicts down to it.
    pub fn resize(&self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(AppError::Validation("New capacity must be positive".into()));
        }
        self.store().capacity = new_capacity;
        Ok(())
    }
}

impl<K, V> std::fmt::Debug for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.store();
        f.debug_struct("LruCache")
            .field("len", &store.map.len())
            .field("capacity", &store.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn rejects_zero_capacity() {
        let res: Result<LruCache<String, String>> = LruCache::new(0);
        assert!(matches!(res, Err(AppError::Validation(_))));
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let cache = LruCache::new(3).expect("cache");
        for i in 0..50 {
            cache.put(i, i * 10);
            assert!(cache.len() <= 3, "size {} after put {}", cache.len(), i);
        }
    }

    #[test]
    fn get_refreshes_recency_before_eviction() {
        let cache = LruCache::new(2).expect("cache");
        cache.put("A", 1);
        cache.put("B", 2);
        cache.get(&"A");
        cache.put("C", 3);

        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"A"), Some(1));
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn contains_key_does_not_refresh_recency() {
        let cache = LruCache::new(2).expect("cache");
        cache.put("A", 1);
        cache.put("B", 2);
        assert!(cache.contains_key(&"A"));
        cache.put("C", 3);

        // A stays least-recently-used despite the existence check
        assert_eq!(cache.get(&"A"), None);
        assert_eq!(cache.get(&"B"), Some(2));
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn put_returns_previous_value_and_promotes() {
        let cache = LruCache::new(3).expect("cache");
        assert_eq!(cache.put("A", 1), None);
        cache.put("B", 2);
        cache.put("C", 3);

        assert_eq!(cache.put("A", 10), Some(1));
        assert_eq!(cache.len(), 3);

        // A was promoted by the replacing put, so B is evicted next
        cache.put("D", 4);
        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"A"), Some(10));
    }

    #[test]
    fn remove_returns_previous_value() {
        let cache = LruCache::new(3).expect("cache");
        cache.put("A", 1);
        assert_eq!(cache.remove(&"A"), Some(1));
        assert_eq!(cache.remove(&"A"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn remove_relinks_neighbors() {
        let cache = LruCache::new(3).expect("cache");
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.remove(&"B");

        cache.put("D", 4);
        cache.put("E", 5); // evicts A, the remaining tail

        assert_eq!(cache.get(&"A"), None);
        assert_eq!(cache.get(&"C"), Some(3));
        assert_eq!(cache.get(&"D"), Some(4));
        assert_eq!(cache.get(&"E"), Some(5));
    }

    #[test]
    fn clear_keeps_capacity() {
        let cache = LruCache::new(5).expect("cache");
        cache.put(1, "one");
        cache.put(2, "two");
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 5);
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn resize_rejects_zero() {
        let cache: LruCache<i32, i32> = LruCache::new(2).expect("cache");
        assert!(cache.resize(0).is_err());
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn resize_down_evicts_lazily() {
        let cache = LruCache::new(4).expect("cache");
        for i in 0..4 {
            cache.put(i, i);
        }
        cache.resize(2).expect("resize");

        // Shrinking alone does not evict
        assert_eq!(cache.len(), 4);

        // The next put enforces the new bound
        cache.put(9, 9);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&9), Some(9));
        assert_eq!(cache.get(&3), Some(3));
        assert_eq!(cache.get(&0), None);
    }

    #[test]
    fn slots_are_reused_after_eviction() {
        let cache = LruCache::new(2).expect("cache");
        for round in 0..20 {
            cache.put(round, round);
        }
        assert_eq!(cache.len(), 2);
        let arena_len = cache.store().arena.len();
        assert!(arena_len <= 3, "arena grew to {}", arena_len);
    }

    #[test]
    fn concurrent_puts_respect_capacity() {
        let cache = Arc::new(LruCache::new(16).expect("cache"));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        cache.put(format!("{}:{}", t, i), i);
                        cache.get(&format!("{}:{}", t, i / 2));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread");
        }
        assert!(cache.len() <= 16);
    }
}
