use locale_core::{cache_key, LruCache, Placeholders};

#[test]
fn test_capacity_invariant() {
    let cache = LruCache::new(4).expect("cache");
    for i in 0..100 {
        cache.put(format!("key-{}", i), i);
        assert!(cache.len() <= 4);
    }
    assert_eq!(cache.capacity(), 4);
}

#[test]
fn test_lru_eviction_order() {
    let cache = LruCache::new(2).expect("cache");
    cache.put("A", 1);
    cache.put("B", 2);
    cache.get(&"A");
    cache.put("C", 3);

    assert_eq!(cache.get(&"B"), None);
    assert!(cache.get(&"A").is_some());
    assert!(cache.get(&"C").is_some());
}

#[test]
fn test_contains_key_leaves_recency_alone() {
    let cache = LruCache::new(2).expect("cache");
    cache.put("A", 1);
    cache.put("B", 2);
    assert!(cache.contains_key(&"A"));
    cache.put("C", 3);

    assert_eq!(cache.get(&"A"), None);
}

#[test]
fn test_resize_applies_on_next_put() {
    let cache = LruCache::new(3).expect("cache");
    cache.put("A", 1);
    cache.put("B", 2);
    cache.put("C", 3);

    cache.resize(1).expect("resize");
    assert_eq!(cache.len(), 3);

    cache.put("D", 4);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"D"), Some(4));
}

#[test]
fn test_invalid_capacities_are_rejected() {
    assert!(LruCache::<String, String>::new(0).is_err());

    let cache: LruCache<String, String> = LruCache::new(2).expect("cache");
    assert!(cache.resize(0).is_err());
    assert_eq!(cache.capacity(), 2);
}

#[test]
fn test_cache_key_order_independence() {
    let mut a = Placeholders::new();
    a.insert("x".into(), "1".into());
    a.insert("y".into(), "2".into());

    let mut b = Placeholders::new();
    b.insert("y".into(), "2".into());
    b.insert("x".into(), "1".into());

    assert_eq!(
        cache_key("Hello {x} {y}", &a),
        cache_key("Hello {x} {y}", &b)
    );
}
