// src/language/stats.rs
use crate::cache::registry::CategoryStats;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared hit/miss counters for all cached lookups of one manager.
///
/// Owned by the manager rather than living in a global so isolated instances
/// can be tested side by side. Exactly one counter is bumped per lookup.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

/// Read-only snapshot of cache dimensions and lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub categories: Vec<CategoryStats>,
    pub hits: u64,
    pub misses: u64,
    pub hit_ratio: f64,
}

impl Statistics {
    pub fn new(categories: Vec<CategoryStats>, hits: u64, misses: u64) -> Self {
        let total = hits + misses;
        let hit_ratio = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            categories,
            hits,
            misses,
            hit_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
    }

    #[test]
    fn ratio_is_zero_without_lookups() {
        let snapshot = Statistics::new(Vec::new(), 0, 0);
        assert_eq!(snapshot.hit_ratio, 0.0);
    }

    #[test]
    fn ratio_is_hits_over_total() {
        let snapshot = Statistics::new(Vec::new(), 5, 5);
        assert!((snapshot.hit_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        use std::sync::Arc;
        let stats = Arc::new(CacheStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_hit();
                        stats.record_miss();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread");
        }
        assert_eq!(stats.hits(), 8000);
        assert_eq!(stats.misses(), 8000);
    }
}
