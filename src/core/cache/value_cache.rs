//! Memoised escape-time counts keyed by exact complex coordinate.
//!
//! Keys are the IEEE-754 bit patterns of the coordinate (plus the iteration bound), so
//! a lookup only hits when the same pixel-to-plane arithmetic is repeated bit for bit:
//! re-rendering an unchanged viewport, or returning to a previous one exactly. Every new
//! zoom level produces fresh coordinates and therefore fresh misses.
//!
//! There is no eviction. The map grows with every distinct coordinate rendered and lives
//! as long as its owner, which bounds how long a session can keep exploring before
//! memory becomes a concern.

use std::collections::HashMap;
use std::hash::{BuildHasher, RandomState};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::escape_time;

const SHARD_COUNT: usize = 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    real_bits: u64,
    imag_bits: u64,
    max_iterations: u32,
}

impl CacheKey {
    fn new(c: Complex, max_iterations: u32) -> Self {
        let (real_bits, imag_bits) = c.to_bits();

        Self {
            real_bits,
            imag_bits,
            max_iterations,
        }
    }
}

/// Monotonic lookup counters. Diagnostics only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe memo in front of [`escape_time`].
///
/// Shards are locked independently so a parallel render rarely contends. A miss is
/// computed outside the lock; two threads missing on the same key both count a miss
/// and both store the same value.
#[derive(Debug)]
pub struct ValueCache {
    shards: Vec<Mutex<HashMap<CacheKey, u32>>>,
    shard_hasher: RandomState,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ValueCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shards: (0..SHARD_COUNT).map(|_| Mutex::new(HashMap::new())).collect(),
            shard_hasher: RandomState::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get_value(&self, c: Complex, max_iterations: u32) -> u32 {
        let key = CacheKey::new(c, max_iterations);
        let shard = self.shard_for(&key);

        if let Some(&iterations) = shard.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return iterations;
        }

        let iterations = escape_time(c, max_iterations);
        shard.lock().insert(key, iterations);
        self.misses.fetch_add(1, Ordering::Relaxed);

        iterations
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Number of distinct coordinates stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    fn shard_for(&self, key: &CacheKey) -> &Mutex<HashMap<CacheKey, u32>> {
        let index = self.shard_hasher.hash_one(key) as usize % self.shards.len();
        &self.shards[index]
    }
}

impl Default for ValueCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_new_cache_is_empty() {
        let cache = ValueCache::new();

        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_first_lookup_misses_second_hits() {
        let cache = ValueCache::new();
        let c = Complex::new(-0.75, 0.1);

        let first = cache.get_value(c, 100);
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 1 });

        let second = cache.get_value(c, 100);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });

        assert_eq!(first, second);
        assert_eq!(first, escape_time(c, 100));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_coordinates_are_distinct_entries() {
        let cache = ValueCache::new();

        cache.get_value(Complex::new(0.1, 0.2), 50);
        cache.get_value(Complex::new(0.2, 0.1), 50);
        cache.get_value(Complex::new(0.1, 0.2 + f64::EPSILON), 50);

        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 3 });
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_signed_zero_is_not_the_same_key() {
        let cache = ValueCache::new();

        cache.get_value(Complex::new(0.0, 0.0), 20);
        cache.get_value(Complex::new(-0.0, 0.0), 20);

        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_iteration_bound_is_part_of_the_key() {
        let cache = ValueCache::new();
        let c = Complex::ZERO;

        assert_eq!(cache.get_value(c, 10), 10);
        assert_eq!(cache.get_value(c, 20), 20);
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });
    }

    #[test]
    fn test_concurrent_lookups_agree_with_evaluator() {
        let cache = ValueCache::new();
        let coordinates: Vec<Complex> = (0..64)
            .map(|i| Complex::new(-2.0 + i as f64 * 0.04, 0.3))
            .collect();

        let results: Vec<u32> = coordinates
            .par_iter()
            .chain(coordinates.par_iter())
            .map(|&c| cache.get_value(c, 80))
            .collect();

        for (i, &c) in coordinates.iter().enumerate() {
            assert_eq!(results[i], escape_time(c, 80));
            assert_eq!(results[i + coordinates.len()], escape_time(c, 80));
        }

        let stats = cache.stats();
        assert_eq!(cache.len(), 64);
        assert_eq!(stats.hits + stats.misses, 128);
        assert!(stats.misses >= 64);
    }
}
