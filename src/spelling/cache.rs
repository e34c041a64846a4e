//! Memoized scalar edit distances.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::spelling::levenshtein::{EditCosts, MinEditDistance};

type CacheKey = (String, String, EditCosts);

/// Thread-safe cache of scalar distances keyed by `(source, target, costs)`.
///
/// Only the scalar is stored; callers that need the matrix compute it fresh.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: RwLock<AHashMap<CacheKey, u64>>,
    capacity: Option<usize>,
}

impl DistanceCache {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that stops admitting entries once `capacity` is reached.
    pub fn with_capacity(capacity: usize) -> Self {
        DistanceCache {
            entries: RwLock::new(AHashMap::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    /// Look up the distance, computing and storing it on a miss.
    pub fn distance(&self, source: &str, target: &str, costs: EditCosts) -> u64 {
        let key = (source.to_string(), target.to_string(), costs);
        if let Some(&distance) = self.entries.read().get(&key) {
            return distance;
        }

        let distance = MinEditDistance::new(costs).distance(source, target);

        let mut entries = self.entries.write();
        if self.capacity.is_none_or(|capacity| entries.len() < capacity) {
            entries.insert(key, distance);
        }
        distance
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
