//! Fixed-capacity recency (LRU) cache of key presence.
//!
//! The cache stores no payloads. It exists so that algorithms "touching"
//! nodes produce hit/miss accounting that can be shown alongside the
//! animation. An access either finds the key (hit, key promoted to most
//! recent) or inserts it (miss, least-recently-used key evicted first when
//! the cache is full).
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, u64>          order: BTreeMap<u64, K>
//!   ┌──────┬───────┐                  ┌───────┬──────┐
//!   │ key  │ stamp │                  │ stamp │ key  │
//!   ├──────┼───────┤                  ├───────┼──────┤
//!   │  3   │   7   │ ───────────────▶ │   2   │  5   │  ← LRU (first)
//!   │  5   │   2   │                  │   6   │  9   │
//!   │  9   │   6   │                  │   7   │  3   │  ← MRU (last)
//!   └──────┴───────┘                  └───────┴──────┘
//!
//!   access(k):
//!     hit  → order.remove(old stamp); order.insert(tick, k)
//!     miss → if len == capacity { order.pop_first() }; insert(tick, k)
//!     tick += 1
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use algoviz::ds::{Access, RecencyCache};
//!
//! let mut cache = RecencyCache::new(2);
//! assert_eq!(cache.access(1), Access::Miss { evicted: None });
//! assert_eq!(cache.access(2), Access::Miss { evicted: None });
//! assert_eq!(cache.access(1), Access::Hit); // 2 is now LRU
//! assert_eq!(cache.access(3), Access::Miss { evicted: Some(2) });
//!
//! assert_eq!(cache.hits(), 1);
//! assert_eq!(cache.misses(), 3);
//! ```

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::hash::Hash;

use log::debug;

use crate::error::InvariantError;

/// Outcome of [`RecencyCache::access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<K> {
    /// The key was present and is now the most recently used.
    Hit,
    /// The key was absent and has been inserted; `evicted` is the LRU key
    /// that made room for it, if the cache was full.
    Miss { evicted: Option<K> },
}

impl<K> Access<K> {
    /// Returns `true` for [`Access::Hit`].
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }
}

/// Key-presence LRU cache with hit/miss counters.
///
/// A capacity of zero is honored: every access is a miss and nothing is
/// stored.
#[derive(Debug, Clone)]
pub struct RecencyCache<K> {
    capacity: usize,
    index: FxHashMap<K, u64>,
    order: BTreeMap<u64, K>,
    tick: u64,
    hits: u64,
    misses: u64,
}

impl<K> RecencyCache<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` keys.
    ///
    /// # Example
    ///
    /// ```
    /// use algoviz::ds::RecencyCache;
    ///
    /// let cache: RecencyCache<usize> = RecencyCache::new(8);
    /// assert_eq!(cache.capacity(), 8);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: BTreeMap::new(),
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `key` is cached. Does not update recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Records an access to `key`.
    ///
    /// On a hit the key becomes the most recently used. On a miss the key is
    /// inserted, evicting the least recently used key first if the cache is
    /// at capacity.
    pub fn access(&mut self, key: K) -> Access<K> {
        if let Some(stamp) = self.index.get_mut(&key) {
            let previous = std::mem::replace(stamp, self.tick);
            if let Some(k) = self.order.remove(&previous) {
                self.order.insert(self.tick, k);
            }
            self.tick += 1;
            self.hits += 1;
            return Access::Hit;
        }

        self.misses += 1;
        if self.capacity == 0 {
            return Access::Miss { evicted: None };
        }

        let evicted = if self.index.len() >= self.capacity {
            self.pop_lru()
        } else {
            None
        };
        if evicted.is_some() {
            debug!("recency cache full at {} keys, evicted LRU entry", self.capacity);
        }

        self.index.insert(key.clone(), self.tick);
        self.order.insert(self.tick, key);
        self.tick += 1;
        Access::Miss { evicted }
    }

    /// Borrows the least recently used key.
    pub fn peek_lru(&self) -> Option<&K> {
        self.order.values().next()
    }

    /// Removes and returns the least recently used key.
    pub fn pop_lru(&mut self) -> Option<K> {
        let (_, key) = self.order.pop_first()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Iterates cached keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.values()
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Fraction of accesses that were hits, `0.0` before any access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Drops all keys and zeroes the counters.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
        self.tick = 0;
        self.hits = 0;
        self.misses = 0;
    }

    /// Verifies that the index and the recency order agree and that the
    /// capacity bound holds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but order holds {}",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} keys exceed capacity {}",
                self.index.len(),
                self.capacity
            )));
        }
        for (stamp, key) in &self.order {
            if self.index.get(key) != Some(stamp) {
                return Err(InvariantError::new(format!(
                    "order stamp {} does not match index",
                    stamp
                )));
            }
        }
        Ok(())
    }
}
