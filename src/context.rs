//! Mutable run context shared by every graph algorithm.
//!
//! Holds the run's [`RunMetrics`] and its [`RecencyCache`]. Steppers borrow
//! the context mutably for their lifetime, so exactly one algorithm touches
//! the shared state at a time.

use log::debug;

use crate::ds::{Access, RecencyCache};
use crate::metrics::{CoreMetricsRecorder, RunMetrics};

/// Cache capacity used by the demo run.
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

#[derive(Debug, Clone)]
pub struct RunContext {
    pub metrics: RunMetrics,
    pub cache: RecencyCache<usize>,
}

impl RunContext {
    /// Fresh metrics (start time stamped now) and an empty cache.
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            metrics: RunMetrics::new(),
            cache: RecencyCache::new(cache_capacity),
        }
    }

    /// Records a cache access for `node` and mirrors the outcome into the
    /// run metrics.
    pub fn touch(&mut self, node: usize) -> Access<usize> {
        let access = self.cache.access(node);
        match access {
            Access::Hit => self.metrics.record_cache_hit(),
            Access::Miss { evicted } => {
                self.metrics.record_cache_miss();
                if let Some(old) = evicted {
                    debug!("touch({}): evicted node {}", node, old);
                }
            },
        }
        access
    }

    /// Zeroes the metrics and empties the cache.
    pub fn reset(&mut self) {
        self.metrics.reset();
        self.cache.clear();
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsSnapshotProvider;

    #[test]
    fn touch_mirrors_cache_outcome_into_metrics() {
        let mut ctx = RunContext::new(2);
        ctx.touch(1);
        ctx.touch(1);
        ctx.touch(2);
        ctx.touch(3); // evicts 1

        let snap = ctx.metrics.snapshot();
        assert_eq!(snap.cache_hits, 1);
        assert_eq!(snap.cache_misses, 3);
        assert_eq!(ctx.cache.hits(), snap.cache_hits);
        assert_eq!(ctx.cache.misses(), snap.cache_misses);
        assert!(!ctx.cache.contains(&1));
    }

    #[test]
    fn reset_clears_both_sides() {
        let mut ctx = RunContext::default();
        ctx.touch(4);
        ctx.reset();
        assert!(ctx.cache.is_empty());
        assert_eq!(ctx.metrics.snapshot().cache_misses, 0);
        assert_eq!(ctx.cache.capacity(), DEFAULT_CACHE_CAPACITY);
    }
}
