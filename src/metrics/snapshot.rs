use std::fmt;

/// Live counter values, readable at any point of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub comparisons: u64,
    pub visits: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl CounterSnapshot {
    /// Total cache accesses recorded.
    #[inline]
    pub fn cache_accesses(&self) -> u64 {
        self.cache_hits + self.cache_misses
    }

    /// Counts accumulated between `earlier` and `self`.
    pub fn since(&self, earlier: &CounterSnapshot) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons.saturating_sub(earlier.comparisons),
            visits: self.visits.saturating_sub(earlier.visits),
            cache_hits: self.cache_hits.saturating_sub(earlier.cache_hits),
            cache_misses: self.cache_misses.saturating_sub(earlier.cache_misses),
        }
    }
}

/// Final summary of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub comparisons: u64,
    pub visits: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    // wall clock between reset() and finish()
    pub elapsed_ms: f64,
}

impl RunReport {
    pub fn counters(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons,
            visits: self.visits,
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
        }
    }

    /// Fraction of cache accesses that hit, `0.0` when the cache was never
    /// touched.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "comparisons:  {}", self.comparisons)?;
        writeln!(f, "visits:       {}", self.visits)?;
        writeln!(f, "cache hits:   {}", self.cache_hits)?;
        writeln!(f, "cache misses: {}", self.cache_misses)?;
        write!(f, "time:         {:.2} ms", self.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_counter() {
        let report = RunReport {
            comparisons: 12,
            visits: 4,
            cache_hits: 1,
            cache_misses: 3,
            elapsed_ms: 1.5,
        };
        let text = report.to_string();
        assert!(text.contains("comparisons:  12"));
        assert!(text.contains("visits:       4"));
        assert!(text.contains("cache hits:   1"));
        assert!(text.contains("cache misses: 3"));
        assert!(text.contains("1.50 ms"));
    }

    #[test]
    fn hit_rate_handles_untouched_cache() {
        assert_eq!(RunReport::default().hit_rate(), 0.0);
        let report = RunReport {
            cache_hits: 3,
            cache_misses: 1,
            ..RunReport::default()
        };
        assert!((report.hit_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(report.counters().cache_accesses(), 4);
    }

    #[test]
    fn since_subtracts_counterwise() {
        let earlier = CounterSnapshot {
            comparisons: 3,
            visits: 1,
            cache_hits: 0,
            cache_misses: 1,
        };
        let later = CounterSnapshot {
            comparisons: 10,
            visits: 4,
            cache_hits: 2,
            cache_misses: 2,
        };
        let delta = later.since(&earlier);
        assert_eq!(delta.comparisons, 7);
        assert_eq!(delta.visits, 3);
        assert_eq!(delta.cache_accesses(), 3);
        assert_eq!(earlier.since(&later), CounterSnapshot::default());
    }
}
