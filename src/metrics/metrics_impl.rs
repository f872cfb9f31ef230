//! Run-scoped counters and timestamps.
//!
//! One [`RunMetrics`] lives for a whole driver run. Construction and
//! [`reset`](RunMetrics::reset) stamp the start time,
//! [`finish`](RunMetrics::finish) stamps the end time, and
//! [`report`](RunMetrics::report) is a pure read that requires `finish()` to
//! have been called.
//!
//! ```
//! use algoviz::metrics::{CoreMetricsRecorder, RunMetrics};
//!
//! let mut metrics = RunMetrics::new();
//! metrics.record_comparison();
//! metrics.record_visit();
//! assert!(metrics.report().is_err()); // not finished yet
//!
//! metrics.finish();
//! let report = metrics.report().unwrap();
//! assert_eq!(report.comparisons, 1);
//! assert_eq!(report.visits, 1);
//! ```

use std::time::{Duration, Instant};

use crate::error::VizError;
use crate::metrics::snapshot::{CounterSnapshot, RunReport};
use crate::metrics::traits::{CoreMetricsRecorder, MetricsReset, MetricsSnapshotProvider};

#[derive(Debug, Clone)]
pub struct RunMetrics {
    pub comparisons: u64,
    pub visits: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    started: Instant,
    finished: Option<Instant>,
}

impl RunMetrics {
    /// Creates zeroed metrics with the start time stamped now.
    pub fn new() -> RunMetrics {
        Self {
            comparisons: 0,
            visits: 0,
            cache_hits: 0,
            cache_misses: 0,
            started: Instant::now(),
            finished: None,
        }
    }

    /// Zeroes every counter and stamps a fresh start time.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Stamps the end time. Calling it again moves the end time forward.
    pub fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Time between the start stamp and the end stamp, if finished.
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished
            .map(|end| end.saturating_duration_since(self.started))
    }

    /// Produces the final report.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::RunNotFinished`] if [`finish`](Self::finish) has
    /// not been called since the last reset.
    pub fn report(&self) -> Result<RunReport, VizError> {
        let elapsed = self.elapsed().ok_or(VizError::RunNotFinished)?;
        Ok(RunReport {
            comparisons: self.comparisons,
            visits: self.visits,
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        })
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMetricsRecorder for RunMetrics {
    fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    fn record_visit(&mut self) {
        self.visits += 1;
    }

    fn record_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    fn record_cache_miss(&mut self) {
        self.cache_misses += 1;
    }
}

impl MetricsSnapshotProvider<CounterSnapshot> for RunMetrics {
    fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons,
            visits: self.visits,
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
        }
    }
}

impl MetricsReset for RunMetrics {
    fn reset_metrics(&mut self) {
        self.reset();
    }
}
