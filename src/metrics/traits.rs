//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* into small traits so
//! the algorithm steppers only ever see the write side.
//!
//! ## Architecture
//!
//! ```text
//!              ┌─────────────────────────────────────┐
//!              │        CoreMetricsRecorder          │
//!              │  record_comparison / record_visit   │
//!              │  record_cache_hit / record_cache_miss│
//!              └──────────────────┬──────────────────┘
//!                                 │ implemented by
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   RunMetrics    │
//!                        └────────┬────────┘
//!                                 │
//!          ┌──────────────────────┼──────────────────────┐
//!          ▼                      ▼                      ▼
//!  ┌───────────────────┐ ┌──────────────────┐ ┌────────────────────────┐
//!  │MetricsSnapshot-   │ │  MetricsReset    │ │ MetricsExporter<S>     │
//!  │Provider<S>        │ │  (between runs)  │ │ (text / Prometheus)    │
//!  └───────────────────┘ └──────────────────┘ └────────────────────────┘
//! ```
//!
//! ## Design Goals
//! - **Single responsibility**: recorders only write counters; providers only
//!   read; exporters only publish.
//! - **Monotonic counters**: nothing in the recorder API decrements.

/// Counters every instrumented algorithm writes to.
pub trait CoreMetricsRecorder {
    /// One element comparison, edge examination, or (for the FFT) one
    /// butterfly combine.
    fn record_comparison(&mut self);
    /// One node visit (a frontier pop in the graph algorithms).
    fn record_visit(&mut self);
    fn record_cache_hit(&mut self);
    fn record_cache_miss(&mut self);
}

/// Snapshot provider for tests and the driver.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between runs.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish a snapshot to an output sink.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
