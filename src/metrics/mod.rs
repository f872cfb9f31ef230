pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::RunMetrics;
pub use snapshot::{CounterSnapshot, RunReport};
pub use traits::{CoreMetricsRecorder, MetricsExporter, MetricsReset, MetricsSnapshotProvider};
