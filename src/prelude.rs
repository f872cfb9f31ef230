pub use crate::algorithms::{
    ArrayFrame, Bfs, Complex, Dfs, GraphFrame, MergeSort, QuickSort, ShortestPath, StalePolicy,
    Traversal,
};
pub use crate::animation::{Animator, Pacer};
pub use crate::context::RunContext;
pub use crate::driver::{Phase, RunConfig, RunSummary, run};
pub use crate::ds::{Access, PriorityQueue, RecencyCache};
pub use crate::error::{ConfigError, InvariantError, VizError};
pub use crate::graph::{Graph, GraphGenerator};
pub use crate::metrics::{
    CoreMetricsRecorder, CounterSnapshot, MetricsSnapshotProvider, RunMetrics, RunReport,
};
pub use crate::render::{NullRenderer, RecordingRenderer, TextRenderer};
pub use crate::traits::{Renderer, Stepper};
