//! # Demo Run
//!
//! Generates a graph, then animates every algorithm in a fixed order over
//! one shared [`RunContext`], and finishes with a [`RunReport`].
//!
//! ```text
//!   RunConfig ──validate──▶ GraphGenerator ──▶ Graph
//!                                               │
//!        ┌──────────────────────────────────────┘
//!        ▼
//!   Bfs ─▶ Dfs ─▶ ShortestPath ─▶ MergeSort ─▶ QuickSort ─▶ fft
//!    │      │         │              │             │         │
//!    └──────┴─────────┴──── RunContext (metrics + cache) ────┘
//!                                               │
//!                                    finish() ─▶ RunReport
//! ```
//!
//! ## Defaults
//!
//! | Setting          | Value  |
//! |------------------|--------|
//! | nodes            | 20     |
//! | edge density     | 0.25   |
//! | cache capacity   | 8      |
//! | sort input       | `0..30`|
//! | signal           | `0..32`|
//! | graph step delay | 120 ms |
//! | array step delay | 20 ms  |
//!
//! ## Example
//!
//! ```
//! use algoviz::driver::{RunConfig, run};
//! use algoviz::render::NullRenderer;
//!
//! let config = RunConfig::builder()
//!     .seed(42)
//!     .no_delay()
//!     .try_build()
//!     .unwrap();
//! let summary = run(&config, NullRenderer).unwrap();
//! assert_eq!(summary.phases.len(), 6);
//! println!("{}", summary.report);
//! ```

use std::fmt;
use std::time::Duration;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::algorithms::{
    Bfs, Complex, Dfs, MergeSort, QuickSort, ShortestPath, StalePolicy, Traversal, fft_real,
};
use crate::animation::{ARRAY_STEP_DELAY, Animator, GRAPH_STEP_DELAY, Pacer};
use crate::context::{DEFAULT_CACHE_CAPACITY, RunContext};
use crate::error::{ConfigError, VizError};
use crate::graph::{Graph, GraphGenerator};
use crate::metrics::{CounterSnapshot, MetricsSnapshotProvider, RunReport};
use crate::traits::Renderer;

pub const DEFAULT_NODE_COUNT: usize = 20;
pub const DEFAULT_EDGE_DENSITY: f64 = 0.25;
pub const DEFAULT_SORT_LEN: usize = 30;
pub const DEFAULT_SIGNAL_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters of a demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub node_count: usize,
    pub edge_density: f64,
    pub cache_capacity: usize,
    pub sort_len: usize,
    pub signal_len: usize,
    /// Seed for graph generation and shuffling; `None` draws from the OS.
    pub seed: Option<u64>,
    pub start: usize,
    pub graph_delay: Duration,
    pub array_delay: Duration,
    /// Shuffle the sort input instead of sorting `0..sort_len` as given.
    pub shuffle: bool,
    pub stale_policy: StalePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            edge_density: DEFAULT_EDGE_DENSITY,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            sort_len: DEFAULT_SORT_LEN,
            signal_len: DEFAULT_SIGNAL_LEN,
            seed: None,
            start: 0,
            graph_delay: GRAPH_STEP_DELAY,
            array_delay: ARRAY_STEP_DELAY,
            shuffle: false,
            stale_policy: StalePolicy::default(),
        }
    }
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count == 0 {
            return Err(ConfigError::new("node_count must be greater than zero"));
        }
        if !self.edge_density.is_finite() || !(0.0..=1.0).contains(&self.edge_density) {
            return Err(ConfigError::new(format!(
                "edge_density must be in [0.0, 1.0], got {}",
                self.edge_density
            )));
        }
        if self.start >= self.node_count {
            return Err(ConfigError::new(format!(
                "start must be below node_count ({}), got {}",
                self.node_count, self.start
            )));
        }
        if self.sort_len == 0 {
            return Err(ConfigError::new("sort_len must be greater than zero"));
        }
        if !self.signal_len.is_power_of_two() {
            return Err(ConfigError::new(format!(
                "signal_len must be a power of two, got {}",
                self.signal_len
            )));
        }
        Ok(())
    }
}

/// Fluent construction of a [`RunConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn node_count(mut self, node_count: usize) -> Self {
        self.config.node_count = node_count;
        self
    }

    pub fn edge_density(mut self, edge_density: f64) -> Self {
        self.config.edge_density = edge_density;
        self
    }

    pub fn cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.config.cache_capacity = cache_capacity;
        self
    }

    pub fn sort_len(mut self, sort_len: usize) -> Self {
        self.config.sort_len = sort_len;
        self
    }

    pub fn signal_len(mut self, signal_len: usize) -> Self {
        self.config.signal_len = signal_len;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn start(mut self, start: usize) -> Self {
        self.config.start = start;
        self
    }

    pub fn graph_delay(mut self, delay: Duration) -> Self {
        self.config.graph_delay = delay;
        self
    }

    pub fn array_delay(mut self, delay: Duration) -> Self {
        self.config.array_delay = delay;
        self
    }

    /// Turns off every pause.
    pub fn no_delay(self) -> Self {
        self.graph_delay(Duration::ZERO).array_delay(Duration::ZERO)
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    pub fn stale_policy(mut self, policy: StalePolicy) -> Self {
        self.config.stale_policy = policy;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid.
    pub fn try_build(self) -> Result<RunConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Bfs,
    Dfs,
    ShortestPath,
    MergeSort,
    QuickSort,
    Fft,
}

impl Phase {
    /// Every phase in run order.
    pub const ALL: [Phase; 6] = [
        Phase::Bfs,
        Phase::Dfs,
        Phase::ShortestPath,
        Phase::MergeSort,
        Phase::QuickSort,
        Phase::Fft,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Bfs => "bfs",
            Phase::Dfs => "dfs",
            Phase::ShortestPath => "shortest_path",
            Phase::MergeSort => "merge_sort",
            Phase::QuickSort => "quick_sort",
            Phase::Fft => "fft",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frames shown and counters accumulated by one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStats {
    pub phase: Phase,
    pub frames: u64,
    pub counters: CounterSnapshot,
}

impl fmt::Display for PhaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} frames={:<5} comparisons={:<6} visits={:<4} hits={:<4} misses={}",
            self.phase.name(),
            self.frames,
            self.counters.comparisons,
            self.counters.visits,
            self.counters.cache_hits,
            self.counters.cache_misses
        )
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub graph: Graph,
    pub bfs: Traversal,
    pub dfs: Traversal,
    pub distances: Vec<Option<u64>>,
    pub merge_sorted: Vec<i64>,
    pub quick_sorted: Vec<i64>,
    pub spectrum: Vec<Complex>,
    pub phases: Vec<PhaseStats>,
    pub report: RunReport,
}

impl RunSummary {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseStats> {
        self.phases.iter().find(|stats| stats.phase == phase)
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

struct Session<R> {
    ctx: RunContext,
    animator: Animator<R>,
    phases: Vec<PhaseStats>,
}

impl<R: Renderer> Session<R> {
    fn phase<T>(
        &mut self,
        phase: Phase,
        body: impl FnOnce(&mut RunContext, &mut Animator<R>) -> Result<T, VizError>,
    ) -> Result<T, VizError> {
        info!("phase {} started", phase);
        let counters_before = self.ctx.metrics.snapshot();
        let frames_before = self.animator.frames_shown();

        let out = body(&mut self.ctx, &mut self.animator)?;

        let stats = PhaseStats {
            phase,
            frames: self.animator.frames_shown() - frames_before,
            counters: self.ctx.metrics.snapshot().since(&counters_before),
        };
        info!("{}", stats);
        self.phases.push(stats);
        Ok(out)
    }
}

fn sort_input(config: &RunConfig) -> Vec<i64> {
    let mut values: Vec<i64> = (0..config.sort_len as i64).collect();
    if config.shuffle {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
            None => SmallRng::from_os_rng(),
        };
        values.shuffle(&mut rng);
    }
    values
}

/// Performs a complete demo run, painting every frame on `renderer`.
///
/// # Errors
///
/// Returns [`VizError::InvalidInput`] if `config` is invalid; any error
/// from an algorithm aborts the run.
pub fn run<R: Renderer>(config: &RunConfig, renderer: R) -> Result<RunSummary, VizError> {
    config.validate()?;

    let mut generator = match config.seed {
        Some(seed) => GraphGenerator::seeded(seed),
        None => GraphGenerator::from_entropy(),
    };
    let graph = generator.generate(config.node_count, config.edge_density)?;
    info!(
        "generated graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut session = Session {
        ctx: RunContext::new(config.cache_capacity),
        animator: Animator::with_pacers(
            renderer,
            Pacer::new(config.graph_delay),
            Pacer::new(config.array_delay),
        ),
        phases: Vec::with_capacity(Phase::ALL.len()),
    };
    session.animator.show_graph(&graph);

    let bfs = session.phase(Phase::Bfs, |ctx, animator| {
        let stepper = Bfs::new(&graph, config.start, ctx)?;
        Ok(animator.play_graph(&graph, stepper))
    })?;

    let dfs = session.phase(Phase::Dfs, |ctx, animator| {
        let stepper = Dfs::new(&graph, config.start, ctx)?;
        Ok(animator.play_graph(&graph, stepper))
    })?;

    let distances = session.phase(Phase::ShortestPath, |ctx, animator| {
        let stepper = ShortestPath::with_policy(&graph, config.start, ctx, config.stale_policy)?;
        Ok(animator.play_graph(&graph, stepper))
    })?;
    let unreachable = distances.iter().filter(|d| d.is_none()).count();
    if unreachable > 0 {
        warn!("{} node(s) unreachable from {}", unreachable, config.start);
    }

    let merge_sorted = session.phase(Phase::MergeSort, |ctx, animator| {
        let mut values = sort_input(config);
        animator.play_array(MergeSort::new(&mut values, &mut ctx.metrics));
        Ok(values)
    })?;

    let quick_sorted = session.phase(Phase::QuickSort, |ctx, animator| {
        let mut values = sort_input(config);
        animator.play_array(QuickSort::new(&mut values, &mut ctx.metrics));
        Ok(values)
    })?;

    let spectrum = session.phase(Phase::Fft, |ctx, _| {
        let signal: Vec<f64> = (0..config.signal_len).map(|i| i as f64).collect();
        fft_real(&signal, &mut ctx.metrics)
    })?;

    session.ctx.metrics.finish();
    let report = session.ctx.metrics.report()?;
    info!(
        "run finished in {:.2} ms ({} frames)",
        report.elapsed_ms,
        session.animator.frames_shown()
    );

    Ok(RunSummary {
        graph,
        bfs,
        dfs,
        distances,
        merge_sorted,
        quick_sorted,
        spectrum,
        phases: session.phases,
        report,
    })
}
