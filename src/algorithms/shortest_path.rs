//! Single-source shortest paths (Dijkstra) over non-negative weights.
//!
//! The frontier is a [`PriorityQueue`] without decrease-key: an improved
//! distance pushes a fresh entry and the old one stays behind. What happens
//! when such a stale entry is popped is chosen by [`StalePolicy`].
//!
//! ```text
//!   next():
//!     relax(pending)             comparisons += deg(pending)
//!     pop (node, d)              stale + Skip → drop, pop again
//!     visits += 1, cache touch
//!     pending = node, yield frame
//! ```

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::algorithms::{GraphFrame, check_start};
use crate::context::RunContext;
use crate::ds::PriorityQueue;
use crate::error::VizError;
use crate::graph::Graph;
use crate::metrics::CoreMetricsRecorder;
use crate::traits::Stepper;

/// Treatment of queue entries whose priority exceeds the node's best
/// known distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Visit the node again (and relax its edges again).
    #[default]
    Revisit,
    /// Drop the entry without counting a visit.
    Skip,
}

pub struct ShortestPath<'g, 'c> {
    graph: &'g Graph,
    ctx: &'c mut RunContext,
    dist: Vec<Option<u64>>,
    queue: PriorityQueue<usize, u64>,
    pending: Option<usize>,
    policy: StalePolicy,
    stale_skipped: u64,
}

impl<'g, 'c> ShortestPath<'g, 'c> {
    /// Stepper using the default [`StalePolicy::Revisit`].
    pub fn new(graph: &'g Graph, source: usize, ctx: &'c mut RunContext) -> Result<Self, VizError> {
        Self::with_policy(graph, source, ctx, StalePolicy::default())
    }

    /// # Errors
    ///
    /// Returns [`VizError::InvalidInput`] if `source` is not a node of `graph`.
    pub fn with_policy(
        graph: &'g Graph,
        source: usize,
        ctx: &'c mut RunContext,
        policy: StalePolicy,
    ) -> Result<Self, VizError> {
        check_start(graph, source)?;
        let mut dist = vec![None; graph.node_count()];
        dist[source] = Some(0);
        let mut queue = PriorityQueue::with_capacity(graph.node_count());
        queue.push(source, 0);
        debug!("shortest_path(source = {}, policy = {:?})", source, policy);

        Ok(Self {
            graph,
            ctx,
            dist,
            queue,
            pending: None,
            policy,
            stale_skipped: 0,
        })
    }

    /// Best distances found so far; `None` means not yet reached.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.dist
    }

    /// Number of stale entries dropped under [`StalePolicy::Skip`].
    pub fn stale_skipped(&self) -> u64 {
        self.stale_skipped
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    fn relax(&mut self, node: usize) {
        let Some(base) = self.dist[node] else {
            return;
        };
        for edge in self.graph.neighbors(node) {
            self.ctx.metrics.record_comparison();
            let candidate = base + u64::from(edge.weight);
            if self.dist[edge.to].is_none_or(|d| candidate < d) {
                trace!("relax {} -> {}: {}", node, edge.to, candidate);
                self.dist[edge.to] = Some(candidate);
                self.queue.push(edge.to, candidate);
            }
        }
    }

    fn is_stale(&self, node: usize, priority: u64) -> bool {
        self.dist[node].is_some_and(|d| priority > d)
    }
}

impl Iterator for ShortestPath<'_, '_> {
    type Item = GraphFrame;

    fn next(&mut self) -> Option<GraphFrame> {
        if let Some(node) = self.pending.take() {
            self.relax(node);
        }
        loop {
            let (node, priority) = self.queue.pop().ok()?;
            if self.policy == StalePolicy::Skip && self.is_stale(node, priority) {
                self.stale_skipped += 1;
                trace!("skip stale entry ({}, {})", node, priority);
                continue;
            }
            self.ctx.metrics.record_visit();
            self.ctx.touch(node);
            self.pending = Some(node);
            debug!("shortest_path: visit {} at {}", node, priority);
            return Some(GraphFrame::single(node));
        }
    }
}

impl FusedIterator for ShortestPath<'_, '_> {}

impl Stepper for ShortestPath<'_, '_> {
    type Output = Vec<Option<u64>>;

    fn into_output(self) -> Vec<Option<u64>> {
        self.dist
    }
}

/// Computes the distance from `source` to every node; unreachable nodes
/// map to `None`.
pub fn shortest_path(
    graph: &Graph,
    source: usize,
    ctx: &mut RunContext,
    policy: StalePolicy,
) -> Result<Vec<Option<u64>>, VizError> {
    Ok(ShortestPath::with_policy(graph, source, ctx, policy)?.complete())
}
