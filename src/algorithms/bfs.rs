//! Breadth-first traversal.
//!
//! The frontier is a FIFO queue. A node is marked visited when it is
//! discovered, so it enters the queue at most once. Each pop counts one
//! visit and one cache access and yields a frame; the popped node's edges
//! are examined at the start of the following step, one comparison per
//! edge, so the frame is shown before the node is expanded.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use log::debug;

use crate::algorithms::{GraphFrame, Traversal, check_start};
use crate::context::RunContext;
use crate::error::VizError;
use crate::graph::Graph;
use crate::metrics::CoreMetricsRecorder;
use crate::traits::Stepper;

pub struct Bfs<'g, 'c> {
    graph: &'g Graph,
    ctx: &'c mut RunContext,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    pending: Option<usize>,
    order: Vec<usize>,
}

impl<'g, 'c> Bfs<'g, 'c> {
    /// # Errors
    ///
    /// Returns [`VizError::InvalidInput`] if `start` is not a node of `graph`.
    pub fn new(graph: &'g Graph, start: usize, ctx: &'c mut RunContext) -> Result<Self, VizError> {
        check_start(graph, start)?;
        let mut visited = vec![false; graph.node_count()];
        visited[start] = true;
        let mut queue = VecDeque::with_capacity(graph.node_count());
        queue.push_back(start);
        debug!("bfs(start = {})", start);

        Ok(Self {
            graph,
            ctx,
            visited,
            queue,
            pending: None,
            order: Vec::with_capacity(graph.node_count()),
        })
    }

    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    fn expand(&mut self, node: usize) {
        for edge in self.graph.neighbors(node) {
            self.ctx.metrics.record_comparison();
            if !self.visited[edge.to] {
                self.visited[edge.to] = true;
                self.queue.push_back(edge.to);
            }
        }
    }
}

impl Iterator for Bfs<'_, '_> {
    type Item = GraphFrame;

    fn next(&mut self) -> Option<GraphFrame> {
        if let Some(node) = self.pending.take() {
            self.expand(node);
        }
        let node = self.queue.pop_front()?;
        self.ctx.metrics.record_visit();
        self.ctx.touch(node);
        self.order.push(node);
        self.pending = Some(node);
        debug!("bfs: visit {} (frontier {})", node, self.queue.len());
        Some(GraphFrame::single(node))
    }
}

impl FusedIterator for Bfs<'_, '_> {}

impl Stepper for Bfs<'_, '_> {
    type Output = Traversal;

    fn into_output(self) -> Traversal {
        Traversal {
            order: self.order,
            visited: self.visited,
        }
    }
}

/// Runs a full breadth-first traversal from `start` without rendering.
pub fn bfs(graph: &Graph, start: usize, ctx: &mut RunContext) -> Result<Traversal, VizError> {
    Ok(Bfs::new(graph, start, ctx)?.complete())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsSnapshotProvider;
    use test_log::test;

    fn path_with_branch() -> Graph {
        // 0 - 1 - 3
        //  \
        //   2 - 4
        Graph::from_edges(6, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1)]).unwrap()
    }

    #[test]
    fn visits_level_by_level() {
        let graph = path_with_branch();
        let mut ctx = RunContext::new(8);
        let traversal = bfs(&graph, 0, &mut ctx).unwrap();

        assert_eq!(traversal.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            traversal.visited,
            vec![true, true, true, true, true, false]
        );
    }

    #[test]
    fn counts_every_examined_edge() {
        let graph = path_with_branch();
        let mut ctx = RunContext::new(8);
        bfs(&graph, 0, &mut ctx).unwrap();

        let snap = ctx.metrics.snapshot();
        assert_eq!(snap.visits, 5);
        // each undirected edge is examined from both ends
        assert_eq!(snap.comparisons, 8);
        assert_eq!(snap.cache_misses, 5);
        assert_eq!(snap.cache_hits, 0);
    }

    #[test]
    fn frame_precedes_expansion() {
        let graph = path_with_branch();
        let mut ctx = RunContext::new(8);
        let mut stepper = Bfs::new(&graph, 0, &mut ctx).unwrap();

        assert_eq!(stepper.next(), Some(GraphFrame::single(0)));
        // node 0 not expanded yet
        assert_eq!(stepper.visited().iter().filter(|&&v| v).count(), 1);
        assert_eq!(stepper.next(), Some(GraphFrame::single(1)));
        assert_eq!(stepper.visited().iter().filter(|&&v| v).count(), 3);
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let graph = Graph::new(3);
        let mut ctx = RunContext::new(2);
        let traversal = bfs(&graph, 2, &mut ctx).unwrap();
        assert_eq!(traversal.order, vec![2]);
        assert_eq!(traversal.visited, vec![false, false, true]);
    }

    #[test]
    fn rejects_out_of_range_start() {
        let graph = Graph::new(2);
        let mut ctx = RunContext::new(2);
        assert!(matches!(
            bfs(&graph, 2, &mut ctx),
            Err(VizError::InvalidInput(_))
        ));
    }

    #[test]
    fn exhausted_stepper_stays_exhausted() {
        let graph = Graph::from_edges(2, &[(0, 1, 3)]).unwrap();
        let mut ctx = RunContext::new(2);
        let mut stepper = Bfs::new(&graph, 0, &mut ctx).unwrap();
        assert_eq!(stepper.by_ref().count(), 2);
        assert_eq!(stepper.next(), None);
        assert_eq!(stepper.next(), None);
    }
}
