//! Depth-first (pre-order) traversal.
//!
//! [`Dfs`] keeps an explicit stack of `(node, edge cursor)` pairs instead of
//! recursing, so deep graphs cannot exhaust the call stack. It visits nodes
//! in exactly the order of the textbook recursive formulation (first
//! unvisited neighbor first) and produces identical counter values.
//! [`dfs_recursive`] is that recursive formulation, kept for small inputs.
//!
//! ```text
//!   stack (top last)                  next()
//!   ┌────────────┬────────┐           ──────
//!   │ node 0     │ cursor 2│  ← edge 1 of 0 already examined
//!   │ node 3     │ cursor 0│  ← examine edge 0 of 3:
//!   └────────────┴────────┘       comparisons += 1
//!                                   unvisited? push + visit + yield
//!                                   exhausted? pop
//! ```

use std::iter::FusedIterator;

use log::debug;

use crate::algorithms::{GraphFrame, Traversal, check_start};
use crate::context::RunContext;
use crate::error::VizError;
use crate::graph::Graph;
use crate::metrics::CoreMetricsRecorder;
use crate::traits::Stepper;

#[derive(Debug, Clone, Copy)]
struct StackEntry {
    node: usize,
    cursor: usize,
}

pub struct Dfs<'g, 'c> {
    graph: &'g Graph,
    ctx: &'c mut RunContext,
    visited: Vec<bool>,
    stack: Vec<StackEntry>,
    start: Option<usize>,
    order: Vec<usize>,
}

impl<'g, 'c> Dfs<'g, 'c> {
    /// # Errors
    ///
    /// Returns [`VizError::InvalidInput`] if `start` is not a node of `graph`.
    pub fn new(graph: &'g Graph, start: usize, ctx: &'c mut RunContext) -> Result<Self, VizError> {
        check_start(graph, start)?;
        debug!("dfs(start = {})", start);
        Ok(Self {
            graph,
            ctx,
            visited: vec![false; graph.node_count()],
            stack: Vec::new(),
            start: Some(start),
            order: Vec::with_capacity(graph.node_count()),
        })
    }

    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Current explicit-stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn enter(&mut self, node: usize) -> GraphFrame {
        self.visited[node] = true;
        self.stack.push(StackEntry { node, cursor: 0 });
        self.ctx.metrics.record_visit();
        self.ctx.touch(node);
        self.order.push(node);
        debug!("dfs: visit {} (depth {})", node, self.stack.len());
        GraphFrame::single(node)
    }
}

impl Iterator for Dfs<'_, '_> {
    type Item = GraphFrame;

    fn next(&mut self) -> Option<GraphFrame> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }
        let graph = self.graph;
        loop {
            let top = self.stack.last_mut()?;
            let Some(&edge) = graph.neighbors(top.node).get(top.cursor) else {
                self.stack.pop();
                continue;
            };
            top.cursor += 1;
            self.ctx.metrics.record_comparison();
            if !self.visited[edge.to] {
                return Some(self.enter(edge.to));
            }
        }
    }
}

impl FusedIterator for Dfs<'_, '_> {}

impl Stepper for Dfs<'_, '_> {
    type Output = Traversal;

    fn into_output(self) -> Traversal {
        Traversal {
            order: self.order,
            visited: self.visited,
        }
    }
}

/// Runs a full depth-first traversal from `start` without rendering.
pub fn dfs(graph: &Graph, start: usize, ctx: &mut RunContext) -> Result<Traversal, VizError> {
    Ok(Dfs::new(graph, start, ctx)?.complete())
}

/// Recursive depth-first traversal.
///
/// Recursion depth equals the longest explored path, so use it only on
/// small graphs; [`dfs`] has the same behavior without that limit.
pub fn dfs_recursive(
    graph: &Graph,
    start: usize,
    ctx: &mut RunContext,
) -> Result<Traversal, VizError> {
    fn visit(graph: &Graph, node: usize, ctx: &mut RunContext, out: &mut Traversal) {
        out.visited[node] = true;
        ctx.metrics.record_visit();
        ctx.touch(node);
        out.order.push(node);
        for edge in graph.neighbors(node) {
            ctx.metrics.record_comparison();
            if !out.visited[edge.to] {
                visit(graph, edge.to, ctx, out);
            }
        }
    }

    check_start(graph, start)?;
    let mut out = Traversal {
        order: Vec::with_capacity(graph.node_count()),
        visited: vec![false; graph.node_count()],
    };
    visit(graph, start, ctx, &mut out);
    Ok(out)
}
