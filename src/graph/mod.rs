//! Weighted undirected graph with a 2-D layout.
//!
//! Adjacency is stored per node as an ordered `Vec<Edge>`; traversal order
//! in every algorithm follows that insertion order. Edges are always added
//! in both directions, so `i → j` with weight `w` implies `j → i` with `w`.
//!
//! ```
//! use algoviz::graph::{Graph, Point};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 4).unwrap();
//! graph.add_edge(1, 2, 1).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.neighbors(1).len(), 2);
//! assert_eq!(graph.position(0), Some(Point::default()));
//! ```

pub mod generator;

pub use generator::GraphGenerator;

use crate::error::{InvariantError, VizError};

/// A directed half of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u32,
}

/// Layout coordinate, only used for rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    positions: Vec<Point>,
}

impl Graph {
    /// Creates `n` isolated nodes, all positioned at the origin.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            positions: vec![Point::default(); n],
        }
    }

    /// Creates `positions.len()` isolated nodes at the given coordinates.
    pub fn with_positions(positions: Vec<Point>) -> Self {
        Self {
            adj: vec![Vec::new(); positions.len()],
            positions,
        }
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// # Errors
    ///
    /// Fails like [`add_edge`](Self::add_edge) on the first bad edge.
    pub fn from_edges(n: usize, edges: &[(usize, usize, u32)]) -> Result<Self, VizError> {
        let mut graph = Self::new(n);
        for &(a, b, w) in edges {
            graph.add_edge(a, b, w)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn contains_node(&self, node: usize) -> bool {
        node < self.adj.len()
    }

    /// Outgoing edges of `node` in insertion order; empty for unknown nodes.
    pub fn neighbors(&self, node: usize) -> &[Edge] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn position(&self, node: usize) -> Option<Point> {
        self.positions.get(node).copied()
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Adds the undirected edge `a — b` with weight `weight`.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidInput`] if either endpoint is out of range
    /// or if `a == b`.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: u32) -> Result<(), VizError> {
        let n = self.node_count();
        if a >= n || b >= n {
            return Err(VizError::invalid_input(format!(
                "edge ({}, {}) references a node outside 0..{}",
                a, b, n
            )));
        }
        if a == b {
            return Err(VizError::invalid_input(format!("self-loop on node {}", a)));
        }
        self.adj[a].push(Edge { to: b, weight });
        self.adj[b].push(Edge { to: a, weight });
        Ok(())
    }

    /// Verifies index ranges, layout size and edge symmetry.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let n = self.node_count();
        if self.positions.len() != n {
            return Err(InvariantError::new(format!(
                "{} positions for {} nodes",
                self.positions.len(),
                n
            )));
        }
        for (from, edges) in self.adj.iter().enumerate() {
            for edge in edges {
                if edge.to >= n {
                    return Err(InvariantError::new(format!(
                        "edge {} -> {} leaves the graph",
                        from, edge.to
                    )));
                }
                let forward = edges
                    .iter()
                    .filter(|e| e.to == edge.to && e.weight == edge.weight)
                    .count();
                let backward = self.adj[edge.to]
                    .iter()
                    .filter(|e| e.to == from && e.weight == edge.weight)
                    .count();
                if forward != backward {
                    return Err(InvariantError::new(format!(
                        "edge {} -> {} (w={}) has no symmetric counterpart",
                        from, edge.to, edge.weight
                    )));
                }
            }
        }
        Ok(())
    }

    /// Reachability from `start` without touching any instrumentation.
    pub fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut seen = vec![false; self.node_count()];
        if !self.contains_node(start) {
            return seen;
        }
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(node) = stack.pop() {
            for edge in self.neighbors(node) {
                if !seen[edge.to] {
                    seen[edge.to] = true;
                    stack.push(edge.to);
                }
            }
        }
        seen
    }

    #[cfg(test)]
    pub(crate) fn push_half_edge(&mut self, from: usize, to: usize, weight: u32) {
        self.adj[from].push(Edge { to, weight });
    }
}
