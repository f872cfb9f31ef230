//! Random weighted graph generation.
//!
//! Every unordered pair `(i, j)` with `i < j` is included independently
//! with probability `edge_density` and gets an integer weight in `[1, 10]`.
//! Pairs are visited in lexicographic order, so every adjacency list ends up
//! sorted by neighbor index.
//! Node positions are drawn uniformly from `[50, 850) × [50, 450)`.
//!
//! ```
//! use algoviz::graph::GraphGenerator;
//!
//! let mut generator = GraphGenerator::seeded(7);
//! let graph = generator.generate(4, 1.0).unwrap();
//! assert_eq!(graph.edge_count(), 6); // complete graph
//! ```

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::VizError;
use crate::graph::{Graph, Point};

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 10;

const LAYOUT_ORIGIN: Point = Point { x: 50.0, y: 50.0 };
const LAYOUT_WIDTH: f64 = 800.0;
const LAYOUT_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone)]
pub struct GraphGenerator {
    rng: SmallRng,
}

impl GraphGenerator {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic generator; equal seeds produce equal graphs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generates a random undirected graph.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidInput`] if `edge_density` is not a finite
    /// value in `[0.0, 1.0]`.
    pub fn generate(&mut self, node_count: usize, edge_density: f64) -> Result<Graph, VizError> {
        if !edge_density.is_finite() || !(0.0..=1.0).contains(&edge_density) {
            return Err(VizError::invalid_input(format!(
                "edge_density must be in [0.0, 1.0], got {}",
                edge_density
            )));
        }

        let positions = (0..node_count)
            .map(|_| Point {
                x: LAYOUT_ORIGIN.x + self.rng.random::<f64>() * LAYOUT_WIDTH,
                y: LAYOUT_ORIGIN.y + self.rng.random::<f64>() * LAYOUT_HEIGHT,
            })
            .collect();
        let mut graph = Graph::with_positions(positions);

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if self.rng.random::<f64>() < edge_density {
                    let weight = self.rng.random_range(MIN_WEIGHT..=MAX_WEIGHT);
                    graph.add_edge(i, j, weight)?;
                }
            }
        }

        debug!(
            "generate(node_count = {}, edge_density = {}) -> {} edges",
            node_count,
            edge_density,
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_density_yields_complete_graph() {
        let graph = GraphGenerator::seeded(1).generate(5, 1.0).unwrap();
        assert_eq!(graph.edge_count(), 10);
        for node in 0..5 {
            let targets: Vec<usize> = graph.neighbors(node).iter().map(|e| e.to).collect();
            let expected: Vec<usize> = (0..5).filter(|&t| t != node).collect();
            assert_eq!(targets, expected);
        }
        graph.check_invariants().unwrap();
    }

    #[test]
    fn zero_density_yields_no_edges() {
        let graph = GraphGenerator::seeded(1).generate(6, 0.0).unwrap();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn weights_and_positions_stay_in_range() {
        let graph = GraphGenerator::seeded(99).generate(30, 0.5).unwrap();
        for node in 0..graph.node_count() {
            for edge in graph.neighbors(node) {
                assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&edge.weight));
            }
        }
        for p in graph.positions() {
            assert!((50.0..850.0).contains(&p.x));
            assert!((50.0..450.0).contains(&p.y));
        }
        graph.check_invariants().unwrap();
    }

    #[test]
    fn same_seed_same_graph() {
        let a = GraphGenerator::seeded(42).generate(12, 0.3).unwrap();
        let b = GraphGenerator::seeded(42).generate(12, 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_density_out_of_range() {
        let mut generator = GraphGenerator::seeded(0);
        assert!(generator.generate(3, 1.5).is_err());
        assert!(generator.generate(3, -0.1).is_err());
        assert!(generator.generate(3, f64::NAN).is_err());
    }
}
