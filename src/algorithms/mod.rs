//! Instrumented algorithm library.
//!
//! Every algorithm except the transform is a [`Stepper`](crate::traits::Stepper):
//! an iterator yielding one display frame per observable step while
//! updating the run's counters. Each module also exposes a plain function
//! that runs its stepper to the end without rendering.
//!
//! | Module          | Stepper        | Frame          | Output                  |
//! |-----------------|----------------|----------------|-------------------------|
//! | `bfs`           | `Bfs`          | `GraphFrame`   | `Traversal`             |
//! | `dfs`           | `Dfs`          | `GraphFrame`   | `Traversal`             |
//! | `shortest_path` | `ShortestPath` | `GraphFrame`   | `Vec<Option<u64>>`      |
//! | `merge_sort`    | `MergeSort`    | `ArrayFrame`   | sorted in place         |
//! | `quick_sort`    | `QuickSort`    | `ArrayFrame`   | sorted in place         |
//! | `fft`           | -              | -              | `Vec<Complex>`          |

pub mod bfs;
pub mod dfs;
pub mod fft;
pub mod merge_sort;
pub mod quick_sort;
pub mod shortest_path;

pub use bfs::{Bfs, bfs};
pub use dfs::{Dfs, dfs, dfs_recursive};
pub use fft::{Complex, fft, fft_real, fft_zero_padded, magnitudes};
pub use merge_sort::{MergeSort, merge_sort};
pub use quick_sort::{QuickSort, quick_sort};
pub use shortest_path::{ShortestPath, StalePolicy, shortest_path};

use crate::error::VizError;
use crate::graph::Graph;

/// Snapshot of a graph step: the nodes to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFrame {
    pub highlight: Vec<usize>,
}

impl GraphFrame {
    #[inline]
    pub fn single(node: usize) -> Self {
        Self {
            highlight: vec![node],
        }
    }
}

/// Snapshot of an array step: the full array plus highlighted indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayFrame<T> {
    pub values: Vec<T>,
    pub highlight: Vec<usize>,
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Nodes in the order they were visited.
    pub order: Vec<usize>,
    /// `visited[v]` is `true` iff `v` was reached from the start.
    pub visited: Vec<bool>,
}

pub(crate) fn check_start(graph: &Graph, start: usize) -> Result<(), VizError> {
    if graph.contains_node(start) {
        Ok(())
    } else {
        Err(VizError::invalid_input(format!(
            "start node {} outside 0..{}",
            start,
            graph.node_count()
        )))
    }
}
