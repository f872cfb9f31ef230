//! # Trait Seams
//!
//! Two traits connect the algorithm library to the outside world.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────┐        ┌──────────────────────────────┐
//!   │ Stepper: Iterator            │        │ Renderer                     │
//!   │                              │        │                              │
//!   │  next() → frame              │ frames │  draw_graph(&Graph, &[usize])│
//!   │  into_output() → result      │ ─────▶ │  render_array(&[i64],&[usize])│
//!   │  complete() → result         │Animator│                              │
//!   └──────────────────────────────┘        └──────────────────────────────┘
//!     Bfs, Dfs, ShortestPath,                 NullRenderer, TextRenderer,
//!     MergeSort, QuickSort                    RecordingRenderer
//! ```
//!
//! A [`Stepper`] is a lazy, finite sequence of display frames. Each call to
//! `next()` advances the algorithm by one observable step and updates the
//! run instrumentation. Restarting means constructing a new stepper.
//!
//! A [`Renderer`] paints a snapshot. It returns nothing; painting is a pure
//! side effect and never influences the algorithm.
//!
//! ## Example Usage
//!
//! ```
//! use algoviz::algorithms::bfs::Bfs;
//! use algoviz::context::RunContext;
//! use algoviz::graph::Graph;
//! use algoviz::traits::Stepper;
//!
//! let graph = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 1)]).unwrap();
//! let mut ctx = RunContext::new(4);
//!
//! let mut bfs = Bfs::new(&graph, 0, &mut ctx).unwrap();
//! let first = bfs.next().unwrap();
//! assert_eq!(first.highlight, vec![0]);
//!
//! // finish the remaining steps without rendering
//! let traversal = bfs.complete();
//! assert_eq!(traversal.order, vec![0, 1, 2]);
//! ```

use crate::graph::Graph;

/// An algorithm advanced one observable step at a time.
pub trait Stepper: Iterator + Sized {
    /// What the algorithm computes (visit order, distances, sorted values).
    type Output;

    /// Returns the result accumulated so far.
    ///
    /// Call after the iterator is exhausted, or use
    /// [`complete`](Self::complete) to drain it first.
    fn into_output(self) -> Self::Output;

    /// Runs every remaining step, discarding frames, and returns the result.
    fn complete(mut self) -> Self::Output {
        self.by_ref().for_each(drop);
        self.into_output()
    }
}

/// Paints graph and array snapshots on some drawing surface.
pub trait Renderer {
    /// Paints every edge, then every node; nodes in `highlight` are drawn
    /// distinctly.
    fn draw_graph(&mut self, graph: &Graph, highlight: &[usize]);

    /// Paints the array with the indices in `highlight` distinguished.
    fn render_array(&mut self, values: &[i64], highlight: &[usize]);
}

impl<R> Renderer for &mut R
where
    R: Renderer + ?Sized,
{
    fn draw_graph(&mut self, graph: &Graph, highlight: &[usize]) {
        (**self).draw_graph(graph, highlight);
    }

    fn render_array(&mut self, values: &[i64], highlight: &[usize]) {
        (**self).render_array(values, highlight);
    }
}

impl<R> Renderer for Box<R>
where
    R: Renderer + ?Sized,
{
    fn draw_graph(&mut self, graph: &Graph, highlight: &[usize]) {
        (**self).draw_graph(graph, highlight);
    }

    fn render_array(&mut self, values: &[i64], highlight: &[usize]) {
        (**self).render_array(values, highlight);
    }
}
