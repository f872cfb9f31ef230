//! algoviz: instrumented, step-by-step classic algorithms with a pluggable
//! renderer.
//!
//! Graph traversals, Dijkstra, merge sort and quick sort are iterators of
//! display frames ([`traits::Stepper`]); an [`animation::Animator`] paints
//! each frame through a [`traits::Renderer`] and paces the run. Every
//! algorithm reports into shared run metrics and a small recency cache
//! ([`context::RunContext`]). [`driver::run`] performs the full demo.

pub mod algorithms;
pub mod animation;
pub mod context;
pub mod driver;
pub mod ds;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod prelude;
pub mod render;
pub mod traits;
