//! Frame pacing.
//!
//! ```text
//!   Stepper ──next()──▶ frame ──▶ Renderer ──▶ Pacer::pause() ──┐
//!      ▲                                                         │
//!      └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`Animator`] pulls frames from a stepper, hands each one to its
//! renderer and then sleeps for the pacer's delay. Everything runs on the
//! calling thread; a zero delay turns the sleep off.

use std::thread;
use std::time::Duration;

use log::trace;

use crate::algorithms::{ArrayFrame, GraphFrame};
use crate::graph::Graph;
use crate::traits::{Renderer, Stepper};

/// Pause after each graph frame.
pub const GRAPH_STEP_DELAY: Duration = Duration::from_millis(120);
/// Pause after each array frame.
pub const ARRAY_STEP_DELAY: Duration = Duration::from_millis(20);
/// Delay of a pacer built with [`Pacer::default`].
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// A pacer that never sleeps.
    pub const fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_disabled(&self) -> bool {
        self.delay.is_zero()
    }

    /// Changes the delay for every later pause.
    pub fn set_speed(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Blocks the current thread for the configured delay.
    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

/// Drives steppers frame by frame into a renderer.
#[derive(Debug)]
pub struct Animator<R> {
    renderer: R,
    graph_pacer: Pacer,
    array_pacer: Pacer,
    frames_shown: u64,
}

impl<R: Renderer> Animator<R> {
    /// Animator with the standard graph and array delays.
    pub fn new(renderer: R) -> Self {
        Self::with_pacers(
            renderer,
            Pacer::new(GRAPH_STEP_DELAY),
            Pacer::new(ARRAY_STEP_DELAY),
        )
    }

    pub fn with_pacers(renderer: R, graph_pacer: Pacer, array_pacer: Pacer) -> Self {
        Self {
            renderer,
            graph_pacer,
            array_pacer,
            frames_shown: 0,
        }
    }

    /// Animator that renders every frame without sleeping.
    pub fn unpaced(renderer: R) -> Self {
        Self::with_pacers(renderer, Pacer::disabled(), Pacer::disabled())
    }

    /// Paints `graph` with nothing highlighted, without pausing.
    pub fn show_graph(&mut self, graph: &Graph) {
        self.renderer.draw_graph(graph, &[]);
    }

    /// Plays every frame of a graph stepper and returns its output.
    pub fn play_graph<S>(&mut self, graph: &Graph, mut stepper: S) -> S::Output
    where
        S: Stepper<Item = GraphFrame>,
    {
        for frame in stepper.by_ref() {
            self.renderer.draw_graph(graph, &frame.highlight);
            self.frames_shown += 1;
            trace!("graph frame {}: {:?}", self.frames_shown, frame.highlight);
            self.graph_pacer.pause();
        }
        stepper.into_output()
    }

    /// Plays every frame of an array stepper and returns its output.
    pub fn play_array<S>(&mut self, mut stepper: S) -> S::Output
    where
        S: Stepper<Item = ArrayFrame<i64>>,
    {
        for frame in stepper.by_ref() {
            self.renderer.render_array(&frame.values, &frame.highlight);
            self.frames_shown += 1;
            trace!("array frame {}: {:?}", self.frames_shown, frame.highlight);
            self.array_pacer.pause();
        }
        stepper.into_output()
    }

    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    pub fn graph_pacer_mut(&mut self) -> &mut Pacer {
        &mut self.graph_pacer
    }

    pub fn array_pacer_mut(&mut self) -> &mut Pacer {
        &mut self.array_pacer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::algorithms::{Bfs, QuickSort};
    use crate::context::RunContext;
    use crate::metrics::RunMetrics;
    use crate::render::{RecordingRenderer, RenderCall};

    #[test]
    fn pacer_sleeps_for_its_delay() {
        let pacer = Pacer::from_millis(5);
        let start = Instant::now();
        pacer.pause();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn set_speed_changes_delay() {
        let mut pacer = Pacer::default();
        assert_eq!(pacer.delay(), DEFAULT_STEP_DELAY);
        pacer.set_speed(Duration::ZERO);
        assert!(pacer.is_disabled());
    }

    #[test]
    fn plays_graph_frames_in_order() {
        let graph = Graph::from_edges(3, &[(0, 1, 1), (0, 2, 1)]).unwrap();
        let mut ctx = RunContext::new(4);
        let mut animator = Animator::unpaced(RecordingRenderer::new());

        animator.show_graph(&graph);
        let stepper = Bfs::new(&graph, 0, &mut ctx).unwrap();
        let traversal = animator.play_graph(&graph, stepper);

        assert_eq!(traversal.order, vec![0, 1, 2]);
        assert_eq!(animator.frames_shown(), 3);
        let highlights: Vec<Vec<usize>> = animator
            .renderer()
            .graph_highlights()
            .map(<[usize]>::to_vec)
            .collect();
        assert_eq!(highlights, vec![vec![], vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn plays_array_frames() {
        let mut values = vec![3, 1, 2];
        let mut metrics = RunMetrics::new();
        let mut animator = Animator::unpaced(RecordingRenderer::new());

        let sorted = animator.play_array(QuickSort::new(&mut values, &mut metrics));
        assert_eq!(sorted, &[1, 2, 3]);
        assert_eq!(animator.frames_shown(), 1);
        assert_eq!(
            animator.renderer().calls(),
            &[RenderCall::Array {
                values: vec![1, 3, 2],
                highlight: vec![0, 1],
            }]
        );
    }

    #[test]
    fn pacers_and_renderer_are_adjustable() {
        let mut animator = Animator::new(RecordingRenderer::new());
        animator.graph_pacer_mut().set_speed(Duration::ZERO);
        animator.array_pacer_mut().set_speed(Duration::ZERO);

        let graph = Graph::new(2);
        animator.show_graph(&graph);
        animator.renderer_mut().clear();

        let mut values = vec![3, 1, 2];
        let mut metrics = RunMetrics::new();
        let start = Instant::now();
        animator.play_array(QuickSort::new(&mut values, &mut metrics));
        assert!(start.elapsed() < ARRAY_STEP_DELAY * 10);

        let calls = animator.into_renderer().into_calls();
        assert_eq!(
            calls,
            vec![RenderCall::Array {
                values: vec![1, 3, 2],
                highlight: vec![0, 1],
            }]
        );
    }
}
