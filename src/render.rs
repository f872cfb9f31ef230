//! Concrete [`Renderer`] implementations.
//!
//! | Renderer            | Output                                  |
//! |---------------------|-----------------------------------------|
//! | [`NullRenderer`]    | nothing                                 |
//! | [`RecordingRenderer`] | every call, kept in memory            |
//! | [`TextRenderer`]    | one line per frame on any `io::Write`   |

use std::io::{self, Write};

use log::warn;

use crate::graph::Graph;
pub use crate::traits::Renderer;

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    #[inline]
    fn draw_graph(&mut self, _graph: &Graph, _highlight: &[usize]) {}

    #[inline]
    fn render_array(&mut self, _values: &[i64], _highlight: &[usize]) {}
}

/// One captured renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Graph {
        nodes: usize,
        highlight: Vec<usize>,
    },
    Array {
        values: Vec<i64>,
        highlight: Vec<usize>,
    },
}

/// Keeps every call for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<RenderCall> {
        self.calls
    }

    /// Highlight sets of every graph frame, in order.
    pub fn graph_highlights(&self) -> impl Iterator<Item = &[usize]> {
        self.calls.iter().filter_map(|call| match call {
            RenderCall::Graph { highlight, .. } => Some(highlight.as_slice()),
            RenderCall::Array { .. } => None,
        })
    }

    /// Number of array frames captured.
    pub fn array_frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::Array { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_graph(&mut self, graph: &Graph, highlight: &[usize]) {
        self.calls.push(RenderCall::Graph {
            nodes: graph.node_count(),
            highlight: highlight.to_vec(),
        });
    }

    fn render_array(&mut self, values: &[i64], highlight: &[usize]) {
        self.calls.push(RenderCall::Array {
            values: values.to_vec(),
            highlight: highlight.to_vec(),
        });
    }
}

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Writes a one-line text picture of every frame.
///
/// Graph frames list the edge count, then every node, with highlighted
/// nodes in brackets:
///
/// ```text
/// graph  edges=3  0 [1] 2 3
/// ```
///
/// Array frames draw one bar glyph per value, scaled between the minimum
/// and maximum, followed by the highlighted indices:
///
/// ```text
/// array  ▁▂▄█▆  @ 1,3
/// ```
///
/// The renderer contract has no error channel. The first write error is
/// kept (see [`take_error`](Self::take_error)) and later frames are
/// dropped.
pub struct TextRenderer<W: Write> {
    writer: W,
    error: Option<io::Error>,
    lines: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
            lines: 0,
        }
    }

    /// Lines successfully written.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Returns the write error that stopped output, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.writer, "{}", line).and_then(|()| self.writer.flush()) {
            Ok(()) => self.lines += 1,
            Err(err) => {
                warn!("text renderer stopped: {}", err);
                self.error = Some(err);
            },
        }
    }
}

fn bar_line(values: &[i64]) -> String {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };
    let span = max.abs_diff(min) as f64;
    values
        .iter()
        .map(|&v| {
            if span == 0.0 {
                BARS[BARS.len() - 1]
            } else {
                let level = (v.abs_diff(min) as f64 / span * (BARS.len() - 1) as f64).round();
                BARS[level as usize]
            }
        })
        .collect()
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_graph(&mut self, graph: &Graph, highlight: &[usize]) {
        let mut line = format!("graph  edges={} ", graph.edge_count());
        for node in 0..graph.node_count() {
            if highlight.contains(&node) {
                line.push_str(&format!(" [{}]", node));
            } else {
                line.push_str(&format!(" {}", node));
            }
        }
        self.emit(&line);
    }

    fn render_array(&mut self, values: &[i64], highlight: &[usize]) {
        let line = format!("array  {}  @ {}", bar_line(values), join_indices(highlight));
        self.emit(&line);
    }
}
