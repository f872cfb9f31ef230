//! In-place quick sort with Lomuto partitioning.
//!
//! Pending ranges live on an explicit stack instead of the call stack, so
//! already-sorted input (the worst case for a last-element pivot) cannot
//! overflow it.
//!
//! ```text
//!   partition(low..=high), pivot = values[high]
//!
//!   low        i            j          high
//!   ┌──────────┬────────────┬──────────┬───┐
//!   │  < pivot │  >= pivot  │ unseen   │ p │
//!   └──────────┴────────────┴──────────┴───┘
//!
//!   values[j] < pivot  →  swap(i, j), yield frame [i, j], i += 1
//!   j == high          →  swap(i, high); push right, then left
//! ```
//!
//! The left partition is always finished before the right one. The final
//! pivot placement does not yield a frame.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::algorithms::ArrayFrame;
use crate::metrics::CoreMetricsRecorder;
use crate::traits::Stepper;

#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    i: usize,
    j: usize,
}

impl Partition {
    fn new(low: usize, high: usize) -> Self {
        Self {
            low,
            high,
            i: low,
            j: low,
        }
    }
}

pub struct QuickSort<'a, 'm, T, M> {
    values: &'a mut [T],
    metrics: &'m mut M,
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl<'a, 'm, T, M> QuickSort<'a, 'm, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    pub fn new(values: &'a mut [T], metrics: &'m mut M) -> Self {
        debug!("quick_sort(len = {})", values.len());
        let mut ranges = Vec::new();
        if values.len() > 1 {
            ranges.push((0, values.len() - 1));
        }
        Self {
            values,
            metrics,
            ranges,
            partition: None,
        }
    }

    /// Ranges waiting to be partitioned.
    pub fn pending_ranges(&self) -> usize {
        self.ranges.len()
    }

    fn place_pivot(&mut self, part: Partition) {
        let Partition { low, high, i, .. } = part;
        self.values.swap(i, high);
        trace!("pivot placed at {} in {}..={}", i, low, high);
        if i + 1 < high {
            self.ranges.push((i + 1, high));
        }
        if i > low + 1 {
            self.ranges.push((low, i - 1));
        }
    }

    fn frame(&self, highlight: Vec<usize>) -> ArrayFrame<T> {
        ArrayFrame {
            values: self.values.to_vec(),
            highlight,
        }
    }
}

impl<T, M> Iterator for QuickSort<'_, '_, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    type Item = ArrayFrame<T>;

    fn next(&mut self) -> Option<ArrayFrame<T>> {
        loop {
            let Some(mut part) = self.partition.take() else {
                let (low, high) = self.ranges.pop()?;
                self.partition = Some(Partition::new(low, high));
                continue;
            };
            while part.j < part.high {
                let j = part.j;
                part.j += 1;
                self.metrics.record_comparison();
                if self.values[j] < self.values[part.high] {
                    self.values.swap(part.i, j);
                    debug!("quick_sort: swap {} <-> {}", part.i, j);
                    let highlight = vec![part.i, j];
                    part.i += 1;
                    self.partition = Some(part);
                    return Some(self.frame(highlight));
                }
            }
            self.place_pivot(part);
        }
    }
}

impl<T, M> FusedIterator for QuickSort<'_, '_, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
}

impl<'a, T, M> Stepper for QuickSort<'a, '_, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    type Output = &'a mut [T];

    fn into_output(self) -> &'a mut [T] {
        self.values
    }
}

/// Sorts `values` in place without rendering.
pub fn quick_sort<T, M>(values: &mut [T], metrics: &mut M)
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    QuickSort::new(values, metrics).complete();
}
