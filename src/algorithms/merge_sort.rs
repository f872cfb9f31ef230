//! Top-down merge sort.
//!
//! The sort itself runs on a private copy the first time the stepper is
//! advanced (recursion depth is `log2 n`). The sorted values are then
//! written back into the caller's slice one index per step, each write
//! yielding a frame that highlights the placed index.
//!
//! Ties take the element from the left half, so the sort is stable.

use std::iter::FusedIterator;

use log::debug;

use crate::algorithms::ArrayFrame;
use crate::metrics::CoreMetricsRecorder;
use crate::traits::Stepper;

pub struct MergeSort<'a, 'm, T, M> {
    values: &'a mut [T],
    metrics: &'m mut M,
    sorted: Option<Vec<T>>,
    cursor: usize,
}

impl<'a, 'm, T, M> MergeSort<'a, 'm, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    pub fn new(values: &'a mut [T], metrics: &'m mut M) -> Self {
        debug!("merge_sort(len = {})", values.len());
        Self {
            values,
            metrics,
            sorted: None,
            cursor: 0,
        }
    }

    /// Number of indices written back so far.
    pub fn placed(&self) -> usize {
        self.cursor
    }
}

fn sort<T, M>(mut items: Vec<T>, metrics: &mut M) -> Vec<T>
where
    T: PartialOrd,
    M: CoreMetricsRecorder,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort(items, metrics);
    let right = sort(right, metrics);
    merge(left, right, metrics)
}

fn merge<T, M>(left: Vec<T>, right: Vec<T>, metrics: &mut M) -> Vec<T>
where
    T: PartialOrd,
    M: CoreMetricsRecorder,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };
        metrics.record_comparison();
        if take_right {
            out.extend(right.next());
        } else {
            out.extend(left.next());
        }
    }
    out.extend(left);
    out.extend(right);
    out
}

impl<T, M> Iterator for MergeSort<'_, '_, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    type Item = ArrayFrame<T>;

    fn next(&mut self) -> Option<ArrayFrame<T>> {
        if self.values.len() <= 1 {
            return None;
        }
        if self.sorted.is_none() {
            self.sorted = Some(sort(self.values.to_vec(), self.metrics));
        }
        let index = self.cursor;
        let value = self.sorted.as_ref()?.get(index)?.clone();
        self.values[index] = value;
        self.cursor += 1;
        Some(ArrayFrame {
            values: self.values.to_vec(),
            highlight: vec![index],
        })
    }
}

impl<T, M> FusedIterator for MergeSort<'_, '_, T, M>
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
}

impl<'a, T, M> Stepper for MergeSort<'a, '_, T, M>
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
pub fn merge_sort<T, M>(values: &mut [T], metrics: &mut M)
where
    T: PartialOrd + Clone,
    M: CoreMetricsRecorder,
{
    MergeSort::new(values, metrics).complete();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricsSnapshotProvider, RunMetrics};
    use proptest::prelude::*;

    #[test]
    fn sorts_and_counts_comparisons() {
        let mut values = vec![5, 2, 4, 6, 1, 3];
        let mut metrics = RunMetrics::new();
        merge_sort(&mut values, &mut metrics);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert!(metrics.snapshot().comparisons > 0);
        assert_eq!(metrics.snapshot().visits, 0);
    }

    #[test]
    fn one_frame_per_placement() {
        let mut values = vec![3, 1, 2];
        let mut metrics = RunMetrics::new();
        let frames: Vec<_> = MergeSort::new(&mut values, &mut metrics).collect();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].values, vec![1, 1, 2]);
        assert_eq!(frames[0].highlight, vec![0]);
        assert_eq!(frames[1].values, vec![1, 2, 2]);
        assert_eq!(frames[2].values, vec![1, 2, 3]);
        assert_eq!(frames[2].highlight, vec![2]);
    }

    #[test]
    fn placed_tracks_write_back_progress() {
        let mut values = vec![4, 3, 2, 1];
        let mut metrics = RunMetrics::new();
        let mut stepper = MergeSort::new(&mut values, &mut metrics);
        assert_eq!(stepper.placed(), 0);
        stepper.next();
        stepper.next();
        assert_eq!(stepper.placed(), 2);
        let sorted = stepper.complete();
        assert_eq!(sorted, &[1, 2, 3, 4]);
    }

    #[test]
    fn sorted_input_needs_fewest_comparisons() {
        let mut values: Vec<i64> = (0..8).collect();
        let mut metrics = RunMetrics::new();
        merge_sort(&mut values, &mut metrics);
        // every merge exhausts the left half first: 4*1 + 2*2 + 1*4
        assert_eq!(metrics.snapshot().comparisons, 12);
    }

    #[test]
    fn trivial_inputs_produce_no_frames() {
        let mut metrics = RunMetrics::new();
        let mut empty: Vec<i64> = Vec::new();
        assert_eq!(MergeSort::new(&mut empty, &mut metrics).count(), 0);
        let mut single = vec![7];
        assert_eq!(MergeSort::new(&mut single, &mut metrics).count(), 0);
        assert_eq!(single, vec![7]);
        assert_eq!(metrics.snapshot().comparisons, 0);
    }

    #[test]
    fn ties_keep_original_order() {
        let mut values = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let mut keyed: Vec<_> = values.iter().map(|&(k, tag)| ByKey(k, tag)).collect();
        let mut metrics = RunMetrics::new();
        merge_sort(&mut keyed, &mut metrics);
        values.sort_by_key(|&(k, _)| k);
        let tags: Vec<char> = keyed.iter().map(|b| b.1).collect();
        let expected: Vec<char> = values.iter().map(|&(_, tag)| tag).collect();
        assert_eq!(tags, expected);
    }

    #[derive(Debug, Clone)]
    struct ByKey(i32, char);

    impl PartialEq for ByKey {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    proptest! {
        #[test]
        fn matches_std_sort(mut values in prop::collection::vec(-50i64..50, 0..64)) {
            let mut expected = values.clone();
            expected.sort();
            let mut metrics = RunMetrics::new();
            merge_sort(&mut values, &mut metrics);
            prop_assert_eq!(&values, &expected);

            // idempotent
            merge_sort(&mut values, &mut metrics);
            prop_assert_eq!(values, expected);
        }
    }
}
