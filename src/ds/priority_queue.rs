//! Array-backed binary min-heap used as the shortest-path frontier.
//!
//! The queue has no decrease-key. A caller that wants to lower an item's
//! priority pushes a second entry; the older one stays in the heap and is
//! popped later as a *stale* entry. Callers must tolerate that (lazy
//! deletion), which is exactly what
//! [`ShortestPath`](crate::algorithms::shortest_path::ShortestPath) does.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                    PriorityQueue Layout                           │
//! │                                                                   │
//! │   heap: Vec<Entry<T, P>>      (0-indexed, implicit binary tree)   │
//! │                                                                   │
//! │            [0] (a, 1)                                             │
//! │           /          \                                            │
//! │     [1] (c, 4)     [2] (b, 2)                                     │
//! │      /     \                                                      │
//! │ [3] (d, 9) [4] (c, 7)   ← stale: (c, 4) was pushed later          │
//! │                                                                   │
//! │   parent(i) = (i - 1) / 2                                         │
//! │   left(i)   = 2i + 1                                              │
//! │   right(i)  = 2i + 2                                              │
//! │                                                                   │
//! │   Heap order: heap[parent(i)].priority <= heap[i].priority        │
//! └───────────────────────────────────────────────────────────────────┘
//!
//! Push Flow
//! ─────────
//!   push(x, p):
//!     1. heap.push((x, p))
//!     2. sift up while parent.priority > child.priority
//!
//! Pop Flow
//! ────────
//!   pop():
//!     1. root ← heap[0]
//!     2. heap[0] ← last leaf
//!     3. sift down, swapping with the smaller child (left wins ties)
//! ```
//!
//! ## Operations
//!
//! | Operation  | Description                            | Complexity |
//! |------------|----------------------------------------|------------|
//! | `push`     | Append, sift up                        | O(log n)   |
//! | `pop`      | Remove minimum, sift down              | O(log n)   |
//! | `peek`     | Borrow minimum                         | O(1)       |
//! | `is_empty` | Emptiness check                        | O(1)       |
//!
//! Equal priorities are ordered by heap structure, not by insertion order.
//!
//! ## Example Usage
//!
//! ```
//! use algoviz::ds::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(3usize, 7u64);
//! queue.push(1, 2);
//! queue.push(3, 1); // "decrease" by pushing again
//!
//! assert_eq!(queue.pop(), Ok((3, 1)));
//! assert_eq!(queue.pop(), Ok((1, 2)));
//! assert_eq!(queue.pop(), Ok((3, 7))); // stale entry, caller decides
//! assert!(queue.is_empty());
//! ```

use log::trace;

use crate::error::{InvariantError, VizError};

/// A single heap slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T, P> {
    pub item: T,
    pub priority: P,
}

/// Binary min-heap over `(item, priority)` pairs.
///
/// # Example
///
/// ```
/// use algoviz::ds::PriorityQueue;
///
/// let mut queue: PriorityQueue<&str, u32> = PriorityQueue::with_capacity(4);
/// queue.push("low", 10);
/// queue.push("high", 1);
///
/// assert_eq!(queue.peek().map(|e| e.item), Some("high"));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    heap: Vec<Entry<T, P>>,
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord,
{
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Borrows the minimum-priority entry without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&Entry<T, P>> {
        self.heap.first()
    }

    /// Appends `(item, priority)` and restores heap order.
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Entry { item, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the minimum-priority entry.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::EmptyQueue`] if the queue is empty.
    pub fn pop(&mut self) -> Result<(T, P), VizError> {
        if self.heap.is_empty() {
            return Err(VizError::EmptyQueue);
        }
        // swap_remove moves the last leaf into the root slot.
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((top.item, top.priority))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates entries in heap (array) order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T, P>> {
        self.heap.iter()
    }

    /// Verifies the heap-order property for every parent/child pair.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for i in 1..self.heap.len() {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority > self.heap[i].priority {
                return Err(InvariantError::new(format!(
                    "heap order violated between parent {} and child {}",
                    parent, i
                )));
            }
        }
        Ok(())
    }

    fn sift_up(&mut self, mut i: usize) {
        let mut swaps = 0usize;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority <= self.heap[i].priority {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
            swaps += 1;
        }
        trace!("sift_up settled at {} after {} swaps", i, swaps);
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        let mut swaps = 0usize;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < n && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < n && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
            swaps += 1;
        }
        trace!("sift_down settled at {} after {} swaps", i, swaps);
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_ascending_priorities() {
        let mut queue = PriorityQueue::new();
        for (item, priority) in [(0usize, 5u64), (1, 3), (2, 8), (3, 1), (4, 4)] {
            queue.push(item, priority);
        }

        let mut popped = Vec::new();
        while !queue.is_empty() {
            popped.push(queue.pop().unwrap().1);
        }
        assert_eq!(popped, vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn pop_on_empty_is_an_error() {
        let mut queue: PriorityQueue<usize, u64> = PriorityQueue::new();
        assert_eq!(queue.pop(), Err(VizError::EmptyQueue));

        queue.push(1, 1);
        assert!(queue.pop().is_ok());
        assert_eq!(queue.pop(), Err(VizError::EmptyQueue));
    }

    #[test]
    fn single_entry_round_trip() {
        let mut queue = PriorityQueue::new();
        queue.push("only", 42u32);
        assert_eq!(queue.peek(), Some(&Entry { item: "only", priority: 42 }));
        assert_eq!(queue.pop(), Ok(("only", 42)));
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicate_items_are_kept_as_separate_entries() {
        let mut queue = PriorityQueue::new();
        queue.push(7usize, 10u64);
        queue.push(7, 2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Ok((7, 2)));
        assert_eq!(queue.pop(), Ok((7, 10)));
    }

    #[test]
    fn invariants_hold_after_each_operation() {
        let mut queue = PriorityQueue::new();
        for (i, p) in [9u32, 4, 7, 1, 8, 2, 6, 3, 5, 0].into_iter().enumerate() {
            queue.push(i, p);
            queue.check_invariants().unwrap();
        }
        while queue.pop().is_ok() {
            queue.check_invariants().unwrap();
        }
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = PriorityQueue::new();
        queue.push(1usize, 1u8);
        queue.push(2, 2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn check_invariants_detects_corruption() {
        let mut queue = PriorityQueue::new();
        queue.push(0usize, 1u32);
        queue.push(1, 2);
        queue.heap.swap(0, 1);
        assert!(queue.check_invariants().is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Push(u8),
            Pop,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![3 => any::<u8>().prop_map(Op::Push), 2 => Just(Op::Pop)]
        }

        proptest! {
            #[test]
            fn pop_always_returns_current_minimum(ops in prop::collection::vec(op_strategy(), 0..200)) {
                let mut queue = PriorityQueue::new();
                let mut model: Vec<u8> = Vec::new();

                for (seq, op) in ops.into_iter().enumerate() {
                    match op {
                        Op::Push(p) => {
                            queue.push(seq, p);
                            model.push(p);
                        },
                        Op::Pop => {
                            let expected = model.iter().copied().min();
                            match (queue.pop(), expected) {
                                (Ok((_, got)), Some(min)) => {
                                    prop_assert_eq!(got, min);
                                    let pos = model.iter().position(|&p| p == min).unwrap();
                                    model.swap_remove(pos);
                                },
                                (Err(VizError::EmptyQueue), None) => {},
                                (got, expected) => {
                                    prop_assert!(false, "pop {:?} but model min {:?}", got, expected);
                                },
                            }
                        },
                    }
                    prop_assert_eq!(queue.is_empty(), model.is_empty());
                    prop_assert_eq!(queue.len(), model.len());
                    prop_assert!(queue.check_invariants().is_ok());
                }
            }
        }
    }
}
