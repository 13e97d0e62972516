//! A sequence of integers supporting range minimum and range sum queries,
//! range addition and range reversal, all in expected `O(log n)`.
//!
//! Thin wrapper around [`Treap`] with the [`AddReverse`] action.
//!
//! Ranges are half open: `min_range(l, r)` covers positions `l..r`.

use super::treap::Treap;
use crate::data::{AddReverse, RangeSummary};

#[derive(Default)]
pub struct LazyTreap {
    tree: Treap<AddReverse>,
}

impl LazyTreap {
    pub fn new() -> Self {
        LazyTreap { tree: Treap::new() }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Splits into the first `index` values and the rest.
    pub fn split(self, index: usize) -> (Self, Self) {
        let (left, right) = self.tree.split(index);
        (LazyTreap { tree: left }, LazyTreap { tree: right })
    }

    /// All values of `left` followed by all values of `right`.
    pub fn merge(left: Self, right: Self) -> Self {
        LazyTreap {
            tree: Treap::merge(left.tree, right.tree),
        }
    }

    pub fn get(&mut self, index: usize) -> i64 {
        self.tree.get(index).sum
    }

    pub fn insert(&mut self, index: usize, value: i64) {
        self.tree.insert(index, RangeSummary::single(value));
    }

    /// Removes and returns the value at `index`.
    pub fn delete(&mut self, index: usize) -> i64 {
        self.tree.delete(index).sum
    }

    pub fn reverse_range(&mut self, start: usize, end: usize) {
        self.tree.reverse_segment(start..end);
    }

    /// Moves the first `count` values to the end.
    pub fn rotate_left(&mut self, count: usize) {
        self.tree.rotate_left(count);
    }

    /// Rotates `start..end` left by `count`: the value at `start + count` becomes the first.
    pub fn rotate_left_range(&mut self, start: usize, end: usize, count: usize) {
        self.tree.rotate_left_segment(start..end, count);
    }

    /// The minimum over `start..end`, or `i64::MAX` if the range is empty.
    pub fn min_range(&mut self, start: usize, end: usize) -> i64 {
        self.tree.segment_summary(start..end).min
    }

    pub fn sum_range(&mut self, start: usize, end: usize) -> i64 {
        self.tree.segment_summary(start..end).sum
    }

    /// Adds `value` to every element of `start..end`. The value may be negative.
    pub fn add_range(&mut self, start: usize, end: usize, value: i64) {
        self.tree.act_segment(AddReverse::add(value), start..end);
    }

    pub fn to_vec(&mut self) -> Vec<i64> {
        self.tree.iter().map(|summary| summary.sum).collect()
    }

    pub fn assert_correctness(&self) {
        self.tree.assert_correctness();
    }
}

impl FromIterator<i64> for LazyTreap {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        LazyTreap {
            tree: iter.into_iter().map(RangeSummary::single).collect(),
        }
    }
}
