//! Fenwick trees (binary indexed trees). A light-weight alternative to a segment tree
//! that stores all of its summaries in one allocation.
//!
//! All trees here are 0-indexed, and prefix sums are over half open ranges `..index`.
//!
//! See [`Fenwick`], [`RangeAddFenwick`] and [`Fenwick2D`].

use std::default::Default;

use crate::data::{CommutativeSummary, Group};

/// A fenwick tree.
///
/// Does not support applying actions over ranges, inserting or removing elements from the middle.
/// It does not store the elements themselves, only the summaries.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fenwick<S> {
    data: Vec<S>,
}

impl<S> Fenwick<S> {
    /// Create a new empty fenwick tree
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Checks if the fenwick tree is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// the current length of the fenwick tree
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<S> Default for Fenwick<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy + Default> Fenwick<S> {
    /// A fenwick tree of `len` empty summaries.
    pub fn with_len(len: usize) -> Self {
        Self {
            data: vec![Default::default(); len],
        }
    }
}

impl<S: Copy + Default + std::ops::Add<Output = S>> Fenwick<S> {
    /// Adds `additional_summary` at `index`, and recalculates.
    ///
    /// O(log N)
    pub fn add(&mut self, mut index: usize, additional_summary: S)
    where
        S: CommutativeSummary,
    {
        assert!(
            index < self.len(),
            "Index {index} is out of bounds of fenwick tree length {}",
            self.len()
        );
        while index < self.len() {
            self.data[index] = self.data[index] + additional_summary;
            index |= index + 1;
        }
    }

    /// Sets the summary at index `index` to be `new_summary`, and recalculates.
    /// O(log N)
    pub fn set(&mut self, index: usize, new_summary: S)
    where
        S: Group + CommutativeSummary,
    {
        let prev = self.get(index);
        self.add(index, new_summary + -prev);
    }

    /// Calculate the summary of values in `..index`
    /// O(log N)
    pub fn sum_prefix(&self, index: usize) -> S {
        assert!(
            index <= self.len(),
            "Index {index} is out of bounds of fenwick tree length {}",
            self.len()
        );

        let mut result: S = Default::default();
        // `data[i]` holds the summary of `(i & (i + 1))..=i`
        let mut i = index.wrapping_sub(1);
        while i != usize::MAX {
            // The order here is important for non-commutative summaries.
            result = self.data[i] + result;
            i = (i & (i + 1)).wrapping_sub(1);
        }
        result
    }

    /// Calculate the summary of values in `start..end`.
    /// O(log N)
    pub fn sum_range(&self, start: usize, end: usize) -> S
    where
        S: Group,
    {
        assert!(
            start <= end,
            "start of range {start} is bigger than end of range {end}"
        );

        -self.sum_prefix(start) + self.sum_prefix(end)
    }

    /// Calculate the summary at `index`.
    /// O(log N)
    pub fn get(&self, index: usize) -> S
    where
        S: Group,
    {
        assert!(
            index < self.len(),
            "Index {index} is out of bounds of fenwick tree length {}",
            self.len()
        );
        self.sum_range(index, index + 1)
    }

    /// Add a new value to the end of the fenwick tree.
    /// O(log N).
    ///
    /// But actually `k` successive pushes together only take
    /// O(log N + k) time, so the amortized complexity of a push is O(1),
    /// given that there are no calls to `pop`.
    pub fn push(&mut self, new_summary: S) {
        // The new summary represents the segment `stop+1..=old_len`.
        let stop: usize = (self.len() & (self.len() + 1)).wrapping_sub(1);

        let result: S = {
            let mut result = Default::default();
            let mut index: usize = self.len().wrapping_sub(1);
            while index != stop {
                result = self.data[index] + result;
                index = (index & (index + 1)).wrapping_sub(1);
            }
            result
        };

        self.data.push(result + new_summary);
    }

    /// Pop the last element.
    /// O(1)
    pub fn pop(&mut self) {
        self.data.pop();
    }
}

impl<S: Copy + Default + std::ops::Add<Output = S>> FromIterator<S> for Fenwick<S> {
    /// Creates a fenwick tree from an iterator of one-element summaries.
    /// O(N).
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<S: Copy + Default + std::ops::Add<Output = S>> Extend<S> for Fenwick<S> {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();
        self.data.reserve(lower_bound);

        for elem in iter {
            // Successive pushes actually have amortized `O(1)` time complexity
            self.push(elem)
        }
    }
}

/// A fenwick tree that supports adding a value to a whole range of elements.
///
/// Keeps two plain trees, so that the prefix sum of `..i` is
/// `slope.sum_prefix(i) * i + offset.sum_prefix(i)`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RangeAddFenwick {
    offset: Fenwick<i64>,
    slope: Fenwick<i64>,
}

impl RangeAddFenwick {
    /// `len` zeroes.
    pub fn new(len: usize) -> Self {
        RangeAddFenwick {
            offset: Fenwick::with_len(len),
            slope: Fenwick::with_len(len),
        }
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    /// Adds `value` to the element at `index`.
    /// O(log N)
    pub fn add(&mut self, index: usize, value: i64) {
        self.offset.add(index, value);
    }

    /// Adds `value` to every element in `start..end`.
    /// O(log N)
    pub fn add_range(&mut self, start: usize, end: usize, value: i64) {
        assert!(
            start <= end && end <= self.len(),
            "range {start}..{end} is out of bounds of fenwick tree length {}",
            self.len()
        );
        if start == end {
            return;
        }
        self.slope.add(start, value);
        self.offset.add(start, -value * start as i64);
        if end < self.len() {
            self.slope.add(end, -value);
            self.offset.add(end, value * end as i64);
        }
    }

    /// The sum of the elements in `..index`.
    /// O(log N)
    pub fn sum_prefix(&self, index: usize) -> i64 {
        self.slope.sum_prefix(index) * index as i64 + self.offset.sum_prefix(index)
    }

    /// The sum of the elements in `start..end`.
    pub fn sum_range(&self, start: usize, end: usize) -> i64 {
        assert!(
            start <= end,
            "start of range {start} is bigger than end of range {end}"
        );
        self.sum_prefix(end) - self.sum_prefix(start)
    }
}

/// A two dimensional fenwick tree over a `width * height` grid.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fenwick2D {
    width: usize,
    rows: Vec<Fenwick<i64>>,
}

impl Fenwick2D {
    pub fn new(width: usize, height: usize) -> Self {
        Fenwick2D {
            width,
            rows: (0..height).map(|_| Fenwick::with_len(width)).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Adds `value` at `(x, y)`.
    /// O(log W * log H)
    pub fn add(&mut self, x: usize, mut y: usize, value: i64) {
        assert!(
            y < self.height(),
            "Row {y} is out of bounds of fenwick grid height {}",
            self.height()
        );
        while y < self.height() {
            self.rows[y].add(x, value);
            y |= y + 1;
        }
    }

    /// The sum over the rectangle `..x` by `..y`.
    /// O(log W * log H)
    pub fn sum_prefix(&self, x: usize, y: usize) -> i64 {
        assert!(
            y <= self.height(),
            "Row {y} is out of bounds of fenwick grid height {}",
            self.height()
        );
        let mut result = 0;
        let mut i = y.wrapping_sub(1);
        while i != usize::MAX {
            result += self.rows[i].sum_prefix(x);
            i = (i & (i + 1)).wrapping_sub(1);
        }
        result
    }
}

#[test]
fn fenwick_prefix_sums() {
    let values = [5, -2, 7, 0, 3, 3, -8, 1, 4];
    let mut tree: Fenwick<i64> = values.iter().cloned().collect();
    for i in 0..=values.len() {
        assert_eq!(tree.sum_prefix(i), values[..i].iter().sum::<i64>());
    }
    tree.add(3, 10);
    tree.set(0, 1);
    assert_eq!(tree.get(3), 10);
    assert_eq!(tree.get(0), 1);
    assert_eq!(tree.sum_range(2, 5), 7 + 10 + 3);
    assert_eq!(tree.sum_prefix(0), 0);
}

#[test]
fn fenwick_push_pop() {
    let mut tree = Fenwick::new();
    for i in 0..100i64 {
        tree.push(i);
        assert_eq!(tree.sum_prefix(tree.len()), i * (i + 1) / 2);
    }
    tree.pop();
    assert_eq!(tree.len(), 99);
    assert_eq!(tree.sum_prefix(99), 98 * 99 / 2);
}

#[test]
#[should_panic]
fn fenwick_out_of_bounds() {
    let tree: Fenwick<i32> = Fenwick::with_len(4);
    tree.sum_prefix(5);
}

#[test]
fn range_add_fenwick() {
    let mut tree = RangeAddFenwick::new(10);
    let mut naive = vec![0i64; 10];
    let ops = [(0, 10, 3), (2, 5, -4), (7, 8, 11), (5, 10, 2), (0, 1, 6), (4, 4, 100)];
    for &(start, end, value) in ops.iter() {
        tree.add_range(start, end, value);
        for x in naive[start..end].iter_mut() {
            *x += value;
        }
        for i in 0..=10 {
            assert_eq!(tree.sum_prefix(i), naive[..i].iter().sum::<i64>());
        }
    }
    tree.add(9, -1);
    assert_eq!(tree.sum_range(9, 10), naive[9] - 1);
}

#[test]
fn fenwick_2d() {
    let mut tree = Fenwick2D::new(5, 4);
    tree.add(1, 1, 3);
    tree.add(4, 0, 2);
    tree.add(2, 3, -1);
    assert_eq!(tree.sum_prefix(5, 4), 4);
    assert_eq!(tree.sum_prefix(2, 2), 3);
    assert_eq!(tree.sum_prefix(1, 2), 0);
    assert_eq!(tree.sum_prefix(5, 1), 2);
    assert_eq!(tree.sum_prefix(3, 4), 2);
}
