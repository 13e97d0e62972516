//! Implementation of treaps with implicit keys.
//!
//! It is a balanced tree algorithm that supports reversals, splitting and concatenation.
//! Elements are ordered by their position, and nodes are balanced by random priorities.
//!
//! Its operations take `O(log n)` expected time, probabilistically.
//! Each operation may take up to linear time, but the probability of any operation
//! taking more than `O(log n)` time is extremely low.

use std::ops::Range;

use super::basic_tree::*;
use rand;

pub struct Treap<A: Action> {
    tree: BasicTree<A>,
}

impl<A: SizedAction> Default for Treap<A> {
    fn default() -> Self {
        Treap::new()
    }
}

impl<A: SizedAction> Treap<A> {
    pub fn new() -> Treap<A> {
        Treap {
            tree: BasicTree::Empty,
        }
    }

    fn from_tree(tree: BasicTree<A>) -> Self {
        Treap { tree }
    }

    pub fn len(&self) -> usize {
        A::size(self.tree.segment_value())
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn priority(&self) -> Option<Priority> {
        self.tree.priority()
    }

    /// Returns the summary of the whole tree.
    pub fn subtree_summary(&self) -> A::Value {
        self.tree.segment_value()
    }

    /// Splits the tree into the first `index` elements and the rest.
    ///```
    /// use competitive::treap::*;
    /// use competitive::data::*;
    ///
    /// let tree: Treap<AddReverse> = (17..88).map(RangeSummary::single).collect();
    /// let (mut left, mut right) = tree.split(7);
    ///
    /// assert_eq!(left.iter().map(|s| s.sum).collect::<Vec<_>>(), (17..24).collect::<Vec<_>>());
    /// assert_eq!(right.iter().map(|s| s.sum).collect::<Vec<_>>(), (24..88).collect::<Vec<_>>());
    /// # left.assert_correctness();
    ///```
    pub fn split(self, index: usize) -> (Self, Self) {
        assert!(
            index <= self.len(),
            "Index {index} is out of bounds of treap length {}",
            self.len()
        );
        let (left, right) = split_internal(self.tree, index);
        (Self::from_tree(left), Self::from_tree(right))
    }

    /// Concatenates two trees: all the elements of `left` come before the elements of `right`.
    pub fn merge(left: Self, right: Self) -> Self {
        Self::from_tree(merge_internal(left.tree, right.tree))
    }

    /// Concatenates the trees together, in place.
    pub fn concatenate_right(&mut self, tree2: Self) {
        let left = self.tree.take();
        self.tree = merge_internal(left, tree2.tree);
    }

    /// Splits out `range`, lets `f` work on it as a separate tree, and glues everything back.
    fn with_segment<F, R>(&mut self, range: Range<usize>, f: F) -> R
    where
        F: FnOnce(&mut Treap<A>) -> R,
    {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "range {}..{} is out of bounds of treap length {}",
            range.start,
            range.end,
            self.len()
        );
        let (left, rest) = split_internal(self.tree.take(), range.start);
        let (mid, right) = split_internal(rest, range.end - range.start);
        let mut mid = Self::from_tree(mid);
        let result = f(&mut mid);
        self.tree = merge_internal(left, merge_internal(mid.tree, right));
        result
    }

    /// Returns the summary of the values in `range`.
    pub fn segment_summary(&mut self, range: Range<usize>) -> A::Value {
        self.with_segment(range, |mid| mid.subtree_summary())
    }

    /// Applies `action` to every value in `range`.
    pub fn act_segment(&mut self, action: A, range: Range<usize>) {
        self.with_segment(range, |mid| mid.tree.act(action));
    }

    /// Returns the value at `index`.
    pub fn get(&mut self, index: usize) -> A::Value {
        assert!(
            index < self.len(),
            "Index {index} is out of bounds of treap length {}",
            self.len()
        );
        let mut tree = &mut self.tree;
        let mut index = index;
        loop {
            let node = match tree.node_mut() {
                Some(node) => node,
                None => unreachable!("the index was checked against the size"),
            };
            node.access();
            let left_size = A::size(node.left.segment_value());
            if index < left_size {
                tree = &mut node.left;
            } else if index == left_size {
                return node.node_value();
            } else {
                index -= left_size + 1;
                tree = &mut node.right;
            }
        }
    }

    /// Inserts `value` so that it ends up at position `index`.
    pub fn insert(&mut self, index: usize, value: A::Value) {
        assert!(
            index <= self.len(),
            "Index {index} is out of bounds of treap length {}",
            self.len()
        );
        let (left, right) = split_internal(self.tree.take(), index);
        let node = BasicTree::new(BasicNode::new(value, rand::random()));
        self.tree = merge_internal(left, merge_internal(node, right));
    }

    /// Removes the value at `index` and returns it.
    pub fn delete(&mut self, index: usize) -> A::Value {
        assert!(
            index < self.len(),
            "Index {index} is out of bounds of treap length {}",
            self.len()
        );
        let (left, rest) = split_internal(self.tree.take(), index);
        let (mut mid, right) = split_internal(rest, 1);
        mid.access();
        let value = mid.segment_value();
        self.tree = merge_internal(left, right);
        value
    }

    /// Moves the first `count` values to the end. `count` may be at most `len()`.
    pub fn rotate_left(&mut self, count: usize) {
        assert!(
            count <= self.len(),
            "cannot rotate {count} values out of a treap of length {}",
            self.len()
        );
        let (left, right) = split_internal(self.tree.take(), count);
        self.tree = merge_internal(right, left);
    }

    /// Rotates the values in `range` left by `count`.
    pub fn rotate_left_segment(&mut self, range: Range<usize>, count: usize) {
        self.with_segment(range, |mid| mid.rotate_left(count));
    }

    /// Iterates over the whole tree, pushing down pending actions on the way.
    pub fn iter(&mut self) -> impl Iterator<Item = A::Value> {
        let mut values = Vec::with_capacity(self.len());
        collect_internal(&mut self.tree, &mut values);
        values.into_iter()
    }

    /// Checks that invariants remain correct. i.e., that every node's summary
    /// is the sum of the summaries of its children, and that the priorities are ordered.
    pub fn assert_correctness(&self)
    where
        A::Value: Eq + std::fmt::Debug,
    {
        Self::assert_correctness_internal(&self.tree);
    }

    fn assert_correctness_internal(tree: &BasicTree<A>)
    where
        A::Value: Eq + std::fmt::Debug,
    {
        if let Some(node) = tree.node() {
            node.assert_correctness_locally();
            for son in [&node.left, &node.right] {
                if let Some(priority) = son.priority() {
                    assert!(node.priority() >= priority, "treap priorities out of order");
                }
                Self::assert_correctness_internal(son);
            }
        }
    }
}

impl<A: SizedAction + Reverse> Treap<A> {
    /// Reverses the order of the values in `range`.
    pub fn reverse_segment(&mut self, range: Range<usize>) {
        self.with_segment(range, |mid| mid.tree.reverse());
    }
}

fn split_internal<A: SizedAction>(tree: BasicTree<A>, index: usize) -> (BasicTree<A>, BasicTree<A>) {
    match tree {
        BasicTree::Empty => (BasicTree::Empty, BasicTree::Empty),
        BasicTree::Root(mut node) => {
            node.access();
            let left_size = A::size(node.left.segment_value());
            if index <= left_size {
                let (left, right) = split_internal(node.left.take(), index);
                node.left = right;
                node.rebuild();
                (left, BasicTree::Root(node))
            } else {
                let (left, right) = split_internal(node.right.take(), index - left_size - 1);
                node.right = left;
                node.rebuild();
                (BasicTree::Root(node), right)
            }
        }
    }
}

fn merge_internal<A: Action>(left: BasicTree<A>, right: BasicTree<A>) -> BasicTree<A> {
    match (left, right) {
        (BasicTree::Empty, tree) | (tree, BasicTree::Empty) => tree,
        (BasicTree::Root(mut left), BasicTree::Root(mut right)) => {
            if left.priority == right.priority {
                log::warn!("found equal treap priorities {}", left.priority);
            }
            if left.priority > right.priority {
                left.access();
                let sons = left.right.take();
                left.right = merge_internal(sons, BasicTree::Root(right));
                left.rebuild();
                BasicTree::Root(left)
            } else {
                right.access();
                let sons = right.left.take();
                right.left = merge_internal(BasicTree::Root(left), sons);
                right.rebuild();
                BasicTree::Root(right)
            }
        }
    }
}

fn collect_internal<A: Action>(tree: &mut BasicTree<A>, values: &mut Vec<A::Value>) {
    if let Some(node) = tree.node_mut() {
        node.access();
        collect_internal(&mut node.left, values);
        values.push(node.node_value());
        collect_internal(&mut node.right, values);
    }
}

impl<A: SizedAction> FromIterator<A::Value> for Treap<A> {
    /// Builds the tree by successive concatenation. `O(n log n)` expected.
    fn from_iter<T: IntoIterator<Item = A::Value>>(iter: T) -> Self {
        let mut tree = Treap::new();
        for value in iter {
            let node = BasicTree::new(BasicNode::new(value, rand::random()));
            tree.tree = merge_internal(tree.tree.take(), node);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums(tree: &mut Treap<AddReverse>) -> Vec<i64> {
        tree.iter().map(|summary| summary.sum).collect()
    }

    fn build(values: impl IntoIterator<Item = i64>) -> Treap<AddReverse> {
        values.into_iter().map(RangeSummary::single).collect()
    }

    #[test]
    fn treap_delete() {
        let arr: Vec<i64> = (0..300).collect();
        for i in 0..arr.len() {
            let mut tree = build(arr.iter().cloned());
            let res = tree.delete(i);
            assert_eq!(res.sum, arr[i]);
            tree.assert_correctness();
            assert_eq!(
                sums(&mut tree),
                arr[..i]
                    .iter()
                    .chain(arr[i + 1..].iter())
                    .cloned()
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn treap_insert() {
        let arr: Vec<i64> = (0..300).collect();
        for i in 0..=arr.len() {
            let new_val = 13;
            let mut tree = build(arr.iter().cloned());
            tree.insert(i, RangeSummary::single(new_val));
            assert_eq!(tree.get(i).sum, new_val);
            tree.assert_correctness();
            assert_eq!(
                sums(&mut tree),
                arr[..i]
                    .iter()
                    .chain([new_val].iter())
                    .chain(arr[i..].iter())
                    .cloned()
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn treap_split_and_concatenate() {
        let tree = build(17..=89);
        let (mut left, right) = tree.split(30);
        assert_eq!(left.len(), 30);
        assert_eq!(right.len(), 43);
        left.concatenate_right(build(13..=25));
        left.concatenate_right(right);
        left.assert_correctness();
        assert_eq!(
            sums(&mut left),
            (17..47).chain(13..=25).chain(47..=89).collect::<Vec<_>>()
        );
    }

    #[test]
    fn treap_segment_actions() {
        let mut tree = build(0..10);
        tree.act_segment(AddReverse::add(5), 2..6);
        tree.reverse_segment(0..4);
        tree.assert_correctness();
        assert_eq!(sums(&mut tree), vec![8, 7, 1, 0, 9, 10, 6, 7, 8, 9]);
        let summary = tree.segment_summary(1..5);
        assert_eq!(summary.size, 4);
        assert_eq!(summary.min, 0);
        assert_eq!(summary.sum, 17);
        tree.rotate_left_segment(3..7, 1);
        assert_eq!(sums(&mut tree), vec![8, 7, 1, 9, 10, 6, 0, 7, 8, 9]);
        tree.rotate_left(8);
        assert_eq!(sums(&mut tree), vec![8, 9, 8, 7, 1, 9, 10, 6, 0, 7]);
        tree.assert_correctness();
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn treap_insert_past_the_end() {
        let mut tree = build(0..3);
        tree.insert(4, RangeSummary::single(99));
    }

    #[test]
    #[should_panic(expected = "cannot rotate")]
    fn treap_rotate_too_far() {
        let mut tree = build(0..3);
        tree.rotate_left(4);
    }

    #[test]
    #[should_panic(expected = "cannot rotate")]
    fn treap_rotate_segment_too_far() {
        let mut tree = build(0..10);
        tree.rotate_left_segment(2..5, 4);
    }
}
