//! Range minimum segment trees with point assignment.
//!
//! Unset positions hold `i32::MAX`, which is also the answer for an empty range.

/// A segment tree whose nodes are only allocated when a position under them is set.
/// Useful when the index space is huge but sparse.
#[derive(Clone, Debug)]
pub struct DynamicRmqSegmentTree {
    root: DynamicNode,
}

#[derive(Clone, Debug)]
struct DynamicNode {
    // covers `start..end`
    start: usize,
    end: usize,
    min: i32,
    left: Option<Box<DynamicNode>>,
    right: Option<Box<DynamicNode>>,
}

impl DynamicNode {
    fn new(start: usize, end: usize) -> Self {
        DynamicNode {
            start,
            end,
            min: i32::MAX,
            left: None,
            right: None,
        }
    }

    fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    fn set(&mut self, index: usize, value: i32) {
        if self.end - self.start == 1 {
            self.min = value;
            return;
        }
        let mid = self.mid();
        if index < mid {
            let start = self.start;
            self.left
                .get_or_insert_with(|| Box::new(DynamicNode::new(start, mid)))
                .set(index, value);
        } else {
            let end = self.end;
            self.right
                .get_or_insert_with(|| Box::new(DynamicNode::new(mid, end)))
                .set(index, value);
        }
        self.min = Self::min_of(&self.left).min(Self::min_of(&self.right));
    }

    fn min_of(node: &Option<Box<DynamicNode>>) -> i32 {
        node.as_ref().map_or(i32::MAX, |node| node.min)
    }

    fn min_range(&self, start: usize, end: usize) -> i32 {
        if start <= self.start && self.end <= end {
            return self.min;
        }
        let mid = self.mid();
        let mut result = i32::MAX;
        if start < mid {
            if let Some(left) = &self.left {
                result = left.min_range(start, end);
            }
        }
        if mid < end {
            if let Some(right) = &self.right {
                result = result.min(right.min_range(start, end));
            }
        }
        result
    }
}

impl DynamicRmqSegmentTree {
    /// A tree over positions `0..len`.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a segment tree must cover at least one position");
        DynamicRmqSegmentTree {
            root: DynamicNode::new(0, len),
        }
    }

    pub fn len(&self) -> usize {
        self.root.end
    }

    /// O(log N)
    pub fn set(&mut self, index: usize, value: i32) {
        assert!(
            index < self.len(),
            "Index {index} is out of bounds of segment tree length {}",
            self.len()
        );
        self.root.set(index, value);
    }

    /// The minimum over `start..end`.
    /// O(log N)
    pub fn min_range(&self, start: usize, end: usize) -> i32 {
        if start >= end {
            return i32::MAX;
        }
        self.root.min_range(start, end)
    }
}

/// An array backed segment tree. The number of leaves is rounded up to a power of two,
/// and node `k` has the sons `2k + 1` and `2k + 2`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RmqSegmentTree {
    leaves: usize,
    tree: Vec<i32>,
}

impl RmqSegmentTree {
    pub fn new(len: usize) -> Self {
        let leaves = len.max(1).next_power_of_two();
        RmqSegmentTree {
            leaves,
            tree: vec![i32::MAX; 2 * leaves - 1],
        }
    }

    pub fn len(&self) -> usize {
        self.leaves
    }

    /// O(log N)
    pub fn set(&mut self, index: usize, value: i32) {
        assert!(
            index < self.leaves,
            "Index {index} is out of bounds of segment tree length {}",
            self.leaves
        );
        let mut k = index + self.leaves - 1;
        self.tree[k] = value;
        while k > 0 {
            k = (k - 1) / 2;
            self.tree[k] = self.tree[2 * k + 1].min(self.tree[2 * k + 2]);
        }
    }

    pub fn get(&self, index: usize) -> i32 {
        self.tree[index + self.leaves - 1]
    }

    /// The minimum over `start..end`.
    /// O(log N)
    pub fn min_range(&self, start: usize, end: usize) -> i32 {
        self.min_range_at(start, end, 0, 0, self.leaves)
    }

    // node `k` covers `node_start..node_end`
    fn min_range_at(&self, start: usize, end: usize, k: usize, node_start: usize, node_end: usize) -> i32 {
        if node_end <= start || end <= node_start {
            return i32::MAX;
        }
        if start <= node_start && node_end <= end {
            return self.tree[k];
        }
        let mid = (node_start + node_end) / 2;
        self.min_range_at(start, end, 2 * k + 1, node_start, mid)
            .min(self.min_range_at(start, end, 2 * k + 2, mid, node_end))
    }
}
