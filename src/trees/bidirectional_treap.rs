//! A treap over a permutation that can also answer "where is value `v` now?"
//! in expected `O(log n)`, while supporting range reversals.
//!
//! Nodes live in one arena indexed by their value, and keep a link to their parent,
//! so a value can be located by walking up to the root.

use super::basic_tree::Priority;

#[derive(Clone, Debug)]
struct Node {
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
    size: usize,
    // the sons of this node still have to be swapped
    reversed: bool,
    priority: Priority,
}

#[derive(Clone, Debug)]
pub struct ReversibleBidirectionalTreap {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl ReversibleBidirectionalTreap {
    /// Builds the sequence `perm`, which must be a permutation of `0..perm.len()`.
    pub fn new(perm: &[usize]) -> Self {
        let n = perm.len();
        let mut seen = vec![false; n];
        for &v in perm {
            assert!(v < n && !seen[v], "{perm:?} is not a permutation");
            seen[v] = true;
        }
        let nodes = (0..n)
            .map(|_| Node {
                left: None,
                right: None,
                parent: None,
                size: 1,
                reversed: false,
                priority: rand::random(),
            })
            .collect();
        let mut treap = ReversibleBidirectionalTreap { nodes, root: None };
        for &v in perm {
            let root = treap.root;
            treap.root = treap.merge(root, Some(v));
        }
        treap
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn size(&self, node: Option<usize>) -> usize {
        node.map_or(0, |i| self.nodes[i].size)
    }

    fn update(&mut self, i: usize) {
        self.nodes[i].size = self.size(self.nodes[i].left) + self.size(self.nodes[i].right) + 1;
    }

    fn set_parent(&mut self, child: Option<usize>, parent: Option<usize>) {
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
    }

    fn push_reversal(&mut self, i: usize) {
        if !self.nodes[i].reversed {
            return;
        }
        let node = &mut self.nodes[i];
        std::mem::swap(&mut node.left, &mut node.right);
        node.reversed = false;
        for son in [node.left, node.right].into_iter().flatten() {
            self.nodes[son].reversed ^= true;
        }
    }

    fn merge(&mut self, left: Option<usize>, right: Option<usize>) -> Option<usize> {
        let (l, r) = match (left, right) {
            (None, tree) | (tree, None) => return tree,
            (Some(l), Some(r)) => (l, r),
        };
        if self.nodes[l].priority > self.nodes[r].priority {
            self.push_reversal(l);
            let merged = self.merge(self.nodes[l].right, Some(r));
            self.nodes[l].right = merged;
            self.set_parent(merged, Some(l));
            self.update(l);
            Some(l)
        } else {
            self.push_reversal(r);
            let merged = self.merge(Some(l), self.nodes[r].left);
            self.nodes[r].left = merged;
            self.set_parent(merged, Some(r));
            self.update(r);
            Some(r)
        }
    }

    // both returned roots are detached from any parent
    fn split(&mut self, tree: Option<usize>, index: usize) -> (Option<usize>, Option<usize>) {
        let i = match tree {
            None => return (None, None),
            Some(i) => i,
        };
        self.push_reversal(i);
        self.nodes[i].parent = None;
        let left_size = self.size(self.nodes[i].left);
        if index <= left_size {
            let (left, right) = self.split(self.nodes[i].left, index);
            self.nodes[i].left = right;
            self.set_parent(right, Some(i));
            self.update(i);
            (left, Some(i))
        } else {
            let (left, right) = self.split(self.nodes[i].right, index - left_size - 1);
            self.nodes[i].right = left;
            self.set_parent(left, Some(i));
            self.update(i);
            (Some(i), right)
        }
    }

    /// The value at position `index`.
    pub fn get(&mut self, mut index: usize) -> usize {
        assert!(
            index < self.len(),
            "Index {index} is out of bounds of treap length {}",
            self.len()
        );
        let mut current = self.root;
        while let Some(i) = current {
            self.push_reversal(i);
            let left_size = self.size(self.nodes[i].left);
            if index < left_size {
                current = self.nodes[i].left;
            } else if index == left_size {
                return i;
            } else {
                index -= left_size + 1;
                current = self.nodes[i].right;
            }
        }
        unreachable!("the index was checked against the size")
    }

    /// The current position of `value`.
    pub fn order_of(&mut self, value: usize) -> usize {
        let mut path = vec![value];
        while let Some(parent) = self.nodes[path[path.len() - 1]].parent {
            path.push(parent);
        }
        // reversals are pending from the root downwards
        for &i in path.iter().rev() {
            self.push_reversal(i);
        }
        let mut order = self.size(self.nodes[value].left);
        for pair in path.windows(2) {
            let (child, parent) = (pair[0], pair[1]);
            if self.nodes[parent].right == Some(child) {
                order += self.size(self.nodes[parent].left) + 1;
            }
        }
        order
    }

    /// Reverses the values in `start..end`.
    pub fn reverse_range(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.len(),
            "range {start}..{end} is out of bounds of treap length {}",
            self.len()
        );
        let (left, rest) = self.split(self.root, start);
        let (mid, right) = self.split(rest, end - start);
        if let Some(mid) = mid {
            self.nodes[mid].reversed ^= true;
        }
        let tail = self.merge(mid, right);
        self.root = self.merge(left, tail);
        self.set_parent(self.root, None);
    }

    pub fn to_vec(&mut self) -> Vec<usize> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}
