//! The basic tree module.
//! This module implements the owned binary tree that the treap is built out of:
//! every node keeps the summary of its subtree and a pending action for it.

pub use crate::data::*;

/// The type that is used for treap priorities.
/// Convention: a bigger number should go higher up the tree.
pub type Priority = u64;

/// A basic tree. might be empty.
pub enum BasicTree<A: Action> {
    Empty,
    Root(Box<BasicNode<A>>),
}
use BasicTree::*;

impl<A: Action> Default for BasicTree<A> {
    fn default() -> Self {
        Empty
    }
}

impl<A: Action> BasicTree<A> {
    pub fn new(node: BasicNode<A>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&BasicNode<A>> {
        match self {
            Root(node) => Some(&**node),
            Empty => None,
        }
    }

    pub fn node_mut(&mut self) -> Option<&mut BasicNode<A>> {
        match self {
            Root(node) => Some(&mut **node),
            Empty => None,
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        Some(self.node()?.priority)
    }

    /// Remakes the data that is stored in this node, based on its sons.
    pub fn rebuild(&mut self) {
        if let Root(node) = self {
            node.rebuild();
        }
    }

    /// Pushes any actions stored in this node to its sons.
    pub fn access(&mut self) {
        if let Root(node) = self {
            node.access();
        }
    }

    /// Applies `action` to the whole tree, lazily.
    pub fn act(&mut self, action: A) {
        if let Root(node) = self {
            node.act(action);
        }
    }

    /// Returns the summary of all values in this tree.
    pub fn segment_value(&self) -> A::Value {
        match self {
            Root(node) => node.segment_value(),
            Empty => A::EMPTY,
        }
    }

    /// Replaces the tree with an empty one, and returns the previous tree.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<A: Action + Reverse> BasicTree<A> {
    /// Reverses the whole tree, lazily.
    pub fn reverse(&mut self) {
        let mut action = A::IDENTITY;
        action.reverse();
        self.act(action);
    }
}

/// A basic node. can be viewed as a non-empty basic tree: it always has at least one value.
pub struct BasicNode<A: Action> {
    // pending for the whole subtree, including this node.
    action: A,
    segment_value: A::Value,
    node_value: A::Value,
    pub(crate) priority: Priority,
    pub left: BasicTree<A>,
    pub right: BasicTree<A>,
}

impl<A: Action> BasicNode<A> {
    pub fn new(value: A::Value, priority: Priority) -> BasicNode<A> {
        BasicNode {
            action: A::IDENTITY,
            node_value: value,
            segment_value: value,
            priority,
            left: Empty,
            right: Empty,
        }
    }

    /// Returns the summary of all values in this node's subtree.
    pub fn segment_value(&self) -> A::Value {
        self.action.act(self.segment_value)
    }

    /// Returns the value stored in this node specifically.
    pub fn node_value(&self) -> A::Value {
        self.action.act(self.node_value)
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Pushes any actions stored in this node to its sons.
    /// Actions stored in nodes are supposed to be eventually applied to its
    /// whole subtree. Therefore, in order to access a node cleanly, without
    /// the still-unapplied-function complicating things, you must `access()` the node.
    pub fn access(&mut self) {
        if self.action == A::IDENTITY {
            return;
        }
        // for actions that can't reverse, this is always false
        if self.action.to_reverse() {
            std::mem::swap(&mut self.left, &mut self.right);
        }

        self.left.act(self.action);
        self.right.act(self.action);
        self.segment_value = self.action.act(self.segment_value);
        self.node_value = self.action.act(self.node_value);
        self.action = A::IDENTITY;
    }

    /// Remakes the data that is stored in this node, based on its sons.
    /// This is necessary when the sons might have changed.
    pub fn rebuild(&mut self) {
        assert!(
            self.action == A::IDENTITY,
            "rebuilding a node with a pending action"
        );
        self.segment_value = A::compose_v(
            A::compose_v(self.left.segment_value(), self.node_value),
            self.right.segment_value(),
        );
    }

    /// Applies the given action to its whole subtree.
    ///
    /// This function leaves the `self.action` field "dirty" - after calling
    /// this you might need to call access, to push the action to this node's sons.
    pub fn act(&mut self, action: A) {
        self.action = A::compose_a(action, self.action);
    }

    /// Checks that the stored summary agrees with the sons.
    pub fn assert_correctness_locally(&self)
    where
        A::Value: Eq + std::fmt::Debug,
    {
        let expected = A::compose_v(
            A::compose_v(self.left.segment_value(), self.node_value),
            self.right.segment_value(),
        );
        assert_eq!(self.segment_value, expected, "stale subtree summary");
    }
}

#[test]
fn access_pushes_reversal_down() {
    let mut root = BasicNode::<AddReverse>::new(RangeSummary::single(2), 10);
    root.left = BasicTree::new(BasicNode::new(RangeSummary::single(1), 5));
    root.rebuild();
    root.act(AddReverse {
        add: 3,
        reverse: true,
    });
    assert_eq!(root.segment_value().sum, 9);
    root.access();
    assert!(root.left.is_empty());
    let right = root.right.node().unwrap();
    assert_eq!(right.node_value().sum, 4);
    assert_eq!(root.node_value().sum, 5);
    root.assert_correctness_locally();
}
