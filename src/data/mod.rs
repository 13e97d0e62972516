//! Summaries and actions stored inside the trees.
//!
//! Balanced trees keep a summary of every subtree (its size, minimum, sum, ...) and
//! a pending action that still has to be applied to it. Fenwick trees only keep
//! summaries, and need them to form a (commutative) group.

pub mod range_data;

pub use range_data::*;

/// An action that can be applied to whole segments of a tree at once.
///
/// Actions form a monoid, acting on the `Value` monoid of segment summaries.
pub trait Action: Copy + Eq {
    /// Compose right to left. i.e., what chronologically happens first, is on the right.
    fn compose_a(self, other: Self) -> Self;
    const IDENTITY: Self;

    type Value: Copy;
    fn compose_v(left: Self::Value, right: Self::Value) -> Self::Value;
    const EMPTY: Self::Value;

    /// Applies the action to the summary of a segment.
    /// The default implementation does nothing.
    fn act(self, other: Self::Value) -> Self::Value {
        other
    }

    /// Whether this action reverses the segment it is applied to.
    ///
    /// Only meaningful for actions that also implement [`Reverse`].
    fn to_reverse(&self) -> bool {
        false
    }
}

/// Marker trait for actions that can reverse a segment.
///
/// The `to_reverse` function is part of the [`Action`] trait and not this trait,
/// so that `access` can work for both reversible and non reversible actions uniformly.
pub trait Reverse {
    /// Flips the bit of whether this action will reverse the data.
    fn reverse(&mut self);
}

/// Actions whose summaries keep track of the size of the segment.
/// Trees indexed by position need this to find the `i`-th element.
pub trait SizedAction: Action {
    /// The number of elements summarized by `value`.
    fn size(value: Self::Value) -> usize;
}

/// Summaries whose addition is commutative.
/// Required by [`crate::trees::fenwick::Fenwick::add`].
pub trait CommutativeSummary {}

/// Summaries with an inverse, so that prefix sums can be subtracted.
pub trait Group: std::ops::Neg<Output = Self> + Sized {}

impl CommutativeSummary for i32 {}
impl CommutativeSummary for i64 {}
impl CommutativeSummary for f64 {}

impl Group for i32 {}
impl Group for i64 {}
impl Group for f64 {}
