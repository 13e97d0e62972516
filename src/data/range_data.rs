//! The summary and action used by [`crate::trees::lazy_treap::LazyTreap`]:
//! range minimum and range sum, under range addition and range reversal.

use super::*;

/// Summary of a segment: its length, its minimum and its sum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RangeSummary {
    pub size: usize,
    pub min: i64,
    pub sum: i64,
}

impl RangeSummary {
    /// The summary of a single value.
    pub fn single(value: i64) -> Self {
        RangeSummary {
            size: 1,
            min: value,
            sum: value,
        }
    }
}

impl Default for RangeSummary {
    fn default() -> Self {
        AddReverse::EMPTY
    }
}

/// Adds a constant to every element of a segment, and possibly reverses it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct AddReverse {
    pub add: i64,
    pub reverse: bool,
}

impl AddReverse {
    pub fn add(add: i64) -> Self {
        AddReverse {
            add,
            reverse: false,
        }
    }

    pub fn reversal() -> Self {
        AddReverse {
            add: 0,
            reverse: true,
        }
    }
}

impl Action for AddReverse {
    fn compose_a(self, other: Self) -> Self {
        // addition and reversal commute, so the order doesn't matter here.
        AddReverse {
            add: self.add + other.add,
            reverse: self.reverse ^ other.reverse,
        }
    }
    const IDENTITY: Self = AddReverse {
        add: 0,
        reverse: false,
    };

    type Value = RangeSummary;
    fn compose_v(left: RangeSummary, right: RangeSummary) -> RangeSummary {
        RangeSummary {
            size: left.size + right.size,
            min: left.min.min(right.min),
            sum: left.sum + right.sum,
        }
    }
    const EMPTY: RangeSummary = RangeSummary {
        size: 0,
        min: i64::MAX,
        sum: 0,
    };

    fn act(self, summary: RangeSummary) -> RangeSummary {
        if summary.size == 0 {
            return summary;
        }
        RangeSummary {
            size: summary.size,
            min: summary.min + self.add,
            sum: summary.sum + self.add * summary.size as i64,
        }
    }

    fn to_reverse(&self) -> bool {
        self.reverse
    }
}

impl SizedAction for AddReverse {
    fn size(summary: RangeSummary) -> usize {
        summary.size
    }
}

impl Reverse for AddReverse {
    fn reverse(&mut self) {
        self.reverse ^= true;
    }
}

#[test]
fn add_scales_sum_by_size() {
    let summary = [3, -1, 7]
        .iter()
        .map(|&x| RangeSummary::single(x))
        .fold(AddReverse::EMPTY, AddReverse::compose_v);
    let acted = AddReverse::add(5).act(summary);
    assert_eq!(
        acted,
        RangeSummary {
            size: 3,
            min: 4,
            sum: 24
        }
    );
}

#[test]
fn empty_summary_is_unchanged_by_actions() {
    assert_eq!(AddReverse::add(-3).act(AddReverse::EMPTY), AddReverse::EMPTY);
}

#[test]
fn reversals_cancel() {
    let mut action = AddReverse::add(2).compose_a(AddReverse::reversal());
    assert!(action.to_reverse());
    action.reverse();
    assert_eq!(action, AddReverse::add(2));
}
