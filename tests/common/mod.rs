use competitive::LazyTreap;
use rand::{self, Rng};
use std::ops::Range;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Add { range: Range<usize>, add: i64 },
    Reverse { range: Range<usize> },
    Rotate { range: Range<usize>, count: usize },
    Query { range: Range<usize> },
    Insert { index: usize, value: i64 },
    Delete { index: usize },
}

/// The result after one round of querying
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Empty,
    Summary { min: i64, sum: i64 },
    Value(i64),
}

fn fit_range(range: Range<usize>, len: usize) -> Range<usize> {
    let (a, b) = (range.start % (len + 1), range.end % (len + 1));
    a.min(b)..a.max(b)
}

impl RoundAction {
    /// The same action with its indices moved into a sequence of length `len`.
    /// Generated actions don't know the length of the sequence when they run.
    pub fn fit(self, len: usize) -> RoundAction {
        use RoundAction::*;
        match self {
            Add { range, add } => Add {
                range: fit_range(range, len),
                add,
            },
            Reverse { range } => Reverse {
                range: fit_range(range, len),
            },
            Rotate { range, count } => {
                let range = fit_range(range, len);
                // a whole turn is a valid rotation too
                let count = count % (range.len() + 1);
                Rotate { range, count }
            }
            Query { range } => Query {
                range: fit_range(range, len),
            },
            Insert { index, value } => Insert {
                index: index % (len + 1),
                value,
            },
            Delete { index } => Delete {
                index: if len == 0 { 0 } else { index % len },
            },
        }
    }
}

pub fn random_range(len: usize) -> Range<usize> {
    let mut rng = rand::thread_rng();
    let res = (rng.gen_range(0..len + 1), rng.gen_range(0..len + 1));
    if res.0 <= res.1 {
        res.0..res.1
    } else {
        res.1..res.0
    }
}

pub const MAX_ADD: i64 = 200;

pub fn random_round_action(rng: &mut rand::prelude::ThreadRng, len: usize) -> RoundAction {
    use RoundAction::*;
    match rng.gen_range(0..6) {
        0 => Add {
            range: random_range(len),
            add: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        1 => Reverse {
            range: random_range(len),
        },
        2 => Rotate {
            range: random_range(len),
            count: rng.gen_range(0..=len),
        },
        3 => Query {
            range: random_range(len),
        },
        4 => Insert {
            index: rng.gen_range(0..=len),
            value: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        _ => Delete {
            index: if len > 0 { rng.gen_range(0..len) } else { 0 },
        },
    }
}

/// Runs one round on a plain vector, the reference for the treap.
pub fn run_round_naive(round_action: RoundAction, values: &mut Vec<i64>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;
    match round_action.fit(values.len()) {
        Add { range, add } => {
            values[range].iter_mut().for_each(|v| *v += add);
            Empty
        }
        Reverse { range } => {
            values[range].reverse();
            Empty
        }
        Rotate { range, count } => {
            values[range].rotate_left(count);
            Empty
        }
        Query { range } => Summary {
            min: values[range.clone()].iter().copied().min().unwrap_or(i64::MAX),
            sum: values[range].iter().sum(),
        },
        Insert { index, value } => {
            values.insert(index, value);
            Empty
        }
        Delete { .. } if values.is_empty() => Empty,
        Delete { index } => Value(values.remove(index)),
    }
}

pub fn run_round(round_action: RoundAction, tree: &mut LazyTreap) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;
    match round_action.fit(tree.len()) {
        Add { range, add } => {
            tree.add_range(range.start, range.end, add);
            Empty
        }
        Reverse { range } => {
            tree.reverse_range(range.start, range.end);
            Empty
        }
        Rotate { range, count } => {
            tree.rotate_left_range(range.start, range.end, count);
            Empty
        }
        Query { range } => Summary {
            min: tree.min_range(range.start, range.end),
            sum: tree.sum_range(range.start, range.end),
        },
        Insert { index, value } => {
            tree.insert(index, value);
            Empty
        }
        Delete { .. } if tree.is_empty() => Empty,
        Delete { index } => Value(tree.delete(index)),
    }
}

const INITIAL_SIZE: i64 = 200;

/// Runs random rounds on a treap and a vector side by side.
pub fn check_consistency(num_rounds: u32) {
    let mut rng = rand::thread_rng();
    let mut values: Vec<i64> = (0..INITIAL_SIZE).collect();
    let mut tree: LazyTreap = values.iter().copied().collect();

    for _ in 0..num_rounds {
        let round_action = random_round_action(&mut rng, values.len());
        let expected = run_round_naive(round_action.clone(), &mut values);
        assert_eq!(run_round(round_action, &mut tree), expected);
        assert_eq!(tree.len(), values.len());
        // This check takes `O(n)` time, but the trees stay around their initial size.
        tree.assert_correctness();
    }
    assert_eq!(tree.to_vec(), values);
}

/// Runs the given rounds on a treap and a vector side by side.
pub fn check_consistency_proptest(
    initial: &[i64],
    rounds: &[RoundAction],
) -> Result<(), proptest::test_runner::TestCaseError> {
    let mut values = initial.to_vec();
    let mut tree: LazyTreap = initial.iter().copied().collect();
    for round_action in rounds {
        let expected = run_round_naive(round_action.clone(), &mut values);
        proptest::prop_assert_eq!(run_round(round_action.clone(), &mut tree), expected);
    }
    tree.assert_correctness();
    proptest::prop_assert_eq!(tree.to_vec(), values);
    Ok(())
}
