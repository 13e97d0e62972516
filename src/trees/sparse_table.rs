//! Sparse tables: `O(n log n)` preprocessing, `O(1)` queries for idempotent operations
//! such as `min`, `max` and `gcd`.

#[derive(Clone, Debug)]
pub struct SparseTable<T> {
    // `levels[i][j]` is the combination of `j..j + 2^i`
    levels: Vec<Vec<T>>,
    op: fn(T, T) -> T,
}

impl SparseTable<i32> {
    /// A range minimum table.
    pub fn new(data: &[i32]) -> Self {
        Self::with_op(data, std::cmp::min)
    }
}

impl<T: Copy> SparseTable<T> {
    /// `op` must be associative and idempotent.
    pub fn with_op(data: &[T], op: fn(T, T) -> T) -> Self {
        let mut levels = vec![data.to_vec()];
        let mut block = 2;
        while block <= data.len() {
            let prev = &levels[levels.len() - 1];
            let level = (0..data.len() - block + 1)
                .map(|j| op(prev[j], prev[j + block / 2]))
                .collect();
            levels.push(level);
            block *= 2;
        }
        SparseTable { levels, op }
    }

    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels[0].is_empty()
    }

    /// Combines the values in `start..end`. The range must not be empty.
    pub fn query(&self, start: usize, end: usize) -> T {
        assert!(
            start < end && end <= self.len(),
            "range {start}..{end} is empty or out of bounds of sparse table length {}",
            self.len()
        );
        let level = (end - start).ilog2() as usize;
        (self.op)(
            self.levels[level][start],
            self.levels[level][end - (1 << level)],
        )
    }
}

impl<T: Copy + Ord> SparseTable<T> {
    /// Same as [`SparseTable::query`]. Reads better for minimum tables.
    pub fn min_range(&self, start: usize, end: usize) -> T {
        self.query(start, end)
    }
}

#[test]
fn sparse_table_min() {
    let data = [5, 2, 8, -1, 4, 4, 9, 0, 3, 7, 1];
    let table = SparseTable::new(&data);
    for start in 0..data.len() {
        for end in start + 1..=data.len() {
            assert_eq!(
                table.min_range(start, end),
                *data[start..end].iter().min().unwrap()
            );
        }
    }
}

#[test]
fn sparse_table_max() {
    let data = [3u64, 1, 4, 1, 5, 9, 2, 6];
    let table = SparseTable::with_op(&data, std::cmp::max);
    assert_eq!(table.query(0, 8), 9);
    assert_eq!(table.query(0, 5), 5);
    assert_eq!(table.query(6, 8), 6);
    assert_eq!(table.query(1, 2), 1);
}
