//! Suffix arrays by prefix doubling, `O(n log^2 n)`.
//!
//! The empty suffix is not included: the array is a permutation of `0..n`.

use std::cmp::Ordering;

use crate::trees::sparse_table::SparseTable;

// One round of prefix doubling: sorts `order` by the ranks of the first `2 * step`
// characters, given the ranks of the first `step` characters, and returns the new ranks.
fn double(order: &mut [usize], ranks: &[i64], step: usize) -> Vec<i64> {
    let n = ranks.len();
    let key = |i: usize| (ranks[i], if i + step < n { ranks[i + step] } else { -1 });
    order.sort_by_key(|&i| key(i));
    let mut next = vec![0; n];
    for (position, &i) in order.iter().enumerate() {
        next[i] = if position > 0 && key(order[position - 1]) == key(i) {
            next[order[position - 1]]
        } else {
            position as i64
        };
    }
    next
}

/// The start positions of the suffixes of `s`, in lexicographic order.
pub fn build_suffix_array(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut ranks: Vec<i64> = s.iter().map(|&c| c as i64).collect();
    if n <= 1 {
        return order;
    }
    let mut step = 1;
    loop {
        let next = double(&mut order, &ranks, step);
        if step * 2 >= n {
            return order;
        }
        ranks = next;
        step *= 2;
    }
}

/// Finds `pattern` in `text` by binary search over the suffix array `sa`. `O(m log n)`.
///
/// Like [`slice::binary_search`], returns `Ok` with the start of the lexicographically
/// smallest suffix that begins with `pattern`, or `Err` with the index in `sa`
/// where the pattern would be inserted.
pub fn find_with_suffix_array(pattern: &[u8], text: &[u8], sa: &[usize]) -> Result<usize, usize> {
    let prefix = |start: usize| &text[start..(start + pattern.len()).min(text.len())];
    let lower = sa.partition_point(|&start| prefix(start).cmp(pattern) == Ordering::Less);
    match sa.get(lower) {
        Some(&start) if prefix(start) == pattern => Ok(start),
        _ => Err(lower),
    }
}

/// A suffix array together with `O(1)` longest common prefix queries.
#[derive(Clone, Debug)]
pub struct SuffixArray {
    sa: Vec<usize>,
    rank: Vec<usize>,
    // `lcp[i]` is the longest common prefix of suffixes `sa[i]` and `sa[i + 1]`
    lcp: SparseTable<usize>,
}

impl SuffixArray {
    pub fn new(s: &[u8]) -> Self {
        let n = s.len();
        let mut order: Vec<usize> = (0..n).collect();
        // `levels[t][i]` ranks `s[i..i + 2^t]`
        let mut levels: Vec<Vec<i64>> = vec![s.iter().map(|&c| c as i64).collect()];
        let mut step = 1;
        while step < n {
            let next = double(&mut order, &levels[levels.len() - 1], step);
            levels.push(next);
            step *= 2;
        }
        let mut lcp = vec![0; n.saturating_sub(1)];
        for (i, common) in lcp.iter_mut().enumerate() {
            let (mut x, mut y) = (order[i], order[i + 1]);
            for (k, level) in levels.iter().enumerate().rev() {
                if x < n && y < n && level[x] == level[y] {
                    x += 1 << k;
                    y += 1 << k;
                    *common += 1 << k;
                }
            }
        }

        let mut rank = vec![0; n];
        for (position, &start) in order.iter().enumerate() {
            rank[start] = position;
        }
        SuffixArray {
            sa: order,
            rank,
            lcp: SparseTable::with_op(&lcp, std::cmp::min),
        }
    }

    pub fn sa(&self) -> &[usize] {
        &self.sa
    }

    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// The position of suffix `start` in the suffix array.
    pub fn rank(&self, start: usize) -> usize {
        self.rank[start]
    }

    /// The longest common prefix of the suffixes `sa[x]` and `sa[y]`, for `x < y`.
    pub fn lcp(&self, x: usize, y: usize) -> usize {
        assert!(x < y, "lcp needs two distinct positions in order, got {x} and {y}");
        self.lcp.query(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_suffix_array(s: &[u8]) -> Vec<usize> {
        let mut sa: Vec<usize> = (0..s.len()).collect();
        sa.sort_by_key(|&i| &s[i..]);
        sa
    }

    #[test]
    fn banana() {
        assert_eq!(build_suffix_array(b"banana"), vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(build_suffix_array(b""), Vec::<usize>::new());
        assert_eq!(build_suffix_array(b"z"), vec![0]);
    }

    #[test]
    fn matches_naive_sort() {
        for s in [
            &b"mississippi"[..],
            &b"abracadabra"[..],
            &b"aaaaaaaaaaaaa"[..],
            &b"abababababbabab"[..],
            &b"zyxwvutsrq"[..],
        ] {
            assert_eq!(build_suffix_array(s), naive_suffix_array(s));
            assert_eq!(SuffixArray::new(s).sa(), &naive_suffix_array(s)[..]);
        }
    }

    #[test]
    fn find() {
        let text = b"mississippi";
        let sa = build_suffix_array(text);
        assert_eq!(find_with_suffix_array(b"ssi", text, &sa), Ok(5));
        assert_eq!(find_with_suffix_array(b"i", text, &sa), Ok(10));
        assert_eq!(find_with_suffix_array(b"mississippi", text, &sa), Ok(0));
        assert_eq!(find_with_suffix_array(b"sis", text, &sa), Ok(3));
        assert_eq!(find_with_suffix_array(b"sit", text, &sa), Err(9));
        assert_eq!(find_with_suffix_array(b"zz", text, &sa), Err(11));
        assert_eq!(find_with_suffix_array(b"a", text, &sa), Err(0));
    }

    #[test]
    fn lcp_queries() {
        let s = b"abracadabra";
        let array = SuffixArray::new(s);
        let common = |a: usize, b: usize| {
            s[a..].iter().zip(s[b..].iter()).take_while(|(x, y)| x == y).count()
        };
        for x in 0..s.len() {
            for y in x + 1..s.len() {
                assert_eq!(array.lcp(x, y), common(array.sa()[x], array.sa()[y]));
            }
        }
        assert_eq!(array.rank(array.sa()[4]), 4);
    }
}
