//! Knuth-Morris-Pratt matching. `O(n + m)`.

/// `table[i]` is the length of the longest proper border of `pattern[..=i]`.
pub fn failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut border = 0;
    for i in 1..pattern.len() {
        while border > 0 && pattern[i] != pattern[border] {
            border = table[border - 1];
        }
        if pattern[i] == pattern[border] {
            border += 1;
        }
        table[i] = border;
    }
    table
}

/// Start positions of all (possibly overlapping) occurrences of `pattern` in `text`.
///
/// The empty pattern occurs at every position, `text.len() + 1` times.
pub fn find_all<T: PartialEq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=text.len()).collect();
    }
    let table = failure_table(pattern);
    let mut matched = 0;
    let mut found = vec![];
    for (i, c) in text.iter().enumerate() {
        while matched > 0 && pattern[matched] != *c {
            matched = table[matched - 1];
        }
        if pattern[matched] == *c {
            matched += 1;
        }
        if matched == pattern.len() {
            found.push(i + 1 - matched);
            matched = table[matched - 1];
        }
    }
    found
}

/// Number of (possibly overlapping) occurrences of `pattern` in `text`.
pub fn search_count(pattern: &str, text: &str) -> usize {
    find_all(pattern.as_bytes(), text.as_bytes()).len()
}

#[test]
fn kmp_counts_overlapping() {
    assert_eq!(search_count("aa", "aaaa"), 3);
    assert_eq!(search_count("abab", "abababab"), 3);
    assert_eq!(search_count("abc", "ababcabcab"), 2);
    assert_eq!(search_count("xyz", "ababcabcab"), 0);
    assert_eq!(search_count("longer than text", "short"), 0);
    assert_eq!(search_count("", "abc"), 4);
}

#[test]
fn kmp_positions_and_table() {
    assert_eq!(failure_table(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
    assert_eq!(find_all(b"aab", b"aabaaabaab"), vec![0, 4, 7]);
    assert_eq!(find_all(&[1, 2, 1], &[1, 2, 1, 2, 1, 3, 1, 2, 1]), vec![0, 2, 6]);
}
