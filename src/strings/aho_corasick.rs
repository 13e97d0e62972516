//! Aho-Corasick multiple pattern matching over ASCII text.
//!
//! Building takes `O(ALPHABET * total pattern length)`, searching `O(text length + matches)`.

use std::collections::VecDeque;

pub const ALPHABET: usize = 128;

const ROOT: usize = 0;

#[derive(Clone, Debug)]
struct State {
    // complete transition function, failures already folded in
    next: [usize; ALPHABET],
    fail: usize,
    // indices of the patterns that end here, including through failure links
    matches: Vec<usize>,
}

impl State {
    fn new() -> Self {
        State {
            next: [usize::MAX; ALPHABET],
            fail: ROOT,
            matches: vec![],
        }
    }
}

#[derive(Clone, Debug)]
pub struct AhoCorasick {
    states: Vec<State>,
}

impl AhoCorasick {
    /// Builds the automaton. Patterns must be ASCII.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut states = vec![State::new()];
        for (index, pattern) in patterns.iter().enumerate() {
            let mut current = ROOT;
            for &c in pattern.as_ref().as_bytes() {
                assert!(c.is_ascii(), "pattern {index} is not ascii");
                let c = c as usize;
                if states[current].next[c] == usize::MAX {
                    states.push(State::new());
                    states[current].next[c] = states.len() - 1;
                }
                current = states[current].next[c];
            }
            states[current].matches.push(index);
        }

        let mut queue = VecDeque::new();
        // empty patterns end at the root, and so everywhere
        let at_root = states[ROOT].matches.clone();
        for c in 0..ALPHABET {
            match states[ROOT].next[c] {
                usize::MAX => states[ROOT].next[c] = ROOT,
                child => {
                    states[child].matches.extend(at_root.iter().copied());
                    queue.push_back(child);
                }
            }
        }
        // breadth first, so the failure target of every state is finished before it
        while let Some(parent) = queue.pop_front() {
            let parent_fail = states[parent].fail;
            for c in 0..ALPHABET {
                let child = states[parent].next[c];
                let fallback = states[parent_fail].next[c];
                if child == usize::MAX {
                    states[parent].next[c] = fallback;
                    continue;
                }
                states[child].fail = fallback;
                let inherited = states[fallback].matches.clone();
                states[child].matches.extend(inherited);
                queue.push_back(child);
            }
        }
        AhoCorasick { states }
    }

    fn step(&self, state: usize, c: u8) -> usize {
        if c.is_ascii() {
            self.states[state].next[c as usize]
        } else {
            ROOT
        }
    }

    /// Total number of pattern occurrences in `text`, counting every pattern separately.
    /// An empty pattern occurs `text.len() + 1` times.
    pub fn count_matches(&self, text: &str) -> usize {
        let mut state = ROOT;
        let mut count = self.states[ROOT].matches.len();
        for &c in text.as_bytes() {
            state = self.step(state, c);
            count += self.states[state].matches.len();
        }
        count
    }

    /// All occurrences as `(end, pattern index)`, where the match is `text[end - len..end]`.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let mut state = ROOT;
        let mut found: Vec<_> = self.states[ROOT].matches.iter().map(|&pattern| (0, pattern)).collect();
        for (i, &c) in text.as_bytes().iter().enumerate() {
            state = self.step(state, c);
            found.extend(self.states[state].matches.iter().map(|&pattern| (i + 1, pattern)));
        }
        found
    }
}

/// Builds an automaton for `patterns` and counts their occurrences in `text`.
pub fn count_matches<S: AsRef<str>>(patterns: &[S], text: &str) -> usize {
    AhoCorasick::new(patterns).count_matches(text)
}
