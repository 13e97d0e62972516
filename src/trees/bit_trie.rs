//! A binary trie over the bits of integers, for xor-nearest queries.

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; 2],
}

/// Stores integers whose bits above `top_bit` are all zero.
#[derive(Clone, Debug)]
pub struct BitTrie {
    top_bit: u32,
    root: TrieNode,
    len: usize,
}

fn bit_of(value: u64, bit: u32) -> usize {
    ((value >> bit) & 1) as usize
}

impl BitTrie {
    pub fn new(top_bit: u32) -> Self {
        assert!(top_bit < 64, "top bit {top_bit} doesn't fit in a u64");
        BitTrie {
            top_bit,
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Number of distinct values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bits(&self) -> impl Iterator<Item = u32> {
        (0..=self.top_bit).rev()
    }

    pub fn insert(&mut self, value: u64) {
        let mut inserted = false;
        let mut node = &mut self.root;
        for bit in (0..=self.top_bit).rev() {
            node = &mut **node.children[bit_of(value, bit)].get_or_insert_with(|| {
                inserted = true;
                Box::default()
            });
        }
        if inserted {
            self.len += 1;
        }
    }

    pub fn find(&self, value: u64) -> bool {
        let mut node = &self.root;
        for bit in self.bits() {
            match &node.children[bit_of(value, bit)] {
                Some(child) => node = &**child,
                None => return false,
            }
        }
        true
    }

    /// The stored value that minimizes `value ^ stored`.
    /// Returns [`None`] if the trie is empty.
    pub fn find_nearest(&self, value: u64) -> Option<u64> {
        self.descend(value, false)
    }

    /// The stored value that maximizes `value ^ stored`.
    pub fn find_farthest(&self, value: u64) -> Option<u64> {
        self.descend(value, true)
    }

    fn descend(&self, value: u64, flip: bool) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        let mut node = &self.root;
        let mut result = 0;
        for bit in self.bits() {
            let mut side = bit_of(value, bit) ^ flip as usize;
            if node.children[side].is_none() {
                side ^= 1;
            }
            // every inner node has at least one son
            node = node.children[side].as_deref()?;
            result |= (side as u64) << bit;
        }
        Some(result)
    }
}

#[test]
fn bit_trie_nearest() {
    let mut trie = BitTrie::new(7);
    assert_eq!(trie.find_nearest(3), None);
    for &v in [5u64, 12, 100, 33, 12].iter() {
        trie.insert(v);
    }
    assert_eq!(trie.len(), 4);
    assert!(trie.find(100));
    assert!(!trie.find(101));
    assert_eq!(trie.find_nearest(13), Some(12));
    assert_eq!(trie.find_nearest(101), Some(100));
    assert_eq!(trie.find_nearest(4), Some(5));
    assert_eq!(trie.find_nearest(32), Some(33));
    assert_eq!(trie.find_farthest(5), Some(100));
    assert_eq!(trie.find_farthest(127), Some(5));
}

#[test]
fn bit_trie_matches_brute_force() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let mut trie = BitTrie::new(19);
    let mut stored = vec![];
    for _ in 0..200 {
        let v = rng.gen_range(0..1 << 20);
        trie.insert(v);
        stored.push(v);
        let query = rng.gen_range(0..1 << 20);
        let best = stored.iter().map(|&s| s ^ query).min().unwrap();
        let worst = stored.iter().map(|&s| s ^ query).max().unwrap();
        assert_eq!(trie.find_nearest(query).map(|s| s ^ query), Some(best));
        assert_eq!(trie.find_farthest(query).map(|s| s ^ query), Some(worst));
    }
}
