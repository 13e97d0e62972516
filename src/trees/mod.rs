//! Trees and tree-like arrays over sequences.
//!
//! The treaps are built on [`basic_tree`]; the rest are flat arrays.

pub mod basic_tree;
pub mod bidirectional_treap;
pub mod bit_trie;
pub mod fenwick;
pub mod lazy_treap;
pub mod segment_tree;
pub mod sparse_table;
pub mod treap;

pub use bidirectional_treap::ReversibleBidirectionalTreap;
pub use bit_trie::BitTrie;
pub use fenwick::{Fenwick, Fenwick2D, RangeAddFenwick};
pub use lazy_treap::LazyTreap;
pub use segment_tree::{DynamicRmqSegmentTree, RmqSegmentTree};
pub use sparse_table::SparseTable;
pub use treap::Treap;
