//! String matching: single pattern ([`kmp`]), many patterns ([`aho_corasick`]) and
//! suffix arrays ([`suffix_array`]).

pub mod aho_corasick;
pub mod kmp;
pub mod suffix_array;
