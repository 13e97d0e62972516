//! Classical competitive-programming data structures and algorithms.
//!
//! Every module is self contained: sequences ([`trees`], [`union_find`]),
//! [`strings`], [`graphs`], [`math`] and [`geometry`].

pub mod data;
pub mod error;
pub mod geometry;
pub mod graphs;
pub mod math;
pub mod strings;
pub mod trees;
pub mod union_find;

pub use data::Action;
pub use error::{Error, Result};
pub use trees::*;
