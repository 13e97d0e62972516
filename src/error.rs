//! The error type shared by every algorithm that can fail on valid-looking input.
//!
//! Contract violations (out-of-range indices and the like) panic instead, the same way
//! slices do.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a negative cycle is reachable from vertex {start}")]
    NegativeCycle { start: usize },

    #[error("there is no path from vertex {from} to vertex {to}")]
    NoPath { from: usize, to: usize },

    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: i64, modulus: i64 },

    #[error("the system of congruences has no solution")]
    NoCongruenceSolution,

    #[error("the matrix is singular: zero or infinitely many solutions exist")]
    SingularMatrix,

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("the lines are parallel and do not meet")]
    ParallelLines,
}
