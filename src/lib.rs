//! utmatrix: offset-indexed vectors and upper-triangular matrices
//!
//! This crate provides a generic, bounds-checked vector container whose logical indices start at an
//! arbitrary offset, and an upper-triangular matrix that stores only the entries on and above the
//! diagonal, one shrinking row vector per matrix row.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::TriangularMatrix;
pub use vector::Vector;

/// Largest number of elements a `Vector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension of a `TriangularMatrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;
