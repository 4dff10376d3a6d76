//! Matrix module: the upper-triangular matrix and its dense interop.
//!
//! A `TriangularMatrix<T>` of dimension `n` keeps one row vector per matrix row. Row `i` holds the
//! `n - i` entries on and above the diagonal and is indexed by the logical columns `i..n`, so
//! `m[i][j]` addresses entry `(i, j)` for `j >= i` only.

pub mod dense;
pub mod io;
pub mod ops;
pub mod triangular;

pub use triangular::TriangularMatrix;
