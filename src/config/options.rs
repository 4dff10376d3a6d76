//! Construction limits and text output options.
//!
//! `Limits` bounds the sizes accepted by `Vector::with_limits` and `TriangularMatrix::with_limits`.
//! Limits can only tighten the crate-wide ceilings `MAX_VECTOR_SIZE` and `MAX_MATRIX_SIZE`, so a
//! container built under any `Limits` is also valid under the defaults.
//! `FormatOptions` controls how vectors and matrices are written as text; it has no effect on
//! reading.

use crate::error::UtError;
use crate::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};

/// Size ceilings enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted vector length
    pub max_vector_size: usize,

    /// Largest accepted matrix dimension
    pub max_matrix_size: usize,
}

impl Limits {
    /// Build limits no looser than the crate-wide ceilings.
    pub fn new(max_vector_size: usize, max_matrix_size: usize) -> Result<Self, UtError> {
        if max_vector_size > MAX_VECTOR_SIZE || max_matrix_size > MAX_MATRIX_SIZE {
            log::debug!(
                "rejected limits ({max_vector_size}, {max_matrix_size}): ceilings are ({MAX_VECTOR_SIZE}, {MAX_MATRIX_SIZE})"
            );
            return Err(UtError::InvalidArgument);
        }
        Ok(Self { max_vector_size, max_matrix_size })
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

/// Text framing for `write_with`.
///
/// Output only: `read_from` and `read_tokens` split on whitespace, so text written with a
/// non-whitespace separator or row terminator cannot be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Written between two elements of a vector
    pub separator: String,

    /// Written after every matrix row
    pub row_terminator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            row_terminator: "\n".to_string(),
        }
    }
}
