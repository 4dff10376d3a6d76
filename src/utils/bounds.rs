//! Bounds checks shared by the vector and matrix constructors and accessors.
//!
//! Sizes, start indices and positions arrive as `isize` so that negative requests can be rejected
//! with an error instead of wrapping around. Every helper here either returns the validated value
//! as a `usize` or one of the error kinds `InvalidArgument` / `OutOfRange`.

use crate::error::UtError;
use crate::MAX_VECTOR_SIZE;

/// Validate a requested vector length and start index against `max_size`.
pub fn check_vector_shape(size: isize, start_index: isize, max_size: usize) -> Result<(usize, usize), UtError> {
    if size < 0 || start_index < 0 || size as usize > max_size {
        log::debug!("rejected vector shape: size {size}, start index {start_index}, limit {max_size}");
        return Err(UtError::InvalidArgument);
    }
    Ok((size as usize, start_index as usize))
}

/// Validate a requested matrix dimension against `max_dim`.
pub fn check_matrix_dim(n: isize, max_dim: usize) -> Result<usize, UtError> {
    if n < 0 || n as usize > max_dim {
        log::debug!("rejected matrix dimension {n}, limit {max_dim}");
        return Err(UtError::InvalidArgument);
    }
    Ok(n as usize)
}

/// Map a logical position onto a storage offset.
///
/// Valid positions lie in `[start_index, start_index + size - 1]` and never above `MAX_VECTOR_SIZE`.
pub fn storage_offset(pos: isize, start_index: usize, size: usize) -> Result<usize, UtError> {
    if pos < 0 {
        log::debug!("rejected negative position {pos}");
        return Err(UtError::OutOfRange);
    }
    let pos = pos as usize;
    if pos > MAX_VECTOR_SIZE || pos < start_index || pos - start_index >= size {
        log::debug!("position {pos} outside window [{start_index}, {start_index} + {size})");
        return Err(UtError::OutOfRange);
    }
    Ok(pos - start_index)
}

/// Fail with `SizeMismatch` unless both lengths agree.
pub fn check_same_size(lhs: usize, rhs: usize) -> Result<(), UtError> {
    if lhs != rhs {
        log::debug!("size mismatch: {lhs} vs {rhs}");
        return Err(UtError::SizeMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_shape() {
        assert_eq!(check_vector_shape(0, 0, 10).unwrap(), (0, 0));
        assert_eq!(check_vector_shape(10, 3, 10).unwrap(), (10, 3));
        assert!(matches!(check_vector_shape(11, 0, 10), Err(UtError::InvalidArgument)));
        assert!(matches!(check_vector_shape(-5, 0, 10), Err(UtError::InvalidArgument)));
        // a zero size does not excuse a negative start index
        assert!(matches!(check_vector_shape(0, -2, 10), Err(UtError::InvalidArgument)));
    }

    #[test]
    fn matrix_dim() {
        assert_eq!(check_matrix_dim(0, 5).unwrap(), 0);
        assert_eq!(check_matrix_dim(5, 5).unwrap(), 5);
        assert!(check_matrix_dim(6, 5).is_err());
        assert!(check_matrix_dim(-1, 5).is_err());
    }

    #[test]
    fn offsets_follow_the_window() {
        assert_eq!(storage_offset(2, 2, 3).unwrap(), 0);
        assert_eq!(storage_offset(4, 2, 3).unwrap(), 2);
        assert!(storage_offset(1, 2, 3).is_err());
        assert!(storage_offset(5, 2, 3).is_err());
        assert!(storage_offset(-3, 0, 4).is_err());
        assert!(storage_offset(0, 0, 0).is_err());
    }

    #[test]
    fn offsets_respect_the_ceiling() {
        let past = (MAX_VECTOR_SIZE + 1) as isize;
        assert!(storage_offset(past, MAX_VECTOR_SIZE, 5).is_err());
        assert_eq!(storage_offset(MAX_VECTOR_SIZE as isize, MAX_VECTOR_SIZE, 5).unwrap(), 0);
    }
}
