//! Dense interop with Faer.
//!
//! Converts a `TriangularMatrix<T>` to and from a full `faer::Mat<T>`. Entries below the diagonal
//! are zero in the dense form and are dropped when converting back.

use faer::Mat;

use crate::core::traits::{Element, MatShape};
use crate::error::UtError;
use crate::matrix::TriangularMatrix;

impl<T: Element> TriangularMatrix<T> {
    /// Expand to a dense `n x n` matrix.
    pub fn to_dense(&self) -> Mat<T> {
        let n = self.dim();
        Mat::from_fn(n, n, |i, j| {
            let row = &self.as_rows().as_slice()[i];
            if j < row.start_index() || j >= row.end_index() {
                T::zero()
            } else {
                row.as_slice()[j - row.start_index()].clone()
            }
        })
    }

    /// Keep the upper triangle of a square dense matrix.
    ///
    /// # Errors
    /// `SizeMismatch` if `dense` is not square, `InvalidArgument` if it exceeds `MAX_MATRIX_SIZE`.
    pub fn from_dense(dense: &Mat<T>) -> Result<Self, UtError> {
        if dense.nrows() != dense.ncols() {
            log::debug!("cannot take the upper triangle of a {}x{} matrix", dense.nrows(), dense.ncols());
            return Err(UtError::SizeMismatch);
        }
        let n = isize::try_from(dense.nrows()).map_err(|_| UtError::InvalidArgument)?;
        let mut m = Self::new(n)?;
        for (i, row) in m.rows_mut().enumerate() {
            for (k, value) in row.iter_mut().enumerate() {
                *value = dense[(i, i + k)].clone();
            }
        }
        Ok(m)
    }
}

/// Any Faer `Mat<T>` reports its shape like the crate's own containers.
impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }
    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }
}
