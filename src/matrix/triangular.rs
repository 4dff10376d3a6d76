//! Upper-triangular matrix stored as a vector of shrinking row vectors.

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::config::Limits;
use crate::core::traits::MatShape;
use crate::error::UtError;
use crate::utils::bounds::check_matrix_dim;
use crate::vector::Vector;

/// Square matrix of dimension `n` storing only the entries `(i, j)` with `j >= i`.
///
/// Row `i` is a `Vector<T>` of length `n - i` whose start index is `i`. The triangular layout is
/// established by the constructors; arithmetic relies on both operands sharing it.
#[derive(Debug, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: Vector<Vector<T>>,
}

impl<T> TriangularMatrix<T> {
    /// Dimension used by `Default`.
    pub const DEFAULT_DIM: usize = 10;

    /// Build an `n x n` upper-triangular matrix of default-initialized entries.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is negative or above `MAX_MATRIX_SIZE`.
    pub fn new(n: isize) -> Result<Self, UtError>
    where
        T: Default,
    {
        Self::with_limits(n, &Limits::default())
    }

    /// Same as [`TriangularMatrix::new`], validating `n` against `limits.max_matrix_size`.
    pub fn with_limits(n: isize, limits: &Limits) -> Result<Self, UtError>
    where
        T: Default,
    {
        let n = check_matrix_dim(n, limits.max_matrix_size)?;
        log::trace!("allocating {n}x{n} triangular matrix");
        let rows = (0..n)
            .map(|i| Vector::with_limits((n - i) as isize, i as isize, limits))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: Vector::from_parts(rows, 0),
        })
    }

    /// Adopt a prebuilt vector of rows without checking the triangular shape.
    pub fn from_rows(rows: Vector<Vector<T>>) -> Self {
        Self { rows }
    }

    /// Matrix dimension `n`.
    pub fn dim(&self) -> usize {
        self.rows.size()
    }

    /// Row `i`, covering logical columns `i..n`.
    ///
    /// # Errors
    /// `OutOfRange` unless `0 <= i < n`.
    pub fn row(&self, i: isize) -> Result<&Vector<T>, UtError> {
        self.rows.get(i)
    }

    pub fn row_mut(&mut self, i: isize) -> Result<&mut Vector<T>, UtError> {
        self.rows.get_mut(i)
    }

    /// Entry `(i, j)`; `j` must lie in row `i`'s column window.
    pub fn get(&self, i: isize, j: isize) -> Result<&T, UtError> {
        self.row(i)?.get(j)
    }

    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut T, UtError> {
        self.row_mut(i)?.get_mut(j)
    }

    /// Replace `self` with a deep copy of `other`, dimension included.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.rows.clone_from(&other.rows);
    }

    pub fn rows(&self) -> Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    pub fn rows_mut(&mut self) -> IterMut<'_, Vector<T>> {
        self.rows.iter_mut()
    }

    /// The underlying vector of rows.
    pub fn as_rows(&self) -> &Vector<Vector<T>> {
        &self.rows
    }

    pub fn into_rows(self) -> Vector<Vector<T>> {
        self.rows
    }

    /// Number of stored entries, `n (n + 1) / 2` for a matrix built by `new`.
    pub fn stored_len(&self) -> usize {
        self.rows.iter().map(Vector::size).sum()
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: Default> Default for TriangularMatrix<T> {
    fn default() -> Self {
        let n = Self::DEFAULT_DIM;
        let rows = (0..n)
            .map(|i| Vector::from_parts(std::iter::repeat_with(T::default).take(n - i).collect(), i))
            .collect();
        Self {
            rows: Vector::from_parts(rows, 0),
        }
    }
}

impl<T: Eq> Eq for TriangularMatrix<T> {}

impl<T> From<Vector<Vector<T>>> for TriangularMatrix<T> {
    fn from(rows: Vector<Vector<T>>) -> Self {
        Self::from_rows(rows)
    }
}

/// Row access, so that `m[i][j]` reads entry `(i, j)`. Panics where [`TriangularMatrix::row`] fails.
impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = Vector<T>;

    fn index(&self, i: usize) -> &Vector<T> {
        &self.rows[i]
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut Vector<T> {
        &mut self.rows[i]
    }
}

impl<T> MatShape for TriangularMatrix<T> {
    fn nrows(&self) -> usize {
        self.dim()
    }
    fn ncols(&self) -> usize {
        self.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_ten_rows() {
        let m = TriangularMatrix::<u8>::default();
        assert_eq!(m.dim(), 10);
        assert_eq!(m, TriangularMatrix::new(10).unwrap());
    }

    #[test]
    fn stored_len_is_triangular_number() {
        let m = TriangularMatrix::<f32>::new(6).unwrap();
        assert_eq!(m.stored_len(), 21);
        assert_eq!(TriangularMatrix::<f32>::new(0).unwrap().stored_len(), 0);
    }

    #[test]
    fn entries_outside_the_triangle_are_rejected() {
        let mut m = TriangularMatrix::<i32>::new(3).unwrap();
        *m.get_mut(1, 2).unwrap() = 5;
        assert_eq!(*m.get(1, 2).unwrap(), 5);
        assert!(matches!(m.get(1, 0), Err(UtError::OutOfRange)));
        assert!(matches!(m.get(3, 3), Err(UtError::OutOfRange)));
    }
}
