//! Arithmetic on `TriangularMatrix`.
//!
//! Addition and subtraction check the row count, then hand every row pair to the row vector's own
//! element-wise operation, so a row-length mismatch surfaces as `SizeMismatch` as well.

use std::ops::{Add, Sub};

use crate::core::traits::{Element, MatVec};
use crate::error::UtError;
use crate::matrix::TriangularMatrix;
use crate::utils::bounds::check_same_size;
use crate::vector::Vector;

impl<T: Element> TriangularMatrix<T> {
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>, UtError>,
    ) -> Result<Self, UtError> {
        check_same_size(self.dim(), other.dim())?;
        let rows = self
            .rows()
            .zip(other.rows())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(Vector::from_parts(rows, self.as_rows().start_index())))
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    /// `SizeMismatch` if the dimensions (or any pair of rows) differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, UtError> {
        self.zip_rows(other, Vector::try_add)
    }

    /// Entry-wise difference. Fails like [`TriangularMatrix::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, UtError> {
        self.zip_rows(other, Vector::try_sub)
    }

    /// Compute `A x` using the stored upper-triangular entries.
    ///
    /// # Errors
    /// `SizeMismatch` if `x` is shorter than a row's column window or longer than the dimension.
    pub fn try_matvec(&self, x: &[T]) -> Result<Vec<T>, UtError> {
        check_same_size(self.dim(), x.len())?;
        self.rows()
            .map(|row| -> Result<T, UtError> {
                let cols = x.get(row.start_index()..row.end_index()).ok_or(UtError::SizeMismatch)?;
                Ok(row
                    .iter()
                    .zip(cols)
                    .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
            })
            .collect()
    }
}

/// Matrix–vector product y = A x over the upper triangle.
impl<T: Element> MatVec<Vec<T>> for TriangularMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.dim(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.dim(), x.len(), "Input vector x has incorrect length");
        for (yi, row) in y.iter_mut().zip(self.rows()) {
            *yi = T::zero();
            for (k, a) in row.iter().enumerate() {
                *yi = yi.clone() + a.clone() * x[row.start_index() + k].clone();
            }
        }
    }
}

impl<'a, T: Element> Add<&'a TriangularMatrix<T>> for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>, UtError>;

    fn add(self, rhs: &'a TriangularMatrix<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'a, T: Element> Sub<&'a TriangularMatrix<T>> for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>, UtError>;

    fn sub(self, rhs: &'a TriangularMatrix<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}
