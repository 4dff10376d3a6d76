//! Core linear-algebra traits for utmatrix.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::error::UtError;

/// Capability set required of a container element.
///
/// Blanket-implemented for every type that can be default-constructed, cloned, compared, and
/// combined with itself by `+`, `-` and `*`. `Zero` supplies the start value of inner products.
pub trait Element:
    Clone + Default + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Zero
{
}

impl<T> Element for T where
    T: Clone + Default + PartialEq + Debug + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Zero
{
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner product with another value of the same shape.
pub trait InnerProduct<Rhs = Self> {
    /// Associated scalar type.
    type Scalar;
    /// Compute dot(self, rhs).
    fn inner(&self, rhs: &Rhs) -> Result<Self::Scalar, UtError>;
}

/// Logical shape of a container.
pub trait MatShape {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
    /// Number of columns (1 for a vector).
    fn ncols(&self) -> usize;
}
