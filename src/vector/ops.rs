//! Scalar and element-wise arithmetic on `Vector`.
//!
//! Scalar operations are total and keep the size and start index of the receiver. Element-wise
//! operations pair elements by storage position and fail with `SizeMismatch` when the lengths
//! differ; the result keeps the left operand's start index.

use std::ops::{Add, Mul, Sub};

use crate::core::traits::{Element, InnerProduct};
use crate::error::UtError;
use crate::utils::bounds::check_same_size;
use crate::vector::Vector;

impl<T: Element> Vector<T> {
    fn map(&self, f: impl Fn(&T) -> T) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
            start_index: self.start_index,
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&T, &T) -> T) -> Result<Self, UtError> {
        check_same_size(self.size(), other.size())?;
        Ok(Self {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            start_index: self.start_index,
        })
    }

    /// Add `value` to every element.
    pub fn add_scalar(&self, value: &T) -> Self {
        self.map(|x| x.clone() + value.clone())
    }

    /// Subtract `value` from every element.
    pub fn sub_scalar(&self, value: &T) -> Self {
        self.map(|x| x.clone() - value.clone())
    }

    /// Multiply every element by `value`.
    pub fn mul_scalar(&self, value: &T) -> Self {
        self.map(|x| x.clone() * value.clone())
    }

    /// Element-wise sum.
    ///
    /// # Errors
    /// `SizeMismatch` if `other.size() != self.size()`.
    pub fn try_add(&self, other: &Self) -> Result<Self, UtError> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Element-wise difference. Fails like [`Vector::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, UtError> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Inner product, accumulated from `T::zero()`.
    ///
    /// # Errors
    /// `SizeMismatch` if `other.size() != self.size()`.
    pub fn dot(&self, other: &Self) -> Result<T, UtError> {
        check_same_size(self.size(), other.size())?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }
}

impl<T: Element> InnerProduct for Vector<T> {
    type Scalar = T;

    fn inner(&self, rhs: &Self) -> Result<T, UtError> {
        self.dot(rhs)
    }
}

// Scalar operators: `&v + k`, `v * k`, ...

macro_rules! scalar_op {
    ($trait:ident, $method:ident, $named:ident) => {
        impl<T: Element> $trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.$named(&rhs)
            }
        }

        impl<T: Element> $trait<T> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                Vector {
                    data: self.data.into_iter().map(|x| $trait::$method(x, rhs.clone())).collect(),
                    start_index: self.start_index,
                }
            }
        }
    };
}

scalar_op!(Add, add, add_scalar);
scalar_op!(Sub, sub, sub_scalar);
scalar_op!(Mul, mul, mul_scalar);

// Vector operators: shape checks surface through the `Result` output.

impl<'a, T: Element> Add<&'a Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>, UtError>;

    fn add(self, rhs: &'a Vector<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'a, T: Element> Sub<&'a Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>, UtError>;

    fn sub(self, rhs: &'a Vector<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

/// `&v * &w` is the inner product.
impl<'a, T: Element> Mul<&'a Vector<T>> for &Vector<T> {
    type Output = Result<T, UtError>;

    fn mul(self, rhs: &'a Vector<T>) -> Self::Output {
        self.dot(rhs)
    }
}
