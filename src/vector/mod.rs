//! Offset-indexed vector container.
//!
//! A `Vector<T>` owns a contiguous run of `size` elements whose logical indices start at
//! `start_index`, so element `k` of the storage is addressed as `start_index + k`. Copies are always
//! deep: cloning or assigning never shares storage between two vectors.
//!
//! Equality compares lengths and then elements by storage position; the start index takes no part
//! in it. Arithmetic lives in [`ops`], text input and output in [`io`].

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::config::Limits;
use crate::core::traits::MatShape;
use crate::error::UtError;
use crate::utils::bounds::{check_vector_shape, storage_offset};

pub mod io;
pub mod ops;

/// Generic vector with a logical index window `[start_index, start_index + size)`.
#[derive(Debug)]
pub struct Vector<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T> Vector<T> {
    /// Length used by `Default`.
    pub const DEFAULT_SIZE: usize = 10;

    /// Allocate `size` default-initialized elements starting at logical index `start_index`.
    ///
    /// # Errors
    /// `InvalidArgument` if `size` is negative or above `MAX_VECTOR_SIZE`, or `start_index` is
    /// negative.
    pub fn new(size: isize, start_index: isize) -> Result<Self, UtError>
    where
        T: Default,
    {
        Self::with_limits(size, start_index, &Limits::default())
    }

    /// Same as [`Vector::new`], validating `size` against `limits.max_vector_size`.
    pub fn with_limits(size: isize, start_index: isize, limits: &Limits) -> Result<Self, UtError>
    where
        T: Default,
    {
        let (size, start_index) = check_vector_shape(size, start_index, limits.max_vector_size)?;
        log::trace!("allocating vector of {size} elements at start index {start_index}");
        let data = std::iter::repeat_with(T::default).take(size).collect();
        Ok(Self { data, start_index })
    }

    /// Wrap existing elements; the vector takes ownership of `data`.
    pub fn from_vec(data: Vec<T>, start_index: isize) -> Result<Self, UtError> {
        let size = isize::try_from(data.len()).map_err(|_| UtError::InvalidArgument)?;
        let (_, start_index) = check_vector_shape(size, start_index, Limits::default().max_vector_size)?;
        Ok(Self { data, start_index })
    }

    /// Wrap already-validated parts.
    pub(crate) fn from_parts(data: Vec<T>, start_index: usize) -> Self {
        Self { data, start_index }
    }

    /// Number of stored elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Logical index one past the last element.
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at logical position `pos`.
    ///
    /// # Errors
    /// `OutOfRange` when `pos` lies outside `[start_index, start_index + size - 1]` or above
    /// `MAX_VECTOR_SIZE`.
    pub fn get(&self, pos: isize) -> Result<&T, UtError> {
        let offset = storage_offset(pos, self.start_index, self.data.len())?;
        Ok(&self.data[offset])
    }

    /// Mutable element at logical position `pos`. Fails like [`Vector::get`].
    pub fn get_mut(&mut self, pos: isize) -> Result<&mut T, UtError> {
        let offset = storage_offset(pos, self.start_index, self.data.len())?;
        Ok(&mut self.data[offset])
    }

    /// Replace the contents of `self` with a deep copy of `other`.
    ///
    /// Size and start index follow `other`; the existing allocation is reused when it is large
    /// enough. Afterwards `self == other`.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.clone_from(other);
    }

    /// Elements in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector, returning its storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset_or_panic(&self, pos: usize) -> usize {
        isize::try_from(pos)
            .ok()
            .and_then(|p| storage_offset(p, self.start_index, self.data.len()).ok())
            .unwrap_or_else(|| {
                panic!(
                    "index {pos} out of range for vector with window [{}, {})",
                    self.start_index,
                    self.end_index()
                )
            })
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            start_index: self.start_index,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

impl<T: Default> Default for Vector<T> {
    fn default() -> Self {
        Self {
            data: std::iter::repeat_with(T::default).take(Self::DEFAULT_SIZE).collect(),
            start_index: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        // Vec equality checks the lengths first
        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

/// Logical indexing; panics where [`Vector::get`] would fail.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        &self.data[self.offset_or_panic(pos)]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        let offset = self.offset_or_panic(pos);
        &mut self.data[offset]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> MatShape for Vector<T> {
    fn nrows(&self) -> usize {
        self.data.len()
    }
    fn ncols(&self) -> usize {
        1
    }
}
