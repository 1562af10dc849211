/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Integer Array
//!
//! Provides the JDK-style `AtomicIntegerArray` as a non-generic entry point
//! over [`AtomicRefArray<i32>`](crate::AtomicRefArray).
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_ref_array::AtomicRefArray;
use crate::error::AtomicResult;

/// Fixed-length array of `i32` with atomic per-element operations.
///
/// Shares the locking strategy of [`AtomicRefArray`]: one mutex guards the
/// whole array, so every operation, including the arithmetic ones, is a
/// single step that never interleaves with another operation on the same
/// array. Arithmetic wraps around on overflow.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicI32Array;
///
/// let array = AtomicI32Array::new(5);
/// assert!(array.compare_and_set(2, 0, 1).unwrap());
/// assert_eq!(array.increment_and_get(2).unwrap(), 2);
/// assert_eq!(array.to_vec(), vec![0, 0, 2, 0, 0]);
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Clone)]
pub struct AtomicI32Array {
    inner: AtomicRefArray<i32>,
}

impl AtomicI32Array {
    /// Creates an array of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self {
            inner: AtomicRefArray::new(len),
        }
    }

    /// Creates an array holding a copy of `source`.
    pub fn from_slice(source: &[i32]) -> Self {
        Self {
            inner: AtomicRefArray::from_slice(source),
        }
    }

    /// Creates an array holding a copy of an optional source.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::InvalidArgument`](crate::AtomicError::InvalidArgument)
    /// if `source` is `None`.
    pub fn try_from_source(source: Option<&[i32]>) -> AtomicResult<Self> {
        AtomicRefArray::try_from_source(source).map(|inner| Self { inner })
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the array has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Gets the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> AtomicResult<i32> {
        self.inner.get(index)
    }

    /// Sets the element at `index`.
    #[inline]
    pub fn set(&self, index: usize, value: i32) -> AtomicResult<()> {
        self.inner.set(index, value)
    }

    /// Replaces the element at `index`, returning the old element.
    #[inline]
    pub fn swap(&self, index: usize, value: i32) -> AtomicResult<i32> {
        self.inner.swap(index, value)
    }

    /// Same as [`swap`](Self::swap), under its JDK name.
    #[inline]
    pub fn get_and_set(&self, index: usize, value: i32) -> AtomicResult<i32> {
        self.inner.swap(index, value)
    }

    /// Compares and sets the element at `index`.
    ///
    /// Returns `Ok(true)` if the element equaled `expect` and was replaced
    /// with `update`.
    #[inline]
    pub fn compare_and_set(&self, index: usize, expect: i32, update: i32) -> AtomicResult<bool> {
        self.inner.compare_and_set(index, &expect, update)
    }

    /// Same contract as [`compare_and_set`](Self::compare_and_set).
    #[inline]
    pub fn weak_compare_and_set(
        &self,
        index: usize,
        expect: i32,
        update: i32,
    ) -> AtomicResult<bool> {
        self.compare_and_set(index, expect, update)
    }

    /// Increments the element at `index`, returning the old value.
    #[inline]
    pub fn get_and_increment(&self, index: usize) -> AtomicResult<i32> {
        self.get_and_add(index, 1)
    }

    /// Increments the element at `index`, returning the new value.
    #[inline]
    pub fn increment_and_get(&self, index: usize) -> AtomicResult<i32> {
        self.add_and_get(index, 1)
    }

    /// Decrements the element at `index`, returning the old value.
    #[inline]
    pub fn get_and_decrement(&self, index: usize) -> AtomicResult<i32> {
        self.get_and_add(index, -1)
    }

    /// Decrements the element at `index`, returning the new value.
    #[inline]
    pub fn decrement_and_get(&self, index: usize) -> AtomicResult<i32> {
        self.add_and_get(index, -1)
    }

    /// Adds `delta` to the element at `index`, returning the old value.
    pub fn get_and_add(&self, index: usize, delta: i32) -> AtomicResult<i32> {
        self.inner
            .get_and_update(index, |value| value.wrapping_add(delta))
    }

    /// Adds `delta` to the element at `index`, returning the new value.
    pub fn add_and_get(&self, index: usize, delta: i32) -> AtomicResult<i32> {
        self.inner
            .update_and_get(index, |value| value.wrapping_add(delta))
    }

    /// Runs `f` over all elements while holding the array lock.
    pub fn with_slots<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut [i32]) -> R,
    {
        self.inner.with_slots(f)
    }

    /// Returns a consistent snapshot of all elements.
    #[inline]
    pub fn to_vec(&self) -> Vec<i32> {
        self.inner.to_vec()
    }

    /// Consumes the array and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<i32> {
        self.inner.into_vec()
    }
}

impl From<Vec<i32>> for AtomicI32Array {
    fn from(values: Vec<i32>) -> Self {
        Self {
            inner: AtomicRefArray::from(values),
        }
    }
}

impl FromIterator<i32> for AtomicI32Array {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for AtomicI32Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicI32Array")
            .field("values", &self.to_vec())
            .finish()
    }
}
