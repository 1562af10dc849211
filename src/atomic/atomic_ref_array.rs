/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference Array
//!
//! Provides the JDK-style `AtomicReferenceArray`: a fixed-length array whose
//! element operations are atomic with respect to each other.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::mem;
use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use crate::error::{
    AtomicError,
    AtomicResult,
};

/// Fixed-length array with atomic per-element operations.
///
/// # Locking Strategy
///
/// All slots are guarded by one mutex owned by the array. Every index
/// operation takes the lock, performs a single access, and releases it, so
/// no two operations on the same array run concurrently, even on different
/// indices. This also means callers may rely on array-wide mutual exclusion
/// through [`with_slots`](Self::with_slots) when they need an invariant that
/// spans several indices.
///
/// Operations on different arrays are fully independent.
///
/// # Equality
///
/// [`compare_and_set`](Self::compare_and_set) compares slots with the
/// element type's `PartialEq` implementation, i.e. by value. For identity
/// comparison of shared values, store them in an [`AtomicRef`] instead.
///
/// # Poisoning
///
/// A panic inside a [`with_slots`](Self::with_slots) or update closure
/// poisons the mutex. The array recovers the lock on the next access and
/// keeps working; every slot always holds a fully written value.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicRefArray;
///
/// let array = AtomicRefArray::from_slice(&["a", "b", "c"]);
/// assert!(array.compare_and_set(1, &"b", "x").unwrap());
/// assert_eq!(array.to_vec(), vec!["a", "x", "c"]);
/// assert!(array.get(3).is_err());
/// ```
///
/// [`AtomicRef`]: crate::AtomicRef
///
/// # Author
///
/// Haixing Hu
pub struct AtomicRefArray<T> {
    slots: Mutex<Box<[T]>>,
    len: usize,
}

impl<T> AtomicRefArray<T> {
    /// Creates an array of `len` default-initialized slots.
    ///
    /// # Parameters
    ///
    /// * `len` - The fixed length of the array.
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_boxed(std::iter::repeat_with(T::default).take(len).collect())
    }

    /// Creates an array holding a copy of `source`.
    ///
    /// The array owns its own storage; later changes to `source` are not
    /// seen by the array and vice versa.
    ///
    /// # Parameters
    ///
    /// * `source` - The initial elements.
    pub fn from_slice(source: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_boxed(source.to_vec().into_boxed_slice())
    }

    /// Creates an array holding a copy of an optional source.
    ///
    /// # Parameters
    ///
    /// * `source` - The initial elements, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::InvalidArgument`] if `source` is `None`.
    pub fn try_from_source(source: Option<&[T]>) -> AtomicResult<Self>
    where
        T: Clone,
    {
        match source {
            Some(source) => Ok(Self::from_slice(source)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("rejected absent array source");
                Err(AtomicError::InvalidArgument { name: "source" })
            }
        }
    }

    fn from_boxed(slots: Box<[T]>) -> Self {
        let len = slots.len();
        #[cfg(feature = "tracing")]
        tracing::debug!(len, "created atomic array");
        Self {
            slots: Mutex::new(slots),
            len,
        }
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> AtomicResult<T>
    where
        T: Clone,
    {
        let index = self.check_index(index)?;
        Ok(self.lock()[index].clone())
    }

    /// Sets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&self, index: usize, value: T) -> AtomicResult<()> {
        let index = self.check_index(index)?;
        self.lock()[index] = value;
        Ok(())
    }

    /// Replaces the element at `index`, returning the old element.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::IndexOutOfRange`] if `index >= len()`.
    pub fn swap(&self, index: usize, value: T) -> AtomicResult<T> {
        let index = self.check_index(index)?;
        Ok(mem::replace(&mut self.lock()[index], value))
    }

    /// Same as [`swap`](Self::swap), under its JDK name.
    #[inline]
    pub fn get_and_set(&self, index: usize, value: T) -> AtomicResult<T> {
        self.swap(index, value)
    }

    /// Compares and sets the element at `index`.
    ///
    /// If the element equals `expect` (by `PartialEq`), replaces it with
    /// `update` and returns `Ok(true)`. Otherwise leaves it unchanged and
    /// returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::IndexOutOfRange`] if `index >= len()`.
    pub fn compare_and_set(&self, index: usize, expect: &T, update: T) -> AtomicResult<bool>
    where
        T: PartialEq,
    {
        let index = self.check_index(index)?;
        let mut slots = self.lock();
        if slots[index] == *expect {
            slots[index] = update;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Weak version of compare-and-set; same contract as
    /// [`compare_and_set`](Self::compare_and_set).
    #[inline]
    pub fn weak_compare_and_set(&self, index: usize, expect: &T, update: T) -> AtomicResult<bool>
    where
        T: PartialEq,
    {
        self.compare_and_set(index, expect, update)
    }

    /// Updates the element at `index` with `f` in one locked step,
    /// returning the old element.
    ///
    /// `f` runs exactly once, while the array lock is held. It must not
    /// access this array.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_and_update<F>(&self, index: usize, f: F) -> AtomicResult<T>
    where
        F: FnOnce(&T) -> T,
    {
        let index = self.check_index(index)?;
        let mut slots = self.lock();
        let new = f(&slots[index]);
        Ok(mem::replace(&mut slots[index], new))
    }

    /// Updates the element at `index` with `f` in one locked step,
    /// returning the new element.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::IndexOutOfRange`] if `index >= len()`.
    pub fn update_and_get<F>(&self, index: usize, f: F) -> AtomicResult<T>
    where
        T: Clone,
        F: FnOnce(&T) -> T,
    {
        let index = self.check_index(index)?;
        let mut slots = self.lock();
        let new = f(&slots[index]);
        slots[index] = new.clone();
        Ok(new)
    }

    /// Runs `f` over all slots while holding the array lock.
    ///
    /// No other operation on this array can interleave with `f`, which makes
    /// this the place for updates that must keep several slots consistent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRefArray;
    ///
    /// let array = AtomicRefArray::from_slice(&[10, 0]);
    /// array.with_slots(|slots| {
    ///     slots[1] += 5;
    ///     slots[0] -= 5;
    /// });
    /// assert_eq!(array.to_vec(), vec![5, 5]);
    /// ```
    pub fn with_slots<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut [T]) -> R,
    {
        let mut slots = self.lock();
        f(&mut slots[..])
    }

    /// Returns a snapshot copy of all elements.
    ///
    /// The snapshot is taken under the lock and is internally consistent,
    /// but may be stale as soon as it is returned.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().to_vec()
    }

    /// Consumes the array and returns its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.slots
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_vec()
    }

    fn check_index(&self, index: usize) -> AtomicResult<usize> {
        if index < self.len {
            Ok(index)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, len = self.len, "rejected out-of-range index");
            Err(AtomicError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn lock(&self) -> MutexGuard<'_, Box<[T]>> {
        self.slots.lock().unwrap_or_else(|poisoned| {
            #[cfg(feature = "tracing")]
            tracing::warn!("recovering poisoned atomic array lock");
            poisoned.into_inner()
        })
    }
}

impl<T> From<Vec<T>> for AtomicRefArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_boxed(values.into_boxed_slice())
    }
}

impl<T> FromIterator<T> for AtomicRefArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_boxed(iter.into_iter().collect())
    }
}

impl<T: Clone> Clone for AtomicRefArray<T> {
    /// Creates an independent array from a snapshot of this one.
    fn clone(&self) -> Self {
        Self::from(self.to_vec())
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicRefArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicRefArray")
            .field("values", &&self.lock()[..])
            .finish()
    }
}
