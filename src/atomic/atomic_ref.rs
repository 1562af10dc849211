/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference
//!
//! Provides the JDK-style `AtomicReference` cell. The slot holds an optional
//! `Arc<T>` and compares by identity, never by value.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::Arc;

use arc_swap::{
    ArcSwapOption,
    Guard,
};

use crate::atomic::traits::{
    Atomic,
    UpdatableAtomic,
};

/// Atomic reference type.
///
/// Holds an `Option<Arc<T>>`. An empty cell reads as `None` instead of
/// failing. The slot is lock-free: it is backed by
/// [`arc_swap::ArcSwapOption`], which keeps reference counts correct while
/// other threads concurrently replace the value.
///
/// # Identity Semantics
///
/// `compare_and_set` compares the expected reference with the current one
/// by allocation (`Arc::ptr_eq`). Two distinct `Arc`s holding structurally
/// equal values never match, even when `T: PartialEq`. Callers that want to
/// CAS on a value must first obtain the current `Arc` with `get()`.
///
/// # Memory Ordering
///
/// All operations are sequentially consistent with respect to each other
/// on the same cell.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicRef;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Config {
///     timeout: u64,
/// }
///
/// let atomic_config = AtomicRef::new(Arc::new(Config { timeout: 1000 }));
///
/// let current = atomic_config.get();
/// let updated = Arc::new(Config { timeout: 2000 });
/// assert!(atomic_config.compare_and_set(current.as_ref(), Some(updated)));
/// assert_eq!(atomic_config.get().unwrap().timeout, 2000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicRef<T> {
    inner: ArcSwapOption<T>,
}

/// Returns `true` if both sides refer to the same allocation, or both are
/// empty.
#[inline]
fn same_identity<T>(left: Option<&Arc<T>>, right: Option<&Arc<T>>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => Arc::ptr_eq(left, right),
        (None, None) => true,
        _ => false,
    }
}

impl<T> AtomicRef<T> {
    /// Creates a new atomic reference holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial reference.
    #[inline]
    pub fn new(value: Arc<T>) -> Self {
        Self::from_option(Some(value))
    }

    /// Creates an empty atomic reference.
    #[inline]
    pub fn empty() -> Self {
        Self::from_option(None)
    }

    /// Creates an atomic reference from an optional initial reference.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial reference, or `None` for an empty cell.
    #[inline]
    pub fn from_option(value: Option<Arc<T>>) -> Self {
        Self {
            inner: ArcSwapOption::new(value),
        }
    }

    /// Gets the current reference.
    ///
    /// # Returns
    ///
    /// A clone of the stored `Arc`, or `None` if the cell is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Arc::new(42));
    /// assert_eq!(atomic.get().as_deref(), Some(&42));
    ///
    /// let empty: AtomicRef<i32> = AtomicRef::empty();
    /// assert!(empty.get().is_none());
    /// ```
    #[inline]
    pub fn get(&self) -> Option<Arc<T>> {
        self.inner.load_full()
    }

    /// Sets a new reference. The previously stored reference is released.
    ///
    /// # Parameters
    ///
    /// * `value` - The new reference, or `None` to clear the cell.
    #[inline]
    pub fn set(&self, value: Option<Arc<T>>) {
        self.inner.store(value);
    }

    /// Swaps the current reference with a new reference, returning the old
    /// reference.
    ///
    /// # Parameters
    ///
    /// * `value` - The new reference to swap in.
    ///
    /// # Returns
    ///
    /// The reference stored immediately before the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Arc::new(10));
    /// let old = atomic.swap(Some(Arc::new(20)));
    /// assert_eq!(old.as_deref(), Some(&10));
    /// assert_eq!(atomic.get().as_deref(), Some(&20));
    /// ```
    #[inline]
    pub fn swap(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.inner.swap(value)
    }

    /// Sets a new reference, returning the old reference.
    ///
    /// Same as [`swap`](Self::swap), under its JDK name.
    #[inline]
    pub fn get_and_set(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.swap(value)
    }

    /// Compares and sets the reference atomically.
    ///
    /// If the current reference is the very same allocation as `expect`
    /// (or both are empty), replaces it with `update` and returns `true`.
    /// Otherwise the cell is left unchanged and `false` is returned.
    ///
    /// # Parameters
    ///
    /// * `expect` - The expected current reference.
    /// * `update` - The new reference to set if current matches.
    ///
    /// # Note
    ///
    /// Comparison uses pointer identity (`Arc::ptr_eq`), not value
    /// equality.
    #[inline]
    pub fn compare_and_set(&self, expect: Option<&Arc<T>>, update: Option<Arc<T>>) -> bool {
        let expected = expect.cloned();
        let prev = self.inner.compare_and_swap(&expected, update);
        same_identity((*prev).as_ref(), expected.as_ref())
    }

    /// Weak version of compare-and-set.
    ///
    /// Has the same contract as [`compare_and_set`](Self::compare_and_set)
    /// and never fails spuriously.
    #[inline]
    pub fn weak_compare_and_set(&self, expect: Option<&Arc<T>>, update: Option<Arc<T>>) -> bool {
        self.compare_and_set(expect, update)
    }

    /// Compares and exchanges the reference atomically, returning the
    /// reference observed before the operation.
    ///
    /// The exchange happened iff the returned reference is identical to
    /// `expect`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Arc::new(10));
    /// let current = atomic.get();
    ///
    /// let prev = atomic.compare_and_exchange(current.as_ref(), Some(Arc::new(20)));
    /// assert!(Arc::ptr_eq(prev.as_ref().unwrap(), current.as_ref().unwrap()));
    /// assert_eq!(atomic.get().as_deref(), Some(&20));
    /// ```
    #[inline]
    pub fn compare_and_exchange(
        &self,
        expect: Option<&Arc<T>>,
        update: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        let expected = expect.cloned();
        Guard::into_inner(self.inner.compare_and_swap(&expected, update))
    }

    /// Updates the reference using a function, returning the old reference.
    ///
    /// Internally uses an identity CAS loop; `f` may run several times
    /// under contention.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Arc::new(10));
    /// let old = atomic.get_and_update(|x| x.map(|v| Arc::new(*v * 2)));
    /// assert_eq!(old.as_deref(), Some(&10));
    /// assert_eq!(atomic.get().as_deref(), Some(&20));
    /// ```
    pub fn get_and_update<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        let mut current = self.get();
        loop {
            let new = f(current.clone());
            let prev = self.inner.compare_and_swap(&current, new);
            if same_identity((*prev).as_ref(), current.as_ref()) {
                return current;
            }
            current = Guard::into_inner(prev);
        }
    }

    /// Updates the reference using a function, returning the new reference.
    pub fn update_and_get<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        let mut current = self.get();
        loop {
            let new = f(current.clone());
            let prev = self.inner.compare_and_swap(&current, new.clone());
            if same_identity((*prev).as_ref(), current.as_ref()) {
                return new;
            }
            current = Guard::into_inner(prev);
        }
    }

    /// Returns `true` if the cell currently holds no reference.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.load().is_none()
    }

    /// Returns `true` if the cell currently holds exactly `candidate`.
    ///
    /// This is the identity test the CAS operations use. It is distinct
    /// from comparing the pointed-to values with `PartialEq`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let value = Arc::new(String::from("a"));
    /// let atomic = AtomicRef::new(value.clone());
    /// assert!(atomic.points_to(Some(&value)));
    /// assert!(!atomic.points_to(Some(&Arc::new(String::from("a")))));
    /// ```
    #[inline]
    pub fn points_to(&self, candidate: Option<&Arc<T>>) -> bool {
        let current = self.inner.load();
        same_identity((*current).as_ref(), candidate)
    }

    /// Gets a reference to the underlying `ArcSwapOption`, for callers that
    /// need its guard-based access.
    #[inline]
    pub fn inner(&self) -> &ArcSwapOption<T> {
        &self.inner
    }

    /// Consumes the atomic and returns the contained reference.
    #[inline]
    pub fn into_inner(self) -> Option<Arc<T>> {
        self.inner.into_inner()
    }
}

impl<T> Atomic for AtomicRef<T> {
    type Value = Option<Arc<T>>;

    #[inline]
    fn get(&self) -> Option<Arc<T>> {
        self.get()
    }

    #[inline]
    fn set(&self, value: Option<Arc<T>>) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.swap(value)
    }

    #[inline]
    fn compare_and_set(&self, expect: Option<Arc<T>>, update: Option<Arc<T>>) -> bool {
        self.compare_and_set(expect.as_ref(), update)
    }

    #[inline]
    fn compare_and_exchange(
        &self,
        expect: Option<Arc<T>>,
        update: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        self.compare_and_exchange(expect.as_ref(), update)
    }
}

impl<T> UpdatableAtomic for AtomicRef<T> {
    #[inline]
    fn get_and_update<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        self.get_and_update(f)
    }

    #[inline]
    fn update_and_get<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        self.update_and_get(f)
    }
}

impl<T> Clone for AtomicRef<T> {
    /// Clones the atomic reference.
    ///
    /// Creates a new `AtomicRef` that initially points to the same value as
    /// the original, but subsequent atomic operations are independent.
    fn clone(&self) -> Self {
        Self::from_option(self.get())
    }
}

impl<T> Default for AtomicRef<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Arc<T>> for AtomicRef<T> {
    #[inline]
    fn from(value: Arc<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<Arc<T>>> for AtomicRef<T> {
    #[inline]
    fn from(value: Option<Arc<T>>) -> Self {
        Self::from_option(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicRef")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("null"),
        }
    }
}
