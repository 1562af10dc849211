/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! Provides the JDK-style `AtomicBoolean` cell.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicBool as StdAtomicBool;
use std::sync::atomic::Ordering;

use crate::atomic::traits::{
    Atomic,
    UpdatableAtomic,
};

/// Atomic boolean type.
///
/// The flag is stored in a single byte that only ever holds `0` or `1`, so
/// the hardware exchange and compare-and-swap instructions apply to it
/// directly.
///
/// # Memory Ordering Strategy
///
/// Every operation uses `SeqCst` ordering. All reads, writes, swaps and CAS
/// operations on one flag are observed in the same order by every thread.
/// Use `inner()` when a weaker ordering is wanted.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicBool;
/// use std::sync::Arc;
/// use std::thread;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let flag_clone = flag.clone();
///
/// let handle = thread::spawn(move || {
///     flag_clone.set(true);
/// });
///
/// handle.join().unwrap();
/// assert!(flag.get());
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicBool {
    inner: StdAtomicBool,
}

impl AtomicBool {
    /// Creates a new atomic boolean.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self {
            inner: StdAtomicBool::new(value),
        }
    }

    /// Gets the current value.
    #[inline]
    pub fn get(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    /// Sets a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set(&self, value: bool) {
        self.inner.store(value, Ordering::SeqCst);
    }

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The value immediately before the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(!flag.swap(true));
    /// assert!(flag.get());
    /// ```
    #[inline]
    pub fn swap(&self, value: bool) -> bool {
        self.inner.swap(value, Ordering::SeqCst)
    }

    /// Sets a new value, returning the old value.
    ///
    /// Same as [`swap`](Self::swap), under its JDK name.
    #[inline]
    pub fn get_and_set(&self, value: bool) -> bool {
        self.swap(value)
    }

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `expect`, replaces it with `update` and
    /// returns `true`. Otherwise leaves the flag unchanged and returns
    /// `false`.
    ///
    /// # Parameters
    ///
    /// * `expect` - The expected current value.
    /// * `update` - The new value to set if current matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(flag.compare_and_set(false, true));
    /// assert!(!flag.compare_and_set(false, true));
    /// ```
    #[inline]
    pub fn compare_and_set(&self, expect: bool, update: bool) -> bool {
        self.inner
            .compare_exchange(expect, update, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Weak version of compare-and-set.
    ///
    /// Has the same contract as [`compare_and_set`](Self::compare_and_set)
    /// and never fails spuriously.
    #[inline]
    pub fn weak_compare_and_set(&self, expect: bool, update: bool) -> bool {
        self.compare_and_set(expect, update)
    }

    /// Compares and exchanges the value atomically, returning the value
    /// observed before the operation.
    ///
    /// The exchange happened iff the returned value equals `expect`.
    #[inline]
    pub fn compare_and_exchange(&self, expect: bool, update: bool) -> bool {
        match self
            .inner
            .compare_exchange(expect, update, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(prev) => prev,
            Err(actual) => actual,
        }
    }

    /// Negates the flag, returning the old value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(!flag.get_and_negate());
    /// assert!(flag.get());
    /// ```
    #[inline]
    pub fn get_and_negate(&self) -> bool {
        self.inner.fetch_xor(true, Ordering::SeqCst)
    }

    /// Negates the flag, returning the new value.
    #[inline]
    pub fn negate_and_get(&self) -> bool {
        !self.inner.fetch_xor(true, Ordering::SeqCst)
    }

    /// Updates the value using a function, returning the old value.
    #[inline]
    pub fn get_and_update<F>(&self, f: F) -> bool
    where
        F: Fn(bool) -> bool,
    {
        let mut current = self.get();
        loop {
            let new = f(current);
            match self.inner.compare_exchange_weak(
                current,
                new,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return current,
                Err(actual) => current = actual,
            }
        }
    }

    /// Updates the value using a function, returning the new value.
    #[inline]
    pub fn update_and_get<F>(&self, f: F) -> bool
    where
        F: Fn(bool) -> bool,
    {
        let mut current = self.get();
        loop {
            let new = f(current);
            match self.inner.compare_exchange_weak(
                current,
                new,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return new,
                Err(actual) => current = actual,
            }
        }
    }

    /// Gets a reference to the underlying standard library atomic type.
    #[inline]
    pub fn inner(&self) -> &StdAtomicBool {
        &self.inner
    }

    /// Consumes the atomic and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> bool {
        self.inner.into_inner()
    }
}

impl Atomic for AtomicBool {
    type Value = bool;

    #[inline]
    fn get(&self) -> bool {
        self.get()
    }

    #[inline]
    fn set(&self, value: bool) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, value: bool) -> bool {
        self.swap(value)
    }

    #[inline]
    fn compare_and_set(&self, expect: bool, update: bool) -> bool {
        self.compare_and_set(expect, update)
    }

    #[inline]
    fn compare_and_exchange(&self, expect: bool, update: bool) -> bool {
        self.compare_and_exchange(expect, update)
    }
}

impl UpdatableAtomic for AtomicBool {
    #[inline]
    fn get_and_update<F>(&self, f: F) -> bool
    where
        F: Fn(bool) -> bool,
    {
        self.get_and_update(f)
    }

    #[inline]
    fn update_and_get<F>(&self, f: F) -> bool
    where
        F: Fn(bool) -> bool,
    {
        self.update_and_get(f)
    }
}

impl Default for AtomicBool {
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBool")
            .field("value", &self.get())
            .finish()
    }
}

impl fmt::Display for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
