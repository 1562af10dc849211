/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate the atomic integer cells with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic integer types.
///
/// This macro generates a complete atomic integer type with all methods,
/// trait implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, ".")]
        ///
        /// Provides JDK-style atomic operations on a single integer slot.
        /// All methods are thread-safe and the type can be shared across
        /// threads through an `Arc`.
        ///
        /// # Memory Ordering Strategy
        ///
        /// Every operation uses `SeqCst` ordering, so all operations on the
        /// same cell (reads, writes, swaps, CAS and arithmetic) take part in
        /// one total order that every thread agrees on. Callers that need a
        /// weaker ordering can reach the underlying standard library type
        /// through `inner()`.
        ///
        /// # Arithmetic
        ///
        /// Increment, decrement and add operations are single hardware
        /// `fetch_add`/`fetch_sub` instructions and wrap around on overflow.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     handles.push(thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counter.get_and_increment();
        ///         }
        ///     }));
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.get(), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic integer.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Gets the current value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(42);")]
            /// assert_eq!(atomic.get(), 42);
            /// ```
            #[inline]
            pub fn get(&self) -> $value_type {
                self.inner.load(Ordering::SeqCst)
            }

            /// Sets a new value.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            #[inline]
            pub fn set(&self, value: $value_type) {
                self.inner.store(value, Ordering::SeqCst);
            }

            /// Swaps the current value with a new value, returning the old
            /// value.
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
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.swap(20), 10);
            /// assert_eq!(atomic.get(), 20);
            /// ```
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::SeqCst)
            }

            /// Sets a new value, returning the old value.
            ///
            /// Same as [`swap`](Self::swap), under its JDK name.
            #[inline]
            pub fn get_and_set(&self, value: $value_type) -> $value_type {
                self.swap(value)
            }

            /// Compares and sets the value atomically.
            ///
            /// If the current value equals `expect`, replaces it with
            /// `update` and returns `true`. Otherwise the value is left
            /// unchanged and `false` is returned.
            ///
            /// # Parameters
            ///
            /// * `expect` - The expected current value.
            /// * `update` - The new value to set if current matches.
            ///
            /// # Returns
            ///
            /// `true` on success.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert!(atomic.compare_and_set(10, 20));
            /// assert!(!atomic.compare_and_set(10, 30));
            /// assert_eq!(atomic.get(), 20);
            /// ```
            #[inline]
            pub fn compare_and_set(
                &self,
                expect: $value_type,
                update: $value_type,
            ) -> bool {
                self.inner
                    .compare_exchange(
                        expect,
                        update,
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    )
                    .is_ok()
            }

            /// Weak version of compare-and-set.
            ///
            /// Has exactly the same contract as
            /// [`compare_and_set`](Self::compare_and_set): it never fails
            /// spuriously.
            #[inline]
            pub fn weak_compare_and_set(
                &self,
                expect: $value_type,
                update: $value_type,
            ) -> bool {
                self.compare_and_set(expect, update)
            }

            /// Compares and exchanges the value atomically, returning the
            /// value observed before the operation.
            ///
            /// The exchange happened iff the returned value equals `expect`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.compare_and_exchange(10, 20), 10);
            /// assert_eq!(atomic.compare_and_exchange(10, 30), 20);
            /// assert_eq!(atomic.get(), 20);
            /// ```
            #[inline]
            pub fn compare_and_exchange(
                &self,
                expect: $value_type,
                update: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    expect,
                    update,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Increments the value by 1, returning the old value.
            #[inline]
            pub fn get_and_increment(&self) -> $value_type {
                self.inner.fetch_add(1, Ordering::SeqCst)
            }

            /// Increments the value by 1, returning the new value.
            #[inline]
            pub fn increment_and_get(&self) -> $value_type {
                self.inner.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
            }

            /// Decrements the value by 1, returning the old value.
            #[inline]
            pub fn get_and_decrement(&self) -> $value_type {
                self.inner.fetch_sub(1, Ordering::SeqCst)
            }

            /// Decrements the value by 1, returning the new value.
            #[inline]
            pub fn decrement_and_get(&self) -> $value_type {
                self.inner.fetch_sub(1, Ordering::SeqCst).wrapping_sub(1)
            }

            /// Adds a delta to the value, returning the old value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add. May be negative.
            #[inline]
            pub fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::SeqCst)
            }

            /// Adds a delta to the value, returning the new value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add. May be negative.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.add_and_get(5), 15);
            /// assert_eq!(atomic.add_and_get(-20), -5);
            /// ```
            #[inline]
            pub fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.inner
                    .fetch_add(delta, Ordering::SeqCst)
                    .wrapping_add(delta)
            }

            /// Updates the value using a function, returning the old value.
            ///
            /// Internally uses a CAS loop, so `f` may run several times
            /// under contention.
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            #[inline]
            pub fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
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
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.update_and_get(|x| x * 3), 30);
            /// ```
            #[inline]
            pub fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
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

            /// Gets a reference to the underlying standard library atomic
            /// type, for callers that need explicit memory orderings.
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &self.inner
            }

            /// Consumes the atomic and returns the contained value.
            #[inline]
            pub fn into_inner(self) -> $value_type {
                self.inner.into_inner()
            }
        }

        // Trait implementations forward to the inherent methods, so both
        // direct calls and generic code over `Atomic` see the same behavior.

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn get(&self) -> $value_type {
                self.get()
            }

            #[inline]
            fn set(&self, value: $value_type) {
                self.set(value);
            }

            #[inline]
            fn swap(&self, value: $value_type) -> $value_type {
                self.swap(value)
            }

            #[inline]
            fn compare_and_set(
                &self,
                expect: $value_type,
                update: $value_type,
            ) -> bool {
                self.compare_and_set(expect, update)
            }

            #[inline]
            fn compare_and_exchange(
                &self,
                expect: $value_type,
                update: $value_type,
            ) -> $value_type {
                self.compare_and_exchange(expect, update)
            }
        }

        impl crate::atomic::traits::UpdatableAtomic for $name {
            #[inline]
            fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.get_and_update(f)
            }

            #[inline]
            fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.update_and_get(f)
            }
        }

        impl crate::atomic::traits::AtomicInteger for $name {
            #[inline]
            fn get_and_increment(&self) -> $value_type {
                self.get_and_increment()
            }

            #[inline]
            fn increment_and_get(&self) -> $value_type {
                self.increment_and_get()
            }

            #[inline]
            fn get_and_decrement(&self) -> $value_type {
                self.get_and_decrement()
            }

            #[inline]
            fn decrement_and_get(&self) -> $value_type {
                self.decrement_and_get()
            }

            #[inline]
            fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.get_and_add(delta)
            }

            #[inline]
            fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.add_and_get(delta)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.get())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.get())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
