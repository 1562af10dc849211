/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for the single-slot atomic cells, providing a
//! unified interface for generic code.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells.
///
/// Provides the basic operations every cell supports: get, set, swap, and
/// compare-and-set. Every operation is sequentially consistent, so all
/// threads observe the operations on one cell in the same total order.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Gets the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn get(&self) -> Self::Value;

    /// Sets a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to set.
    fn set(&self, value: Self::Value);

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `expect`, replaces it with `update` and
    /// returns `true`. Otherwise leaves the value unchanged and returns
    /// `false`. A `false` result is a normal outcome, not an error.
    ///
    /// # Parameters
    ///
    /// * `expect` - The expected current value.
    /// * `update` - The new value to set if the current value matches.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    fn compare_and_set(&self, expect: Self::Value, update: Self::Value) -> bool;

    /// Compares and exchanges the value atomically, returning the value
    /// observed before the operation.
    ///
    /// The operation succeeded iff the returned witness equals `expect`.
    /// Handy in CAS loops, where the witness seeds the next attempt.
    ///
    /// # Parameters
    ///
    /// * `expect` - The expected current value.
    /// * `update` - The new value to set if the current value matches.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    fn compare_and_exchange(&self, expect: Self::Value, update: Self::Value) -> Self::Value;
}

/// Trait for atomic cells that support functional updates.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Updates the value using a function, returning the old value.
    ///
    /// Internally uses a CAS loop until the update succeeds, so `f` may be
    /// called more than once and should be free of side effects.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Updates the value using a function, returning the new value.
    ///
    /// Internally uses a CAS loop until the update succeeds.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;
}

/// Trait for atomic integer cells.
///
/// Provides increment, decrement and add operations. All of them map onto
/// the hardware atomic add instruction rather than a CAS loop, and wrap
/// around on overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: UpdatableAtomic {
    /// Increments the value by 1, returning the old value.
    fn get_and_increment(&self) -> Self::Value;

    /// Increments the value by 1, returning the new value.
    fn increment_and_get(&self) -> Self::Value;

    /// Decrements the value by 1, returning the old value.
    fn get_and_decrement(&self) -> Self::Value;

    /// Decrements the value by 1, returning the new value.
    fn decrement_and_get(&self) -> Self::Value;

    /// Adds a delta to the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The old value before adding.
    fn get_and_add(&self, delta: Self::Value) -> Self::Value;

    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The new value after adding.
    fn add_and_get(&self, delta: Self::Value) -> Self::Value;
}
