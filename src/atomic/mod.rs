/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! JDK-style atomic cells and arrays. The single-slot cells wrap
//! `std::sync::atomic` types (or `arc_swap` for references) and use
//! sequentially consistent ordering throughout; the arrays guard their
//! slots with one lock per array.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_integer_macro;
mod atomic_bool;
mod atomic_i32;
mod atomic_i32_array;
mod atomic_i64;
mod atomic_ref;
mod atomic_ref_array;
mod traits;

pub use atomic_bool::AtomicBool;
pub use atomic_i32::AtomicI32;
pub use atomic_i32_array::AtomicI32Array;
pub use atomic_i64::AtomicI64;
pub use atomic_ref::AtomicRef;
pub use atomic_ref_array::AtomicRefArray;
pub use traits::{
    Atomic,
    AtomicInteger,
    UpdatableAtomic,
};
