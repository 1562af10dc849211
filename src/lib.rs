/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-cell
//!
//! JDK-style atomic cells, references and arrays.
//!
//! This crate provides atomic wrappers modeled after Java's
//! `java.util.concurrent.atomic` package, with sequentially consistent
//! operations so callers never have to pick a memory ordering.
//!
//! ## Features
//!
//! - Scalar cells: `AtomicBool`, `AtomicI32`, `AtomicI64`, lock-free and
//!   wait-free on every supported target
//! - Reference cell: `AtomicRef<T>`, a nullable `Arc<T>` slot with identity
//!   compare-and-set
//! - Arrays: `AtomicRefArray<T>` and `AtomicI32Array`, fixed-length arrays
//!   whose element operations are serialized by a single per-array lock
//!
//! Array operations report out-of-range indices through [`AtomicError`];
//! cell operations never fail.
//!
//! ## Cargo Features
//!
//! - `tracing`: emit `tracing` events on cold paths (array construction,
//!   rejected indices, lock poison recovery).
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_cell::{AtomicI32, AtomicI32Array};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicI32::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.get_and_increment();
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.get(), 1000);
//!
//! let slots = AtomicI32Array::new(5);
//! assert!(slots.compare_and_set(2, 0, 1).unwrap());
//! assert!(slots.get(5).is_err());
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod atomic;
pub mod error;

// Re-export all atomic types and traits
pub use atomic::{
    Atomic,
    AtomicBool,
    AtomicI32,
    AtomicI32Array,
    AtomicI64,
    AtomicInteger,
    AtomicRef,
    AtomicRefArray,
    UpdatableAtomic,
};
pub use error::{
    AtomicError,
    AtomicResult,
};
