/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Signed Integer
//!
//! Provides the JDK-style `AtomicLong` cell over an `i64`.
//!
//! Backed by `std::sync::atomic::AtomicI64`, which the standard library only
//! offers on targets with native 64-bit atomic instructions. Reads and writes
//! are therefore never split into two 32-bit halves, even on 32-bit targets.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicI64,
    std::sync::atomic::AtomicI64,
    i64,
    "64-bit signed integer"
);
