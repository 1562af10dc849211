/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Errors
//!
//! Error type returned by the atomic array types. Scalar and reference cells
//! are total and never fail; a failed compare-and-set is reported as `false`,
//! not as an error.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Errors reported by atomic array operations.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AtomicError {
    /// A required construction argument was absent.
    #[error("invalid argument: `{name}` must not be absent")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// An index fell outside `[0, len)`.
    #[error("index out of range: the index is {index} but the length is {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the array.
        len: usize,
    },
}

/// Result alias used by the atomic array types.
pub type AtomicResult<T> = Result<T, AtomicError>;
