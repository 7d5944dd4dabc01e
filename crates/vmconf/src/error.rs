// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised when converting untyped input into a flavor.
//!
//! Constructing and mutating a [`RuntimeConfiguration`](crate::RuntimeConfiguration)
//! never fails.

use thiserror::Error;

/// Failure to turn a string or integer into a [`RuntimeFlavor`](crate::RuntimeFlavor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFlavorError {
    #[error("unknown runtime flavor: {0}")]
    Unknown(String),

    #[error("invalid runtime flavor discriminant: {0}")]
    Discriminant(u32),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
