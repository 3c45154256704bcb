// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for PrintEx Micro

use core::fmt;

/// Result type for PrintEx Micro operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for PrintEx Micro
///
/// The type classifier never fails at runtime; these only come from sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Sink has no region bound yet
    Unbound,

    /// Write would go past the end of the bound region
    CapacityExceeded,

    /// Start address or preset length lies outside the backing store
    AddressOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unbound => write!(f, "Sink not bound to a region"),
            Error::CapacityExceeded => write!(f, "Region capacity exceeded"),
            Error::AddressOutOfRange => write!(f, "Address out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
