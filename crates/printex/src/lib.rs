// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # PrintEx Micro - Type classification and memory print sinks
//!
//! A `no_std` support library for microcontrollers (AVR, RP2040, STM32) made of
//! two cooperating layers:
//!
//! - **Type traits**: compile-time classification of a type parameter (integer
//!   width, float, bool, pointer, array dimensions and extents, derivation) and
//!   shape-keyed dispatch built on it. Zero runtime cost.
//! - **Memory sinks**: `Print` targets that write into RAM, EEPROM or read a
//!   PROGMEM table, and keep the bytes so they can be replayed later through any
//!   other `Print` consumer.
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------+
//! |  Application (User Code)                |
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  Print / Render / Printable             |
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  SramPrinter / EepromPrinter / Progmem  |
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  Platform (PersistentStore, ProgramMem) |
//! +-----------------------------------------+
//! ```
//!
//! `traits` sits beside the stack: it picks the sink length type and drives
//! which `Printable` strategy a value gets.
//!
//! ## Feature Flags
//!
//! - `std` -- Enable std (for host testing)
//! - `alloc` -- `Vec<u8>` as a `Print` consumer
//! - `heapless` -- `heapless::Vec<u8, N>` as a `Print` consumer
//! - `compact-length` -- 16-bit region length counter (regions up to 64 KiB)

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Compile-time type classification (select, enable, shapes, derivation)
pub mod traits;

/// Byte stream contracts (Print, Render, Printable)
pub mod print;

/// Memory-domain sinks (SRAM, EEPROM, PROGMEM)
pub mod sink;

/// Platform memory primitives and host-side implementations
pub mod platform;

/// Error types for PrintEx Micro
pub mod error;

// Re-exports for convenience
pub use crate::error::{Error, Result};
pub use crate::platform::{PersistentStore, ProgramMemory, RamEeprom};
pub use crate::print::{Print, Printable, Render};
pub use crate::sink::{EepromPrinter, Length, ProgmemPrinter, SramPrinter};
pub use crate::traits::{Extends, IntWidth, TypeInfo};

/// Maximum array nesting the classifier reports (deeper arrays are `Unsupported`)
pub const MAX_DIMENSIONS: usize = 4;

/// Version of PrintEx Micro
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
