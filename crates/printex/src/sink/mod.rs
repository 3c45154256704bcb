// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Memory-domain sinks
//!
//! Each sink is a [`Print`](crate::Print) target bound to a region of memory
//! it does not own. Bytes written are kept in the region and can be replayed
//! later with [`Render`](crate::Render), independently of how they got there.
//!
//! | Sink             | Medium    | Write policy                    | Render stops at |
//! |------------------|-----------|---------------------------------|-----------------|
//! | `SramPrinter`    | RAM       | unconditional store             | length          |
//! | `EepromPrinter`  | EEPROM    | store only if the cell differs  | length          |
//! | `ProgmemPrinter` | PROGMEM   | none (read-only)                | first 0 byte    |
//!
//! ## Lifecycle
//!
//! ```text
//! Unbound --bind(start)--> Bound(len 0) --write--> Bound(len N)
//!              ^                                       |
//!              +-------------- bind(start) ------------+
//! ```

use crate::error::{Error, Result};
use crate::traits::Select;

pub mod eeprom;
pub mod progmem;
pub mod sram;

pub use eeprom::EepromPrinter;
pub use progmem::ProgmemPrinter;
pub use sram::SramPrinter;

/// Region length counter
///
/// `usize`, so a region is bounded by its medium only. The `compact-length`
/// feature narrows it to `u16` to save RAM per sink on targets whose regions
/// never exceed 64 KiB.
pub type Length = Select<{ cfg!(feature = "compact-length") }, u16, usize>;

/// Start and logical length of a bound region
///
/// Shared by the writable sinks. `S` is whatever locates the region: a
/// borrowed slice for RAM, an absolute address for EEPROM.
#[derive(Debug, Default)]
pub struct Region<S> {
    start: Option<S>,
    len: Length,
}

impl<S> Region<S> {
    /// Create an unbound region
    pub const fn unbound() -> Self {
        Self {
            start: None,
            len: 0,
        }
    }

    /// Bind to `start` with nothing written yet
    pub fn bind(&mut self, start: S) {
        self.start = Some(start);
        self.len = 0;
    }

    /// Bind to `start` holding `len` bytes already written
    pub fn assign(&mut self, start: S, len: usize) -> Result<()> {
        let len = Length::try_from(len).map_err(|_| Error::CapacityExceeded)?;
        self.start = Some(start);
        self.len = len;
        Ok(())
    }

    /// Unbind, handing back the start
    pub fn release(&mut self) -> Option<S> {
        self.len = 0;
        self.start.take()
    }

    /// Region start, if bound
    pub const fn start(&self) -> Option<&S> {
        self.start.as_ref()
    }

    /// Region start, mutably
    pub fn start_mut(&mut self) -> Option<&mut S> {
        self.start.as_mut()
    }

    /// True once a start has been assigned
    pub const fn is_bound(&self) -> bool {
        self.start.is_some()
    }

    /// Bytes written since the last bind
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// True when nothing has been written since the last bind
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the next byte, checking that the counter can still advance
    ///
    /// Pair with [`Region::commit`] once the byte is stored.
    pub fn reserve(&self) -> Result<usize> {
        if self.start.is_none() {
            return Err(Error::Unbound);
        }
        if self.len == Length::MAX {
            return Err(Error::CapacityExceeded);
        }
        Ok(self.len())
    }

    /// Count the byte reserved by [`Region::reserve`]
    pub fn commit(&mut self) {
        self.len += 1;
    }
}
