// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! EepromPrinter - Print into persistent storage

use log::{debug, trace, warn};

use super::Region;
use crate::error::{Error, Result};
use crate::platform::PersistentStore;
use crate::print::{forward, Print, Render};

/// Print target writing into a wear-limited persistent store
///
/// # Design
///
/// - Each cell is read back first and only programmed when it differs
/// - The length advances for every byte, programmed or not
/// - Render reads the medium, never a RAM copy
///
/// # Example
///
/// ```
/// use printex::{EepromPrinter, Print, RamEeprom, SramPrinter};
///
/// let mut printer = EepromPrinter::new(RamEeprom::<32>::new());
/// printer.bind(0x08).unwrap();
/// printer.print("boot=");
/// printer.print(&3u8);
///
/// let mut buf = [0u8; 16];
/// let mut copy = SramPrinter::with_region(&mut buf);
/// copy.print_from(&printer);
/// assert_eq!(copy.as_bytes(), b"boot=3");
/// ```
#[derive(Debug)]
pub struct EepromPrinter<S> {
    store: S,
    region: Region<usize>,
}

impl<S: PersistentStore> EepromPrinter<S> {
    /// Create an unbound printer over `store`
    pub const fn new(store: S) -> Self {
        Self {
            store,
            region: Region::unbound(),
        }
    }

    /// Create a printer bound to `address` in `store`
    pub fn with_address(store: S, address: usize) -> Result<Self> {
        let mut printer = Self::new(store);
        printer.bind(address)?;
        Ok(printer)
    }

    /// Bind to `address`, restarting at length 0
    pub fn bind(&mut self, address: usize) -> Result<()> {
        self.check_span(address, 0)?;
        debug!("[eeprom] bound to {:#06x}", address);
        self.region.bind(address);
        Ok(())
    }

    /// Bind to `address` where `len` bytes were written earlier
    ///
    /// Re-opens a log that survived a reset.
    pub fn assign(&mut self, address: usize, len: usize) -> Result<()> {
        self.check_span(address, len)?;
        self.region.assign(address, len)?;
        debug!("[eeprom] bound to {:#06x} holding {} bytes", address, len);
        Ok(())
    }

    fn check_span(&self, address: usize, len: usize) -> Result<()> {
        match address.checked_add(len) {
            Some(end) if end <= self.store.capacity() => Ok(()),
            _ => Err(Error::AddressOutOfRange),
        }
    }

    /// Start address, if bound
    pub fn address(&self) -> Option<usize> {
        self.region.start().copied()
    }

    /// Bytes written since the last bind
    pub const fn count(&self) -> usize {
        self.region.len()
    }

    /// Backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give the backing store back
    pub fn into_store(self) -> S {
        self.store
    }

    /// Store one byte at `start + len`, skipping the write if unchanged
    pub fn try_write_byte(&mut self, byte: u8) -> Result<()> {
        let offset = self.region.reserve()?;
        let start = self.address().ok_or(Error::Unbound)?;
        let cell = start + offset;
        if cell >= self.store.capacity() {
            return Err(Error::CapacityExceeded);
        }

        if self.store.read_cell(cell) == byte {
            trace!("[eeprom] {:#06x} unchanged, write skipped", cell);
        } else {
            self.store.write_cell(cell, byte);
        }
        self.region.commit();
        Ok(())
    }
}

impl<S: PersistentStore> Print for EepromPrinter<S> {
    fn write_byte(&mut self, byte: u8) -> usize {
        match self.try_write_byte(byte) {
            Ok(()) => 1,
            Err(e) => {
                warn!("[eeprom] byte dropped: {}", e);
                0
            }
        }
    }
}

impl<S: PersistentStore> Render for EepromPrinter<S> {
    fn render_to<P: Print + ?Sized>(&self, out: &mut P) -> usize {
        let Some(start) = self.address() else {
            return 0;
        };
        let cells = start..start + self.count();
        forward(out, cells.map(|cell| self.store.read_cell(cell)))
    }
}
