// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Platform memory primitives
//!
//! The sinks never touch hardware directly. Targets implement these two
//! traits over their own access routines (AVR `eeprom_read_byte` /
//! `eeprom_write_byte` / `pgm_read_byte`, an external I2C EEPROM, a flash
//! page buffer...). Host-side implementations live here for tests and
//! simulation.
//!
//! ## Design Principles
//!
//! - **Absolute addressing** - cells are addressed from the start of the medium
//! - **Synchronous** - a call returns once the cell access completes
//! - **Infallible cells** - addressing is validated by the sinks up front

/// Byte-addressable non-volatile store (EEPROM, FRAM)
pub trait PersistentStore {
    /// Read the cell at `address`
    fn read_cell(&self, address: usize) -> u8;

    /// Program the cell at `address`
    ///
    /// Each call costs one erase/write cycle on wear-limited media.
    fn write_cell(&mut self, address: usize, value: u8);

    /// Number of addressable cells
    fn capacity(&self) -> usize;
}

/// Read-only code-space memory (PROGMEM, memory-mapped flash)
pub trait ProgramMemory {
    /// Read the cell at `address`
    fn read_cell(&self, address: usize) -> u8;
}

impl<S: PersistentStore + ?Sized> PersistentStore for &mut S {
    fn read_cell(&self, address: usize) -> u8 {
        (**self).read_cell(address)
    }

    fn write_cell(&mut self, address: usize, value: u8) {
        (**self).write_cell(address, value);
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

impl<M: ProgramMemory + ?Sized> ProgramMemory for &M {
    fn read_cell(&self, address: usize) -> u8 {
        (**self).read_cell(address)
    }
}

/// Flash table held in a byte slice
///
/// Reads past the end return 0, so a table missing its terminator stops at
/// its last byte.
impl ProgramMemory for [u8] {
    fn read_cell(&self, address: usize) -> u8 {
        self.get(address).copied().unwrap_or(0)
    }
}

impl<const N: usize> ProgramMemory for [u8; N] {
    fn read_cell(&self, address: usize) -> u8 {
        self.as_slice().read_cell(address)
    }
}

/// Erased EEPROM cell value
pub const ERASED: u8 = 0xFF;

/// RAM-backed EEPROM of `N` cells
///
/// Counts physical programming cycles so wear-avoidance can be observed.
///
/// # Example
///
/// ```
/// use printex::platform::{PersistentStore, RamEeprom};
///
/// let mut eeprom = RamEeprom::<64>::new();
/// eeprom.write_cell(3, 0x42);
/// assert_eq!(eeprom.read_cell(3), 0x42);
/// assert_eq!(eeprom.physical_writes(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamEeprom<const N: usize> {
    cells: [u8; N],
    physical_writes: usize,
}

impl<const N: usize> RamEeprom<N> {
    /// Create a fully erased store (every cell `0xFF`)
    pub const fn new() -> Self {
        Self::with_contents([ERASED; N])
    }

    /// Create a store with preset contents (not counted as writes)
    pub const fn with_contents(cells: [u8; N]) -> Self {
        Self {
            cells,
            physical_writes: 0,
        }
    }

    /// Raw cell contents
    pub const fn cells(&self) -> &[u8; N] {
        &self.cells
    }

    /// Number of `write_cell` calls that reached the medium
    pub const fn physical_writes(&self) -> usize {
        self.physical_writes
    }
}

impl<const N: usize> Default for RamEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PersistentStore for RamEeprom<N> {
    fn read_cell(&self, address: usize) -> u8 {
        self.cells.get(address).copied().unwrap_or(ERASED)
    }

    fn write_cell(&mut self, address: usize, value: u8) {
        if let Some(cell) = self.cells.get_mut(address) {
            *cell = value;
            self.physical_writes += 1;
        }
    }

    fn capacity(&self) -> usize {
        N
    }
}
