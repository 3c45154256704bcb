// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ProgmemPrinter - Replay zero-terminated tables from code space

use core::iter;

use log::debug;

use crate::platform::ProgramMemory;
use crate::print::{forward, Print, Render};

/// Read-only view of a zero-terminated table in program memory
///
/// The table is encoded once, at build time, so there is no write side and
/// no length: render forwards cells until the first 0 byte. Any payload
/// containing a 0 is cut short there.
///
/// # Example
///
/// ```
/// use printex::{Print, ProgmemPrinter, SramPrinter};
///
/// static BANNER: [u8; 6] = *b"ready\0";
///
/// let table = ProgmemPrinter::with_start(&BANNER, 0);
/// let mut buf = [0u8; 8];
/// let mut out = SramPrinter::with_region(&mut buf);
/// assert_eq!(out.print_from(&table), 5);
/// assert_eq!(out.as_bytes(), b"ready");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProgmemPrinter<M> {
    memory: M,
    start: Option<usize>,
}

impl<M: ProgramMemory> ProgmemPrinter<M> {
    /// Create an unbound view over `memory`
    pub const fn new(memory: M) -> Self {
        Self {
            memory,
            start: None,
        }
    }

    /// Create a view of the table at `address`
    pub const fn with_start(memory: M, address: usize) -> Self {
        Self {
            memory,
            start: Some(address),
        }
    }

    /// Point at the table starting at `address`
    pub fn bind(&mut self, address: usize) {
        debug!("[progmem] bound to {:#06x}", address);
        self.start = Some(address);
    }

    /// Table start, if bound
    pub const fn address(&self) -> Option<usize> {
        self.start
    }

    /// Bytes before the terminator (scans the table)
    pub fn scan_len(&self) -> usize {
        self.cells().count()
    }

    // Ends at the top of the address space as well as at the terminator
    fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        iter::successors(self.start, |address| address.checked_add(1))
            .map(|address| self.memory.read_cell(address))
            .take_while(|&cell| cell != 0)
    }
}

impl<M: ProgramMemory> Render for ProgmemPrinter<M> {
    fn render_to<P: Print + ?Sized>(&self, out: &mut P) -> usize {
        forward(out, self.cells())
    }
}
