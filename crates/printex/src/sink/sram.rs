// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SramPrinter - Print into a RAM buffer

use log::{debug, warn};

use super::Region;
use crate::error::{Error, Result};
use crate::print::{Print, Render};

/// Print target writing into a caller-owned RAM buffer
///
/// The buffer is borrowed for as long as the printer is bound to it; the
/// printer tracks only how many bytes of it have been written.
///
/// # Example
///
/// ```
/// use printex::{Print, SramPrinter};
///
/// let mut buf = [0u8; 16];
/// let mut printer = SramPrinter::with_region(&mut buf);
/// printer.print("T=");
/// printer.print(&21u8);
/// assert_eq!(printer.as_bytes(), b"T=21");
/// ```
#[derive(Debug, Default)]
pub struct SramPrinter<'a> {
    region: Region<&'a mut [u8]>,
}

impl<'a> SramPrinter<'a> {
    /// Create an unbound printer
    pub const fn new() -> Self {
        Self {
            region: Region::unbound(),
        }
    }

    /// Create a printer bound to `buf`
    pub fn with_region(buf: &'a mut [u8]) -> Self {
        let mut printer = Self::new();
        printer.bind(buf);
        printer
    }

    /// Bind to `buf`, restarting at length 0
    pub fn bind(&mut self, buf: &'a mut [u8]) {
        debug!("[sram] bound to {} byte region", buf.len());
        self.region.bind(buf);
    }

    /// Bind to `buf` whose first `len` bytes already hold content
    pub fn assign(&mut self, buf: &'a mut [u8], len: usize) -> Result<()> {
        let size = buf.len();
        if len > size {
            return Err(Error::CapacityExceeded);
        }
        self.region.assign(buf, len)?;
        debug!("[sram] bound to {} byte region holding {} bytes", size, len);
        Ok(())
    }

    /// Unbind and hand the buffer back
    pub fn release(&mut self) -> Option<&'a mut [u8]> {
        self.region.release()
    }

    /// True once a buffer is bound
    pub const fn is_bound(&self) -> bool {
        self.region.is_bound()
    }

    /// Bytes written since the last bind
    pub const fn count(&self) -> usize {
        self.region.len()
    }

    /// Size of the bound buffer
    pub fn capacity(&self) -> Option<usize> {
        self.region.start().map(|buf| buf.len())
    }

    /// Bytes written since the last bind
    pub fn as_bytes(&self) -> &[u8] {
        match self.region.start() {
            Some(buf) => &buf[..self.region.len()],
            None => &[],
        }
    }

    /// Store one byte at `start[len]`
    pub fn try_write_byte(&mut self, byte: u8) -> Result<()> {
        let offset = self.region.reserve()?;
        let cell = self
            .region
            .start_mut()
            .and_then(|buf| buf.get_mut(offset))
            .ok_or(Error::CapacityExceeded)?;
        *cell = byte;
        self.region.commit();
        Ok(())
    }
}

impl Print for SramPrinter<'_> {
    fn write_byte(&mut self, byte: u8) -> usize {
        match self.try_write_byte(byte) {
            Ok(()) => 1,
            Err(e) => {
                warn!("[sram] byte dropped: {}", e);
                0
            }
        }
    }
}

impl Render for SramPrinter<'_> {
    fn render_to<P: Print + ?Sized>(&self, out: &mut P) -> usize {
        out.write_bytes(self.as_bytes())
    }
}
