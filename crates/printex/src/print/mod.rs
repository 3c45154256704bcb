// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte stream contracts
//!
//! - [`Print`] -- anything that accepts bytes one at a time (UART, LCD, the
//!   memory sinks in [`crate::sink`], a `Vec<u8>`)
//! - [`Render`] -- anything that can replay content it holds into a `Print`
//! - [`Printable`] -- values that know how to write themselves; the code path
//!   is chosen per type shape at compile time (see [`strategy`])
//!
//! ## Design Principles
//!
//! - **Counts, not errors** - every call returns the number of bytes accepted
//! - **No heap allocations** - formatting goes through `core::fmt`
//! - **Object safe core** - `write_byte`/`write_bytes` work on `dyn Print`

use core::fmt;

pub mod strategy;

pub use strategy::{PointerLike, Strategy};

/// Byte sink
pub trait Print {
    /// Write one byte
    ///
    /// # Returns
    ///
    /// Number of bytes accepted (1, or 0 when the sink refused it)
    fn write_byte(&mut self, byte: u8) -> usize;

    /// Write a run of bytes, stopping at the first refused byte
    ///
    /// # Returns
    ///
    /// Number of bytes accepted
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        forward(self, bytes.iter().copied())
    }

    /// Write a value using the strategy selected by its type shape
    fn print<T: Printable + ?Sized>(&mut self, value: &T) -> usize
    where
        Self: Sized,
    {
        value.print_to(self)
    }

    /// Replay the content held by `source` into this sink
    fn print_from<R: Render + ?Sized>(&mut self, source: &R) -> usize
    where
        Self: Sized,
    {
        source.render_to(self)
    }
}

/// Feed `bytes` to `out` one at a time, stopping at the first refused byte
///
/// The bytes accepted are always a prefix of the input.
pub(crate) fn forward<P, I>(out: &mut P, bytes: I) -> usize
where
    P: Print + ?Sized,
    I: IntoIterator<Item = u8>,
{
    let mut written = 0;
    for byte in bytes {
        if out.write_byte(byte) == 0 {
            break;
        }
        written += 1;
    }
    written
}

/// Content that can be replayed into a [`Print`]
pub trait Render {
    /// Forward held content to `out`, stopping at the first refused byte
    ///
    /// # Returns
    ///
    /// Number of bytes the consumer accepted
    fn render_to<P: Print + ?Sized>(&self, out: &mut P) -> usize;
}

/// Value that can write itself to a [`Print`]
///
/// Implemented automatically for every classified type whose shape has a
/// [`Strategy`]; there is nothing to implement by hand.
pub trait Printable {
    /// Write `self` to `out`
    ///
    /// # Returns
    ///
    /// Number of bytes accepted
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> usize;
}

impl<P: Print + ?Sized> Print for &mut P {
    fn write_byte(&mut self, byte: u8) -> usize {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        (**self).write_bytes(bytes)
    }
}

#[cfg(feature = "heapless")]
impl<const N: usize> Print for heapless::Vec<u8, N> {
    fn write_byte(&mut self, byte: u8) -> usize {
        usize::from(self.push(byte).is_ok())
    }
}

#[cfg(feature = "alloc")]
impl Print for alloc::vec::Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.push(byte);
        1
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.extend_from_slice(bytes);
        bytes.len()
    }
}

/// `core::fmt::Write` adapter counting what the underlying `Print` accepted
pub(crate) struct FmtCounter<'a, P: Print + ?Sized> {
    out: &'a mut P,
    written: usize,
}

impl<'a, P: Print + ?Sized> FmtCounter<'a, P> {
    pub(crate) fn new(out: &'a mut P) -> Self {
        Self { out, written: 0 }
    }

    pub(crate) const fn written(&self) -> usize {
        self.written
    }
}

impl<P: Print + ?Sized> fmt::Write for FmtCounter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let accepted = self.out.write_bytes(s.as_bytes());
        self.written += accepted;
        if accepted == s.len() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}
