// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape-keyed print strategies
//!
//! `Printable` is implemented once, for every `T: TypeInfo` whose shape
//! implements `Strategy<T>`. Each shape gets at most one applicable impl, so
//! exactly one code path survives for a given argument type and shapes with
//! no impl (unsupported arrays, composites that are not byte views) simply
//! have no `print`.
//!
//! | Shape            | Output                          |
//! |------------------|---------------------------------|
//! | `Integer<BITS>`  | decimal text                    |
//! | `FloatShape`     | decimal text                    |
//! | `BoolShape`      | `true` / `false`                |
//! | `PointerShape`   | `0x`-prefixed hex address       |
//! | `Array1..Array4` | `[a, b, ...]`, recursing        |
//! | `CompositeShape` | raw bytes (`AsRef<[u8]>` only)  |

use core::fmt::{self, Display, Write};
use core::ptr::NonNull;

use super::{FmtCounter, Print, Printable};
use crate::traits::{
    Array1, Array2, Array3, Array4, BoolShape, CompositeShape, FloatShape, Integer, PointerShape,
    TypeInfo,
};

/// Write strategy of a shape for the type `T`
pub trait Strategy<T: ?Sized> {
    /// Write `value` to `out`, returning the bytes accepted
    fn emit<P: Print + ?Sized>(value: &T, out: &mut P) -> usize;
}

impl<T> Printable for T
where
    T: TypeInfo + ?Sized,
    T::Shape: Strategy<T>,
{
    fn print_to<P: Print + ?Sized>(&self, out: &mut P) -> usize {
        <T::Shape as Strategy<T>>::emit(self, out)
    }
}

fn emit_display<T: Display + ?Sized, P: Print + ?Sized>(value: &T, out: &mut P) -> usize {
    let mut counter = FmtCounter::new(out);
    // A short write already shows up in the count
    let _ = fmt::write(&mut counter, format_args!("{value}"));
    counter.written()
}

impl<T: Display + ?Sized, const BITS: u32> Strategy<T> for Integer<BITS> {
    fn emit<P: Print + ?Sized>(value: &T, out: &mut P) -> usize {
        emit_display(value, out)
    }
}

impl<T: Display + ?Sized> Strategy<T> for FloatShape {
    fn emit<P: Print + ?Sized>(value: &T, out: &mut P) -> usize {
        emit_display(value, out)
    }
}

impl Strategy<bool> for BoolShape {
    fn emit<P: Print + ?Sized>(value: &bool, out: &mut P) -> usize {
        let text: &[u8] = if *value { b"true" } else { b"false" };
        out.write_bytes(text)
    }
}

/// Address view shared by every pointer-shaped type
pub trait PointerLike {
    /// Address pointed to (the pointee, also for references to pointers)
    fn address(&self) -> usize;
}

impl<T: ?Sized> PointerLike for *const T {
    fn address(&self) -> usize {
        self.cast::<()>() as usize
    }
}

impl<T: ?Sized> PointerLike for *mut T {
    fn address(&self) -> usize {
        self.cast::<()>() as usize
    }
}

impl<T: ?Sized> PointerLike for NonNull<T> {
    fn address(&self) -> usize {
        self.as_ptr().cast::<()>() as usize
    }
}

impl<P: PointerLike + ?Sized> PointerLike for &P {
    fn address(&self) -> usize {
        (**self).address()
    }
}

impl<P: PointerLike + ?Sized> PointerLike for &mut P {
    fn address(&self) -> usize {
        (**self).address()
    }
}

impl<T: PointerLike + ?Sized> Strategy<T> for PointerShape {
    fn emit<P: Print + ?Sized>(value: &T, out: &mut P) -> usize {
        let mut counter = FmtCounter::new(out);
        let _ = write!(counter, "{:#x}", value.address());
        counter.written()
    }
}

impl<T: AsRef<[u8]> + ?Sized> Strategy<T> for CompositeShape {
    fn emit<P: Print + ?Sized>(value: &T, out: &mut P) -> usize {
        out.write_bytes(value.as_ref())
    }
}

fn emit_array<T: Printable, P: Print + ?Sized>(items: &[T], out: &mut P) -> usize {
    let mut written = out.write_byte(b'[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            written += out.write_bytes(b", ");
        }
        written += item.print_to(out);
    }
    written + out.write_byte(b']')
}

macro_rules! array_strategy {
    ($($shape:ty),+) => {
        $(
            impl<T: Printable, const N: usize> Strategy<[T; N]> for $shape {
                fn emit<P: Print + ?Sized>(value: &[T; N], out: &mut P) -> usize {
                    emit_array(value, out)
                }
            }
        )+
    };
}

array_strategy!(Array1, Array2, Array3, Array4);
