// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compile-time type traits
//!
//! Minimal metaprogramming toolkit for generic embedded code. Every query is
//! answered during compilation: predicates are `const fn`s over associated
//! constants, selection and enablement are type aliases over trait
//! projections, and shape dispatch is plain trait resolution.
//!
//! ## Building Blocks
//!
//! - [`Select`] -- pick one of two types from a const `bool`
//! - [`Enable`] / [`IsTrue`] -- a type (or bound) that only exists when a
//!   const `bool` is true
//! - [`TypeInfo`] -- per-type shape descriptor (integer width, float, bool,
//!   pointer, array extents)
//! - [`kind_of!`](crate::kind_of) -- the same answer for types without a
//!   descriptor, falling back to composite
//! - [`Extends`] + [`is_derived_from!`](crate::is_derived_from) -- explicit
//!   derivation relation between composite types
//!
//! ## Example
//!
//! ```
//! use printex::traits::{array_info, is_integer_type, is_pointer_type, Select};
//!
//! const _: () = assert!(is_integer_type::<u16>());
//! const _: () = assert!(is_pointer_type::<&'static *const u8>());
//!
//! let info = array_info::<[[u8; 4]; 2]>();
//! assert_eq!(info.extents(), &[2, 4]);
//!
//! let _narrow: Select<false, u32, u16> = 7u16;
//! ```

use core::any::TypeId;

pub mod derive;
pub mod info;
pub mod shape;

pub use derive::{can_derive, derives_from, Extends};
pub use info::{
    array_info, int_width, is_array_type, is_bool_type, is_float_type, is_fundamental_type,
    is_integer_type, is_number_type, is_pointer_type, ArrayInfo, TypeInfo,
};
pub use shape::{
    Array1, Array2, Array3, Array4, BoolShape, CompositeShape, FloatShape, IntWidth, Integer,
    Kind, PointerShape, Shape, Unsupported,
};

/// Placeholder type (the `Next` of anything that is not an array)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullType;

/// Const `bool` lifted to the type level
///
/// Only `Cond<true>` and `Cond<false>` exist; both [`Select`] and [`Enable`]
/// resolve through trait impls on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cond<const V: bool>;

/// Two-way type choice, implemented for both `Cond` values
pub trait Choose<T: ?Sized, U: ?Sized> {
    /// Chosen type
    type Output: ?Sized;
}

impl<T: ?Sized, U: ?Sized> Choose<T, U> for Cond<true> {
    type Output = T;
}

impl<T: ?Sized, U: ?Sized> Choose<T, U> for Cond<false> {
    type Output = U;
}

/// `T` if `V` is true, otherwise `U`
pub type Select<const V: bool, T, U> = <Cond<V> as Choose<T, U>>::Output;

/// Bound that only holds for `Cond<true>`
///
/// Use as `where Cond<{ EXPR }>: IsTrue` on items that must not exist when
/// `EXPR` is false.
pub trait IsTrue {}

impl IsTrue for Cond<true> {}

/// One-way type projection, implemented for `Cond<true>` only
pub trait EnableIf<T: ?Sized> {
    /// `T`, when enabled
    type Output: ?Sized;
}

impl<T: ?Sized> EnableIf<T> for Cond<true> {
    type Output = T;
}

/// `T` if `V` is true; no type at all otherwise
///
/// Naming `Enable<false, T>` anywhere is a compile error, which makes it a
/// static assertion when used as `const _: Enable<{ COND }> = ();`.
pub type Enable<const V: bool, T = ()> = <Cond<V> as EnableIf<T>>::Output;

/// Bound satisfied only when `Self` and `U` are the same type
pub trait SameType<U: ?Sized> {}

impl<T: ?Sized> SameType<T> for T {}

/// Compiles only if `T` and `U` are the same type
pub const fn assert_same_type<T, U>()
where
    T: ?Sized + SameType<U>,
    U: ?Sized,
{
}

/// True iff `T` and `U` are the identical type
///
/// Aliases (`core::ffi::c_int` vs `i32`) compare equal because they name the
/// same type; distinct types of equal width (`usize` vs `u64`) do not.
pub fn is_same_type<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// Register composite types with the classifier
///
/// Composite types have no numeric, pointer or array shape. Registering them
/// is what makes them usable with [`is_derived_from!`](crate::is_derived_from).
///
/// ```
/// struct Sensor;
/// printex::classify!(Sensor);
/// assert!(printex::traits::can_derive::<Sensor>());
/// ```
#[macro_export]
macro_rules! classify {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::TypeInfo for $ty {
                type Shape = $crate::traits::CompositeShape;
                type Next = $crate::traits::NullType;
                type Element = $ty;
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert!(is_same_type::<Select<true, u8, i64>, u8>());
        assert!(is_same_type::<Select<false, u8, i64>, i64>());
        assert_same_type::<Select<{ 1 + 1 == 2 }, f32, bool>, f32>();
    }

    #[test]
    fn test_enable() {
        let value: Enable<true, u16> = 3;
        assert_eq!(value, 3u16);
        assert!(is_same_type::<Enable<{ crate::MAX_DIMENSIONS == 4 }>, ()>());
    }

    #[test]
    fn test_same_type() {
        assert!(is_same_type::<core::ffi::c_int, i32>());
        assert!(is_same_type::<[u8], [u8]>());
        assert!(!is_same_type::<u8, i8>());
        assert!(!is_same_type::<usize, u64>());
        assert!(!is_same_type::<*const u8, *mut u8>());
    }

    fn requires_true()
    where
        Cond<true>: IsTrue,
    {
    }

    #[test]
    fn test_is_true_bound() {
        requires_true();
    }
}
