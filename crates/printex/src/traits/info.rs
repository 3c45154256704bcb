// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptor and compile-time predicates
//!
//! ## Classified Types
//!
//! - Integers: u8/i8, u16/i16, u32/i32, u64/i64, plus usize/isize by pointer width
//! - Floats: f32, f64
//! - Bool: bool
//! - Pointers: `*const T`, `*mut T`, `NonNull<T>` and references to them
//! - Arrays: `[T; N]` nested up to four deep
//! - Composite: char, u128, i128, (), str, `[T]`, tuples up to six, `Option`,
//!   `Result`, `PhantomData`, references to anything but a pointer,
//!   `String`/`Vec`/`Box` with `alloc`, and anything registered with
//!   [`classify!`](crate::classify)
//!
//! The `const fn` predicates need a [`TypeInfo`] impl. For a type that may
//! have none, [`kind_of!`](crate::kind_of) and
//! [`array_info_of!`](crate::array_info_of) answer anyway, with `false` /
//! "not an array" for the unknown.

use core::marker::PhantomData;
use core::ptr::NonNull;

use super::shape::{
    BoolShape, CompositeShape, FloatShape, IntWidth, Integer, Kind, PointerShape, Shape,
};
use super::NullType;
use crate::MAX_DIMENSIONS;

/// Compile-time descriptor of a type
pub trait TypeInfo {
    /// Shape marker (exactly one per type)
    type Shape: Shape;

    /// Type left after stripping the outermost array dimension
    /// (`NullType` when not an array)
    type Next: ?Sized;

    /// Innermost non-array type (`Self` when not an array)
    type Element: ?Sized;

    /// Extent of each dimension, outermost first, zero padded
    const EXTENTS: [usize; MAX_DIMENSIONS] = [0; MAX_DIMENSIONS];
}

macro_rules! scalar_info {
    ($shape:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl TypeInfo for $ty {
                type Shape = $shape;
                type Next = NullType;
                type Element = $ty;
            }
        )+
    };
}

scalar_info!(Integer<8> => u8, i8);
scalar_info!(Integer<16> => u16, i16);
scalar_info!(Integer<32> => u32, i32);
scalar_info!(Integer<64> => u64, i64);
scalar_info!(Integer<{ usize::BITS }> => usize, isize);
scalar_info!(FloatShape => f32, f64);
scalar_info!(BoolShape => bool);
scalar_info!(CompositeShape => char, u128, i128, (), str, NullType);

macro_rules! composite_info {
    ($(<$($g:ident),*> $ty:ty),+ $(,)?) => {
        $(
            impl<$($g),*> TypeInfo for $ty {
                type Shape = CompositeShape;
                type Next = NullType;
                type Element = $ty;
            }
        )+
    };
}

composite_info!(
    <T> [T],
    <T> Option<T>,
    <T, E> core::result::Result<T, E>,
    <T> PhantomData<T>,
    <A> (A,),
    <A, B> (A, B),
    <A, B, C> (A, B, C),
    <A, B, C, D> (A, B, C, D),
    <A, B, C, D, E> (A, B, C, D, E),
    <A, B, C, D, E, F> (A, B, C, D, E, F),
);

#[cfg(feature = "alloc")]
composite_info!(
    <> alloc::string::String,
    <T> alloc::vec::Vec<T>,
    <T> alloc::boxed::Box<T>,
);

macro_rules! pointer_info {
    ($(<$t:ident> $ptr:ty),+ $(,)?) => {
        $(
            impl<$t: ?Sized> TypeInfo for $ptr {
                type Shape = PointerShape;
                type Next = NullType;
                type Element = $ptr;
            }
        )+
    };
}

pointer_info!(<T> *const T, <T> *mut T, <T> NonNull<T>);

// A reference keeps the pointer shape of its referent and is composite
// otherwise, so `&*const T` is a pointer and `&u8` is not.
impl<'a, T: TypeInfo + ?Sized> TypeInfo for &'a T {
    type Shape = <T::Shape as Shape>::Behind;
    type Next = NullType;
    type Element = &'a T;
}

impl<'a, T: TypeInfo + ?Sized> TypeInfo for &'a mut T {
    type Shape = <T::Shape as Shape>::Behind;
    type Next = NullType;
    type Element = &'a mut T;
}

impl<T: TypeInfo, const N: usize> TypeInfo for [T; N] {
    type Shape = <T::Shape as Shape>::Outer;
    type Next = T;
    type Element = T::Element;

    const EXTENTS: [usize; MAX_DIMENSIONS] = match <Self::Shape as Shape>::KIND {
        Kind::Array(_) => {
            let inner = T::EXTENTS;
            [N, inner[0], inner[1], inner[2]]
        }
        _ => [0; MAX_DIMENSIONS],
    };
}

const fn kind<T: TypeInfo + ?Sized>() -> Kind {
    <T::Shape as Shape>::KIND
}

/// Integer width class of `T` (`IntWidth::None` when not an integer)
pub const fn int_width<T: TypeInfo + ?Sized>() -> IntWidth {
    kind::<T>().int_width()
}

/// 8, 16, 32 or 64-bit integer, signed or unsigned
pub const fn is_integer_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_integer()
}

/// f32 or f64
pub const fn is_float_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_float()
}

/// bool
pub const fn is_bool_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_bool()
}

/// Integer or float
pub const fn is_number_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_number()
}

/// Number or bool
pub const fn is_fundamental_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_fundamental()
}

/// Pointer, or reference to a pointer
pub const fn is_pointer_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_pointer()
}

/// Array of 1 to 4 dimensions
pub const fn is_array_type<T: TypeInfo + ?Sized>() -> bool {
    kind::<T>().is_array()
}

/// Dimension count and extents of an array type
///
/// All zero for anything that is not a supported array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayInfo {
    dimensions: usize,
    extents: [usize; MAX_DIMENSIONS],
}

impl ArrayInfo {
    /// Descriptor of anything that is not a supported array
    pub const NONE: Self = Self {
        dimensions: 0,
        extents: [0; MAX_DIMENSIONS],
    };

    /// Describe `T`
    pub const fn of<T: TypeInfo + ?Sized>() -> Self {
        Self {
            dimensions: kind::<T>().dimensions(),
            extents: T::EXTENTS,
        }
    }

    /// True for arrays of 1 to 4 dimensions
    pub const fn is_array(&self) -> bool {
        self.dimensions != 0
    }

    /// Number of dimensions (0 when not an array)
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Extent of the outermost dimension (0 when not an array)
    pub const fn first(&self) -> usize {
        self.extents[0]
    }

    /// Extents, outermost first
    pub fn extents(&self) -> &[usize] {
        &self.extents[..self.dimensions]
    }

    /// Total number of innermost elements (0 when not an array)
    pub const fn element_count(&self) -> usize {
        if self.dimensions == 0 {
            return 0;
        }
        let mut count = 1;
        let mut i = 0;
        while i < self.dimensions {
            count *= self.extents[i];
            i += 1;
        }
        count
    }
}

/// Shorthand for [`ArrayInfo::of`]
pub const fn array_info<T: TypeInfo + ?Sized>() -> ArrayInfo {
    ArrayInfo::of::<T>()
}

/// [`Kind`] of any type, classified or not
///
/// Types with a [`TypeInfo`] impl report their shape. Arrays whose element
/// type has none report `Unsupported`, anything else `Composite`, so every
/// predicate on the result is a conservative `false`.
///
/// ```
/// struct Opaque;
///
/// assert!(printex::kind_of!(&'static *const u8).is_pointer());
/// assert!(!printex::kind_of!(Opaque).is_pointer());
/// assert!(!printex::kind_of!([Opaque; 3]).is_array());
/// ```
#[macro_export]
macro_rules! kind_of {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::traits::info::{ViaArray as _, ViaFallback as _, ViaTypeInfo as _};
        #[allow(clippy::needless_borrow)]
        let kind = (&&$crate::traits::info::KindProbe::<$ty>::new()).kind();
        kind
    }};
}

/// [`ArrayInfo`] of any type, classified or not ([`ArrayInfo::NONE`] when
/// the type has no [`TypeInfo`] impl)
#[macro_export]
macro_rules! array_info_of {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::traits::info::{ViaArray as _, ViaFallback as _, ViaTypeInfo as _};
        #[allow(clippy::needless_borrow)]
        let info = (&&$crate::traits::info::KindProbe::<$ty>::new()).array_info();
        info
    }};
}

#[doc(hidden)]
pub struct KindProbe<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> KindProbe<T> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for KindProbe<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for KindProbe<T> {}

#[doc(hidden)]
pub trait ViaTypeInfo {
    fn kind(self) -> Kind;
    fn array_info(self) -> ArrayInfo;
}

impl<T: TypeInfo + ?Sized> ViaTypeInfo for &&KindProbe<T> {
    fn kind(self) -> Kind {
        kind::<T>()
    }

    fn array_info(self) -> ArrayInfo {
        ArrayInfo::of::<T>()
    }
}

#[doc(hidden)]
pub trait ViaArray {
    fn kind(self) -> Kind;
    fn array_info(self) -> ArrayInfo;
}

impl<T, const N: usize> ViaArray for &KindProbe<[T; N]> {
    fn kind(self) -> Kind {
        Kind::Unsupported
    }

    fn array_info(self) -> ArrayInfo {
        ArrayInfo::NONE
    }
}

#[doc(hidden)]
pub trait ViaFallback {
    fn kind(self) -> Kind;
    fn array_info(self) -> ArrayInfo;
}

impl<T: ?Sized> ViaFallback for KindProbe<T> {
    fn kind(self) -> Kind {
        Kind::Composite
    }

    fn array_info(self) -> ArrayInfo {
        ArrayInfo::NONE
    }
}
