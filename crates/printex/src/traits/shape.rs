// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape markers
//!
//! A shape is a zero-sized marker type naming the category of a classified
//! type. Every [`TypeInfo`](super::TypeInfo) impl picks exactly one, so the
//! categories are mutually exclusive by construction. Array depth is counted
//! at the type level through [`Shape::Outer`]:
//!
//! ```text
//! scalar/pointer/composite -> Array1 -> Array2 -> Array3 -> Array4 -> Unsupported
//! ```

/// Integer width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntWidth {
    /// Not an integer
    #[default]
    None,
    /// 8-bit (u8, i8)
    W8,
    /// 16-bit (u16, i16)
    W16,
    /// 32-bit (u32, i32)
    W32,
    /// 64-bit (u64, i64)
    W64,
}

impl IntWidth {
    /// Width class for a bit count (anything but 8/16/32/64 is `None`)
    pub const fn from_bits(bits: u32) -> Self {
        match bits {
            8 => Self::W8,
            16 => Self::W16,
            32 => Self::W32,
            64 => Self::W64,
            _ => Self::None,
        }
    }

    /// Bit count (0 for `None`)
    pub const fn bits(self) -> u32 {
        match self {
            Self::None => 0,
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

/// Runtime-inspectable mirror of a shape (still a compile-time constant)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// 8 to 64-bit integer
    Integer(IntWidth),
    /// f32 / f64
    Float,
    /// bool
    Bool,
    /// Raw pointer, `NonNull`, or a reference to one of those
    Pointer,
    /// Array of 1 to 4 dimensions
    Array(usize),
    /// Anything else (structs, str, char, u128, ...)
    Composite,
    /// Array nested deeper than `MAX_DIMENSIONS`
    Unsupported,
}

impl Kind {
    /// Number of array dimensions (0 when not an array)
    pub const fn dimensions(self) -> usize {
        match self {
            Self::Array(dims) => dims,
            _ => 0,
        }
    }

    /// Integer width class (`IntWidth::None` when not an integer)
    pub const fn int_width(self) -> IntWidth {
        match self {
            Self::Integer(width) => width,
            _ => IntWidth::None,
        }
    }

    /// 8, 16, 32 or 64-bit integer
    pub const fn is_integer(self) -> bool {
        !matches!(self.int_width(), IntWidth::None)
    }

    /// f32 or f64
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float)
    }

    /// bool
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Integer or float
    pub const fn is_number(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Integer, float or bool
    pub const fn is_fundamental(self) -> bool {
        self.is_number() || self.is_bool()
    }

    /// Pointer, or reference to a pointer
    pub const fn is_pointer(self) -> bool {
        matches!(self, Self::Pointer)
    }

    /// Array of 1 to 4 dimensions
    pub const fn is_array(self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Composite (the only kind allowed in a derivation)
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Composite)
    }
}

/// Shape marker trait
pub trait Shape {
    /// Category of this shape
    const KIND: Kind;

    /// Shape of an array whose elements have this shape
    type Outer: Shape;

    /// Shape of a reference to a value of this shape
    ///
    /// Only a reference to a pointer is still a pointer; any other
    /// reference is composite.
    type Behind: Shape;
}

/// Integer of `BITS` width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer<const BITS: u32>;

/// Floating point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatShape;

/// Boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolShape;

/// Pointer or reference-to-pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerShape;

/// Anything that is neither fundamental, pointer nor array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeShape;

/// One-dimensional array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array1;

/// Two-dimensional array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array2;

/// Three-dimensional array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array3;

/// Four-dimensional array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array4;

/// Array deeper than four dimensions (reported as "not an array")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported;

impl<const BITS: u32> Shape for Integer<BITS> {
    const KIND: Kind = Kind::Integer(IntWidth::from_bits(BITS));
    type Outer = Array1;
    type Behind = CompositeShape;
}

macro_rules! shape {
    ($($shape:ty => $kind:expr, $outer:ty, $behind:ty);+ $(;)?) => {
        $(
            impl Shape for $shape {
                const KIND: Kind = $kind;
                type Outer = $outer;
                type Behind = $behind;
            }
        )+
    };
}

shape!(
    FloatShape => Kind::Float, Array1, CompositeShape;
    BoolShape => Kind::Bool, Array1, CompositeShape;
    PointerShape => Kind::Pointer, Array1, PointerShape;
    CompositeShape => Kind::Composite, Array1, CompositeShape;
    Array1 => Kind::Array(1), Array2, CompositeShape;
    Array2 => Kind::Array(2), Array3, CompositeShape;
    Array3 => Kind::Array(3), Array4, CompositeShape;
    Array4 => Kind::Array(4), Unsupported, CompositeShape;
    Unsupported => Kind::Unsupported, Unsupported, CompositeShape;
);
