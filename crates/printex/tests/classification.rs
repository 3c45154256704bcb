// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Type classification: every predicate checked against every shape, and the
// facts the rest of the crate relies on pinned as compile-time assertions.

use core::ptr::NonNull;

use printex::traits::{
    array_info, assert_same_type, int_width, is_array_type, is_bool_type, is_float_type,
    is_fundamental_type, is_integer_type, is_number_type, is_pointer_type, is_same_type, Enable,
    Extends, IntWidth, NullType, Select, TypeInfo,
};
use printex::traits::{ArrayInfo, Kind};
use printex::{array_info_of, classify, extends, is_derived_from, kind_of};

// --- Compile-time facts ---------------------------------------------------

const _: () = assert!(is_integer_type::<i64>());
const _: () = assert!(!is_integer_type::<f64>());
const _: () = assert!(is_pointer_type::<&'static mut *mut u8>());
const _: () = assert!(array_info::<[[[u8; 4]; 3]; 2]>().dimensions() == 3);
const _: Enable<{ printex::MAX_DIMENSIONS == 4 }> = ();

// --- Fixtures -------------------------------------------------------------

struct Stream {
    timeout_ms: u32,
}

struct Printer {
    stream: Stream,
}

struct LcdPrinter {
    printer: Printer,
    columns: u8,
}

struct Unrelated;

classify!(Stream, Printer, LcdPrinter, Unrelated);
extends!(Printer => Stream, stream);
extends!(LcdPrinter => Printer, printer);
extends!(LcdPrinter => Stream, printer.stream);

/// Predicate row for one type: integer, float, bool, number, fundamental, pointer, array
fn row<T: TypeInfo + ?Sized>() -> [bool; 7] {
    [
        is_integer_type::<T>(),
        is_float_type::<T>(),
        is_bool_type::<T>(),
        is_number_type::<T>(),
        is_fundamental_type::<T>(),
        is_pointer_type::<T>(),
        is_array_type::<T>(),
    ]
}

const INTEGER: [bool; 7] = [true, false, false, true, true, false, false];
const FLOAT: [bool; 7] = [false, true, false, true, true, false, false];
const BOOL: [bool; 7] = [false, false, true, false, true, false, false];
const POINTER: [bool; 7] = [false, false, false, false, false, true, false];
const ARRAY: [bool; 7] = [false, false, false, false, false, false, true];
const NOTHING: [bool; 7] = [false; 7];

#[test]
fn integers_by_width() {
    let cases = [
        (int_width::<u8>(), int_width::<i8>(), IntWidth::W8),
        (int_width::<u16>(), int_width::<i16>(), IntWidth::W16),
        (int_width::<u32>(), int_width::<i32>(), IntWidth::W32),
        (int_width::<u64>(), int_width::<i64>(), IntWidth::W64),
    ];
    for (unsigned, signed, expected) in cases {
        assert_eq!(unsigned, expected);
        assert_eq!(signed, expected);
    }

    assert_eq!(row::<u8>(), INTEGER);
    assert_eq!(row::<i64>(), INTEGER);
    assert_eq!(row::<usize>(), INTEGER);
}

#[test]
fn platform_aliases_resolve_to_their_width() {
    use core::ffi::{c_char, c_int, c_long, c_longlong, c_short, c_uchar};

    assert_eq!(int_width::<c_char>(), IntWidth::W8);
    assert_eq!(int_width::<c_uchar>(), IntWidth::W8);
    assert_eq!(int_width::<c_short>(), IntWidth::W16);
    assert_eq!(int_width::<c_int>().bits(), c_int::BITS);
    assert_eq!(int_width::<c_long>().bits(), c_long::BITS);
    assert_eq!(int_width::<c_longlong>(), IntWidth::W64);
}

#[test]
fn shapes_are_exclusive() {
    assert_eq!(row::<f32>(), FLOAT);
    assert_eq!(row::<f64>(), FLOAT);
    assert_eq!(row::<bool>(), BOOL);
    assert_eq!(row::<*const u8>(), POINTER);
    assert_eq!(row::<*mut Stream>(), POINTER);
    assert_eq!(row::<NonNull<u16>>(), POINTER);
    assert_eq!(row::<&'static *const u8>(), POINTER);
    assert_eq!(row::<[u8; 3]>(), ARRAY);
    assert_eq!(row::<[[bool; 2]; 2]>(), ARRAY);
    assert_eq!(row::<[*const u8; 4]>(), ARRAY);
    assert_eq!(row::<Stream>(), NOTHING);
    assert_eq!(row::<str>(), NOTHING);
    assert_eq!(row::<[u8]>(), NOTHING);
    assert_eq!(row::<char>(), NOTHING);
    assert_eq!(row::<u128>(), NOTHING);
}

#[test]
fn fundamental_is_number_or_bool() {
    fn check<T: TypeInfo + ?Sized>() {
        assert_eq!(
            is_fundamental_type::<T>(),
            is_number_type::<T>() || is_bool_type::<T>()
        );
    }
    check::<u8>();
    check::<i32>();
    check::<f64>();
    check::<bool>();
    check::<*const f32>();
    check::<[f32; 2]>();
    check::<Printer>();
}

#[test]
fn array_extents_in_declared_order() {
    let one = array_info::<[u8; 9]>();
    assert_eq!(one.dimensions(), 1);
    assert_eq!(one.extents(), &[9]);

    let two = array_info::<[[i16; 8]; 2]>();
    assert_eq!(two.extents(), &[2, 8]);

    let three = array_info::<[[[f32; 1]; 5]; 3]>();
    assert_eq!(three.extents(), &[3, 5, 1]);

    let four = array_info::<[[[[bool; 2]; 3]; 4]; 5]>();
    assert_eq!(four.dimensions(), 4);
    assert_eq!(four.extents(), &[5, 4, 3, 2]);
    assert_eq!(four.element_count(), 120);
}

#[test]
fn array_next_and_element_types() {
    type Cube = [[[u32; 2]; 3]; 4];
    assert_same_type::<<Cube as TypeInfo>::Next, [[u32; 2]; 3]>();
    assert_same_type::<<Cube as TypeInfo>::Element, u32>();
    assert!(is_same_type::<<Stream as TypeInfo>::Next, NullType>());
    assert!(is_same_type::<<Stream as TypeInfo>::Element, Stream>());
}

#[test]
fn deeper_than_four_is_not_an_array() {
    type Five = [[[[[u8; 1]; 2]; 3]; 4]; 5];
    type Six = [Five; 6];
    assert!(!is_array_type::<Five>());
    assert!(!is_array_type::<Six>());
    assert_eq!(array_info::<Five>().dimensions(), 0);
    assert!(array_info::<Six>().extents().is_empty());
    assert_eq!(row::<Five>(), NOTHING);
}

#[test]
fn select_picks_by_condition() {
    assert!(is_same_type::<Select<true, u8, f32>, u8>());
    assert!(is_same_type::<Select<false, u8, f32>, f32>());
    assert!(!is_same_type::<Select<false, u8, f32>, u8>());
    assert!(is_same_type::<Select<{ 2 > 1 }, Stream, Unrelated>, Stream>());
}

#[test]
fn derivation() {
    assert!(is_derived_from!(Stream, Printer));
    assert!(is_derived_from!(Printer, LcdPrinter));
    assert!(is_derived_from!(Stream, LcdPrinter));
    assert!(is_derived_from!(Printer, Printer));
    assert!(!is_derived_from!(Printer, Stream));
    assert!(!is_derived_from!(Stream, Unrelated));
    assert!(!is_derived_from!(Unrelated, LcdPrinter));
}

#[test]
fn derivation_rejects_disallowed_shapes() {
    assert!(!is_derived_from!(u16, u16));
    assert!(!is_derived_from!(f32, f32));
    assert!(!is_derived_from!(bool, bool));
    assert!(!is_derived_from!(*const Stream, *const Printer));
    assert!(!is_derived_from!(*const Stream, *const Stream));
    assert!(!is_derived_from!([Printer; 2], [Printer; 2]));
    assert!(!is_derived_from!(Stream, [Printer; 1]));
    assert!(!is_derived_from!([[[[[Stream; 1]; 1]; 1]; 1]; 1], Stream));
}

#[test]
fn upcast_through_hierarchy() {
    fn timeout<D: Extends<Stream>>(device: &D) -> u32 {
        device.upcast().timeout_ms
    }

    let lcd = LcdPrinter {
        printer: Printer {
            stream: Stream { timeout_ms: 1000 },
        },
        columns: 16,
    };
    assert_eq!(timeout(&lcd), 1000);
    assert_eq!(timeout(&lcd.printer), 1000);
    assert_eq!(lcd.columns, 16);
}

// Declared relation without any classification
struct Frame {
    len: u16,
}

struct TaggedFrame {
    frame: Frame,
}

extends!(TaggedFrame => Frame, frame);

#[test]
fn references_and_library_types_answer_false() {
    assert_eq!(row::<&u8>(), NOTHING);
    assert_eq!(row::<&mut f32>(), NOTHING);
    assert_eq!(row::<(u8, u8)>(), NOTHING);
    assert_eq!(row::<Option<u32>>(), NOTHING);
    assert_eq!(row::<&[u8; 2]>(), NOTHING);
    assert_eq!(row::<&mut *mut u8>(), POINTER);
    assert_eq!(row::<[&str; 2]>(), ARRAY);
}

#[test]
fn unclassified_types_answer_false() {
    for kind in [kind_of!(Frame), kind_of!(&Frame), kind_of!(Vec<Frame>)] {
        assert!(!kind.is_integer());
        assert!(!kind.is_fundamental());
        assert!(!kind.is_pointer());
        assert!(!kind.is_array());
    }
    assert_eq!(kind_of!([Frame; 8]), Kind::Unsupported);
    assert_eq!(array_info_of!([Frame; 8]), ArrayInfo::NONE);
    assert_eq!(kind_of!(*const Frame), Kind::Pointer);
    assert_eq!(array_info_of!([[u8; 3]; 2]).extents(), &[2, 3]);
}

#[test]
fn derivation_without_classification() {
    assert!(is_derived_from!(Frame, TaggedFrame));
    assert!(!is_derived_from!(TaggedFrame, Frame));
    assert!(!is_derived_from!(Frame, Stream));
    assert!(!is_derived_from!([Frame; 2], [Frame; 2]));
    let tagged = TaggedFrame {
        frame: Frame { len: 9 },
    };
    assert_eq!(Extends::<Frame>::upcast(&tagged).len, 9);
}
