// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Derivation relation between composite types
//!
//! Rust has no class inheritance, so "D derives from B" is an explicit,
//! compiler-checked relation: `D: Extends<B>`. Its single method is the
//! upcast (`&D -> &B`), the embedded-struct equivalent of a derived pointer
//! converting to a base pointer. The relation is reflexive.
//!
//! Two ways to ask the question:
//!
//! - [`derives_from`] -- `const fn`, for generic code that already carries the
//!   `Extends` bound
//! - [`is_derived_from!`](crate::is_derived_from) -- for any pair of concrete
//!   types; unrelated pairs yield `false` instead of a compile error
//!
//! Both are `false` when either side is fundamental, pointer, array or an
//! unsupported array, whatever impls happen to exist.

use core::marker::PhantomData;

use super::info::TypeInfo;
use super::shape::Shape;

/// `Self` is derived from `Base`
pub trait Extends<Base: ?Sized> {
    /// View `self` as its base
    fn upcast(&self) -> &Base;
}

impl<T: ?Sized> Extends<T> for T {
    fn upcast(&self) -> &T {
        self
    }
}

/// Only composite types can take part in a derivation
pub const fn can_derive<T: TypeInfo + ?Sized>() -> bool {
    <T::Shape as Shape>::KIND.is_composite()
}

/// `D` derives from `B` (the `Extends` bound is checked by the compiler)
pub const fn derives_from<B, D>() -> bool
where
    B: TypeInfo + ?Sized,
    D: TypeInfo + Extends<B> + ?Sized,
{
    can_derive::<B>() && can_derive::<D>()
}

/// Declare that `$derived` extends `$base` through an embedded field path
///
/// ```
/// struct Port { id: u8 }
/// struct Uart { port: Port, baud: u32 }
/// printex::extends!(Uart => Port, port);
///
/// use printex::traits::Extends;
/// let uart = Uart { port: Port { id: 2 }, baud: 9600 };
/// let port: &Port = uart.upcast();
/// assert_eq!(port.id, 2);
/// ```
#[macro_export]
macro_rules! extends {
    ($derived:ty => $base:ty, $($field:ident).+) => {
        impl $crate::traits::Extends<$base> for $derived {
            fn upcast(&self) -> &$base {
                &self.$($field).+
            }
        }
    };
}

/// `true` iff `$derived: Extends<$base>` and both are composite types
///
/// Resolved entirely by the compiler: the `Extends` probe picks one of two
/// trait methods by autoref priority, each returning a constant. Neither
/// side needs a [`TypeInfo`] impl; unclassified types count as composite
/// (see [`kind_of!`](crate::kind_of)).
///
/// ```
/// struct Base;
/// struct Derived { base: Base }
/// struct Other;
/// printex::classify!(Base, Derived, Other);
/// printex::extends!(Derived => Base, base);
///
/// assert!(printex::is_derived_from!(Base, Derived));
/// assert!(!printex::is_derived_from!(Base, Other));
/// assert!(!printex::is_derived_from!(u8, u8));
/// ```
#[macro_export]
macro_rules! is_derived_from {
    ($base:ty, $derived:ty) => {{
        #[allow(unused_imports)]
        use $crate::traits::derive::{ViaExtends as _, ViaUnrelated as _};
        $crate::kind_of!($base).is_composite()
            && $crate::kind_of!($derived).is_composite()
            && (&$crate::traits::derive::Probe::<$base, $derived>::new()).derives()
    }};
}

#[doc(hidden)]
pub struct Probe<B: ?Sized, D: ?Sized>(PhantomData<(fn() -> *const B, fn() -> *const D)>);

impl<B: ?Sized, D: ?Sized> Probe<B, D> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B: ?Sized, D: ?Sized> Clone for Probe<B, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized, D: ?Sized> Copy for Probe<B, D> {}

#[doc(hidden)]
pub trait ViaExtends {
    fn derives(self) -> bool;
}

impl<B: ?Sized, D: ?Sized + Extends<B>> ViaExtends for &Probe<B, D> {
    fn derives(self) -> bool {
        true
    }
}

#[doc(hidden)]
pub trait ViaUnrelated {
    fn derives(self) -> bool;
}

impl<B: ?Sized, D: ?Sized> ViaUnrelated for Probe<B, D> {
    fn derives(self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NullType;

    struct Device {
        address: u8,
    }

    struct Sensor {
        device: Device,
        scale: u16,
    }

    struct Thermometer {
        sensor: Sensor,
    }

    struct Unrelated;

    crate::classify!(Device, Sensor, Thermometer, Unrelated);
    crate::extends!(Sensor => Device, device);
    crate::extends!(Thermometer => Sensor, sensor);
    crate::extends!(Thermometer => Device, sensor.device);

    fn address_of<D: Extends<Device>>(dev: &D) -> u8 {
        dev.upcast().address
    }

    #[test]
    fn test_upcast() {
        let t = Thermometer {
            sensor: Sensor {
                device: Device { address: 0x48 },
                scale: 16,
            },
        };
        assert_eq!(address_of(&t), 0x48);
        assert_eq!(address_of(&t.sensor), 0x48);
        assert_eq!(Extends::<Sensor>::upcast(&t).scale, 16);
    }

    #[test]
    fn test_derives_from_const() {
        const DIRECT: bool = derives_from::<Device, Sensor>();
        const REFLEXIVE: bool = derives_from::<Device, Device>();
        const FUNDAMENTAL: bool = derives_from::<u32, u32>();
        assert!(DIRECT);
        assert!(REFLEXIVE);
        assert!(!FUNDAMENTAL);
    }

    #[test]
    fn test_is_derived_from() {
        assert!(crate::is_derived_from!(Device, Sensor));
        assert!(crate::is_derived_from!(Device, Thermometer));
        assert!(crate::is_derived_from!(Sensor, Sensor));
        assert!(!crate::is_derived_from!(Sensor, Device));
        assert!(!crate::is_derived_from!(Device, Unrelated));
        assert!(!crate::is_derived_from!(Unrelated, NullType));
    }

    #[test]
    fn test_disallowed_shapes() {
        assert!(!crate::is_derived_from!(u8, u8));
        assert!(!crate::is_derived_from!(bool, bool));
        assert!(!crate::is_derived_from!(*const Device, *const Device));
        assert!(!crate::is_derived_from!([Device; 2], [Device; 2]));
        assert!(!crate::is_derived_from!(Device, [Sensor; 1]));
        assert!(!can_derive::<[[[[[u8; 1]; 1]; 1]; 1]; 1]>());
    }

    // Never passed to `classify!`
    struct Bus {
        id: u8,
    }

    struct SpiBus {
        bus: Bus,
    }

    struct Loose;

    crate::extends!(SpiBus => Bus, bus);

    #[test]
    fn test_unclassified_types() {
        assert!(crate::is_derived_from!(Bus, SpiBus));
        assert!(!crate::is_derived_from!(SpiBus, Bus));
        assert!(!crate::is_derived_from!(Bus, Loose));
        assert!(!crate::is_derived_from!(Device, Loose));
        assert!(!crate::is_derived_from!([Loose; 2], [Loose; 2]));
        assert_eq!(Extends::<Bus>::upcast(&SpiBus { bus: Bus { id: 4 } }).id, 4);
    }
}
