//! Device tables: which logical device lives at which base address.
//!
//! A peripheral family (all UARTs, all GPIO ports, ...) is described by a table of
//! [`DeviceInfo`] entries, known at compile time. Devices are identified either by a number or
//! by a letter, as datasheets usually do (`UART1`, `GPIOA`):
//! ```
//! use devreg::device::{find_base_address, DeviceTable};
//! use devreg::device_table;
//!
//! device_table! {
//!     /// UART peripherals.
//!     pub struct Uarts: numbered {
//!         1 => 0x5000_0000,
//!         2 => 0x5000_1000,
//!         3 => 0x5000_2000,
//!     }
//! }
//! device_table! {
//!     /// GPIO ports.
//!     pub struct Ports: lettered {
//!         'A' => 0x4000_0000,
//!         'B' => 0x4000_1000,
//!         'H' => 0x4000_5000,
//!     }
//! }
//!
//! const UART2: Option<devreg::Address> = find_base_address(Uarts::DEVICES, 2);
//! assert_eq!(UART2, Some(0x5000_1000));
//! assert_eq!(find_base_address(Ports::DEVICES, 7), Some(0x4000_5000));
//! assert_eq!(find_base_address(Ports::DEVICES, 2), None);
//! ```
//!
//! The index of every entry must be unique within its table. The [`device_table!`] macro and
//! all allocators reading a table reject duplicates at compile time:
//! ```compile_fail
//! use devreg::device_table;
//!
//! device_table! {
//!     pub struct Broken: numbered {
//!         1 => 0x5000_0000,
//!         1 => 0x5000_1000,
//!     }
//! }
//! ```
//!
//! [`device_table!`]: crate::device_table

use crate::arch::Address;

/// Associates a logical device index with the base address of its registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceInfo {
    /// Zero-based device index. Letters map `'A'`/`'a'` to 0 through `'Z'`/`'z'` to 25.
    pub index: usize,
    /// Base address of the register block of the device.
    pub base_address: Address,
}

impl DeviceInfo {
    /// The only device of its kind, with index 0.
    #[inline]
    pub const fn single(base_address: Address) -> Self {
        Self::numbered(0, base_address)
    }

    #[inline]
    pub const fn numbered(index: usize, base_address: Address) -> Self {
        Self {
            index,
            base_address,
        }
    }

    /// A device identified by a letter, case-insensitive.
    ///
    /// # Panics
    /// If `letter` is not an ASCII letter. In a `const` context this is a compile-time error.
    #[inline]
    pub const fn lettered(letter: char, base_address: Address) -> Self {
        match alpha_index(letter) {
            Some(index) => Self::numbered(index, base_address),
            None => panic!("device letters must be in 'A'..='Z' or 'a'..='z'"),
        }
    }
}

/// Maps `'a'`/`'A'` to 0 through `'z'`/`'Z'` to 25. Other characters have no index.
#[inline]
pub const fn alpha_index(letter: char) -> Option<usize> {
    match letter {
        'a'..='z' => Some((letter as u32 - 'a' as u32) as usize),
        'A'..='Z' => Some((letter as u32 - 'A' as u32) as usize),
        _ => None,
    }
}

/// A compile-time table of devices of one peripheral family.
///
/// Usually implemented through the [`device_table!`](crate::device_table) macro.
pub trait DeviceTable: 'static {
    const DEVICES: &'static [DeviceInfo];
}

/// Linear search of `devices` for `index`.
///
/// Returns the base address of the first matching entry, or `None` if no entry matches.
#[inline]
pub const fn find_base_address(devices: &[DeviceInfo], index: usize) -> Option<Address> {
    let mut i = 0;
    while i < devices.len() {
        if devices[i].index == index {
            return Some(devices[i].base_address);
        }
        i += 1;
    }
    None
}

/// Returns `true` if no two entries of `devices` share an index.
pub const fn indices_unique(devices: &[DeviceInfo]) -> bool {
    let mut i = 0;
    while i < devices.len() {
        let mut j = i + 1;
        while j < devices.len() {
            if devices[i].index == devices[j].index {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Defines a [`DeviceTable`] type.
///
/// Two forms are accepted, for numbered and for lettered devices:
/// ```
/// devreg::device_table! {
///     pub struct Timers: numbered { 0 => 0x4000_0000, 1 => 0x4000_0400 }
/// }
/// devreg::device_table! {
///     pub struct Ports: lettered { 'a' => 0x4800_0000, 'B' => 0x4800_0400 }
/// }
/// ```
/// Duplicate indices, and letters outside the alphabet, are compile-time errors.
#[macro_export]
macro_rules! device_table {
    (@table $(#[$meta:meta])* $vis:vis $name:ident, [$($info:expr),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::device::DeviceTable for $name {
            const DEVICES: &'static [$crate::device::DeviceInfo] = &[$($info),+];
        }

        const _: () = assert!(
            $crate::device::indices_unique(<$name as $crate::device::DeviceTable>::DEVICES),
            "duplicate device index in device table"
        );
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : numbered { $($index:expr => $base:expr),+ $(,)? }
    ) => {
        $crate::device_table!(@table $(#[$meta])* $vis $name, [
            $($crate::device::DeviceInfo::numbered($index, $base)),+
        ]);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : lettered { $($letter:expr => $base:expr),+ $(,)? }
    ) => {
        $crate::device_table!(@table $(#[$meta])* $vis $name, [
            $($crate::device::DeviceInfo::lettered($letter, $base)),+
        ]);
    };
}
