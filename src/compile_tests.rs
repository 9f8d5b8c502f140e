//! Uses of registers and register maps that must be rejected at compile time.
//!
//! Each block holds exactly one rejected use. The blocks that compile check that the
//! surrounding code is fine on its own.
//!
//! # Register access
//!
//! ```
//! # use devreg::access::{ReadOnly, ReadWrite, WriteOnly};
//! # use devreg::Reg;
//! let (mut a, mut b, mut c) = (0u32, 0u32, 0u32);
//! let ro: Reg<u32, ReadOnly> = Reg::from_mut(&mut a);
//! let wo: Reg<u32, WriteOnly> = Reg::from_mut(&mut b);
//! let mut rw: Reg<u32, ReadWrite> = Reg::from_mut(&mut c);
//! ro.read();
//! ro.get_field(0, 4);
//! wo.write(1);
//! wo.reset();
//! rw.set_field(0, 4, 1);
//! rw.clear_field(0, 4);
//! rw.modify(|v| v + 1);
//! rw |= 1;
//! assert!(rw == 1 && rw < 2 && (rw & 1) == 1);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg.write(1);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg.reset();
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg.set_field(0, 4, 1);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg.set_field_in_place(0, 4, 1);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg.clear_field(0, 4);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg.modify(|v| v + 1);
//! ```
//!
//! ```compile_fail
//! # use devreg::access::ReadOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let mut reg: Reg<u32, ReadOnly> = Reg::from_mut(&mut cell);
//! reg |= 1;
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg.read();
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg.get_field(0, 4);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg.get_field_in_place(0, 4);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg.set_field(0, 4, 1);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg.clear_field(0, 4);
//! ```
//!
//! ```compile_fail,E0277
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg.modify(|v| v + 1);
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! let _ = reg & 1;
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! let _ = reg | 1;
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! let _ = reg == 1;
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! let _ = reg < 1;
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let mut reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg |= 1;
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let mut reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg &= 1;
//! ```
//!
//! ```compile_fail
//! # use devreg::access::WriteOnly;
//! # use devreg::Reg;
//! # let mut cell = 0u32;
//! let mut reg: Reg<u32, WriteOnly> = Reg::from_mut(&mut cell);
//! reg ^= 1;
//! ```
//!
//! # Register maps
//!
//! ```
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C, align(16))]
//! #[derive(RegisterMap)]
//! struct Fine {
//!     #[reg(RO, hook = devreg::hook::NoSideEffect, offset = 0)]
//!     status: u32,
//!     #[reg(reserved, offset = 4)]
//!     _reserved: u32,
//!     #[reg(WO, mask = 0xFF, reset = 0x1, offset = 8)]
//!     data: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct MaskOnReadOnly {
//!     #[reg(RO, mask = 0xFF)]
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct ResetOnReadOnly {
//!     #[reg(RO, reset = 0x1)]
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct ReservedWithAccess {
//!     #[reg(reserved, RW)]
//!     _reserved: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct AccessTwice {
//!     #[reg(RO, WO)]
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct UnknownOption {
//!     #[reg(volatile)]
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//!
//! #[derive(RegisterMap)]
//! struct MissingRepr {
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(align(8))]
//! #[derive(RegisterMap)]
//! struct AlignWithoutC {
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(transparent)]
//! #[derive(RegisterMap)]
//! struct Transparent {
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C, packed)]
//! #[derive(RegisterMap)]
//! struct Packed {
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Signed {
//!     status: i32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Array {
//!     status: [u32; 2],
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Tuple(u32, u32);
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Generic<T> {
//!     status: T,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! enum NotAStruct {
//!     A,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct WrongOffset {
//!     ctrl: u32,
//!     #[reg(offset = 0x8)]
//!     status: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ```compile_fail
//! use devreg::device_table;
//!
//! device_table! {
//!     pub struct Lettered: lettered {
//!         'A' => 0x4000_0000,
//!         'a' => 0x4000_1000,
//!     }
//! }
//! ```
//!
//! ```compile_fail
//! use devreg::device_table;
//!
//! device_table! {
//!     pub struct NotALetter: lettered {
//!         '1' => 0x4000_0000,
//!     }
//! }
//! ```
//!
//! # Regions
//!
//! ```compile_fail
//! # mod yoo {
//! # use devreg::RegisterMap;
//! # #[repr(C)]
//! # #[derive(RegisterMap)]
//! # pub struct Timer {
//! #     ctrl: u32,
//! # }
//! # } // mod yoo
//! # use yoo::Timer;
//! use devreg::allocator::{Hardware, SingleDevice};
//! use devreg::Region;
//!
//! let timer = Region::<Timer, SingleDevice<0x4000_0000, Hardware>>::host();
//! ```
