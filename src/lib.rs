//! Typed, access-checked device registers, placed at memory-mapped base addresses.
//!
//! The main entry points of this crate are the derive macro [`RegisterMap`](macro@RegisterMap), that generates a
//! pointer type to a peripheral's register block, and [`Region`], that places the register block
//! at the address of a device.
//!
//! **Table of contents**
//! - [Basic usage](#basic-usage)
//! - [Access policies](#access-policies)
//!   - [Write masks and reset values](#write-masks-and-reset-values)
//!   - [Side-effect hooks](#side-effect-hooks)
//! - [Bit fields](#bit-fields)
//! - [Operators](#operators)
//! - [Devices and regions](#devices-and-regions)
//!   - [Host simulation](#host-simulation)
//! - [Type layout and representation](#type-layout-and-representation)
//! - [Thread safety](#thread-safety)
//! - [Crate features](#crate-features)
//! - [Principle of operation](#principle-of-operation)
//!
//! # Basic usage
//!
//! ```rust
//! # mod yoo {
//! # use devreg::RegisterMap;
//! // define struct Uart with the register block of the peripheral
//! // and derive the pointer UartPtr using the RegisterMap macro
//! #[repr(C)]
//! #[derive(RegisterMap, Default)]
//! # pub
//! struct Uart {
//!     #[reg(RW, reset = 0x0000_0300)]
//!     ctrl: u32,
//!     #[reg(RO)]
//!     stat: u32,
//!     #[reg(WO, mask = 0xFF)]
//!     txd: u32,
//!     #[reg(RO)]
//!     rxd: u32,
//! }
//! # } // mod yoo
//! # use yoo::{Uart, UartPtr};
//!
//! // on the target, a Region would place the registers at the UART base address,
//! // here they live in an ordinary struct
//! let mut regs = Uart::default();
//! let uart = UartPtr::from_mut(&mut regs);
//!
//! // all write() operations are volatile
//! uart.ctrl().reset();
//! uart.txd().write(0x1234);
//!
//! // all read() operations are volatile
//! assert_eq!(uart.ctrl().read(), 0x300);
//! assert_eq!(uart.stat().read(), 0);
//! assert_eq!(uart.rxd().read(), 0);
//! ```
//!
//! Access permissions are checked at compile time. The following code does not compile:
//! ```compile_fail,E0277
//! # mod yoo {
//! # use devreg::RegisterMap;
//! # #[repr(C)]
//! # #[derive(RegisterMap, Default)]
//! # pub struct Uart {
//! #     ctrl: u32,
//! #     #[reg(RO)]
//! #     stat: u32,
//! # }
//! # } // mod yoo
//! # use yoo::{Uart, UartPtr};
//! # let mut regs = Uart::default();
//! # let uart = UartPtr::from_mut(&mut regs);
//! uart.stat().write(54); // error[E0277]: cannot write to a read-only register
//! ```
//!
//! # Access policies
//! The access policy of each register is given with the `#[reg()]` attribute, and defaults to
//! read-write if not specified:
//! ```
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Policies {
//!     #[reg(RO)] read_only_register: u32,
//!     #[reg(WO)] write_only_register: u32,
//!     #[reg(RW)] read_write_register: u32,
//!     another_read_write_register: u32,
//! }
//! # } // mod yoo
//! ```
//! Policies are zero-sized types passed as type parameter to [`Reg`]:
//! - [`ReadOnly`](access::ReadOnly) (`#[reg(RO)]`) allows [`read`](Reg::read) and
//!   [`get_field`](Reg::get_field);
//! - [`WriteOnly`](access::WriteOnly) (`#[reg(WO)]`) allows [`write`](Reg::write) and
//!   [`reset`](Reg::reset);
//! - [`ReadWrite`](access::ReadWrite) (`#[reg(RW)]`, or no attribute) allows all of the above,
//!   plus [`set_field`](Reg::set_field), [`clear_field`](Reg::clear_field) and
//!   [`modify`](Reg::modify).
//!
//! An operation the policy does not allow is just not defined for the register.
//!
//! The register types are the unsigned integers [`u8`], [`u16`], [`u32`], [`u64`] and
//! [`u128`]. Fields that are not registers, such as reserved words or padding, are marked with
//! `#[reg(reserved)]`: they can have any type, and get no accessor.
//!
//! ## Write masks and reset values
//! Writable registers can be given a write mask with `mask = EXPR`. Bits outside the mask are
//! cleared on every store, whatever the value written. The value stored by
//! [`reset`](Reg::reset) is given with `reset = EXPR`, and defaults to zero. Both are
//! compile-time constants carried in the type of the register.
//!
//! The byte offset of a register can be checked against the datasheet with `offset = EXPR`: a
//! mismatch is a compile-time error.
//! ```
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Timer {
//!     #[reg(offset = 0x00, reset = 0x1)]
//!     ctrl: u32,
//!     #[reg(reserved, offset = 0x04)]
//!     _reserved: [u32; 3],
//!     #[reg(WO, mask = 0x0000_FFFF, offset = 0x10)]
//!     load: u32,
//! }
//! # } // mod yoo
//! ```
//!
//! ## Side-effect hooks
//! Each policy can carry a [`SideEffect`](hook::SideEffect) hook, given with `hook = TYPE`,
//! that runs right after every real access of the register. Hooks model what the hardware does
//! in reaction to an access, so that drivers can be tested against plain memory. See the
//! [`hook`] module.
//!
//! # Bit fields
//! Fields are runs of `size` bits starting at bit `position`. Their masks are computed by the
//! functions of the [`mask`] module, all of which are `const`. A field that does not fit in the
//! register has an empty mask.
//! ```
//! use devreg::access::ReadWrite;
//! use devreg::Reg;
//!
//! let mut cell = 0u32;
//! let reg: Reg<u32, ReadWrite> = Reg::from_mut(&mut cell);
//! reg.set_field(8, 4, 0b1010);
//! assert_eq!(reg.read(), 0x0000_0A00);
//! assert_eq!(reg.get_field(8, 4), 0b1010);
//! assert_eq!(reg.get_field_in_place(8, 4), 0x0000_0A00);
//! reg.clear_field(8, 4);
//! assert_eq!(reg.read(), 0);
//! ```
//!
//! # Operators
//! Registers that can be read compare (`==`, `<`, ...) and combine (`&`, `|`, `^`) with plain
//! integers by reading themselves first. Read-write registers also provide `&=`, `|=` and `^=`,
//! which read, combine and write back through [`write`](Reg::write), so the write mask and
//! the hook always apply. Rust cannot overload `=`, so assignment is [`write`](Reg::write).
//!
//! # Devices and regions
//! A device allocator resolves a device to the memory its registers live in, see the
//! [`allocator`] module. Devices of one peripheral family are listed in a table defined with
//! [`device_table!`], and identified by a number or by a letter. A [`Region`] places a
//! register map at the memory given by an allocator:
//! ```
//! # mod yoo {
//! # use devreg::RegisterMap;
//! # #[repr(C)]
//! # #[derive(RegisterMap)]
//! # pub struct Gpio {
//! #     moder: u32,
//! #     #[reg(RO)]
//! #     idr: u32,
//! #     odr: u32,
//! # }
//! # } // mod yoo
//! # use yoo::Gpio;
//! use devreg::allocator::{DeviceList, Host};
//! use devreg::{device_table, Region};
//!
//! device_table! {
//!     pub struct Ports: lettered { 'A' => 0x4800_0000, 'B' => 0x4800_0400 }
//! }
//!
//! type GpioPort = Region<Gpio, DeviceList<Ports, Host>>;
//!
//! let port_b = GpioPort::host_at_letter('b').expect("port B is in the table");
//! port_b.regs().odr().set_field(3, 1, 1);
//! assert_eq!(port_b.regs().odr().read(), 0b1000);
//!
//! // unknown devices do not resolve
//! assert!(GpioPort::host_at_letter('Z').is_none());
//! ```
//!
//! Placing registers at a hardware address is the one act this crate cannot check: the address
//! must hold the registers of the map, and nothing else may use them. The constructors that may
//! place registers on hardware, [`Region::new`], [`Region::at`] and [`Region::at_letter`], are
//! therefore `unsafe`. Their `host` counterparts only accept allocators with host placement, and
//! are safe.
//!
//! ## Host simulation
//! With the feature `simulation`, allocators that do not name their placement allocate zeroed
//! heap memory instead of using the device addresses. The same driver source, calling the
//! `unsafe` constructors, then runs on the host, and only the placement changes.
//!
//! # Type layout and representation
//! The derive macro [`RegisterMap`](macro@RegisterMap) requires the register-map `struct` to have the `C`
//! representation using the `#[repr(C)]` attribute. Higher alignment requirements can be
//! specified with the `#[repr(C, align(x))]` attribute. Other representations are not supported
//! and generate a compile-time error.
//!
//! In summary:
//! - `#[repr(C)]`: The `C` representation is *required*.
//! - Default/`Rust` representation is *not* supported.
//! - `#[repr(transparent)]`: The `transparent` representation is *not* supported.
//! - `#[repr(align(x))]`: *Raising* the alignment of the register map is supported, in
//!   combination with the `C` representation.
//! - `#[repr(packed)]`: *Lowering* the alignment of the register map is *not* supported, as
//!   registers are never accessed unaligned.
//!
//! # Thread safety
//!
//! All register accesses are volatile. However in Rust, *"just like in C, whether an operation
//! is volatile has no bearing whatsoever on questions involving concurrent access from multiple
//! threads. Volatile accesses behave exactly like non-atomic accesses in that regard."* See
//! safety docs for [`read_volatile`](core::ptr::read_volatile#safety) and
//! [`write_volatile`](core::ptr::write_volatile#safety).
//!
//! Therefore [`Reg`], [`Region`] and the pointers derived by [`RegisterMap`](macro@RegisterMap) implement neither
//! [`Send`] nor [`Sync`], and perform no locking. Drivers that share a register between threads
//! or interrupt handlers must synchronize on their own.
//!
//! # Crate features
//!
//! By default, only `alloc` is enabled. These features exist:
//!
//! - **alloc** -
//!   Provides the [`Host`](allocator::Host) placement, that allocates registers in heap memory.
//!
//! - **simulation** -
//!   Makes [`Host`](allocator::Host) the [`DefaultPlacement`](allocator::DefaultPlacement) of all
//!   allocators. Depends on feature `alloc`.
//!
//! - **std** -
//!   When enabled, this will cause `devreg` to use the standard library. Currently, this feature
//!   is only used as a dependency of other features.
//!
//! - **debug-trace** -
//!   When enabled, all register reads and writes print a debug trace to standard error. Depends
//!   on feature `std`. For example, the code
//!   ```ignore
//!   uart.ctrl().write(0);
//!   uart.ctrl().read();
//!   uart.txd().write(0xa5);
//!   ```
//!   might print something like
//!   ```text
//!   DEVREG WRITE 0x7ffc30c85c70 0
//!   DEVREG READ  0x7ffc30c85c70 0
//!   DEVREG WRITE 0x7ffc30c85c78 165
//!   ```
//!   Note that this feature only works on targets that support `std`, and that printing to
//!   standard error for every register access might heavily impact performance.
//!
//! - **log** -
//!   Emits register accesses, and the placement and release of regions, at `trace` level through
//!   the [`log`](https://docs.rs/log) facade. Works on `no_std` targets with a logger installed.
//!
//! - **arch-8bit**, **arch-16bit**, **arch-64bit** -
//!   Select the width of [`Address`]. Without any of them, addresses are 32 bits wide. At most
//!   one of them can be enabled.
//!
//! # Principle of operation
//!
//! The derive macro [`RegisterMap`](macro@RegisterMap) takes as input the definition of a register map (a
//! `struct`), and generates a custom pointer type that is a wrapper around a raw pointer to the
//! original `struct`. For each register, the pointer type has a method returning a [`Reg`] that
//! carries the access policy, write mask and reset value of the register in its type.
//!
//! No references to the register map are ever created. The derive macro uses
//! [`addr_of_mut!`](core::ptr::addr_of_mut) to compute the address of each register, and all
//! memory accesses are performed on raw pointers with volatile semantics. This matters because
//! the compiler is allowed to insert spurious reads and writes through references, which is fine
//! for ordinary memory but not for registers whose accesses have side effects.
//!
//! For a register map
//! ```
//! # mod yoo {
//! # use devreg::RegisterMap;
//! #[repr(C)]
//! #[derive(RegisterMap)]
//! struct Basic {
//!     #[reg(WO, mask = 0xF0)]
//!     field: u8,
//! }
//! # } // mod yoo
//! ```
//! the derive macro generates the following abridged code:
//! ```ignore
//! struct BasicPtr<'a> { ... };
//! impl<'a> BasicPtr<'a> {
//!     fn field(&self) -> Reg<'a, u8, WriteOnly<{ (0xF0) as u128 }, NoSideEffect>, 0> { ... }
//! }
//! unsafe impl RegisterMap for Basic {
//!     type Ptr<'a> = BasicPtr<'a>;
//! }
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

/// Derive macro to generate a pointer to a register map with volatile, access-checked registers.
///
/// See the [top-level documentation](crate) for usage information and examples.
pub use devreg_derive::RegisterMap;

pub mod access;

pub mod allocator;

mod arch;
pub use arch::{Address, ArchWord};

mod cell;
pub use cell::RawReg;

mod compile_tests;

pub mod device;

pub mod hook;

pub mod integers;
pub use integers::Integer;

pub mod mask;
pub use mask::{Field, FieldAlign};

mod reg;
pub use reg::{Reg, RegMapPtr, RegisterMap};

mod region;
pub use region::Region;

mod trace;
