//! Access policies: which operations a register provides, and how they touch the hardware.
//!
//! A policy is a zero-sized type passed as a type parameter to [`Reg`](crate::Reg):
//! - [`ReadOnly`] provides [`Readable`];
//! - [`WriteOnly`] provides [`Writable`];
//! - [`ReadWrite`] provides [`Readable`], [`Writable`] and [`Modifiable`].
//!
//! The writable policies carry a write mask `MASK` (all ones by default): bits outside the mask
//! are cleared on every store, whatever the written value. All policies carry an optional
//! [`SideEffect`] hook, invoked right after each real access.
//!
//! The policy operations work on a bare [`RawReg`], so they can be used on their own:
//! ```
//! use devreg::access::{ReadWrite, Readable, Writable};
//! use devreg::RawReg;
//!
//! let mut cell = 0u32;
//! let raw = RawReg::from_mut(&mut cell);
//! <ReadWrite<0x0000_FFFF>>::write(raw, 0xAAAA_BBBB);
//! assert_eq!(<ReadWrite<0x0000_FFFF>>::read(raw), 0x0000_BBBB);
//! ```

use core::marker::PhantomData;

use crate::cell::RawReg;
use crate::hook::{NoSideEffect, SideEffect};
use crate::integers::Integer;
use crate::mask::FieldAlign;

/// Read-only access. Implements [`Readable`].
pub struct ReadOnly<H = NoSideEffect> {
    _hook: PhantomData<H>,
}

/// Write-only access through the write mask `MASK`. Implements [`Writable`].
pub struct WriteOnly<const MASK: u128 = { u128::MAX }, H = NoSideEffect> {
    _hook: PhantomData<H>,
}

/// Read and write access, with the write mask `MASK`.
///
/// Implements [`Readable`], [`Writable`] and [`Modifiable`].
pub struct ReadWrite<const MASK: u128 = { u128::MAX }, H = NoSideEffect> {
    _hook: PhantomData<H>,
}

/// Marker trait implemented by all access policies.
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Access: Sized + 'static + private::Sealed {
    /// `true` if the policy provides [`Readable`].
    const READABLE: bool;
    /// `true` if the policy provides [`Writable`].
    const WRITABLE: bool;
    /// `true` if the policy provides [`Modifiable`].
    const MODIFIABLE: bool;
}

/// An access policy for registers of type `T`, bound to its side-effect hook.
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Policy<T: Integer>: Access {
    /// Hook invoked after each access.
    type Hook: SideEffect<T>;
}

/// Policies that allow reading a register, implemented by [`ReadOnly`] and [`ReadWrite`].
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
#[diagnostic::on_unimplemented(
    message = "cannot read from a write-only register",
    label = "method cannot be called on write-only registers",
    note = "the register is write only because it was annotated with the attribute
  `#[reg(WO)]` in the register-map definition, or its policy is `WriteOnly`"
)]
pub trait Readable<T: Integer>: Policy<T> {
    /// Volatile read of the whole register.
    #[inline]
    fn read(reg: RawReg<'_, T>) -> T {
        let value = reg.load();
        <Self::Hook as SideEffect<T>>::read(reg);
        value
    }

    /// Reads the field of `size` bits at `position`.
    ///
    /// With [`FieldAlign::Lsb`] the field is shifted down to bit 0, with
    /// [`FieldAlign::InPlace`] it is returned masked but unshifted.
    #[inline]
    fn get_field(reg: RawReg<'_, T>, position: u32, size: u32, align: FieldAlign) -> T {
        let field = T::make_mask(position, size);
        let value = Self::read(reg) & field;
        match align {
            // an empty mask also covers positions a shift cannot reach
            FieldAlign::Lsb if field != T::ZERO => value >> position,
            _ => value,
        }
    }
}

/// Policies that allow writing a register, implemented by [`WriteOnly`] and [`ReadWrite`].
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
#[diagnostic::on_unimplemented(
    message = "cannot write to a read-only register",
    label = "method cannot be called on read-only registers",
    note = "the register is read only because it was annotated with the attribute
  `#[reg(RO)]` in the register-map definition, or its policy is `ReadOnly`"
)]
pub trait Writable<T: Integer>: Policy<T> {
    /// Write mask, before truncation to the register width.
    const WRITE_MASK: u128;

    /// Write mask of the register.
    #[inline]
    fn write_mask() -> T {
        T::truncate(Self::WRITE_MASK)
    }

    /// Volatile write of `value & write_mask()`.
    #[inline]
    fn write(reg: RawReg<'_, T>, value: T) {
        reg.store(value & Self::write_mask());
        <Self::Hook as SideEffect<T>>::write(reg, value);
    }
}

/// Policies that allow read-modify-write of fields, implemented by [`ReadWrite`].
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
#[diagnostic::on_unimplemented(
    message = "cannot modify fields of a register that is not read-write",
    label = "method can only be called on read-write registers",
    note = "field updates read the register back, so the register must be annotated
  with `#[reg(RW)]` (the default), or its policy must be `ReadWrite`"
)]
pub trait Modifiable<T: Integer>: Readable<T> + Writable<T> {
    /// Replaces the field of `size` bits at `position` with `value`.
    ///
    /// With [`FieldAlign::Lsb`], `value` is truncated to `size` bits and shifted into
    /// position. With [`FieldAlign::InPlace`], `value` is taken as already shifted and only
    /// masked. Bits outside the field keep their current value, and the write mask applies to
    /// the stored result.
    #[inline]
    fn set_field(reg: RawReg<'_, T>, position: u32, size: u32, value: T, align: FieldAlign) {
        let field = T::make_mask(position, size);
        let inserted = match align {
            // an empty mask also covers positions a shift cannot reach
            FieldAlign::Lsb if field != T::ZERO => (value & T::make_mask(0, size)) << position,
            FieldAlign::Lsb => T::ZERO,
            FieldAlign::InPlace => value & field,
        };
        let current = reg.load();
        reg.store(((current & !field) | inserted) & Self::write_mask());
        <Self::Hook as SideEffect<T>>::set_field(reg, position, size, value, align);
    }

    /// Clears the field of `size` bits at `position`, leaving other bits unchanged.
    #[inline]
    fn clear_field(reg: RawReg<'_, T>, position: u32, size: u32) {
        let field = T::make_mask(position, size);
        let current = reg.load();
        reg.store(current & !field & Self::write_mask());
        <Self::Hook as SideEffect<T>>::clear_field(reg, position, size);
    }
}

impl<H: 'static> Access for ReadOnly<H> {
    const READABLE: bool = true;
    const WRITABLE: bool = false;
    const MODIFIABLE: bool = false;
}
impl<const MASK: u128, H: 'static> Access for WriteOnly<MASK, H> {
    const READABLE: bool = false;
    const WRITABLE: bool = true;
    const MODIFIABLE: bool = false;
}
impl<const MASK: u128, H: 'static> Access for ReadWrite<MASK, H> {
    const READABLE: bool = true;
    const WRITABLE: bool = true;
    const MODIFIABLE: bool = true;
}

impl<T: Integer, H: SideEffect<T>> Policy<T> for ReadOnly<H> {
    type Hook = H;
}
impl<T: Integer, const MASK: u128, H: SideEffect<T>> Policy<T> for WriteOnly<MASK, H> {
    type Hook = H;
}
impl<T: Integer, const MASK: u128, H: SideEffect<T>> Policy<T> for ReadWrite<MASK, H> {
    type Hook = H;
}

impl<T: Integer, H: SideEffect<T>> Readable<T> for ReadOnly<H> {}
impl<T: Integer, const MASK: u128, H: SideEffect<T>> Readable<T> for ReadWrite<MASK, H> {}

impl<T: Integer, const MASK: u128, H: SideEffect<T>> Writable<T> for WriteOnly<MASK, H> {
    const WRITE_MASK: u128 = MASK;
}
impl<T: Integer, const MASK: u128, H: SideEffect<T>> Writable<T> for ReadWrite<MASK, H> {
    const WRITE_MASK: u128 = MASK;
}

impl<T: Integer, const MASK: u128, H: SideEffect<T>> Modifiable<T> for ReadWrite<MASK, H> {}

mod private {
    pub trait Sealed {}
    impl<H> Sealed for super::ReadOnly<H> {}
    impl<const MASK: u128, H> Sealed for super::WriteOnly<MASK, H> {}
    impl<const MASK: u128, H> Sealed for super::ReadWrite<MASK, H> {}
}
