use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use core::ptr::NonNull;

use crate::access::{Access, Modifiable, Policy, Readable, Writable};
use crate::cell::RawReg;
use crate::hook::SideEffect;
use crate::integers::Integer;
use crate::mask::FieldAlign;

#[cfg(doc)]
use crate::access::{ReadOnly, ReadWrite, WriteOnly};

/// A pointer to a device register, with accesses gated by the access policy `A`.
///
/// # Access permissions
/// The operations available on the register are set by the generic parameter `A`:
/// - when `A` is [`ReadOnly`] or [`ReadWrite`], the register can be read from with
///   [`Reg::read`] and [`Reg::get_field`], and compared with `==`, `<`, etc.;
/// - when `A` is [`WriteOnly`] or [`ReadWrite`], the register can be written to with
///   [`Reg::write`] and [`Reg::reset`];
/// - when `A` is [`ReadWrite`], fields can be updated with [`Reg::set_field`] and
///   [`Reg::clear_field`], and the compound operators `&=`, `|=` and `^=` are available.
///
/// Calling an operation the policy does not provide is a compile-time error.
///
/// Every store goes through the policy's [`write`](Writable::write), so the write mask and
/// the side-effect hook of the policy always apply. `RESET` is the value written by
/// [`Reg::reset`], truncated to the register width.
///
/// # Operators
/// ```
/// use devreg::Reg;
/// use devreg::access::ReadWrite;
///
/// let mut cell = 0u32;
/// let mut reg: Reg<u32, ReadWrite> = Reg::from_mut(&mut cell);
///
/// reg.write(0b1100);
/// reg |= 0b0001;
/// reg &= !0b0100;
/// assert_eq!(reg.read(), 0b1001);
/// assert_eq!(reg & 0b1000, 0b1000);
/// assert!(reg == 0b1001);
/// assert!(reg > 8);
/// ```
pub struct Reg<'a, T, A, const RESET: u128 = 0> {
    raw: RawReg<'a, T>,
    _acs: PhantomData<A>,
}
impl<T, A, const RESET: u128> Clone for Reg<'_, T, A, RESET> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, A, const RESET: u128> Copy for Reg<'_, T, A, RESET> {}

impl<'a, T: Integer, A: Access, const RESET: u128> Reg<'a, T, A, RESET> {
    /// Creates a new `Reg`.
    ///
    /// ⚠️ This function is called by the field-access methods defined by the derive macro
    /// [`RegisterMap`](macro@crate::RegisterMap). Do *not* call this function directly. Changes to this
    /// function are not considered semver breaking.
    ///
    /// # Safety
    /// - `ptr` must be [valid for reads](core::ptr::read_volatile#safety) and
    ///   [writes](core::ptr::write_volatile#safety), as hooks may do both;
    /// - `ptr` must be properly aligned;
    /// - `ptr` must be valid for the whole lifetime `'a`.
    #[doc(hidden)]
    #[allow(non_snake_case)]
    #[inline]
    pub const unsafe fn __MACRO_ONLY__from_ptr(ptr: *mut T) -> Self {
        unsafe { Self::from_raw(RawReg::from_ptr(ptr)) }
    }
    #[inline]
    pub(crate) const unsafe fn from_raw(raw: RawReg<'a, T>) -> Self {
        Self {
            raw,
            _acs: PhantomData,
        }
    }
    /// Returns a register backed by ordinary memory, from a mutable (exclusive) reference.
    #[inline]
    pub fn from_mut(cell: &'a mut T) -> Self {
        // the register is the only borrower for 'a
        unsafe { Self::from_raw(RawReg::from_mut(cell)) }
    }
    /// Returns a raw pointer to the underlying register.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.raw.as_ptr()
    }
    /// Returns `true` if the policy of this register carries a side-effect hook.
    #[inline]
    pub fn has_side_effect(&self) -> bool
    where
        A: Policy<T>,
    {
        <A::Hook as SideEffect<T>>::ACTIVE
    }

    /// Perform a volatile read.
    #[inline]
    pub fn read(&self) -> T
    where
        A: Readable<T>,
    {
        A::read(self.raw)
    }
    /// Read the field of `size` bits at `position`, shifted down to bit 0.
    #[inline]
    pub fn get_field(&self, position: u32, size: u32) -> T
    where
        A: Readable<T>,
    {
        A::get_field(self.raw, position, size, FieldAlign::Lsb)
    }
    /// Read the field of `size` bits at `position`, masked but left in place.
    #[inline]
    pub fn get_field_in_place(&self, position: u32, size: u32) -> T
    where
        A: Readable<T>,
    {
        A::get_field(self.raw, position, size, FieldAlign::InPlace)
    }

    /// Perform a volatile write of `value`, restricted to the write mask.
    #[inline]
    pub fn write(&self, value: T)
    where
        A: Writable<T>,
    {
        A::write(self.raw, value)
    }
    /// The value written by [`Reg::reset`].
    #[inline]
    pub fn reset_value(&self) -> T {
        T::truncate(RESET)
    }
    /// Write the reset value.
    #[inline]
    pub fn reset(&self)
    where
        A: Writable<T>,
    {
        self.write(self.reset_value())
    }

    /// Replace the field of `size` bits at `position` with `value`, given aligned to bit 0.
    ///
    /// `value` is truncated to `size` bits; the other bits of the register are preserved.
    #[inline]
    pub fn set_field(&self, position: u32, size: u32, value: T)
    where
        A: Modifiable<T>,
    {
        A::set_field(self.raw, position, size, value, FieldAlign::Lsb)
    }
    /// Replace the field of `size` bits at `position` with `value`, given already in place.
    #[inline]
    pub fn set_field_in_place(&self, position: u32, size: u32, value: T)
    where
        A: Modifiable<T>,
    {
        A::set_field(self.raw, position, size, value, FieldAlign::InPlace)
    }
    /// Clear the field of `size` bits at `position`.
    #[inline]
    pub fn clear_field(&self, position: u32, size: u32)
    where
        A: Modifiable<T>,
    {
        A::clear_field(self.raw, position, size)
    }
    /// Read the register, and write back `f` of the value read.
    #[inline]
    pub fn modify<F: FnOnce(T) -> T>(&self, f: F)
    where
        A: Readable<T> + Writable<T>,
    {
        self.write(f(self.read()))
    }
}

macro_rules! read_ops {
    ($($op:ident :: $method:ident),*) => {
        $(
            impl<T: Integer, A: Readable<T>, const RESET: u128> $op<T> for &Reg<'_, T, A, RESET> {
                type Output = T;
                #[inline]
                fn $method(self, rhs: T) -> T {
                    self.read().$method(rhs)
                }
            }
            impl<T: Integer, A: Readable<T>, const RESET: u128> $op<T> for Reg<'_, T, A, RESET> {
                type Output = T;
                #[inline]
                fn $method(self, rhs: T) -> T {
                    self.read().$method(rhs)
                }
            }
        )*
    };
}
read_ops!(BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

macro_rules! modify_ops {
    ($($op:ident :: $method:ident => $combine:ident),*) => {
        $(
            impl<T, A, const RESET: u128> $op<T> for Reg<'_, T, A, RESET>
            where
                T: Integer,
                A: Readable<T> + Writable<T>,
            {
                #[inline]
                fn $method(&mut self, rhs: T) {
                    self.modify(|value| value.$combine(rhs))
                }
            }
        )*
    };
}
modify_ops!(
    BitAndAssign::bitand_assign => bitand,
    BitOrAssign::bitor_assign => bitor,
    BitXorAssign::bitxor_assign => bitxor
);

impl<T: Integer, A: Readable<T>, const RESET: u128> PartialEq<T> for Reg<'_, T, A, RESET> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.read() == *other
    }
}
impl<T: Integer, A: Readable<T>, const RESET: u128> PartialOrd<T> for Reg<'_, T, A, RESET> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.read().cmp(other))
    }
}

/// Pointers to custom register maps derived by [`RegisterMap`](macro@crate::RegisterMap).
///
/// ⚠️ This trait is implemented by the derive macro. Do *not* implement this trait directly.
/// Adding new required items to this trait is not considered semver breaking.
///
/// # Safety
/// This trait should only be implemented through the derive macro.
pub unsafe trait RegMapPtr<'a>: Sized + 'a {
    type RegMap;

    /// Creates a new pointer to `Self::RegMap`.
    ///
    /// # Safety
    /// - `ptr` must point to a valid instance of `Self::RegMap`;
    /// - `ptr` must be valid for the whole lifetime `'a`;
    /// - all fields of `Self::RegMap` must allow volatile reads/writes.
    unsafe fn from_nonnull(ptr: NonNull<Self::RegMap>) -> Self;

    /// Creates a new pointer to `Self::RegMap`.
    ///
    /// # Safety
    /// - `ptr` must not be null;
    /// - `ptr` must point to a valid instance of `Self::RegMap`;
    /// - `ptr` must be valid for the whole lifetime `'a`;
    /// - all fields of `Self::RegMap` must allow volatile reads/writes.
    unsafe fn from_ptr(ptr: *mut Self::RegMap) -> Self;

    /// Return a pointer to `Self::RegMap` from a mutable (exclusive) reference.
    fn from_mut(reg: &'a mut Self::RegMap) -> Self;

    /// Returns a raw pointer to the underlying register map.
    fn as_ptr(&self) -> *mut Self::RegMap;
}

/// A `#[repr(C)]` struct laid out like the register block of a peripheral.
///
/// ⚠️ This trait is implemented by the derive macro of the same name, together with the pointer
/// type `Self::Ptr`. Do *not* implement this trait directly.
///
/// # Safety
/// This trait should only be implemented through the derive macro.
pub unsafe trait RegisterMap: Sized + 'static {
    /// The pointer type that exposes one [`Reg`] per register of the map.
    type Ptr<'a>: RegMapPtr<'a, RegMap = Self>;
}
