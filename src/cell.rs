use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::integers::Integer;
use crate::trace;

#[cfg(doc)]
use crate::{hook::SideEffect, reg::Reg};

/// A pointer to one register cell, with volatile loads and stores and no access checks.
///
/// This is the storage primitive below the access policies: every [`Reg`] access ends up as
/// [`load`](RawReg::load) and [`store`](RawReg::store) calls on a `RawReg`. The compiler never
/// elides or reorders these volatile accesses with respect to each other.
///
/// A `RawReg` is handed to [`SideEffect`] hooks so they can model what the hardware does to
/// the register. Driver code only ever sees the policy-checked [`Reg`].
pub struct RawReg<'a, T> {
    ptr: NonNull<T>,
    _ref: PhantomData<&'a T>,
}
impl<T> Clone for RawReg<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for RawReg<'_, T> {}

impl<'a, T: Integer> RawReg<'a, T> {
    #[inline]
    pub(crate) const unsafe fn from_nonnull(ptr: NonNull<T>) -> Self {
        Self {
            ptr,
            _ref: PhantomData,
        }
    }
    /// Creates a new `RawReg` from a raw pointer.
    ///
    /// # Safety
    /// - `ptr` must not be null;
    /// - `ptr` must be properly aligned;
    /// - `ptr` must be [valid for reads](core::ptr::read_volatile#safety) and
    ///   [writes](core::ptr::write_volatile#safety) for the whole lifetime `'a`.
    #[inline]
    pub const unsafe fn from_ptr(ptr: *mut T) -> Self {
        unsafe { Self::from_nonnull(NonNull::new_unchecked(ptr)) }
    }
    /// Returns a `RawReg` to ordinary memory from a mutable (exclusive) reference.
    #[inline]
    pub fn from_mut(cell: &'a mut T) -> Self {
        // the exclusive borrow is valid for 'a
        unsafe { Self::from_nonnull(NonNull::from(cell)) }
    }
    /// Returns a raw pointer to the underlying register.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
    /// Perform a volatile read.
    #[inline]
    pub fn load(self) -> T {
        let value = unsafe { self.ptr.read_volatile() };
        trace::read(self.as_ptr(), value);
        value
    }
    /// Perform a volatile write.
    #[inline]
    pub fn store(self, value: T) {
        unsafe { self.ptr.write_volatile(value) };
        trace::write(self.as_ptr(), value);
    }
}
