//! Side-effect hooks, used to simulate hardware behaviour around register accesses.
//!
//! Real peripherals react to accesses: a status register may clear itself when read, a
//! data register may latch a new value after a write. When registers live in host memory
//! (see [`Host`](crate::allocator::Host)) nothing reacts, so a hook can be attached to the
//! access policy of a register to play the part of the hardware:
//!
//! ```
//! use devreg::access::ReadOnly;
//! use devreg::hook::SideEffect;
//! use devreg::{Integer, RawReg, Reg};
//!
//! /// Status flags are cleared by reading them.
//! struct ClearOnRead;
//! impl<T: Integer> SideEffect<T> for ClearOnRead {
//!     fn read(reg: RawReg<'_, T>) {
//!         reg.store(T::ZERO);
//!     }
//! }
//!
//! let mut status = 0x5u32;
//! let reg: Reg<u32, ReadOnly<ClearOnRead>> = Reg::from_mut(&mut status);
//! assert_eq!(reg.read(), 0x5);
//! assert_eq!(reg.read(), 0x0);
//! ```
//!
//! A hook never replaces the access: it runs once, immediately after the real volatile access
//! has completed. The default hook, [`NoSideEffect`], does nothing and compiles away.

use crate::cell::RawReg;
use crate::integers::Integer;
use crate::mask::FieldAlign;

/// Simulated hardware reaction to accesses on a register of type `T`.
///
/// Every method has an empty default, so a hook only implements the accesses it cares about.
pub trait SideEffect<T: Integer>: 'static {
    /// Set to `false` only by [`NoSideEffect`].
    const ACTIVE: bool = true;

    /// Runs after a volatile read of `reg` (including the read done by `get_field`).
    #[inline]
    fn read(reg: RawReg<'_, T>) {
        let _ = reg;
    }
    /// Runs after `value` was requested to be written to `reg`, and the masked value stored.
    #[inline]
    fn write(reg: RawReg<'_, T>, value: T) {
        let _ = (reg, value);
    }
    /// Runs after a field of `reg` was updated with `value`.
    #[inline]
    fn set_field(reg: RawReg<'_, T>, position: u32, size: u32, value: T, align: FieldAlign) {
        let _ = (reg, position, size, value, align);
    }
    /// Runs after a field of `reg` was cleared.
    #[inline]
    fn clear_field(reg: RawReg<'_, T>, position: u32, size: u32) {
        let _ = (reg, position, size);
    }
}

/// The default hook: no side effects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoSideEffect {}

impl<T: Integer> SideEffect<T> for NoSideEffect {
    const ACTIVE: bool = false;
}
