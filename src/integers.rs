//! Types that can be placed into a [`Reg`](crate::Reg).

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::mask;

/// Types that can be placed into a [`Reg`](crate::Reg).
///
/// This trait is implemented on the unsigned primitive integer types `u8`, `u16`, `u32`, `u64`
/// and `u128`. Signed types and the pointer-sized `usize` are *not* register types: a register
/// is a raw bit container whose width must not depend on the host.
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Integer:
    Debug
    + Default
    + Copy
    + Eq
    + Ord
    + Hash
    + Sized
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + private::Sealed
{
    /// Width of the register in bits.
    const BITS: u32;
    /// All bits cleared.
    const ZERO: Self;
    /// All bits set.
    const MAX: Self;

    /// Keeps the low `Self::BITS` bits of `value`.
    fn truncate(value: u128) -> Self;

    /// Zero-extends `self` to 128 bits.
    fn widen(self) -> u128;

    /// See [`make_mask`](crate::mask::make_mask).
    fn make_mask(position: u32, size: u32) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ident => $make:ident),* $(,)?) => {
        $(
            impl Integer for $ty {
                const BITS: u32 = $ty::BITS;
                const ZERO: Self = 0;
                const MAX: Self = $ty::MAX;

                #[inline]
                fn truncate(value: u128) -> Self {
                    value as $ty
                }
                #[inline]
                fn widen(self) -> u128 {
                    self as u128
                }
                #[inline]
                fn make_mask(position: u32, size: u32) -> Self {
                    mask::$make(position, size)
                }
            }
            impl private::Sealed for $ty {}
        )*
    };
}

impl_integer! {
    u8 => make_mask_u8,
    u16 => make_mask_u16,
    u32 => make_mask_u32,
    u64 => make_mask_u64,
    u128 => make_mask_u128,
}

mod private {
    pub trait Sealed {}
}
