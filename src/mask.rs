//! Bit masks for fields inside a register.
//!
//! A field is a contiguous run of `size` bits starting at bit `position`, see [`Field`]. The
//! mask of a field that does not fit into the register (`position + size` larger than the
//! register width) is zero: the field is unrepresentable, which is not treated as an error.
//!
//! All mask functions have a `const` flavour per register width, so masks can be computed at
//! compile time:
//! ```
//! use devreg::mask::{composite_mask_u32, make_mask_u32, Field};
//!
//! const ENABLE: u32 = make_mask_u32(0, 1);
//! const MODE: u32 = make_mask_u32(4, 3);
//! const CTRL: u32 = composite_mask_u32(&[Field::bit(0), Field::new(4, 3)]);
//!
//! assert_eq!(ENABLE, 0b1);
//! assert_eq!(MODE, 0b111_0000);
//! assert_eq!(CTRL, ENABLE | MODE);
//! ```

use crate::integers::Integer;

/// A contiguous bit range within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Index of the lowest bit of the field.
    pub position: u32,
    /// Number of bits in the field.
    pub size: u32,
}

impl Field {
    #[inline]
    pub const fn new(position: u32, size: u32) -> Self {
        Self { position, size }
    }

    /// A single-bit field.
    #[inline]
    pub const fn bit(position: u32) -> Self {
        Self::new(position, 1)
    }

    /// Mask of this field in a register of type `T`.
    #[inline]
    pub fn mask<T: Integer>(&self) -> T {
        T::make_mask(self.position, self.size)
    }

    /// Returns `true` if the field lies entirely within a register of type `T`.
    #[inline]
    pub fn fits<T: Integer>(&self) -> bool {
        match self.position.checked_add(self.size) {
            Some(end) => end <= T::BITS,
            None => false,
        }
    }
}

/// How a field value is aligned when it is passed to or returned from a register.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldAlign {
    /// The value is aligned to bit 0: it is shifted into (or out of) the field position.
    #[default]
    Lsb,
    /// The value is already at the field position; it is only masked.
    InPlace,
}

macro_rules! mask_fns {
    ($($ty:ident => $make:ident, $composite:ident;)*) => {
        $(
            #[doc = concat!("Mask of `size` bits starting at `position` in a `", stringify!($ty), "`.")]
            ///
            /// Returns zero if the field does not fit, and all ones if `size` is the full width.
            #[inline]
            pub const fn $make(position: u32, size: u32) -> $ty {
                let end = match position.checked_add(size) {
                    Some(end) => end,
                    None => return 0,
                };
                if size == 0 || end > $ty::BITS {
                    0
                } else if size == $ty::BITS {
                    $ty::MAX
                } else {
                    ((1 << size) - 1) << position
                }
            }

            #[doc = concat!("Bitwise OR of the masks of all `fields` in a `", stringify!($ty), "`.")]
            #[inline]
            pub const fn $composite(fields: &[Field]) -> $ty {
                let mut mask = 0;
                let mut i = 0;
                while i < fields.len() {
                    mask |= $make(fields[i].position, fields[i].size);
                    i += 1;
                }
                mask
            }
        )*
    };
}

mask_fns! {
    u8 => make_mask_u8, composite_mask_u8;
    u16 => make_mask_u16, composite_mask_u16;
    u32 => make_mask_u32, composite_mask_u32;
    u64 => make_mask_u64, composite_mask_u64;
    u128 => make_mask_u128, composite_mask_u128;
}

/// Mask of `size` bits starting at `position` in a register of type `T`.
///
/// - If `position + size` exceeds the width of `T`, returns zero.
/// - If `size` equals the width of `T`, returns `T::MAX`.
/// - Otherwise returns `((1 << size) - 1) << position`.
#[inline]
pub fn make_mask<T: Integer>(position: u32, size: u32) -> T {
    T::make_mask(position, size)
}

/// Bitwise OR of the masks of all `fields`. The order of `fields` does not matter.
#[inline]
pub fn composite_mask<T: Integer>(fields: &[Field]) -> T {
    fields.iter().fold(T::ZERO, |mask, field| mask | field.mask::<T>())
}
