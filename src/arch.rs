//! Architecture word and address types.
//!
//! The width of [`ArchWord`] follows the target architecture and is selected with at most one
//! of the features `arch-8bit`, `arch-16bit` or `arch-64bit`. Without any of them it is 32 bits.

#[cfg(any(
    all(feature = "arch-8bit", feature = "arch-16bit"),
    all(feature = "arch-8bit", feature = "arch-64bit"),
    all(feature = "arch-16bit", feature = "arch-64bit"),
))]
compile_error!("Enable only one of: arch-8bit, arch-16bit, arch-64bit");

/// The native register width of the target.
#[cfg(feature = "arch-8bit")]
pub type ArchWord = u8;
/// The native register width of the target.
#[cfg(feature = "arch-16bit")]
pub type ArchWord = u16;
/// The native register width of the target.
#[cfg(feature = "arch-64bit")]
pub type ArchWord = u64;
/// The native register width of the target.
#[cfg(not(any(feature = "arch-8bit", feature = "arch-16bit", feature = "arch-64bit")))]
pub type ArchWord = u32;

/// A hardware base address.
pub type Address = ArchWord;
