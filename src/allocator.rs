//! Device allocators: resolve a device to the memory that holds its registers.
//!
//! On the target, "allocating" a register map means turning the base address of the device
//! into a pointer; nothing is allocated and nothing is freed. Off target, the same register
//! map can be placed in zeroed heap memory instead, so drivers run unchanged in host tests.
//! The choice is made at compile time by the [`Placement`] parameter of each allocator:
//! - [`Hardware`] uses the configured base address;
//! - [`Host`] allocates from the global allocator (feature `alloc`).
//!
//! [`DefaultPlacement`] is [`Host`] when the feature `simulation` is enabled, and [`Hardware`]
//! otherwise.
//!
//! Three allocator shapes are provided:
//! - [`SingleDevice`]: one device at a fixed base address;
//! - [`TableDevice`]: one device of a [`DeviceTable`], chosen at compile time by index;
//! - [`DeviceList`]: any device of a [`DeviceTable`], chosen at run time by number or letter.
//!
//! ```
//! use core::alloc::Layout;
//! use devreg::allocator::{DeviceList, Hardware, IndexedAllocator, SingleAllocator, SingleDevice};
//! use devreg::device_table;
//!
//! device_table! {
//!     pub struct Ports: lettered { 'A' => 0x4000_0000, 'B' => 0x4000_1000 }
//! }
//!
//! type Rcc = SingleDevice<0x4001_4000, Hardware>;
//! type Gpio = DeviceList<Ports, Hardware>;
//!
//! let layout = Layout::new::<[u32; 4]>();
//! assert_eq!(Rcc::allocate(layout).map(|p| p.as_ptr() as usize), Some(0x4001_4000));
//! assert_eq!(Gpio::allocate_letter(layout, 'b').map(|p| p.as_ptr() as usize), Some(0x4000_1000));
//! assert_eq!(Gpio::allocate_letter(layout, 'C'), None);
//! ```

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::arch::Address;
use crate::device::{alpha_index, find_base_address, indices_unique, DeviceTable};

/// Where register maps are placed: at the device address, or in host memory.
///
/// ⚠️ This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Placement: 'static + private::Sealed {
    /// `true` if registers are placed in host memory.
    const HOST: bool;

    /// Returns storage for an object with `layout` for the device at `base`.
    fn place(base: Address, layout: Layout) -> Option<NonNull<u8>>;

    /// Releases storage returned by [`Placement::place`].
    ///
    /// # Safety
    /// `ptr` must have been returned by `Self::place` with the same `layout`, and must not be
    /// used afterwards.
    unsafe fn release(ptr: NonNull<u8>, layout: Layout);
}

/// Registers live at their hardware base address.
///
/// A null base address, one not aligned for the register map, or one that does not fit in a
/// pointer, resolves to nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hardware {}

impl Placement for Hardware {
    const HOST: bool = false;

    #[inline]
    fn place(base: Address, layout: Layout) -> Option<NonNull<u8>> {
        let addr = usize::try_from(base).ok()?;
        if addr % layout.align() != 0 {
            return None;
        }
        NonNull::new(addr as *mut u8)
    }

    #[inline]
    unsafe fn release(_ptr: NonNull<u8>, _layout: Layout) {}
}

/// Registers live in zeroed heap memory, for running drivers off target.
///
/// The base address only decides whether a device exists; its value is not used.
#[cfg(feature = "alloc")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Host {}

#[cfg(feature = "alloc")]
impl Placement for Host {
    const HOST: bool = true;

    #[inline]
    fn place(_base: Address, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            // zero-sized maps need no storage, only a well-aligned address
            return NonNull::new(layout.align() as *mut u8);
        }
        // SAFETY: the layout has a non-zero size
        NonNull::new(unsafe { alloc::alloc::alloc_zeroed(layout) })
    }

    #[inline]
    unsafe fn release(ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            // SAFETY: the caller promises `ptr` came from `place` with this layout
            unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
        }
    }
}

/// The placement used when an allocator does not name one.
#[cfg(feature = "simulation")]
pub type DefaultPlacement = Host;
/// The placement used when an allocator does not name one.
#[cfg(not(feature = "simulation"))]
pub type DefaultPlacement = Hardware;

/// Allocators release the storage of register maps.
///
/// # Safety
/// If `Placement` is [`Host`], storage returned by [`SingleAllocator::allocate`] or
/// [`IndexedAllocator::allocate`] must be fresh memory, valid for the requested layout, that
/// nothing else accesses until it is passed to [`DeviceAllocator::deallocate`]. Hardware
/// addresses are vouched for by the caller of [`Region::new`](crate::Region::new).
pub unsafe trait DeviceAllocator {
    /// Where this allocator places register maps.
    type Placement: Placement;

    /// Releases storage obtained from this allocator. A no-op for [`Hardware`] placement.
    ///
    /// # Safety
    /// `ptr` must have been returned by this allocator for the same `layout`, and must not be
    /// used afterwards.
    unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout);
}

/// Allocators for a single device.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not allocate a single device",
    note = "allocators for lists of devices are used with `Region::at` or `Region::host_at`"
)]
pub trait SingleAllocator: DeviceAllocator {
    /// Returns storage for the registers of the device, or `None` if there is no device.
    fn allocate(layout: Layout) -> Option<NonNull<u8>>;
}

/// Allocators for one device out of a list, chosen by index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not allocate from a list of devices",
    note = "single-device allocators are used with `Region::new` or `Region::host`"
)]
pub trait IndexedAllocator: DeviceAllocator {
    /// Returns storage for the registers of device `index`, or `None` if there is no such
    /// device.
    fn allocate(layout: Layout, index: usize) -> Option<NonNull<u8>>;

    /// Same as [`IndexedAllocator::allocate`], for a device identified by a letter.
    ///
    /// Letters are case-insensitive; characters that are not letters match no device.
    #[inline]
    fn allocate_letter(layout: Layout, letter: char) -> Option<NonNull<u8>> {
        alpha_index(letter).and_then(|index| Self::allocate(layout, index))
    }
}

/// Allocator for the single device at `BASE`.
pub struct SingleDevice<const BASE: Address, P: Placement = DefaultPlacement> {
    _placement: PhantomData<P>,
}

unsafe impl<const BASE: Address, P: Placement> DeviceAllocator for SingleDevice<BASE, P> {
    type Placement = P;

    #[inline]
    unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
        unsafe { P::release(ptr, layout) }
    }
}

impl<const BASE: Address, P: Placement> SingleAllocator for SingleDevice<BASE, P> {
    #[inline]
    fn allocate(layout: Layout) -> Option<NonNull<u8>> {
        P::place(BASE, layout)
    }
}

/// Allocator for device `INDEX` of the table `D`, resolved at compile time.
pub struct TableDevice<D: DeviceTable, const INDEX: usize, P: Placement = DefaultPlacement> {
    _table: PhantomData<D>,
    _placement: PhantomData<P>,
}

impl<D: DeviceTable, const INDEX: usize, P: Placement> TableDevice<D, INDEX, P> {
    /// Base address of the device, `None` if `INDEX` is not in the table.
    pub const BASE: Option<Address> = {
        assert!(indices_unique(D::DEVICES), "duplicate device index in device table");
        find_base_address(D::DEVICES, INDEX)
    };
}

unsafe impl<D: DeviceTable, const INDEX: usize, P: Placement> DeviceAllocator
    for TableDevice<D, INDEX, P>
{
    type Placement = P;

    #[inline]
    unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
        unsafe { P::release(ptr, layout) }
    }
}

impl<D: DeviceTable, const INDEX: usize, P: Placement> SingleAllocator
    for TableDevice<D, INDEX, P>
{
    #[inline]
    fn allocate(layout: Layout) -> Option<NonNull<u8>> {
        Self::BASE.and_then(|base| P::place(base, layout))
    }
}

/// Allocator for any device of the table `D`.
pub struct DeviceList<D: DeviceTable, P: Placement = DefaultPlacement> {
    _table: PhantomData<D>,
    _placement: PhantomData<P>,
}

impl<D: DeviceTable, P: Placement> DeviceList<D, P> {
    const VALID: () = assert!(indices_unique(D::DEVICES), "duplicate device index in device table");
}

unsafe impl<D: DeviceTable, P: Placement> DeviceAllocator for DeviceList<D, P> {
    type Placement = P;

    #[inline]
    unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
        unsafe { P::release(ptr, layout) }
    }
}

impl<D: DeviceTable, P: Placement> IndexedAllocator for DeviceList<D, P> {
    #[inline]
    fn allocate(layout: Layout, index: usize) -> Option<NonNull<u8>> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        find_base_address(D::DEVICES, index).and_then(|base| P::place(base, layout))
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Hardware {}
    #[cfg(feature = "alloc")]
    impl Sealed for super::Host {}
}
