//! Regions: a register map placed at the memory given by a device allocator.

use core::alloc::Layout;
use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use crate::allocator::Host;
use crate::allocator::{DeviceAllocator, IndexedAllocator, SingleAllocator};
use crate::reg::{RegMapPtr, RegisterMap};
use crate::trace;

/// The register map `M` of one device, placed by the allocator `A`.
///
/// Construction asks the allocator for storage with the layout of `M`. On hardware this is the
/// base address of the device; in host simulation it is zeroed heap memory. If the device
/// cannot be resolved, construction returns `None`, and no region exists to be misused.
///
/// Placing registers at a hardware address is only sound if that address really holds the
/// registers of `M`, so [`Region::new`], [`Region::at`] and [`Region::at_letter`] are `unsafe`.
/// Allocators with [`Host`](crate::allocator::Host) placement only ever hand out memory of
/// their own, and [`Region::host`], [`Region::host_at`] and [`Region::host_at_letter`] are safe.
///
/// Dropping the region hands the storage back to the allocator, which does nothing on hardware
/// and frees the memory on the host.
///
/// ```
/// # mod yoo {
/// # use devreg::RegisterMap;
/// #[repr(C)]
/// #[derive(RegisterMap)]
/// pub struct Timer {
///     ctrl: u32,
///     #[reg(RO)]
///     count: u32,
/// }
/// # } // mod yoo
/// # use yoo::Timer;
/// use devreg::allocator::{Host, SingleDevice};
/// use devreg::Region;
///
/// let timer = Region::<Timer, SingleDevice<0x4000_0000, Host>>::host().unwrap();
/// timer.regs().ctrl().write(0x1);
/// assert_eq!(timer.regs().ctrl().read(), 0x1);
/// assert_eq!(timer.regs().count().read(), 0);
/// ```
///
/// Hardware placement cannot be requested from safe code:
/// ```compile_fail,E0133
/// # mod yoo {
/// # use devreg::RegisterMap;
/// # #[repr(C)]
/// # #[derive(RegisterMap)]
/// # pub struct Timer {
/// #     ctrl: u32,
/// # }
/// # } // mod yoo
/// # use yoo::Timer;
/// use devreg::allocator::{Hardware, SingleDevice};
/// use devreg::Region;
///
/// let timer = Region::<Timer, SingleDevice<0x10, Hardware>>::new();
/// ```
pub struct Region<M: RegisterMap, A: DeviceAllocator> {
    ptr: NonNull<M>,
    _alloc: PhantomData<A>,
}

impl<M: RegisterMap, A: DeviceAllocator> Region<M, A> {
    fn place(ptr: Option<NonNull<u8>>) -> Option<Self> {
        let Some(ptr) = ptr else {
            trace::unresolved(type_name::<M>());
            return None;
        };
        trace::place(type_name::<M>(), ptr.as_ptr(), size_of::<M>());
        Some(Self {
            ptr: ptr.cast(),
            _alloc: PhantomData,
        })
    }

    /// Places the register map of the single device of `A`.
    ///
    /// # Safety
    /// If `A` places registers on hardware, the base address of the device must be a valid
    /// memory-mapped register block with the layout of `M`. Nothing else may access that block
    /// while the region is alive.
    #[inline]
    pub unsafe fn new() -> Option<Self>
    where
        A: SingleAllocator,
    {
        Self::place(A::allocate(Layout::new::<M>()))
    }

    /// Places the register map of device `index` of `A`, if the device exists.
    ///
    /// # Safety
    /// Same as [`Region::new`], for the device `index`.
    #[inline]
    pub unsafe fn at(index: usize) -> Option<Self>
    where
        A: IndexedAllocator,
    {
        Self::place(A::allocate(Layout::new::<M>(), index))
    }

    /// Places the register map of the device identified by `letter`, if the device exists.
    ///
    /// Letters are case-insensitive: `'a'` and `'A'` both name device 0.
    ///
    /// # Safety
    /// Same as [`Region::new`], for the device identified by `letter`.
    #[inline]
    pub unsafe fn at_letter(letter: char) -> Option<Self>
    where
        A: IndexedAllocator,
    {
        Self::place(A::allocate_letter(Layout::new::<M>(), letter))
    }

    /// Returns a pointer to the registers, with one accessor per register.
    #[inline]
    pub fn regs(&self) -> M::Ptr<'_> {
        // the storage stays valid and in place until `self` is dropped
        unsafe { <M::Ptr<'_> as RegMapPtr<'_>>::from_nonnull(self.ptr) }
    }

    /// Returns a raw pointer to the register map.
    #[inline]
    pub const fn as_ptr(&self) -> *mut M {
        self.ptr.as_ptr()
    }

    /// The address the register map was placed at.
    #[inline]
    pub fn base_address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }
}

#[cfg(feature = "alloc")]
impl<M: RegisterMap, A: DeviceAllocator<Placement = Host>> Region<M, A> {
    /// Places the register map of the single device of `A` in host memory.
    #[inline]
    pub fn host() -> Option<Self>
    where
        A: SingleAllocator,
    {
        // host placement returns fresh memory owned by the region
        unsafe { Self::new() }
    }

    /// Places the register map of device `index` of `A` in host memory.
    #[inline]
    pub fn host_at(index: usize) -> Option<Self>
    where
        A: IndexedAllocator,
    {
        unsafe { Self::at(index) }
    }

    /// Places the register map of the device identified by `letter` in host memory.
    #[inline]
    pub fn host_at_letter(letter: char) -> Option<Self>
    where
        A: IndexedAllocator,
    {
        unsafe { Self::at_letter(letter) }
    }
}

impl<M: RegisterMap, A: DeviceAllocator> Drop for Region<M, A> {
    fn drop(&mut self) {
        trace::release(type_name::<M>(), self.ptr.as_ptr().cast::<u8>());
        // storage came from `A` with this very layout, and is not used after this point
        unsafe { A::deallocate(self.ptr.cast(), Layout::new::<M>()) }
    }
}

impl<M: RegisterMap, A: DeviceAllocator> fmt::Debug for Region<M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("map", &type_name::<M>())
            .field("base", &self.ptr)
            .finish()
    }
}
