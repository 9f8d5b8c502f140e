//! Trace points for register accesses and region placement.
//!
//! With feature `debug-trace`, register accesses are printed to standard error. With feature
//! `log`, the same events are emitted at `trace` level through the [`log`] facade. Without
//! either feature every function in here is empty.

#![allow(unused_variables)]

use crate::integers::Integer;

#[inline(always)]
pub(crate) fn read<T: Integer>(addr: *const T, value: T) {
    #[cfg(feature = "debug-trace")]
    std::eprintln!("DEVREG READ  {addr:p} {value:?}");
    #[cfg(feature = "log")]
    log::trace!("read {value:#x} from register at {addr:p}", value = value.widen());
}

#[inline(always)]
pub(crate) fn write<T: Integer>(addr: *const T, value: T) {
    #[cfg(feature = "debug-trace")]
    std::eprintln!("DEVREG WRITE {addr:p} {value:?}");
    #[cfg(feature = "log")]
    log::trace!("write {value:#x} to register at {addr:p}", value = value.widen());
}

#[inline(always)]
pub(crate) fn place(map: &'static str, addr: *const u8, size: usize) {
    #[cfg(feature = "log")]
    log::trace!("placed {map} ({size} bytes) at {addr:p}");
}

#[inline(always)]
pub(crate) fn unresolved(map: &'static str) {
    #[cfg(feature = "log")]
    log::trace!("no device address resolved for {map}");
}

#[inline(always)]
pub(crate) fn release(map: &'static str, addr: *const u8) {
    #[cfg(feature = "log")]
    log::trace!("released {map} at {addr:p}");
}
