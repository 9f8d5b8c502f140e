use core::alloc::Layout;

use devreg::allocator::{
    DefaultPlacement, DeviceAllocator, DeviceList, Hardware, Host, IndexedAllocator, Placement,
    SingleAllocator, SingleDevice, TableDevice,
};
use devreg::device::{alpha_index, find_base_address, DeviceInfo, DeviceTable};
use devreg::{device_table, Address, RegisterMap, Region};

#[repr(C)]
#[derive(RegisterMap)]
pub struct Uart {
    #[reg(reset = 0x0000_0300)]
    ctrl: u32,
    #[reg(RO)]
    stat: u32,
    #[reg(WO, mask = 0xFF)]
    txd: u32,
    #[reg(RO)]
    rxd: u32,
}

device_table! {
    /// Numbered UARTs.
    pub struct Uarts: numbered {
        1 => 0x5000_0000,
        2 => 0x5000_1000,
        5 => 0x5000_4000,
    }
}

device_table! {
    pub struct Ports: lettered {
        'A' => 0x4800_0000,
        'b' => 0x4800_0400,
        'H' => 0x4800_1C00,
    }
}

const LAYOUT: Layout = Layout::new::<Uart>();

fn addr(ptr: Option<core::ptr::NonNull<u8>>) -> Option<usize> {
    ptr.map(|p| p.as_ptr() as usize)
}

#[test]
fn device_info() {
    assert_eq!(DeviceInfo::single(0x1000), DeviceInfo::numbered(0, 0x1000));
    assert_eq!(DeviceInfo::lettered('c', 0x2000).index, 2);
    assert_eq!(DeviceInfo::lettered('C', 0x2000).index, 2);

    assert_eq!(alpha_index('a'), Some(0));
    assert_eq!(alpha_index('Z'), Some(25));
    assert_eq!(alpha_index('z'), Some(25));
    assert_eq!(alpha_index('0'), None);
    assert_eq!(alpha_index('é'), None);
}

#[test]
fn table_lookup() {
    const UART5: Option<Address> = find_base_address(Uarts::DEVICES, 5);
    assert_eq!(UART5, Some(0x5000_4000));
    assert_eq!(find_base_address(Uarts::DEVICES, 1), Some(0x5000_0000));
    assert_eq!(find_base_address(Uarts::DEVICES, 0), None);
    assert_eq!(find_base_address(Uarts::DEVICES, 6), None);
    assert_eq!(find_base_address(&[], 0), None);

    assert_eq!(find_base_address(Ports::DEVICES, 1), Some(0x4800_0400));
    assert_eq!(find_base_address(Ports::DEVICES, 7), Some(0x4800_1C00));
}

#[test]
fn hardware_single() {
    type Rcc = SingleDevice<0x4002_1000, Hardware>;
    for _ in 0..3 {
        assert_eq!(addr(Rcc::allocate(LAYOUT)), Some(0x4002_1000));
    }

    // null and misaligned addresses do not resolve
    assert_eq!(SingleDevice::<0, Hardware>::allocate(LAYOUT), None);
    assert_eq!(SingleDevice::<0x4002_1002, Hardware>::allocate(LAYOUT), None);
    assert!(!Hardware::HOST);
}

#[test]
fn hardware_table() {
    assert_eq!(TableDevice::<Uarts, 2, Hardware>::BASE, Some(0x5000_1000));
    assert_eq!(
        addr(TableDevice::<Uarts, 2, Hardware>::allocate(LAYOUT)),
        Some(0x5000_1000)
    );
    assert_eq!(TableDevice::<Uarts, 6, Hardware>::BASE, None);
    assert_eq!(TableDevice::<Uarts, 6, Hardware>::allocate(LAYOUT), None);
}

#[test]
fn hardware_list() {
    type List = DeviceList<Uarts, Hardware>;
    for device in Uarts::DEVICES {
        assert_eq!(
            addr(List::allocate(LAYOUT, device.index)),
            Some(device.base_address as usize)
        );
    }
    assert_eq!(List::allocate(LAYOUT, 3), None);
    assert_eq!(List::allocate(LAYOUT, usize::MAX), None);

    type Gpio = DeviceList<Ports, Hardware>;
    assert_eq!(addr(Gpio::allocate_letter(LAYOUT, 'a')), Some(0x4800_0000));
    assert_eq!(addr(Gpio::allocate_letter(LAYOUT, 'B')), Some(0x4800_0400));
    assert_eq!(addr(Gpio::allocate_letter(LAYOUT, 'h')), Some(0x4800_1C00));
    assert_eq!(Gpio::allocate_letter(LAYOUT, 'C'), None);
    assert_eq!(Gpio::allocate_letter(LAYOUT, '#'), None);
}

#[test]
fn host_single() {
    type Rcc = SingleDevice<0x4002_1000, Host>;
    assert!(Host::HOST);

    let ptr = Rcc::allocate(LAYOUT).expect("host allocation");
    assert_ne!(ptr.as_ptr() as usize, 0x4002_1000);
    assert_eq!(ptr.as_ptr() as usize % LAYOUT.align(), 0);
    unsafe { Rcc::deallocate(ptr, LAYOUT) };
}

#[test]
fn host_list() {
    type List = DeviceList<Uarts, Host>;

    let ptr = List::allocate(LAYOUT, 5).expect("host allocation");
    assert_ne!(ptr.as_ptr() as usize, 0x5000_4000);
    unsafe { List::deallocate(ptr, LAYOUT) };

    // unknown devices do not resolve in host mode either
    assert_eq!(List::allocate(LAYOUT, 6), None);
    assert_eq!(TableDevice::<Uarts, 6, Host>::allocate(LAYOUT), None);
}

#[test]
fn default_placement() {
    assert_eq!(DefaultPlacement::HOST, cfg!(feature = "simulation"));
}

#[test]
fn host_zero_sized() {
    let layout = Layout::new::<()>();
    let ptr = Host::place(0x1000, layout).expect("zero-sized placement");
    unsafe { Host::release(ptr, layout) };
}

#[test]
fn region_hardware() {
    type Uart1 = Region<Uart, TableDevice<Uarts, 1, Hardware>>;
    // the region is never accessed
    let uart = unsafe { Uart1::new() }.expect("UART1 is in the table");
    assert_eq!(uart.base_address(), 0x5000_0000);
    assert_eq!(uart.as_ptr() as usize, 0x5000_0000);
    // dropping a hardware region releases nothing
    drop(uart);

    type UartList = Region<Uart, DeviceList<Uarts, Hardware>>;
    let uart2 = unsafe { UartList::at(2) };
    assert_eq!(uart2.map(|r| r.base_address()), Some(0x5000_1000));
    assert!(unsafe { UartList::at(6) }.is_none());

    assert!(unsafe { Region::<Uart, TableDevice<Uarts, 6, Hardware>>::new() }.is_none());

    type Gpio = Region<Uart, DeviceList<Ports, Hardware>>;
    let port_h = unsafe { Gpio::at_letter('h') };
    assert_eq!(port_h.map(|r| r.base_address()), Some(0x4800_1C00));
}

#[test]
fn region_host() {
    type Uart5 = Region<Uart, DeviceList<Uarts, Host>>;
    let uart = Uart5::host_at(5).expect("UART5 is in the table");
    assert_ne!(uart.base_address(), 0x5000_4000);

    let regs = uart.regs();
    // host memory starts zeroed
    assert_eq!(regs.ctrl().read(), 0);
    assert_eq!(regs.stat().read(), 0);

    regs.ctrl().reset();
    regs.ctrl().set_field(0, 1, 1);
    regs.txd().write(0xABCD);
    assert_eq!(regs.ctrl().read(), 0x301);
    assert_eq!(regs.rxd().read(), 0);
    assert_eq!(unsafe { (*uart.as_ptr()).txd }, 0xCD);

    assert!(Uart5::host_at(6).is_none());
}

#[test]
fn regions_are_independent() {
    type Port = Region<Uart, DeviceList<Ports, Host>>;
    let a = Port::host_at_letter('a').expect("port A");
    let b = Port::host_at_letter('B').expect("port B");
    assert_ne!(a.base_address(), b.base_address());

    a.regs().ctrl().write(1);
    b.regs().ctrl().write(2);
    assert_eq!(a.regs().ctrl().read(), 1);
    assert_eq!(b.regs().ctrl().read(), 2);

    assert!(Port::host_at_letter('c').is_none());
    assert!(Port::host_at_letter('!').is_none());
}

#[test]
fn host_regions_match_unsafe_constructors() {
    type Rcc = Region<Uart, SingleDevice<0x4002_1000, Host>>;
    let rcc = Rcc::host().expect("host allocation");
    assert_ne!(rcc.base_address(), 0x4002_1000);
    rcc.regs().ctrl().reset();
    assert_eq!(rcc.regs().ctrl().read(), 0x300);

    // the unsafe constructors place host regions the same way
    let uart = unsafe { Region::<Uart, DeviceList<Uarts, Host>>::at(1) }.expect("UART1");
    assert_eq!(uart.regs().ctrl().read(), 0);
    assert!(Region::<Uart, TableDevice<Uarts, 6, Host>>::host().is_none());
}

#[test]
#[cfg(all(feature = "arch-64bit", target_pointer_width = "32"))]
fn hardware_address_beyond_pointer_width() {
    assert_eq!(SingleDevice::<0x1_0000_1000, Hardware>::allocate(LAYOUT), None);
}
