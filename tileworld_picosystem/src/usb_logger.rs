//! `log` backend writing to a USB CDC serial port.
//!
//! The port is serviced from the USBCTRL interrupt. Sending a zero byte over
//! the port reboots the device into the USB mass storage bootloader, which is
//! how new builds get flashed.

use crate::time;
use core::cell::RefCell;
use core::fmt::{self, Write};
use cortex_m::interrupt::Mutex;
use log::{Level, LevelFilter, Metadata, Record};
use rp_pico::hal;
use rp_pico::hal::pac;
use rp_pico::hal::pac::interrupt;
use usb_device::{class_prelude::*, prelude::*};
use usbd_serial::SerialPort;

type Bus = hal::usb::UsbBus;

struct UsbSerial {
    device: UsbDevice<'static, Bus>,
    serial: SerialPort<'static, Bus>,
}

impl UsbSerial {
    /// Services the bus. Returns true if the host asked for a reboot.
    fn poll(&mut self) -> bool {
        if !self.device.poll(&mut [&mut self.serial]) {
            return false;
        }
        let mut buf = [0u8; 64];
        match self.serial.read(&mut buf) {
            Ok(count) => buf[..count].contains(&0),
            Err(_) => false,
        }
    }
}

impl fmt::Write for UsbSerial {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Output that doesn't fit in the endpoint buffer is dropped.
        let _ = self.serial.write(s.as_bytes());
        Ok(())
    }
}

static USB: Mutex<RefCell<Option<UsbSerial>>> = Mutex::new(RefCell::new(None));

static LOGGER: UsbSerialLogger = UsbSerialLogger;

pub fn init(regs: pac::USBCTRL_REGS, dpram: pac::USBCTRL_DPRAM, resets: &mut pac::RESETS, clock: hal::clocks::UsbClock) {
    let bus: &'static UsbBusAllocator<Bus> = match cortex_m::singleton!(
        : UsbBusAllocator<Bus> = UsbBusAllocator::new(Bus::new(regs, dpram, clock, true, resets))
    ) {
        Some(bus) => bus,
        None => return,
    };

    let serial = SerialPort::new(bus);
    let device = UsbDeviceBuilder::new(bus, UsbVidPid(0x16c0, 0x27dd))
        .manufacturer("tileworld")
        .product("Serial log")
        .serial_number("TILEWORLD")
        .device_class(usbd_serial::USB_CLASS_CDC)
        .build();

    cortex_m::interrupt::free(|cs| {
        USB.borrow(cs).replace(Some(UsbSerial { device, serial }));
    });

    unsafe {
        if log::set_logger_racy(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
        pac::NVIC::unmask(pac::Interrupt::USBCTRL_IRQ);
    }
}

#[interrupt]
fn USBCTRL_IRQ() {
    let reboot = cortex_m::interrupt::free(|cs| match USB.borrow(cs).borrow_mut().as_mut() {
        Some(usb) => usb.poll(),
        None => false,
    });
    if reboot {
        log::info!("Entering flash mode");
        hal::rom_data::reset_to_usb_boot(0, 0);
    }
}

struct UsbSerialLogger;

impl log::Log for UsbSerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        cortex_m::interrupt::free(|cs| {
            // A record logged while the port is already borrowed is dropped.
            if let Ok(mut usb) = USB.borrow(cs).try_borrow_mut() {
                if let Some(usb) = usb.as_mut() {
                    let _ = write!(
                        usb,
                        "{:.3} {} - {}\r\n",
                        time::time_us() as f32 / 1000.0,
                        record.level(),
                        record.args()
                    );
                }
            }
        });
    }

    fn flush(&self) {}
}
