use core::panic::PanicInfo;

/// Logs the panic, then idles with interrupts on so the USB port keeps
/// draining the message and still accepts the reboot byte.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log::error!("{}", info);
    unsafe {
        cortex_m::interrupt::enable();
    }
    loop {
        cortex_m::asm::wfi();
    }
}
