use crate::display::{Display, LcdPins};
use crate::input::Input;
use crate::usb_logger;
use cortex_m::delay::Delay;
use log::info;
use rp_pico::hal;
use rp_pico::hal::clocks::Clock;
use rp_pico::hal::gpio::Pins;
use rp_pico::hal::pac;

pub struct Hardware {
    pub display: Display,
    pub input: Input,
    // Held so the microsecond timer stays out of reset.
    _timer: hal::Timer,
}

impl Hardware {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let mut pac = pac::Peripherals::take().unwrap();
        let core = pac::CorePeripherals::take().unwrap();
        let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

        let clocks = hal::clocks::init_clocks_and_plls(
            rp_pico::XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS);
        let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

        usb_logger::init(pac.USBCTRL_REGS, pac.USBCTRL_DPRAM, &mut pac.RESETS, clocks.usb_clock);
        info!("Logging initialized");
        info!("System clock: {}", clocks.system_clock.freq());

        let sio = hal::Sio::new(pac.SIO);
        let pins = Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);

        let display = Display::new(
            LcdPins {
                backlight: pins.gpio12.into(),
                dc: pins.gpio9.into(),
                cs: pins.gpio5.into(),
                sck: pins.gpio6.into(),
                mosi: pins.gpio7.into(),
                vsync: pins.gpio8.into(),
                reset: pins.gpio4.into(),
            },
            pac.SPI0,
            clocks.peripheral_clock.freq(),
            &mut pac.RESETS,
            &mut delay,
        );

        let input = Input::new(
            /*left=*/ pins.gpio22.into(),
            /*right=*/ pins.gpio21.into(),
            /*a=*/ pins.gpio18.into(),
            /*b=*/ pins.gpio19.into(),
        );

        Hardware {
            display,
            input,
            _timer: timer,
        }
    }
}
