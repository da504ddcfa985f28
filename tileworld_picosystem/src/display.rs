use display_interface_spi::SPIInterfaceNoCS;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::spi::MODE_3;
use fugit::{HertzU32, RateExtU32};
use log::{error, info};
use rp_pico::hal;
use rp_pico::hal::gpio::dynpin::{DynFunction, DynPin, DynPinMode};
use rp_pico::hal::pac;
use rp_pico::hal::spi::Spi;
use st7789::{BacklightState, TearingEffect, ST7789};

pub const WIDTH: usize = 240;
pub const HEIGHT: usize = 240;

static mut FRAMEBUFFER: [u16; WIDTH * HEIGHT] = [0; WIDTH * HEIGHT];

type Lcd = ST7789<SPIInterfaceNoCS<Spi<hal::spi::Enabled, pac::SPI0, 8>, DynPin>, DynPin, DynPin>;

/// Pins wired to the LCD.
pub struct LcdPins {
    pub backlight: DynPin,
    pub dc: DynPin,
    pub cs: DynPin,
    pub sck: DynPin,
    pub mosi: DynPin,
    pub vsync: DynPin,
    pub reset: DynPin,
}

/// A full-screen RGB565 framebuffer in RAM, pushed to the panel once per
/// frame.
pub struct Display {
    lcd: Lcd,
    vsync_pin: DynPin,
    framebuffer: &'static mut [u16; WIDTH * HEIGHT],
}

impl Display {
    pub fn new(
        mut pins: LcdPins,
        spi_device: pac::SPI0,
        peripheral_freq: HertzU32,
        resets: &mut pac::RESETS,
        delay: &mut impl DelayUs<u32>,
    ) -> Display {
        info!("Initializing display");
        pins.backlight.into_push_pull_output();
        pins.dc.into_push_pull_output();
        pins.cs.into_push_pull_output();
        pins.cs.set_low().unwrap();
        pins.sck.try_into_mode(DynPinMode::Function(DynFunction::Spi)).unwrap();
        pins.mosi.try_into_mode(DynPinMode::Function(DynFunction::Spi)).unwrap();
        pins.vsync.into_floating_input();
        pins.reset.into_push_pull_output();

        let spi = Spi::<_, _, 8>::new(spi_device).init(resets, peripheral_freq, 62_500_000u32.Hz(), &MODE_3);
        let di = SPIInterfaceNoCS::new(spi, pins.dc);
        let mut lcd = ST7789::new(di, Some(pins.reset), Some(pins.backlight), WIDTH as u16, HEIGHT as u16);
        lcd.init(delay).unwrap();
        lcd.set_tearing_effect(TearingEffect::Vertical).unwrap();

        // Only one Display exists: it is built from the SPI0 peripheral, which
        // can be taken once.
        let framebuffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
        let mut display = Display {
            lcd,
            vsync_pin: pins.vsync,
            framebuffer,
        };
        // Push the blank buffer before the backlight comes on so the panel's
        // power-on garbage is never visible.
        display.flush();
        display.lcd.set_backlight(BacklightState::On, delay).unwrap();
        display
    }

    /// Runs `func` against the framebuffer, then sends the frame.
    pub fn draw(&mut self, func: impl FnOnce(&mut Self)) {
        func(self);
        self.flush();
    }

    pub fn flush(&mut self) {
        self.wait_for_vsync();
        let pixels = self.framebuffer.iter().copied();
        if let Err(e) = self.lcd.set_pixels(0, 0, (WIDTH - 1) as u16, (HEIGHT - 1) as u16, pixels) {
            error!("Display flush failed: {:?}", e);
        }
    }

    /// Blocks until the start of the panel's next refresh.
    fn wait_for_vsync(&mut self) {
        while self.vsync_pin.is_high().unwrap_or(false) {}
        while self.vsync_pin.is_low().unwrap_or(false) {}
    }
}

impl DrawTarget for Display {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                self.framebuffer[point.y as usize * WIDTH + point.x as usize] = RawU16::from(color).into_inner();
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let raw = RawU16::from(color).into_inner();
        let left = area.top_left.x as usize;
        let width = area.size.width as usize;
        for y in area.rows() {
            let start = y as usize * WIDTH + left;
            self.framebuffer[start..start + width].fill(raw);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.fill(RawU16::from(color).into_inner());
        Ok(())
    }
}

impl OriginDimensions for Display {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
