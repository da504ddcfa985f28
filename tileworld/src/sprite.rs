use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitMode {
    /// Every pixel is written: set bits in the sprite colour, clear bits in
    /// `background`.
    Overwrite { background: Rgb565 },
    /// Only set bits are written, in the sprite colour. Clear bits leave the
    /// target untouched.
    Erase,
}

/// A 1 bit per pixel image. Rows are padded to a whole number of bytes and
/// the most significant bit of each byte is the leftmost pixel.
#[derive(Debug, Clone, Copy)]
pub struct Sprite<'a> {
    pub size: Size,
    pub data: &'a [u8],
    pub color: Rgb565,
    pub mode: BlitMode,
}

impl<'a> Sprite<'a> {
    pub const fn new(size: Size, data: &'a [u8], color: Rgb565, mode: BlitMode) -> Self {
        Sprite {
            size,
            data,
            color,
            mode,
        }
    }

    pub fn is_set(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 || p.x >= self.size.width as i32 || p.y >= self.size.height as i32 {
            return false;
        }
        let stride = (self.size.width as usize + 7) / 8;
        let index = p.y as usize * stride + p.x as usize / 8;
        match self.data.get(index) {
            Some(byte) => byte & (0x80 >> (p.x % 8)) != 0,
            None => false,
        }
    }

    fn pixels(&self, area: Rectangle) -> impl Iterator<Item = Pixel<Rgb565>> + '_ {
        let origin = area.top_left;
        area.points().filter_map(move |p| {
            let set = self.is_set(p);
            let color = match self.mode {
                BlitMode::Overwrite { background } => Some(if set { self.color } else { background }),
                BlitMode::Erase if set => Some(self.color),
                BlitMode::Erase => None,
            };
            color.map(|c| Pixel(p - origin, c))
        })
    }
}

impl ImageDrawable for Sprite<'_> {
    type Color = Rgb565;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.pixels(self.bounding_box()))
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&self.bounding_box());
        target.draw_iter(self.pixels(area))
    }
}

impl OriginDimensions for Sprite<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::image::Image;
    use embedded_graphics::mock_display::MockDisplay;

    // 3x2, bytes padded on the right.
    const DATA: [u8; 2] = [0b1010_0000, 0b0110_0000];

    fn display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_is_set() {
        let sprite = Sprite::new(Size::new(3, 2), &DATA, Rgb565::WHITE, BlitMode::Erase);
        assert!(sprite.is_set(Point::new(0, 0)));
        assert!(!sprite.is_set(Point::new(1, 0)));
        assert!(sprite.is_set(Point::new(2, 0)));
        assert!(!sprite.is_set(Point::new(0, 1)));
        assert!(sprite.is_set(Point::new(1, 1)));
        assert!(!sprite.is_set(Point::new(3, 0)));
        assert!(!sprite.is_set(Point::new(-1, 0)));
    }

    #[test]
    fn test_overwrite_writes_every_pixel() {
        let sprite = Sprite::new(
            Size::new(3, 2),
            &DATA,
            Rgb565::WHITE,
            BlitMode::Overwrite {
                background: Rgb565::BLUE,
            },
        );
        let mut display = display();
        Image::new(&sprite, Point::new(1, 1)).draw(&mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb565::WHITE));
        assert_eq!(display.get_pixel(Point::new(2, 1)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(Rgb565::WHITE));
        assert_eq!(display.get_pixel(Point::new(3, 2)), Some(Rgb565::WHITE));
        assert_eq!(display.get_pixel(Point::new(1, 2)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(4, 1)), None);
    }

    #[test]
    fn test_erase_skips_clear_bits() {
        let sprite = Sprite::new(Size::new(3, 2), &DATA, Rgb565::BLACK, BlitMode::Erase);
        let mut display = display();
        display.set_pixel(Point::new(1, 0), Some(Rgb565::RED));
        display.set_pixel(Point::new(0, 0), Some(Rgb565::RED));
        Image::new(&sprite, Point::zero()).draw(&mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::BLACK));
        assert_eq!(display.get_pixel(Point::new(1, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(0, 1)), None);
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_sub_image() {
        let sprite = Sprite::new(Size::new(3, 2), &DATA, Rgb565::GREEN, BlitMode::Erase);
        let sub = sprite.sub_image(&Rectangle::new(Point::new(1, 0), Size::new(2, 2)));
        let mut display = display();
        Image::new(&sub, Point::zero()).draw(&mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(1, 0)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(0, 1)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb565::GREEN));
    }
}
