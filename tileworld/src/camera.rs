use crate::config::Config;
use crate::entity::Entity;
use embedded_graphics::prelude::Point;

/// Top-left corner of the screen in world pixels.
///
/// Only the top-left edge is clamped; the camera will happily scroll past the
/// right and bottom edges of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
}

impl Camera {
    pub fn follow(&mut self, target: &Entity, config: &Config) {
        self.x = (target.x - config.screen_width / 2).max(0);
        self.y = (target.y - config.screen_height / 2).max(0);
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn to_screen(&self, world: Point) -> Point {
        world - self.position()
    }
}
