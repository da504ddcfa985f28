use embedded_graphics::prelude::Point;

/// Half the size of an entity's square collision box, centred on its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfExtents {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub x_velocity: i32,
    pub y_velocity: i32,
}

impl Entity {
    pub const fn new(x: i32, y: i32) -> Self {
        Entity {
            x,
            y,
            x_velocity: 0,
            y_velocity: 0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_ascending(&self) -> bool {
        self.y_velocity < 0
    }

    pub fn is_falling(&self) -> bool {
        self.y_velocity > 0
    }
}
