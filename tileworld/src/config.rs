use crate::entity::HalfExtents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub tile_width: i32,
    pub tile_height: i32,
    pub screen_width: i32,
    pub screen_height: i32,
    /// Horizontal pixels per frame for both player and enemy.
    pub movement_speed: i32,
    pub gravity: i32,
    /// Magnitude of the upward velocity a jump starts with.
    pub jump_speed: i32,
    pub frame_rate: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        tile_width: 16,
        tile_height: 16,
        screen_width: 240,
        screen_height: 240,
        movement_speed: 2,
        gravity: 1,
        jump_speed: 8,
        frame_rate: 60,
    };

    pub const fn half_tile(&self) -> HalfExtents {
        HalfExtents {
            width: self.tile_width / 2,
            height: self.tile_height / 2,
        }
    }

    pub const fn player_spawn(&self) -> (i32, i32) {
        (self.screen_width / 2, 0)
    }

    pub const fn enemy_spawn(&self) -> (i32, i32) {
        (self.screen_width / 2 + self.tile_width * 8, 0)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
