//! Hand-drawn 16x16 bitmaps for the tiles and the player.

use crate::sprite::{BlitMode, Sprite};
use crate::tile::{TileType, NUM_TILE_TYPES};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const PLAYER_FILL: Rgb565 = Rgb565::WHITE;
pub const ENEMY_FILL: Rgb565 = Rgb565::CSS_CRIMSON;
pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;

pub const TILE_IMAGE_SIZE: Size = Size::new(16, 16);
pub const PLAYER_SIZE: Size = Size::new(16, 16);

const BLANK: [u8; 32] = [0; 32];

#[rustfmt::skip]
const GRASS: [u8; 32] = [
    0b1010_0101, 0b0100_1010,
    0b1111_1111, 0b1111_1111,
    0b1111_1111, 0b1111_1111,
    0b0110_1111, 0b0111_0110,
    0b0000_0000, 0b0000_0000,
    0b0010_0000, 0b0010_0000,
    0b0000_0010, 0b0000_0010,
    0b0001_0000, 0b0000_1000,
    0b1000_0000, 0b1000_0000,
    0b0000_0100, 0b0000_0100,
    0b0010_0000, 0b0000_1000,
    0b0000_0000, 0b1000_0000,
    0b0100_0100, 0b0000_0010,
    0b0000_0000, 0b0001_0000,
    0b0000_1001, 0b0000_0000,
    0b1000_0000, 0b0000_0010,
];

#[rustfmt::skip]
const DIRT: [u8; 32] = [
    0b0000_0000, 0b0000_0000,
    0b0100_0001, 0b0000_1000,
    0b0000_1000, 0b0001_0000,
    0b0010_0001, 0b0100_0010,
    0b1000_0100, 0b0000_0001,
    0b0001_0000, 0b0100_1000,
    0b0100_0001, 0b0000_0000,
    0b0000_0010, 0b0010_0100,
    0b0010_1000, 0b0000_1000,
    0b1000_0000, 0b0100_0001,
    0b0000_1001, 0b0000_1000,
    0b0100_0000, 0b0000_1000,
    0b0000_1001, 0b0010_0000,
    0b0010_0000, 0b0000_0100,
    0b1000_0001, 0b0010_0001,
    0b0001_0010, 0b0000_1000,
];

#[rustfmt::skip]
const VOID: [u8; 32] = [
    0b1100_1100, 0b1100_1100,
    0b1100_1100, 0b1100_1100,
    0b0011_0011, 0b0011_0011,
    0b0011_0011, 0b0011_0011,
    0b1100_1100, 0b1100_1100,
    0b1100_1100, 0b1100_1100,
    0b0011_0011, 0b0011_0011,
    0b0011_0011, 0b0011_0011,
    0b1100_1100, 0b1100_1100,
    0b1100_1100, 0b1100_1100,
    0b0011_0011, 0b0011_0011,
    0b0011_0011, 0b0011_0011,
    0b1100_1100, 0b1100_1100,
    0b1100_1100, 0b1100_1100,
    0b0011_0011, 0b0011_0011,
    0b0011_0011, 0b0011_0011,
];

#[rustfmt::skip]
const PLAYER: [u8; 32] = [
    0b0011_0000, 0b0000_1100,
    0b0111_1000, 0b0001_1110,
    0b0111_1000, 0b0001_1110,
    0b0011_0000, 0b0000_1100,
    0b0000_0000, 0b0000_0000,
    0b0011_1000, 0b0001_1100,
    0b0111_1000, 0b0001_1110,
    0b0111_0100, 0b0010_1110,
    0b0111_1000, 0b0001_1110,
    0b0011_1000, 0b0001_1100,
    0b0000_0000, 0b0000_0000,
    0b0000_0011, 0b1100_0000,
    0b0000_0001, 0b1000_0000,
    0b0000_0000, 0b0000_0000,
    0b0000_1000, 0b0001_0000,
    0b0000_0111, 0b1110_0000,
];

const TILE_IMAGES: [(&[u8], Rgb565); NUM_TILE_TYPES] = [
    (&BLANK, BACKGROUND),
    (&GRASS, Rgb565::CSS_LAWN_GREEN),
    (&DIRT, Rgb565::CSS_SADDLE_BROWN),
    (&VOID, Rgb565::CSS_DIM_GRAY),
];

pub fn tile_sprite(tile: TileType) -> Sprite<'static> {
    let (data, color) = TILE_IMAGES[tile.index()];
    Sprite::new(
        TILE_IMAGE_SIZE,
        data,
        color,
        BlitMode::Overwrite {
            background: BACKGROUND,
        },
    )
}

/// The player's features, knocked out of its filled box.
pub fn player_sprite() -> Sprite<'static> {
    Sprite::new(PLAYER_SIZE, &PLAYER, BACKGROUND, BlitMode::Erase)
}
