use crate::camera::Camera;
use crate::config::Config;
use crate::entity::Entity;
use crate::images;
use crate::map::TileMap;
use core::fmt::Write;
use embedded_graphics::image::Image;
use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

/// Draws every map tile that is at least partly on screen.
pub fn draw_map<D>(target: &mut D, map: &TileMap, camera: &Camera, config: &Config) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let columns = config.screen_width / config.tile_width + 1;
    let rows = config.screen_height / config.tile_height + 1;
    let first_tile = Point::new(camera.x / config.tile_width, camera.y / config.tile_height);
    let subtile = Point::new(camera.x % config.tile_width, camera.y % config.tile_height);

    for row in 0..rows {
        for column in 0..columns {
            let tile_x = first_tile.x + column;
            let tile_y = first_tile.y + row;
            if !map.contains(tile_x, tile_y) {
                continue;
            }
            let screen = Point::new(column * config.tile_width, row * config.tile_height) - subtile;
            let sprite = images::tile_sprite(map.tile_at(tile_x, tile_y));
            Image::new(&sprite, screen).draw(target)?;
        }
    }
    Ok(())
}

/// Screen position of the top-left corner of an entity's image.
///
/// Images larger than a tile grow up and to the left, so their bottom-right
/// corner stays on the collision box.
fn image_origin(entity: &Entity, size: Size, camera: &Camera, config: &Config) -> Point {
    let half = config.half_tile();
    let offset = Point::new(
        half.width + (size.width as i32 - config.tile_width),
        half.height + (size.height as i32 - config.tile_height),
    );
    camera.to_screen(entity.position() - offset)
}

pub fn draw_player<D>(target: &mut D, player: &Entity, camera: &Camera, config: &Config) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let size = images::PLAYER_SIZE;
    let origin = image_origin(player, size, camera, config);
    Rectangle::new(origin, size)
        .into_styled(PrimitiveStyle::with_fill(images::PLAYER_FILL))
        .draw(target)?;
    Image::new(&images::player_sprite(), origin).draw(target)
}

pub fn draw_enemy<D>(target: &mut D, enemy: &Entity, camera: &Camera, config: &Config) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let size = Size::new(config.tile_width as u32, config.tile_height as u32);
    let origin = image_origin(enemy, size, camera, config);
    Rectangle::new(origin, size)
        .into_styled(PrimitiveStyle::with_fill(images::ENEMY_FILL))
        .draw(target)
}

pub fn status_text(camera: &Camera, player: &Entity) -> heapless::String<64> {
    let mut text = heapless::String::new();
    // Four i32s and separators always fit.
    let _ = write!(text, "{}, {}\n{}, {}", camera.x, camera.y, player.x, player.y);
    text
}

/// Prints the camera and player positions in the top-left corner.
pub fn draw_status<D>(target: &mut D, camera: &Camera, player: &Entity) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let text = status_text(camera, player);
    let style = MonoTextStyle::new(&FONT_6X10, images::TEXT_COLOR);
    Text::with_baseline(&text, Point::zero(), style, Baseline::Top).draw(target)?;
    Ok(())
}
