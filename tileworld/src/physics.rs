//! Per-frame movement for the player and the enemy.
//!
//! Velocities are whole pixels per frame. Gravity is not integrated: an entity
//! that isn't ascending is given exactly `gravity` downward velocity every
//! frame, and collision only ever clamps position. Standing on the ground is
//! therefore "falling by one pixel and being pushed back", which is why a jump
//! is allowed whenever `y_velocity > 0`.

use crate::config::Config;
use crate::entity::{Entity, HalfExtents};
use crate::input::{Button, Buttons};
use crate::map::TileMap;
use log::{debug, trace};

/// Sets the player's intent for this frame from the buttons.
pub fn apply_input(player: &mut Entity, buttons: &impl Buttons, config: &Config) {
    let mut x_velocity = 0;
    if buttons.is_held(Button::Left) {
        x_velocity -= config.movement_speed;
    }
    if buttons.is_held(Button::Right) {
        x_velocity += config.movement_speed;
    }
    player.x_velocity = x_velocity;

    if buttons.was_just_pressed(Button::Jump) && player.is_falling() {
        debug!("jump from ({}, {})", player.x, player.y);
        player.y_velocity = -config.jump_speed;
    }
}

pub fn apply_gravity(entity: &mut Entity, config: &Config) {
    if entity.is_ascending() {
        entity.y_velocity += config.gravity;
    } else {
        entity.y_velocity = config.gravity;
    }
}

/// Points the enemy at `target_x` and pulls it down unconditionally.
pub fn chase(enemy: &mut Entity, target_x: i32, config: &Config) {
    enemy.x_velocity = (target_x - enemy.x).signum() * config.movement_speed;
    enemy.y_velocity = config.gravity;
}

/// Moves `entity` by its velocity, clipping the box against solid tiles.
///
/// Edges are checked right, left, bottom, top. The horizontal checks use the
/// row of the unclipped position, and the vertical checks use the column of the
/// unclipped position even when the horizontal checks pushed the entity back
/// into a neighbouring column. Changing either the order or the column changes
/// how corners behave.
pub fn resolve_position(entity: &mut Entity, map: &TileMap, config: &Config, half: HalfExtents) {
    let tile_width = config.tile_width;
    let tile_height = config.tile_height;

    let mut new_x = entity.x + entity.x_velocity;
    let mut new_y = entity.y + entity.y_velocity;

    let tile_x = new_x / tile_width;
    let tile_y = new_y / tile_height;

    let right_tile_x = (new_x + half.width) / tile_width;
    if map.tile_at(right_tile_x, tile_y).is_solid() {
        trace!("right edge blocked by ({}, {})", right_tile_x, tile_y);
        new_x = right_tile_x * tile_width - half.width;
    }

    // One pixel inside the edge, or a flush box would select the next tile.
    let left_tile_x = (new_x - half.width - 1) / tile_width;
    if map.tile_at(left_tile_x, tile_y).is_solid() {
        trace!("left edge blocked by ({}, {})", left_tile_x, tile_y);
        new_x = (left_tile_x + 1) * tile_width + half.width;
    }

    let bottom_tile_y = (new_y + half.height) / tile_height;
    if map.tile_at(tile_x, bottom_tile_y).is_solid() {
        trace!("bottom edge blocked by ({}, {})", tile_x, bottom_tile_y);
        new_y = bottom_tile_y * tile_height - half.height;
    }

    let top_tile_y = (new_y - half.height - 1) / tile_height;
    if map.tile_at(tile_x, top_tile_y).is_solid() {
        trace!("top edge blocked by ({}, {})", tile_x, top_tile_y);
        new_y = (top_tile_y + 1) * tile_height + half.height;
    }

    entity.x = if new_x > half.width { new_x } else { half.width };
    entity.y = if new_y > half.height { new_y } else { half.height };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonSet, ButtonState};
    use crate::level::Level;
    use crate::tile::TileType;

    const N: TileType = TileType::None;
    const G: TileType = TileType::Grass;

    const SMALL: Config = Config {
        tile_width: 8,
        tile_height: 8,
        ..Config::DEFAULT
    };
    const HALF: HalfExtents = SMALL.half_tile();

    fn map(level: Level) -> TileMap {
        TileMap::from_level(&level).unwrap()
    }

    fn step(entity: &mut Entity, map: &TileMap) {
        resolve_position(entity, map, &SMALL, HALF);
    }

    #[test]
    fn test_blocked_right_from_tile_centre() {
        let map = map(Level::new(3, 1, &[N, G, G]));
        let mut entity = Entity {
            x: 4,
            y: 4,
            x_velocity: SMALL.movement_speed,
            y_velocity: 0,
        };
        for _ in 0..10 {
            step(&mut entity, &map);
            assert_eq!(entity.x, 4);
            assert_eq!(entity.x + HALF.width, 8);
        }
    }

    #[test]
    fn test_walk_right_into_wall() {
        let map = map(Level::new(4, 1, &[N, N, G, G]));
        let mut entity = Entity {
            x: 4,
            y: 4,
            x_velocity: 2,
            y_velocity: 0,
        };
        let mut xs = vec![];
        for _ in 0..6 {
            step(&mut entity, &map);
            xs.push(entity.x);
        }
        assert_eq!(xs, [6, 8, 10, 12, 12, 12]);
        assert_eq!(entity.x + HALF.width, 2 * 8);
        assert_eq!(entity.x_velocity, 2);
    }

    #[test]
    fn test_walk_left_into_wall() {
        let map = map(Level::new(3, 1, &[G, N, N]));
        let mut entity = Entity {
            x: 20,
            y: 4,
            x_velocity: -2,
            y_velocity: 0,
        };
        let mut xs = vec![];
        for _ in 0..6 {
            step(&mut entity, &map);
            xs.push(entity.x);
        }
        assert_eq!(xs, [18, 16, 14, 12, 12, 12]);
        assert_eq!(entity.x - HALF.width, 8);
    }

    #[test]
    fn test_fall_and_land() {
        #[rustfmt::skip]
        let map = map(Level::new(3, 3, &[
            N, N, N,
            N, N, N,
            G, G, G,
        ]));
        let mut entity = Entity::new(12, 4);
        for _ in 0..30 {
            apply_gravity(&mut entity, &SMALL);
            step(&mut entity, &map);
        }
        assert_eq!(entity.y, 12);
        assert_eq!(entity.y + HALF.height, 2 * 8);
        assert_eq!(entity.y_velocity, SMALL.gravity);

        apply_gravity(&mut entity, &SMALL);
        step(&mut entity, &map);
        assert_eq!(entity.y, 12);
    }

    #[test]
    fn test_fall_one_pixel_per_frame() {
        #[rustfmt::skip]
        let map = map(Level::new(1, 3, &[
            N,
            N,
            G,
        ]));
        let mut entity = Entity::new(4, 4);
        let mut ys = vec![];
        for _ in 0..10 {
            apply_gravity(&mut entity, &SMALL);
            step(&mut entity, &map);
            ys.push(entity.y);
        }
        assert_eq!(ys, [5, 6, 7, 8, 9, 10, 11, 12, 12, 12]);
    }

    #[test]
    fn test_head_hits_ceiling() {
        #[rustfmt::skip]
        let map = map(Level::new(1, 4, &[
            G,
            N,
            N,
            G,
        ]));
        let mut entity = Entity {
            x: 4,
            y: 20,
            x_velocity: 0,
            y_velocity: -10,
        };
        step(&mut entity, &map);
        assert_eq!(entity.y, 12);
        assert_eq!(entity.y - HALF.height, 8);
        // Velocity is left alone; gravity takes it back to zero.
        assert_eq!(entity.y_velocity, -10);
    }

    #[test]
    fn test_vertical_checks_use_unclipped_column() {
        #[rustfmt::skip]
        let map = map(Level::new(3, 4, &[
            N, N, N,
            N, G, N,
            N, G, N,
            G, G, G,
        ]));
        let mut entity = Entity {
            x: 4,
            y: 12,
            x_velocity: 6,
            y_velocity: 1,
        };
        step(&mut entity, &map);
        assert_eq!(entity.x, 4);
        // Held up by column 1 even though the box ends up over column 0.
        assert_eq!(entity.y, 12);
    }

    #[test]
    fn test_world_edge_clamp() {
        let map = map(Level::new(1, 1, &[N]));
        let mut entity = Entity {
            x: 4,
            y: 4,
            x_velocity: -2,
            y_velocity: -3,
        };
        step(&mut entity, &map);
        assert_eq!((entity.x, entity.y), (HALF.width, HALF.height));
    }

    #[test]
    fn test_gravity() {
        let mut entity = Entity {
            y_velocity: -3,
            ..Entity::new(0, 0)
        };
        apply_gravity(&mut entity, &SMALL);
        assert_eq!(entity.y_velocity, -2);
        apply_gravity(&mut entity, &SMALL);
        apply_gravity(&mut entity, &SMALL);
        assert_eq!(entity.y_velocity, 0);
        apply_gravity(&mut entity, &SMALL);
        assert_eq!(entity.y_velocity, 1);

        entity.y_velocity = 5;
        apply_gravity(&mut entity, &SMALL);
        assert_eq!(entity.y_velocity, 1);
    }

    #[test]
    fn test_chase_direction() {
        let mut enemy = Entity::new(50, 10);
        chase(&mut enemy, 10, &SMALL);
        assert_eq!(enemy.x_velocity, -SMALL.movement_speed);
        assert_eq!(enemy.y_velocity, SMALL.gravity);

        chase(&mut enemy, 90, &SMALL);
        assert_eq!(enemy.x_velocity, SMALL.movement_speed);

        chase(&mut enemy, 50, &SMALL);
        assert_eq!(enemy.x_velocity, 0);
    }

    #[test]
    fn test_chase_sign_matches_offset() {
        for enemy_x in -20..20 {
            for target_x in -20..20 {
                let mut enemy = Entity::new(enemy_x, 0);
                enemy.y_velocity = -4;
                chase(&mut enemy, target_x, &SMALL);
                assert_eq!(enemy.x_velocity.signum(), (target_x - enemy_x).signum());
                assert_eq!(enemy.y_velocity, SMALL.gravity);
            }
        }
    }

    #[test]
    fn test_input_sets_horizontal_velocity() {
        let mut player = Entity::new(0, 0);
        let mut buttons = ButtonState::new();

        buttons.poll(ButtonSet::EMPTY.with(Button::Left));
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.x_velocity, -2);

        buttons.poll(ButtonSet::EMPTY.with(Button::Right));
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.x_velocity, 2);

        buttons.poll(ButtonSet::EMPTY.with(Button::Left).with(Button::Right));
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.x_velocity, 0);

        buttons.poll(ButtonSet::EMPTY);
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.x_velocity, 0);
    }

    #[test]
    fn test_jump_only_while_falling() {
        let mut player = Entity::new(0, 0);
        let mut buttons = ButtonState::new();
        buttons.poll(ButtonSet::EMPTY.with(Button::Jump));

        player.y_velocity = 0;
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.y_velocity, 0);

        player.y_velocity = -3;
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.y_velocity, -3);

        player.y_velocity = 1;
        apply_input(&mut player, &buttons, &SMALL);
        assert_eq!(player.y_velocity, -SMALL.jump_speed);
    }
}
