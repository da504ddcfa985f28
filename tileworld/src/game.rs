use crate::camera::Camera;
use crate::config::Config;
use crate::entity::Entity;
use crate::images;
use crate::input::Buttons;
use crate::level::Level;
use crate::map::{MapError, TileMap};
use crate::physics;
use crate::render;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::info;

pub struct Game {
    config: Config,
    map: TileMap,
    player: Entity,
    enemy: Entity,
    camera: Camera,
}

impl Game {
    pub fn new(config: Config, level: &Level) -> Result<Game, MapError> {
        let map = TileMap::from_level(level)?;
        info!("Loaded {}x{} tile level", map.width(), map.height());
        let (player_x, player_y) = config.player_spawn();
        let (enemy_x, enemy_y) = config.enemy_spawn();
        Ok(Game {
            config,
            map,
            player: Entity::new(player_x, player_y),
            enemy: Entity::new(enemy_x, enemy_y),
            camera: Camera::default(),
        })
    }

    /// Advances the simulation by one frame.
    pub fn update(&mut self, buttons: &impl Buttons) {
        let half = self.config.half_tile();

        physics::apply_input(&mut self.player, buttons, &self.config);
        physics::apply_gravity(&mut self.player, &self.config);
        physics::resolve_position(&mut self.player, &self.map, &self.config, half);

        physics::chase(&mut self.enemy, self.player.x, &self.config);
        physics::resolve_position(&mut self.enemy, &self.map, &self.config, half);

        self.camera.follow(&self.player, &self.config);
    }

    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(images::BACKGROUND)?;
        render::draw_map(target, &self.map, &self.camera, &self.config)?;
        render::draw_player(target, &self.player, &self.camera, &self.config)?;
        render::draw_enemy(target, &self.enemy, &self.camera, &self.config)?;
        render::draw_status(target, &self.camera, &self.player)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn enemy(&self) -> &Entity {
        &self.enemy
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
