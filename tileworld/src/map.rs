use crate::level::Level;
use crate::tile::TileType;
use core::fmt;

pub const MAX_TILES: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    TooLarge { width: u8, height: u8 },
    VoidTile { x: u8, y: u8 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::TooLarge { width, height } => write!(
                f,
                "level is {}x{} tiles, capacity is {} tiles",
                width, height, MAX_TILES
            ),
            MapError::VoidTile { x, y } => write!(f, "void tile authored at ({}, {})", x, y),
        }
    }
}

/// Runtime copy of a level. Never mutated after loading.
#[derive(Debug, Clone)]
pub struct TileMap {
    width: u8,
    height: u8,
    tiles: heapless::Vec<TileType, MAX_TILES>,
}

impl TileMap {
    pub fn from_level(level: &Level) -> Result<TileMap, MapError> {
        let mut tiles = heapless::Vec::new();
        for (index, tile) in level.tiles.iter().enumerate() {
            if *tile == TileType::Void {
                return Err(MapError::VoidTile {
                    x: (index % level.width as usize) as u8,
                    y: (index / level.width as usize) as u8,
                });
            }
            tiles.push(*tile).map_err(|_| MapError::TooLarge {
                width: level.width,
                height: level.height,
            })?;
        }
        Ok(TileMap {
            width: level.width,
            height: level.height,
            tiles,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> TileType {
        if !self.contains(x, y) {
            return TileType::Void;
        }
        self.tiles[y as usize * self.width as usize + x as usize]
    }
}
