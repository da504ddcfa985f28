use crate::tile::TileType;

/// A compiled-in level: a row-major grid of tiles in read-only storage.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub width: u8,
    pub height: u8,
    pub tiles: &'static [TileType],
}

impl Level {
    pub const fn new(width: u8, height: u8, tiles: &'static [TileType]) -> Level {
        assert!(tiles.len() == width as usize * height as usize);
        Level {
            width,
            height,
            tiles,
        }
    }
}

const N: TileType = TileType::None;
const G: TileType = TileType::Grass;
const D: TileType = TileType::Dirt;

pub const MAP0_WIDTH: u8 = 28;
pub const MAP0_HEIGHT: u8 = 4;

#[rustfmt::skip]
const MAP0_TILES: [TileType; MAP0_WIDTH as usize * MAP0_HEIGHT as usize] = [
    N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
    N, N, N, N, N, G, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
    N, N, N, N, G, D, N, N, G, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
    G, G, G, G, D, D, G, G, D, G, G, G, G, G, G, G, G, G, G, G, G, G, G, G, G, G, G, G,
];

pub static MAP0: Level = Level::new(MAP0_WIDTH, MAP0_HEIGHT, &MAP0_TILES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map0_shape() {
        assert_eq!(MAP0.tiles.len(), 28 * 4);
        assert!(MAP0.tiles.iter().all(|t| *t != TileType::Void));
    }

    #[test]
    fn test_map0_floor_is_solid() {
        let floor = &MAP0.tiles[3 * 28..];
        assert!(floor.iter().all(|t| t.is_solid()));
        assert_eq!(MAP0.tiles[28 + 5], TileType::Grass);
        assert_eq!(MAP0.tiles[2 * 28 + 5], TileType::Dirt);
    }
}
