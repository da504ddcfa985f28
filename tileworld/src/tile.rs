use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileType {
    None = 0,
    Grass = 1,
    Dirt = 2,
    /// Returned for every coordinate outside the map. Never authored.
    Void = 3,
}

pub const NUM_TILE_TYPES: usize = 4;

impl TileType {
    pub const ALL: [TileType; NUM_TILE_TYPES] =
        [TileType::None, TileType::Grass, TileType::Dirt, TileType::Void];

    /// Every tile apart from `None` blocks movement, including `Void`.
    pub const fn is_solid(self) -> bool {
        !matches!(self, TileType::None)
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

pub const fn is_solid(tile: TileType) -> bool {
    tile.is_solid()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTileByte(pub u8);

impl fmt::Display for InvalidTileByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tile byte {:#04x}", self.0)
    }
}

impl TryFrom<u8> for TileType {
    type Error = InvalidTileByte;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TileType::None),
            1 => Ok(TileType::Grass),
            2 => Ok(TileType::Dirt),
            3 => Ok(TileType::Void),
            _ => Err(InvalidTileByte(value)),
        }
    }
}
