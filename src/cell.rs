/// Terrain classification of a grid cell. Every kind except [CellKind::Wall] has a positive
/// traversal weight, which is the cost of stepping onto a cell of that kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Ground,
    Wall,
    Water,
    Elevated,
}

impl CellKind {
    pub const GROUND_WEIGHT: u32 = 1;
    pub const WATER_WEIGHT: u32 = 5;
    pub const ELEVATED_WEIGHT: u32 = 10;

    /// Cost of entering a cell of this kind, [None] for walls.
    pub fn weight(self) -> Option<u32> {
        match self {
            CellKind::Ground => Some(Self::GROUND_WEIGHT),
            CellKind::Water => Some(Self::WATER_WEIGHT),
            CellKind::Elevated => Some(Self::ELEVATED_WEIGHT),
            CellKind::Wall => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }

    /// Maps a [MovingAI](https://movingai.com/benchmarks/formats.html) map tile to a kind.
    /// Out-of-bounds and tree tiles are walls, water and swamp tiles are water. `^` is not part
    /// of the format and is used here for elevated terrain.
    pub fn from_tile(tile: u8) -> CellKind {
        match tile {
            b'.' | b'G' => CellKind::Ground,
            b'W' | b'S' => CellKind::Water,
            b'^' => CellKind::Elevated,
            _ => CellKind::Wall,
        }
    }

    pub fn to_tile(self) -> char {
        match self {
            CellKind::Ground => '.',
            CellKind::Wall => '#',
            CellKind::Water => 'W',
            CellKind::Elevated => '^',
        }
    }
}

/// A grid location. `index = x + width * y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub index: usize,
    pub kind: CellKind,
}

/// Directed edge stored in the adjacency list of its origin cell. The weight is the traversal
/// weight of the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub to: usize,
    pub weight: u32,
}
