//! The [`CellType`] terrain enum and its traversal costs.

use std::fmt;

/// Cost sentinel for untraversable terrain.
pub const IMPASSABLE: u32 = u32::MAX;

/// The terrain held by a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Empty,
    Sand,
    Water,
    Wall,
    Begin,
    Goal,
}

impl CellType {
    /// Every terrain type.
    pub const ALL: [CellType; 6] = [
        CellType::Empty,
        CellType::Sand,
        CellType::Water,
        CellType::Wall,
        CellType::Begin,
        CellType::Goal,
    ];

    /// Cost of stepping into a cell of this type. Wall returns [`IMPASSABLE`].
    #[inline]
    pub const fn cost(self) -> u32 {
        match self {
            CellType::Empty | CellType::Begin | CellType::Goal => 1,
            CellType::Sand => 2,
            CellType::Water => 5,
            CellType::Wall => IMPASSABLE,
        }
    }

    /// Whether a search may step into a cell of this type.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellType::Wall)
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Empty => "empty",
            CellType::Sand => "sand",
            CellType::Water => "water",
            CellType::Wall => "wall",
            CellType::Begin => "begin",
            CellType::Goal => "goal",
        };
        f.write_str(name)
    }
}
