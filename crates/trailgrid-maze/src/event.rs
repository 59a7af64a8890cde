use trailgrid_core::CellIndex;

/// What the generator did to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationEventKind {
    /// The cell was turned into Wall before carving.
    Preparing,
    /// The cell was carved out of the wall.
    Digging,
}

/// A single `(cell, kind)` event emitted by the maze generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationEvent {
    pub pos: CellIndex,
    pub kind: GenerationEventKind,
}

impl GenerationEvent {
    #[inline]
    pub const fn new(pos: CellIndex, kind: GenerationEventKind) -> Self {
        Self { pos, kind }
    }
}
