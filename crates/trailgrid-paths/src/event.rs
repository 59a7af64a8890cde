use trailgrid_core::CellIndex;

/// What happened to a cell during a search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEventKind {
    /// The cell was taken off the frontier and expanded.
    Visited,
    /// The cell was put on the frontier (first discovery, or a cheaper
    /// distance for weighted searches).
    Queued,
    /// The cell lies on the reconstructed path.
    OnPath,
}

/// A single `(cell, kind)` event emitted by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchEvent {
    pub pos: CellIndex,
    pub kind: SearchEventKind,
}

impl SearchEvent {
    #[inline]
    pub const fn new(pos: CellIndex, kind: SearchEventKind) -> Self {
        Self { pos, kind }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_round_trip() {
        let ev = SearchEvent::new(CellIndex::new(3, 7), SearchEventKind::OnPath);
        let json = serde_json::to_string(&ev).unwrap();
        let back: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
