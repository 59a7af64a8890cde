use std::collections::VecDeque;

use trailgrid_core::{CellIndex, Extent, GridError, TerrainGrid};

use crate::event::{SearchEvent, SearchEventKind};

/// Parent sentinel for cells without a recorded parent.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-run bookkeeping shared by every search strategy.
///
/// Holds the grid handle, the parent map, and the outbox of events that have
/// been produced by the last expansion but not yet pulled. Cells are
/// addressed by flat row-major offsets.
pub(crate) struct SearchState {
    pub(crate) grid: TerrainGrid,
    pub(crate) start: CellIndex,
    pub(crate) goal: CellIndex,
    name: &'static str,
    extent: Extent,
    parents: Vec<usize>,
    pending: VecDeque<SearchEvent>,
    exploring: bool,
    visits: usize,
}

impl SearchState {
    /// Validate `start` and `goal` and allocate fresh per-run storage.
    pub(crate) fn new(
        name: &'static str,
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
    ) -> Result<Self, GridError> {
        grid.cell_type(start)?;
        grid.cell_type(goal)?;
        let extent = grid.extent();
        log::debug!("{name}: searching {start} -> {goal} on {extent} grid");
        Ok(Self {
            grid: grid.clone(),
            start,
            goal,
            name,
            extent,
            parents: vec![NO_PARENT; extent.len()],
            pending: VecDeque::new(),
            exploring: true,
            visits: 0,
        })
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a cell to a flat offset. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: CellIndex) -> Option<usize> {
        self.extent.offset(p)
    }

    /// Convert a flat offset back to a cell.
    #[inline]
    pub(crate) fn point(&self, i: usize) -> CellIndex {
        self.extent.index_at(i)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.extent.len()
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    pub(crate) fn emit(&mut self, pos: CellIndex, kind: SearchEventKind) {
        if kind == SearchEventKind::Visited {
            self.visits += 1;
        }
        self.pending.push_back(SearchEvent::new(pos, kind));
    }

    #[inline]
    pub(crate) fn next_event(&mut self) -> Option<SearchEvent> {
        self.pending.pop_front()
    }

    #[inline]
    pub(crate) fn is_exploring(&self) -> bool {
        self.exploring
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        !self.exploring && self.pending.is_empty()
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, child: usize, parent: usize) {
        self.parents[child] = parent;
    }

    /// Stop exploring and queue the OnPath events, if a path exists.
    pub(crate) fn finish(&mut self) {
        if !self.exploring {
            return;
        }
        self.exploring = false;
        match self.path() {
            Some(path) => {
                log::debug!(
                    "{}: reached {} after {} visits, path of {} cells",
                    self.name,
                    self.goal,
                    self.visits,
                    path.len()
                );
                for p in path {
                    self.emit(p, SearchEventKind::OnPath);
                }
            }
            None => {
                log::debug!(
                    "{}: no path to {} after {} visits",
                    self.name,
                    self.goal,
                    self.visits
                );
            }
        }
    }

    /// Walk parents from goal back to start.
    ///
    /// A start equal to the goal yields a single-cell path. The walk is
    /// capped at the cell count so a grid repainted mid-run cannot loop.
    fn path(&self) -> Option<Vec<CellIndex>> {
        let start_idx = self.idx(self.start)?;
        let mut ci = self.idx(self.goal)?;
        let mut path = vec![self.goal];
        while ci != start_idx {
            let p = self.parents[ci];
            if p == NO_PARENT || path.len() > self.len() {
                return None;
            }
            path.push(self.point(p));
            ci = p;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(start: CellIndex, goal: CellIndex) -> SearchState {
        let grid = TerrainGrid::new(3, 3).unwrap();
        SearchState::new("test", &grid, start, goal).unwrap()
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let grid = TerrainGrid::new(3, 3).unwrap();
        assert!(SearchState::new("test", &grid, CellIndex::new(3, 0), CellIndex::ZERO).is_err());
        assert!(SearchState::new("test", &grid, CellIndex::ZERO, CellIndex::new(0, -1)).is_err());
    }

    #[test]
    fn finish_without_parents_emits_nothing() {
        let mut s = state(CellIndex::new(0, 0), CellIndex::new(2, 2));
        s.finish();
        assert!(s.next_event().is_none());
        assert!(s.is_finished());
    }

    #[test]
    fn finish_walks_parent_chain() {
        let mut s = state(CellIndex::new(0, 0), CellIndex::new(0, 2));
        let a = s.idx(CellIndex::new(0, 0)).unwrap();
        let b = s.idx(CellIndex::new(0, 1)).unwrap();
        let c = s.idx(CellIndex::new(0, 2)).unwrap();
        s.set_parent(b, a);
        s.set_parent(c, b);
        s.finish();
        let cells: Vec<_> = std::iter::from_fn(|| s.next_event())
            .map(|e| {
                assert_eq!(e.kind, SearchEventKind::OnPath);
                e.pos
            })
            .collect();
        assert_eq!(
            cells,
            vec![CellIndex::new(0, 0), CellIndex::new(0, 1), CellIndex::new(0, 2)]
        );
    }

    #[test]
    fn cyclic_parents_yield_no_path() {
        let mut s = state(CellIndex::new(0, 0), CellIndex::new(1, 1));
        let a = s.idx(CellIndex::new(1, 1)).unwrap();
        let b = s.idx(CellIndex::new(1, 2)).unwrap();
        s.set_parent(a, b);
        s.set_parent(b, a);
        s.finish();
        assert!(s.next_event().is_none());
    }

    #[test]
    fn start_equal_goal_is_single_cell_path() {
        let mut s = state(CellIndex::new(1, 1), CellIndex::new(1, 1));
        s.finish();
        let ev = s.next_event().unwrap();
        assert_eq!(ev, SearchEvent::new(CellIndex::new(1, 1), SearchEventKind::OnPath));
        assert!(s.next_event().is_none());
    }
}
