//! Best-first engine shared by Dijkstra and A*.

use rand::Rng;
use trailgrid_core::{CellIndex, GridError, IMPASSABLE, TerrainGrid};

use crate::distance::manhattan;
use crate::event::{SearchEvent, SearchEventKind};
use crate::frontier::Frontier;
use crate::state::SearchState;

/// Distance sentinel for cells not reached yet.
const UNREACHED: u32 = u32::MAX;

/// Remaining-cost estimate added to the accumulated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Estimate {
    /// Plain Dijkstra.
    Zero,
    /// Manhattan distance to the goal. Admissible only on uniform terrain.
    Manhattan,
}

impl Estimate {
    #[inline]
    fn between(self, from: CellIndex, to: CellIndex) -> u32 {
        match self {
            Estimate::Zero => 0,
            Estimate::Manhattan => manhattan(from, to),
        }
    }
}

pub(crate) struct BestFirst<R> {
    pub(crate) state: SearchState,
    rng: R,
    estimate: Estimate,
    dist: Vec<u32>,
    open: Frontier,
}

impl<R: Rng> BestFirst<R> {
    pub(crate) fn new(
        name: &'static str,
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
        rng: R,
        estimate: Estimate,
    ) -> Result<Self, GridError> {
        let state = SearchState::new(name, grid, start, goal)?;
        let mut dist = vec![UNREACHED; state.len()];
        let mut open = Frontier::new();
        if let Some(si) = state.idx(start) {
            dist[si] = 0;
            open.push(si, 0, estimate.between(start, goal));
        }
        Ok(Self {
            state,
            rng,
            estimate,
            dist,
            open,
        })
    }

    /// Best distance recorded so far for `p`.
    pub(crate) fn distance(&self, p: CellIndex) -> Option<u32> {
        let d = self.dist[self.state.idx(p)?];
        (d != UNREACHED).then_some(d)
    }

    /// Pop one frontier entry and expand it if it is up to date.
    fn advance(&mut self) {
        let Some(entry) = self.open.pop() else {
            self.state.finish();
            return;
        };
        let ci = entry.idx;
        let cp = self.state.point(ci);

        // Skip stale entries.
        if entry.cost != self.dist[ci] {
            log::trace!("stale frontier entry for {cp} (cost {})", entry.cost);
            return;
        }

        self.state.emit(cp, SearchEventKind::Visited);
        if cp == self.state.goal {
            self.state.finish();
            return;
        }

        let goal = self.state.goal;
        let neighbours = self
            .state
            .grid
            .neighbours(cp, &mut self.rng)
            .unwrap_or_default();
        for np in neighbours {
            let Ok(step) = self.state.grid.cell_cost(np) else {
                continue;
            };
            if step == IMPASSABLE {
                continue;
            }
            let Some(ni) = self.state.idx(np) else {
                continue;
            };
            let tentative = entry.cost.saturating_add(step);
            if tentative >= self.dist[ni] {
                continue;
            }
            self.dist[ni] = tentative;
            self.state.set_parent(ni, ci);
            let priority = tentative.saturating_add(self.estimate.between(np, goal));
            self.open.push(ni, tentative, priority);
            self.state.emit(np, SearchEventKind::Queued);
        }
    }

    pub(crate) fn next_event(&mut self) -> Option<SearchEvent> {
        loop {
            if let Some(ev) = self.state.next_event() {
                return Some(ev);
            }
            if !self.state.is_exploring() {
                return None;
            }
            self.advance();
        }
    }
}
