use rand::Rng;
use rand::rngs::ThreadRng;
use trailgrid_core::{CellIndex, GridError, TerrainGrid};

use crate::event::SearchEvent;
use crate::traits::PathSearch;
use crate::weighted::{BestFirst, Estimate};

/// Step-by-step Dijkstra search keyed by accumulated terrain cost.
///
/// Stepping into a cell costs that cell's [`CellType::cost`](trailgrid_core::CellType::cost);
/// Wall is never entered. A cell is queued again every time a strictly
/// cheaper distance is found; outdated frontier entries are dropped without
/// an event when popped.
pub struct Dijkstra<R = ThreadRng> {
    inner: BestFirst<R>,
}

impl Dijkstra<ThreadRng> {
    /// Start a Dijkstra search using the thread-local RNG.
    pub fn new(grid: &TerrainGrid, start: CellIndex, goal: CellIndex) -> Result<Self, GridError> {
        Self::with_rng(grid, start, goal, rand::rng())
    }
}

impl<R: Rng> Dijkstra<R> {
    /// Start a Dijkstra search using `rng` for neighbour ordering.
    pub fn with_rng(
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
        rng: R,
    ) -> Result<Self, GridError> {
        Ok(Self {
            inner: BestFirst::new("dijkstra", grid, start, goal, rng, Estimate::Zero)?,
        })
    }

    /// Best distance from the start recorded so far for `p`.
    ///
    /// Returns `None` if `p` is out of bounds or has not been reached.
    pub fn distance(&self, p: CellIndex) -> Option<u32> {
        self.inner.distance(p)
    }
}

impl<R: Rng> Iterator for Dijkstra<R> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        self.inner.next_event()
    }
}

impl<R: Rng> PathSearch for Dijkstra<R> {
    fn start(&self) -> CellIndex {
        self.inner.state.start
    }

    fn goal(&self) -> CellIndex {
        self.inner.state.goal
    }

    fn is_finished(&self) -> bool {
        self.inner.state.is_finished()
    }
}
