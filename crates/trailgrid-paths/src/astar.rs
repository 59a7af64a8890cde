use rand::Rng;
use rand::rngs::ThreadRng;
use trailgrid_core::{CellIndex, GridError, TerrainGrid};

use crate::event::SearchEvent;
use crate::traits::PathSearch;
use crate::weighted::{BestFirst, Estimate};

/// Step-by-step A* search.
///
/// Same as [`Dijkstra`](crate::Dijkstra) but the frontier is keyed by
/// accumulated cost plus the Manhattan distance to the goal.
///
/// The estimate counts every remaining step at cost 1 and is not scaled by
/// terrain. Across Sand or Water it underestimates heavily, so exploration
/// there degrades towards Dijkstra's.
pub struct AStar<R = ThreadRng> {
    inner: BestFirst<R>,
}

impl AStar<ThreadRng> {
    /// Start an A* search using the thread-local RNG.
    pub fn new(grid: &TerrainGrid, start: CellIndex, goal: CellIndex) -> Result<Self, GridError> {
        Self::with_rng(grid, start, goal, rand::rng())
    }
}

impl<R: Rng> AStar<R> {
    /// Start an A* search using `rng` for neighbour ordering.
    pub fn with_rng(
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
        rng: R,
    ) -> Result<Self, GridError> {
        Ok(Self {
            inner: BestFirst::new("astar", grid, start, goal, rng, Estimate::Manhattan)?,
        })
    }

    /// Best accumulated cost from the start recorded so far for `p`.
    pub fn distance(&self, p: CellIndex) -> Option<u32> {
        self.inner.distance(p)
    }
}

impl<R: Rng> Iterator for AStar<R> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        self.inner.next_event()
    }
}

impl<R: Rng> PathSearch for AStar<R> {
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
