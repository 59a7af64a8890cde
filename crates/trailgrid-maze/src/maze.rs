//! Randomized depth-first maze carving.

use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};
use trailgrid_core::{CellIndex, CellType, ExtentIter, TerrainGrid};

use crate::carve::CarveWeights;
use crate::event::{GenerationEvent, GenerationEventKind};

/// Where a [`MazeGen`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Walling off the grid, one cell per pull.
    Preparing,
    /// Carving rooms and passages.
    Digging,
    /// Every event has been produced.
    Done,
}

/// Start generating a maze on `grid` with the thread-local RNG.
pub fn generate(grid: &TerrainGrid) -> MazeGen<ThreadRng> {
    MazeGen::with_rng(grid, rand::rng())
}

/// Lazy maze generator writing into a shared [`TerrainGrid`].
///
/// The grid is modified as events are pulled, so a renderer reading the grid
/// after each event sees exactly the state the event describes. Dropping
/// the generator stops the run and leaves the grid half-carved.
pub struct MazeGen<R = ThreadRng> {
    grid: TerrainGrid,
    rng: R,
    weights: CarveWeights,
    phase: Phase,
    walling: ExtentIter,
    visited: Vec<bool>,
    stack: Vec<CellIndex>,
    pending: VecDeque<GenerationEvent>,
    carved: usize,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng` for the origin, the neighbour order
    /// and the carved terrain.
    pub fn with_rng(grid: &TerrainGrid, rng: R) -> Self {
        let extent = grid.extent();
        Self {
            grid: grid.clone(),
            rng,
            weights: CarveWeights::default(),
            phase: Phase::Preparing,
            walling: extent.iter(),
            visited: vec![false; extent.len()],
            stack: Vec::new(),
            pending: VecDeque::new(),
            carved: 0,
        }
    }

    /// Replace the terrain odds for carved cells.
    pub fn with_weights(mut self, weights: CarveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the last event has been pulled.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done && self.pending.is_empty()
    }

    /// Room cells two steps away from `p`, in bounds, in random order.
    fn room_neighbours(&mut self, p: CellIndex) -> Vec<CellIndex> {
        let extent = self.grid.extent();
        let mut out: Vec<CellIndex> = [p.shift(-2, 0), p.shift(2, 0), p.shift(0, -2), p.shift(0, 2)]
            .into_iter()
            .filter(|&n| extent.contains(n))
            .collect();
        out.shuffle(&mut self.rng);
        out
    }

    fn is_visited(&self, p: CellIndex) -> bool {
        self.grid
            .extent()
            .offset(p)
            .is_some_and(|i| self.visited[i])
    }

    fn mark_visited(&mut self, p: CellIndex) {
        if let Some(i) = self.grid.extent().offset(p) {
            self.visited[i] = true;
        }
    }

    /// Lay down drawn terrain at `p` and queue a Digging event.
    fn carve(&mut self, p: CellIndex) {
        let ty = self.weights.draw(&mut self.rng);
        if let Err(e) = self.grid.set_cell(p, ty) {
            log::warn!("maze: cannot carve: {e}");
            return;
        }
        self.carved += 1;
        self.pending
            .push_back(GenerationEvent::new(p, GenerationEventKind::Digging));
    }

    /// Pick a random room as origin and carve it.
    fn begin_digging(&mut self) {
        self.phase = Phase::Digging;
        let extent = self.grid.extent();
        let rooms_down = (extent.height + 1) / 2;
        let rooms_across = (extent.width + 1) / 2;
        if rooms_down == 0 || rooms_across == 0 {
            self.phase = Phase::Done;
            return;
        }
        let origin = CellIndex::new(
            2 * self.rng.random_range(0..rooms_down),
            2 * self.rng.random_range(0..rooms_across),
        );
        log::debug!("maze: digging {extent} grid from {origin}");
        self.mark_visited(origin);
        self.stack.push(origin);
        self.carve(origin);
    }

    /// Carve towards one unvisited room from the top of the stack, or
    /// backtrack.
    fn dig_step(&mut self) {
        let Some(&current) = self.stack.last() else {
            log::debug!("maze: done, {} cells carved", self.carved);
            self.phase = Phase::Done;
            return;
        };
        for next in self.room_neighbours(current) {
            if self.is_visited(next) {
                continue;
            }
            let wall = CellIndex::new((current.row + next.row) / 2, (current.col + next.col) / 2);
            self.mark_visited(next);
            self.carve(wall);
            self.carve(next);
            self.stack.push(next);
            return;
        }
        log::trace!("maze: backtracking from {current}");
        self.stack.pop();
    }
}

impl<R: Rng> Iterator for MazeGen<R> {
    type Item = GenerationEvent;

    fn next(&mut self) -> Option<GenerationEvent> {
        loop {
            if let Some(ev) = self.pending.pop_front() {
                return Some(ev);
            }
            match self.phase {
                Phase::Preparing => match self.walling.next() {
                    Some(p) => {
                        if let Err(e) = self.grid.set_cell(p, CellType::Wall) {
                            log::warn!("maze: cannot wall off: {e}");
                            continue;
                        }
                        return Some(GenerationEvent::new(p, GenerationEventKind::Preparing));
                    }
                    None => self.begin_digging(),
                },
                Phase::Digging => self.dig_step(),
                Phase::Done => return None,
            }
        }
    }
}
