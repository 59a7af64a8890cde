use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::ThreadRng;
use trailgrid_core::{CellIndex, GridError, TerrainGrid};

use crate::event::{SearchEvent, SearchEventKind};
use crate::state::SearchState;
use crate::traits::PathSearch;

/// Step-by-step breadth-first search.
///
/// Every step has cost 1, whatever the terrain; only Wall blocks. The
/// goal is reached with the fewest hops.
pub struct Bfs<R = ThreadRng> {
    state: SearchState,
    rng: R,
    queue: VecDeque<usize>,
    discovered: Vec<bool>,
}

impl Bfs<ThreadRng> {
    /// Start a BFS from `start` to `goal` using the thread-local RNG for
    /// neighbour ordering.
    pub fn new(grid: &TerrainGrid, start: CellIndex, goal: CellIndex) -> Result<Self, GridError> {
        Self::with_rng(grid, start, goal, rand::rng())
    }
}

impl<R: Rng> Bfs<R> {
    /// Start a BFS using `rng` for neighbour ordering.
    pub fn with_rng(
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
        rng: R,
    ) -> Result<Self, GridError> {
        let state = SearchState::new("bfs", grid, start, goal)?;
        let mut discovered = vec![false; state.len()];
        let mut queue = VecDeque::new();
        if let Some(si) = state.idx(start) {
            discovered[si] = true;
            queue.push_back(si);
        }
        Ok(Self {
            state,
            rng,
            queue,
            discovered,
        })
    }

    /// Expand one cell off the queue.
    fn advance(&mut self) {
        let Some(ci) = self.queue.pop_front() else {
            self.state.finish();
            return;
        };
        let cp = self.state.point(ci);
        self.state.emit(cp, SearchEventKind::Visited);

        if cp == self.state.goal {
            self.state.finish();
            return;
        }

        let neighbours = self
            .state
            .grid
            .neighbours(cp, &mut self.rng)
            .unwrap_or_default();
        for np in neighbours {
            if !self.state.grid.is_passable(np) {
                continue;
            }
            let Some(ni) = self.state.idx(np) else {
                continue;
            };
            if self.discovered[ni] {
                continue;
            }
            self.discovered[ni] = true;
            self.state.set_parent(ni, ci);
            self.queue.push_back(ni);
            self.state.emit(np, SearchEventKind::Queued);
        }
    }
}

impl<R: Rng> Iterator for Bfs<R> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
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

impl<R: Rng> PathSearch for Bfs<R> {
    fn start(&self) -> CellIndex {
        self.state.start
    }

    fn goal(&self) -> CellIndex {
        self.state.goal
    }

    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_from_events;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use trailgrid_core::CellType;

    fn idx(row: i32, col: i32) -> CellIndex {
        CellIndex::new(row, col)
    }

    fn run(grid: &TerrainGrid, start: CellIndex, goal: CellIndex) -> Vec<SearchEvent> {
        Bfs::with_rng(grid, start, goal, StdRng::seed_from_u64(42))
            .unwrap()
            .collect()
    }

    #[test]
    fn open_grid_path_has_nine_cells() {
        let grid = TerrainGrid::new(5, 5).unwrap();
        let events = run(&grid, idx(0, 0), idx(4, 4));
        let path = path_from_events(events.iter().copied());
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&idx(0, 0)));
        assert_eq!(path.last(), Some(&idx(4, 4)));
        for w in path.windows(2) {
            assert_eq!(crate::manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn path_events_come_last() {
        let grid = TerrainGrid::new(5, 5).unwrap();
        let events = run(&grid, idx(0, 0), idx(4, 4));
        let first_path = events
            .iter()
            .position(|e| e.kind == SearchEventKind::OnPath)
            .unwrap();
        assert!(events[first_path..]
            .iter()
            .all(|e| e.kind == SearchEventKind::OnPath));
    }

    #[test]
    fn terrain_cost_is_ignored() {
        let grid = TerrainGrid::new(3, 1).unwrap();
        grid.set_cell(idx(0, 1), CellType::Water).unwrap();
        let path = path_from_events(run(&grid, idx(0, 0), idx(0, 2)));
        assert_eq!(path, vec![idx(0, 0), idx(0, 1), idx(0, 2)]);
    }

    #[test]
    fn wall_row_blocks_path() {
        let grid = TerrainGrid::new(5, 5).unwrap();
        for col in 0..5 {
            grid.set_cell(idx(2, col), CellType::Wall).unwrap();
        }
        let events = run(&grid, idx(0, 0), idx(4, 4));
        assert!(!events.is_empty());
        assert!(events.iter().all(|e| e.kind != SearchEventKind::OnPath));
        assert!(events.iter().all(|e| e.pos.row < 2));
    }

    #[test]
    fn stops_when_goal_is_dequeued() {
        let grid = TerrainGrid::new(5, 1).unwrap();
        let events = run(&grid, idx(0, 0), idx(0, 1));
        let visited: Vec<_> = events
            .iter()
            .filter(|e| e.kind == SearchEventKind::Visited)
            .map(|e| e.pos)
            .collect();
        assert_eq!(visited, vec![idx(0, 0), idx(0, 1)]);
        assert!(!events.iter().any(|e| e.pos == idx(0, 3)));
    }

    #[test]
    fn start_equal_goal() {
        let grid = TerrainGrid::new(3, 3).unwrap();
        let events = run(&grid, idx(1, 1), idx(1, 1));
        assert_eq!(
            events,
            vec![
                SearchEvent::new(idx(1, 1), SearchEventKind::Visited),
                SearchEvent::new(idx(1, 1), SearchEventKind::OnPath),
            ]
        );
    }

    #[test]
    fn out_of_bounds_goal_is_rejected() {
        let grid = TerrainGrid::new(3, 3).unwrap();
        assert!(Bfs::new(&grid, idx(0, 0), idx(3, 3)).is_err());
    }

    #[test]
    fn pulls_are_lazy() {
        let grid = TerrainGrid::new(4, 4).unwrap();
        let mut bfs = Bfs::with_rng(&grid, idx(0, 0), idx(3, 3), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(
            bfs.next(),
            Some(SearchEvent::new(idx(0, 0), SearchEventKind::Visited))
        );
        assert!(!bfs.is_finished());
        // Paint a wall around the goal while the search is paused.
        grid.set_cell(idx(2, 3), CellType::Wall).unwrap();
        grid.set_cell(idx(3, 2), CellType::Wall).unwrap();
        let rest: Vec<_> = bfs.by_ref().collect();
        assert!(rest.iter().all(|e| e.kind != SearchEventKind::OnPath));
        assert!(bfs.is_finished());
        assert_eq!(bfs.next(), None);
    }
}
