//! Headless step driver and ASCII renderer used by the `trail` demo.
//!
//! [`Overlay`] keeps the latest search state of each cell the way an
//! on-screen view would, and [`render`] draws grid plus overlay as text.
//! [`StepDriver`] pulls a fixed number of events per tick from any event
//! source, standing in for an animation timer.

use std::collections::HashMap;

use trailgrid_core::{CellIndex, CellType, TerrainGrid};
use trailgrid_paths::{SearchEvent, SearchEventKind};

pub const DEFAULT_WIDTH: i32 = 31;
pub const DEFAULT_HEIGHT: i32 = 21;

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Latest search state per cell.
#[derive(Debug, Default, Clone)]
pub struct Overlay {
    states: HashMap<CellIndex, SearchEventKind>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, replacing any earlier state of that cell.
    pub fn apply(&mut self, ev: SearchEvent) {
        self.states.insert(ev.pos, ev.kind);
    }

    pub fn get(&self, p: CellIndex) -> Option<SearchEventKind> {
        self.states.get(&p).copied()
    }

    /// Forget every state except `keep` (typically the final path).
    pub fn clear_except(&mut self, keep: SearchEventKind) {
        self.states.retain(|_, k| *k == keep);
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn count(&self, kind: SearchEventKind) -> usize {
        self.states.values().filter(|&&k| k == kind).count()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn terrain_glyph(ty: CellType) -> char {
    match ty {
        CellType::Empty => '.',
        CellType::Sand => ':',
        CellType::Water => '~',
        CellType::Wall => '#',
        CellType::Begin => 'S',
        CellType::Goal => 'G',
    }
}

fn overlay_glyph(kind: SearchEventKind) -> char {
    match kind {
        SearchEventKind::OnPath => '*',
        SearchEventKind::Queued => '+',
        SearchEventKind::Visited => 'o',
    }
}

/// Draw the grid row by row. Begin and Goal always show; otherwise the
/// overlay state wins over the terrain.
pub fn render(grid: &TerrainGrid, overlay: &Overlay) -> String {
    let width = grid.width() as usize;
    let mut out = String::with_capacity((width + 1) * grid.height() as usize);
    for (p, ty) in grid.iter() {
        let glyph = match (ty, overlay.get(p)) {
            (CellType::Begin | CellType::Goal, _) | (_, None) => terrain_glyph(ty),
            (_, Some(kind)) => overlay_glyph(kind),
        };
        out.push(glyph);
        if p.col as usize + 1 == width {
            out.push('\n');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// StepDriver
// ---------------------------------------------------------------------------

/// Pulls events from a source in fixed-size ticks.
pub struct StepDriver<I> {
    source: I,
    per_tick: usize,
    pulled: usize,
    exhausted: bool,
}

impl<I: Iterator> StepDriver<I> {
    /// Drive `source`, pulling at most `per_tick` events per tick (at least 1).
    pub fn new(source: I, per_tick: usize) -> Self {
        Self {
            source,
            per_tick: per_tick.max(1),
            pulled: 0,
            exhausted: false,
        }
    }

    /// Pull up to one tick's worth of events.
    pub fn tick(&mut self) -> Vec<I::Item> {
        let mut out = Vec::with_capacity(self.per_tick);
        while out.len() < self.per_tick {
            match self.source.next() {
                Some(ev) => out.push(ev),
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
        self.pulled += out.len();
        out
    }

    /// Pull everything that is left, ignoring the tick size.
    pub fn fast_forward(&mut self) -> Vec<I::Item> {
        let rest: Vec<_> = self.source.by_ref().collect();
        self.pulled += rest.len();
        self.exhausted = true;
        rest
    }

    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

// ---------------------------------------------------------------------------
// Search runs
// ---------------------------------------------------------------------------

/// Outcome of one search played through a [`StepDriver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub visited: usize,
    pub events: usize,
    pub path: Vec<CellIndex>,
}

/// Play `search` to the end tick by tick, recording its states in
/// `overlay`. Only the final path is left in the overlay afterwards.
pub fn play_search<I>(search: I, per_tick: usize, overlay: &mut Overlay) -> RunSummary
where
    I: Iterator<Item = SearchEvent>,
{
    overlay.clear();
    let mut driver = StepDriver::new(search, per_tick);
    let mut summary = RunSummary::default();
    while !driver.is_exhausted() {
        for ev in driver.tick() {
            match ev.kind {
                SearchEventKind::Visited => summary.visited += 1,
                SearchEventKind::OnPath => summary.path.push(ev.pos),
                SearchEventKind::Queued => {}
            }
            overlay.apply(ev);
        }
    }
    overlay.clear_except(SearchEventKind::OnPath);
    summary.events = driver.pulled();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use trailgrid_maze::MazeGen;
    use trailgrid_paths::{Algorithm, path_cost};

    fn idx(row: i32, col: i32) -> CellIndex {
        CellIndex::new(row, col)
    }

    #[test]
    fn render_terrain_and_overlay() {
        let grid = TerrainGrid::new(3, 2).unwrap();
        grid.set_cell(idx(0, 0), CellType::Begin).unwrap();
        grid.set_cell(idx(0, 1), CellType::Wall).unwrap();
        grid.set_cell(idx(1, 2), CellType::Goal).unwrap();
        grid.set_cell(idx(1, 0), CellType::Water).unwrap();
        let mut overlay = Overlay::new();
        overlay.apply(SearchEvent::new(idx(0, 0), SearchEventKind::OnPath));
        overlay.apply(SearchEvent::new(idx(1, 1), SearchEventKind::Queued));
        assert_eq!(render(&grid, &overlay), "S#.\n~+G\n");
    }

    #[test]
    fn overlay_keeps_latest_state() {
        let mut overlay = Overlay::new();
        overlay.apply(SearchEvent::new(idx(0, 0), SearchEventKind::Queued));
        overlay.apply(SearchEvent::new(idx(0, 0), SearchEventKind::Visited));
        overlay.apply(SearchEvent::new(idx(0, 1), SearchEventKind::OnPath));
        assert_eq!(overlay.get(idx(0, 0)), Some(SearchEventKind::Visited));
        overlay.clear_except(SearchEventKind::OnPath);
        assert_eq!(overlay.get(idx(0, 0)), None);
        assert_eq!(overlay.count(SearchEventKind::OnPath), 1);
        overlay.clear();
        assert_eq!(overlay.count(SearchEventKind::OnPath), 0);
    }

    #[test]
    fn driver_pulls_in_ticks() {
        let mut driver = StepDriver::new(0..7, 3);
        assert_eq!(driver.tick(), vec![0, 1, 2]);
        assert!(!driver.is_exhausted());
        assert_eq!(driver.tick(), vec![3, 4, 5]);
        assert_eq!(driver.fast_forward(), vec![6]);
        assert!(driver.is_exhausted());
        assert_eq!(driver.pulled(), 7);
        assert!(driver.tick().is_empty());
    }

    #[test]
    fn zero_tick_size_still_advances() {
        let mut driver = StepDriver::new(0..2, 0);
        assert_eq!(driver.tick(), vec![0]);
    }

    #[test]
    fn maze_then_every_algorithm() {
        let grid = TerrainGrid::new(15, 11).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut maze = StepDriver::new(MazeGen::with_rng(&grid, StdRng::from_rng(&mut rng)), 16);
        maze.tick();
        maze.fast_forward();
        assert!(maze.is_exhausted());
        assert_eq!(maze.pulled(), 15 * 11 + 8 * 6 + 8 * 6 - 1);

        let (start, goal) = grid.choose_random_bounds(&mut rng).unwrap();
        let mut overlay = Overlay::new();
        let mut costs = Vec::new();
        for alg in Algorithm::ALL {
            let search = alg
                .search(&grid, start, goal, StdRng::seed_from_u64(7))
                .unwrap();
            let run = play_search(search, 16, &mut overlay);
            assert_eq!(run.path.first(), Some(&start));
            assert_eq!(run.path.last(), Some(&goal));
            assert_eq!(overlay.count(SearchEventKind::OnPath), run.path.len());
            assert_eq!(overlay.count(SearchEventKind::Visited), 0);
            costs.push(path_cost(&grid, &run.path).unwrap());
        }
        // A perfect maze has a single route, so every algorithm finds it.
        assert!(costs.windows(2).all(|w| w[0] == w[1]));
    }
}
