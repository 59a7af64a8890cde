use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::rngs::ThreadRng;
use trailgrid_core::{CellIndex, GridError, TerrainGrid};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dijkstra::Dijkstra;
use crate::event::SearchEvent;
use crate::traits::PathSearch;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Selects one of the search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar];

    /// Short lowercase name, accepted back by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Start a search of this kind from `start` to `goal`.
    pub fn search<R: Rng>(
        self,
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
        rng: R,
    ) -> Result<Search<R>, GridError> {
        Ok(match self {
            Algorithm::Bfs => Search::Bfs(Bfs::with_rng(grid, start, goal, rng)?),
            Algorithm::Dijkstra => Search::Dijkstra(Dijkstra::with_rng(grid, start, goal, rng)?),
            Algorithm::AStar => Search::AStar(AStar::with_rng(grid, start, goal, rng)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A running search of any strategy.
pub enum Search<R = ThreadRng> {
    Bfs(Bfs<R>),
    Dijkstra(Dijkstra<R>),
    AStar(AStar<R>),
}

impl Search<ThreadRng> {
    /// Start a search of kind `algorithm` using the thread-local RNG.
    pub fn new(
        algorithm: Algorithm,
        grid: &TerrainGrid,
        start: CellIndex,
        goal: CellIndex,
    ) -> Result<Self, GridError> {
        algorithm.search(grid, start, goal, rand::rng())
    }
}

impl<R: Rng> Search<R> {
    /// Which strategy is running.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Search::Bfs(_) => Algorithm::Bfs,
            Search::Dijkstra(_) => Algorithm::Dijkstra,
            Search::AStar(_) => Algorithm::AStar,
        }
    }
}

impl<R: Rng> Iterator for Search<R> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        match self {
            Search::Bfs(s) => s.next(),
            Search::Dijkstra(s) => s.next(),
            Search::AStar(s) => s.next(),
        }
    }
}

impl<R: Rng> PathSearch for Search<R> {
    fn start(&self) -> CellIndex {
        match self {
            Search::Bfs(s) => s.start(),
            Search::Dijkstra(s) => s.start(),
            Search::AStar(s) => s.start(),
        }
    }

    fn goal(&self) -> CellIndex {
        match self {
            Search::Bfs(s) => s.goal(),
            Search::Dijkstra(s) => s.goal(),
            Search::AStar(s) => s.goal(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Search::Bfs(s) => s.is_finished(),
            Search::Dijkstra(s) => s.is_finished(),
            Search::AStar(s) => s.is_finished(),
        }
    }
}
