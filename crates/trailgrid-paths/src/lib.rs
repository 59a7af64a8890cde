//! Step-by-step path searches over a [`TerrainGrid`](trailgrid_core::TerrainGrid).
//!
//! Three interchangeable strategies share one interface:
//!
//! - **BFS** fewest hops, terrain cost ignored ([`Bfs`])
//! - **Dijkstra** cheapest accumulated terrain cost ([`Dijkstra`])
//! - **A\*** Dijkstra guided by the Manhattan distance to the goal ([`AStar`])
//!
//! Each search is an [`Iterator`] of [`SearchEvent`]s. Nothing runs until
//! the caller pulls: one `next()` performs at most one frontier expansion,
//! so a driver decides the pace, can pause, and cancels by dropping the
//! search. The [`Search`] enum selects a strategy at runtime from an
//! [`Algorithm`].
//!
//! Neighbour order is shuffled on every expansion with the RNG the search
//! was built with; seed it for reproducible runs.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod event;
mod frontier;
mod path;
mod search;
mod state;
mod traits;
mod weighted;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use event::{SearchEvent, SearchEventKind};
pub use path::{path_cost, path_from_events};
pub use search::{Algorithm, ParseAlgorithmError, Search};
pub use traits::PathSearch;
