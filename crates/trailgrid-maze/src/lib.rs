//! Maze generation for trailgrid.
//!
//! [`MazeGen`] turns a [`TerrainGrid`](trailgrid_core::TerrainGrid) into a
//! perfect maze by randomized depth-first carving, one event per pull:
//!
//! 1. **Preparing**: every cell becomes Wall, in row-major order.
//! 2. **Digging**: rooms (cells with even row and even column) are carved
//!    from a random origin, knocking out the wall cell between each room
//!    and the next unvisited one, backtracking when stuck.
//!
//! The carved cells form a tree: exactly one simple path links any two of
//! them.

pub mod carve;
pub mod event;
pub mod maze;

pub use carve::CarveWeights;
pub use event::{GenerationEvent, GenerationEventKind};
pub use maze::{MazeGen, Phase, generate};
