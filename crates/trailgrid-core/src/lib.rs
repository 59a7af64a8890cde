//! **trailgrid-core**: the costed terrain grid shared by the trailgrid crates.
//!
//! This crate provides cell addressing ([`CellIndex`], [`Extent`]), the
//! terrain types and their costs ([`CellType`]), and [`TerrainGrid`], a
//! shared-buffer grid that searches and generators read and write while an
//! external driver keeps its own handle.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{CellType, IMPASSABLE};
pub use error::GridError;
pub use geom::{CellIndex, Extent, ExtentIter};
pub use grid::{GridIter, TerrainGrid};
