//! The [`TerrainGrid`] type: a matrix of [`CellType`]s behind a shared buffer.
//!
//! A `TerrainGrid` is a *handle*. Cloning it yields another handle to the
//! **same** storage, so a running search or maze generator can keep a clone
//! while the driver keeps painting through its own. All mutators therefore
//! take `&self`.

use std::cell::RefCell;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

use crate::cell::CellType;
use crate::error::GridError;
use crate::geom::{CellIndex, Extent};

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<CellType>,
    extent: Extent,
}

// ---------------------------------------------------------------------------
// TerrainGrid
// ---------------------------------------------------------------------------

/// A `height × width` terrain matrix backed by shared storage.
///
/// Begin and Goal uniqueness is not enforced: writing either simply
/// overwrites the target cell.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    buffer: Rc<RefCell<GridBuffer>>,
    extent: Extent,
}

impl TerrainGrid {
    /// Create a new grid with every cell [`CellType::Empty`].
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let extent = Extent::new(width, height);
        Ok(Self {
            buffer: Rc::new(RefCell::new(GridBuffer {
                cells: vec![CellType::Empty; extent.len()],
                extent,
            })),
            extent,
        })
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.extent.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.extent.height
    }

    /// Whether `idx` lies inside the grid.
    #[inline]
    pub fn contains(&self, idx: CellIndex) -> bool {
        self.extent.contains(idx)
    }

    #[inline]
    fn offset(&self, idx: CellIndex) -> Result<usize, GridError> {
        self.extent.offset(idx).ok_or(GridError::OutOfBounds {
            idx,
            width: self.extent.width,
            height: self.extent.height,
        })
    }

    /// Read the terrain at `idx`.
    pub fn cell_type(&self, idx: CellIndex) -> Result<CellType, GridError> {
        let i = self.offset(idx)?;
        Ok(self.buffer.borrow().cells[i])
    }

    /// Overwrite the terrain at `idx`.
    pub fn set_cell(&self, idx: CellIndex, ty: CellType) -> Result<(), GridError> {
        let i = self.offset(idx)?;
        self.buffer.borrow_mut().cells[i] = ty;
        Ok(())
    }

    /// Write `ty` at `idx` only if it differs from the current terrain.
    ///
    /// Returns whether the cell changed.
    pub fn paint(&self, idx: CellIndex, ty: CellType) -> Result<bool, GridError> {
        let i = self.offset(idx)?;
        let mut buf = self.buffer.borrow_mut();
        if buf.cells[i] == ty {
            return Ok(false);
        }
        buf.cells[i] = ty;
        Ok(true)
    }

    /// Cost of stepping into `idx`; Wall yields [`IMPASSABLE`](crate::IMPASSABLE).
    pub fn cell_cost(&self, idx: CellIndex) -> Result<u32, GridError> {
        Ok(self.cell_type(idx)?.cost())
    }

    /// Whether a search may step into `idx`. Out-of-bounds cells are not.
    pub fn is_passable(&self, idx: CellIndex) -> bool {
        self.cell_type(idx).is_ok_and(CellType::is_passable)
    }

    /// Reset every cell to [`CellType::Empty`].
    pub fn reset(&self) {
        self.fill(CellType::Empty);
    }

    /// Set every cell to `ty`.
    pub fn fill(&self, ty: CellType) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            *c = ty;
        }
    }

    /// Count how many cells hold `ty`.
    pub fn count(&self, ty: CellType) -> usize {
        self.buffer.borrow().cells.iter().filter(|&&c| c == ty).count()
    }

    /// The in-bounds axis-aligned neighbours of `idx`, in random order.
    ///
    /// Terrain is not filtered: callers decide what is traversable. The
    /// order is reshuffled on every call so carving and exploration carry
    /// no directional bias.
    pub fn neighbours(
        &self,
        idx: CellIndex,
        rng: &mut impl Rng,
    ) -> Result<Vec<CellIndex>, GridError> {
        self.offset(idx)?;
        let mut out: Vec<CellIndex> = idx
            .neighbors_4()
            .into_iter()
            .filter(|&n| self.extent.contains(n))
            .collect();
        out.shuffle(rng);
        Ok(out)
    }

    /// Set `idx` to `ty`, or back to Empty if it already holds `ty`.
    ///
    /// Returns the resulting terrain so a paint tool can keep dragging with
    /// the same value.
    pub fn toggle_cell_type(&self, idx: CellIndex, ty: CellType) -> Result<CellType, GridError> {
        let i = self.offset(idx)?;
        let mut buf = self.buffer.borrow_mut();
        let value = if buf.cells[i] == ty {
            CellType::Empty
        } else {
            ty
        };
        buf.cells[i] = value;
        Ok(value)
    }

    /// Pick a random start and goal among non-Wall cells and mark them.
    ///
    /// Both cells are drawn uniformly *with replacement*, so start and goal
    /// may coincide; in that case the cell ends up as Goal. Returns `None`
    /// when every cell is a Wall.
    pub fn choose_random_bounds(&self, rng: &mut impl Rng) -> Option<(CellIndex, CellIndex)> {
        let candidates: Vec<CellIndex> = {
            let buf = self.buffer.borrow();
            self.extent
                .iter()
                .zip(buf.cells.iter())
                .filter(|(_, c)| c.is_passable())
                .map(|(idx, _)| idx)
                .collect()
        };
        if candidates.is_empty() {
            log::debug!("choose_random_bounds: no open cell in {} grid", self.extent);
            return None;
        }
        let start = candidates[rng.random_range(0..candidates.len())];
        let goal = candidates[rng.random_range(0..candidates.len())];
        let mut buf = self.buffer.borrow_mut();
        if let Some(i) = buf.extent.offset(start) {
            buf.cells[i] = CellType::Begin;
        }
        if let Some(i) = buf.extent.offset(goal) {
            buf.cells[i] = CellType::Goal;
        }
        log::debug!("choose_random_bounds: start {start}, goal {goal}");
        Some((start, goal))
    }

    /// Iterate over `(CellIndex, CellType)` pairs in row-major order.
    ///
    /// The iterator works on a snapshot, so the grid may be mutated while
    /// it is alive.
    pub fn iter(&self) -> GridIter {
        let buf = self.buffer.borrow();
        let items: Vec<(CellIndex, CellType)> =
            self.extent.iter().zip(buf.cells.iter().copied()).collect();
        GridIter { items, pos: 0 }
    }
}

/// Iterator over `(CellIndex, CellType)` pairs of a [`TerrainGrid`] snapshot.
pub struct GridIter {
    items: Vec<(CellIndex, CellType)>,
    pos: usize,
}

impl Iterator for GridIter {
    type Item = (CellIndex, CellType);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos).copied()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter {}

impl IntoIterator for &TerrainGrid {
    type Item = (CellIndex, CellType);
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}
