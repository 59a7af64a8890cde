//! Geometry primitives: [`CellIndex`] and [`Extent`].
//!
//! Cells are addressed by `(row, col)`, rows growing downwards and columns
//! growing to the right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// CellIndex
// ---------------------------------------------------------------------------

/// A 0-indexed `(row, col)` grid coordinate.
///
/// Ordering is row-major: first by row, then by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex {
    pub row: i32,
    pub col: i32,
}

impl CellIndex {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell index.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return an index shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four axis-aligned neighbours (up, down, left, right).
    ///
    /// No bounds check is done; callers filter with [`Extent::contains`].
    #[inline]
    pub const fn neighbors_4(self) -> [CellIndex; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for CellIndex {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for CellIndex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for CellIndex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, height) × [0, width)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    /// Create a new extent. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the extent covers no cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `idx` lies inside the extent.
    #[inline]
    pub fn contains(self, idx: CellIndex) -> bool {
        idx.row >= 0 && idx.row < self.height && idx.col >= 0 && idx.col < self.width
    }

    /// Flat row-major offset of `idx`, or `None` if out of bounds.
    #[inline]
    pub fn offset(self, idx: CellIndex) -> Option<usize> {
        if !self.contains(idx) {
            return None;
        }
        Some(idx.row as usize * self.width as usize + idx.col as usize)
    }

    /// Inverse of [`offset`](Self::offset).
    #[inline]
    pub fn index_at(self, offset: usize) -> CellIndex {
        let w = self.width.max(1) as usize;
        CellIndex::new((offset / w) as i32, (offset % w) as i32)
    }

    /// Row-major iterator over every cell in the extent.
    #[inline]
    pub fn iter(self) -> ExtentIter {
        ExtentIter {
            extent: self,
            cur: CellIndex::ZERO,
        }
    }
}

impl IntoIterator for Extent {
    type Item = CellIndex;
    type IntoIter = ExtentIter;
    #[inline]
    fn into_iter(self) -> ExtentIter {
        self.iter()
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// ExtentIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of an [`Extent`].
#[derive(Clone, Debug)]
pub struct ExtentIter {
    extent: Extent,
    cur: CellIndex,
}

impl Iterator for ExtentIter {
    type Item = CellIndex;

    #[inline]
    fn next(&mut self) -> Option<CellIndex> {
        if self.cur.row >= self.extent.height || self.extent.is_empty() {
            return None;
        }
        let idx = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.extent.width {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.extent.is_empty() || self.cur.row >= self.extent.height {
            return (0, Some(0));
        }
        let w = self.extent.width as usize;
        let remaining_in_row = (self.extent.width - self.cur.col) as usize;
        let remaining_rows = (self.extent.height - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for ExtentIter {}
