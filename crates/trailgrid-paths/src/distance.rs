use trailgrid_core::CellIndex;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: CellIndex, b: CellIndex) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = CellIndex::new(0, 0);
        let b = CellIndex::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
