use trailgrid_core::{CellIndex, GridError, TerrainGrid};

use crate::event::{SearchEvent, SearchEventKind};

/// Collect the OnPath cells of an event sequence, in order.
///
/// Returns an empty vector when the search found no path.
pub fn path_from_events<I>(events: I) -> Vec<CellIndex>
where
    I: IntoIterator<Item = SearchEvent>,
{
    events
        .into_iter()
        .filter(|e| e.kind == SearchEventKind::OnPath)
        .map(|e| e.pos)
        .collect()
}

/// Total cost of walking `path`: the sum of the costs of every cell after
/// the first.
pub fn path_cost(grid: &TerrainGrid, path: &[CellIndex]) -> Result<u32, GridError> {
    path.iter()
        .skip(1)
        .try_fold(0u32, |acc, &p| Ok(acc.saturating_add(grid.cell_cost(p)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailgrid_core::CellType;

    #[test]
    fn cost_skips_start_cell() {
        let grid = TerrainGrid::new(3, 1).unwrap();
        grid.set_cell(CellIndex::new(0, 0), CellType::Water).unwrap();
        grid.set_cell(CellIndex::new(0, 1), CellType::Sand).unwrap();
        let path = [
            CellIndex::new(0, 0),
            CellIndex::new(0, 1),
            CellIndex::new(0, 2),
        ];
        assert_eq!(path_cost(&grid, &path).unwrap(), 3);
        assert_eq!(path_cost(&grid, &path[..1]).unwrap(), 0);
        assert_eq!(path_cost(&grid, &[]).unwrap(), 0);
    }

    #[test]
    fn cost_rejects_out_of_bounds() {
        let grid = TerrainGrid::new(2, 2).unwrap();
        let path = [CellIndex::new(0, 0), CellIndex::new(0, 2)];
        assert!(path_cost(&grid, &path).is_err());
    }

    #[test]
    fn only_path_events_are_kept() {
        let events = vec![
            SearchEvent::new(CellIndex::new(0, 0), SearchEventKind::Visited),
            SearchEvent::new(CellIndex::new(0, 1), SearchEventKind::Queued),
            SearchEvent::new(CellIndex::new(0, 0), SearchEventKind::OnPath),
            SearchEvent::new(CellIndex::new(0, 1), SearchEventKind::OnPath),
        ];
        assert_eq!(
            path_from_events(events),
            vec![CellIndex::new(0, 0), CellIndex::new(0, 1)]
        );
    }
}
