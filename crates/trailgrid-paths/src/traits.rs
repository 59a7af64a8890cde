use trailgrid_core::CellIndex;

use crate::event::SearchEvent;

/// Shared interface of the step-by-step searches.
///
/// Each call to [`Iterator::next`] advances the search by at most one
/// frontier expansion and returns the next buffered event. Dropping the
/// search cancels it.
pub trait PathSearch: Iterator<Item = SearchEvent> {
    /// The cell the search started from.
    fn start(&self) -> CellIndex;

    /// The cell the search is looking for.
    fn goal(&self) -> CellIndex;

    /// Whether the search has emitted its last event.
    fn is_finished(&self) -> bool;
}
