//! Per-table sort state

use crate::order::SortOrder;

/// Sort state of one table: which header was clicked last, and how.
///
/// Headers are identified by their index among the table's sortable
/// headers, not by the column they sort, so two headers over the same
/// column (a `thead` row repeated in `tfoot`) keep separate orders. This
/// record is the source of truth for a table's headers; order attributes
/// and indicator glyphs in the markup are rendered from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSortState {
	sorted: Option<(usize, SortOrder)>,
}

impl TableSortState {
	/// Creates an unsorted state
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the index of the last clicked header
	pub fn sorted_header(&self) -> Option<usize> {
		self.sorted.map(|(header, _)| header)
	}

	/// Returns the order of the last sort
	pub fn current_order(&self) -> Option<SortOrder> {
		self.sorted.map(|(_, order)| order)
	}

	/// Returns the order shown on `header`, if it is the sorted one
	pub fn order_of(&self, header: usize) -> Option<SortOrder> {
		match self.sorted {
			Some((sorted, order)) if sorted == header => Some(order),
			_ => None,
		}
	}

	/// Records a click on `header` and returns the new order.
	///
	/// A header without a stored order counts as ascending, so the first
	/// click sorts descending and later clicks alternate. Clicking another
	/// header discards the previous header's order.
	pub fn toggle(&mut self, header: usize) -> SortOrder {
		let current = self.order_of(header).unwrap_or(SortOrder::Ascending);
		let next = current.toggle();
		self.sorted = Some((header, next));
		next
	}

	/// Clears the sort state
	pub fn reset(&mut self) {
		self.sorted = None;
	}
}
