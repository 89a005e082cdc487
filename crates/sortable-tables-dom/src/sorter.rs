//! Click-to-sort wiring for sortable tables
//!
//! [`TableSorter::attach`] scans a root container for tables carrying the
//! configured marker class, decorates every header declaring a sort type
//! and registers one click listener per header. Each click toggles the
//! table's [`TableSortState`], re-renders the header attributes and
//! indicators from it, and moves the body rows into sorted order.
//!
//! ```
//! use sortable_tables_dom::memory::MemoryElement;
//! use sortable_tables_dom::{DomElement, SortOrder, TableSorter};
//!
//! let header = MemoryElement::new("th").with_attr("data-sort", "number").with_text("Price");
//! let body = MemoryElement::new("tbody")
//! 	.with_child(MemoryElement::new("tr").with_child(MemoryElement::new("td").with_text("$300")))
//! 	.with_child(MemoryElement::new("tr").with_child(MemoryElement::new("td").with_text("$45")));
//! let table = MemoryElement::new("table")
//! 	.with_class("sortable-table")
//! 	.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(header.clone())))
//! 	.with_child(body.clone());
//!
//! let handle = TableSorter::new().attach(&table).unwrap();
//! header.click();
//!
//! assert_eq!(header.attribute("data-order").as_deref(), Some("desc"));
//! assert_eq!(body.text_content(), "$300$45");
//! assert_eq!(handle.tables().next().unwrap().state().current_order(), Some(SortOrder::Descending));
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sortable_tables_core::{ColumnComparator, SortOrder, SortType, SorterConfig, TableSortState};

use crate::dom::{
	DomElement, body_rows, cell_index, cell_value, find_all, find_in_table, row_cells, table_body,
};
use crate::error::{Result, SortError};
use crate::{debug_log, info_log, warn_log};

const CURSOR: (&str, &str) = ("cursor", "pointer");
const USER_SELECT: (&str, &str) = ("user-select", "none");

/// A header cell declaring a sort type
#[derive(Debug, Clone)]
pub struct SortableHeader<E> {
	element: E,
	column: usize,
	sort_type: SortType,
}

impl<E> SortableHeader<E> {
	/// Returns the header element
	pub fn element(&self) -> &E {
		&self.element
	}

	/// Returns the zero-based column this header sorts
	pub fn column(&self) -> usize {
		self.column
	}

	/// Returns the declared sort type
	pub fn sort_type(&self) -> SortType {
		self.sort_type
	}
}

/// A table wired for click-to-sort, with its sort state
#[derive(Debug)]
pub struct SortableTable<E> {
	element: E,
	headers: Vec<SortableHeader<E>>,
	state: RefCell<TableSortState>,
	config: Rc<SorterConfig>,
}

impl<E: DomElement> SortableTable<E> {
	/// Returns the table element
	pub fn element(&self) -> &E {
		&self.element
	}

	/// Returns the sortable headers in document order
	pub fn headers(&self) -> &[SortableHeader<E>] {
		&self.headers
	}

	/// Returns a snapshot of the sort state
	pub fn state(&self) -> TableSortState {
		*self.state.borrow()
	}

	/// Handles a click on the header at `index` (among sortable headers).
	///
	/// Toggles the order, re-renders every header of the table and sorts
	/// the body rows. Header state is updated even when the table has no
	/// body, in which case [`SortError::MissingBody`] is returned.
	pub fn click_header(&self, index: usize) -> Result<SortOrder> {
		let header = self
			.headers
			.get(index)
			.ok_or(SortError::UnknownHeader(index))?;

		let order = self.state.borrow_mut().toggle(index);
		self.render_headers()?;
		self.sort_rows(header.column, header.sort_type, order)?;

		debug_log!(
			"Sorted column {} ({}) {}",
			header.column,
			header.sort_type,
			order
		);
		Ok(order)
	}

	/// Projects the sort state onto header attributes and indicators
	fn render_headers(&self) -> Result<()> {
		let state = self.state();
		for (index, header) in self.headers.iter().enumerate() {
			let order = state.order_of(index);
			match order {
				Some(order) => header
					.element
					.set_attribute(&self.config.order_attr, order.as_attr())?,
				None => header.element.remove_attribute(&self.config.order_attr)?,
			}
			render_indicator(&header.element, &self.config, self.config.glyph_for(order))?;
		}
		Ok(())
	}

	fn sort_rows(&self, column: usize, sort_type: SortType, order: SortOrder) -> Result<()> {
		let body = table_body(&self.element).ok_or(SortError::MissingBody)?;
		let rows = body_rows(&body);

		let sorted = ColumnComparator::for_type(sort_type).sort(rows, order, |row| {
			row_cells(row)
				.get(column)
				.map(|cell| cell_value(cell, &self.config.value_attr))
		});

		for row in &sorted {
			body.append_child(row)?;
		}
		Ok(())
	}
}

/// Finds the header's indicator, creating it if missing, and sets its glyph
fn render_indicator<E: DomElement>(header: &E, config: &SorterConfig, glyph: &str) -> Result<()> {
	let indicator = match find_indicator(header, config) {
		Some(indicator) => indicator,
		None => {
			let indicator = header.create_element(&config.indicator_tag)?;
			indicator.set_attribute("class", &config.indicator_class)?;
			header.append_child(&indicator)?;
			indicator
		}
	};
	indicator.set_text_content(glyph);
	Ok(())
}

fn find_indicator<E: DomElement>(header: &E, config: &SorterConfig) -> Option<E> {
	header
		.children()
		.into_iter()
		.find(|child| child.has_class(&config.indicator_class))
}

/// Attaches click-to-sort behavior to the sortable tables of a container
#[derive(Debug, Clone, Default)]
pub struct TableSorter {
	config: Rc<SorterConfig>,
}

impl TableSorter {
	/// Creates a sorter with the default markup configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a sorter with a custom configuration
	pub fn with_config(config: SorterConfig) -> Self {
		Self {
			config: Rc::new(config),
		}
	}

	/// Creates a sorter from a JSON configuration
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(Self::with_config(SorterConfig::from_json(json)?))
	}

	/// Returns the configuration
	pub fn config(&self) -> &SorterConfig {
		&self.config
	}

	/// Wires every sortable table under `root` (including `root` itself).
	///
	/// A container can be attached once; a second call returns
	/// [`SortError::AlreadyAttached`] until the handle is dropped. Tables
	/// already wired through another container are skipped, so every
	/// header gets exactly one listener.
	pub fn attach<E: DomElement>(&self, root: &E) -> Result<SorterHandle<E>> {
		if root.has_attribute(&self.config.root_marker_attr) {
			return Err(SortError::AlreadyAttached);
		}
		root.set_attribute(&self.config.root_marker_attr, "")?;

		let mut handle = SorterHandle {
			root: root.clone(),
			config: Rc::clone(&self.config),
			tables: Vec::new(),
		};

		let tables = find_all(root, |e| e.has_class(&self.config.table_class));
		for table in tables {
			if table.has_attribute(&self.config.bound_marker_attr) {
				debug_log!("Skipping table already wired by another container");
				continue;
			}
			handle.bind(table)?;
		}

		info_log!(
			"Attached sorter to {} table(s), {} header(s)",
			handle.table_count(),
			handle.header_count()
		);
		Ok(handle)
	}
}

struct BoundTable<E: DomElement> {
	table: Rc<SortableTable<E>>,
	listeners: Vec<(E, E::Listener)>,
}

/// Disposer for an attached sorter.
///
/// Dropping the handle (or calling [`detach`](Self::detach)) removes every
/// listener, indicator, inline style, order attribute and marker the sorter
/// added, so the container can be attached again. Use
/// [`forget`](Self::forget) to keep tables sortable for the page's lifetime.
#[must_use = "dropping the handle detaches the sorter"]
pub struct SorterHandle<E: DomElement> {
	root: E,
	config: Rc<SorterConfig>,
	tables: Vec<BoundTable<E>>,
}

impl<E: DomElement> SorterHandle<E> {
	/// Returns the root container
	pub fn root(&self) -> &E {
		&self.root
	}

	/// Returns the wired tables
	pub fn tables(&self) -> impl Iterator<Item = &SortableTable<E>> {
		self.tables.iter().map(|bound| bound.table.as_ref())
	}

	/// Returns the number of wired tables
	pub fn table_count(&self) -> usize {
		self.tables.len()
	}

	/// Returns the number of wired headers across all tables
	pub fn header_count(&self) -> usize {
		self.tables.iter().map(|bound| bound.listeners.len()).sum()
	}

	/// Removes everything the sorter added
	pub fn detach(self) {
		drop(self);
	}

	/// Keeps the sorter wired without retaining the handle
	pub fn forget(self) {
		std::mem::forget(self);
	}

	fn bind(&mut self, element: E) -> Result<()> {
		let config = Rc::clone(&self.config);
		let headers: Vec<SortableHeader<E>> =
			find_in_table(&element, |e| e.is_tag("th") && e.has_attribute(&config.sort_type_attr))
				.into_iter()
				.enumerate()
				.map(|(position, header)| SortableHeader {
					column: cell_index(&header).unwrap_or(position),
					sort_type: SortType::from_attr(header.attribute(&config.sort_type_attr).as_deref()),
					element: header,
				})
				.collect();

		let table = Rc::new(SortableTable {
			element: element.clone(),
			headers,
			state: RefCell::new(TableSortState::new()),
			config: Rc::clone(&config),
		});

		element.set_attribute(&config.bound_marker_attr, "")?;
		self.tables.push(BoundTable {
			table: Rc::clone(&table),
			listeners: Vec::new(),
		});

		for (index, header) in table.headers.iter().enumerate() {
			let header = &header.element;
			header.set_style(CURSOR.0, CURSOR.1)?;
			header.set_style(USER_SELECT.0, USER_SELECT.1)?;

			let indicator = header.create_element(&config.indicator_tag)?;
			indicator.set_attribute("class", &config.indicator_class)?;
			indicator.set_text_content(&config.neutral_glyph);
			header.append_child(&indicator)?;

			let weak: Weak<SortableTable<E>> = Rc::downgrade(&table);
			let listener = header.add_click_listener(Box::new(move || {
				if let Some(table) = weak.upgrade() {
					if let Err(err) = table.click_header(index) {
						warn_log!("Table sort aborted: {}", err);
					}
				}
			}))?;

			if let Some(bound) = self.tables.last_mut() {
				bound.listeners.push((header.clone(), listener));
			}
		}
		Ok(())
	}

	fn release(&mut self) {
		for bound in self.tables.drain(..) {
			for (element, listener) in bound.listeners {
				element.remove_click_listener(listener);
			}

			for header in &bound.table.headers {
				if let Err(err) = clean_header(&header.element, &self.config) {
					warn_log!("Failed to restore header: {}", err);
				}
			}

			bound.table.state.borrow_mut().reset();
			if let Err(err) = bound
				.table
				.element
				.remove_attribute(&self.config.bound_marker_attr)
			{
				warn_log!("Failed to unmark table: {}", err);
			}
		}

		if let Err(err) = self.root.remove_attribute(&self.config.root_marker_attr) {
			warn_log!("Failed to unmark root: {}", err);
		}
	}
}

fn clean_header<E: DomElement>(header: &E, config: &SorterConfig) -> Result<()> {
	while let Some(indicator) = find_indicator(header, config) {
		header.remove_child(&indicator)?;
	}
	header.remove_style(CURSOR.0)?;
	header.remove_style(USER_SELECT.0)?;
	header.remove_attribute(&config.order_attr)
}

impl<E: DomElement> Drop for SorterHandle<E> {
	fn drop(&mut self) {
		self.release();
	}
}

impl<E: DomElement> std::fmt::Debug for SorterHandle<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SorterHandle")
			.field("root", &self.root)
			.field("tables", &self.table_count())
			.field("headers", &self.header_count())
			.finish()
	}
}
