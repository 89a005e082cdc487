//! # Sortable Tables
//!
//! Click-to-sort behavior for HTML tables, written in Rust and compiled to
//! WebAssembly.
//!
//! Tables opt in with a marker class and headers declare how their column
//! sorts (`text`, `number` or `date`). Clicking a header toggles between
//! descending and ascending order, marks the header with `data-order` and a
//! glyph, and reorders the body rows in place. A cell's `data-value`
//! attribute overrides its displayed text as the sort key.
//!
//! ## Crates
//!
//! - `sortable-tables-core`: sort orders, comparators, sort state, configuration
//! - `sortable-tables-dom`: DOM abstraction, sorter wiring, browser backend
//!
//! ## Feature Flags
//!
//! - `debug-hooks` - Logs every sort through `debug_log!` in debug builds
//!
//! ## Quick Example
//!
//! ```rust
//! use sortable_tables::prelude::*;
//! use sortable_tables::memory::MemoryElement;
//!
//! let header = MemoryElement::new("th").with_attr("data-sort", "text").with_text("Name");
//! let body = MemoryElement::new("tbody")
//! 	.with_child(MemoryElement::new("tr").with_child(MemoryElement::new("td").with_text("Apple")))
//! 	.with_child(MemoryElement::new("tr").with_child(MemoryElement::new("td").with_text("cherry")));
//! let table = MemoryElement::new("table")
//! 	.with_class("sortable-table")
//! 	.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(header.clone())))
//! 	.with_child(body.clone());
//!
//! let _handle = TableSorter::new().attach(&table)?;
//! header.click();
//!
//! assert_eq!(body.text_content(), "cherryApple");
//! # Ok::<(), SortError>(())
//! ```
//!
//! In the browser, call `installSortableTables()` from JavaScript (or
//! `sortable_tables::install` from Rust) to wire the whole document once it
//! has loaded.

#![warn(missing_docs)]

pub use sortable_tables_core::{
	Collator, ColumnComparator, Comparator, DateComparator, DefaultCollator, FoldingCollator,
	NumberComparator, ParseSortOrderError, SortOrder, SortType, SorterConfig, TableSortState,
	TextComparator, parse_date, parse_number, sort_by_key,
};
pub use sortable_tables_dom::{
	ClickHandler, DomElement, Result, SortError, SortableHeader, SortableTable, SorterHandle,
	TableSorter, dom, memory,
};
#[cfg(target_arch = "wasm32")]
pub use sortable_tables_dom::{WebElement, install, uninstall, web};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::{
		DomElement, SortError, SortOrder, SortType, SorterConfig, SorterHandle, TableSorter,
	};

	#[cfg(target_arch = "wasm32")]
	pub use crate::{WebElement, install};
}
