//! Sorting logic for click-to-sort HTML tables
//!
//! This crate holds everything that does not touch the DOM: sort orders,
//! column sort types, typed comparators, the per-table sort state record and
//! the markup configuration. `sortable-tables-dom` wires it to elements.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[SortType] --> B[ColumnComparator]
//!     B --> C[TextComparator]
//!     B --> D[NumberComparator]
//!     B --> E[DateComparator]
//!     C --> F[Collator]
//!     G[TableSortState] --> H[SortOrder]
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod collation;
pub mod comparator;
pub mod config;
pub mod order;
pub mod state;
pub mod value;

// Re-exports for convenience
pub use collation::{Collator, DefaultCollator, FoldingCollator};
#[cfg(target_arch = "wasm32")]
pub use collation::JsCollator;
pub use comparator::{
	ColumnComparator, Comparator, DateComparator, NumberComparator, TextComparator, sort_by_key,
};
pub use config::SorterConfig;
pub use order::{ParseSortOrderError, SortOrder, SortType};
pub use state::TableSortState;
pub use value::{parse_date, parse_number};
