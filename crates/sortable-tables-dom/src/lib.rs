//! DOM wiring for click-to-sort HTML tables
//!
//! Markup opts in declaratively:
//!
//! ```html
//! <table class="sortable-table">
//!   <thead>
//!     <tr>
//!       <th data-sort="text">Name</th>
//!       <th data-sort="number">Price</th>
//!       <th data-sort="date">Added</th>
//!     </tr>
//!   </thead>
//!   <tbody>
//!     <tr><td>Widget</td><td>$1,200</td><td data-value="2023-01-05">Jan 5</td></tr>
//!   </tbody>
//! </table>
//! ```
//!
//! [`TableSorter::attach`] wires a container and returns a [`SorterHandle`]
//! that undoes everything when dropped. Elements are reached through the
//! [`DomElement`] trait, implemented for live documents by `web::WebElement`
//! (WASM only) and for native code by [`memory::MemoryElement`].
//!
//! ## Modules
//!
//! - [`dom`]: DOM abstraction and table traversal helpers
//! - [`memory`]: in-memory DOM backend
//! - [`sorter`]: table sorter, per-table state and disposer
//! - [`error`]: error types
//! - [`logging`]: console/tracing logging macros
//! - `web`: `web-sys` backend and document-ready installation (WASM only)

#![warn(missing_docs)]

pub mod dom;
pub mod error;
pub mod logging;
pub mod memory;
pub mod sorter;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use dom::{ClickHandler, DomElement};
pub use error::{Result, SortError};
pub use sorter::{SortableHeader, SortableTable, SorterHandle, TableSorter};
pub use sortable_tables_core::{SortOrder, SortType, SorterConfig, TableSortState};
#[cfg(target_arch = "wasm32")]
pub use web::{WebElement, install, uninstall};
