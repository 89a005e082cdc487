//! Markup names and glyphs used by the sorter

use serde::{Deserialize, Serialize};

use crate::order::SortOrder;

/// Configuration of the markup contract.
///
/// Every field has a default matching the conventional markup
/// (`<table class="sortable-table">`, `<th data-sort="number">`, ...), and
/// missing JSON fields fall back to those defaults.
///
/// ```
/// use sortable_tables_core::SorterConfig;
///
/// let config = SorterConfig::from_json(r#"{ "table_class": "grid" }"#).unwrap();
/// assert_eq!(config.table_class, "grid");
/// assert_eq!(config.sort_type_attr, "data-sort");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
	/// Class marking a sortable table
	pub table_class: String,
	/// Header attribute declaring the sort type
	pub sort_type_attr: String,
	/// Header attribute exposing the current order
	pub order_attr: String,
	/// Cell attribute overriding the display text for comparison
	pub value_attr: String,
	/// Class of the indicator element appended to each header
	pub indicator_class: String,
	/// Tag of the indicator element
	pub indicator_tag: String,
	/// Indicator text of an unsorted header
	pub neutral_glyph: String,
	/// Indicator text of an ascending header
	pub ascending_glyph: String,
	/// Indicator text of a descending header
	pub descending_glyph: String,
	/// Attribute marking a root container the sorter is attached to
	pub root_marker_attr: String,
	/// Attribute marking a table whose headers are wired
	pub bound_marker_attr: String,
}

impl Default for SorterConfig {
	fn default() -> Self {
		Self {
			table_class: "sortable-table".to_string(),
			sort_type_attr: "data-sort".to_string(),
			order_attr: "data-order".to_string(),
			value_attr: "data-value".to_string(),
			indicator_class: "sort-indicator".to_string(),
			indicator_tag: "span".to_string(),
			neutral_glyph: " ↕".to_string(),
			ascending_glyph: " ▲".to_string(),
			descending_glyph: " ▼".to_string(),
			root_marker_attr: "data-sortable-root".to_string(),
			bound_marker_attr: "data-sortable-bound".to_string(),
		}
	}
}

impl SorterConfig {
	/// Creates the default configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a configuration from JSON; absent fields keep their defaults
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Sets the sortable table class
	pub fn table_class(mut self, class: impl Into<String>) -> Self {
		self.table_class = class.into();
		self
	}

	/// Sets the sort-type attribute name
	pub fn sort_type_attr(mut self, name: impl Into<String>) -> Self {
		self.sort_type_attr = name.into();
		self
	}

	/// Sets the order attribute name
	pub fn order_attr(mut self, name: impl Into<String>) -> Self {
		self.order_attr = name.into();
		self
	}

	/// Sets the override value attribute name
	pub fn value_attr(mut self, name: impl Into<String>) -> Self {
		self.value_attr = name.into();
		self
	}

	/// Sets the indicator class
	pub fn indicator_class(mut self, class: impl Into<String>) -> Self {
		self.indicator_class = class.into();
		self
	}

	/// Sets the three indicator glyphs
	pub fn glyphs(
		mut self,
		neutral: impl Into<String>,
		ascending: impl Into<String>,
		descending: impl Into<String>,
	) -> Self {
		self.neutral_glyph = neutral.into();
		self.ascending_glyph = ascending.into();
		self.descending_glyph = descending.into();
		self
	}

	/// Returns the indicator glyph for a header's order
	pub fn glyph_for(&self, order: Option<SortOrder>) -> &str {
		match order {
			None => &self.neutral_glyph,
			Some(SortOrder::Ascending) => &self.ascending_glyph,
			Some(SortOrder::Descending) => &self.descending_glyph,
		}
	}
}
