//! Sort order and column sort types

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
	/// Ascending order (`asc`)
	#[serde(rename = "asc")]
	Ascending,
	/// Descending order (`desc`)
	#[serde(rename = "desc")]
	Descending,
}

impl SortOrder {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the attribute value used in markup (`asc` / `desc`)
	pub fn as_attr(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Applies this direction to an ascending comparison result
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_attr())
	}
}

/// Error returned when a string is not `asc` or `desc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortOrderError(String);

impl fmt::Display for ParseSortOrderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid sort order '{}', expected 'asc' or 'desc'", self.0)
	}
}

impl std::error::Error for ParseSortOrderError {}

impl FromStr for SortOrder {
	type Err = ParseSortOrderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"asc" => Ok(Self::Ascending),
			"desc" => Ok(Self::Descending),
			other => Err(ParseSortOrderError(other.to_string())),
		}
	}
}

/// Comparator kind declared by a header's sort-type attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
	/// Locale-aware string comparison
	#[default]
	Text,
	/// Floating point comparison after stripping `$` and `,`
	Number,
	/// Calendar date/time comparison
	Date,
}

impl SortType {
	/// Resolves a sort-type attribute value.
	///
	/// Anything other than `number` or `date`, including a missing value,
	/// falls back to [`SortType::Text`].
	pub fn from_attr(value: Option<&str>) -> Self {
		match value {
			Some("number") => Self::Number,
			Some("date") => Self::Date,
			_ => Self::Text,
		}
	}

	/// Returns the attribute value used in markup
	pub fn as_attr(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Number => "number",
			Self::Date => "date",
		}
	}
}

impl fmt::Display for SortType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_attr())
	}
}
