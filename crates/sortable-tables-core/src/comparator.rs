//! Typed column comparators
//!
//! Every comparator turns a raw cell value into an optional key. A `None`
//! key marks an invalid value (missing cell, unparseable number or date).
//! Invalid values sort after all valid ones in both directions and compare
//! equal to each other, so the stable sort keeps their relative order.
//!
//! ```
//! use sortable_tables_core::{ColumnComparator, SortOrder, SortType};
//!
//! let values = vec!["$1,200", "$45", "$300"];
//! let sorted = ColumnComparator::for_type(SortType::Number).sort(
//! 	values,
//! 	SortOrder::Ascending,
//! 	|value| Some(value.to_string()),
//! );
//! assert_eq!(sorted, vec!["$45", "$300", "$1,200"]);
//! ```

use std::cmp::Ordering;

use crate::collation::{Collator, DefaultCollator};
use crate::order::{SortOrder, SortType};
use crate::value::{parse_date, parse_number};

/// A total comparison over raw cell values
pub trait Comparator {
	/// Parsed representation of a raw value
	type Key;

	/// Parses a raw value, returning `None` for invalid input
	fn key(&self, raw: &str) -> Option<Self::Key>;

	/// Compares two valid keys in ascending order
	fn compare_keys(&self, a: &Self::Key, b: &Self::Key) -> Ordering;

	/// Compares two possibly-invalid keys under the given order.
	///
	/// Only valid keys are affected by the direction; invalid keys always
	/// trail.
	fn compare(&self, a: Option<&Self::Key>, b: Option<&Self::Key>, order: SortOrder) -> Ordering {
		match (a, b) {
			(Some(a), Some(b)) => order.apply(self.compare_keys(a, b)),
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
			(None, None) => Ordering::Equal,
		}
	}
}

/// Locale-aware text comparison; every present value is valid
#[derive(Debug, Clone, Default)]
pub struct TextComparator<C = DefaultCollator> {
	collator: C,
}

impl TextComparator {
	/// Creates a text comparator using the platform collator
	pub fn new() -> Self {
		Self::default()
	}
}

impl<C: Collator> TextComparator<C> {
	/// Creates a text comparator using a custom collator
	pub fn with_collator(collator: C) -> Self {
		Self { collator }
	}
}

impl<C: Collator> Comparator for TextComparator<C> {
	type Key = String;

	fn key(&self, raw: &str) -> Option<String> {
		Some(raw.to_string())
	}

	fn compare_keys(&self, a: &String, b: &String) -> Ordering {
		self.collator.compare(a, b)
	}
}

/// Numeric comparison over currency-formatted values
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberComparator;

impl Comparator for NumberComparator {
	type Key = f64;

	fn key(&self, raw: &str) -> Option<f64> {
		parse_number(raw)
	}

	fn compare_keys(&self, a: &f64, b: &f64) -> Ordering {
		// Keys are never NaN; -0.0 and 0.0 compare equal.
		a.partial_cmp(b).unwrap_or(Ordering::Equal)
	}
}

/// Chronological comparison over date values
#[derive(Debug, Clone, Copy, Default)]
pub struct DateComparator;

impl Comparator for DateComparator {
	type Key = i64;

	fn key(&self, raw: &str) -> Option<i64> {
		parse_date(raw)
	}

	fn compare_keys(&self, a: &i64, b: &i64) -> Ordering {
		a.cmp(b)
	}
}

/// Comparator selected by a column's [`SortType`]
#[derive(Debug, Clone)]
pub enum ColumnComparator {
	/// Text column
	Text(TextComparator),
	/// Number column
	Number(NumberComparator),
	/// Date column
	Date(DateComparator),
}

impl ColumnComparator {
	/// Returns the comparator for a sort type
	pub fn for_type(sort_type: SortType) -> Self {
		match sort_type {
			SortType::Text => Self::Text(TextComparator::new()),
			SortType::Number => Self::Number(NumberComparator),
			SortType::Date => Self::Date(DateComparator),
		}
	}

	/// Stably sorts `rows` by the raw value `extract` returns for each.
	///
	/// `extract` is called once per row; `None` means the row has no
	/// value for the column and is treated as invalid.
	pub fn sort<R, F>(&self, rows: Vec<R>, order: SortOrder, extract: F) -> Vec<R>
	where
		F: FnMut(&R) -> Option<String>,
	{
		match self {
			Self::Text(c) => sort_by_key(c, rows, order, extract),
			Self::Number(c) => sort_by_key(c, rows, order, extract),
			Self::Date(c) => sort_by_key(c, rows, order, extract),
		}
	}
}

/// Stably sorts rows with any [`Comparator`], parsing each row's key once
pub fn sort_by_key<C, R, F>(comparator: &C, rows: Vec<R>, order: SortOrder, mut extract: F) -> Vec<R>
where
	C: Comparator + ?Sized,
	F: FnMut(&R) -> Option<String>,
{
	let mut keyed: Vec<(Option<C::Key>, R)> = rows
		.into_iter()
		.map(|row| {
			let key = extract(&row).and_then(|raw| comparator.key(&raw));
			(key, row)
		})
		.collect();

	keyed.sort_by(|(a, _), (b, _)| comparator.compare(a.as_ref(), b.as_ref(), order));

	keyed.into_iter().map(|(_, row)| row).collect()
}
