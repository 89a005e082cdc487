//! String collation for `text` columns
//!
//! Browsers compare text columns with `String.prototype.localeCompare`. The
//! [`Collator`] trait abstracts over that so the same comparator runs in
//! WASM (delegating to the JS engine) and natively (a case-folding
//! approximation of the root locale).

use std::cmp::Ordering;

/// Locale-aware string comparison
pub trait Collator {
	/// Compares two strings, returning their collation order
	fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Case-folding collator used on native targets.
///
/// Strings are compared case-insensitively first. Ties are broken
/// lowercase-first (`"apple"` before `"Apple"`), then by code point.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingCollator;

impl FoldingCollator {
	/// Creates a new folding collator
	pub fn new() -> Self {
		Self
	}
}

impl Collator for FoldingCollator {
	fn compare(&self, a: &str, b: &str) -> Ordering {
		let primary = a
			.chars()
			.flat_map(char::to_lowercase)
			.cmp(b.chars().flat_map(char::to_lowercase));

		primary
			.then_with(|| case_order(a, b))
			.then_with(|| a.cmp(b))
	}
}

/// Orders the first case difference lowercase-first
fn case_order(a: &str, b: &str) -> Ordering {
	for (x, y) in a.chars().zip(b.chars()) {
		if x == y {
			continue;
		}
		if x.is_lowercase() && y.is_uppercase() {
			return Ordering::Less;
		}
		if x.is_uppercase() && y.is_lowercase() {
			return Ordering::Greater;
		}
	}
	Ordering::Equal
}

/// Collator delegating to the JS engine's `Intl.Collator`.
///
/// One `Intl.Collator` is built per instance and its bound `compare`
/// function is reused for every comparison, matching `localeCompare` with
/// the default locale and options.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct JsCollator {
	compare: js_sys::Function,
}

#[cfg(target_arch = "wasm32")]
impl JsCollator {
	/// Creates a collator using the document's default locale
	pub fn new() -> Self {
		let collator = js_sys::Intl::Collator::new(&js_sys::Array::new(), &js_sys::Object::new());
		Self {
			compare: collator.compare(),
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl Default for JsCollator {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(target_arch = "wasm32")]
impl Collator for JsCollator {
	fn compare(&self, a: &str, b: &str) -> Ordering {
		let result = self
			.compare
			.call2(
				&wasm_bindgen::JsValue::NULL,
				&wasm_bindgen::JsValue::from_str(a),
				&wasm_bindgen::JsValue::from_str(b),
			)
			.ok()
			.and_then(|value| value.as_f64())
			.unwrap_or(0.0);
		result.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
	}
}

/// Collator used by [`TextComparator`](crate::TextComparator) by default
#[cfg(target_arch = "wasm32")]
pub type DefaultCollator = JsCollator;

/// Collator used by [`TextComparator`](crate::TextComparator) by default
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultCollator = FoldingCollator;
