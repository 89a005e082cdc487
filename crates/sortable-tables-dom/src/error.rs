//! Error types for table sorting

use thiserror::Error;

/// Table sorter error type
#[derive(Debug, Error)]
pub enum SortError {
	/// The root container already has a sorter attached
	#[error("Sorter already attached to this container")]
	AlreadyAttached,

	/// A sortable table has no body row container
	#[error("Sortable table has no body element")]
	MissingBody,

	/// A header index outside the table's sortable headers
	#[error("No sortable header at index {0}")]
	UnknownHeader(usize),

	/// A DOM operation failed
	#[error("DOM operation failed: {0}")]
	Dom(String),

	/// No window or document is available
	#[error("Document not available: {0}")]
	NoDocument(String),

	/// The configuration could not be parsed
	#[error("Invalid sorter configuration: {0}")]
	Config(#[from] serde_json::Error),
}

/// Result type for table sorter operations
pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SortError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Dom(
			value
				.as_string()
				.unwrap_or_else(|| format!("{:?}", value)),
		)
	}
}

#[cfg(target_arch = "wasm32")]
impl From<SortError> for wasm_bindgen::JsValue {
	fn from(err: SortError) -> Self {
		wasm_bindgen::JsValue::from_str(&err.to_string())
	}
}
