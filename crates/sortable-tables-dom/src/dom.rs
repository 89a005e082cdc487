//! DOM abstraction layer
//!
//! [`DomElement`] is the small surface the sorter needs from a document:
//! tree navigation, attributes, text, inline styles, element creation and
//! click listeners. It is implemented by `WebElement`
//! on top of `web-sys`, and by [`MemoryElement`](crate::memory::MemoryElement)
//! for native use and tests.

use std::fmt;

use crate::error::Result;

/// Handler invoked when an element is clicked
pub type ClickHandler = Box<dyn Fn() + 'static>;

/// A handle to an element in a document.
///
/// Handles are cheap to clone and compare by node identity.
pub trait DomElement: Clone + PartialEq + fmt::Debug + 'static {
	/// Token returned by [`add_click_listener`](Self::add_click_listener)
	type Listener: 'static;

	/// Returns the lowercase tag name
	fn tag_name(&self) -> String;

	/// Returns the parent element
	fn parent(&self) -> Option<Self>;

	/// Returns the child elements in document order
	fn children(&self) -> Vec<Self>;

	/// Returns an attribute value
	fn attribute(&self, name: &str) -> Option<String>;

	/// Sets an attribute value
	fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

	/// Removes an attribute
	fn remove_attribute(&self, name: &str) -> Result<()>;

	/// Returns the concatenated text of all descendants
	fn text_content(&self) -> String;

	/// Replaces all children with a single text node
	fn set_text_content(&self, text: &str);

	/// Sets an inline style property
	fn set_style(&self, property: &str, value: &str) -> Result<()>;

	/// Removes an inline style property
	fn remove_style(&self, property: &str) -> Result<()>;

	/// Creates a detached element in the same document
	fn create_element(&self, tag: &str) -> Result<Self>;

	/// Appends `child`, moving it if it is already attached elsewhere
	fn append_child(&self, child: &Self) -> Result<()>;

	/// Removes a direct child
	fn remove_child(&self, child: &Self) -> Result<()>;

	/// Registers a click listener
	fn add_click_listener(&self, handler: ClickHandler) -> Result<Self::Listener>;

	/// Unregisters a click listener
	fn remove_click_listener(&self, listener: Self::Listener);

	/// Returns true if the attribute is present
	fn has_attribute(&self, name: &str) -> bool {
		self.attribute(name).is_some()
	}

	/// Returns true if the `class` attribute lists `class`
	fn has_class(&self, class: &str) -> bool {
		self.attribute("class")
			.is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
	}

	/// Returns true if the tag name matches, ignoring case
	fn is_tag(&self, tag: &str) -> bool {
		self.tag_name().eq_ignore_ascii_case(tag)
	}
}

/// Collects `root` and its descendants matching `predicate`, in document order
pub fn find_all<E, P>(root: &E, predicate: P) -> Vec<E>
where
	E: DomElement,
	P: Fn(&E) -> bool,
{
	let mut found = Vec::new();
	walk(root, &predicate, &mut found, &|_: &E| true);
	found
}

/// Collects descendants of `table` matching `predicate` without entering
/// nested tables
pub fn find_in_table<E, P>(table: &E, predicate: P) -> Vec<E>
where
	E: DomElement,
	P: Fn(&E) -> bool,
{
	let mut found = Vec::new();
	for child in table.children() {
		walk(&child, &predicate, &mut found, &|e: &E| !e.is_tag("table"));
	}
	found
}

fn walk<E, P, D>(element: &E, predicate: &P, found: &mut Vec<E>, descend: &D)
where
	E: DomElement,
	P: Fn(&E) -> bool,
	D: Fn(&E) -> bool,
{
	if predicate(element) {
		found.push(element.clone());
	}
	if descend(element) {
		for child in element.children() {
			walk(&child, predicate, found, descend);
		}
	}
}

/// Returns the table's first direct `tbody` child
pub fn table_body<E: DomElement>(table: &E) -> Option<E> {
	table.children().into_iter().find(|e| e.is_tag("tbody"))
}

/// Returns the `tr` children of a body element
pub fn body_rows<E: DomElement>(body: &E) -> Vec<E> {
	body.children()
		.into_iter()
		.filter(|e| e.is_tag("tr"))
		.collect()
}

/// Returns the `td` and `th` children of a row
pub fn row_cells<E: DomElement>(row: &E) -> Vec<E> {
	row.children()
		.into_iter()
		.filter(|e| e.is_tag("td") || e.is_tag("th"))
		.collect()
}

/// Returns the zero-based position of a cell within its row
pub fn cell_index<E: DomElement>(cell: &E) -> Option<usize> {
	let row = cell.parent()?;
	row_cells(&row).iter().position(|c| c == cell)
}

/// Returns the comparison value of a cell: the override attribute if
/// present, otherwise the trimmed text
pub fn cell_value<E: DomElement>(cell: &E, value_attr: &str) -> String {
	cell.attribute(value_attr)
		.unwrap_or_else(|| cell.text_content().trim().to_string())
}
