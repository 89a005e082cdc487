//! In-memory DOM backend
//!
//! A minimal single-threaded element tree implementing [`DomElement`]. It
//! lets the sorter run outside a browser (server-side pre-sorting, tests)
//! with the same semantics as the `web-sys` backend: appending an attached
//! element moves it, and [`MemoryElement::click`] dispatches to registered
//! listeners.
//!
//! ```
//! use sortable_tables_dom::memory::MemoryElement;
//! use sortable_tables_dom::DomElement;
//!
//! let row = MemoryElement::new("tr")
//! 	.with_child(MemoryElement::new("td").with_text("Alice"))
//! 	.with_child(MemoryElement::new("td").with_attr("data-value", "3").with_text("High"));
//!
//! assert_eq!(row.children().len(), 2);
//! assert_eq!(row.text_content(), "AliceHigh");
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::dom::{ClickHandler, DomElement};
use crate::error::{Result, SortError};

/// Token identifying a listener registered on a [`MemoryElement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryListener(u64);

#[derive(Clone)]
enum Child {
	Element(MemoryElement),
	Text(String),
}

struct Node {
	tag: String,
	attributes: BTreeMap<String, String>,
	styles: BTreeMap<String, String>,
	children: Vec<Child>,
	parent: Weak<RefCell<Node>>,
	listeners: Vec<(u64, Rc<dyn Fn()>)>,
	next_listener: u64,
}

/// An element of the in-memory DOM
#[derive(Clone)]
pub struct MemoryElement {
	node: Rc<RefCell<Node>>,
}

impl MemoryElement {
	/// Creates a detached element
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			node: Rc::new(RefCell::new(Node {
				tag: tag.into().to_ascii_lowercase(),
				attributes: BTreeMap::new(),
				styles: BTreeMap::new(),
				children: Vec::new(),
				parent: Weak::new(),
				listeners: Vec::new(),
				next_listener: 0,
			})),
		}
	}

	/// Sets an attribute
	pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.node
			.borrow_mut()
			.attributes
			.insert(name.into(), value.into());
		self
	}

	/// Adds a class to the `class` attribute
	pub fn with_class(self, class: &str) -> Self {
		{
			let mut node = self.node.borrow_mut();
			let classes = node.attributes.entry("class".to_string()).or_default();
			if !classes.is_empty() {
				classes.push(' ');
			}
			classes.push_str(class);
		}
		self
	}

	/// Appends a text node
	pub fn with_text(self, text: impl Into<String>) -> Self {
		self.node
			.borrow_mut()
			.children
			.push(Child::Text(text.into()));
		self
	}

	/// Appends a child element
	pub fn with_child(self, child: MemoryElement) -> Self {
		if let Err(err) = self.append_child(&child) {
			crate::warn_log!("Ignoring child <{}>: {}", child.tag_name(), err);
		}
		self
	}

	/// Appends several child elements
	pub fn with_children(self, children: impl IntoIterator<Item = MemoryElement>) -> Self {
		children.into_iter().fold(self, Self::with_child)
	}

	/// Dispatches a click to every listener registered on this element
	pub fn click(&self) {
		// Listeners may mutate this node, so release the borrow first
		let listeners: Vec<Rc<dyn Fn()>> = self
			.node
			.borrow()
			.listeners
			.iter()
			.map(|(_, handler)| Rc::clone(handler))
			.collect();

		for handler in listeners {
			handler();
		}
	}

	/// Returns an inline style property
	pub fn style(&self, property: &str) -> Option<String> {
		self.node.borrow().styles.get(property).cloned()
	}

	/// Returns the number of registered click listeners
	pub fn listener_count(&self) -> usize {
		self.node.borrow().listeners.len()
	}

	/// Serializes this element and its subtree as HTML
	pub fn outer_html(&self) -> String {
		let mut html = String::new();
		self.write_html(&mut html);
		html
	}

	fn write_html(&self, out: &mut String) {
		let node = self.node.borrow();
		out.push('<');
		out.push_str(&node.tag);
		for (name, value) in &node.attributes {
			out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
		}
		if !node.styles.is_empty() {
			let style: Vec<String> = node
				.styles
				.iter()
				.map(|(property, value)| format!("{}: {}", property, value))
				.collect();
			out.push_str(&format!(" style=\"{}\"", escape(&style.join("; "))));
		}
		out.push('>');
		for child in &node.children {
			match child {
				Child::Element(element) => element.write_html(out),
				Child::Text(text) => out.push_str(&escape(text)),
			}
		}
		out.push_str(&format!("</{}>", node.tag));
	}

	/// Returns true if `other` is this element or one of its ancestors
	fn is_within(&self, other: &MemoryElement) -> bool {
		let mut current = Some(self.clone());
		while let Some(element) = current {
			if &element == other {
				return true;
			}
			current = element.parent();
		}
		false
	}

	fn detach_child(&self, child: &MemoryElement) {
		self.node
			.borrow_mut()
			.children
			.retain(|c| !matches!(c, Child::Element(e) if e == child));
		child.node.borrow_mut().parent = Weak::new();
	}
}

fn escape(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
}

impl PartialEq for MemoryElement {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.node, &other.node)
	}
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let node = self.node.borrow();
		f.debug_struct("MemoryElement")
			.field("tag", &node.tag)
			.field("attributes", &node.attributes)
			.finish()
	}
}

impl DomElement for MemoryElement {
	type Listener = MemoryListener;

	fn tag_name(&self) -> String {
		self.node.borrow().tag.clone()
	}

	fn parent(&self) -> Option<Self> {
		self.node
			.borrow()
			.parent
			.upgrade()
			.map(|node| Self { node })
	}

	fn children(&self) -> Vec<Self> {
		self.node
			.borrow()
			.children
			.iter()
			.filter_map(|child| match child {
				Child::Element(element) => Some(element.clone()),
				Child::Text(_) => None,
			})
			.collect()
	}

	fn attribute(&self, name: &str) -> Option<String> {
		self.node.borrow().attributes.get(name).cloned()
	}

	fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
		self.node
			.borrow_mut()
			.attributes
			.insert(name.to_string(), value.to_string());
		Ok(())
	}

	fn remove_attribute(&self, name: &str) -> Result<()> {
		self.node.borrow_mut().attributes.remove(name);
		Ok(())
	}

	fn text_content(&self) -> String {
		self.node
			.borrow()
			.children
			.iter()
			.map(|child| match child {
				Child::Element(element) => element.text_content(),
				Child::Text(text) => text.clone(),
			})
			.collect()
	}

	fn set_text_content(&self, text: &str) {
		let previous = std::mem::replace(
			&mut self.node.borrow_mut().children,
			vec![Child::Text(text.to_string())],
		);
		for child in previous {
			if let Child::Element(element) = child {
				element.node.borrow_mut().parent = Weak::new();
			}
		}
	}

	fn set_style(&self, property: &str, value: &str) -> Result<()> {
		self.node
			.borrow_mut()
			.styles
			.insert(property.to_string(), value.to_string());
		Ok(())
	}

	fn remove_style(&self, property: &str) -> Result<()> {
		self.node.borrow_mut().styles.remove(property);
		Ok(())
	}

	fn create_element(&self, tag: &str) -> Result<Self> {
		Ok(Self::new(tag))
	}

	fn append_child(&self, child: &Self) -> Result<()> {
		if self.is_within(child) {
			return Err(SortError::Dom(format!(
				"cannot append <{}> into itself or one of its descendants",
				child.tag_name()
			)));
		}

		if let Some(previous) = child.parent() {
			previous.detach_child(child);
		}

		self.node
			.borrow_mut()
			.children
			.push(Child::Element(child.clone()));
		child.node.borrow_mut().parent = Rc::downgrade(&self.node);
		Ok(())
	}

	fn remove_child(&self, child: &Self) -> Result<()> {
		if child.parent().as_ref() != Some(self) {
			return Err(SortError::Dom(format!(
				"<{}> is not a child of <{}>",
				child.tag_name(),
				self.tag_name()
			)));
		}
		self.detach_child(child);
		Ok(())
	}

	fn add_click_listener(&self, handler: ClickHandler) -> Result<MemoryListener> {
		let mut node = self.node.borrow_mut();
		let id = node.next_listener;
		node.next_listener += 1;
		node.listeners.push((id, Rc::from(handler)));
		Ok(MemoryListener(id))
	}

	fn remove_click_listener(&self, listener: MemoryListener) {
		self.node
			.borrow_mut()
			.listeners
			.retain(|(id, _)| *id != listener.0);
	}
}
