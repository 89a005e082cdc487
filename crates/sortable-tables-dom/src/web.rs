//! Browser backend built on `web-sys`
//!
//! [`WebElement`] implements [`DomElement`] for live document elements, and
//! [`install`] wires the whole document once it is ready:
//!
//! ```ignore
//! use sortable_tables_dom::web::install;
//! use sortable_tables_dom::TableSorter;
//!
//! install(TableSorter::new())?;
//! ```
//!
//! From JavaScript, the same entry points are exported as
//! `installSortableTables()`, `installSortableTablesWithConfig(json)` and
//! `uninstallSortableTables()`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{ClickHandler, DomElement};
use crate::error::{Result, SortError};
use crate::sorter::{SorterHandle, TableSorter};
use crate::{error_log, info_log, warn_log};

/// A live document element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(web_sys::Element);

impl WebElement {
	/// Wraps a `web_sys::Element`
	pub fn new(element: web_sys::Element) -> Self {
		Self(element)
	}

	/// Returns the wrapped element
	pub fn as_element(&self) -> &web_sys::Element {
		&self.0
	}

	/// Unwraps the element
	pub fn into_inner(self) -> web_sys::Element {
		self.0
	}

	fn html_element(&self) -> Result<&web_sys::HtmlElement> {
		self.0
			.dyn_ref::<web_sys::HtmlElement>()
			.ok_or_else(|| SortError::Dom(format!("<{}> has no inline style", self.tag_name())))
	}
}

impl From<web_sys::Element> for WebElement {
	fn from(element: web_sys::Element) -> Self {
		Self(element)
	}
}

/// Click listener registered on a [`WebElement`]; owns the JS closure
pub struct WebListener {
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl DomElement for WebElement {
	type Listener = WebListener;

	fn tag_name(&self) -> String {
		self.0.tag_name().to_ascii_lowercase()
	}

	fn parent(&self) -> Option<Self> {
		self.0.parent_element().map(Self)
	}

	fn children(&self) -> Vec<Self> {
		let children = self.0.children();
		(0..children.length())
			.filter_map(|i| children.item(i))
			.map(Self)
			.collect()
	}

	fn attribute(&self, name: &str) -> Option<String> {
		self.0.get_attribute(name)
	}

	fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
		self.0.set_attribute(name, value)?;
		Ok(())
	}

	fn remove_attribute(&self, name: &str) -> Result<()> {
		self.0.remove_attribute(name)?;
		Ok(())
	}

	fn has_attribute(&self, name: &str) -> bool {
		self.0.has_attribute(name)
	}

	fn text_content(&self) -> String {
		self.0.text_content().unwrap_or_default()
	}

	fn set_text_content(&self, text: &str) {
		self.0.set_text_content(Some(text));
	}

	fn set_style(&self, property: &str, value: &str) -> Result<()> {
		self.html_element()?.style().set_property(property, value)?;
		Ok(())
	}

	fn remove_style(&self, property: &str) -> Result<()> {
		self.html_element()?.style().remove_property(property)?;
		Ok(())
	}

	fn create_element(&self, tag: &str) -> Result<Self> {
		let document = self
			.0
			.owner_document()
			.ok_or_else(|| SortError::NoDocument("element has no owner document".to_string()))?;
		Ok(Self(document.create_element(tag)?))
	}

	fn append_child(&self, child: &Self) -> Result<()> {
		self.0.append_child(&child.0)?;
		Ok(())
	}

	fn remove_child(&self, child: &Self) -> Result<()> {
		self.0.remove_child(&child.0)?;
		Ok(())
	}

	fn add_click_listener(&self, handler: ClickHandler) -> Result<WebListener> {
		let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
			handler();
		});
		self.0
			.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
		Ok(WebListener { closure })
	}

	fn remove_click_listener(&self, listener: WebListener) {
		if let Err(err) = self
			.0
			.remove_event_listener_with_callback("click", listener.closure.as_ref().unchecked_ref())
		{
			warn_log!("Failed to remove click listener: {:?}", err);
		}
	}
}

thread_local! {
	static INSTALLED: RefCell<Vec<SorterHandle<WebElement>>> = const { RefCell::new(Vec::new()) };
}

/// Returns the window's document
pub fn document() -> Result<web_sys::Document> {
	web_sys::window()
		.ok_or_else(|| SortError::NoDocument("window not available".to_string()))?
		.document()
		.ok_or_else(|| SortError::NoDocument("document not available".to_string()))
}

/// Returns the document's root element (`<html>`)
pub fn document_root() -> Result<WebElement> {
	document()?
		.document_element()
		.map(WebElement)
		.ok_or_else(|| SortError::NoDocument("document has no root element".to_string()))
}

/// Attaches `sorter` to the whole document once its structure is ready.
///
/// While the document is still loading, attachment is deferred to
/// `DOMContentLoaded`; otherwise it happens immediately. The handle is
/// kept until [`uninstall`]. Installing twice without uninstalling fails
/// with [`SortError::AlreadyAttached`] (reported on the console when
/// deferred).
pub fn install(sorter: TableSorter) -> Result<()> {
	let document = document()?;
	if document.ready_state() != "loading" {
		return attach_document(&sorter);
	}

	let on_ready = Closure::once_into_js(move |_event: web_sys::Event| {
		if let Err(err) = attach_document(&sorter) {
			error_log!("Failed to install sortable tables: {}", err);
		}
	});
	document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
	Ok(())
}

/// Detaches every sorter installed with [`install`]
pub fn uninstall() {
	let handles = INSTALLED.with(|installed| std::mem::take(&mut *installed.borrow_mut()));
	info_log!("Uninstalling {} sorter(s)", handles.len());
	drop(handles);
}

fn attach_document(sorter: &TableSorter) -> Result<()> {
	let handle = sorter.attach(&document_root()?)?;
	INSTALLED.with(|installed| installed.borrow_mut().push(handle));
	Ok(())
}

/// Installs sortable tables with the default configuration
#[wasm_bindgen(js_name = installSortableTables)]
pub fn install_sortable_tables() -> std::result::Result<(), JsValue> {
	install(TableSorter::new()).map_err(JsValue::from)
}

/// Installs sortable tables with a JSON configuration
#[wasm_bindgen(js_name = installSortableTablesWithConfig)]
pub fn install_sortable_tables_with_config(json: &str) -> std::result::Result<(), JsValue> {
	install(TableSorter::from_json(json)?).map_err(JsValue::from)
}

/// Removes everything installed by `installSortableTables`
#[wasm_bindgen(js_name = uninstallSortableTables)]
pub fn uninstall_sortable_tables() {
	uninstall();
}
