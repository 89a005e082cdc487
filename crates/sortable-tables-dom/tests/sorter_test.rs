
use fixtures::*;
use proptest::prelude::*;
use rstest::*;
use sortable_tables_dom::memory::MemoryElement;
use sortable_tables_dom::{DomElement, SortError, SortOrder, SorterConfig, TableSorter};

// ============================================================================
// Initialization
// ============================================================================

#[rstest]
fn test_attach_decorates_headers(product_table: ProductTable) {
	let handle = TableSorter::new().attach(&product_table.container).unwrap();

	assert_eq!(handle.table_count(), 1);
	assert_eq!(handle.header_count(), 4);
	for header in product_table.headers() {
		assert_eq!(header.attribute("data-order"), None);
		assert_eq!(indicator_text(&header), " ↕");
		assert_eq!(header.style("cursor").as_deref(), Some("pointer"));
		assert_eq!(header.style("user-select").as_deref(), Some("none"));
		assert_eq!(header.listener_count(), 1);
	}
}

#[rstest]
fn test_attach_leaves_rows_untouched(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	assert_eq!(product_table.row_ids(), vec!["r1", "r2", "r3"]);
}

#[rstest]
fn test_attach_twice_is_rejected(product_table: ProductTable) {
	let sorter = TableSorter::new();
	let _handle = sorter.attach(&product_table.container).unwrap();

	let second = sorter.attach(&product_table.container);

	assert!(matches!(second, Err(SortError::AlreadyAttached)));
	assert_eq!(product_table.name.listener_count(), 1);
	assert_eq!(indicators(&product_table.name).len(), 1);
}

#[rstest]
fn test_overlapping_containers_do_not_rewire(product_table: ProductTable) {
	let page = MemoryElement::new("body").with_child(product_table.container.clone());
	let sorter = TableSorter::new();

	let _inner = sorter.attach(&product_table.container).unwrap();
	let outer = sorter.attach(&page).unwrap();

	assert_eq!(outer.table_count(), 0);
	assert_eq!(product_table.price.listener_count(), 1);
}

#[rstest]
fn test_attach_to_table_itself(product_table: ProductTable) {
	let handle = TableSorter::new().attach(&product_table.table).unwrap();

	assert_eq!(handle.table_count(), 1);
}

#[rstest]
fn test_unmarked_tables_are_ignored() {
	let header = header("Name", "text");
	let table = MemoryElement::new("table").with_child(
		MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(header.clone())),
	);
	let container = MemoryElement::new("div").with_child(table);

	let handle = TableSorter::new().attach(&container).unwrap();

	assert_eq!(handle.table_count(), 0);
	assert!(header.children().is_empty());
	assert_eq!(header.style("cursor"), None);
}

#[rstest]
fn test_headers_without_sort_type_are_ignored(product_table: ProductTable) {
	let plain = MemoryElement::new("th").with_text("Notes");
	product_table
		.name
		.parent()
		.unwrap()
		.append_child(&plain)
		.unwrap();

	let handle = TableSorter::new().attach(&product_table.container).unwrap();

	assert_eq!(handle.header_count(), 4);
	assert_eq!(plain.listener_count(), 0);
	assert!(indicators(&plain).is_empty());
}

// ============================================================================
// Toggle and header rendering
// ============================================================================

#[rstest]
fn test_first_click_sorts_descending(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	product_table.name.click();

	assert_eq!(product_table.name.attribute("data-order").as_deref(), Some("desc"));
	assert_eq!(indicator_text(&product_table.name), " ▼");
	assert_eq!(product_table.row_ids(), vec!["r3", "r1", "r2"]);
}

#[rstest]
fn test_repeated_clicks_alternate(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	let mut seen = Vec::new();
	for _ in 0..4 {
		product_table.price.click();
		seen.push((
			product_table.price.attribute("data-order").unwrap(),
			indicator_text(&product_table.price),
		));
	}

	assert_eq!(
		seen,
		vec![
			("desc".to_string(), " ▼".to_string()),
			("asc".to_string(), " ▲".to_string()),
			("desc".to_string(), " ▼".to_string()),
			("asc".to_string(), " ▲".to_string()),
		]
	);
}

#[rstest]
fn test_clicking_other_header_clears_previous(product_table: ProductTable) {
	let handle = TableSorter::new().attach(&product_table.container).unwrap();

	product_table.name.click();
	product_table.name.click();
	product_table.added.click();

	assert_eq!(product_table.name.attribute("data-order"), None);
	assert_eq!(indicator_text(&product_table.name), " ↕");
	assert_eq!(product_table.added.attribute("data-order").as_deref(), Some("desc"));

	let marked: Vec<_> = product_table
		.headers()
		.into_iter()
		.filter(|h| h.has_attribute("data-order"))
		.collect();
	assert_eq!(marked, vec![product_table.added.clone()]);

	let state = handle.tables().next().unwrap().state();
	assert_eq!(state.sorted_header(), Some(2));
	assert_eq!(state.current_order(), Some(SortOrder::Descending));
}

#[rstest]
fn test_returning_to_header_starts_descending(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	product_table.name.click();
	product_table.name.click();
	product_table.price.click();
	product_table.name.click();

	assert_eq!(product_table.name.attribute("data-order").as_deref(), Some("desc"));
}

#[rstest]
fn test_headers_sharing_a_column_toggle_separately() {
	let head = header("Name", "text");
	let foot = header("Name", "text");
	let body = MemoryElement::new("tbody").with_children([
		MemoryElement::new("tr").with_attr("id", "b").with_child(cell("b")),
		MemoryElement::new("tr").with_attr("id", "a").with_child(cell("a")),
		MemoryElement::new("tr").with_attr("id", "c").with_child(cell("c")),
	]);
	let table = MemoryElement::new("table")
		.with_class("sortable-table")
		.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(head.clone())))
		.with_child(body.clone())
		.with_child(MemoryElement::new("tfoot").with_child(MemoryElement::new("tr").with_child(foot.clone())));
	let handle = TableSorter::new().attach(&table).unwrap();
	assert_eq!(handle.header_count(), 2);

	head.click();
	assert_eq!(head.attribute("data-order").as_deref(), Some("desc"));
	assert_eq!(foot.attribute("data-order"), None);
	assert_eq!(indicator_text(&foot), " ↕");

	foot.click();
	assert_eq!(foot.attribute("data-order").as_deref(), Some("desc"));
	assert_eq!(indicator_text(&foot), " ▼");
	assert_eq!(head.attribute("data-order"), None);
	assert_eq!(indicator_text(&head), " ↕");
	assert_eq!(row_ids(&body), vec!["c", "b", "a"]);

	foot.click();
	assert_eq!(foot.attribute("data-order").as_deref(), Some("asc"));
	assert_eq!(head.attribute("data-order"), None);
	assert_eq!(row_ids(&body), vec!["a", "b", "c"]);

	let state = handle.tables().next().unwrap().state();
	assert_eq!(state.sorted_header(), Some(1));
}

#[rstest]
fn test_removed_indicator_is_recreated(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();
	let indicator = indicators(&product_table.name).remove(0);
	product_table.name.remove_child(&indicator).unwrap();

	product_table.name.click();

	assert_eq!(indicator_text(&product_table.name), " ▼");
}

// ============================================================================
// Row ordering
// ============================================================================

#[rstest]
#[case::text(0, vec!["r2", "r1", "r3"])]
#[case::number(1, vec!["r2", "r3", "r1"])]
#[case::date(2, vec!["r2", "r3", "r1"])]
#[case::override_value(3, vec!["r2", "r3", "r1"])]
fn test_ascending_sort_per_type(
	product_table: ProductTable,
	#[case] column: usize,
	#[case] expected: Vec<&str>,
) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();
	let header = product_table.headers()[column].clone();

	header.click();
	header.click();

	assert_eq!(header.attribute("data-order").as_deref(), Some("asc"));
	assert_eq!(product_table.row_ids(), expected);
}

#[rstest]
fn test_descending_number_sort(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	product_table.price.click();

	assert_eq!(product_table.row_ids(), vec!["r1", "r3", "r2"]);
}

#[rstest]
fn test_override_value_beats_display_text(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	product_table.priority.click();

	// Text order of the labels would be Medium, Low, High
	let labels: Vec<String> = product_table
		.body
		.children()
		.iter()
		.map(|row| row.children()[3].text_content())
		.collect();
	assert_eq!(labels, vec!["High", "Medium", "Low"]);
}

#[rstest]
fn test_asc_desc_asc_restores_first_ascending_result(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();

	product_table.added.click();
	product_table.added.click();
	let first_ascending = product_table.row_ids();
	product_table.added.click();
	product_table.added.click();

	assert_eq!(product_table.row_ids(), first_ascending);
}

#[rstest]
fn test_rows_are_moved_not_copied(product_table: ProductTable) {
	let _handle = TableSorter::new().attach(&product_table.container).unwrap();
	let before = product_table.body.children();
	let html_before: Vec<String> = before.iter().map(|r| r.outer_html()).collect();

	product_table.name.click();

	let after = product_table.body.children();
	assert_eq!(after.len(), before.len());
	for row in &before {
		assert!(after.contains(row));
	}
	let mut html_after: Vec<String> = after.iter().map(|r| r.outer_html()).collect();
	let mut html_before = html_before;
	html_after.sort();
	html_before.sort();
	assert_eq!(html_after, html_before);
}

#[rstest]
fn test_invalid_and_missing_values_sort_last() {
	let price = header("Price", "number");
	let body = MemoryElement::new("tbody").with_children([
		MemoryElement::new("tr").with_attr("id", "na").with_child(cell("n/a")),
		MemoryElement::new("tr").with_attr("id", "ten").with_child(cell("$10")),
		MemoryElement::new("tr").with_attr("id", "empty"),
		MemoryElement::new("tr").with_attr("id", "two").with_child(cell("2")),
	]);
	let table = MemoryElement::new("table")
		.with_class("sortable-table")
		.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(price.clone())))
		.with_child(body.clone());
	let _handle = TableSorter::new().attach(&table).unwrap();

	price.click();
	assert_eq!(row_ids(&body), vec!["ten", "two", "na", "empty"]);

	price.click();
	assert_eq!(row_ids(&body), vec!["two", "ten", "na", "empty"]);
}

#[rstest]
fn test_column_index_follows_cell_position() {
	let amount = header("Amount", "number");
	let body = MemoryElement::new("tbody").with_children([
		MemoryElement::new("tr")
			.with_attr("id", "a")
			.with_child(cell("zzz"))
			.with_child(cell("1")),
		MemoryElement::new("tr")
			.with_attr("id", "b")
			.with_child(cell("aaa"))
			.with_child(cell("2")),
	]);
	let table = MemoryElement::new("table")
		.with_class("sortable-table")
		.with_child(MemoryElement::new("thead").with_child(
			MemoryElement::new("tr")
				.with_child(MemoryElement::new("th").with_text("Label"))
				.with_child(amount.clone()),
		))
		.with_child(body.clone());
	let handle = TableSorter::new().attach(&table).unwrap();

	amount.click();

	assert_eq!(handle.tables().next().unwrap().headers()[0].column(), 1);
	assert_eq!(row_ids(&body), vec!["b", "a"]);
}

#[rstest]
fn test_nested_tables_are_independent() {
	let inner_header = header("Inner", "text");
	let inner_body = MemoryElement::new("tbody").with_children([
		MemoryElement::new("tr").with_attr("id", "y").with_child(cell("y")),
		MemoryElement::new("tr").with_attr("id", "x").with_child(cell("x")),
	]);
	let inner = MemoryElement::new("table")
		.with_class("sortable-table")
		.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(inner_header.clone())))
		.with_child(inner_body.clone());

	let outer_header = header("Outer", "text");
	let outer_body = MemoryElement::new("tbody").with_children([
		MemoryElement::new("tr")
			.with_attr("id", "a")
			.with_child(MemoryElement::new("td").with_text("a").with_child(inner)),
		MemoryElement::new("tr").with_attr("id", "b").with_child(cell("b")),
	]);
	let outer = MemoryElement::new("table")
		.with_class("sortable-table")
		.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(outer_header.clone())))
		.with_child(outer_body.clone());
	let container = MemoryElement::new("div").with_child(outer);

	let handle = TableSorter::new().attach(&container).unwrap();
	assert_eq!(handle.table_count(), 2);
	assert_eq!(handle.header_count(), 2);

	outer_header.click();
	assert_eq!(row_ids(&outer_body), vec!["b", "a"]);
	assert_eq!(row_ids(&inner_body), vec!["y", "x"]);
	assert_eq!(inner_header.attribute("data-order"), None);

	inner_header.click();
	assert_eq!(row_ids(&inner_body), vec!["y", "x"]);
	inner_header.click();
	assert_eq!(row_ids(&inner_body), vec!["x", "y"]);
	assert_eq!(outer_header.attribute("data-order").as_deref(), Some("desc"));
}

// ============================================================================
// Error handling
// ============================================================================

#[rstest]
fn test_table_without_body_updates_headers_only() {
	let name = header("Name", "text");
	let row = MemoryElement::new("tr").with_attr("id", "only").with_child(cell("x"));
	let table = MemoryElement::new("table")
		.with_class("sortable-table")
		.with_child(MemoryElement::new("tr").with_child(name.clone()))
		.with_child(row.clone());
	let handle = TableSorter::new().attach(&table).unwrap();

	name.click();
	assert_eq!(name.attribute("data-order").as_deref(), Some("desc"));

	let result = handle.tables().next().unwrap().click_header(0);
	assert!(matches!(result, Err(SortError::MissingBody)));
	assert_eq!(name.attribute("data-order").as_deref(), Some("asc"));
}

#[rstest]
fn test_unknown_header_index(product_table: ProductTable) {
	let handle = TableSorter::new().attach(&product_table.container).unwrap();

	let result = handle.tables().next().unwrap().click_header(9);

	assert!(matches!(result, Err(SortError::UnknownHeader(9))));
}

// ============================================================================
// Disposal
// ============================================================================

#[rstest]
fn test_detach_restores_markup(product_table: ProductTable) {
	let handle = TableSorter::new().attach(&product_table.container).unwrap();
	product_table.price.click();

	handle.detach();

	for header in product_table.headers() {
		assert!(indicators(&header).is_empty());
		assert_eq!(header.listener_count(), 0);
		assert_eq!(header.style("cursor"), None);
		assert_eq!(header.style("user-select"), None);
		assert_eq!(header.attribute("data-order"), None);
	}
	assert!(!product_table.container.has_attribute("data-sortable-root"));
	assert!(!product_table.table.has_attribute("data-sortable-bound"));

	let order = product_table.row_ids();
	product_table.price.click();
	assert_eq!(product_table.row_ids(), order);
}

#[rstest]
fn test_reattach_after_detach_registers_once(product_table: ProductTable) {
	let sorter = TableSorter::new();
	sorter.attach(&product_table.container).unwrap().detach();

	let _handle = sorter.attach(&product_table.container).unwrap();

	assert_eq!(product_table.name.listener_count(), 1);
	assert_eq!(indicators(&product_table.name).len(), 1);
	assert_eq!(product_table.name.text_content(), "Name ↕");
}

#[rstest]
fn test_forget_keeps_tables_sortable(product_table: ProductTable) {
	TableSorter::new()
		.attach(&product_table.container)
		.unwrap()
		.forget();

	product_table.price.click();

	assert_eq!(product_table.row_ids(), vec!["r1", "r3", "r2"]);
}

// ============================================================================
// Configuration
// ============================================================================

#[rstest]
fn test_custom_markup_config() {
	let config = SorterConfig::new()
		.table_class("grid")
		.sort_type_attr("data-type")
		.order_attr("aria-order")
		.value_attr("data-key")
		.indicator_class("arrow")
		.glyphs("", "+", "-");

	let heading = MemoryElement::new("th").with_attr("data-type", "number").with_text("N");
	let body = MemoryElement::new("tbody").with_children([
		MemoryElement::new("tr")
			.with_attr("id", "one")
			.with_child(MemoryElement::new("td").with_attr("data-key", "1").with_text("ten")),
		MemoryElement::new("tr")
			.with_attr("id", "two")
			.with_child(MemoryElement::new("td").with_attr("data-key", "2").with_text("five")),
	]);
	let table = MemoryElement::new("table")
		.with_class("grid")
		.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(heading.clone())))
		.with_child(body.clone());

	let _handle = TableSorter::with_config(config).attach(&table).unwrap();
	heading.click();

	assert_eq!(heading.attribute("aria-order").as_deref(), Some("desc"));
	assert_eq!(heading.text_content(), "N-");
	assert_eq!(row_ids(&body), vec!["two", "one"]);
}

#[rstest]
fn test_sorter_from_json() {
	let sorter = TableSorter::from_json(r#"{"table_class": "data"}"#).unwrap();
	assert_eq!(sorter.config().table_class, "data");

	assert!(matches!(
		TableSorter::from_json("not json"),
		Err(SortError::Config(_))
	));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
	#[test]
	fn prop_number_column_sorts_and_preserves_rows(values in prop::collection::vec(-10_000i32..10_000, 1..25)) {
		let price = header("Price", "number");
		let body = MemoryElement::new("tbody").with_children(values.iter().enumerate().map(|(i, v)| {
			MemoryElement::new("tr")
				.with_attr("id", i.to_string())
				.with_child(cell(&format!("${}", v)))
		}));
		let table = MemoryElement::new("table")
			.with_class("sortable-table")
			.with_child(MemoryElement::new("thead").with_child(MemoryElement::new("tr").with_child(price.clone())))
			.with_child(body.clone());
		let _handle = TableSorter::new().attach(&table).unwrap();

		price.click();
		price.click();

		let sorted: Vec<i32> = body
			.children()
			.iter()
			.map(|row| row.text_content().trim_start_matches('$').parse().unwrap())
			.collect();
		prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

		let mut expected = values.clone();
		expected.sort();
		prop_assert_eq!(sorted, expected);

		let mut ids = row_ids(&body);
		ids.sort();
		let mut all_ids: Vec<String> = (0..values.len()).map(|i| i.to_string()).collect();
		all_ids.sort();
		prop_assert_eq!(ids, all_ids);
	}
}
