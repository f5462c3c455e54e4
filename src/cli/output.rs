use anyhow::Result;
use brewdeck::{BrowseOutcome, CatalogItem, CatalogView};
use serde_json::json;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	if !outcome.accepted {
		println!("Browsing cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(item) => println!("{}\t{}", item.id, item.name),
		None => println!("No selection"),
	}
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"category": outcome.category.label(),
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One line per visible item, tab separated.
pub(crate) fn format_items_plain(items: &[CatalogItem]) -> String {
	items
		.iter()
		.map(|item| format!("{}\t{}\n", item.id, item.name))
		.collect()
}

/// The view's snapshot plus the full visible items.
pub(crate) fn format_view_json(view: &CatalogView) -> Result<String> {
	let payload = json!({
		"view": view.snapshot(),
		"items": view.visible_items(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
	use brewdeck::{CatalogSet, Category};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_selected_item() {
		let outcome = BrowseOutcome {
			accepted: true,
			query: "lat".into(),
			category: Category::All,
			selection: Some(CatalogItem::new("C1", "Latte").with_detail("roasted", "Medium Roasted")),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["category"], "All");
		assert_eq!(value["selection"]["id"], "C1");
		assert_eq!(value["selection"]["roasted"], "Medium Roasted");
	}

	#[test]
	fn plain_items_are_tab_separated() {
		let items = vec![CatalogItem::new("C1", "Latte"), CatalogItem::new("C2", "Mocha")];
		assert_eq!(format_items_plain(&items), "C1\tLatte\nC2\tMocha\n");
	}

	#[test]
	fn view_json_carries_snapshot_and_items() {
		let mut view = CatalogView::new(CatalogSet::primary_only(vec![
			CatalogItem::new("C1", "Latte"),
			CatalogItem::new("C2", "Mocha"),
		]));
		view.edit_search_text("MO");

		let value: Value = serde_json::from_str(&format_view_json(&view).unwrap()).unwrap();
		assert_eq!(value["view"]["search_text"], "MO");
		assert_eq!(value["items"][0]["name"], "Mocha");
		assert_eq!(value["items"].as_array().unwrap().len(), 1);
	}
}
