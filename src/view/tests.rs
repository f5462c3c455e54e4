use super::*;
use crate::catalog::{CatalogItem, CatalogSet};

fn coffee() -> Vec<CatalogItem> {
	vec![
		CatalogItem::new("C1", "Latte"),
		CatalogItem::new("C2", "Mocha"),
		CatalogItem::new("C3", "Latte"),
		CatalogItem::new("C4", "Americano"),
	]
}

fn view() -> CatalogView {
	CatalogView::new(CatalogSet::new(coffee(), vec![CatalogItem::new("B1", "Robusta")]))
}

fn visible_ids(view: &CatalogView) -> Vec<&str> {
	view.visible_items().iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn starts_unfiltered() {
	let view = view();
	assert_eq!(view.active_category(), &Category::All);
	assert_eq!(view.search_text(), "");
	assert_eq!(view.visible_items(), coffee().as_slice());
	assert_eq!(view.mode(), &FilterMode::Unfiltered);
	assert_eq!(view.secondary().len(), 1);
}

#[test]
fn search_replaces_category_filter() {
	let mut view = view();
	view.select_category(&Category::named("Americano")).unwrap();
	assert!(view.search("lat"));

	assert_eq!(view.active_category(), &Category::All);
	assert_eq!(visible_ids(&view), ["C1", "C3"]);
	assert_eq!(view.mode(), &FilterMode::SearchFiltered("lat".into()));
}

#[test]
fn search_covers_whole_catalog_not_active_category() {
	let mut view = view();
	view.select_category(&Category::named("Latte")).unwrap();
	view.search("ch");
	assert_eq!(visible_ids(&view), ["C2"]);
}

#[test]
fn empty_search_is_a_no_op() {
	let mut view = view();
	view.select_category(&Category::named("Mocha")).unwrap();
	let before = view.snapshot();

	assert!(!view.search(""));
	assert_eq!(view.snapshot(), before);
}

#[test]
fn clearing_the_box_keeps_previous_results() {
	let mut view = view();
	view.edit_search_text("moc");
	assert_eq!(visible_ids(&view), ["C2"]);

	view.edit_search_text("");
	assert_eq!(view.search_text(), "");
	assert_eq!(visible_ids(&view), ["C2"]);
	assert_eq!(view.mode(), &FilterMode::SearchFiltered("moc".into()));
}

#[test]
fn submit_uses_current_text() {
	let mut view = view();
	view.edit_search_text("ame");
	view.select_category(&Category::named("Latte")).unwrap();
	assert!(view.submit_search());
	assert_eq!(visible_ids(&view), ["C4"]);
}

#[test]
fn search_without_matches_yields_empty_list() {
	let mut view = view();
	view.search("tea");
	assert!(view.visible_items().is_empty());
	assert!(view.selected_item().is_none());
}

#[test]
fn reset_restores_everything() {
	let mut view = view();
	view.edit_search_text("mo");
	view.move_selection(1);
	view.reset_search();

	assert_eq!(view.visible_items(), coffee().as_slice());
	assert_eq!(view.active_category(), &Category::All);
	assert_eq!(view.search_text(), "");
	assert_eq!(view.mode(), &FilterMode::Unfiltered);
	assert_eq!(view.selected_index(), 0);
	assert_eq!(view.scroll_offset(), 0);
}

#[test]
fn category_selection_keeps_stale_search_text() {
	let mut view = view();
	view.edit_search_text("moc");
	view.select_category(&Category::named("Latte")).unwrap();

	assert_eq!(view.search_text(), "moc");
	assert_eq!(visible_ids(&view), ["C1", "C3"]);
	assert_eq!(view.mode(), &FilterMode::CategoryFiltered("Latte".into()));
}

#[test]
fn selecting_all_is_unfiltered() {
	let mut view = view();
	view.select_category(&Category::named("Latte")).unwrap();
	view.select_category(&Category::All).unwrap();
	assert_eq!(view.mode(), &FilterMode::Unfiltered);
	assert_eq!(view.visible_items().len(), 4);
}

#[test]
fn unknown_category_is_rejected_without_change() {
	let mut view = view();
	view.select_category(&Category::named("Mocha")).unwrap();
	let before = view.snapshot();

	let err = view.select_category(&Category::named("Chai")).unwrap_err();
	assert_eq!(
		err,
		ViewError::InvalidCategorySelection {
			category: Category::named("Chai")
		}
	);
	assert_eq!(view.snapshot(), before);
}

#[test]
fn out_of_range_index_is_rejected() {
	let mut view = view();
	let err = view.select_category_at(9).unwrap_err();
	assert_eq!(
		err,
		ViewError::CategoryIndexOutOfRange {
			index: 9,
			available: 4
		}
	);
	assert_eq!(view.mode(), &FilterMode::Unfiltered);
}

#[test]
fn repeated_selection_is_idempotent() {
	let mut view = view();
	view.select_category(&Category::named("Latte")).unwrap();
	let once = view.visible_items().to_vec();
	let active = view.active_category().clone();
	view.select_category(&active).unwrap();
	assert_eq!(view.visible_items(), once.as_slice());
}

#[test]
fn cycling_wraps_both_ways() {
	let mut view = view();
	assert_eq!(view.cycle_category(-1), &Category::named("Americano"));
	assert_eq!(view.cycle_category(1), &Category::All);
	assert_eq!(view.cycle_category(2), &Category::named("Mocha"));
	assert_eq!(view.active_category_index(), 2);
}

#[test]
fn selection_clamps_and_resets_on_filter() {
	let mut view = view();
	view.move_selection(10);
	assert_eq!(view.selected_index(), 3);
	view.move_selection(-10);
	assert_eq!(view.selected_index(), 0);

	view.move_selection(2);
	view.follow_selection(2);
	assert_eq!(view.scroll_offset(), 1);

	view.select_category(&Category::named("Latte")).unwrap();
	assert_eq!(view.selected_index(), 0);
	assert_eq!(view.scroll_offset(), 0);
}

#[test]
fn search_and_reset_rewind_the_cursor() {
	let mut view = view();
	view.move_selection(3);
	view.follow_selection(1);
	assert_eq!(view.scroll_offset(), 3);

	assert!(view.search("a"));
	assert_eq!(view.selected_index(), 0);
	assert_eq!(view.scroll_offset(), 0);

	view.move_selection(2);
	view.follow_selection(1);
	view.reset_search();
	assert_eq!(view.selected_index(), 0);
	assert_eq!(view.scroll_offset(), 0);
}

#[test]
fn follow_selection_scrolls_back() {
	let mut view = view();
	view.move_selection(3);
	view.follow_selection(1);
	assert_eq!(view.scroll_offset(), 3);
	view.move_selection(-2);
	view.follow_selection(1);
	assert_eq!(view.scroll_offset(), 1);
}

#[test]
fn snapshot_serializes_mode_and_ids() {
	let mut view = view();
	view.edit_search_text("lat");
	let json = serde_json::to_value(view.snapshot()).unwrap();
	assert_eq!(json["mode"]["mode"], "search_filtered");
	assert_eq!(json["mode"]["value"], "lat");
	assert_eq!(json["active_category"]["kind"], "all");
	assert_eq!(json["visible_ids"], serde_json::json!(["C1", "C3"]));
}

#[test]
fn empty_catalog_view() {
	let mut view = CatalogView::new(CatalogSet::default());
	assert_eq!(view.categories(), &[Category::All]);
	assert!(view.visible_items().is_empty());
	view.move_selection(1);
	assert_eq!(view.selected_index(), 0);
	assert_eq!(view.cycle_category(1), &Category::All);
}
