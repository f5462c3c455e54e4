use serde::Serialize;

use super::category::{derive_categories, filter_by_category, search_by_name};
use super::{Category, ViewError};
use crate::catalog::{Catalog, CatalogItem, CatalogSet};

/// Which rule produced the current visible items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum FilterMode {
	Unfiltered,
	CategoryFiltered(String),
	SearchFiltered(String),
}

/// Serializable copy of the view state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
	pub mode: FilterMode,
	pub active_category: Category,
	pub search_text: String,
	pub visible_ids: Vec<String>,
	pub selected: usize,
	pub scroll_offset: usize,
}

/// View state over an injected, immutable pair of catalogs.
///
/// Only the primary catalog is searchable and filterable; the secondary
/// catalog is always shown in full.
#[derive(Debug, Clone)]
pub struct CatalogView {
	catalogs: CatalogSet,
	categories: Vec<Category>,
	active_category: Category,
	search_text: String,
	visible: Vec<CatalogItem>,
	mode: FilterMode,
	selected: usize,
	scroll_offset: usize,
}

impl CatalogView {
	pub fn new(catalogs: CatalogSet) -> Self {
		let categories = derive_categories(&catalogs.primary);
		let visible = filter_by_category(&Category::All, &catalogs.primary);
		tracing::debug!(
			items = catalogs.primary.len(),
			categories = categories.len(),
			"catalog view created"
		);
		Self {
			catalogs,
			categories,
			active_category: Category::All,
			search_text: String::new(),
			visible,
			mode: FilterMode::Unfiltered,
			selected: 0,
			scroll_offset: 0,
		}
	}

	pub fn primary(&self) -> &Catalog {
		&self.catalogs.primary
	}

	pub fn secondary(&self) -> &Catalog {
		&self.catalogs.secondary
	}

	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	pub fn active_category(&self) -> &Category {
		&self.active_category
	}

	/// Position of the active category within [`Self::categories`].
	pub fn active_category_index(&self) -> usize {
		self.categories
			.iter()
			.position(|category| *category == self.active_category)
			.unwrap_or(0)
	}

	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	pub fn visible_items(&self) -> &[CatalogItem] {
		&self.visible
	}

	pub fn mode(&self) -> &FilterMode {
		&self.mode
	}

	pub fn selected_index(&self) -> usize {
		self.selected
	}

	pub fn selected_item(&self) -> Option<&CatalogItem> {
		self.visible.get(self.selected)
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	pub fn snapshot(&self) -> ViewSnapshot {
		ViewSnapshot {
			mode: self.mode.clone(),
			active_category: self.active_category.clone(),
			search_text: self.search_text.clone(),
			visible_ids: self.visible.iter().map(|item| item.id.clone()).collect(),
			selected: self.selected,
			scroll_offset: self.scroll_offset,
		}
	}

	/// Replace the visible items with the primary items whose name contains
	/// `query` (case-insensitive), dropping any category filter.
	///
	/// An empty query leaves the view untouched; clearing is
	/// [`Self::reset_search`]'s job. Returns whether the view changed.
	pub fn search(&mut self, query: &str) -> bool {
		if query.is_empty() {
			return false;
		}
		self.active_category = Category::All;
		self.visible = search_by_name(query, &self.catalogs.primary);
		self.mode = FilterMode::SearchFiltered(query.to_string());
		self.rewind();
		self.emit("search");
		true
	}

	/// Store the search box contents and search for them.
	pub fn edit_search_text(&mut self, text: impl Into<String>) -> bool {
		self.search_text = text.into();
		let query = self.search_text.clone();
		self.search(&query)
	}

	/// Search for whatever is currently in the search box.
	pub fn submit_search(&mut self) -> bool {
		let query = self.search_text.clone();
		self.search(&query)
	}

	/// Clear the search box and show the full primary catalog.
	pub fn reset_search(&mut self) {
		self.search_text.clear();
		self.active_category = Category::All;
		self.visible = self.catalogs.primary.to_vec();
		self.mode = FilterMode::Unfiltered;
		self.rewind();
		self.emit("reset_search");
	}

	/// Show only the items of `category`.
	///
	/// The search text is left as typed even though the results no longer
	/// reflect it.
	///
	/// # Errors
	///
	/// Returns [`ViewError::InvalidCategorySelection`] without touching the
	/// view when `category` is not one of [`Self::categories`].
	pub fn select_category(&mut self, category: &Category) -> Result<(), ViewError> {
		if !self.categories.contains(category) {
			let error = ViewError::InvalidCategorySelection {
				category: category.clone(),
			};
			tracing::warn!(%error, "ignoring category selection");
			return Err(error);
		}
		self.active_category = category.clone();
		self.visible = filter_by_category(category, &self.catalogs.primary);
		self.mode = match category {
			Category::All => FilterMode::Unfiltered,
			Category::Named(name) => FilterMode::CategoryFiltered(name.clone()),
		};
		self.rewind();
		self.emit("select_category");
		Ok(())
	}

	/// Select the category at `index` in [`Self::categories`].
	pub fn select_category_at(&mut self, index: usize) -> Result<(), ViewError> {
		let Some(category) = self.categories.get(index).cloned() else {
			let error = ViewError::CategoryIndexOutOfRange {
				index,
				available: self.categories.len(),
			};
			tracing::warn!(%error, "ignoring category selection");
			return Err(error);
		};
		self.select_category(&category)
	}

	/// Move `step` tabs away from the active category, wrapping around.
	pub fn cycle_category(&mut self, step: isize) -> &Category {
		let len = self.categories.len() as isize;
		let next = (self.active_category_index() as isize + step).rem_euclid(len) as usize;
		let category = self.categories[next].clone();
		if self.select_category(&category).is_err() {
			tracing::error!(%category, "derived category rejected by its own view");
		}
		&self.active_category
	}

	/// Move the cursor over the visible items, clamped to the list.
	pub fn move_selection(&mut self, delta: isize) {
		if self.visible.is_empty() {
			self.selected = 0;
			return;
		}
		let last = self.visible.len() - 1;
		self.selected = self.selected.saturating_add_signed(delta).min(last);
	}

	/// Adjust the scroll offset so the cursor fits in a window of `capacity`
	/// items.
	pub fn follow_selection(&mut self, capacity: usize) {
		let capacity = capacity.max(1);
		if self.selected < self.scroll_offset {
			self.scroll_offset = self.selected;
		} else if self.selected >= self.scroll_offset + capacity {
			self.scroll_offset = self.selected + 1 - capacity;
		}
	}

	fn rewind(&mut self) {
		self.selected = 0;
		self.scroll_offset = 0;
	}

	fn emit(&self, operation: &'static str) {
		tracing::debug!(operation, snapshot = ?self.snapshot(), "view updated");
	}
}
