use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::view::{CatalogView, Category};

/// How a browsing session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseOutcome {
	pub accepted: bool,
	pub query: String,
	pub category: Category,
	pub selection: Option<CatalogItem>,
}

impl BrowseOutcome {
	/// The user picked the item under the cursor (if any).
	pub fn accepted(view: &CatalogView) -> Self {
		Self {
			accepted: true,
			query: view.search_text().to_string(),
			category: view.active_category().clone(),
			selection: view.selected_item().cloned(),
		}
	}

	/// The user left without choosing.
	pub fn cancelled(view: &CatalogView) -> Self {
		Self {
			accepted: false,
			query: view.search_text().to_string(),
			category: view.active_category().clone(),
			selection: None,
		}
	}
}
