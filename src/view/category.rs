use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Label shown for the synthetic "no filtering" category.
pub const ALL_LABEL: &str = "All";

/// A category chip: either the synthetic `All` or a concrete item name.
///
/// Keeping `All` as its own variant means an item literally named "All" is
/// still an ordinary category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Category {
	#[default]
	All,
	Named(String),
}

impl Category {
	#[must_use]
	pub fn named(name: impl Into<String>) -> Self {
		Self::Named(name.into())
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}

	pub fn label(&self) -> &str {
		match self {
			Self::All => ALL_LABEL,
			Self::Named(name) => name,
		}
	}

	/// Whether `item` belongs to this category.
	pub fn matches(&self, item: &CatalogItem) -> bool {
		match self {
			Self::All => true,
			Self::Named(name) => item.name == *name,
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// `All` followed by each distinct item name in order of first appearance.
pub fn derive_categories(catalog: &[CatalogItem]) -> Vec<Category> {
	let mut seen = HashSet::new();
	let mut categories = vec![Category::All];
	for item in catalog {
		if seen.insert(item.name.as_str()) {
			categories.push(Category::Named(item.name.clone()));
		}
	}
	categories
}

/// Items belonging to `category`, in source order.
pub fn filter_by_category(category: &Category, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
	catalog
		.iter()
		.filter(|item| category.matches(item))
		.cloned()
		.collect()
}

/// Items whose name contains `query`, ignoring case, in source order.
pub fn search_by_name(query: &str, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
	let needle = query.to_lowercase();
	catalog
		.iter()
		.filter(|item| item.name.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}
