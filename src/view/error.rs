use thiserror::Error;

use super::Category;

/// Contract violations reported by the view layer. None of them are fatal:
/// the view keeps its previous state and the caller decides what to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
	#[error("category `{category}` is not offered by this catalog")]
	InvalidCategorySelection { category: Category },
	#[error("category position {index} is out of range ({available} categories)")]
	CategoryIndexOutOfRange { index: usize, available: usize },
	#[error("malformed {section} catalog record #{index}: {reason}")]
	MalformedCatalogItem {
		section: &'static str,
		index: usize,
		reason: String,
	},
}
