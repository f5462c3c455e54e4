//! Filtering and search state for the storefront screen.
//!
//! [`CatalogView`] owns the derived state (active category, search text,
//! visible items) and recomputes it from the injected catalog on every
//! operation. The free functions are the pure building blocks it uses.

mod category;
mod error;
mod state;

pub use category::{ALL_LABEL, Category, derive_categories, filter_by_category, search_by_name};
pub use error::ViewError;
pub use state::{CatalogView, FilterMode, ViewSnapshot};

#[cfg(test)]
mod tests;
