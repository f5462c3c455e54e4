//! Storefront catalog browser: category filtering and name search over an
//! immutable, injected catalog, with a terminal front end.
//!
//! The root module re-exports the types embedders need so they can build a
//! [`CatalogView`] and drive it without digging through the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod tui;
pub mod view;

pub use catalog::{Catalog, CatalogError, CatalogItem, CatalogSet, LoadReport};
pub use tui::{App, BrowseOutcome, Theme, UiConfig};
pub use view::{CatalogView, Category, FilterMode, ViewError, ViewSnapshot};
