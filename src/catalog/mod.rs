//! Catalog records and the loader that stands in for the catalog provider.
//!
//! Catalogs are immutable once built; the view layer only ever reads them.

mod error;
mod item;
mod load;

pub use error::CatalogError;
pub use item::{Catalog, CatalogItem, CatalogSet};
pub use load::{LoadReport, from_json_str, load_path};
