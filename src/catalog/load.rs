use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::{Catalog, CatalogError, CatalogItem, CatalogSet};
use crate::view::ViewError;

/// Result of loading a catalog document: the usable items plus every record
/// that had to be left out.
#[derive(Debug, Default)]
pub struct LoadReport {
	pub catalogs: CatalogSet,
	pub skipped: Vec<ViewError>,
}

/// Read and parse a catalog document from disk.
///
/// # Errors
///
/// Returns [`CatalogError`] when the file cannot be read or is not a catalog
/// document. Individual malformed records are reported in
/// [`LoadReport::skipped`] instead.
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadReport, CatalogError> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = text.len(), "read catalog file");
	from_json_str(&text)
}

/// Parse a catalog document.
///
/// Accepts either a bare array (the primary catalog) or an object with
/// optional `primary` and `secondary` arrays.
pub fn from_json_str(text: &str) -> Result<LoadReport, CatalogError> {
	let document: Value = serde_json::from_str(text)?;
	let (primary, secondary) = match document {
		Value::Array(items) => (items, Vec::new()),
		Value::Object(mut sections) => (
			take_section(&mut sections, "primary")?,
			take_section(&mut sections, "secondary")?,
		),
		_ => return Err(CatalogError::Shape),
	};

	let mut skipped = Vec::new();
	let primary = collect_items("primary", primary, &mut skipped);
	let secondary = collect_items("secondary", secondary, &mut skipped);
	tracing::info!(
		primary = primary.len(),
		secondary = secondary.len(),
		skipped = skipped.len(),
		"catalog loaded"
	);

	Ok(LoadReport {
		catalogs: CatalogSet::new(primary, secondary),
		skipped,
	})
}

fn take_section(sections: &mut Map<String, Value>, key: &str) -> Result<Vec<Value>, CatalogError> {
	match sections.remove(key) {
		None | Some(Value::Null) => Ok(Vec::new()),
		Some(Value::Array(items)) => Ok(items),
		Some(_) => Err(CatalogError::Shape),
	}
}

fn collect_items(section: &'static str, raw: Vec<Value>, skipped: &mut Vec<ViewError>) -> Catalog {
	let mut seen_ids = HashSet::new();
	let mut items = Vec::with_capacity(raw.len());

	for (index, value) in raw.into_iter().enumerate() {
		match parse_item(value) {
			Ok(item) => {
				if !seen_ids.insert(item.id.clone()) {
					tracing::warn!(section, index, id = %item.id, "duplicate catalog id");
				}
				items.push(item);
			}
			Err(reason) => {
				let error = ViewError::MalformedCatalogItem {
					section,
					index,
					reason,
				};
				tracing::warn!(%error, "skipping catalog record");
				skipped.push(error);
			}
		}
	}

	Catalog::new(items)
}

fn parse_item(value: Value) -> Result<CatalogItem, String> {
	let Value::Object(fields) = value else {
		return Err("record is not an object".to_string());
	};
	for key in ["id", "name"] {
		match fields.get(key) {
			Some(Value::String(text)) if !text.trim().is_empty() => {}
			Some(Value::String(_)) => return Err(format!("`{key}` is blank")),
			Some(_) => return Err(format!("`{key}` is not a string")),
			None => return Err(format!("missing `{key}`")),
		}
	}
	serde_json::from_value(Value::Object(fields)).map_err(|err| err.to_string())
}
