use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a catalog document from being read at all.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog file {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("catalog is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("catalog must be an array of items or an object with `primary`/`secondary` arrays")]
	Shape,
}
