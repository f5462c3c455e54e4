use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Where the catalog document lives, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
	}

	pub(super) fn resolve(self) -> Result<PathBuf> {
		let mut path = self.path.ok_or_else(|| {
			anyhow!("no catalog configured: pass --catalog FILE or set `catalog.path`")
		})?;
		if path.is_relative() {
			path = env::current_dir()
				.context("failed to resolve current directory for catalog path")?
				.join(path);
		}

		let metadata = fs::metadata(&path)
			.with_context(|| format!("failed to inspect catalog file {}", path.display()))?;
		ensure!(
			metadata.is_file(),
			"catalog path {} must be a file",
			path.display()
		);

		Ok(path)
	}
}
