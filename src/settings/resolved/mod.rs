use std::path::PathBuf;

use brewdeck::UiConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog_path: PathBuf,
	pub initial_query: String,
	pub initial_category: Option<String>,
	pub theme: Option<String>,
	pub ui: UiConfig,
	pub log_level: String,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}

	/// Same summary on stderr, for runs whose stdout carries the result.
	pub fn eprint_summary(&self) {
		eprint!("{}", summary::format_summary(self));
	}
}
