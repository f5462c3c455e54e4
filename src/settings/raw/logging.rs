use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";
const VERBOSE_LEVEL: &str = "debug";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.verbose {
			self.level = Some(VERBOSE_LEVEL.to_string());
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn finalize(self) -> (String, Option<PathBuf>) {
		let level = self
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty())
			.unwrap_or_else(|| DEFAULT_LEVEL.to_string());
		(level, self.file)
	}
}
