use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod logging;
mod ui;

use catalog::CatalogSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"BREWDECK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			logging_level: detect_source(
				cli.verbose,
				self.logging.level.is_some(),
				"BREWDECK__LOGGING__LEVEL",
				"--verbose",
				"logging.level",
			),
		};

		let catalog_path = self.catalog.resolve()?;
		let ui = self.ui.finalize()?;
		let (log_level, log_file) = self.logging.finalize();

		let config = ResolvedConfig {
			catalog_path,
			initial_query: ui.initial_query,
			initial_category: ui.initial_category,
			theme: ui.theme,
			ui: ui.ui,
			log_level,
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
