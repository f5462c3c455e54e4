use anyhow::Result;
use brewdeck::UiConfig;
use serde::Deserialize;

use super::super::ui::{LabelOverrides, apply_label_overrides, ui_from_preset};
use super::super::util::sanitize_label;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) preset: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) initial_category: Option<String>,
	#[serde(flatten)]
	pub(super) labels: LabelOverrides,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme: Option<String>,
	pub(super) initial_query: String,
	pub(super) initial_category: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(preset) = cli.ui_preset {
			self.preset = Some(preset.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(category) = cli.initial_category.clone() {
			self.initial_category = Some(category);
		}
		if let Some(title) = cli.title.clone() {
			self.labels.screen_title = Some(title);
		}
		if let Some(value) = cli.search_placeholder.clone() {
			self.labels.search_placeholder = Some(value);
		}
		if let Some(value) = cli.secondary_title.clone() {
			self.labels.secondary_title = Some(value);
		}
		if let Some(value) = cli.empty_message.clone() {
			self.labels.empty_message = Some(value);
		}
	}

	pub(super) fn finalize(self) -> Result<UiResolution> {
		let mut ui = ui_from_preset(self.preset.as_deref())?;
		apply_label_overrides(&mut ui, self.labels);

		Ok(UiResolution {
			ui,
			theme: self.theme.and_then(sanitize_label),
			initial_query: self.initial_query.unwrap_or_default(),
			initial_category: self.initial_category.and_then(sanitize_label),
		})
	}
}
