use anyhow::{Result, bail};
use brewdeck::UiConfig;
use serde::Deserialize;

use super::util::sanitize_label;

/// Label overrides accepted under `[ui]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LabelOverrides {
	pub(super) screen_title: Option<String>,
	pub(super) search_placeholder: Option<String>,
	pub(super) secondary_title: Option<String>,
	pub(super) empty_message: Option<String>,
	pub(super) detail_title: Option<String>,
}

/// Create a [`UiConfig`] instance from an optional preset name.
pub(super) fn ui_from_preset(preset: Option<&str>) -> Result<UiConfig> {
	let Some(raw) = preset else {
		return Ok(UiConfig::default());
	};

	if raw.trim().is_empty() {
		return Ok(UiConfig::default());
	}

	match UiConfig::from_preset(raw) {
		Some(config) => Ok(config),
		None => bail!("unknown UI preset '{}'", raw.trim()),
	}
}

/// Apply non-blank label overrides onto `target`.
pub(super) fn apply_label_overrides(target: &mut UiConfig, labels: LabelOverrides) {
	if let Some(value) = labels.screen_title.and_then(sanitize_label) {
		target.screen_title = value;
	}
	if let Some(value) = labels.search_placeholder.and_then(sanitize_label) {
		target.search_placeholder = value;
	}
	if let Some(value) = labels.secondary_title.and_then(sanitize_label) {
		target.secondary_title = value;
	}
	if let Some(value) = labels.empty_message.and_then(sanitize_label) {
		target.empty_message = value;
	}
	if let Some(value) = labels.detail_title.and_then(sanitize_label) {
		target.detail_title = value;
	}
}
