use brewdeck::tui::theme;
use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		));
	}

	if let Err(err) = EnvFilter::try_new(&config.log_level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			format!("not a valid log filter ({err})"),
		));
	}

	Ok(())
}
