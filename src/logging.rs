//! Structured logging setup.
//!
//! The terminal belongs to the UI while it runs, so interactive sessions log
//! to a file. Headless runs log to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

const LOG_FILE_NAME: &str = "brewdeck.log";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

impl LogTarget {
	/// `<data dir>/brewdeck.log`.
	pub fn default_file() -> Result<Self> {
		Ok(Self::File(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)))
	}
}

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Calling this twice is an error.
pub fn initialize(default_level: &str, target: &LogTarget) -> Result<()> {
	let filter = env_filter(default_level);
	match target {
		LogTarget::Stderr => tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().with_target(false).with_writer(std::io::stderr))
			.try_init()?,
		LogTarget::File(path) => {
			let file = open_log_file(path)?;
			tracing_subscriber::registry()
				.with(filter)
				.with(
					fmt::layer()
						.with_target(false)
						.with_ansi(false)
						.with_writer(Mutex::new(file)),
				)
				.try_init()?
		}
	}
	Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_file_and_parents_are_created() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested/logs/brewdeck.log");
		open_log_file(&path).unwrap();
		assert!(path.exists());
	}

	#[test]
	fn default_file_uses_log_name() {
		if let Ok(LogTarget::File(path)) = LogTarget::default_file() {
			assert!(path.ends_with(LOG_FILE_NAME));
		}
	}
}
