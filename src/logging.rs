//! File-backed structured logging.
//!
//! The terminal belongs to the picker while it runs, so events are written to
//! a log file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// configured level.
pub const LOG_ENV: &str = "MULTIPICK_LOG";

const LOG_FILE_NAME: &str = "multipick.log";

/// Accepted values for the configured log level.
pub const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Default log file location inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Build the filter: `MULTIPICK_LOG` when set, otherwise `multipick=<level>`.
pub fn filter_for(level: &str) -> Result<EnvFilter> {
	match std::env::var(LOG_ENV) {
		Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive)
			.with_context(|| format!("invalid {LOG_ENV} directive")),
		_ => EnvFilter::try_new(format!("multipick={level}"))
			.with_context(|| format!("invalid log level `{level}`")),
	}
}

/// Install the global subscriber writing to `file`.
///
/// With level `off` and no `MULTIPICK_LOG` override nothing is installed and
/// no file is created.
pub fn initialize(level: &str, file: &Path) -> Result<()> {
	if level == "off" && std::env::var_os(LOG_ENV).is_none() {
		return Ok(());
	}

	let filter = filter_for(level)?;
	let writer = open_log_file(file)?;
	subscriber(filter, writer)
		.try_init()
		.context("failed to install the log subscriber")?;

	tracing::debug!(event = "logging.initialized", file = %file.display(), level);
	Ok(())
}

/// Open `file` for appending, creating its directory first.
fn open_log_file(file: &Path) -> Result<File> {
	if let Some(parent) = file.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(file)
		.with_context(|| format!("failed to open log file {}", file.display()))
}

fn subscriber(filter: EnvFilter, writer: File) -> impl tracing::Subscriber + Send + Sync + 'static {
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(Mutex::new(writer))
				.with_ansi(false)
				.with_target(false),
		)
		.with(filter)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_accepted_level_builds_a_filter() {
		for level in LEVELS {
			assert!(
				EnvFilter::try_new(format!("multipick={level}")).is_ok(),
				"{level} should parse"
			);
		}
	}

	#[test]
	fn events_land_in_a_file_under_a_new_directory() {
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("nested").join("multipick.log");
		let writer = open_log_file(&file).unwrap();
		let filter = EnvFilter::try_new("multipick=info").unwrap();

		tracing::subscriber::with_default(subscriber(filter, writer), || {
			tracing::info!(event = "logging.kept", "selection changed");
			tracing::debug!(event = "logging.filtered");
		});

		let written = fs::read_to_string(&file).unwrap();
		assert!(written.contains("logging.kept"));
		assert!(written.contains("selection changed"));
		assert!(!written.contains("logging.filtered"));
	}
}
