use std::path::PathBuf;

use anyhow::Result;
use multipick::logging;
use serde::Deserialize;

use super::super::util::normalize_key;
use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

pub(super) struct LoggingResolution {
	pub(super) level: String,
	pub(super) file: PathBuf,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn finalize(self) -> Result<LoggingResolution> {
		let level = self
			.level
			.as_deref()
			.map(normalize_key)
			.unwrap_or_else(|| DEFAULT_LEVEL.to_string());
		let file = match self.file {
			Some(file) => file,
			None => logging::default_log_file()?,
		};
		Ok(LoggingResolution { level, file })
	}
}
