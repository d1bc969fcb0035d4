use std::path::PathBuf;

use multipick::UiConfig;

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
	/// Candidate labels from the `items` setting; used when no other source
	/// provides any.
	pub items: Vec<String>,
	pub ui: UiConfig,
	pub theme: String,
	pub log_level: String,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
