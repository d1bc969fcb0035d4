use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::sanitize_labels;

mod logging;
mod ui;

use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	items: Option<Vec<String>>,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			menu_height: detect_source(
				cli.menu_height.is_some(),
				self.ui.menu_height.is_some(),
				"MULTIPICK__UI__MENU_HEIGHT",
				"--menu-height",
				"ui.menu_height",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MULTIPICK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"MULTIPICK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let items = self.items.map(sanitize_labels).unwrap_or_default();
		let ui = self.ui.finalize();
		let logging = self.logging.finalize()?;

		let config = ResolvedConfig {
			items,
			ui: ui.ui,
			theme: ui.theme,
			log_level: logging.level,
			log_file: logging.file,
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
