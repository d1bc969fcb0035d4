use multipick::logging::LEVELS;
use multipick::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.ui.menu_height == 0 {
		return Err(ConfigError::invalid(
			"ui.menu_height",
			config.ui.menu_height.to_string(),
			sources.source_for_menu_height(),
			"must be at least 1",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.as_str(),
			sources.source_for_theme(),
			format!("expected one of: {}", theme::names().join(", ")),
		));
	}

	if !LEVELS.contains(&config.log_level.as_str()) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.as_str(),
			sources.source_for_log_level(),
			format!("expected one of: {}", LEVELS.join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use multipick::UiConfig;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			items: Vec::new(),
			ui: UiConfig::default(),
			theme: "slate".to_string(),
			log_level: "warn".to_string(),
			log_file: PathBuf::from("/tmp/multipick.log"),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_menu_height() {
		let mut config = config();
		config.ui.menu_height = 0;
		let sources = ConfigSources {
			menu_height: Some(SettingSource::Environment("MULTIPICK__UI__MENU_HEIGHT")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.menu_height");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let mut config = config();
		config.log_level = "loud".to_string();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert_eq!(err.origin, SettingSource::ConfigKey("logging.level"));
		assert!(err.to_string().contains("expected one of: trace"));
	}
}
