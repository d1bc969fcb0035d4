use multipick::UiConfig;
use multipick::tui::theme;
use serde::Deserialize;

use super::super::util::normalize_key;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) summary_title: Option<String>,
	pub(super) empty_summary: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) menu_height: Option<usize>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(summary_title) = cli.summary_title.clone() {
			self.summary_title = Some(summary_title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(rows) = cli.menu_height {
			self.menu_height = Some(rows);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(title) = self.title {
			ui.title = title;
		}
		if let Some(placeholder) = self.placeholder {
			ui.placeholder = placeholder;
		}
		if let Some(summary_title) = self.summary_title {
			ui.summary_title = summary_title;
		}
		if let Some(empty_summary) = self.empty_summary {
			ui.empty_summary = empty_summary;
		}
		if let Some(rows) = self.menu_height {
			ui.menu_height = rows;
		}

		let theme = self
			.theme
			.as_deref()
			.map(normalize_key)
			.unwrap_or_else(|| theme::default_theme_name().to_string());

		UiResolution { ui, theme }
	}
}
