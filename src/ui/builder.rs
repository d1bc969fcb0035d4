use anyhow::Result;

use super::{App, PickOutcome, UiConfig};
use crate::tui::theme::{self, Theme};

/// A small builder for configuring the interactive picker before running it.
pub struct PickerUi {
	labels: Vec<String>,
	ui: UiConfig,
	theme: Option<Theme>,
}

impl PickerUi {
	/// Create a picker offering `labels`, in the given order.
	pub fn new<I, S>(labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			labels: labels.into_iter().map(Into::into).collect(),
			ui: UiConfig::default(),
			theme: None,
		}
	}

	#[must_use]
	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui = config;
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.ui.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.ui.title = title.into();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a bundled theme by name. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	/// Build the host state without touching the terminal.
	pub fn into_app(self) -> App {
		let mut app = App::new(self.labels, self.ui);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the interactive picker until the user accepts or cancels.
	pub fn run(self) -> Result<PickOutcome> {
		self.into_app().run()
	}
}
