use std::sync::mpsc::{self, Receiver};

use super::config::UiConfig;
use crate::dropdown::Dropdown;
use crate::tui::theme::Theme;

/// Host state: the dropdown plus the selection it last reported.
pub struct App {
	pub(crate) dropdown: Dropdown,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	selected: Vec<String>,
	selection_updates: Receiver<Vec<String>>,
}

impl App {
	pub fn new<I, S>(labels: I, ui: UiConfig) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let (selection_tx, selection_updates) = mpsc::channel();
		let dropdown = Dropdown::new(labels, ui.placeholder.clone())
			.with_menu_height(ui.menu_height)
			.on_change(move |selected| {
				// The receiver lives as long as the app that owns this dropdown.
				let _ = selection_tx.send(selected.to_vec());
			});

		Self {
			dropdown,
			ui,
			theme: Theme::default(),
			selected: Vec::new(),
			selection_updates,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn dropdown(&self) -> &Dropdown {
		&self.dropdown
	}

	/// The selection as last reported by the dropdown.
	pub fn selected(&self) -> &[String] {
		&self.selected
	}

	/// Apply every selection report received since the last call.
	pub(crate) fn pump_selection_updates(&mut self) {
		while let Ok(selected) = self.selection_updates.try_recv() {
			self.selected = selected;
		}
	}
}
