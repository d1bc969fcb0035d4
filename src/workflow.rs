use anyhow::Result;
use multipick::{PickOutcome, PickerUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickWorkflow {
	picker: PickerUi,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig, candidates: Vec<String>) -> Self {
		let ResolvedConfig { ui, theme, .. } = config;
		let picker = PickerUi::new(candidates)
			.with_ui_config(ui)
			.with_theme_name(&theme);
		Self { picker }
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		self.picker.run()
	}
}
