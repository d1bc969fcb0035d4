use crate::dropdown::DEFAULT_MENU_HEIGHT;

/// Text and sizing used when rendering the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub placeholder: String,
	pub summary_title: String,
	pub empty_summary: String,
	pub menu_height: usize,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Dropdown:".to_string(),
			placeholder: "Default text".to_string(),
			summary_title: "Selected Elements:".to_string(),
			empty_summary: "No selected elements".to_string(),
			menu_height: DEFAULT_MENU_HEIGHT,
		}
	}
}
