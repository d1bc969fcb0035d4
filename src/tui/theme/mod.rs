mod builtins;

use ratatui::style::Style;

pub use builtins::{LIGHT, MONO, SLATE};

/// Styles applied to every part of the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
	pub heading: Style,
	pub field_border: Style,
	pub placeholder: Style,
	pub chip: Style,
	pub chip_remove: Style,
	pub arrow: Style,
	pub menu_border: Style,
	pub menu_item: Style,
	pub menu_highlight: Style,
	pub summary_border: Style,
	pub summary_item: Style,
	pub empty: Style,
	pub hint: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

const DEFAULT_THEME: &str = "slate";

/// Theme used when nothing else is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Name of the theme returned by [`default_theme`].
#[must_use]
pub fn default_theme_name() -> &'static str {
	DEFAULT_THEME
}

/// Names of the bundled themes, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Look up a bundled theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	builtins::REGISTRY
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_whitespace() {
		assert_eq!(by_name(" Light "), Some(LIGHT));
		assert_eq!(by_name("SLATE"), Some(SLATE));
		assert_eq!(by_name("missing"), None);
	}

	#[test]
	fn default_theme_is_registered() {
		assert!(names().contains(&default_theme_name()));
		assert_eq!(by_name(default_theme_name()), Some(default_theme()));
	}
}
