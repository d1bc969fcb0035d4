use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub(super) const REGISTRY: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT), ("mono", MONO)];

pub const SLATE: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	field_border: Style::new().fg(Color::Rgb(100, 116, 139)),
	placeholder: Style::new().fg(Color::DarkGray),
	chip: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	chip_remove: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.bg(Color::Rgb(30, 41, 59)),
	arrow: Style::new().fg(Color::LightCyan),
	menu_border: Style::new().fg(Color::Rgb(100, 116, 139)),
	menu_item: Style::new().fg(Color::Rgb(203, 213, 225)),
	menu_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	summary_border: Style::new().fg(Color::Rgb(71, 85, 105)),
	summary_item: Style::new().fg(Color::Rgb(226, 232, 240)),
	empty: Style::new().fg(Color::DarkGray),
	hint: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	field_border: Style::new().fg(Color::Rgb(148, 163, 184)),
	placeholder: Style::new().fg(Color::Gray),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	chip_remove: Style::new()
		.fg(Color::Rgb(185, 28, 28))
		.bg(Color::Rgb(226, 232, 240)),
	arrow: Style::new().fg(Color::Blue),
	menu_border: Style::new().fg(Color::Rgb(148, 163, 184)),
	menu_item: Style::new().fg(Color::Rgb(30, 41, 59)),
	menu_highlight: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.fg(Color::Rgb(30, 64, 175)),
	summary_border: Style::new().fg(Color::Rgb(203, 213, 225)),
	summary_item: Style::new().fg(Color::Rgb(15, 23, 42)),
	empty: Style::new().fg(Color::Gray),
	hint: Style::new().fg(Color::Gray),
};

pub const MONO: Theme = Theme {
	heading: Style::new().add_modifier(Modifier::BOLD),
	field_border: Style::new(),
	placeholder: Style::new().add_modifier(Modifier::DIM),
	chip: Style::new().add_modifier(Modifier::REVERSED),
	chip_remove: Style::new().add_modifier(Modifier::REVERSED.union(Modifier::BOLD)),
	arrow: Style::new(),
	menu_border: Style::new(),
	menu_item: Style::new(),
	menu_highlight: Style::new().add_modifier(Modifier::REVERSED),
	summary_border: Style::new(),
	summary_item: Style::new(),
	empty: Style::new().add_modifier(Modifier::DIM),
	hint: Style::new().add_modifier(Modifier::DIM),
};
