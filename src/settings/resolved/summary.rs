use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Title: {}", config.ui.title);
	println!("  Placeholder: {}", config.ui.placeholder);
	println!("  Summary title: {}", config.ui.summary_title);
	println!("  Empty summary: {}", config.ui.empty_summary);
	println!("  Menu height: {}", config.ui.menu_height);
	println!("  UI theme: {}", config.theme);
	if config.items.is_empty() {
		println!("  Configured items: (none)");
	} else {
		println!("  Configured items: {}", config.items.join(", "));
	}
	println!("  Log level: {}", config.log_level);
	println!("  Log file: {}", config.log_file.display());
}
