use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `multipick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "multipick",
	version,
	long_version = long_version(),
	about = "Pick several items from a fixed list in an interactive dropdown",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "ITEM",
		help = "Candidate labels in display order (default: --items-file, stdin, then the `items` setting)"
	)]
	pub(crate) items: Vec<String>,
	#[arg(
		short = 'f',
		long = "items-file",
		value_name = "FILE",
		help = "Read candidate labels from a file, one per line (default: none)"
	)]
	pub(crate) items_file: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MULTIPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Text shown in the field while nothing is selected (default: \"Default text\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Heading shown above the dropdown (default: \"Dropdown:\")"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "summary-title",
		value_name = "TEXT",
		help = "Title of the selected elements panel (default: \"Selected Elements:\")"
	)]
	pub(crate) summary_title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'm',
		long = "menu-height",
		value_name = "ROWS",
		help = "Rows shown in the open menu before it scrolls (default: 8)"
	)]
	pub(crate) menu_height: Option<usize>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log verbosity written to the log file (default: warn)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: multipick.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
