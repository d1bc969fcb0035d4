use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["multipick"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.items.is_empty());
	assert!(!parsed.print_config);
}

#[test]
fn positional_items_keep_their_order() {
	let parsed = CliArgs::parse_from(["multipick", "C", "A", "B", "A"]);
	assert_eq!(parsed.items, vec!["C", "A", "B", "A"]);
}

#[test]
fn options_are_parsed() {
	let parsed = CliArgs::parse_from([
		"multipick",
		"--items-file",
		"items.txt",
		"--placeholder",
		"Pick some",
		"-m",
		"4",
		"--log-level",
		"debug",
		"-o",
		"json",
	]);
	assert_eq!(parsed.items_file, Some(PathBuf::from("items.txt")));
	assert_eq!(parsed.placeholder.as_deref(), Some("Pick some"));
	assert_eq!(parsed.menu_height, Some(4));
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
	assert_eq!(parsed.output, OutputFormat::Json);
}
