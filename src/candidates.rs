//! Gather candidate labels for the picker.
//!
//! Sources are consulted in order: positional arguments, `--items-file`,
//! piped stdin, then the `items` setting. The first one that yields at least
//! one label wins.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::cli::CliArgs;
use crate::settings::sanitize_labels;

pub(crate) fn load(cli: &CliArgs, configured: &[String]) -> Result<Vec<String>> {
	let stdin = io::stdin();
	let piped = (!stdin.is_terminal()).then_some(stdin);
	from_sources(&cli.items, cli.items_file.as_deref(), piped, configured)
}

fn from_sources<R: Read>(
	positional: &[String],
	items_file: Option<&Path>,
	piped: Option<R>,
	configured: &[String],
) -> Result<Vec<String>> {
	let labels = sanitize_labels(positional.to_vec());
	if !labels.is_empty() {
		debug!(event = "candidates.source", source = "arguments", count = labels.len());
		return Ok(labels);
	}

	if let Some(path) = items_file {
		let text = fs::read_to_string(path)
			.with_context(|| format!("failed to read items file {}", path.display()))?;
		let labels = parse_lines(&text);
		if !labels.is_empty() {
			debug!(event = "candidates.source", source = "file", count = labels.len());
			return Ok(labels);
		}
	} else if let Some(mut reader) = piped {
		let mut text = String::new();
		reader
			.read_to_string(&mut text)
			.context("failed to read items from stdin")?;
		let labels = parse_lines(&text);
		if !labels.is_empty() {
			debug!(event = "candidates.source", source = "stdin", count = labels.len());
			return Ok(labels);
		}
	}

	if configured.is_empty() {
		bail!(
			"no candidate items: pass ITEM arguments, --items-file, lines on stdin or set `items` in the configuration"
		);
	}
	debug!(event = "candidates.source", source = "config", count = configured.len());
	Ok(configured.to_vec())
}

fn parse_lines(text: &str) -> Vec<String> {
	sanitize_labels(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use tempfile::tempdir;

	use super::*;

	fn owned(labels: &[&str]) -> Vec<String> {
		labels.iter().map(|label| label.to_string()).collect()
	}

	#[test]
	fn positional_items_win() {
		let labels = from_sources(
			&owned(&["b", " a "]),
			None,
			Some(Cursor::new("ignored")),
			&owned(&["config"]),
		)
		.unwrap();
		assert_eq!(labels, vec!["b", "a"]);
	}

	#[test]
	fn items_file_is_read_line_by_line() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("items.txt");
		fs::write(&path, "Element 1\n\n  Element 2  \r\nElement 1\n").unwrap();

		let labels = from_sources(&[], Some(&path), None::<Cursor<&str>>, &[]).unwrap();
		assert_eq!(labels, vec!["Element 1", "Element 2", "Element 1"]);
	}

	#[test]
	fn missing_items_file_names_the_path() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("missing.txt");

		let err = from_sources(&[], Some(&path), None::<Cursor<&str>>, &[]).unwrap_err();
		assert!(err.to_string().contains("missing.txt"));
	}

	#[test]
	fn piped_input_is_used_before_config() {
		let labels = from_sources(&[], None, Some(Cursor::new("x\ny\n")), &owned(&["config"])).unwrap();
		assert_eq!(labels, vec!["x", "y"]);
	}

	#[test]
	fn empty_sources_fall_back_to_config() {
		let labels = from_sources(&[], None, Some(Cursor::new("\n \n")), &owned(&["config"])).unwrap();
		assert_eq!(labels, vec!["config"]);
	}

	#[test]
	fn nothing_to_pick_is_an_error() {
		assert!(from_sources(&[], None, None::<Cursor<&str>>, &[]).is_err());
	}
}
