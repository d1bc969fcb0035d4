mod candidates;
mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use multipick::logging;
use settings::ResolvedConfig;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in multipick::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(&resolved.log_level, &resolved.log_file)
		.context("failed to initialise logging")?;

	let candidates = candidates::load(&cli, &resolved.items)?;

	run_picker(cli.output, resolved, candidates)
}

/// Run the picker and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig, candidates: Vec<String>) -> Result<()> {
	let workflow = PickWorkflow::from_config(settings, candidates);
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
