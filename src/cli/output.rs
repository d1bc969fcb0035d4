use anyhow::Result;
use multipick::PickOutcome;
use serde_json::json;

/// Print one selected label per line, or a note when cancelled.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled");
		return;
	}

	for label in &outcome.selected {
		println!("{label}");
	}
}

/// Format the pick outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"selected": outcome.selected,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the pick outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
