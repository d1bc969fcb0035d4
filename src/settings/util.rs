/// Trim labels and drop the blank ones. Duplicates are kept; ids tell them apart.
pub(crate) fn sanitize_labels(labels: Vec<String>) -> Vec<String> {
	labels
		.into_iter()
		.map(|label| label.trim().to_string())
		.filter(|label| !label.is_empty())
		.collect()
}

/// Lowercase and trim a name so lookups ignore case and stray whitespace.
pub(super) fn normalize_key(value: &str) -> String {
	value.trim().to_ascii_lowercase()
}
