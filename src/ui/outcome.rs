/// Result of an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickOutcome {
	/// `false` when the user cancelled instead of accepting.
	pub accepted: bool,
	/// Selected labels in original candidate order.
	pub selected: Vec<String>,
}

impl PickOutcome {
	#[must_use]
	pub fn accepted(selected: Vec<String>) -> Self {
		Self {
			accepted: true,
			selected,
		}
	}

	#[must_use]
	pub fn cancelled() -> Self {
		Self::default()
	}
}
