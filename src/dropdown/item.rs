/// One entry from the fixed candidate list.
///
/// `id` is the position of the label in the list handed to the dropdown at
/// construction and never changes; only `selected` is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
	pub id: usize,
	pub label: String,
	pub selected: bool,
}

impl CandidateItem {
	#[must_use]
	pub fn new(id: usize, label: impl Into<String>) -> Self {
		Self {
			id,
			label: label.into(),
			selected: false,
		}
	}
}

/// Build the candidate sequence, assigning ids by original position.
pub(crate) fn from_labels<I, S>(labels: I) -> Vec<CandidateItem>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	labels
		.into_iter()
		.enumerate()
		.map(|(id, label)| CandidateItem::new(id, label))
		.collect()
}

/// Candidates not chosen yet, in original order.
pub(crate) fn unselected(items: &[CandidateItem]) -> impl Iterator<Item = &CandidateItem> {
	items.iter().filter(|item| !item.selected)
}

/// Chosen candidates, in original order rather than the order they were picked.
pub(crate) fn selected(items: &[CandidateItem]) -> impl Iterator<Item = &CandidateItem> {
	items.iter().filter(|item| item.selected)
}

/// Set the flag of item `id`. Returns `false` when no such item exists.
pub(crate) fn set_flag(items: &mut [CandidateItem], id: usize, selected: bool) -> bool {
	match items.iter_mut().find(|item| item.id == id) {
		Some(item) => {
			item.selected = selected;
			true
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels<'a>(items: impl Iterator<Item = &'a CandidateItem>) -> Vec<&'a str> {
		items.map(|item| item.label.as_str()).collect()
	}

	#[test]
	fn ids_follow_original_positions() {
		let items = from_labels(["A", "B", "A"]);
		let ids: Vec<usize> = items.iter().map(|item| item.id).collect();
		assert_eq!(ids, vec![0, 1, 2]);
		assert!(items.iter().all(|item| !item.selected));
	}

	#[test]
	fn views_keep_original_order_regardless_of_pick_order() {
		let mut items = from_labels(["A", "B", "C", "D"]);
		assert!(set_flag(&mut items, 2, true));
		assert!(set_flag(&mut items, 0, true));

		assert_eq!(labels(selected(&items)), vec!["A", "C"]);
		assert_eq!(labels(unselected(&items)), vec!["B", "D"]);
	}

	#[test]
	fn set_flag_reports_unknown_ids() {
		let mut items = from_labels(["A"]);
		assert!(!set_flag(&mut items, 5, true));
		assert!(!items[0].selected);
	}
}
