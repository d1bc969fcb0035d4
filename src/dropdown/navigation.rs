use super::item::{CandidateItem, unselected};

/// Relative keyboard movement through the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
}

/// Find the unselected neighbour of `cursor` in the menu.
///
/// The menu is the unselected subsequence in original order. A cursor that is
/// not part of the menu (it points at a selected or unknown id) resolves to
/// the first menu entry when moving down and to nothing when moving up.
/// Positions past either end of the menu resolve to nothing.
pub(crate) fn nearest_unselected(
	items: &[CandidateItem],
	cursor: usize,
	direction: Direction,
) -> Option<usize> {
	let menu: Vec<usize> = unselected(items).map(|item| item.id).collect();
	let position = menu.iter().position(|&id| id == cursor);

	let target = match (position, direction) {
		(Some(position), Direction::Down) => position + 1,
		(Some(position), Direction::Up) => position.checked_sub(1)?,
		(None, Direction::Down) => 0,
		(None, Direction::Up) => return None,
	};

	menu.get(target).copied()
}
