use ratatui::crossterm::event::KeyCode;

use super::{Direction, Dropdown};

/// Keys the dropdown reacts to. Everything else is left to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropdownKey {
	Escape,
	ArrowUp,
	ArrowDown,
}

impl DropdownKey {
	/// Decode a terminal key code into a dropdown key.
	#[must_use]
	pub fn from_key_code(code: KeyCode) -> Option<Self> {
		match code {
			KeyCode::Esc => Some(Self::Escape),
			KeyCode::Up => Some(Self::ArrowUp),
			KeyCode::Down => Some(Self::ArrowDown),
			_ => None,
		}
	}
}

impl Dropdown {
	/// Apply one key press to the open flag and the cursor.
	pub fn handle_key(&mut self, key: DropdownKey) {
		match key {
			DropdownKey::Escape => self.close(),
			DropdownKey::ArrowDown => self.move_cursor(Direction::Down),
			DropdownKey::ArrowUp => self.move_cursor(Direction::Up),
		}
	}

	fn move_cursor(&mut self, direction: Direction) {
		let Some(last) = self.len().checked_sub(1) else {
			return;
		};

		let Some(cursor) = self.cursor() else {
			// First press jumps to the boundary id, selected or not.
			let start = match direction {
				Direction::Down => 0,
				Direction::Up => last,
			};
			self.set_cursor(Some(start));
			return;
		};

		let at_boundary = match direction {
			Direction::Down => cursor >= last,
			Direction::Up => cursor == 0,
		};
		if at_boundary {
			return;
		}

		if let Some(next) = self.nearest_unselected(direction) {
			self.set_cursor(Some(next));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_only_navigation_keys() {
		assert_eq!(DropdownKey::from_key_code(KeyCode::Esc), Some(DropdownKey::Escape));
		assert_eq!(DropdownKey::from_key_code(KeyCode::Up), Some(DropdownKey::ArrowUp));
		assert_eq!(DropdownKey::from_key_code(KeyCode::Down), Some(DropdownKey::ArrowDown));
		assert_eq!(DropdownKey::from_key_code(KeyCode::Enter), None);
		assert_eq!(DropdownKey::from_key_code(KeyCode::Char(' ')), None);
	}
}
