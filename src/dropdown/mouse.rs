use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::{Direction, Dropdown};

/// Screen regions recorded by the last render, used to route pointer events.
#[derive(Debug, Default, Clone)]
pub(crate) struct HitMap {
	pub(crate) field: Rect,
	pub(crate) removes: Vec<(Rect, usize)>,
	pub(crate) rows: Vec<(Rect, usize)>,
}

impl HitMap {
	/// Forget every region; they describe a layout that no longer exists.
	pub(crate) fn clear(&mut self) {
		*self = Self::default();
	}

	fn remove_at(&self, position: Position) -> Option<usize> {
		hit(&self.removes, position)
	}

	fn row_at(&self, position: Position) -> Option<usize> {
		hit(&self.rows, position)
	}
}

fn hit(regions: &[(Rect, usize)], position: Position) -> Option<usize> {
	regions
		.iter()
		.find(|(area, _)| area.contains(position))
		.map(|&(_, id)| id)
}

impl Dropdown {
	/// Route a pointer event. Returns `true` when the dropdown consumed it.
	///
	/// A click on a chip's remove mark releases that item without reaching
	/// the field underneath, so the menu does not toggle as well. The wheel
	/// over the field scrolls chip lines that do not fit.
	pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
		let position = Position::new(event.column, event.row);
		match event.kind {
			MouseEventKind::Moved => match self.hits.row_at(position) {
				Some(id) => {
					self.hover(id);
					true
				}
				None => false,
			},
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(id) = self.hits.remove_at(position) {
					self.release_selection(id);
					return true;
				}
				if let Some(id) = self.hits.row_at(position) {
					self.hover(id);
					self.commit_selection();
					return true;
				}
				if self.hits.field.contains(position) {
					self.toggle_open();
					return true;
				}
				false
			}
			MouseEventKind::ScrollDown if self.hits.field.contains(position) => {
				self.scroll_chips(Direction::Down);
				true
			}
			MouseEventKind::ScrollUp if self.hits.field.contains(position) => {
				self.scroll_chips(Direction::Up);
				true
			}
			_ => false,
		}
	}

	/// Move the field's chip lines by one. The next render clamps the offset.
	fn scroll_chips(&mut self, direction: Direction) {
		self.chip_scroll = match direction {
			Direction::Down => self.chip_scroll.saturating_add(1),
			Direction::Up => self.chip_scroll.saturating_sub(1),
		};
		self.hits.clear();
	}
}
