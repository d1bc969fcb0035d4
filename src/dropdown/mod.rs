//! Multi-select dropdown state machine.
//!
//! [`Dropdown`] owns the candidate sequence, the keyboard cursor and the
//! open/closed flag. Keyboard input only moves the cursor; selecting happens
//! through pointer clicks on menu rows. Every change to the selection is
//! reported to the registered listener with the selected labels in original
//! candidate order.

mod item;
mod keyboard;
mod mouse;
mod navigation;
mod render;


use ratatui::widgets::ListState;
use tracing::{debug, info};

pub use item::CandidateItem;
pub use keyboard::DropdownKey;
pub use navigation::Direction;

use mouse::HitMap;

/// Rows shown in the open menu before it starts scrolling.
pub const DEFAULT_MENU_HEIGHT: usize = 8;

/// Callback invoked with the selected labels after every selection change.
pub type SelectionListener = Box<dyn FnMut(&[String])>;

pub struct Dropdown {
	items: Vec<CandidateItem>,
	placeholder: String,
	cursor: Option<usize>,
	open: bool,
	menu_height: usize,
	listener: Option<SelectionListener>,
	pub(crate) menu_state: ListState,
	/// First chip line shown in the field when the chips overflow it.
	pub(crate) chip_scroll: u16,
	pub(crate) hits: HitMap,
}

impl Dropdown {
	/// Create a closed dropdown with nothing selected and no cursor.
	pub fn new<I, S>(labels: I, placeholder: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			items: item::from_labels(labels),
			placeholder: placeholder.into(),
			cursor: None,
			open: false,
			menu_height: DEFAULT_MENU_HEIGHT,
			listener: None,
			menu_state: ListState::default(),
			chip_scroll: 0,
			hits: HitMap::default(),
		}
	}

	/// Register the callback that receives the selection after every change.
	#[must_use]
	pub fn on_change<F>(mut self, listener: F) -> Self
	where
		F: FnMut(&[String]) + 'static,
	{
		self.listener = Some(Box::new(listener));
		self
	}

	#[must_use]
	pub fn with_menu_height(mut self, rows: usize) -> Self {
		self.menu_height = rows.max(1);
		self
	}

	pub fn items(&self) -> &[CandidateItem] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn menu_height(&self) -> usize {
		self.menu_height
	}

	/// Candidates still offered in the menu, in original order.
	pub fn unselected(&self) -> impl Iterator<Item = &CandidateItem> {
		item::unselected(&self.items)
	}

	/// Chosen candidates, in original order.
	pub fn selected(&self) -> impl Iterator<Item = &CandidateItem> {
		item::selected(&self.items)
	}

	pub fn selected_labels(&self) -> Vec<String> {
		self.selected().map(|item| item.label.clone()).collect()
	}

	pub fn selected_count(&self) -> usize {
		self.selected().count()
	}

	/// The menu is drawn only while open and while something is left to pick.
	pub fn menu_visible(&self) -> bool {
		self.open && self.unselected().next().is_some()
	}

	/// Set the selected flag of item `id` and notify the listener.
	///
	/// Unknown ids are ignored and return `false`.
	pub fn set_selected(&mut self, id: usize, selected: bool) -> bool {
		if !item::set_flag(&mut self.items, id, selected) {
			debug!(event = "dropdown.set_selected.unknown_id", id);
			return false;
		}
		self.hits.clear();
		self.notify();
		true
	}

	/// Neighbouring unselected id of the current cursor, if there is one.
	pub fn nearest_unselected(&self, direction: Direction) -> Option<usize> {
		let cursor = self.cursor?;
		navigation::nearest_unselected(&self.items, cursor, direction)
	}

	/// Select the item under the cursor and move the cursor to the next id.
	///
	/// The cursor is advanced by a raw `+1` on the id, so it can land on an
	/// item that is already selected or past the end of the list.
	pub fn commit_selection(&mut self) -> bool {
		let Some(id) = self.cursor else {
			debug!(event = "dropdown.commit.no_cursor");
			return false;
		};
		if !self.set_selected(id, true) {
			return false;
		}
		self.set_cursor(Some(id + 1));
		info!(
			event = "dropdown.commit",
			id,
			selected = self.selected_count()
		);
		true
	}

	/// Return item `id` to the menu.
	pub fn release_selection(&mut self, id: usize) -> bool {
		if !self.set_selected(id, false) {
			return false;
		}
		info!(
			event = "dropdown.release",
			id,
			selected = self.selected_count()
		);
		true
	}

	/// Pointer hover jumps the cursor straight to `id`.
	pub fn hover(&mut self, id: usize) {
		if self.cursor != Some(id) {
			self.set_cursor(Some(id));
		}
	}

	pub fn toggle_open(&mut self) {
		self.open = !self.open;
		self.hits.clear();
		debug!(event = "dropdown.toggle", open = self.open);
	}

	/// Close the menu. The cursor is kept for the next time it opens.
	pub fn close(&mut self) {
		if self.open {
			self.open = false;
			self.hits.clear();
			debug!(event = "dropdown.close");
		}
	}

	pub(crate) fn set_cursor(&mut self, cursor: Option<usize>) {
		debug!(event = "dropdown.cursor", from = ?self.cursor, to = ?cursor);
		self.cursor = cursor;
	}

	fn notify(&mut self) {
		let selected = self.selected_labels();
		if let Some(listener) = self.listener.as_mut() {
			listener(&selected);
		}
	}
}

impl std::fmt::Debug for Dropdown {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Dropdown")
			.field("items", &self.items)
			.field("placeholder", &self.placeholder)
			.field("cursor", &self.cursor)
			.field("open", &self.open)
			.field("menu_height", &self.menu_height)
			.finish_non_exhaustive()
	}
}
