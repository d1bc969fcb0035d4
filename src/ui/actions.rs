use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, PickOutcome};
use crate::dropdown::DropdownKey;

impl App {
	/// Handle one terminal event. Returns an outcome once the session ends.
	pub(crate) fn handle_event(&mut self, event: Event) -> Option<PickOutcome> {
		let outcome = match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => {
				self.dropdown.handle_mouse(mouse);
				None
			}
			_ => None,
		};
		self.pump_selection_updates();
		outcome
	}

	fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(PickOutcome::cancelled());
		}

		match key.code {
			KeyCode::Enter => {
				self.pump_selection_updates();
				Some(PickOutcome::accepted(self.selected().to_vec()))
			}
			code => {
				if let Some(key) = DropdownKey::from_key_code(code) {
					self.dropdown.handle_key(key);
				}
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyEventState, MouseButton, MouseEvent, MouseEventKind};

	use super::*;
	use crate::ui::UiConfig;

	fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
		Event::Key(KeyEvent {
			code,
			modifiers,
			kind: KeyEventKind::Press,
			state: KeyEventState::NONE,
		})
	}

	fn app() -> App {
		App::new(["Element 1", "Element 2", "Element 3"], UiConfig::default())
	}

	#[test]
	fn enter_accepts_the_reported_selection() {
		let mut app = app();
		app.dropdown.hover(2);
		app.dropdown.commit_selection();
		app.dropdown.hover(0);
		app.dropdown.commit_selection();

		let outcome = app.handle_event(key(KeyCode::Enter, KeyModifiers::NONE));
		assert_eq!(
			outcome,
			Some(PickOutcome::accepted(vec![
				"Element 1".to_string(),
				"Element 3".to_string()
			]))
		);
	}

	#[test]
	fn ctrl_c_cancels() {
		let mut app = app();
		let outcome = app.handle_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
		assert_eq!(outcome, Some(PickOutcome::cancelled()));
	}

	#[test]
	fn navigation_keys_reach_the_dropdown_without_ending_the_session() {
		let mut app = app();
		assert_eq!(app.handle_event(key(KeyCode::Down, KeyModifiers::NONE)), None);
		assert_eq!(app.handle_event(key(KeyCode::Down, KeyModifiers::NONE)), None);
		assert_eq!(app.dropdown().cursor(), Some(1));

		assert_eq!(app.handle_event(key(KeyCode::Char(' '), KeyModifiers::NONE)), None);
		assert_eq!(app.dropdown().selected_count(), 0);
	}

	#[test]
	fn key_releases_are_ignored() {
		let mut app = app();
		let release = Event::Key(KeyEvent {
			code: KeyCode::Down,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Release,
			state: KeyEventState::NONE,
		});
		assert_eq!(app.handle_event(release), None);
		assert_eq!(app.dropdown().cursor(), None);
	}

	#[test]
	fn unrouted_mouse_events_leave_state_alone() {
		let mut app = app();
		let click = Event::Mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: 0,
			row: 0,
			modifiers: KeyModifiers::NONE,
		});
		assert_eq!(app.handle_event(click), None);
		assert!(!app.dropdown().is_open());
	}
}
