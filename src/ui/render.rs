use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::Line,
	widgets::{Block, List, ListItem, Paragraph},
};

use super::App;

const HINT: &str = "↑/↓ move · hover + click pick · ✕ remove · Esc close · Enter accept · Ctrl-C cancel";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(1), Constraint::Length(1)])
			.split(area);
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
			.split(rows[0]);

		self.render_dropdown_column(frame, columns[0]);
		self.render_summary(frame, columns[1]);

		let hint = Paragraph::new(HINT).style(self.theme.hint);
		frame.render_widget(hint, rows[1]);
	}

	fn render_dropdown_column(&mut self, frame: &mut Frame, area: Rect) {
		let sections = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let title = Paragraph::new(self.ui.title.as_str()).style(self.theme.heading);
		frame.render_widget(title, sections[0]);

		let widget_area = Rect {
			width: sections[1].width.saturating_sub(1),
			..sections[1]
		};
		self.dropdown.render(frame, widget_area, &self.theme);
	}

	/// Render the reported selection, never the dropdown's own flags.
	fn render_summary(&self, frame: &mut Frame, area: Rect) {
		let block = Block::bordered()
			.title(Line::styled(self.ui.summary_title.as_str(), self.theme.heading))
			.border_style(self.theme.summary_border);

		if self.selected().is_empty() {
			let empty = Paragraph::new(self.ui.empty_summary.as_str())
				.style(self.theme.empty)
				.block(block);
			frame.render_widget(empty, area);
			return;
		}

		let items = self
			.selected()
			.iter()
			.map(|label| ListItem::new(label.as_str()).style(self.theme.summary_item));
		frame.render_widget(List::new(items).block(block), area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use crate::ui::{App, UiConfig};

	fn render(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn empty_session_shows_placeholder_and_empty_summary() {
		let mut app = App::new(["Element 1", "Element 2"], UiConfig::default());
		let view = render(&mut app);

		assert!(view.contains("Dropdown:"));
		assert!(view.contains("Default text"));
		assert!(view.contains("Selected Elements:"));
		assert!(view.contains("No selected elements"));
	}

	#[test]
	fn summary_follows_reported_selection() {
		let mut app = App::new(["Element 1", "Element 2", "Element 3"], UiConfig::default());
		app.dropdown.hover(2);
		app.dropdown.commit_selection();

		// Not pumped yet: the summary still shows the previous report.
		assert!(render(&mut app).contains("No selected elements"));

		app.pump_selection_updates();
		let view = render(&mut app);
		assert!(!view.contains("No selected elements"));
		assert!(view.contains("Element 3 ✕"));
		assert_eq!(app.selected(), ["Element 3".to_string()]);
	}

	#[test]
	fn custom_labels_are_rendered() {
		let ui = UiConfig {
			title: "Pick fruit".into(),
			placeholder: "nothing yet".into(),
			summary_title: "Basket".into(),
			empty_summary: "empty basket".into(),
			..UiConfig::default()
		};
		let mut app = App::new(["apple"], ui);
		let view = render(&mut app);

		for text in ["Pick fruit", "nothing yet", "Basket", "empty basket"] {
			assert!(view.contains(text), "missing {text}");
		}
	}
}
