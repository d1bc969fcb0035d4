use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Dropdown;
use super::item::{self, CandidateItem};
use crate::tui::theme::Theme;

const ARROW_WIDTH: u16 = 2;
const REMOVE_MARK: &str = "✕";
const ELLIPSIS: char = '…';
const BORDER_WIDTH: u16 = 2;
const BORDER_HEIGHT: u16 = 2;
/// Columns a chip adds around its label: two spaces and the remove mark.
const CHIP_PADDING: u16 = 3;
/// A menu with a single row between its borders.
const MIN_MENU_HEIGHT: u16 = BORDER_HEIGHT + 1;

/// A selected item placed on one of the field's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlacedChip<'a> {
	id: usize,
	label: Cow<'a, str>,
	line: u16,
	x: u16,
	label_width: u16,
}

impl PlacedChip<'_> {
	/// Columns taken by ` label ✕`.
	fn width(&self) -> u16 {
		self.label_width + CHIP_PADDING
	}

	fn mark_offset(&self) -> u16 {
		self.label_width + 2
	}
}

/// Shorten `label` to at most `max_width` columns, ending in an ellipsis when
/// anything was cut.
fn fit_label(label: &str, max_width: u16) -> (Cow<'_, str>, u16) {
	let width = label.width();
	if width <= usize::from(max_width) {
		return (Cow::Borrowed(label), u16::try_from(width).unwrap_or(max_width));
	}
	if max_width == 0 {
		return (Cow::Borrowed(""), 0);
	}

	let budget = usize::from(max_width - 1);
	let mut used = 0;
	let mut short = String::new();
	for ch in label.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		short.push(ch);
	}
	short.push(ELLIPSIS);
	(Cow::Owned(short), u16::try_from(used + 1).unwrap_or(max_width))
}

/// Flow chips left to right, wrapping onto a new line when one does not fit.
///
/// Labels wider than a whole line are shortened so the remove mark stays
/// inside `width`.
fn place_chips<'a>(
	chips: impl Iterator<Item = &'a CandidateItem>,
	width: u16,
) -> Vec<PlacedChip<'a>> {
	let max_label = width.saturating_sub(CHIP_PADDING);
	let mut placed = Vec::new();
	let mut line = 0u16;
	let mut x = 0u16;

	for chip in chips {
		let (label, label_width) = fit_label(&chip.label, max_label);
		let mut next = PlacedChip {
			id: chip.id,
			label,
			line,
			x,
			label_width,
		};
		if x > 0 && x.saturating_add(next.width()) > width {
			line += 1;
			next.line = line;
			next.x = 0;
		}
		x = next.x.saturating_add(next.width()).saturating_add(1);
		placed.push(next);
	}

	placed
}

fn content_width(area_width: u16) -> u16 {
	area_width.saturating_sub(BORDER_WIDTH + ARROW_WIDTH)
}

impl Dropdown {
	/// Rows the input field needs to show every selected chip in `width` columns.
	pub fn field_height(&self, width: u16) -> u16 {
		let lines = place_chips(item::selected(&self.items), content_width(width))
			.last()
			.map_or(1, |chip| chip.line + 1);
		lines + BORDER_HEIGHT
	}

	/// Draw the field and, when visible, the menu below it.
	///
	/// The field never grows past the rows left after one menu row; chip lines
	/// beyond that scroll. The regions used for pointer routing are recorded
	/// as a side effect.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		self.hits.clear();
		if area.is_empty() {
			return;
		}

		let reserved = if self.menu_visible() { MIN_MENU_HEIGHT } else { 0 };
		let max_field = area
			.height
			.saturating_sub(reserved)
			.max(BORDER_HEIGHT + 1)
			.min(area.height);
		let field_height = self.field_height(area.width).min(max_field);
		let field = Rect {
			height: field_height,
			..area
		};
		self.render_field(frame, field, theme);

		if self.menu_visible() {
			let below = Rect {
				y: field.bottom(),
				height: area.height - field_height,
				..area
			};
			self.render_menu(frame, below, theme);
		}
	}

	fn render_field(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let inner = Block::bordered().inner(area);
		self.hits.field = area;

		let content = Rect {
			width: content_width(area.width),
			..inner
		};
		let chips = place_chips(item::selected(&self.items), content.width);
		let line_count = chips.last().map_or(0, |chip| chip.line + 1);
		self.chip_scroll = self
			.chip_scroll
			.min(line_count.saturating_sub(content.height));
		let first = self.chip_scroll;
		let visible = first..first.saturating_add(content.height);

		let mut block = Block::bordered().border_style(theme.field_border);
		let hidden = chips
			.iter()
			.filter(|chip| !visible.contains(&chip.line))
			.count();
		if hidden > 0 {
			block = block.title_bottom(
				Line::styled(format!(" +{hidden} more "), theme.placeholder).right_aligned(),
			);
		}
		frame.render_widget(block, area);

		if chips.is_empty() {
			let placeholder = Paragraph::new(self.placeholder.as_str()).style(theme.placeholder);
			frame.render_widget(placeholder, content);
		} else {
			let shown = line_count.saturating_sub(first).min(content.height);
			let mut lines: Vec<Line> = (0..shown).map(|_| Line::default()).collect();
			for chip in chips.iter().filter(|chip| visible.contains(&chip.line)) {
				let row = chip.line - first;
				let line = &mut lines[usize::from(row)];
				if chip.x > 0 {
					line.push_span(Span::raw(" "));
				}
				line.push_span(Span::styled(format!(" {} ", chip.label), theme.chip));
				line.push_span(Span::styled(REMOVE_MARK, theme.chip_remove));

				let mark = Rect::new(
					content.x.saturating_add(chip.x).saturating_add(chip.mark_offset()),
					content.y.saturating_add(row),
					1,
					1,
				);
				if mark.x < content.right() && mark.y < content.bottom() {
					self.hits.removes.push((mark, chip.id));
				}
			}
			frame.render_widget(Paragraph::new(lines), content);
		}

		if inner.width >= ARROW_WIDTH && inner.height > 0 {
			let arrow_area = Rect::new(inner.right() - ARROW_WIDTH, inner.y, ARROW_WIDTH, 1);
			let arrow = if self.open { "▴" } else { "▾" };
			let arrow = Paragraph::new(arrow)
				.style(theme.arrow)
				.alignment(Alignment::Right);
			frame.render_widget(arrow, arrow_area);
		}
	}

	fn render_menu(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let menu: Vec<&CandidateItem> = item::unselected(&self.items).collect();
		let rows = u16::try_from(menu.len().min(self.menu_height)).unwrap_or(u16::MAX);
		let height = rows.saturating_add(BORDER_HEIGHT).min(area.height);
		if height <= BORDER_HEIGHT {
			return;
		}
		let area = Rect { height, ..area };

		let highlighted = self
			.cursor
			.and_then(|cursor| menu.iter().position(|item| item.id == cursor));
		self.menu_state.select(highlighted);

		let block = Block::bordered().border_style(theme.menu_border);
		let inner = block.inner(area);
		let list = List::new(
			menu.iter()
				.map(|item| ListItem::new(item.label.as_str()).style(theme.menu_item)),
		)
		.block(block)
		.highlight_style(theme.menu_highlight);

		frame.render_widget(Clear, area);
		frame.render_stateful_widget(list, area, &mut self.menu_state);

		let offset = self.menu_state.offset();
		for (row, item) in menu.iter().skip(offset).take(usize::from(inner.height)).enumerate() {
			let row = u16::try_from(row).unwrap_or(u16::MAX);
			let region = Rect::new(inner.x, inner.y.saturating_add(row), inner.width, 1);
			self.hits.rows.push((region, item.id));
		}
	}
}
