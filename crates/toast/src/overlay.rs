//! Overlay placement and drawing.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::manager::Manager;

impl Manager {
	/// Rectangle a block of `lines` toasts occupies on the configured screen.
	pub fn overlay_area(&self, lines: u16) -> Rect {
		let size = self.size();
		self.place(Rect::new(0, 0, size.width, size.height), lines)
	}

	/// Anchors a `lines`-tall block inside `screen`.
	fn place(&self, screen: Rect, lines: u16) -> Rect {
		let width = match self.width() {
			0 => screen.width,
			width => width.min(screen.width),
		};
		let height = lines.min(screen.height);
		let position = self.position();

		let x = match position.alignment() {
			Alignment::Left => screen.x,
			Alignment::Center => screen.x + (screen.width - width) / 2,
			Alignment::Right => screen.right().saturating_sub(width),
		};
		let y = if position.is_top() {
			screen.y
		} else {
			screen.bottom().saturating_sub(height)
		};

		Rect::new(x, y, width, height)
	}
}

impl Widget for &Manager {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let text = Manager::render(self);
		if text.lines.is_empty() {
			return;
		}

		let lines = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
		let target = self.place(area, lines).intersection(area);
		if target.is_empty() {
			return;
		}

		Clear.render(target, buf);
		Paragraph::new(text).alignment(self.position().alignment()).render(target, buf);
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use pretty_assertions::assert_eq;
	use ratatui::style::Style;

	use super::*;
	use crate::event::Event;
	use crate::position::Position;
	use crate::style::{Category, ToastStyle};

	const PLAIN: Category = Category::custom(50);

	fn manager_with(position: Position, messages: &[&str]) -> Manager {
		let mut manager = Manager::new()
			.with_position(position)
			.with_width(10)
			.with_style(PLAIN, ToastStyle::new("*", Style::new()));
		for message in messages {
			let command = manager.push(*message, PLAIN, Duration::from_secs(1));
			manager.dispatch(command.into_event());
		}
		manager
	}

	fn row(buf: &Buffer, y: u16) -> String {
		(0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
	}

	#[test]
	fn overlay_area_tracks_size_and_position() {
		let mut manager = manager_with(Position::TopRight, &[]);
		manager.set_size(40, 10);
		assert_eq!(manager.overlay_area(2), Rect::new(30, 0, 10, 2));

		let mut manager = manager.with_position(Position::BottomCenter);
		manager.set_size(40, 10);
		assert_eq!(manager.overlay_area(3), Rect::new(15, 7, 10, 3));

		let manager = manager.with_position(Position::BottomLeft).with_width(100);
		assert_eq!(manager.overlay_area(20), Rect::new(0, 0, 40, 10));
	}

	#[test]
	fn draws_right_aligned_at_top() {
		let manager = manager_with(Position::TopRight, &["hi", "there"]);
		let area = Rect::new(0, 0, 20, 4);
		let mut buf = Buffer::empty(area);
		Widget::render(&manager, area, &mut buf);

		assert_eq!(row(&buf, 0), format!("{}* hi", " ".repeat(16)));
		assert_eq!(row(&buf, 1), format!("{}* there", " ".repeat(13)));
		assert_eq!(row(&buf, 2), " ".repeat(20));
	}

	#[test]
	fn draws_left_aligned_at_bottom() {
		let manager = manager_with(Position::BottomLeft, &["hi"]);
		let area = Rect::new(0, 0, 20, 3);
		let mut buf = Buffer::empty(area);
		Widget::render(&manager, area, &mut buf);

		assert_eq!(row(&buf, 0), " ".repeat(20));
		assert_eq!(row(&buf, 2), format!("* hi{}", " ".repeat(16)));
	}

	#[test]
	fn draws_nothing_when_empty() {
		let mut manager = manager_with(Position::TopLeft, &["gone"]);
		manager.dispatch(Event::DismissAll);
		let area = Rect::new(0, 0, 12, 2);
		let mut buf = Buffer::empty(area);
		Widget::render(&manager, area, &mut buf);
		assert_eq!(buf, Buffer::empty(area));
	}
}
