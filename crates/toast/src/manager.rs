//! Toast registry, event router and compositor.

use std::collections::HashMap;
use std::time::Duration;

use ratatui::layout::Size;
use ratatui::text::{Line, Text};
use serde::Deserialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::countdown::DEFAULT_TICK_INTERVAL;
use crate::event::{Command, Event};
use crate::position::Position;
use crate::style::{Category, ToastStyle};
use crate::toast::{Toast, ToastId};

/// Default number of toasts drawn at once.
pub const DEFAULT_MAX_VISIBLE: usize = 3;
/// Default render width in terminal cells.
pub const DEFAULT_WIDTH: u16 = 30;
/// Lifetime used by [`Manager::push_default`].
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_DURATION_MS);
pub(crate) const DEFAULT_DURATION_MS: u64 = 4_000;

/// Behavior when the tracked-toast limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
	/// Remove the oldest toast to make room (default).
	#[default]
	DropOldest,
	/// Reject the incoming toast.
	DropNewest,
}

/// Owns the ordered toast collection.
///
/// All collection changes go through [`Manager::dispatch`]; [`Manager::push`]
/// and [`Manager::dismiss_all`] only build deferred commands. Insertion order
/// is display order, and only the first `max_visible` visible toasts are
/// drawn. Toasts past the cap keep counting down.
#[derive(Debug, Clone)]
pub struct Manager {
	toasts: Vec<Toast>,
	counter: u64,
	max_visible: usize,
	max_queued: Option<usize>,
	overflow: Overflow,
	position: Position,
	width: u16,
	size: Size,
	tick_interval: Duration,
	default_duration: Duration,
	style_overrides: HashMap<Category, ToastStyle>,
}

impl Default for Manager {
	fn default() -> Self {
		Self::new()
	}
}

impl Manager {
	/// Creates an empty manager with default settings.
	pub fn new() -> Self {
		Self {
			toasts: Vec::new(),
			counter: 0,
			max_visible: DEFAULT_MAX_VISIBLE,
			max_queued: None,
			overflow: Overflow::default(),
			position: Position::default(),
			width: DEFAULT_WIDTH,
			size: Size::default(),
			tick_interval: DEFAULT_TICK_INTERVAL,
			default_duration: DEFAULT_DURATION,
			style_overrides: HashMap::new(),
		}
	}

	/// Sets the screen anchor.
	#[must_use]
	pub fn with_position(mut self, position: Position) -> Self {
		self.position = position;
		self
	}

	/// Sets how many toasts are drawn at once. Clamped to at least one.
	#[must_use]
	pub fn with_max_visible(mut self, max: usize) -> Self {
		self.max_visible = max.max(1);
		self
	}

	/// Sets the render width hint. Zero disables truncation.
	#[must_use]
	pub fn with_width(mut self, width: u16) -> Self {
		self.width = width;
		self
	}

	/// Registers a prefix and style for a category, replacing its defaults.
	#[must_use]
	pub fn with_style(mut self, category: Category, style: ToastStyle) -> Self {
		self.style_overrides.insert(category, style);
		self
	}

	/// Caps the number of tracked toasts (None = unbounded).
	#[must_use]
	pub fn with_max_queued(mut self, max: Option<usize>) -> Self {
		self.max_queued = max.map(|max| max.max(1));
		self
	}

	/// Sets the behavior when the tracked-toast limit is reached.
	#[must_use]
	pub fn with_overflow(mut self, overflow: Overflow) -> Self {
		self.overflow = overflow;
		self
	}

	/// Sets the countdown granularity for toasts pushed afterwards.
	#[must_use]
	pub fn with_tick_interval(mut self, interval: Duration) -> Self {
		self.tick_interval = if interval.is_zero() { DEFAULT_TICK_INTERVAL } else { interval };
		self
	}

	/// Sets the lifetime used by [`Manager::push_default`].
	#[must_use]
	pub fn with_default_duration(mut self, duration: Duration) -> Self {
		self.default_duration = duration;
		self
	}

	/// Records the screen size after a terminal resize.
	pub fn set_size(&mut self, width: u16, height: u16) {
		self.size = Size::new(width, height);
	}

	/// Allocates an id and returns a deferred creation command.
	///
	/// The toast joins the collection only once the command's event is
	/// dispatched.
	pub fn push(&mut self, message: impl Into<String>, category: Category, duration: Duration) -> Command {
		self.counter = self.counter.wrapping_add(1);
		let id = ToastId::from_counter(self.counter);
		tracing::trace!(%id, ?category, ?duration, "toast pushed");
		Command::now(Event::Created(Toast::new(id, message, category, duration, self.tick_interval)))
	}

	/// Pushes with the configured default duration.
	pub fn push_default(&mut self, message: impl Into<String>, category: Category) -> Command {
		self.push(message, category, self.default_duration)
	}

	/// Returns a deferred command that clears every toast.
	pub fn dismiss_all(&self) -> Command {
		Command::now(Event::DismissAll)
	}

	/// Applies one event and returns the follow-ups it produced.
	pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
		tracing::trace!(kind = event.kind(), len = self.toasts.len(), "toast dispatch");
		match event {
			Event::Created(toast) => self.admit(toast).into_iter().collect(),
			Event::Tick(signal) => self.toasts.iter_mut().filter_map(|toast| toast.handle_tick(&signal)).collect(),
			Event::Elapsed(signal) => self.toasts.iter_mut().filter_map(|toast| toast.handle_elapsed(&signal)).collect(),
			Event::Expired(id) => {
				self.remove(&id);
				Vec::new()
			}
			Event::DismissAll => {
				tracing::debug!(dropped = self.toasts.len(), "toasts dismissed");
				self.toasts.clear();
				Vec::new()
			}
		}
	}

	/// Builds the overlay text: visible toasts in insertion order, at most
	/// `max_visible`, aligned by position. Empty when nothing is visible.
	pub fn render(&self) -> Text<'static> {
		let lines: Vec<Line<'static>> = self
			.toasts
			.iter()
			.filter(|toast| toast.is_visible())
			.take(self.max_visible)
			.map(|toast| fit_width(toast.render(self.style_overrides.get(&toast.category())), self.width))
			.collect();

		if lines.is_empty() {
			return Text::default();
		}
		Text::from(lines).alignment(self.position.alignment())
	}

	/// Tracked toasts in display order, including hidden ones.
	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}

	/// Returns the number of tracked toasts.
	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	/// Returns true if there are no toasts.
	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	/// Number of toasts `render` would draw.
	pub fn visible_count(&self) -> usize {
		self.toasts.iter().filter(|toast| toast.is_visible()).take(self.max_visible).count()
	}

	/// Returns the configured screen anchor.
	pub fn position(&self) -> Position {
		self.position
	}

	/// Returns the visible-toast cap.
	pub fn max_visible(&self) -> usize {
		self.max_visible
	}

	/// Returns the render width hint.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the last recorded screen size.
	pub fn size(&self) -> Size {
		self.size
	}

	/// Returns the countdown granularity for new toasts.
	pub fn tick_interval(&self) -> Duration {
		self.tick_interval
	}

	/// Appends a created toast and starts its countdown.
	fn admit(&mut self, mut toast: Toast) -> Option<Command> {
		if let Some(max) = self.max_queued {
			match self.overflow {
				Overflow::DropOldest => {
					while self.toasts.len() >= max {
						let evicted = self.toasts.remove(0);
						tracing::debug!(id = %evicted.id(), "toast evicted");
					}
				}
				Overflow::DropNewest if self.toasts.len() >= max => {
					tracing::debug!(id = %toast.id(), "toast rejected");
					return None;
				}
				Overflow::DropNewest => {}
			}
		}

		let init = toast.initialize();
		tracing::debug!(id = %toast.id(), len = self.toasts.len() + 1, "toast admitted");
		self.toasts.push(toast);
		Some(init)
	}

	/// Removes a toast by id. Unknown ids are ignored.
	fn remove(&mut self, id: &ToastId) {
		let before = self.toasts.len();
		self.toasts.retain(|toast| toast.id() != id);
		if self.toasts.len() < before {
			tracing::debug!(%id, len = self.toasts.len(), "toast removed");
		}
	}
}

/// Truncates a line to `width` display cells. Zero means unlimited.
fn fit_width(mut line: Line<'static>, width: u16) -> Line<'static> {
	if width == 0 {
		return line;
	}

	let mut budget = usize::from(width);
	for span in &mut line.spans {
		let span_width = span.content.width();
		if span_width <= budget {
			budget -= span_width;
			continue;
		}

		let mut kept = String::new();
		for ch in span.content.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if ch_width > budget {
				break;
			}
			budget -= ch_width;
			kept.push(ch);
		}
		span.content = kept.into();
		budget = 0;
	}
	line.spans.retain(|span| !span.content.is_empty());
	line
}
