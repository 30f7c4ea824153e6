//! A single timed notification.

use std::fmt;
use std::time::Duration;

use ratatui::text::{Line, Span};

use crate::countdown::{Countdown, ElapsedSignal, TickSignal};
use crate::event::{Command, Event};
use crate::style::{Category, ToastStyle, resolve_style};

/// Opaque toast identifier, unique among the toasts of one manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
	/// Wraps an existing identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub(crate) fn from_counter(counter: u64) -> Self {
		Self(format!("toast-{counter}"))
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ToastId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// One notification and its expiry state machine.
///
/// A toast starts visible and turns invisible exactly once, when its
/// countdown elapses. It stays in the manager's collection until the
/// resulting [`Event::Expired`] is dispatched.
#[derive(Debug, Clone)]
pub struct Toast {
	id: ToastId,
	category: Category,
	message: String,
	duration: Duration,
	countdown: Countdown,
	visible: bool,
}

impl Toast {
	/// Creates a visible toast whose countdown ticks every `tick_interval`.
	///
	/// The countdown does not advance until [`Toast::initialize`] is called.
	pub fn new(id: ToastId, message: impl Into<String>, category: Category, duration: Duration, tick_interval: Duration) -> Self {
		Self {
			countdown: Countdown::new(id.clone(), duration, tick_interval),
			id,
			category,
			message: message.into(),
			duration,
			visible: true,
		}
	}

	/// Returns the toast's identifier.
	pub fn id(&self) -> &ToastId {
		&self.id
	}

	/// Returns the category tag.
	pub fn category(&self) -> Category {
		self.category
	}

	/// Returns the message text.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Requested lifetime.
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Time left on the countdown.
	pub fn remaining(&self) -> Duration {
		self.countdown.remaining()
	}

	/// Returns false once the countdown has elapsed.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Starts the countdown. Call once after the toast joins a collection.
	pub fn initialize(&mut self) -> Command {
		self.countdown.init()
	}

	/// Advances the countdown. Never changes visibility.
	pub fn handle_tick(&mut self, signal: &TickSignal) -> Option<Command> {
		self.countdown.handle_tick(signal)
	}

	/// Hides the toast and requests its removal.
	///
	/// Returns `None` for signals addressed to other toasts and for a toast
	/// that already expired, so a replayed elapse produces no second
	/// removal request.
	pub fn handle_elapsed(&mut self, signal: &ElapsedSignal) -> Option<Command> {
		if !self.countdown.owns(signal) || !self.visible {
			return None;
		}
		self.visible = false;
		Some(Command::now(Event::Expired(self.id.clone())))
	}

	/// Renders `"<prefix> <message>"` in the resolved style.
	///
	/// Invisible toasts render as an empty line. Line breaks in the message
	/// become single spaces.
	pub fn render(&self, style_override: Option<&ToastStyle>) -> Line<'static> {
		if !self.visible {
			return Line::default();
		}

		let (prefix, style) = resolve_style(self.category, style_override);
		let message = self.message.lines().collect::<Vec<_>>().join(" ");
		Line::from(Span::raw(format!("{prefix} {message}"))).style(style)
	}
}
