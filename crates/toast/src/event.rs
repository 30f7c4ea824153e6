//! Inbound events and outbound follow-up commands.
//!
//! The manager is driven purely by [`Event`] values. Every state transition
//! may yield [`Command`]s, which the host loop turns back into events after
//! the requested delay and feeds into [`Manager::dispatch`] exactly once.
//!
//! [`Manager::dispatch`]: crate::Manager::dispatch

use std::time::Duration;

use crate::countdown::{ElapsedSignal, TickSignal};
use crate::toast::{Toast, ToastId};

/// Event consumed by [`Manager::dispatch`](crate::Manager::dispatch).
#[derive(Debug, Clone)]
pub enum Event {
	/// A pushed toast ready to join the collection.
	Created(Toast),
	/// Countdown tick for one toast's timer.
	Tick(TickSignal),
	/// A toast's countdown reached zero.
	Elapsed(ElapsedSignal),
	/// A toast finished and should leave the collection.
	Expired(ToastId),
	/// Remove every toast.
	DismissAll,
}

impl Event {
	/// Short name for log fields.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Created(_) => "created",
			Self::Tick(_) => "tick",
			Self::Elapsed(_) => "elapsed",
			Self::Expired(_) => "expired",
			Self::DismissAll => "dismiss_all",
		}
	}
}

/// Follow-up request: deliver `event` once `after` has passed.
#[derive(Debug, Clone)]
pub struct Command {
	after: Duration,
	event: Event,
}

impl Command {
	/// Requests delivery on the next event-loop cycle.
	pub fn now(event: Event) -> Self {
		Self {
			after: Duration::ZERO,
			event,
		}
	}

	/// Requests delivery after `delay`.
	pub fn after(delay: Duration, event: Event) -> Self {
		Self { after: delay, event }
	}

	/// Delay before the event is due.
	pub fn delay(&self) -> Duration {
		self.after
	}

	/// Returns the event to deliver.
	pub fn event(&self) -> &Event {
		&self.event
	}

	/// Consumes the command, yielding its event.
	pub fn into_event(self) -> Event {
		self.event
	}
}
