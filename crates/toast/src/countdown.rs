//! Tick-driven countdown owned by each toast.
//!
//! The countdown never sleeps. It asks the host for a tick after one
//! interval, subtracts that interval when the tick comes back, and asks for
//! the next one until nothing remains. Each tick carries a tag so duplicate
//! or stale deliveries are dropped instead of double-counting.

use std::time::Duration;

use crate::event::{Command, Event};
use crate::toast::ToastId;

/// Default tick granularity.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(DEFAULT_TICK_INTERVAL_MS);
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Tick addressed to a single countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSignal {
	timer: ToastId,
	tag: u64,
	step: Duration,
}

impl TickSignal {
	/// Id of the timer this tick belongs to.
	pub fn timer(&self) -> &ToastId {
		&self.timer
	}

	/// Time this tick accounts for.
	pub fn step(&self) -> Duration {
		self.step
	}
}

/// Signal that a countdown has reached zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedSignal {
	timer: ToastId,
}

impl ElapsedSignal {
	pub(crate) fn new(timer: ToastId) -> Self {
		Self { timer }
	}

	/// Id of the timer that elapsed.
	pub fn timer(&self) -> &ToastId {
		&self.timer
	}
}

/// Countdown from a fixed timeout in interval-sized steps.
#[derive(Debug, Clone)]
pub struct Countdown {
	id: ToastId,
	remaining: Duration,
	interval: Duration,
	tag: u64,
	running: bool,
}

impl Countdown {
	/// Creates an armed countdown that does not tick until [`Countdown::init`].
	/// A zero interval falls back to [`DEFAULT_TICK_INTERVAL`].
	pub fn new(id: ToastId, timeout: Duration, interval: Duration) -> Self {
		let interval = if interval.is_zero() { DEFAULT_TICK_INTERVAL } else { interval };
		Self {
			id,
			remaining: timeout,
			interval,
			tag: 0,
			running: true,
		}
	}

	/// Time left before the countdown elapses.
	pub fn remaining(&self) -> Duration {
		self.remaining
	}

	/// Tick granularity.
	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Returns true until the countdown has reached zero.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Requests the first tick, or the elapsed signal for a zero timeout.
	pub fn init(&mut self) -> Command {
		if self.remaining.is_zero() {
			self.running = false;
			return self.elapsed();
		}
		self.next_tick()
	}

	/// Consumes a tick. Ticks for other timers, stale tags and ticks after
	/// expiry are ignored.
	pub fn handle_tick(&mut self, signal: &TickSignal) -> Option<Command> {
		if !self.running || signal.timer != self.id || signal.tag != self.tag {
			return None;
		}

		self.remaining = self.remaining.saturating_sub(signal.step);
		self.tag = self.tag.wrapping_add(1);

		if self.remaining.is_zero() {
			self.running = false;
			return Some(self.elapsed());
		}
		Some(self.next_tick())
	}

	/// Returns true if `signal` is addressed to this countdown.
	pub fn owns(&self, signal: &ElapsedSignal) -> bool {
		signal.timer == self.id
	}

	/// Last step is shortened so elapse lands on the exact timeout.
	fn next_tick(&self) -> Command {
		let step = self.interval.min(self.remaining);
		Command::after(
			step,
			Event::Tick(TickSignal {
				timer: self.id.clone(),
				tag: self.tag,
				step,
			}),
		)
	}

	fn elapsed(&self) -> Command {
		Command::now(Event::Elapsed(ElapsedSignal::new(self.id.clone())))
	}
}
