//! Deterministic command scheduler for hosts without their own timer wheel.
//!
//! Time is virtual: nothing happens until the host calls [`CommandQueue::advance`]
//! or [`CommandQueue::run_for`] with the wall-clock time that passed.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::event::{Command, Event};
use crate::manager::Manager;

/// Pending events ordered by due time, FIFO among equal times.
#[derive(Debug, Default)]
pub struct CommandQueue {
	now: Duration,
	seq: u64,
	pending: BTreeMap<(Duration, u64), Event>,
}

impl CommandQueue {
	/// Creates an empty queue at time zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Virtual time elapsed since creation.
	pub fn now(&self) -> Duration {
		self.now
	}

	/// Returns the number of pending events.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns true if no events are pending.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Queues commands relative to the current time.
	pub fn schedule(&mut self, commands: impl IntoIterator<Item = Command>) {
		for command in commands {
			let due = self.now.saturating_add(command.delay());
			self.pending.insert((due, self.seq), command.into_event());
			self.seq = self.seq.wrapping_add(1);
		}
	}

	/// Removes and returns events already due.
	pub fn drain_ready(&mut self) -> Vec<Event> {
		self.advance(Duration::ZERO)
	}

	/// Moves the clock forward and returns every event due by then.
	///
	/// Follow-ups of the returned events are not included; schedule them and
	/// call again, or use [`CommandQueue::run_for`].
	pub fn advance(&mut self, by: Duration) -> Vec<Event> {
		self.now = self.now.saturating_add(by);
		let mut ready = Vec::new();
		while let Some(entry) = self.pending.first_entry() {
			if entry.key().0 > self.now {
				break;
			}
			ready.push(entry.remove());
		}
		ready
	}

	/// Pumps due events through `manager` until the clock has moved `by`,
	/// scheduling follow-ups at the time their event was delivered.
	///
	/// Returns the number of events delivered.
	pub fn run_for(&mut self, manager: &mut Manager, by: Duration) -> usize {
		let target = self.now.saturating_add(by);
		let mut delivered = 0;
		while let Some(entry) = self.pending.first_entry() {
			let due = entry.key().0;
			if due > target {
				break;
			}
			let event = entry.remove();
			self.now = self.now.max(due);
			let follow_ups = manager.dispatch(event);
			self.schedule(follow_ups);
			delivered += 1;
		}
		self.now = target;
		tracing::trace!(delivered, pending = self.pending.len(), "toast queue advanced");
		delivered
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::Category;
	use crate::toast::ToastId;

	#[test]
	fn orders_by_due_time_then_insertion() {
		let mut queue = CommandQueue::new();
		queue.schedule([
			Command::after(Duration::from_millis(20), Event::Expired(ToastId::new("late"))),
			Command::now(Event::Expired(ToastId::new("first"))),
			Command::now(Event::Expired(ToastId::new("second"))),
		]);

		let ready: Vec<String> = queue
			.advance(Duration::from_millis(10))
			.into_iter()
			.map(|event| match event {
				Event::Expired(id) => id.to_string(),
				other => panic!("unexpected {other:?}"),
			})
			.collect();
		assert_eq!(ready, vec!["first", "second"]);
		assert_eq!(queue.len(), 1);

		assert!(queue.drain_ready().is_empty());
		assert_eq!(queue.advance(Duration::from_millis(10)).len(), 1);
		assert!(queue.is_empty());
		assert_eq!(queue.now(), Duration::from_millis(20));
	}

	#[test]
	fn run_for_delivers_follow_ups_in_window() {
		let mut manager = Manager::new();
		let mut queue = CommandQueue::new();
		queue.schedule([manager.push("short", Category::INFO, Duration::from_millis(300))]);

		assert_eq!(queue.run_for(&mut manager, Duration::ZERO), 1);
		assert_eq!(manager.len(), 1);

		queue.run_for(&mut manager, Duration::from_millis(299));
		assert_eq!(manager.len(), 1);
		assert!(manager.toasts()[0].is_visible());

		queue.run_for(&mut manager, Duration::from_millis(1));
		assert!(manager.is_empty());
		assert!(queue.is_empty());
	}
}
