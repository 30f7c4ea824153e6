//! Ordering and cap properties of the toast stack.

use std::time::Duration;

use proptest::prelude::*;
use xeno_toast::{Category, CommandQueue, Manager};

fn manager_with(durations: &[u64], max_visible: usize) -> (Manager, CommandQueue) {
	let mut manager = Manager::new().with_max_visible(max_visible).with_width(0);
	let mut queue = CommandQueue::new();
	for (i, millis) in durations.iter().enumerate() {
		queue.schedule([manager.push(format!("m{i}"), Category::custom(100), Duration::from_millis(*millis))]);
	}
	queue.run_for(&mut manager, Duration::ZERO);
	(manager, queue)
}

proptest! {
	#[test]
	fn render_is_capped_prefix_of_live_toasts(
		durations in prop::collection::vec(1u64..2_000, 0..12),
		max_visible in 1usize..6,
		elapsed in 0u64..2_500,
	) {
		let (mut manager, mut queue) = manager_with(&durations, max_visible);
		queue.run_for(&mut manager, Duration::from_millis(elapsed));

		let expected: Vec<String> = durations
			.iter()
			.enumerate()
			.filter(|(_, millis)| **millis > elapsed)
			.map(|(i, _)| format!(" m{i}"))
			.take(max_visible)
			.collect();
		let rendered: Vec<String> = manager.render().lines.iter().map(ToString::to_string).collect();

		prop_assert_eq!(rendered, expected);
		prop_assert!(manager.visible_count() <= max_visible);
		prop_assert_eq!(manager.len(), durations.iter().filter(|millis| **millis > elapsed).count());
	}

	#[test]
	fn ids_stay_unique(count in 1usize..50) {
		let durations = vec![1_000; count];
		let (manager, _) = manager_with(&durations, 3);
		let mut ids: Vec<String> = manager.toasts().iter().map(|toast| toast.id().to_string()).collect();
		ids.sort();
		ids.dedup();
		prop_assert_eq!(ids.len(), count);
	}
}
