use super::event::Event;
use super::queue::EventQueue;
use crate::types::NavigatorId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

struct ScheduledEvent {
	emit_at: Instant,
	/// Insertion order, keeps same-instant events FIFO
	seq: u64,
	event: Event,
}

impl PartialEq for ScheduledEvent {
	fn eq(&self, other: &Self) -> bool {
		self.emit_at == other.emit_at && self.seq == other.seq
	}
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ScheduledEvent {
	fn cmp(&self, other: &Self) -> Ordering {
		// Reversed: BinaryHeap is a max-heap, the earliest event must surface first
		other
			.emit_at
			.cmp(&self.emit_at)
			.then_with(|| other.seq.cmp(&self.seq))
	}
}

pub struct Scheduler {
	pending: BinaryHeap<ScheduledEvent>,
	next_seq: u64,
}

impl Scheduler {
	pub fn new() -> Self {
		Self {
			pending: BinaryHeap::new(),
			next_seq: 0,
		}
	}

	/// Schedule an event to fire at `emit_at`
	pub fn schedule(&mut self, event: Event, emit_at: Instant) {
		let seq = self.next_seq;
		self.next_seq += 1;
		self.pending.push(ScheduledEvent {
			emit_at,
			seq,
			event,
		});
	}

	/// Move every event due at `now` into the queue
	pub fn tick(&mut self, now: Instant, queue: &mut EventQueue) {
		while self.pending.peek().is_some_and(|s| s.emit_at <= now) {
			if let Some(scheduled) = self.pending.pop() {
				queue.push(scheduled.event);
			}
		}
	}

	/// Forget every pending event addressed to `id`
	pub fn cancel_owner(&mut self, id: NavigatorId) -> usize {
		let before = self.pending.len();
		self.pending.retain(|s| s.event.owner() != Some(id));
		before - self.pending.len()
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn next_due(&self) -> Option<Instant> {
		self.pending.peek().map(|s| s.emit_at)
	}
}

impl Default for Scheduler {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reactor::{NavigatorEvent, PlaybackEvent};
	use std::time::Duration;

	fn tick(instance: u64) -> Event {
		Event::Playback {
			id: NavigatorId::Clients,
			event: PlaybackEvent::Tick {
				instance,
				generation: 1,
			},
		}
	}

	#[test]
	fn releases_only_due_events_in_order() {
		let t0 = Instant::now();
		let mut scheduler = Scheduler::new();
		let mut queue = EventQueue::new();
		scheduler.schedule(tick(3), t0 + Duration::from_secs(3));
		scheduler.schedule(tick(1), t0 + Duration::from_secs(1));
		scheduler.schedule(tick(2), t0 + Duration::from_secs(1));

		scheduler.tick(t0, &mut queue);
		assert!(queue.is_empty());
		assert_eq!(scheduler.next_due(), Some(t0 + Duration::from_secs(1)));

		scheduler.tick(t0 + Duration::from_secs(2), &mut queue);
		let order: Vec<u64> = std::iter::from_fn(|| queue.pop())
			.filter_map(|e| match e {
				Event::Playback {
					event: PlaybackEvent::Tick { instance, .. },
					..
				} => Some(instance),
				_ => None,
			})
			.collect();
		assert_eq!(order, vec![1, 2]);
		assert_eq!(scheduler.len(), 1);
	}

	#[test]
	fn cancel_owner_drops_pending_timers() {
		let t0 = Instant::now();
		let mut scheduler = Scheduler::new();
		let mut queue = EventQueue::new();
		scheduler.schedule(tick(1), t0 + Duration::from_secs(5));
		scheduler.schedule(
			Event::Navigator {
				id: NavigatorId::Work,
				event: NavigatorEvent::TransitionComplete { instance: 4 },
			},
			t0 + Duration::from_millis(600),
		);

		assert_eq!(scheduler.cancel_owner(NavigatorId::Clients), 1);
		scheduler.tick(t0 + Duration::from_secs(60), &mut queue);
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.pop().and_then(|e| e.owner()), Some(NavigatorId::Work));
	}
}
