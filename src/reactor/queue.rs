use super::event::Event;
use crate::types::NavigatorId;
use std::collections::VecDeque;

/// Priority event queue, one FIFO lane per priority level
pub struct EventQueue {
	lanes: [VecDeque<Event>; 4],
}

impl EventQueue {
	pub fn new() -> Self {
		Self {
			lanes: Default::default(),
		}
	}

	pub fn push(&mut self, event: Event) {
		let priority = event.priority();
		self.lanes[priority.as_index()].push_back(event);
	}

	/// Pop the highest priority event available
	pub fn pop(&mut self) -> Option<Event> {
		self.lanes.iter_mut().find_map(|lane| lane.pop_front())
	}

	/// Drop every queued event addressed to `id`. Returns how many were dropped.
	pub fn purge_owner(&mut self, id: NavigatorId) -> usize {
		let mut dropped = 0;
		for lane in &mut self.lanes {
			let before = lane.len();
			lane.retain(|e| e.owner() != Some(id));
			dropped += before - lane.len();
		}
		dropped
	}

	pub fn len(&self) -> usize {
		self.lanes.iter().map(VecDeque::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for EventQueue {
	fn default() -> Self {
		Self::new()
	}
}
