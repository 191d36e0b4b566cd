use crate::contact::ContactField;
use crate::overlay::{DismissReason, Selection};
use crate::types::{NavigatorId, Page};
use eframe::egui::Pos2;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub enum Event {
	Page(PageEvent),
	Navigator {
		id: NavigatorId,
		event: NavigatorEvent,
	},
	Playback {
		id: NavigatorId,
		event: PlaybackEvent,
	},
	Overlay(OverlayEvent),
	Contact(ContactEvent),
	Settings(SettingsEvent),
}

impl Event {
	pub fn priority(&self) -> Priority {
		match self {
			Event::Page(_) => Priority::Critical,
			Event::Navigator {
				event: NavigatorEvent::TransitionComplete { .. },
				..
			} => Priority::High,
			Event::Navigator { .. } => Priority::Normal,
			Event::Playback {
				event: PlaybackEvent::Tick { .. },
				..
			} => Priority::Low,
			Event::Playback { .. } => Priority::Normal,
			Event::Overlay(_) => Priority::Normal,
			Event::Contact(_) => Priority::Normal,
			Event::Settings(_) => Priority::Normal,
		}
	}

	/// The slide widget this event is addressed to, if any
	pub fn owner(&self) -> Option<NavigatorId> {
		match self {
			Event::Navigator { id, .. } | Event::Playback { id, .. } => Some(*id),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
	Critical = 0,
	High = 1,
	Normal = 2,
	Low = 3,
}

impl Priority {
	pub fn as_index(&self) -> usize {
		*self as usize
	}
}

#[derive(Clone, Debug)]
pub enum PageEvent {
	Show(Page),
}

#[derive(Clone, Debug)]
pub enum NavigatorEvent {
	Advance,
	Retreat,
	JumpTo { index: usize },
	/// Animation finished, release the lock
	TransitionComplete { instance: u64 },
	TouchStart { pos: Pos2, at: Instant },
	TouchMove { pos: Pos2 },
	TouchEnd { pos: Pos2, at: Instant },
	TouchCancel,
}

#[derive(Clone, Debug)]
pub enum PlaybackEvent {
	/// Flip between playing and paused
	Toggle,
	Pause,
	Resume,
	SetInterval { duration: Duration },
	/// Timer fired, advance if the token is still live
	Tick { instance: u64, generation: u64 },
}

#[derive(Clone, Debug)]
pub enum OverlayEvent {
	Open(Selection),
	Close(DismissReason),
}

#[derive(Clone, Debug)]
pub enum ContactEvent {
	Open,
	Close,
	Edit { field: ContactField, value: String },
	Submit,
	/// Dismiss the thank-you alert
	Acknowledge,
}

#[derive(Clone, Debug)]
pub enum SettingsEvent {
	/// New auto-advance interval for every carousel, persisted
	AutoAdvance { secs: u64 },
}

/// Response from component.handle()
#[derive(Default)]
pub struct ComponentResponse {
	/// Events to dispatch immediately
	pub events: Vec<Event>,
	/// Events to schedule (event, delay)
	pub scheduled: Vec<(Event, Duration)>,
}

impl ComponentResponse {
	pub fn none() -> Self {
		Self::default()
	}

	pub fn emit(event: Event) -> Self {
		Self {
			events: vec![event],
			scheduled: vec![],
		}
	}

	pub fn schedule(event: Event, delay: Duration) -> Self {
		Self {
			events: vec![],
			scheduled: vec![(event, delay)],
		}
	}

	pub fn merge(mut self, other: ComponentResponse) -> Self {
		self.events.extend(other.events);
		self.scheduled.extend(other.scheduled);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty() && self.scheduled.is_empty()
	}
}
