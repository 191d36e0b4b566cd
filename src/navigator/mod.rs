use crate::catalog::Slide;
use crate::overlay::Selection;
use crate::reactor::{ComponentResponse, Event, NavigatorEvent, OverlayEvent};
use crate::types::{NavDirection, NavigatorId};
use eframe::egui::Pos2;
use std::time::{Duration, Instant};

pub mod gesture;

pub use gesture::{GestureOutcome, GestureSession, GestureThresholds};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigatorError {
	#[error("a slide navigator needs at least one slide")]
	EmptyCollection,
	#[error("slide index {index} out of range (len {len})")]
	IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, non-empty, immutable list of slides
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCollection {
	slides: Vec<Slide>,
}

impl SlideCollection {
	pub fn new(slides: Vec<Slide>) -> Result<Self, NavigatorError> {
		if slides.is_empty() {
			return Err(NavigatorError::EmptyCollection);
		}
		Ok(Self { slides })
	}

	pub fn len(&self) -> usize {
		self.slides.len()
	}

	pub fn get(&self, index: usize) -> Option<&Slide> {
		self.slides.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
		self.slides.iter()
	}
}

/// A cursor move that is currently animating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
	pub from: usize,
	pub to: usize,
	pub direction: NavDirection,
	pub started_at: Instant,
}

pub struct SlideNavigator {
	id: NavigatorId,
	instance: u64,
	slides: SlideCollection,
	cursor: usize,
	/// Animation lock. Every cursor mutation is refused while set.
	locked: bool,
	transition: Option<Transition>,
	transition_duration: Duration,
	thresholds: GestureThresholds,
	gesture: Option<GestureSession>,
	drag_offset: f32,
}

impl SlideNavigator {
	pub fn new(
		id: NavigatorId,
		instance: u64,
		slides: SlideCollection,
		transition_duration: Duration,
		thresholds: GestureThresholds,
	) -> Self {
		log::info!(
			"[{}] Navigator #{} over {} slides",
			id.label(),
			instance,
			slides.len()
		);
		Self {
			id,
			instance,
			slides,
			cursor: 0,
			locked: false,
			transition: None,
			transition_duration,
			thresholds,
			gesture: None,
			drag_offset: 0.0,
		}
	}

	pub fn handle(&mut self, event: &NavigatorEvent, now: Instant) -> ComponentResponse {
		match event {
			NavigatorEvent::Advance => {
				let transition = self.advance(now);
				self.started(transition)
			}
			NavigatorEvent::Retreat => {
				let transition = self.retreat(now);
				self.started(transition)
			}
			NavigatorEvent::JumpTo { index } => match self.jump_to(*index, now) {
				Ok(transition) => self.started(transition),
				Err(e) => {
					log::warn!("[{}] Jump rejected: {}", self.id.label(), e);
					ComponentResponse::none()
				}
			},
			NavigatorEvent::TransitionComplete { instance } => {
				if *instance != self.instance {
					log::trace!(
						"[{}] Stale transition completion from #{}",
						self.id.label(),
						instance
					);
				} else {
					self.complete_transition();
				}
				ComponentResponse::none()
			}
			NavigatorEvent::TouchStart { pos, at } => {
				self.touch_start(*pos, *at);
				ComponentResponse::none()
			}
			NavigatorEvent::TouchMove { pos } => {
				self.touch_move(*pos);
				ComponentResponse::none()
			}
			NavigatorEvent::TouchEnd { pos, at } => self.touch_end(*pos, *at),
			NavigatorEvent::TouchCancel => {
				self.gesture = None;
				self.drag_offset = 0.0;
				ComponentResponse::none()
			}
		}
	}

	/// Schedule lock release for a transition that just started
	fn started(&self, transition: Option<Transition>) -> ComponentResponse {
		match transition {
			Some(_) => ComponentResponse::schedule(
				Event::Navigator {
					id: self.id,
					event: NavigatorEvent::TransitionComplete {
						instance: self.instance,
					},
				},
				self.transition_duration,
			),
			None => ComponentResponse::none(),
		}
	}

	pub fn advance(&mut self, now: Instant) -> Option<Transition> {
		let to = (self.cursor + 1) % self.slides.len();
		self.begin(to, NavDirection::Next, now)
	}

	pub fn retreat(&mut self, now: Instant) -> Option<Transition> {
		let len = self.slides.len();
		let to = (self.cursor + len - 1) % len;
		self.begin(to, NavDirection::Prev, now)
	}

	/// Jump straight to `index`. Re-selecting the current slide is not a transition.
	pub fn jump_to(&mut self, index: usize, now: Instant) -> Result<Option<Transition>, NavigatorError> {
		let len = self.slides.len();
		if index >= len {
			return Err(NavigatorError::IndexOutOfRange { index, len });
		}
		if index == self.cursor {
			log::trace!("[{}] Jump to current slide {} ignored", self.id.label(), index);
			return Ok(None);
		}
		let direction = if index > self.cursor {
			NavDirection::Next
		} else {
			NavDirection::Prev
		};
		Ok(self.begin(index, direction, now))
	}

	fn begin(&mut self, to: usize, direction: NavDirection, now: Instant) -> Option<Transition> {
		if self.locked {
			log::trace!(
				"[{}] Navigation {:?} ignored: transition in flight",
				self.id.label(),
				direction
			);
			return None;
		}

		let transition = Transition {
			from: self.cursor,
			to,
			direction,
			started_at: now,
		};
		self.locked = true;
		self.cursor = to;
		self.transition = Some(transition);
		log::debug!(
			"[{}] Navigate {:?}: {} -> {} (of {})",
			self.id.label(),
			direction,
			transition.from,
			transition.to,
			self.slides.len()
		);
		Some(transition)
	}

	fn complete_transition(&mut self) {
		if !self.locked {
			log::trace!("[{}] Completion without a transition", self.id.label());
			return;
		}
		self.locked = false;
		self.transition = None;
	}

	fn touch_start(&mut self, pos: Pos2, at: Instant) {
		if self.gesture.is_some() {
			log::debug!("[{}] Touch restarted before end", self.id.label());
		}
		self.gesture = Some(GestureSession::begin(pos, at));
	}

	fn touch_move(&mut self, pos: Pos2) {
		if let Some(session) = self.gesture.as_mut() {
			if let Some(offset) = session.track(pos, &self.thresholds) {
				self.drag_offset = offset;
			}
		}
	}

	fn touch_end(&mut self, pos: Pos2, at: Instant) -> ComponentResponse {
		// Snap back regardless of how the gesture is classified
		self.drag_offset = 0.0;
		let Some(mut session) = self.gesture.take() else {
			return ComponentResponse::none();
		};
		session.track(pos, &self.thresholds);

		match session.classify(at, &self.thresholds) {
			GestureOutcome::Swipe(direction) => {
				let transition = match direction {
					NavDirection::Next => self.advance(at),
					NavDirection::Prev => self.retreat(at),
				};
				self.started(transition)
			}
			GestureOutcome::Tap => {
				log::debug!("[{}] Tap on slide {}", self.id.label(), self.cursor);
				ComponentResponse::emit(Event::Overlay(OverlayEvent::Open(Selection {
					navigator: self.id,
					index: self.cursor,
				})))
			}
			GestureOutcome::Ignored => {
				log::debug!(
					"[{}] Ambiguous gesture ignored (dx={:.0})",
					self.id.label(),
					session.delta_x()
				);
				ComponentResponse::none()
			}
		}
	}

	/// Transition progress in `[0, 1]`, 1 when idle
	pub fn progress(&self, now: Instant) -> f32 {
		match &self.transition {
			Some(t) if !self.transition_duration.is_zero() => {
				let elapsed = now.saturating_duration_since(t.started_at);
				(elapsed.as_secs_f32() / self.transition_duration.as_secs_f32()).clamp(0.0, 1.0)
			}
			_ => 1.0,
		}
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn current(&self) -> &Slide {
		// cursor < len is upheld by every mutation
		&self.slides.slides[self.cursor]
	}

	pub fn slides(&self) -> &SlideCollection {
		&self.slides
	}

	pub fn len(&self) -> usize {
		self.slides.len()
	}

	#[cfg(test)]
	pub fn is_locked(&self) -> bool {
		self.locked
	}

	pub fn is_swiping(&self) -> bool {
		self.gesture.is_some()
	}

	pub fn transition(&self) -> Option<&Transition> {
		self.transition.as_ref()
	}

	pub fn drag_offset(&self) -> f32 {
		self.drag_offset
	}

	pub fn id(&self) -> NavigatorId {
		self.id
	}

	pub fn instance(&self) -> u64 {
		self.instance
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{MediaRef, ProjectDetail, SlideDetail};
	use eframe::egui::pos2;

	fn slide(title: &str) -> Slide {
		Slide {
			title: title.to_string(),
			description: String::new(),
			media: MediaRef::image(None),
			accent: [0, 0, 0],
			detail: SlideDetail::Project(ProjectDetail {
				location: "Johannesburg".to_string(),
				completed: None,
				scope: Vec::new(),
			}),
		}
	}

	fn navigator(len: usize) -> SlideNavigator {
		let slides = (0..len).map(|i| slide(&format!("slide {}", i))).collect();
		SlideNavigator::new(
			NavigatorId::Work,
			7,
			SlideCollection::new(slides).expect("non-empty"),
			Duration::from_millis(600),
			GestureThresholds::default(),
		)
	}

	fn complete(nav: &mut SlideNavigator, now: Instant) {
		nav.handle(&NavigatorEvent::TransitionComplete { instance: 7 }, now);
	}

	#[test]
	fn empty_collection_rejected() {
		assert_eq!(
			SlideCollection::new(Vec::new()),
			Err(NavigatorError::EmptyCollection)
		);
	}

	#[test]
	fn advance_wraps_to_first() {
		let now = Instant::now();
		let mut nav = navigator(3);
		for expected in [1, 2, 0] {
			assert!(nav.advance(now).is_some());
			assert_eq!(nav.cursor(), expected);
			complete(&mut nav, now);
		}
	}

	#[test]
	fn retreat_wraps_to_last() {
		let now = Instant::now();
		let mut nav = navigator(4);
		let transition = nav.retreat(now).expect("unlocked");
		assert_eq!(transition.from, 0);
		assert_eq!(transition.to, 3);
		assert_eq!(nav.cursor(), 3);
	}

	#[test]
	fn double_advance_moves_once() {
		let now = Instant::now();
		let mut nav = navigator(5);
		let first = nav.handle(&NavigatorEvent::Advance, now);
		let second = nav.handle(&NavigatorEvent::Advance, now);
		assert_eq!(nav.cursor(), 1);
		assert_eq!(first.scheduled.len(), 1);
		assert!(second.scheduled.is_empty());
		assert!(nav.is_locked());

		complete(&mut nav, now + Duration::from_millis(600));
		assert!(!nav.is_locked());
		nav.handle(&NavigatorEvent::Advance, now);
		assert_eq!(nav.cursor(), 2);
	}

	#[test]
	fn completion_scheduled_after_transition_duration() {
		let mut nav = navigator(2);
		let response = nav.handle(&NavigatorEvent::Retreat, Instant::now());
		let (event, delay) = &response.scheduled[0];
		assert_eq!(*delay, Duration::from_millis(600));
		assert!(matches!(
			event,
			Event::Navigator {
				id: NavigatorId::Work,
				event: NavigatorEvent::TransitionComplete { instance: 7 }
			}
		));
	}

	#[test]
	fn stale_completion_does_not_unlock() {
		let now = Instant::now();
		let mut nav = navigator(3);
		nav.advance(now);
		nav.handle(&NavigatorEvent::TransitionComplete { instance: 6 }, now);
		assert!(nav.is_locked());
	}

	#[test]
	fn jump_to_current_is_noop() {
		let now = Instant::now();
		let mut nav = navigator(3);
		assert_eq!(nav.jump_to(0, now), Ok(None));
		assert!(!nav.is_locked());
		assert!(nav.transition().is_none());
	}

	#[test]
	fn jump_out_of_range_rejected() {
		let now = Instant::now();
		let mut nav = navigator(3);
		assert_eq!(
			nav.jump_to(3, now),
			Err(NavigatorError::IndexOutOfRange { index: 3, len: 3 })
		);
		assert_eq!(nav.cursor(), 0);
		let response = nav.handle(&NavigatorEvent::JumpTo { index: 9 }, now);
		assert!(response.scheduled.is_empty());
		assert_eq!(nav.cursor(), 0);
	}

	#[test]
	fn jump_respects_lock() {
		let now = Instant::now();
		let mut nav = navigator(4);
		nav.jump_to(2, now).expect("in range");
		assert_eq!(nav.jump_to(3, now), Ok(None));
		assert_eq!(nav.cursor(), 2);
		let t = nav.transition().expect("in flight");
		assert_eq!(t.direction, NavDirection::Next);
	}

	#[test]
	fn cursor_stays_in_range_under_mixed_input() {
		let mut now = Instant::now();
		let mut nav = navigator(3);
		let script = [
			NavigatorEvent::Retreat,
			NavigatorEvent::Advance,
			NavigatorEvent::JumpTo { index: 1 },
			NavigatorEvent::Retreat,
			NavigatorEvent::Retreat,
			NavigatorEvent::JumpTo { index: 2 },
			NavigatorEvent::Advance,
		];
		for event in script.iter().cycle().take(40) {
			nav.handle(event, now);
			assert!(nav.cursor() < nav.len());
			now += Duration::from_millis(300);
			if nav.progress(now) >= 1.0 {
				complete(&mut nav, now);
			}
		}
	}

	#[test]
	fn progress_tracks_elapsed_time() {
		let now = Instant::now();
		let mut nav = navigator(3);
		assert_eq!(nav.progress(now), 1.0);
		nav.advance(now);
		assert_eq!(nav.progress(now), 0.0);
		assert!((nav.progress(now + Duration::from_millis(300)) - 0.5).abs() < 1e-3);
		assert_eq!(nav.progress(now + Duration::from_secs(5)), 1.0);
	}

	#[test]
	fn tap_opens_current_slide() {
		let now = Instant::now();
		let mut nav = navigator(3);
		nav.advance(now);
		complete(&mut nav, now);

		nav.handle(&NavigatorEvent::TouchStart { pos: pos2(200.0, 50.0), at: now }, now);
		assert!(nav.is_swiping());
		let response = nav.handle(
			&NavigatorEvent::TouchEnd {
				pos: pos2(198.0, 50.0),
				at: now + Duration::from_millis(120),
			},
			now,
		);
		assert!(!nav.is_swiping());
		assert!(matches!(
			response.events.as_slice(),
			[Event::Overlay(OverlayEvent::Open(Selection {
				navigator: NavigatorId::Work,
				index: 1
			}))]
		));
		assert_eq!(nav.cursor(), 1);
	}

	#[test]
	fn swipe_left_advances_once() {
		let now = Instant::now();
		let mut nav = navigator(3);
		nav.handle(&NavigatorEvent::TouchStart { pos: pos2(300.0, 40.0), at: now }, now);
		nav.handle(&NavigatorEvent::TouchMove { pos: pos2(260.0, 40.0) }, now);
		assert!((nav.drag_offset() + 12.0).abs() < 1e-3);

		let response = nav.handle(
			&NavigatorEvent::TouchEnd {
				pos: pos2(220.0, 40.0),
				at: now + Duration::from_millis(200),
			},
			now,
		);
		assert_eq!(nav.cursor(), 1);
		assert_eq!(nav.drag_offset(), 0.0);
		assert_eq!(response.scheduled.len(), 1);
		assert!(response.events.is_empty());
	}

	#[test]
	fn swipe_right_retreats() {
		let now = Instant::now();
		let mut nav = navigator(3);
		nav.handle(&NavigatorEvent::TouchStart { pos: pos2(100.0, 40.0), at: now }, now);
		nav.handle(&NavigatorEvent::TouchMove { pos: pos2(150.0, 40.0) }, now);
		nav.handle(
			&NavigatorEvent::TouchEnd {
				pos: pos2(190.0, 40.0),
				at: now + Duration::from_millis(250),
			},
			now,
		);
		assert_eq!(nav.cursor(), 2);
	}

	#[test]
	fn swipe_during_transition_is_ignored() {
		let now = Instant::now();
		let mut nav = navigator(3);
		nav.advance(now);
		nav.handle(&NavigatorEvent::TouchStart { pos: pos2(300.0, 0.0), at: now }, now);
		nav.handle(&NavigatorEvent::TouchMove { pos: pos2(200.0, 0.0) }, now);
		let response = nav.handle(
			&NavigatorEvent::TouchEnd {
				pos: pos2(200.0, 0.0),
				at: now + Duration::from_millis(100),
			},
			now,
		);
		assert_eq!(nav.cursor(), 1);
		assert!(response.scheduled.is_empty());
	}

	#[test]
	fn dead_zone_gesture_does_nothing() {
		let now = Instant::now();
		let mut nav = navigator(3);
		nav.handle(&NavigatorEvent::TouchStart { pos: pos2(200.0, 0.0), at: now }, now);
		nav.handle(&NavigatorEvent::TouchMove { pos: pos2(170.0, 0.0) }, now);
		let response = nav.handle(
			&NavigatorEvent::TouchEnd {
				pos: pos2(160.0, 0.0),
				at: now + Duration::from_millis(500),
			},
			now,
		);
		assert_eq!(nav.cursor(), 0);
		assert!(response.events.is_empty());
		assert!(response.scheduled.is_empty());
		assert_eq!(nav.drag_offset(), 0.0);
	}

	#[test]
	fn touch_end_without_start_is_harmless() {
		let now = Instant::now();
		let mut nav = navigator(2);
		let response = nav.handle(
			&NavigatorEvent::TouchEnd {
				pos: pos2(0.0, 0.0),
				at: now,
			},
			now,
		);
		assert!(response.events.is_empty());
		assert_eq!(nav.cursor(), 0);
	}

	#[test]
	fn cancel_discards_session() {
		let now = Instant::now();
		let mut nav = navigator(2);
		nav.handle(&NavigatorEvent::TouchStart { pos: pos2(100.0, 0.0), at: now }, now);
		nav.handle(&NavigatorEvent::TouchMove { pos: pos2(40.0, 0.0) }, now);
		nav.handle(&NavigatorEvent::TouchCancel, now);
		assert!(!nav.is_swiping());
		assert_eq!(nav.drag_offset(), 0.0);
		assert_eq!(nav.cursor(), 0);
	}
}
