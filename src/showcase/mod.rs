use crate::navigator::{GestureThresholds, SlideCollection, SlideNavigator};
use crate::playback::AutoAdvance;
use crate::reactor::{ComponentResponse, Event};
use crate::types::NavigatorId;
use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// One mounted slide widget
pub struct Carousel {
	pub navigator: SlideNavigator,
	pub playback: AutoAdvance,
}

/// Mounted carousels keyed by widget id.
///
/// Each mount receives a fresh instance id, so completions and ticks
/// scheduled by an earlier mount are recognised as stale.
pub struct Showcase {
	mounted: IndexMap<NavigatorId, Carousel>,
	next_instance: u64,
	transition: Duration,
	interval: Duration,
	thresholds: GestureThresholds,
}

impl Showcase {
	pub fn new(transition: Duration, interval: Duration, thresholds: GestureThresholds) -> Self {
		Self {
			mounted: IndexMap::new(),
			next_instance: 1,
			transition,
			interval,
			thresholds,
		}
	}

	/// Mount `id`, replacing any instance already mounted under it
	pub fn mount(&mut self, id: NavigatorId, slides: SlideCollection, autoplay: bool) -> ComponentResponse {
		let instance = self.next_instance;
		self.next_instance += 1;

		let navigator = SlideNavigator::new(
			id,
			instance,
			slides,
			self.transition,
			self.thresholds.clone(),
		);
		let mut playback = AutoAdvance::new(id, instance, autoplay, self.interval);
		let response = playback.start();

		if self.mounted.insert(id, Carousel { navigator, playback }).is_some() {
			log::info!("[{}] Remounted as #{}", id.label(), instance);
		} else {
			log::info!("[{}] Mounted as #{}", id.label(), instance);
		}
		response
	}

	pub fn unmount(&mut self, id: NavigatorId) -> bool {
		match self.mounted.shift_remove(&id) {
			Some(carousel) => {
				log::info!(
					"[{}] Unmounted #{}",
					id.label(),
					carousel.navigator.instance()
				);
				true
			}
			None => false,
		}
	}

	/// Unmount everything, returning the ids that were mounted
	pub fn unmount_all(&mut self) -> Vec<NavigatorId> {
		let ids: Vec<NavigatorId> = self.mounted.keys().copied().collect();
		for id in &ids {
			self.unmount(*id);
		}
		ids
	}

	pub fn handle(&mut self, event: &Event, now: Instant) -> ComponentResponse {
		let Some(id) = event.owner() else {
			return ComponentResponse::none();
		};
		let Some(carousel) = self.mounted.get_mut(&id) else {
			log::debug!("[{}] Not mounted, dropping {:?}", id.label(), event);
			return ComponentResponse::none();
		};

		match event {
			Event::Navigator { event, .. } => carousel.navigator.handle(event, now),
			Event::Playback { event, .. } => carousel.playback.handle(event),
			_ => ComponentResponse::none(),
		}
	}

	pub fn get(&self, id: NavigatorId) -> Option<&Carousel> {
		self.mounted.get(&id)
	}

	pub fn is_mounted(&self, id: NavigatorId) -> bool {
		self.mounted.contains_key(&id)
	}

	/// Ids of mounted carousels that are currently auto-advancing
	pub fn playing(&self) -> Vec<NavigatorId> {
		self.mounted
			.iter()
			.filter(|(_, carousel)| carousel.playback.is_playing())
			.map(|(id, _)| *id)
			.collect()
	}

	/// Interval given to carousels mounted from now on
	pub fn interval(&self) -> Duration {
		self.interval
	}

	pub fn set_interval(&mut self, interval: Duration) {
		self.interval = interval;
	}
}
