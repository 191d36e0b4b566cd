use crate::reactor::{ComponentResponse, Event, NavigatorEvent, PlaybackEvent};
use crate::types::{MediaKind, NavigatorId};
use std::time::Duration;

pub const MIN_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_INTERVAL: Duration = Duration::from_secs(60);

/// Timed auto-advance for one mounted navigator.
///
/// Every arm or disarm bumps `generation`, and a tick only counts while its
/// `(instance, generation)` still matches. A paused-then-resumed widget
/// therefore never ends up with two timer chains.
pub struct AutoAdvance {
	id: NavigatorId,
	instance: u64,
	playing: bool,
	interval: Duration,
	generation: u64,
}

impl AutoAdvance {
	pub fn new(id: NavigatorId, instance: u64, playing: bool, interval: Duration) -> Self {
		Self {
			id,
			instance,
			playing,
			interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
			generation: 0,
		}
	}

	/// Arm the first tick if playback starts enabled
	pub fn start(&mut self) -> ComponentResponse {
		if self.playing {
			self.arm()
		} else {
			ComponentResponse::none()
		}
	}

	pub fn handle(&mut self, event: &PlaybackEvent) -> ComponentResponse {
		match event {
			PlaybackEvent::Toggle => {
				if self.playing {
					self.pause()
				} else {
					self.resume()
				}
			}
			PlaybackEvent::Pause => self.pause(),
			PlaybackEvent::Resume => self.resume(),
			PlaybackEvent::SetInterval { duration } => {
				self.interval = (*duration).clamp(MIN_INTERVAL, MAX_INTERVAL);
				log::info!(
					"[{}] Auto-advance interval set to {:?}",
					self.id.label(),
					self.interval
				);
				// Restart the chain so the new interval applies from now
				if self.playing {
					self.arm()
				} else {
					ComponentResponse::none()
				}
			}
			PlaybackEvent::Tick {
				instance,
				generation,
			} => {
				if *instance != self.instance || *generation != self.generation || !self.playing {
					log::trace!(
						"[{}] Stale tick #{}/{} ignored",
						self.id.label(),
						instance,
						generation
					);
					return ComponentResponse::none();
				}
				// Advance and schedule the next tick in the same chain
				ComponentResponse::emit(Event::Navigator {
					id: self.id,
					event: NavigatorEvent::Advance,
				})
				.merge(ComponentResponse::schedule(self.tick_event(), self.interval))
			}
		}
	}

	fn pause(&mut self) -> ComponentResponse {
		if self.playing {
			self.playing = false;
			self.generation += 1;
			log::info!("[{}] Playback paused", self.id.label());
		}
		ComponentResponse::none()
	}

	fn resume(&mut self) -> ComponentResponse {
		if self.playing {
			return ComponentResponse::none();
		}
		self.playing = true;
		log::info!("[{}] Playback resumed", self.id.label());
		self.arm()
	}

	fn arm(&mut self) -> ComponentResponse {
		self.generation += 1;
		ComponentResponse::schedule(self.tick_event(), self.interval)
	}

	fn tick_event(&self) -> Event {
		Event::Playback {
			id: self.id,
			event: PlaybackEvent::Tick {
				instance: self.instance,
				generation: self.generation,
			},
		}
	}

	pub fn is_playing(&self) -> bool {
		self.playing
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Inline video plays only while playback is on
	pub fn media_active(&self, kind: MediaKind) -> bool {
		self.playing && kind == MediaKind::Video
	}
}
