pub mod event;
pub mod queue;
pub mod scheduler;

pub use event::{
	ComponentResponse, ContactEvent, Event, NavigatorEvent, OverlayEvent, PageEvent,
	PlaybackEvent, SettingsEvent,
};
pub use queue::EventQueue;
pub use scheduler::Scheduler;

use crate::catalog::Catalog;
use crate::contact::ContactDesk;
use crate::overlay::{DetailOverlay, DismissReason};
use crate::settings::Settings;
use crate::showcase::Showcase;
use crate::types::{NavigatorId, Page};
use crate::view::ViewManager;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

const MAX_ITERATIONS: usize = 1000;

pub struct Reactor {
	queue: EventQueue,
	scheduler: Scheduler,
	now: Instant,
	page: Page,
	settings: Settings,
	settings_path: Option<PathBuf>,
	/// Carousels paused while a modal is up, resumed when it closes
	held: Option<Vec<NavigatorId>>,

	pub catalog: Catalog,
	pub showcase: Showcase,
	pub overlay: DetailOverlay,
	pub contact: ContactDesk,
	pub view: ViewManager,
}

impl Reactor {
	pub fn new(
		settings: Settings,
		settings_path: Option<PathBuf>,
		catalog: Catalog,
		now: Instant,
	) -> Self {
		log::info!("Initializing all components");
		let showcase = Showcase::new(
			settings.transition(),
			settings.auto_advance(),
			settings.gesture.clone(),
		);
		let mut reactor = Self {
			queue: EventQueue::new(),
			scheduler: Scheduler::new(),
			now,
			page: Page::Home,
			settings,
			settings_path,
			held: None,
			catalog,
			showcase,
			overlay: DetailOverlay::new(),
			contact: ContactDesk::new(),
			view: ViewManager::new(),
		};

		reactor.mount_carousels();
		log::info!("Initialization complete");

		reactor
	}

	fn process_response(&mut self, response: ComponentResponse) {
		for e in response.events {
			self.queue.push(e);
		}
		for (e, delay) in response.scheduled {
			self.scheduler.schedule(e, self.now + delay);
		}
	}

	/// Queue an event produced outside the reactor
	pub fn dispatch(&mut self, event: Event) {
		self.queue.push(event);
	}

	/// Release due timers and drain the queue at `now`
	pub fn pump(&mut self, now: Instant) {
		self.now = now;
		self.scheduler.tick(now, &mut self.queue);
		self.drain();
		self.hold_behind_modal();
		self.drain();
	}

	fn drain(&mut self) {
		let mut iterations = 0;
		while let Some(event) = self.queue.pop() {
			log::trace!("Processing event: {:?}", event);
			let response = self.route(&event);
			self.process_response(response);

			iterations += 1;
			if iterations > MAX_ITERATIONS {
				log::warn!("Event loop exceeded {} iterations, breaking", MAX_ITERATIONS);
				break;
			}
		}
	}

	fn route(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::Page(PageEvent::Show(page)) => self.handle_page(*page),
			Event::Navigator { .. } | Event::Playback { .. } => {
				self.showcase.handle(event, self.now)
			}
			Event::Overlay(_) => self.overlay.handle(event),
			Event::Contact(_) => self.contact.handle(event),
			Event::Settings(SettingsEvent::AutoAdvance { secs }) => self.set_auto_advance(*secs),
		}
	}

	fn modal_open(&self) -> bool {
		self.overlay.is_open() || self.contact.is_open() || self.contact.acknowledgement().is_some()
	}

	/// Pause playing carousels while a modal covers them. Only the ones this
	/// paused are resumed, so a carousel the user paused stays paused.
	fn hold_behind_modal(&mut self) {
		if self.modal_open() {
			if self.held.is_none() {
				let playing = self.showcase.playing();
				for id in &playing {
					self.dispatch(Event::Playback {
						id: *id,
						event: PlaybackEvent::Pause,
					});
				}
				log::debug!("Modal open, holding {:?}", playing);
				self.held = Some(playing);
			}
		} else if let Some(held) = self.held.take() {
			log::debug!("Modal closed, releasing {:?}", held);
			for id in held {
				if self.showcase.is_mounted(id) {
					self.dispatch(Event::Playback {
						id,
						event: PlaybackEvent::Resume,
					});
				}
			}
		}
	}

	fn set_auto_advance(&mut self, secs: u64) -> ComponentResponse {
		if secs == self.settings.auto_advance_secs {
			return ComponentResponse::none();
		}
		self.settings.auto_advance_secs = secs;
		let duration = self.settings.auto_advance();
		self.showcase.set_interval(duration);
		self.save_settings();

		NavigatorId::ALL
			.into_iter()
			.filter(|id| self.showcase.is_mounted(*id))
			.fold(ComponentResponse::none(), |response, id| {
				response.merge(ComponentResponse::emit(Event::Playback {
					id,
					event: PlaybackEvent::SetInterval { duration },
				}))
			})
	}

	fn save_settings(&self) {
		let Some(path) = &self.settings_path else {
			return;
		};
		match self.settings.save_to_path(path) {
			Ok(()) => log::info!("Saved settings to {:?}", path),
			Err(e) => log::warn!("{:#}", e),
		}
	}

	fn handle_page(&mut self, page: Page) -> ComponentResponse {
		if page == self.page {
			log::trace!("Already on {:?}", page);
			return ComponentResponse::none();
		}
		log::info!("Page change: {:?} -> {:?}", self.page, page);
		self.page = page;

		match page {
			Page::Home => {
				self.mount_carousels();
				ComponentResponse::none()
			}
			Page::Services => {
				for id in self.showcase.unmount_all() {
					self.cancel_timers(id);
				}
				ComponentResponse::emit(Event::Overlay(OverlayEvent::Close(
					DismissReason::PageChange,
				)))
			}
		}
	}

	fn mount_carousels(&mut self) {
		for id in NavigatorId::ALL {
			// A remount must not inherit the previous instance's timers
			self.cancel_timers(id);
			let slides = self.catalog.slides(id).clone();
			let response = self.showcase.mount(id, slides, self.settings.autoplay);
			self.process_response(response);
		}
	}

	fn cancel_timers(&mut self, id: NavigatorId) {
		let scheduled = self.scheduler.cancel_owner(id);
		let queued = self.queue.purge_owner(id);
		if scheduled + queued > 0 {
			log::debug!(
				"[{}] Cancelled {} scheduled and {} queued events",
				id.label(),
				scheduled,
				queued
			);
		}
	}

	#[cfg(test)]
	fn pending_timers(&self) -> usize {
		self.scheduler.len()
	}
}

impl eframe::App for Reactor {
	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		let now = Instant::now();
		self.pump(now);

		let events = self.view.render(
			ctx,
			now,
			self.page,
			&self.catalog,
			&self.showcase,
			&self.overlay,
			&self.contact,
		);

		// Process any events from rendering immediately
		if !events.is_empty() {
			for event in events {
				self.dispatch(event);
			}
			self.pump(now);
		}
		if !self.queue.is_empty() {
			ctx.request_repaint();
		}

		if let Some(due) = self.scheduler.next_due() {
			ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::overlay::Selection;
	use eframe::egui::pos2;
	use std::time::Duration;

	fn reactor(t0: Instant) -> Reactor {
		Reactor::new(
			Settings::default(),
			None,
			Catalog::builtin().expect("built-in catalog"),
			t0,
		)
	}

	fn cursor(reactor: &Reactor, id: NavigatorId) -> usize {
		reactor
			.showcase
			.get(id)
			.map(|c| c.navigator.cursor())
			.expect("mounted")
	}

	#[test]
	fn autoplay_advances_and_releases_lock() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		assert_eq!(reactor.pending_timers(), 2);

		reactor.pump(t0 + Duration::from_secs(5));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 1);
		assert_eq!(cursor(&reactor, NavigatorId::Work), 1);
		let clients = reactor.showcase.get(NavigatorId::Clients).expect("mounted");
		assert!(clients.navigator.is_locked());

		reactor.pump(t0 + Duration::from_millis(5600));
		let clients = reactor.showcase.get(NavigatorId::Clients).expect("mounted");
		assert!(!clients.navigator.is_locked());

		reactor.pump(t0 + Duration::from_secs(10));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 2);
	}

	#[test]
	fn navigation_during_transition_is_dropped() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		for _ in 0..3 {
			reactor.dispatch(Event::Navigator {
				id: NavigatorId::Work,
				event: NavigatorEvent::Advance,
			});
		}
		reactor.pump(t0);
		assert_eq!(cursor(&reactor, NavigatorId::Work), 1);
	}

	#[test]
	fn leaving_home_cancels_every_timer() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		reactor.dispatch(Event::Navigator {
			id: NavigatorId::Clients,
			event: NavigatorEvent::Advance,
		});
		reactor.pump(t0);
		assert_eq!(reactor.pending_timers(), 3);

		reactor.dispatch(Event::Page(PageEvent::Show(Page::Services)));
		reactor.pump(t0 + Duration::from_millis(100));
		assert_eq!(reactor.pending_timers(), 0);
		assert!(!reactor.showcase.is_mounted(NavigatorId::Clients));
		assert!(!reactor.showcase.is_mounted(NavigatorId::Work));

		// Nothing fires later either
		reactor.pump(t0 + Duration::from_secs(60));
		assert_eq!(reactor.pending_timers(), 0);
	}

	#[test]
	fn returning_home_remounts_from_first_slide() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		reactor.pump(t0 + Duration::from_secs(5));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 1);

		reactor.dispatch(Event::Page(PageEvent::Show(Page::Services)));
		reactor.pump(t0 + Duration::from_secs(6));
		reactor.dispatch(Event::Page(PageEvent::Show(Page::Home)));
		reactor.pump(t0 + Duration::from_secs(7));

		assert_eq!(reactor.page, Page::Home);
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 0);
		assert_eq!(reactor.pending_timers(), 2);

		// The remounted chain starts from the remount, not the first mount
		reactor.pump(t0 + Duration::from_secs(10));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 0);
		reactor.pump(t0 + Duration::from_secs(12));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 1);
	}

	#[test]
	fn tap_opens_overlay_and_page_change_closes_it() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		reactor.dispatch(Event::Navigator {
			id: NavigatorId::Clients,
			event: NavigatorEvent::TouchStart {
				pos: pos2(200.0, 100.0),
				at: t0,
			},
		});
		reactor.dispatch(Event::Navigator {
			id: NavigatorId::Clients,
			event: NavigatorEvent::TouchEnd {
				pos: pos2(203.0, 101.0),
				at: t0 + Duration::from_millis(120),
			},
		});
		reactor.pump(t0 + Duration::from_millis(120));
		assert_eq!(
			reactor.overlay.selected(),
			Some(Selection {
				navigator: NavigatorId::Clients,
				index: 0
			})
		);

		reactor.dispatch(Event::Page(PageEvent::Show(Page::Services)));
		reactor.pump(t0 + Duration::from_millis(200));
		assert!(!reactor.overlay.is_open());
	}

	fn tap(reactor: &mut Reactor, id: NavigatorId, at: Instant) {
		reactor.dispatch(Event::Navigator {
			id,
			event: NavigatorEvent::TouchStart {
				pos: pos2(200.0, 100.0),
				at,
			},
		});
		reactor.dispatch(Event::Navigator {
			id,
			event: NavigatorEvent::TouchEnd {
				pos: pos2(200.0, 100.0),
				at: at + Duration::from_millis(80),
			},
		});
	}

	#[test]
	fn carousels_hold_while_overlay_is_open() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		tap(&mut reactor, NavigatorId::Work, t0);
		reactor.pump(t0 + Duration::from_millis(100));
		assert!(reactor.overlay.is_open());

		reactor.pump(t0 + Duration::from_secs(30));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 0);
		assert_eq!(cursor(&reactor, NavigatorId::Work), 0);

		reactor.dispatch(Event::Overlay(OverlayEvent::Close(DismissReason::CloseButton)));
		reactor.pump(t0 + Duration::from_secs(30));
		reactor.pump(t0 + Duration::from_secs(35));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 1);
		assert_eq!(cursor(&reactor, NavigatorId::Work), 1);
	}

	#[test]
	fn user_pause_survives_contact_form() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		reactor.dispatch(Event::Playback {
			id: NavigatorId::Clients,
			event: PlaybackEvent::Toggle,
		});
		reactor.dispatch(Event::Contact(ContactEvent::Open));
		reactor.pump(t0);
		reactor.dispatch(Event::Contact(ContactEvent::Close));
		reactor.pump(t0 + Duration::from_secs(1));

		reactor.pump(t0 + Duration::from_secs(30));
		let clients = reactor.showcase.get(NavigatorId::Clients).expect("mounted");
		assert!(!clients.playback.is_playing());
		assert_eq!(clients.navigator.cursor(), 0);
		assert!(cursor(&reactor, NavigatorId::Work) > 0);
	}

	#[test]
	fn auto_advance_change_rearms_and_persists() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("settings.toml");
		let t0 = Instant::now();
		let mut reactor = Reactor::new(
			Settings::default(),
			Some(path.clone()),
			Catalog::builtin().expect("built-in catalog"),
			t0,
		);

		reactor.dispatch(Event::Settings(SettingsEvent::AutoAdvance { secs: 2 }));
		reactor.pump(t0);
		reactor.pump(t0 + Duration::from_secs(2));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 1);
		assert_eq!(reactor.showcase.interval(), Duration::from_secs(2));

		let saved = Settings::load_from_path(&path).expect("saved settings");
		assert_eq!(saved.auto_advance_secs, 2);
	}

	#[test]
	fn paused_widget_keeps_its_slide() {
		let t0 = Instant::now();
		let mut reactor = reactor(t0);
		reactor.dispatch(Event::Playback {
			id: NavigatorId::Clients,
			event: PlaybackEvent::Toggle,
		});
		reactor.pump(t0 + Duration::from_secs(1));
		reactor.pump(t0 + Duration::from_secs(30));
		assert_eq!(cursor(&reactor, NavigatorId::Clients), 0);
		assert!(cursor(&reactor, NavigatorId::Work) > 0);
	}
}
