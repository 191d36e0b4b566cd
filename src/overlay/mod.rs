use crate::reactor::{ComponentResponse, Event, OverlayEvent};
use crate::types::NavigatorId;

/// A slide picked for the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
	pub navigator: NavigatorId,
	pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
	CloseButton,
	/// Press landed outside the overlay content
	Backdrop,
	Escape,
	PageChange,
}

/// Holds at most one open detail view. Opening another replaces it.
pub struct DetailOverlay {
	selected: Option<Selection>,
}

impl DetailOverlay {
	pub fn new() -> Self {
		Self { selected: None }
	}

	pub fn handle(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::Overlay(OverlayEvent::Open(selection)) => {
				if let Some(previous) = self.selected.replace(*selection) {
					log::debug!("Detail view {:?} replaced by {:?}", previous, selection);
				} else {
					log::info!("Detail view opened: {:?}", selection);
				}
			}
			Event::Overlay(OverlayEvent::Close(reason)) => {
				if let Some(selection) = self.selected.take() {
					log::info!("Detail view {:?} closed ({:?})", selection, reason);
				}
			}
			_ => {}
		}
		ComponentResponse::none()
	}

	pub fn selected(&self) -> Option<Selection> {
		self.selected
	}

	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}
}

impl Default for DetailOverlay {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn open(navigator: NavigatorId, index: usize) -> Event {
		Event::Overlay(OverlayEvent::Open(Selection { navigator, index }))
	}

	#[test]
	fn opening_second_item_replaces_first() {
		let mut overlay = DetailOverlay::new();
		overlay.handle(&open(NavigatorId::Clients, 0));
		overlay.handle(&open(NavigatorId::Clients, 3));
		assert_eq!(
			overlay.selected(),
			Some(Selection {
				navigator: NavigatorId::Clients,
				index: 3
			})
		);

		overlay.handle(&open(NavigatorId::Work, 1));
		assert_eq!(overlay.selected().map(|s| s.navigator), Some(NavigatorId::Work));
	}

	#[test]
	fn every_dismiss_reason_closes() {
		let mut overlay = DetailOverlay::new();
		for reason in [
			DismissReason::CloseButton,
			DismissReason::Backdrop,
			DismissReason::Escape,
			DismissReason::PageChange,
		] {
			overlay.handle(&open(NavigatorId::Work, 2));
			assert!(overlay.is_open());
			overlay.handle(&Event::Overlay(OverlayEvent::Close(reason)));
			assert!(!overlay.is_open());
		}
	}

	#[test]
	fn close_when_nothing_open_is_noop() {
		let mut overlay = DetailOverlay::new();
		overlay.handle(&Event::Overlay(OverlayEvent::Close(DismissReason::Backdrop)));
		assert_eq!(overlay.selected(), None);
	}
}
