use serde::{Deserialize, Serialize};

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
	Next,
	Prev,
}

/// Kind of media a slide displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
	#[default]
	Image,
	Video,
}

/// The mounted slide widgets. Each owns its own navigator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigatorId {
	Clients,
	Work,
}

impl NavigatorId {
	pub const ALL: [NavigatorId; 2] = [NavigatorId::Clients, NavigatorId::Work];

	pub fn label(&self) -> &'static str {
		match self {
			NavigatorId::Clients => "clients",
			NavigatorId::Work => "work",
		}
	}
}

/// Top level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
	#[default]
	Home,
	Services,
}
