use crate::navigator::SlideCollection;
use crate::types::{MediaKind, NavigatorId};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod builtin;

/// Partnership bullets shown on every client detail view
pub const PARTNERSHIP_HIGHLIGHTS: [&str; 4] = [
	"Long-term strategic partnership",
	"Multiple successful project collaborations",
	"Industry-leading safety standards",
	"Innovative construction solutions",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default = "default_accent")]
	pub accent: [u8; 3],
	pub detail: SlideDetail,
}

fn default_accent() -> [u8; 3] {
	[249, 115, 22]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
	#[serde(default)]
	pub kind: MediaKind,
	/// Image source understood by the egui loaders (`file://`, `https://`, `bytes://`).
	/// Slides without one are painted as an accent-colored placeholder.
	#[serde(default)]
	pub uri: Option<String>,
}

impl MediaRef {
	pub fn image(uri: Option<&str>) -> Self {
		Self {
			kind: MediaKind::Image,
			uri: uri.map(str::to_owned),
		}
	}

	pub fn video(uri: Option<&str>) -> Self {
		Self {
			kind: MediaKind::Video,
			uri: uri.map(str::to_owned),
		}
	}
}

/// Which detail layout a slide opens into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum SlideDetail {
	Client { client: ClientKey },
	Project(ProjectDetail),
}

/// The featured clients. Closed set, so every detail lookup is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientKey {
	AvengGroup,
	MurrayRoberts,
	Wbho,
	StefanuttiStocks,
	GroupFive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
	pub name: String,
	pub specialization: String,
	pub description: String,
	pub location: String,
	pub since: i32,
	pub projects: Vec<String>,
}

impl ClientProfile {
	pub fn years_partnered(&self, current_year: i32) -> i32 {
		(current_year - self.since).max(0)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
	pub location: String,
	#[serde(default)]
	pub completed: Option<i32>,
	#[serde(default)]
	pub scope: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
	pub number: String,
	pub label: String,
}

/// Resolved detail view body for one slide
pub enum DetailBody<'a> {
	Client(&'a ClientProfile),
	Project(&'a ProjectDetail),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("slide collection '{0}' is empty")]
	EmptyCollection(&'static str),
	#[error("slide '{title}' refers to client {client:?} which has no profile")]
	MissingProfile { title: String, client: ClientKey },
	#[error("unsupported catalog format '{0}' (expected .toml or .json)")]
	UnsupportedFormat(String),
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
	clients: Vec<Slide>,
	work: Vec<Slide>,
	profiles: IndexMap<ClientKey, ClientProfile>,
	#[serde(default)]
	other_clients: Vec<String>,
	#[serde(default)]
	core_services: Vec<Service>,
	#[serde(default)]
	additional_services: Vec<Service>,
	#[serde(default)]
	stats: Vec<Stat>,
}

/// All content the site presents
#[derive(Debug, Clone)]
pub struct Catalog {
	pub clients: SlideCollection,
	pub work: SlideCollection,
	pub profiles: IndexMap<ClientKey, ClientProfile>,
	pub other_clients: Vec<String>,
	pub core_services: Vec<Service>,
	pub additional_services: Vec<Service>,
	pub stats: Vec<Stat>,
}

impl Catalog {
	pub fn builtin() -> Result<Self, CatalogError> {
		builtin::catalog()
	}

	/// Load a catalog from a `.toml` or `.json` file
	pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read catalog file: {:?}", path))?;
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or_default()
			.to_lowercase();

		let file: CatalogFile = match extension.as_str() {
			"toml" => toml::from_str(&content)
				.with_context(|| format!("Failed to parse catalog file: {:?}", path))?,
			"json" => serde_json::from_str(&content)
				.with_context(|| format!("Failed to parse catalog file: {:?}", path))?,
			other => return Err(CatalogError::UnsupportedFormat(other.to_string()).into()),
		};

		let catalog = Self::from_file(file)?;
		log::info!(
			"Loaded catalog from {:?}: {} client slides, {} work slides",
			path,
			catalog.clients.len(),
			catalog.work.len()
		);
		Ok(catalog)
	}

	fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
		let clients = SlideCollection::new(file.clients)
			.map_err(|_| CatalogError::EmptyCollection("clients"))?;
		let work =
			SlideCollection::new(file.work).map_err(|_| CatalogError::EmptyCollection("work"))?;

		for slide in clients.iter().chain(work.iter()) {
			if let SlideDetail::Client { client } = &slide.detail {
				if !file.profiles.contains_key(client) {
					return Err(CatalogError::MissingProfile {
						title: slide.title.clone(),
						client: *client,
					});
				}
			}
		}

		Ok(Self {
			clients,
			work,
			profiles: file.profiles,
			other_clients: file.other_clients,
			core_services: file.core_services,
			additional_services: file.additional_services,
			stats: file.stats,
		})
	}

	pub fn slides(&self, id: NavigatorId) -> &SlideCollection {
		match id {
			NavigatorId::Clients => &self.clients,
			NavigatorId::Work => &self.work,
		}
	}

	pub fn detail<'a>(&'a self, slide: &'a Slide) -> Option<DetailBody<'a>> {
		match &slide.detail {
			SlideDetail::Client { client } => self.profiles.get(client).map(DetailBody::Client),
			SlideDetail::Project(project) => Some(DetailBody::Project(project)),
		}
	}
}
