use crate::navigator::GestureThresholds;
use crate::playback::{MAX_INTERVAL, MIN_INTERVAL};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SETTINGS_FILE: &str = "settings.toml";

/// User preferences, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Start both carousels playing
	pub autoplay: bool,
	pub auto_advance_secs: u64,
	pub transition_ms: u64,
	/// Optional content file replacing the built-in catalog
	#[serde(skip_serializing_if = "Option::is_none")]
	pub catalog: Option<PathBuf>,
	pub gesture: GestureThresholds,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			autoplay: true,
			auto_advance_secs: 5,
			transition_ms: 600,
			catalog: None,
			gesture: GestureThresholds::default(),
		}
	}
}

impl Settings {
	pub fn auto_advance(&self) -> Duration {
		Duration::from_secs(self.auto_advance_secs).clamp(MIN_INTERVAL, MAX_INTERVAL)
	}

	pub fn transition(&self) -> Duration {
		Duration::from_millis(self.transition_ms)
	}

	/// `settings.toml` under the platform config directory
	pub fn default_path() -> Option<PathBuf> {
		ProjectDirs::from("za", "MSJ Traders", "msj-showcase")
			.map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
	}

	/// Load from the default location. Missing or broken files yield defaults.
	pub fn load() -> Self {
		let Some(path) = Self::default_path() else {
			log::warn!("No config directory available, using default settings");
			return Self::default();
		};
		if !path.exists() {
			log::info!("No settings at {:?}, using defaults", path);
			return Self::default();
		}
		match Self::load_from_path(&path) {
			Ok(settings) => settings,
			Err(e) => {
				log::warn!("{:#}. Using default settings", e);
				Self::default()
			}
		}
	}

	pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read settings file: {:?}", path))?;
		let settings: Settings = toml::from_str(&content)
			.with_context(|| format!("Failed to parse settings file: {:?}", path))?;
		log::info!("Loaded settings from {:?}", path);
		Ok(settings)
	}

	pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)
				.with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
		}
		let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
		std::fs::write(path, content)
			.with_context(|| format!("Failed to write settings file: {:?}", path))?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn save_then_load_preserves_values() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("nested").join(SETTINGS_FILE);
		let settings = Settings {
			autoplay: false,
			auto_advance_secs: 8,
			catalog: Some(PathBuf::from("/srv/msj/catalog.toml")),
			..Settings::default()
		};
		settings.save_to_path(&path).expect("save");
		assert_eq!(Settings::load_from_path(&path).expect("load"), settings);
	}

	#[test]
	fn partial_file_fills_defaults() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join(SETTINGS_FILE);
		std::fs::write(&path, "transition_ms = 250\n[gesture]\nswipe_distance = 80.0\n")
			.expect("write");

		let settings = Settings::load_from_path(&path).expect("load");
		assert_eq!(settings.transition(), Duration::from_millis(250));
		assert_eq!(settings.gesture.swipe_distance, 80.0);
		assert_eq!(settings.gesture.jitter, 15.0);
		assert!(settings.autoplay);
		assert_eq!(settings.auto_advance(), Duration::from_secs(5));
	}

	#[test]
	fn auto_advance_clamped() {
		let fast = Settings {
			auto_advance_secs: 0,
			..Settings::default()
		};
		let slow = Settings {
			auto_advance_secs: 3600,
			..Settings::default()
		};
		assert_eq!(fast.auto_advance(), MIN_INTERVAL);
		assert_eq!(slow.auto_advance(), MAX_INTERVAL);
	}

	#[test]
	fn malformed_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join(SETTINGS_FILE);
		std::fs::write(&path, "autoplay = \"sometimes\"").expect("write");
		assert!(Settings::load_from_path(&path).is_err());
	}
}
