#![windows_subsystem = "windows"]

mod catalog;
mod contact;
mod navigator;
mod overlay;
mod playback;
mod reactor;
mod settings;
mod showcase;
mod types;
mod view;

use catalog::{Catalog, CatalogError};
use reactor::Reactor;
use settings::Settings;
use std::time::Instant;

fn load_catalog(settings: &Settings) -> Result<Catalog, CatalogError> {
	if let Some(path) = &settings.catalog {
		match Catalog::load_from_path(path) {
			Ok(catalog) => return Ok(catalog),
			Err(e) => log::warn!("{:#}. Falling back to built-in catalog", e),
		}
	}
	Catalog::builtin()
}

fn main() -> eframe::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let settings = Settings::load();
	let catalog = load_catalog(&settings).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

	let native_options = eframe::NativeOptions {
		viewport: eframe::egui::ViewportBuilder::default()
			.with_inner_size([1280.0, 800.0])
			.with_min_inner_size([640.0, 480.0]),
		..Default::default()
	};

	eframe::run_native(
		"MSJ Traders",
		native_options,
		Box::new(move |cc| {
			egui_extras::install_image_loaders(&cc.egui_ctx);
			Ok(Box::new(Reactor::new(
				settings,
				Settings::default_path(),
				catalog,
				Instant::now(),
			)))
		}),
	)
}
