use crate::catalog::{Catalog, DetailBody, PARTNERSHIP_HIGHLIGHTS, Service, Slide};
use crate::contact::{ContactDesk, ContactField};
use crate::overlay::{DetailOverlay, DismissReason};
use crate::reactor::{
	ContactEvent, Event, NavigatorEvent, OverlayEvent, PageEvent, PlaybackEvent, SettingsEvent,
};
use crate::showcase::Showcase;
use crate::types::{NavigatorId, Page};
use chrono::Datelike;
use eframe::egui::{self, Color32, RichText, ScrollArea};
use std::time::Instant;

pub mod carousel;
pub mod text_utils;

use carousel::PointerCapture;

const ACCENT: Color32 = Color32::from_rgb(249, 115, 22);
const MARQUEE_SPEED: f32 = 40.0;
const CONTACT_EMAIL: &str = "contact@msjtraders.com";
const INTERVAL_CHOICES: [u64; 6] = [3, 5, 8, 10, 15, 30];

const HERO_TITLE: &str = "Building the Future by Dismantling the Past";
const HERO_SUBTITLE: &str =
	"Professional demolition services with over 20 years of excellence, precision, and safety";
const ABOUT: &str = "Founded and led by *Mr. J. Mohideen*, MSJ Traders has been a pioneering \
	force in the industry for over three decades. We deliver the *best quality services* with \
	exceptional speed and efficiency, backed by *35 years of hands-on experience* and \
	high quality equipment for dismantling and demolition.";
const ABOUT_HIGHLIGHTS: [&str; 4] = [
	"Quick Project Completion",
	"Cost-Effective Solutions",
	"Advanced Equipment",
	"Superior Results",
];

pub struct ViewManager {
	pointer: PointerCapture,
	marquee_origin: Instant,
	scroll_to_clients: bool,
}

impl ViewManager {
	pub fn new() -> Self {
		Self {
			pointer: PointerCapture::default(),
			marquee_origin: Instant::now(),
			scroll_to_clients: false,
		}
	}

	/// Main render function of the whole thing
	#[allow(clippy::too_many_arguments)]
	pub fn render(
		&mut self,
		ctx: &egui::Context,
		now: Instant,
		page: Page,
		catalog: &Catalog,
		showcase: &Showcase,
		overlay: &DetailOverlay,
		contact: &ContactDesk,
	) -> Vec<Event> {
		let mut events = Vec::new();
		let modal_active =
			overlay.is_open() || contact.is_open() || contact.acknowledgement().is_some();

		if modal_active {
			self.pointer.cancel(&mut events);
			Self::handle_modal_keys(ctx, overlay, contact, &mut events);
		} else {
			let is_typing = ctx.memory(|m| m.focused().is_some());
			if !is_typing && page == Page::Home {
				Self::handle_keyboard_input(ctx, &mut events);
			}
		}

		self.render_top_panel(ctx, page, showcase.interval().as_secs(), &mut events, !modal_active);
		self.render_central_panel(
			ctx,
			now,
			page,
			catalog,
			showcase,
			&mut events,
			!modal_active,
		);

		// Modals on top of everything
		Self::render_detail_modal(ctx, catalog, showcase, overlay, &mut events);
		Self::render_contact_modal(ctx, contact, &mut events);
		Self::render_acknowledgement(ctx, contact, &mut events);

		events
	}

	fn handle_keyboard_input(ctx: &egui::Context, events: &mut Vec<Event>) {
		let (left, right, c) = ctx.input(|i| {
			(
				i.key_pressed(egui::Key::ArrowLeft),
				i.key_pressed(egui::Key::ArrowRight),
				i.key_pressed(egui::Key::C),
			)
		});

		let id = NavigatorId::Clients;
		if left {
			events.push(Event::Navigator {
				id,
				event: NavigatorEvent::Retreat,
			});
		}
		if right {
			events.push(Event::Navigator {
				id,
				event: NavigatorEvent::Advance,
			});
		}
		if c {
			events.push(Event::Playback {
				id,
				event: PlaybackEvent::Toggle,
			});
		}
	}

	fn handle_modal_keys(
		ctx: &egui::Context,
		overlay: &DetailOverlay,
		contact: &ContactDesk,
		events: &mut Vec<Event>,
	) {
		if !ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
			return;
		}
		if overlay.is_open() {
			events.push(Event::Overlay(OverlayEvent::Close(DismissReason::Escape)));
		} else if contact.acknowledgement().is_some() {
			events.push(Event::Contact(ContactEvent::Acknowledge));
		} else if contact.is_open() {
			events.push(Event::Contact(ContactEvent::Close));
		}
	}

	fn render_top_panel(
		&mut self,
		ctx: &egui::Context,
		page: Page,
		interval_secs: u64,
		events: &mut Vec<Event>,
		enabled: bool,
	) {
		egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
			if !enabled {
				ui.disable();
			}
			ui.horizontal(|ui| {
				ui.label(RichText::new("MSJ TRADERS").strong().size(20.0).color(ACCENT));
				ui.separator();
				for (target, label) in [(Page::Home, "Home"), (Page::Services, "Services")] {
					if ui.selectable_label(page == target, label).clicked() {
						events.push(Event::Page(PageEvent::Show(target)));
					}
				}
				if ui.button("Contact").clicked() {
					events.push(Event::Contact(ContactEvent::Open));
				}

				ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
					egui::ComboBox::from_id_salt("auto_advance")
						.selected_text(format!("{} s", interval_secs))
						.show_ui(ui, |ui| {
							for secs in INTERVAL_CHOICES {
								let selected = secs == interval_secs;
								if ui.selectable_label(selected, format!("{} s", secs)).clicked()
									&& !selected
								{
									events.push(Event::Settings(SettingsEvent::AutoAdvance { secs }));
								}
							}
						});
					ui.label("Slide every");
				});
			});
		});
	}

	#[allow(clippy::too_many_arguments)]
	fn render_central_panel(
		&mut self,
		ctx: &egui::Context,
		now: Instant,
		page: Page,
		catalog: &Catalog,
		showcase: &Showcase,
		events: &mut Vec<Event>,
		enabled: bool,
	) {
		egui::CentralPanel::default().show(ctx, |ui| {
			if !enabled {
				ui.disable();
			}
			// Horizontal drags belong to the carousels
			ScrollArea::vertical()
				.drag_to_scroll(false)
				.auto_shrink([false, false])
				.show(ui, |ui| match page {
					Page::Home => self.render_home(ui, now, catalog, showcase, events, enabled),
					Page::Services => Self::render_services(ui, catalog),
				});
		});
	}

	fn render_home(
		&mut self,
		ui: &mut egui::Ui,
		now: Instant,
		catalog: &Catalog,
		showcase: &Showcase,
		events: &mut Vec<Event>,
		enabled: bool,
	) {
		ui.add_space(24.0);
		ui.vertical_centered(|ui| {
			ui.label(RichText::new(HERO_TITLE).size(32.0).strong());
			ui.label(RichText::new(HERO_SUBTITLE).size(16.0).color(Color32::LIGHT_GRAY));
			ui.add_space(8.0);
			if ui.button(RichText::new("View Our Clients").color(ACCENT)).clicked() {
				self.scroll_to_clients = true;
			}
		});

		ui.add_space(32.0);
		ui.heading("About Us");
		text_utils::render_rich_text(ui, ABOUT, 15.0, ACCENT);
		ui.horizontal_wrapped(|ui| {
			for highlight in ABOUT_HIGHLIGHTS {
				ui.label(RichText::new(format!("✔ {}", highlight)).color(ACCENT));
				ui.add_space(12.0);
			}
		});

		ui.add_space(32.0);
		let heading = ui.heading("Our Clients");
		if self.scroll_to_clients {
			heading.scroll_to_me(Some(egui::Align::TOP));
			self.scroll_to_clients = false;
		}
		ui.label("Tap a slide for details, swipe or use the arrow keys to browse.");
		if let Some(clients) = showcase.get(NavigatorId::Clients) {
			carousel::show(ui, clients, now, &mut self.pointer, enabled, events);
		}

		ui.add_space(16.0);
		ui.label(RichText::new("Other Valued Clients").strong());
		self.render_marquee(ui, now, &catalog.other_clients);

		ui.add_space(32.0);
		ui.heading("Our Work");
		if let Some(work) = showcase.get(NavigatorId::Work) {
			carousel::show(ui, work, now, &mut self.pointer, enabled, events);
		}

		ui.add_space(32.0);
		egui::Frame::none()
			.fill(Color32::from_gray(32))
			.inner_margin(16.0)
			.rounding(8.0)
			.show(ui, |ui| {
				ui.set_width(ui.available_width());
				ui.heading("Get In Touch");
				ui.label(format!("Email us at {} or send a message below.", CONTACT_EMAIL));
				ui.add_space(8.0);
				if ui.button("Send us a message").clicked() {
					events.push(Event::Contact(ContactEvent::Open));
				}
			});
		ui.add_space(24.0);
	}

	fn render_marquee(&self, ui: &mut egui::Ui, now: Instant, names: &[String]) {
		if names.is_empty() {
			return;
		}
		let (rect, _) =
			ui.allocate_exact_size(egui::vec2(ui.available_width(), 28.0), egui::Sense::hover());
		let painter = ui.painter_at(rect);
		let text = format!("{}   •   ", names.join("   •   "));
		let galley = painter.layout_no_wrap(text, egui::FontId::proportional(16.0), Color32::LIGHT_GRAY);
		let span = galley.size().x;
		if span <= 0.0 {
			return;
		}

		let elapsed = now.saturating_duration_since(self.marquee_origin).as_secs_f32();
		let y = rect.center().y - galley.size().y / 2.0;
		let mut x = rect.left() - (elapsed * MARQUEE_SPEED) % span;
		while x < rect.right() {
			painter.galley(egui::pos2(x, y), galley.clone(), Color32::LIGHT_GRAY);
			x += span;
		}
		ui.ctx().request_repaint();
	}

	fn render_services(ui: &mut egui::Ui, catalog: &Catalog) {
		ui.add_space(24.0);
		ui.vertical_centered(|ui| {
			ui.label(RichText::new("Our Services").size(32.0).strong());
			ui.label("Comprehensive demolition and dismantling solutions");
		});

		ui.add_space(16.0);
		ui.horizontal_wrapped(|ui| {
			for stat in &catalog.stats {
				ui.vertical(|ui| {
					ui.label(RichText::new(&stat.number).size(26.0).strong().color(ACCENT));
					ui.label(&stat.label);
				});
				ui.add_space(32.0);
			}
		});

		ui.add_space(24.0);
		ui.heading("Core Services");
		for service in &catalog.core_services {
			Self::render_service(ui, service);
		}

		ui.add_space(24.0);
		ui.heading("Additional Services");
		for service in &catalog.additional_services {
			Self::render_service(ui, service);
		}
		ui.add_space(24.0);
	}

	fn render_service(ui: &mut egui::Ui, service: &Service) {
		egui::Frame::none()
			.fill(Color32::from_gray(32))
			.inner_margin(12.0)
			.rounding(6.0)
			.show(ui, |ui| {
				ui.set_width(ui.available_width());
				ui.label(RichText::new(&service.title).size(18.0).strong());
				ui.label(&service.description);
				for feature in &service.features {
					ui.label(RichText::new(format!("• {}", feature)).color(Color32::LIGHT_GRAY));
				}
			});
		ui.add_space(8.0);
	}

	fn paint_backdrop(ctx: &egui::Context, id: &str) {
		let screen_rect = ctx.screen_rect();
		egui::Area::new(egui::Id::new(id))
			.fixed_pos(screen_rect.min)
			.order(egui::Order::Foreground)
			.show(ctx, |ui| {
				ui.painter().rect_filled(
					screen_rect,
					0.0,
					Color32::from_rgba_unmultiplied(0, 0, 0, 180),
				);
			});
	}

	fn modal_window(id: &str) -> egui::Window<'static> {
		egui::Window::new(id.to_owned())
			.title_bar(false)
			.resizable(false)
			.collapsible(false)
			.anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
			.order(egui::Order::Foreground)
	}

	fn render_detail_modal(
		ctx: &egui::Context,
		catalog: &Catalog,
		showcase: &Showcase,
		overlay: &DetailOverlay,
		events: &mut Vec<Event>,
	) {
		let Some(selection) = overlay.selected() else {
			return;
		};
		let Some(slide) = showcase
			.get(selection.navigator)
			.and_then(|c| c.navigator.slides().get(selection.index))
		else {
			return;
		};

		Self::paint_backdrop(ctx, "detail_backdrop");
		let window = Self::modal_window("detail_modal").show(ctx, |ui| {
			ui.set_width(480.0);
			ui.horizontal(|ui| {
				ui.heading(&slide.title);
				ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
					if ui.button("✕").clicked() {
						events.push(Event::Overlay(OverlayEvent::Close(
							DismissReason::CloseButton,
						)));
					}
				});
			});
			ui.separator();
			Self::render_detail_body(ui, catalog, slide);
		});

		// A press outside the window content dismisses it
		if let Some(inner) = window {
			let content = inner.response.rect;
			let outside = ctx.input(|i| {
				i.pointer.any_pressed()
					&& i.pointer.interact_pos().is_some_and(|pos| !content.contains(pos))
			});
			if outside {
				events.push(Event::Overlay(OverlayEvent::Close(DismissReason::Backdrop)));
			}
		}
	}

	fn render_detail_body(ui: &mut egui::Ui, catalog: &Catalog, slide: &Slide) {
		let accent = carousel::accent_color(slide);
		match catalog.detail(slide) {
			Some(DetailBody::Client(profile)) => {
				ui.label(RichText::new(&profile.specialization).color(accent).strong());
				ui.label(&profile.description);
				ui.add_space(8.0);
				egui::Grid::new("client_facts").num_columns(2).show(ui, |ui| {
					ui.label("Location");
					ui.label(&profile.location);
					ui.end_row();
					ui.label("Partner since");
					ui.label(profile.since.to_string());
					ui.end_row();
					ui.label("Years of partnership");
					ui.label(profile.years_partnered(chrono::Local::now().year()).to_string());
					ui.end_row();
				});
				ui.add_space(8.0);
				ui.label(RichText::new("Key Projects").strong());
				for project in &profile.projects {
					ui.label(format!("• {}", project));
				}
				ui.add_space(8.0);
				ui.label(RichText::new("Partnership Highlights").strong());
				for highlight in PARTNERSHIP_HIGHLIGHTS {
					ui.label(RichText::new(format!("✔ {}", highlight)).color(accent));
				}
			}
			Some(DetailBody::Project(project)) => {
				ui.label(&slide.description);
				ui.add_space(8.0);
				egui::Grid::new("project_facts").num_columns(2).show(ui, |ui| {
					ui.label("Location");
					ui.label(&project.location);
					ui.end_row();
					if let Some(year) = project.completed {
						ui.label("Completed");
						ui.label(year.to_string());
						ui.end_row();
					}
				});
				if !project.scope.is_empty() {
					ui.add_space(8.0);
					ui.label(RichText::new("Scope of Work").strong());
					for item in &project.scope {
						ui.label(format!("• {}", item));
					}
				}
			}
			None => {
				ui.label(&slide.description);
			}
		}
	}

	fn render_contact_modal(ctx: &egui::Context, contact: &ContactDesk, events: &mut Vec<Event>) {
		if !contact.is_open() {
			return;
		}

		Self::paint_backdrop(ctx, "contact_backdrop");
		Self::modal_window("contact_modal").show(ctx, |ui| {
			ui.set_width(420.0);
			ui.heading("Send Us a Message");
			ui.add_space(8.0);

			for field in [
				ContactField::Name,
				ContactField::Email,
				ContactField::Phone,
				ContactField::Message,
			] {
				ui.label(field.label());
				let mut value = contact.form().field(field).to_owned();
				let edit = if field == ContactField::Message {
					egui::TextEdit::multiline(&mut value).desired_rows(4)
				} else {
					egui::TextEdit::singleline(&mut value)
				};
				if ui.add(edit.desired_width(f32::INFINITY)).changed() {
					events.push(Event::Contact(ContactEvent::Edit { field, value }));
				}
			}

			if let Some(error) = contact.error() {
				ui.add_space(4.0);
				ui.label(RichText::new(error.to_string()).color(Color32::RED));
			}

			ui.add_space(10.0);
			ui.horizontal(|ui| {
				if ui.button("   Cancel   ").clicked() {
					events.push(Event::Contact(ContactEvent::Close));
				}
				ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
					if ui.button(RichText::new("   Send   ").color(ACCENT)).clicked() {
						events.push(Event::Contact(ContactEvent::Submit));
					}
				});
			});
		});
	}

	fn render_acknowledgement(ctx: &egui::Context, contact: &ContactDesk, events: &mut Vec<Event>) {
		let Some(text) = contact.acknowledgement() else {
			return;
		};

		Self::paint_backdrop(ctx, "acknowledgement_backdrop");
		Self::modal_window("acknowledgement_modal").show(ctx, |ui| {
			ui.set_width(360.0);
			ui.vertical_centered(|ui| {
				ui.add_space(10.0);
				ui.label(text);
				ui.add_space(10.0);
				if ui.button("   OK   ").clicked() {
					events.push(Event::Contact(ContactEvent::Acknowledge));
				}
			});
		});
	}
}

impl Default for ViewManager {
	fn default() -> Self {
		Self::new()
	}
}
