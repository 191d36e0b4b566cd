use crate::catalog::Slide;
use crate::reactor::{Event, NavigatorEvent, PlaybackEvent};
use crate::showcase::Carousel;
use crate::types::{MediaKind, NavDirection, NavigatorId};
use eframe::egui::{self, Color32, FontId, Rect, Sense, Vec2, pos2, vec2};
use std::time::Instant;

const MAX_SLIDE_HEIGHT: f32 = 420.0;
const DOT_SIZE: f32 = 10.0;
const CAPTION_HEIGHT: f32 = 72.0;
const ROUNDING: f32 = 8.0;

/// Remembers which carousel received the primary press, so moves and the
/// release are delivered to it even after the pointer leaves its surface.
/// Touches arrive here as emulated pointer events.
#[derive(Default)]
pub struct PointerCapture {
	owner: Option<NavigatorId>,
}

impl PointerCapture {
	/// A press only starts a gesture when egui's hit test put it on `surface`.
	/// Whatever is clipped away or drawn over the slide keeps its own clicks.
	pub fn intake(
		&mut self,
		ui: &egui::Ui,
		surface: &egui::Response,
		id: NavigatorId,
		now: Instant,
		events: &mut Vec<Event>,
	) {
		let pressed_here = surface.is_pointer_button_down_on() || surface.clicked();
		let raw = ui.input(|i| i.events.clone());
		for event in raw {
			let gesture = match event {
				egui::Event::PointerButton {
					pos,
					button: egui::PointerButton::Primary,
					pressed: true,
					..
				} if pressed_here && surface.rect.contains(pos) => {
					self.owner = Some(id);
					NavigatorEvent::TouchStart { pos, at: now }
				}
				egui::Event::PointerMoved(pos) if self.owner == Some(id) => {
					NavigatorEvent::TouchMove { pos }
				}
				egui::Event::PointerButton {
					pos,
					button: egui::PointerButton::Primary,
					pressed: false,
					..
				} if self.owner == Some(id) => {
					self.owner = None;
					NavigatorEvent::TouchEnd { pos, at: now }
				}
				egui::Event::PointerGone if self.owner == Some(id) => {
					self.owner = None;
					NavigatorEvent::TouchCancel
				}
				_ => continue,
			};
			events.push(Event::Navigator { id, event: gesture });
		}
	}

	/// Abort a gesture in progress, e.g. when a modal takes over input
	pub fn cancel(&mut self, events: &mut Vec<Event>) {
		if let Some(id) = self.owner.take() {
			events.push(Event::Navigator {
				id,
				event: NavigatorEvent::TouchCancel,
			});
		}
	}
}

pub fn show(
	ui: &mut egui::Ui,
	carousel: &Carousel,
	now: Instant,
	capture: &mut PointerCapture,
	input_enabled: bool,
	events: &mut Vec<Event>,
) {
	let navigator = &carousel.navigator;
	let id = navigator.id();
	let width = ui.available_width();
	let height = (width * 9.0 / 16.0).min(MAX_SLIDE_HEIGHT);
	let response = allocate_surface(ui, vec2(width, height));
	let surface = response.rect;
	if response.hovered() && input_enabled {
		ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
	}

	if input_enabled {
		capture.intake(ui, &response, id, now, events);
	}

	// Snap-back after release is animated here, the navigator resets instantly
	let drag = ui.ctx().animate_value_with_time(
		egui::Id::new(("carousel_drag", id.label())),
		navigator.drag_offset(),
		0.15,
	);
	let video_active = carousel
		.playback
		.media_active(navigator.current().media.kind);

	ui.scope(|ui| {
		ui.set_clip_rect(surface.intersect(ui.clip_rect()));
		match navigator.transition() {
			Some(t) => {
				let eased = ease_out_cubic(navigator.progress(now));
				let shift = match t.direction {
					NavDirection::Next => width,
					NavDirection::Prev => -width,
				};
				if let Some(outgoing) = navigator.slides().get(t.from) {
					let rect = surface.translate(vec2(drag - shift * eased, 0.0));
					paint_slide(ui, rect, outgoing, false);
				}
				let rect = surface.translate(vec2(drag + shift * (1.0 - eased), 0.0));
				paint_slide(ui, rect, navigator.current(), video_active);
				ui.ctx().request_repaint();
			}
			None => {
				let rect = surface.translate(vec2(drag, 0.0));
				paint_slide(ui, rect, navigator.current(), video_active);
			}
		}
	});
	if navigator.is_swiping() || drag != navigator.drag_offset() {
		ui.ctx().request_repaint();
	}

	ui.add_space(6.0);
	ui.horizontal(|ui| {
		if ui.button("◀").clicked() {
			events.push(Event::Navigator {
				id,
				event: NavigatorEvent::Retreat,
			});
		}

		let accent = accent_color(navigator.current());
		for index in 0..navigator.len() {
			let (dot, response) = ui.allocate_exact_size(vec2(DOT_SIZE, DOT_SIZE), Sense::click());
			let color = if index == navigator.cursor() {
				accent
			} else {
				Color32::from_gray(90)
			};
			ui.painter().circle_filled(dot.center(), DOT_SIZE * 0.5, color);
			if response.clicked() {
				events.push(Event::Navigator {
					id,
					event: NavigatorEvent::JumpTo { index },
				});
			}
		}

		if ui.button("▶").clicked() {
			events.push(Event::Navigator {
				id,
				event: NavigatorEvent::Advance,
			});
		}

		ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
			let label = if carousel.playback.is_playing() {
				"⏸ Pause"
			} else {
				"▶ Play"
			};
			let toggle = ui.button(label).on_hover_text(format!(
				"Advances every {} s",
				carousel.playback.interval().as_secs()
			));
			if toggle.clicked() {
				events.push(Event::Playback {
					id,
					event: PlaybackEvent::Toggle,
				});
			}
			ui.label(format!("{} / {}", navigator.cursor() + 1, navigator.len()));
		});
	});
}

/// The slide area senses clicks and drags so it takes part in egui's hit test
fn allocate_surface(ui: &mut egui::Ui, size: Vec2) -> egui::Response {
	ui.allocate_exact_size(size, Sense::click_and_drag()).1
}

fn paint_slide(ui: &egui::Ui, rect: Rect, slide: &Slide, video_active: bool) {
	let accent = accent_color(slide);
	let painter = ui.painter();
	painter.rect_filled(rect, ROUNDING, accent.linear_multiply(0.35));

	match &slide.media.uri {
		Some(uri) => {
			egui::Image::from_uri(uri.as_str())
				.rounding(ROUNDING)
				.paint_at(ui, rect);
		}
		None => {
			painter.text(
				rect.center() - vec2(0.0, CAPTION_HEIGHT * 0.5),
				egui::Align2::CENTER_CENTER,
				initials(&slide.title),
				FontId::proportional(rect.height() * 0.3),
				accent,
			);
		}
	}

	if slide.media.kind == MediaKind::Video {
		let badge = if video_active { "▶ VIDEO" } else { "⏸ VIDEO" };
		painter.text(
			pos2(rect.right() - 16.0, rect.top() + 16.0),
			egui::Align2::RIGHT_TOP,
			badge,
			FontId::proportional(14.0),
			Color32::WHITE,
		);
		if video_active {
			let t = (ui.input(|i| i.time) % 6.0 / 6.0) as f32;
			let bar = Rect::from_min_size(
				pos2(rect.left(), rect.bottom() - 3.0),
				vec2(rect.width() * t, 3.0),
			);
			painter.rect_filled(bar, 0.0, accent);
			ui.ctx().request_repaint();
		}
	}

	let caption = Rect::from_min_max(pos2(rect.left(), rect.bottom() - CAPTION_HEIGHT), rect.max);
	painter.rect_filled(caption, 0.0, Color32::from_black_alpha(170));
	painter.text(
		pos2(caption.left() + 16.0, caption.top() + 12.0),
		egui::Align2::LEFT_TOP,
		&slide.title,
		FontId::proportional(22.0),
		Color32::WHITE,
	);
	painter.text(
		pos2(caption.left() + 16.0, caption.bottom() - 12.0),
		egui::Align2::LEFT_BOTTOM,
		&slide.description,
		FontId::proportional(14.0),
		Color32::LIGHT_GRAY,
	);
}

pub fn accent_color(slide: &Slide) -> Color32 {
	let [r, g, b] = slide.accent;
	Color32::from_rgb(r, g, b)
}

fn initials(title: &str) -> String {
	title
		.split_whitespace()
		.filter_map(|word| word.chars().next())
		.filter(|c| c.is_alphanumeric())
		.take(3)
		.collect::<String>()
		.to_uppercase()
}

fn ease_out_cubic(t: f32) -> f32 {
	1.0 - (1.0 - t).powi(3)
}
