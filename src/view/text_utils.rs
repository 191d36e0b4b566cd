use eframe::egui;

/// Split `text` on `*` markers into (span, emphasised) pairs
pub fn spans(text: &str) -> Vec<(&str, bool)> {
	text.split('*')
		.enumerate()
		.filter(|(_, span)| !span.is_empty())
		.map(|(i, span)| (span, i % 2 == 1))
		.collect()
}

/// Wrapped paragraph where `*text*` is drawn bold in `accent`
pub fn render_rich_text(ui: &mut egui::Ui, text: &str, size: f32, accent: egui::Color32) {
	let mut job = egui::text::LayoutJob::default();
	job.wrap = egui::text::TextWrapping {
		max_width: ui.available_width(),
		..Default::default()
	};
	for (span, emphasised) in spans(text) {
		let format = if emphasised {
			egui::TextFormat {
				font_id: egui::FontId::proportional(size),
				color: accent,
				..Default::default()
			}
		} else {
			egui::TextFormat {
				font_id: egui::FontId::proportional(size),
				color: egui::Color32::LIGHT_GRAY,
				..Default::default()
			}
		};
		job.append(span, 0.0, format);
	}
	ui.label(job);
}
