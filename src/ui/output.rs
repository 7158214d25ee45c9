//! Generated documentation panel with inline error banner

use eframe::egui::{self, Color32, RichText};
use egui_commonmark::CommonMarkViewer;

use crate::app::DocAssistApp;

/// Generated documentation panel
pub struct OutputPanel;

impl OutputPanel {
    /// Show the output panel
    pub fn show(ui: &mut egui::Ui, app: &mut DocAssistApp) {
        ui.heading("Generated Documentation");
        ui.add_space(4.0);

        if let Some(message) = app.error_message().map(str::to_string) {
            Self::show_error_banner(ui, &message);
            ui.add_space(4.0);
        }

        // Get content first to avoid borrow conflicts
        let documentation = app.documentation.clone();

        egui::ScrollArea::vertical()
            .id_salt("output_scroll")
            .show(ui, |ui| {
                match documentation {
                    Some(text) if app.config.ui.render_markdown => {
                        CommonMarkViewer::new().show(ui, &mut app.commonmark_cache, &text);
                    }
                    Some(text) => {
                        ui.add(
                            egui::TextEdit::multiline(&mut text.as_str())
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    None => Self::show_empty(ui),
                }
            });
    }

    /// Show the inline error banner
    fn show_error_banner(ui: &mut egui::Ui, message: &str) {
        egui::Frame::new()
            .fill(Color32::from_rgb(69, 26, 26))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(220, 80, 80)))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).color(Color32::from_rgb(252, 180, 180)));
            });
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("Documentation will appear here");
        });
    }
}
