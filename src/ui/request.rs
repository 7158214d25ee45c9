//! Request form panel: selectors, content input, and the generate button

use eframe::egui;

use crate::app::DocAssistApp;
use crate::core::types::{DocType, StyleGuide};

/// Request form panel
pub struct RequestPanel;

impl RequestPanel {
    /// Show the request panel
    pub fn show(ui: &mut egui::Ui, app: &mut DocAssistApp) {
        ui.vertical(|ui| {
            ui.heading("Documentation Assistant");
            ui.label("Generate professional documentation for your code");
            ui.add_space(8.0);

            Self::show_selectors(ui, app);
            ui.add_space(8.0);

            // Content input
            ui.label("Input Code/Content");
            let editor_height = (ui.available_height() - 48.0).max(120.0);
            egui::ScrollArea::vertical()
                .id_salt("request_input_scroll")
                .max_height(editor_height)
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), editor_height],
                        egui::TextEdit::multiline(&mut app.input)
                            .font(egui::FontId::monospace(app.config.ui.font_size))
                            .code_editor()
                            .hint_text("Enter your code or content here..."),
                    );
                });

            ui.add_space(8.0);
            Self::show_generate_button(ui, app);
        });
    }

    /// Show the doc type and style guide selectors
    fn show_selectors(ui: &mut egui::Ui, app: &mut DocAssistApp) {
        ui.horizontal(|ui| {
            ui.label("Documentation Type");
            egui::ComboBox::from_id_salt("doc_type_selector")
                .selected_text(app.doc_type.label())
                .show_ui(ui, |ui| {
                    for doc_type in DocType::ALL {
                        ui.selectable_value(&mut app.doc_type, doc_type, doc_type.label());
                    }
                });

            ui.add_space(16.0);

            ui.label("Style Guide");
            egui::ComboBox::from_id_salt("style_guide_selector")
                .selected_text(app.style_guide.label())
                .show_ui(ui, |ui| {
                    for style_guide in StyleGuide::ALL {
                        ui.selectable_value(&mut app.style_guide, style_guide, style_guide.label());
                    }
                });
        });
    }

    /// Show the generate button, disabled while a request is in flight
    fn show_generate_button(ui: &mut egui::Ui, app: &mut DocAssistApp) {
        let loading = app.is_loading();
        ui.horizontal(|ui| {
            let button = ui.add_enabled(
                !loading,
                egui::Button::new(if loading {
                    "Generating..."
                } else {
                    "Generate Documentation"
                }),
            );
            if loading {
                ui.spinner();
            }
            if button.clicked() {
                app.submit();
            }
        });
    }
}
