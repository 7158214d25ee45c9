//! Main application state and UI coordination

use eframe::egui;

use crate::api::{DocsClient, PendingRequest};
use crate::core::config::AppConfig;
use crate::core::types::{ApiError, DocType, DocumentationRequest, DocumentationResponse, StyleGuide};
use crate::ui::{output::OutputPanel, request::RequestPanel};

/// Submit-flow state
///
/// `Submitting` owns the pending request, so at most one request is in
/// flight and a stale error never coexists with a loading state.
pub enum SubmitState {
    Idle,
    Submitting(PendingRequest),
    Failed(String),
}

/// Main application state
pub struct DocAssistApp {
    /// Code or content to document
    pub input: String,
    /// Selected documentation type
    pub doc_type: DocType,
    /// Selected style guide
    pub style_guide: StyleGuide,
    /// Last successfully generated documentation, kept visible across
    /// later failures
    pub documentation: Option<String>,
    /// Submit-flow state
    pub state: SubmitState,
    /// API client
    pub client: DocsClient,
    /// Application configuration
    pub config: AppConfig,
    /// Whether the settings window is open
    pub settings_open: bool,
    /// Base URL being edited in the settings window
    pub settings_base_url: String,
    /// Commonmark cache for the rendered output view
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl DocAssistApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();
        let client = DocsClient::new(config.base_url.clone())?;

        Ok(Self {
            input: String::new(),
            doc_type: config.doc_type,
            style_guide: config.style_guide,
            documentation: None,
            state: SubmitState::Idle,
            settings_open: false,
            settings_base_url: config.base_url.clone(),
            client,
            config,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        })
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmitState::Submitting(_))
    }

    /// Error message to display, if the last submit failed
    pub fn error_message(&self) -> Option<&str> {
        match self.state {
            SubmitState::Failed(ref message) => Some(message),
            _ => None,
        }
    }

    /// Start a generation request for the current form values.
    ///
    /// Entering `Submitting` replaces any previous `Failed` state; the
    /// last documentation stays visible until a new response overwrites it.
    pub fn submit(&mut self) {
        if self.is_loading() {
            return;
        }
        let payload =
            DocumentationRequest::new(self.input.clone(), self.doc_type, self.style_guide);
        tracing::info!(
            "Requesting {} documentation ({} style)",
            payload.doc_type.label(),
            payload.style_guide.label()
        );
        self.state = SubmitState::Submitting(self.client.spawn_generate(payload));

        // Remember the selections for the next session
        self.config.doc_type = self.doc_type;
        self.config.style_guide = self.style_guide;
        let _ = self.config.save();
    }

    /// Record the outcome of a settled request
    fn settle(&mut self, result: Result<DocumentationResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.documentation = Some(response.documentation);
                self.state = SubmitState::Idle;
            }
            Err(err) => {
                self.state = SubmitState::Failed(err.message);
            }
        }
    }

    /// Poll the in-flight request, if any, and settle it when done
    fn poll_pending(&mut self) {
        let result = match self.state {
            SubmitState::Submitting(ref pending) => pending.try_take(),
            _ => None,
        };
        if let Some(result) = result {
            self.settle(result);
        }
    }

    /// Apply an edited base URL from the settings window
    pub fn apply_base_url(&mut self) {
        let url = self.settings_base_url.trim().to_string();
        if url.is_empty() {
            return;
        }
        self.client.set_base_url(url.clone());
        self.config.base_url = url;
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("API Endpoint...").clicked() {
                        self.settings_base_url = self.config.base_url.clone();
                        self.settings_open = true;
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui
                        .selectable_label(self.config.ui.render_markdown, "Rendered Output")
                        .clicked()
                    {
                        self.config.ui.render_markdown = !self.config.ui.render_markdown;
                        let _ = self.config.save();
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render the settings window for the service base URL
    fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut open = self.settings_open;
        let mut apply = false;
        egui::Window::new("API Endpoint")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Base URL of the documentation service:");
                ui.text_edit_singleline(&mut self.settings_base_url);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        apply = true;
                    }
                });
            });

        if apply {
            self.apply_base_url();
            open = false;
        }
        self.settings_open = open;
    }
}

impl eframe::App for DocAssistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();

        // Keep polling without user input while a request is in flight
        if self.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::Enter) {
                self.submit();
            }
        });

        self.render_menu_bar(ctx);
        self.render_settings_window(ctx);

        // Split view: request form on left, generated output on right
        egui::CentralPanel::default().show(ctx, |ui| {
            let available_width = ui.available_width();
            ui.horizontal(|ui| {
                ui.set_min_width(available_width);

                ui.vertical(|ui| {
                    ui.set_width(available_width / 2.0 - 4.0);
                    RequestPanel::show(ui, self);
                });

                ui.separator();

                ui.vertical(|ui| {
                    ui.set_width(available_width / 2.0 - 4.0);
                    OutputPanel::show(ui, self);
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_app() -> DocAssistApp {
        DocAssistApp {
            input: String::new(),
            doc_type: DocType::Function,
            style_guide: StyleGuide::Google,
            documentation: None,
            state: SubmitState::Idle,
            client: DocsClient::new("http://127.0.0.1:1").unwrap(),
            config: AppConfig::default(),
            settings_open: false,
            settings_base_url: String::new(),
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        }
    }

    fn success(text: &str) -> Result<DocumentationResponse, ApiError> {
        Ok(DocumentationResponse {
            documentation: text.to_string(),
            metadata: HashMap::new(),
        })
    }

    #[test]
    fn test_success_stores_documentation_and_clears_error() {
        let mut app = test_app();
        app.state = SubmitState::Failed("old error".to_string());

        app.state = SubmitState::Submitting(PendingRequest::settled(success("X")));
        assert!(app.is_loading());
        assert_eq!(app.error_message(), None);

        app.poll_pending();
        assert!(!app.is_loading());
        assert_eq!(app.documentation.as_deref(), Some("X"));
        assert_eq!(app.error_message(), None);
    }

    #[test]
    fn test_failure_keeps_previous_documentation() {
        let mut app = test_app();
        app.documentation = Some("earlier docs".to_string());

        app.state = SubmitState::Submitting(PendingRequest::settled(Err(ApiError::new(
            "bad input",
            Some(422),
        ))));
        app.poll_pending();

        assert!(!app.is_loading());
        assert_eq!(app.error_message(), Some("bad input"));
        assert_eq!(app.documentation.as_deref(), Some("earlier docs"));
    }

    #[test]
    fn test_generic_fallback_message_is_displayed() {
        let mut app = test_app();
        app.state = SubmitState::Submitting(PendingRequest::settled(Err(ApiError::generic(
            Some(500),
        ))));
        app.poll_pending();
        assert_eq!(app.error_message(), Some(ApiError::GENERIC_MESSAGE));
    }

    #[test]
    fn test_loading_only_while_submitting() {
        let mut app = test_app();
        assert!(!app.is_loading());

        app.state = SubmitState::Submitting(PendingRequest::settled(success("docs")));
        assert!(app.is_loading());

        app.poll_pending();
        assert!(!app.is_loading());

        app.state = SubmitState::Failed("boom".to_string());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_submit_is_ignored_while_loading() {
        let mut app = test_app();
        app.state = SubmitState::Submitting(PendingRequest::settled(success("first")));

        // A second submit must not replace the pending request
        app.submit();
        app.poll_pending();
        assert_eq!(app.documentation.as_deref(), Some("first"));
    }

    #[test]
    fn test_unsettled_request_stays_loading() {
        let mut app = test_app();
        // Connection refused takes a moment; immediately after spawning
        // the request must still be in flight
        let payload = DocumentationRequest::new(
            "x".to_string(),
            DocType::Function,
            StyleGuide::Google,
        );
        app.state = SubmitState::Submitting(app.client.spawn_generate(payload));
        assert!(app.is_loading());
    }
}
