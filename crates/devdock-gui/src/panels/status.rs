//! Status bar panel

use eframe::egui;

use crate::state::{Severity, SharedState};

/// Status bar panel
pub struct StatusPanel {
    state: SharedState,
}

impl StatusPanel {
    /// Create new status panel
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Show status bar UI
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let state = self.state.read();
            let status = &state.status;

            let color = match status.severity {
                Severity::Info => ui.visuals().text_color(),
                Severity::Success => egui::Color32::from_rgb(80, 200, 120),
                Severity::Warning => egui::Color32::from_rgb(255, 200, 0),
                Severity::Error => egui::Color32::from_rgb(255, 80, 80),
            };
            ui.label(egui::RichText::new(&status.timestamp).weak());
            ui.colored_label(color, &status.text);

            // Panels skipped during load
            if !state.load_failures.is_empty() {
                ui.separator();
                let summary = format!("⚠ {} panel(s) failed to load", state.load_failures.len());
                let details = state
                    .load_failures
                    .iter()
                    .map(|(id, reason)| format!("{id}: {reason}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                ui.colored_label(egui::Color32::from_rgb(255, 200, 0), summary)
                    .on_hover_text(details);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format!("v{}", devdock_core::VERSION)).weak());
            });
        });
    }
}
