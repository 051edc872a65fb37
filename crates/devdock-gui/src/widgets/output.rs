//! Read-only result fields with a copy button

use eframe::egui;

use crate::state::SharedState;

/// Copy `text` to the clipboard and report it in the status bar
pub fn copy_button(ui: &mut egui::Ui, state: &SharedState, text: &str, label: &str) {
    if ui.button(format!("📋 {label}")).clicked() {
        ui.ctx().copy_text(text.to_owned());
        state.write().success("Copied to clipboard!");
    }
}

/// Read-only output with a copy button, hidden while `value` is empty
pub fn output_field(ui: &mut egui::Ui, state: &SharedState, value: &str, multiline: bool, copy_label: &str) {
    if value.is_empty() {
        return;
    }

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            let mut text = value;
            if multiline {
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
            } else {
                ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
            }
            copy_button(ui, state, value, copy_label);
        });
    });
}

/// Inline error for a panel-local failure
pub fn error_label(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.colored_label(egui::Color32::from_rgb(255, 80, 80), format!("❌ {error}"));
    }
}
