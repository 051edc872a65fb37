use devdock_tools::{DigestProvider, HashAlgorithm, ToolResult};
use eframe::egui;

use super::report;
use crate::state::SharedState;
use crate::widgets::{error_label, output_field};

pub struct HashTab {
    algorithm: HashAlgorithm,
    input: String,
    output: String,
    error: Option<String>,
}

impl Default for HashTab {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Md5,
            input: String::new(),
            output: String::new(),
            error: None,
        }
    }
}

impl HashTab {
    pub fn compute(&mut self, digest: &dyn DigestProvider) -> ToolResult<()> {
        self.output.clear();
        self.output = digest.digest_text(self.algorithm, &self.input)?;
        Ok(())
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &SharedState, digest: &dyn DigestProvider) {
        egui::ComboBox::from_id_salt("hash_algorithm")
            .selected_text(self.algorithm.name())
            .width(200.0)
            .show_ui(ui, |ui| {
                for algorithm in HashAlgorithm::ALL {
                    ui.selectable_value(&mut self.algorithm, algorithm, algorithm.name());
                }
            });

        ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .hint_text("Enter text to hash")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        if ui.button("Generate Hash").clicked() {
            let result = self.compute(digest);
            report(state, &mut self.error, result, "Error generating hash");
        }

        error_label(ui, self.error.as_deref());
        output_field(ui, state, &self.output, false, "Copy Hash");
    }
}
