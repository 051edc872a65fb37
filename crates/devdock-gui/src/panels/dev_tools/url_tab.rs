use devdock_tools::{PercentCodec, ToolResult};
use eframe::egui;

use super::{report, ConvertMode};
use crate::state::SharedState;
use crate::widgets::{error_label, output_field};

#[derive(Default)]
pub struct UrlTab {
    mode: ConvertMode,
    input: String,
    output: String,
    error: Option<String>,
}

impl UrlTab {
    pub fn convert(&mut self, codec: &dyn PercentCodec) -> ToolResult<()> {
        let result = match self.mode {
            ConvertMode::Encode => Ok(codec.encode(&self.input)),
            ConvertMode::Decode => codec.decode(&self.input),
        };

        self.output = match result {
            Ok(output) => output,
            Err(e) => {
                self.output.clear();
                return Err(e);
            }
        };
        Ok(())
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &SharedState, codec: &dyn PercentCodec) {
        self.mode.selector(ui);
        ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .hint_text("Enter URL to encode/decode")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        if ui.button("⇄ Convert").clicked() {
            let result = self.convert(codec);
            report(state, &mut self.error, result, "Invalid URL for conversion");
        }

        error_label(ui, self.error.as_deref());
        output_field(ui, state, &self.output, true, "Copy Result");
    }
}
