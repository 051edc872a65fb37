use devdock_tools::{Base64Codec, ToolResult};
use eframe::egui;

use super::{report, ConvertMode};
use crate::state::SharedState;
use crate::widgets::{error_label, output_field};

#[derive(Default)]
pub struct Base64Tab {
    mode: ConvertMode,
    input: String,
    output: String,
    error: Option<String>,
}

impl Base64Tab {
    /// Convert the input in the current mode; a failure clears the output
    pub fn convert(&mut self, codec: &dyn Base64Codec) -> ToolResult<()> {
        let result = match self.mode {
            ConvertMode::Encode => Ok(codec.encode(&self.input)),
            ConvertMode::Decode => codec.decode(&self.input),
        };

        match result {
            Ok(output) => {
                self.output = output;
                Ok(())
            }
            Err(e) => {
                self.output.clear();
                Err(e)
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &SharedState, codec: &dyn Base64Codec) {
        self.mode.selector(ui);
        ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .hint_text("Enter text to convert")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        if ui.button("⇄ Convert").clicked() {
            let result = self.convert(codec);
            report(state, &mut self.error, result, "Invalid input for conversion");
        }

        error_label(ui, self.error.as_deref());
        output_field(ui, state, &self.output, true, "Copy Result");
    }
}
