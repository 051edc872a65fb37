use devdock_tools::{UuidGenerator, UuidVersion};
use eframe::egui;

use crate::state::SharedState;
use crate::widgets::output_field;

#[derive(Default)]
pub struct UuidTab {
    generator: UuidGenerator,
    version: UuidVersion,
    pub(super) output: String,
}

impl UuidTab {
    pub fn generate(&mut self) {
        self.output = self.generator.generate_string(self.version);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &SharedState) {
        ui.label(egui::RichText::new("Select UUID Version").strong());
        ui.horizontal(|ui| {
            for version in UuidVersion::ALL {
                ui.selectable_value(&mut self.version, version, format!("UUID {}", version.label()))
                    .on_hover_text(version.description());
            }
        });

        if self.version.is_name_based() {
            ui.horizontal(|ui| {
                ui.label("Name:");
                let mut name = self.generator.name().to_string();
                if ui.text_edit_singleline(&mut name).changed() {
                    self.generator.set_name(name);
                }
            });
        }

        ui.add_space(8.0);
        if ui.button("🔄 Generate UUID").clicked() {
            self.generate();
        }

        output_field(ui, state, &self.output, false, "Copy");
    }
}
