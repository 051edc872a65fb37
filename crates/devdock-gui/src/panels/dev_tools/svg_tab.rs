use std::path::PathBuf;

use devdock_tools::images::decode_image_bytes;
use devdock_tools::svg::svg_to_png;
use devdock_tools::{RenderedPng, ToolError, ToolResult};
use eframe::egui;

use super::report;
use crate::state::SharedState;
use crate::widgets::{error_label, ImagePreview};

pub struct SvgTab {
    source: String,
    source_path: Option<PathBuf>,
    scale: f32,
    rendered: Option<RenderedPng>,
    preview: ImagePreview,
    error: Option<String>,
}

impl Default for SvgTab {
    fn default() -> Self {
        Self {
            source: String::new(),
            source_path: None,
            scale: 1.0,
            rendered: None,
            preview: ImagePreview::new("svg_tab_preview"),
            error: None,
        }
    }
}

impl SvgTab {
    /// Rasterize the SVG source at the current scale
    pub fn render(&mut self) -> ToolResult<()> {
        self.release_preview();

        let png = svg_to_png(self.source.as_bytes(), self.scale)?;
        let image = decode_image_bytes(png.png.clone())?;
        self.preview.set(image.width, image.height, image.rgba);
        self.rendered = Some(png);
        Ok(())
    }

    pub fn rendered(&self) -> Option<&RenderedPng> {
        self.rendered.as_ref()
    }

    pub fn release_preview(&mut self) {
        self.preview.clear();
        self.rendered = None;
    }

    fn load_file(&mut self) -> ToolResult<()> {
        let Some(path) = rfd::FileDialog::new().add_filter("SVG", &["svg"]).pick_file() else {
            return Ok(());
        };

        self.source = std::fs::read_to_string(&path)?;
        self.source_path = Some(path);
        self.render()
    }

    fn save_png(&self) -> ToolResult<Option<PathBuf>> {
        let Some(rendered) = &self.rendered else {
            return Err(ToolError::EmptyInput);
        };

        let file_name = self
            .source_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|stem| format!("{}.png", stem.to_string_lossy()))
            .unwrap_or_else(|| "image.png".to_string());

        let Some(path) = rfd::FileDialog::new().set_file_name(file_name).save_file() else {
            return Ok(None);
        };

        std::fs::write(&path, &rendered.png)?;
        Ok(Some(path))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &SharedState) {
        ui.horizontal(|ui| {
            if ui.button("📂 Load SVG…").clicked() {
                let result = self.load_file();
                report(state, &mut self.error, result, "Invalid SVG file");
            }
            ui.label("Scale:");
            ui.add(
                egui::DragValue::new(&mut self.scale)
                    .speed(0.1)
                    .range(0.1..=16.0)
                    .suffix("×"),
            );
        });

        ui.add(
            egui::TextEdit::multiline(&mut self.source)
                .hint_text("Paste SVG markup")
                .code_editor()
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            if ui.button("🖼 Convert to PNG").clicked() {
                let result = self.render();
                report(state, &mut self.error, result, "Invalid SVG for conversion");
            }
            if self.rendered.is_some() && ui.button("💾 Save PNG…").clicked() {
                match self.save_png() {
                    Ok(Some(path)) => state.write().success(format!("Saved {}", path.display())),
                    Ok(None) => {}
                    Err(e) => state.write().error(format!("Error saving PNG: {e}")),
                }
            }
        });

        error_label(ui, self.error.as_deref());

        if let Some(rendered) = &self.rendered {
            ui.label(egui::RichText::new(format!("PNG {}×{}", rendered.width, rendered.height)).weak());
        }
        if !self.preview.is_empty() {
            self.preview.show(ui, egui::vec2(ui.available_width(), 320.0));
        }
    }
}
