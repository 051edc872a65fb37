use std::path::Path;

use devdock_tools::images::{decode_image, decode_image_bytes, encode_image};
use devdock_tools::{Base64Codec, DecodedImage, ToolError, ToolResult};
use eframe::egui;

use super::{report, ConvertMode};
use crate::state::SharedState;
use crate::widgets::{error_label, output_field, ImagePreview};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "ico"];

pub struct ImageTab {
    mode: ConvertMode,
    /// Base64 payload or data URL to decode
    input: String,
    /// Data URL of the last encoded image
    output: String,
    summary: Option<String>,
    decoded: Option<DecodedImage>,
    preview: ImagePreview,
    error: Option<String>,
}

impl Default for ImageTab {
    fn default() -> Self {
        Self {
            mode: ConvertMode::Encode,
            input: String::new(),
            output: String::new(),
            summary: None,
            decoded: None,
            preview: ImagePreview::new("image_tab_preview"),
            error: None,
        }
    }
}

impl ImageTab {
    /// Encode picked image bytes into a data URL and preview them
    pub fn encode(&mut self, name: &str, bytes: Vec<u8>, codec: &dyn Base64Codec) -> ToolResult<()> {
        self.reset();

        let encoded = encode_image(&bytes, codec)?;
        let image = decode_image_bytes(bytes)?;
        self.preview.set(image.width, image.height, image.rgba);
        self.summary = Some(format!("{name}: {} {}×{}", encoded.mime, encoded.width, encoded.height));
        self.output = encoded.data_url();
        Ok(())
    }

    /// Decode the Base64 input into an image
    pub fn decode(&mut self, codec: &dyn Base64Codec) -> ToolResult<()> {
        self.reset();

        let image = decode_image(&self.input, codec)?;
        self.preview.set(image.width, image.height, image.rgba.clone());
        self.summary = Some(format!("{} {}×{}", image.mime(), image.width, image.height));
        self.decoded = Some(image);
        Ok(())
    }

    pub fn decoded(&self) -> Option<&DecodedImage> {
        self.decoded.as_ref()
    }

    pub fn release_preview(&mut self) {
        self.preview.clear();
        self.decoded = None;
        self.summary = None;
    }

    fn reset(&mut self) {
        self.release_preview();
        self.output.clear();
    }

    fn pick_and_encode(&mut self, codec: &dyn Base64Codec) -> ToolResult<()> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return Ok(());
        };

        let bytes = std::fs::read(&path)?;
        self.encode(&display_name(&path), bytes, codec)
    }

    fn save_decoded(&self) -> ToolResult<Option<String>> {
        let Some(image) = &self.decoded else {
            return Err(ToolError::EmptyInput);
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("decoded.{}", image.extension()))
            .save_file()
        else {
            return Ok(None);
        };

        std::fs::write(&path, &image.bytes)?;
        Ok(Some(display_name(&path)))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &SharedState, codec: &dyn Base64Codec) {
        let previous = self.mode;
        self.mode.selector(ui);
        if self.mode != previous {
            self.reset();
            self.error = None;
        }

        match self.mode {
            ConvertMode::Encode => {
                if ui.button("📂 Choose Image…").clicked() {
                    let result = self.pick_and_encode(codec);
                    report(state, &mut self.error, result, "Invalid image file");
                }
            }
            ConvertMode::Decode => {
                ui.add(
                    egui::TextEdit::multiline(&mut self.input)
                        .hint_text("Paste a data URL or Base64 image")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    if ui.button("⇄ Decode").clicked() {
                        let result = self.decode(codec);
                        report(state, &mut self.error, result, "Invalid input for conversion");
                    }
                    if self.decoded.is_some() && ui.button("💾 Save Image…").clicked() {
                        match self.save_decoded() {
                            Ok(Some(name)) => state.write().success(format!("Saved {name}")),
                            Ok(None) => {}
                            Err(e) => state.write().error(format!("Error saving image: {e}")),
                        }
                    }
                });
            }
        }

        error_label(ui, self.error.as_deref());

        if let Some(summary) = &self.summary {
            ui.label(egui::RichText::new(summary).weak());
        }
        if !self.preview.is_empty() {
            self.preview.show(ui, egui::vec2(ui.available_width(), 320.0));
        }

        output_field(ui, state, &self.output, true, "Copy Data URL");
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdock_tools::svg::svg_to_png;
    use devdock_tools::StandardBase64;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3"><rect width="4" height="3" fill="red"/></svg>"#;

    #[test]
    fn test_encode_then_decode_image() {
        let png = svg_to_png(SQUARE.as_bytes(), 1.0).unwrap();

        let mut tab = ImageTab::default();
        tab.encode("square.png", png.png.clone(), &StandardBase64).unwrap();
        assert!(tab.output.starts_with("data:image/png;base64,"));
        assert!(!tab.preview.is_empty());

        tab.input = tab.output.clone();
        tab.decode(&StandardBase64).unwrap();
        let decoded = tab.decoded().unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 3));
        assert_eq!(decoded.bytes, png.png);
    }

    #[test]
    fn test_decode_rejects_non_image() {
        let mut tab = ImageTab {
            input: "aGVsbG8=".into(),
            ..Default::default()
        };
        assert!(tab.decode(&StandardBase64).is_err());
        assert!(tab.decoded().is_none());
        assert!(tab.preview.is_empty());
    }

    #[test]
    fn test_release_preview() {
        let png = svg_to_png(SQUARE.as_bytes(), 2.0).unwrap();
        let mut tab = ImageTab::default();
        tab.encode("square.png", png.png, &StandardBase64).unwrap();

        tab.release_preview();
        assert!(tab.preview.is_empty());
        assert!(!tab.output.is_empty());
    }
}
