//! Lazily uploaded image preview

use eframe::egui;

/// RGBA pixels uploaded to a texture the first time they are shown
///
/// Dropping the preview frees the texture.
#[derive(Default)]
pub struct ImagePreview {
    pending: Option<([usize; 2], Vec<u8>)>,
    texture: Option<egui::TextureHandle>,
    name: String,
}

impl ImagePreview {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            pending: None,
            texture: None,
            name: name.into(),
        }
    }

    /// Replace the displayed pixels
    pub fn set(&mut self, width: u32, height: u32, rgba: Vec<u8>) {
        self.texture = None;
        self.pending = Some(([width as usize, height as usize], rgba));
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.texture = None;
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none() && self.texture.is_none()
    }

    /// Show the image scaled down to fit `max_size`
    pub fn show(&mut self, ui: &mut egui::Ui, max_size: egui::Vec2) {
        if let Some((size, rgba)) = self.pending.take() {
            let image = egui::ColorImage::from_rgba_unmultiplied(size, &rgba);
            self.texture = Some(ui.ctx().load_texture(&self.name, image, egui::TextureOptions::default()));
        }

        if let Some(texture) = &self.texture {
            let sized = egui::load::SizedTexture::from_handle(texture);
            ui.add(egui::Image::from_texture(sized).max_size(max_size));
        }
    }
}
