//! File viewer panel
//!
//! The chosen file is copied into a [`TransientFile`] owned by the panel.
//! Images are previewed inline; office documents and PDFs are handed to
//! the injected [`DocumentViewer`]. Opening another file or leaving the
//! panel releases the previous copy.

use std::path::Path;
use std::sync::Arc;

use devdock_core::PanelLifecycle;
use devdock_tools::images::decode_image_bytes;
use devdock_tools::{DocumentFormat, DocumentViewer, TransientFile};
use eframe::egui;
use tracing::debug;

use super::Panel;
use crate::state::SharedState;
use crate::widgets::{error_label, ImagePreview};

/// The file currently on display
pub struct OpenDocument {
    pub file: TransientFile,
    pub format: DocumentFormat,
    preview: ImagePreview,
}

pub struct FileViewerPanel {
    state: SharedState,
    viewer: Arc<dyn DocumentViewer>,
    current: Option<OpenDocument>,
    error: Option<String>,
}

impl FileViewerPanel {
    pub fn new(state: SharedState, viewer: Arc<dyn DocumentViewer>) -> Self {
        Self {
            state,
            viewer,
            current: None,
            error: None,
        }
    }

    pub fn current(&self) -> Option<&OpenDocument> {
        self.current.as_ref()
    }

    /// Open `path` as `format`, replacing the current document
    ///
    /// A file whose extension does not match `format` is rejected and the
    /// current document stays open.
    pub fn open(&mut self, path: &Path, format: DocumentFormat) -> anyhow::Result<()> {
        let detected = DocumentFormat::from_path(path)?;
        if detected != format {
            anyhow::bail!("{} is a {} file, expected {}", path.display(), detected.label(), format.label());
        }

        // Release the previous copy before creating the next one
        self.current = None;

        let file = TransientFile::copy_from(path, format)?;
        let mut preview = ImagePreview::new(format!("file_viewer_{}", file.name()));

        if format.is_image() {
            let image = decode_image_bytes(file.read()?)?;
            preview.set(image.width, image.height, image.rgba);
        } else {
            self.viewer.preview(&file, format)?;
        }

        debug!(name = %file.name(), format = format.label(), "Opened document");
        self.current = Some(OpenDocument { file, format, preview });
        Ok(())
    }

    /// Re-launch the external viewer for the current document
    fn reopen(&mut self) -> anyhow::Result<()> {
        if let Some(doc) = &self.current {
            self.viewer.preview(&doc.file, doc.format)?;
        }
        Ok(())
    }

    fn upload(&mut self, format: DocumentFormat) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(format.label(), format.accepted_extensions())
            .pick_file()
        else {
            return;
        };

        match self.open(&path, format) {
            Ok(()) => {
                self.error = None;
                if let Some(doc) = &self.current {
                    self.state.write().set_status(format!("Opened {}", doc.file.name()));
                }
            }
            Err(e) => {
                self.error = Some(format!("Could not open file: {e:#}"));
                self.state.write().error(format!("Could not open {}", path.display()));
            }
        }
    }
}

impl PanelLifecycle for FileViewerPanel {
    fn on_unmount(&mut self) {
        self.current = None;
        self.error = None;
    }
}

impl Panel for FileViewerPanel {
    fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("File Viewer");
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for format in DocumentFormat::ALL {
                    if ui.button(format!("⬆ Upload {}", format.label())).clicked() {
                        self.upload(format);
                    }
                }
            });
        });

        error_label(ui, self.error.as_deref());

        let mut reopen = false;
        if let Some(doc) = &mut self.current {
            ui.add_space(12.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(format!("Selected file: {}", doc.file.name()));
                ui.label(egui::RichText::new(format!("{} · {} bytes", doc.format.label(), doc.file.len())).weak());
                ui.add_space(8.0);

                if doc.format.is_image() {
                    egui::ScrollArea::both().show(ui, |ui| {
                        let max_size = ui.available_size();
                        doc.preview.show(ui, max_size);
                    });
                } else {
                    ui.label("Opened in the system viewer.");
                    reopen = ui.button("↗ Open Again").clicked();
                }
            });
        }

        if reopen {
            if let Err(e) = self.reopen() {
                self.error = Some(format!("Could not open preview: {e:#}"));
                self.state.write().error("Could not open preview");
            }
        }
    }
}
