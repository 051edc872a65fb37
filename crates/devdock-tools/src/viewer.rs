//! Document preview
//!
//! A picked file is copied into a [`TransientFile`], a temporary file that
//! is deleted as soon as the handle is dropped. The [`DocumentViewer`]
//! renders a preview from that handle and a declared format.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{ToolError, ToolResult};

/// Formats the file viewer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Xlsx,
    Pptx,
    Pdf,
    Docx,
    Png,
    Jpeg,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 6] = [
        DocumentFormat::Xlsx,
        DocumentFormat::Pptx,
        DocumentFormat::Pdf,
        DocumentFormat::Docx,
        DocumentFormat::Png,
        DocumentFormat::Jpeg,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Xlsx => "xlsx",
            DocumentFormat::Pptx => "pptx",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Png => "png",
            DocumentFormat::Jpeg => "jpg",
        }
    }

    /// Extensions accepted in the file picker
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            DocumentFormat::Jpeg => &["jpg", "jpeg"],
            DocumentFormat::Xlsx => &["xlsx"],
            DocumentFormat::Pptx => &["pptx"],
            DocumentFormat::Pdf => &["pdf"],
            DocumentFormat::Docx => &["docx"],
            DocumentFormat::Png => &["png"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Xlsx => "XLSX",
            DocumentFormat::Pptx => "PPTX",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::Png => "PNG",
            DocumentFormat::Jpeg => "JPEG",
        }
    }

    /// Images are previewed inline instead of through the viewer
    pub fn is_image(&self) -> bool {
        matches!(self, DocumentFormat::Png | DocumentFormat::Jpeg)
    }

    pub fn from_extension(ext: &str) -> ToolResult<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.accepted_extensions().contains(&ext.as_str()))
            .ok_or(ToolError::UnsupportedDocument(ext))
    }

    pub fn from_path(path: &Path) -> ToolResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ToolError::UnsupportedDocument(path.display().to_string()))?;
        Self::from_extension(ext)
    }
}

/// Temporary copy of user supplied data, deleted on drop
pub struct TransientFile {
    file: NamedTempFile,
    name: String,
    len: u64,
}

impl TransientFile {
    /// Write `bytes` into a new temporary file named after `format`
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8], format: DocumentFormat) -> ToolResult<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("devdock-")
            .suffix(&format!(".{}", format.extension()))
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        let name = name.into();
        debug!(name = %name, path = %file.path().display(), "Created transient file");

        Ok(Self {
            file,
            name,
            len: bytes.len() as u64,
        })
    }

    /// Copy a file from disk
    pub fn copy_from(path: &Path, format: DocumentFormat) -> ToolResult<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, &bytes, format)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Name of the original file
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn read(&self) -> ToolResult<Vec<u8>> {
        Ok(std::fs::read(self.path())?)
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        debug!(name = %self.name, path = %self.file.path().display(), "Releasing transient file");
    }
}

impl std::fmt::Debug for TransientFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransientFile")
            .field("name", &self.name)
            .field("path", &self.path())
            .field("len", &self.len)
            .finish()
    }
}

/// Renders a preview of a transient file
pub trait DocumentViewer: Send + Sync {
    fn preview(&self, file: &TransientFile, format: DocumentFormat) -> ToolResult<()>;
}

/// Hands the file to the platform's default application
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl DocumentViewer for SystemViewer {
    fn preview(&self, file: &TransientFile, format: DocumentFormat) -> ToolResult<()> {
        info!(name = %file.name(), format = format.label(), "Opening document preview");
        open::that_detached(file.path()).map_err(|e| ToolError::Viewer(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension(".jpeg").unwrap(), DocumentFormat::Jpeg);
        assert_eq!(
            DocumentFormat::from_path(Path::new("/tmp/report.xlsx")).unwrap(),
            DocumentFormat::Xlsx
        );
        assert!(matches!(
            DocumentFormat::from_extension("exe"),
            Err(ToolError::UnsupportedDocument(_))
        ));
    }

    #[test]
    fn test_transient_file_is_released_on_drop() {
        let file = TransientFile::from_bytes("report.pdf", b"%PDF-1.4", DocumentFormat::Pdf).unwrap();
        let path = file.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));
        assert_eq!(file.read().unwrap(), b"%PDF-1.4");
        assert_eq!(file.len(), 8);
        assert_eq!(file.name(), "report.pdf");

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_replacing_releases_previous() {
        let mut current = TransientFile::from_bytes("a.docx", b"one", DocumentFormat::Docx).unwrap();
        let first = current.path().to_path_buf();

        current = TransientFile::from_bytes("b.docx", b"two", DocumentFormat::Docx).unwrap();
        assert!(!first.exists());
        assert!(current.path().exists());
    }
}
