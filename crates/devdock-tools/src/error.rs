//! Tool errors

use thiserror::Error;

/// Errors raised by the tool collaborators
///
/// All of them are recoverable: panels show them inline and carry on.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(String),

    #[error("Decoded data is not valid UTF-8")]
    InvalidUtf8,

    #[error("Malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Invalid scale factor: {0}")]
    InvalidScale(f32),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedDocument(String),

    #[error("Preview failed: {0}")]
    Viewer(String),

    #[error("Input is empty")]
    EmptyInput,
}

pub type ToolResult<T> = Result<T, ToolError>;
