//! Image ↔ Base64 conversion
//!
//! Encoding sniffs the image format from its bytes and produces a data
//! URL. Decoding accepts either a data URL or bare Base64 and verifies the
//! payload really is an image before handing it back.

use image::ImageFormat;
use tracing::debug;

use crate::codec::Base64Codec;
use crate::error::{ToolError, ToolResult};

/// Image encoded as Base64
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    /// `data:<mime>;base64,<payload>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Image decoded from bytes, with RGBA pixels for previewing
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Original encoded bytes
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// Unpremultiplied RGBA8 pixels, row-major
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn mime(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Preferred file extension for saving
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("bin")
    }
}

/// Encode image bytes as Base64
pub fn encode_image(bytes: &[u8], codec: &dyn Base64Codec) -> ToolResult<EncodedImage> {
    if bytes.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    debug!(format = ?format, width = decoded.width(), height = decoded.height(), "Encoding image");

    Ok(EncodedImage {
        mime: format.to_mime_type(),
        base64: codec.encode_bytes(bytes),
        width: decoded.width(),
        height: decoded.height(),
    })
}

/// Decode a data URL or bare Base64 payload into an image
pub fn decode_image(input: &str, codec: &dyn Base64Codec) -> ToolResult<DecodedImage> {
    let payload = strip_data_url(input.trim());
    if payload.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let bytes = codec.decode_bytes(payload)?;
    decode_image_bytes(bytes)
}

/// Decode raw image bytes
pub fn decode_image_bytes(bytes: Vec<u8>) -> ToolResult<DecodedImage> {
    if bytes.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let format = image::guess_format(&bytes)?;
    let rgba = image::load_from_memory_with_format(&bytes, format)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        bytes,
        format,
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Strip a `data:...;base64,` prefix if present
fn strip_data_url(input: &str) -> &str {
    if input.starts_with("data:") {
        if let Some((_, payload)) = input.split_once(";base64,") {
            return payload;
        }
    }
    input
}
