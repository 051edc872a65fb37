//! DevDock tool collaborators
//!
//! Pure conversion routines used by the tool panels, each behind a small
//! trait so panels receive them as injected capabilities:
//! - digests (MD5, SHA-1, SHA-256, SHA-512)
//! - Base64 and percent (URL component) codecs
//! - UUID generation (v1, v3, v4, v5)
//! - image ↔ Base64 and SVG → PNG conversion
//! - document preview through the system viewer

pub mod codec;
pub mod digest;
pub mod error;
pub mod images;
pub mod svg;
pub mod uuids;
pub mod viewer;

use std::sync::Arc;

pub use codec::{Base64Codec, ComponentPercentCodec, PercentCodec, StandardBase64};
pub use digest::{DigestProvider, HashAlgorithm, RustCryptoDigests};
pub use error::{ToolError, ToolResult};
pub use images::{DecodedImage, EncodedImage};
pub use svg::RenderedPng;
pub use uuids::{UuidGenerator, UuidVersion};
pub use viewer::{DocumentFormat, DocumentViewer, SystemViewer, TransientFile};

/// Capability set handed to panels
#[derive(Clone)]
pub struct Capabilities {
    pub digest: Arc<dyn DigestProvider>,
    pub base64: Arc<dyn Base64Codec>,
    pub percent: Arc<dyn PercentCodec>,
    pub viewer: Arc<dyn DocumentViewer>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            digest: Arc::new(RustCryptoDigests),
            base64: Arc::new(StandardBase64),
            percent: Arc::new(ComponentPercentCodec),
            viewer: Arc::new(SystemViewer),
        }
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}
