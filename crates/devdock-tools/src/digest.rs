//! Text digests
//!
//! Digests are rendered as lowercase hexadecimal.

use std::fmt;

use sha2::Digest;

use crate::error::ToolResult;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    /// Display name, e.g. `SHA-256`
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deterministic digest of arbitrary bytes
pub trait DigestProvider: Send + Sync {
    fn digest(&self, algorithm: HashAlgorithm, bytes: &[u8]) -> ToolResult<String>;

    /// Digest of the UTF-8 encoding of `text`
    fn digest_text(&self, algorithm: HashAlgorithm, text: &str) -> ToolResult<String> {
        self.digest(algorithm, text.as_bytes())
    }
}

/// Digests backed by the RustCrypto hash crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDigests;

impl DigestProvider for RustCryptoDigests {
    fn digest(&self, algorithm: HashAlgorithm, bytes: &[u8]) -> ToolResult<String> {
        let hex = match algorithm {
            HashAlgorithm::Md5 => hex::encode(md5::Md5::digest(bytes)),
            HashAlgorithm::Sha1 => hex::encode(sha1::Sha1::digest(bytes)),
            HashAlgorithm::Sha256 => hex::encode(sha2::Sha256::digest(bytes)),
            HashAlgorithm::Sha512 => hex::encode(sha2::Sha512::digest(bytes)),
        };
        Ok(hex)
    }
}
