//! Base64 text codec
//!
//! Text is encoded as UTF-8 before Base64. Decoding ignores ASCII
//! whitespace, accepts missing padding and insists the result is UTF-8.

use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{ToolError, ToolResult};

/// Standard alphabet, padding optional on decode
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 conversion between text and its encoded form
pub trait Base64Codec: Send + Sync {
    fn encode(&self, text: &str) -> String;

    fn decode(&self, encoded: &str) -> ToolResult<String>;

    /// Encode raw bytes
    fn encode_bytes(&self, bytes: &[u8]) -> String;

    /// Decode to raw bytes
    fn decode_bytes(&self, encoded: &str) -> ToolResult<Vec<u8>>;
}

/// RFC 4648 standard alphabet codec
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBase64;

impl Base64Codec for StandardBase64 {
    fn encode(&self, text: &str) -> String {
        self.encode_bytes(text.as_bytes())
    }

    fn decode(&self, encoded: &str) -> ToolResult<String> {
        let bytes = self.decode_bytes(encoded)?;
        String::from_utf8(bytes).map_err(|_| ToolError::InvalidUtf8)
    }

    fn encode_bytes(&self, bytes: &[u8]) -> String {
        general_purpose::STANDARD.encode(bytes)
    }

    fn decode_bytes(&self, encoded: &str) -> ToolResult<Vec<u8>> {
        let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        LENIENT
            .decode(compact.as_bytes())
            .map_err(|e| ToolError::InvalidBase64(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_known_values() {
        let codec = StandardBase64;
        assert_eq!(codec.encode(""), "");
        assert_eq!(codec.encode("hello"), "aGVsbG8=");
        assert_eq!(codec.encode("héllo"), "aMOpbGxv");
    }

    #[test]
    fn test_decode_tolerates_whitespace_and_missing_padding() {
        let codec = StandardBase64;
        assert_eq!(codec.decode("aGVs\nbG8=").unwrap(), "hello");
        assert_eq!(codec.decode("aGVsbG8").unwrap(), "hello");
        assert_eq!(codec.decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = StandardBase64;
        assert!(matches!(codec.decode("not*base64"), Err(ToolError::InvalidBase64(_))));
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        let codec = StandardBase64;
        // 0xff 0xfe
        assert!(matches!(codec.decode("//4="), Err(ToolError::InvalidUtf8)));
    }

    proptest! {
        #[test]
        fn round_trip(text in ".*") {
            let codec = StandardBase64;
            prop_assert_eq!(codec.decode(&codec.encode(&text)).unwrap(), text);
        }
    }
}
