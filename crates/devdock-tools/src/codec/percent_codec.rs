//! Percent encoding for URL components
//!
//! Matches `encodeURIComponent`: everything except ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )` is escaped as UTF-8 bytes.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ToolError, ToolResult};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL component encoder and decoder
pub trait PercentCodec: Send + Sync {
    fn encode(&self, text: &str) -> String;

    fn decode(&self, encoded: &str) -> ToolResult<String>;
}

/// `encodeURIComponent` / `decodeURIComponent` semantics
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentPercentCodec;

impl PercentCodec for ComponentPercentCodec {
    fn encode(&self, text: &str) -> String {
        utf8_percent_encode(text, COMPONENT).to_string()
    }

    fn decode(&self, encoded: &str) -> ToolResult<String> {
        check_escapes(encoded)?;
        percent_decode_str(encoded)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .map_err(|_| ToolError::InvalidUtf8)
    }
}

/// Every `%` must be followed by two hex digits
fn check_escapes(encoded: &str) -> ToolResult<()> {
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(ToolError::MalformedEscape { position: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_matches_component_rules() {
        let codec = ComponentPercentCodec;
        assert_eq!(codec.encode(""), "");
        assert_eq!(codec.encode("a b&c=d/e?f"), "a%20b%26c%3Dd%2Fe%3Ff");
        assert_eq!(codec.encode("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(codec.encode("ü"), "%C3%BC");
    }

    #[test]
    fn test_decode() {
        let codec = ComponentPercentCodec;
        assert_eq!(codec.decode("a%20b%2Bc").unwrap(), "a b+c");
        assert_eq!(codec.decode("a+b").unwrap(), "a+b");
        assert_eq!(codec.decode("%c3%bc").unwrap(), "ü");
    }

    #[test]
    fn test_decode_rejects_malformed_escape() {
        let codec = ComponentPercentCodec;
        assert!(matches!(
            codec.decode("100%"),
            Err(ToolError::MalformedEscape { position: 3 })
        ));
        assert!(matches!(
            codec.decode("%zz"),
            Err(ToolError::MalformedEscape { position: 0 })
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let codec = ComponentPercentCodec;
        assert!(matches!(codec.decode("%FF"), Err(ToolError::InvalidUtf8)));
    }

    proptest! {
        #[test]
        fn round_trip(text in ".*") {
            let codec = ComponentPercentCodec;
            prop_assert_eq!(codec.decode(&codec.encode(&text)).unwrap(), text);
        }
    }
}
