//! Text codecs

mod base64_codec;
mod percent_codec;

pub use base64_codec::{Base64Codec, StandardBase64};
pub use percent_codec::{ComponentPercentCodec, PercentCodec};
