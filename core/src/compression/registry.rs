//! compression/registry.rs
//! Codec lookup and construction.

use crate::compression::codecs::{DeflateCodec, GzipCodec};
use crate::compression::types::{Codec, CodecKind, CompressError};
use crate::config::CompressionConfig;
use crate::constants::{DEFLATE_MAGIC, GZIP_MAGIC};

pub struct CodecInfo {
    pub name: &'static str,
    pub magic: &'static [u8],
    pub default: bool,
}

pub fn resolve(kind: CodecKind) -> CodecInfo {
    match kind {
        CodecKind::Gzip => CodecInfo { name: "gzip", magic: &GZIP_MAGIC, default: true },
        CodecKind::Deflate => CodecInfo { name: "deflate", magic: &DEFLATE_MAGIC, default: false },
    }
}

/// Look a codec up by name, case-insensitively.
pub fn parse_kind(name: &str) -> Result<CodecKind, CompressError> {
    CodecKind::ALL
        .into_iter()
        .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CompressError::UnsupportedCodec(name.to_string()))
}

pub fn create_codec(config: &CompressionConfig) -> Result<Box<dyn Codec>, CompressError> {
    config.validate()?;
    let limit = config.max_decompressed_len;
    Ok(match config.codec {
        CodecKind::Gzip => Box::new(GzipCodec::new(limit)),
        CodecKind::Deflate => Box::new(DeflateCodec::new(limit)),
    })
}
