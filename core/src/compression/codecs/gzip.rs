//! codecs/gzip.rs
//! Gzip (RFC 1952) detection and decoding via flate2.

use flate2::bufread::GzDecoder;

use crate::buffer::ByteView;
use crate::compression::codecs::{ensure_consumed, read_bounded};
use crate::compression::types::{Codec, CodecKind, CompressError};
use crate::constants::GZIP_MAGIC;

/// Gzip codec. Accepts exactly one member per payload.
#[derive(Debug, Clone, Default)]
pub struct GzipCodec {
    max_decompressed_len: Option<usize>,
}

impl GzipCodec {
    pub fn new(max_decompressed_len: Option<usize>) -> Self {
        Self { max_decompressed_len }
    }
}

impl Codec for GzipCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Gzip
    }

    fn header_len(&self) -> usize {
        GZIP_MAGIC.len()
    }

    fn is_compressed(&self, bytes: &ByteView) -> bool {
        bytes.starts_with(&GZIP_MAGIC)
    }

    fn decompress(&self, bytes: &ByteView) -> Result<ByteView, CompressError> {
        let mut decoder = GzDecoder::new(bytes.reader());
        let out = read_bounded(&mut decoder, self.max_decompressed_len)
            .map_err(|e| CompressError::decompression(CodecKind::Gzip, e))?;
        ensure_consumed(&decoder.into_inner())
            .map_err(|e| CompressError::decompression(CodecKind::Gzip, e))?;
        Ok(ByteView::from(out))
    }
}
