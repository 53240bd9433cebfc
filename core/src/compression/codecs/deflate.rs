//! codecs/deflate.rs
//! Stored-document deflate format: `DFL\0` followed by a raw deflate stream.

use std::io::Read;

use bytes::Buf;
use flate2::bufread::DeflateDecoder;

use crate::buffer::ByteView;
use crate::compression::codecs::{ensure_consumed, read_bounded};
use crate::compression::types::{Codec, CodecKind, CompressError};
use crate::constants::DEFLATE_MAGIC;

#[derive(Debug, Clone, Default)]
pub struct DeflateCodec {
    max_decompressed_len: Option<usize>,
}

impl DeflateCodec {
    pub fn new(max_decompressed_len: Option<usize>) -> Self {
        Self { max_decompressed_len }
    }
}

impl Codec for DeflateCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Deflate
    }

    fn header_len(&self) -> usize {
        DEFLATE_MAGIC.len()
    }

    fn is_compressed(&self, bytes: &ByteView) -> bool {
        bytes.starts_with(&DEFLATE_MAGIC)
    }

    fn decompress(&self, bytes: &ByteView) -> Result<ByteView, CompressError> {
        let mut cursor = bytes.cursor();
        if cursor.remaining() < DEFLATE_MAGIC.len() {
            return Err(CompressError::decompression(
                CodecKind::Deflate,
                std::io::ErrorKind::UnexpectedEof.into(),
            ));
        }
        cursor.advance(DEFLATE_MAGIC.len());

        let mut decoder = DeflateDecoder::new(cursor.reader());
        let out = read_bounded(decoder.by_ref(), self.max_decompressed_len)
            .map_err(|e| CompressError::decompression(CodecKind::Deflate, e))?;
        ensure_consumed(&decoder.into_inner())
            .map_err(|e| CompressError::decompression(CodecKind::Deflate, e))?;
        Ok(ByteView::from(out))
    }
}
