//! compression/types.rs
//! Codec contract, codec identities and the error taxonomy.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::ByteView;

/// Compression formats this crate can recognize and decode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// Single-member gzip stream (RFC 1952).
    #[default]
    Gzip,
    /// `DFL\0` header followed by a raw deflate stream.
    Deflate,
}

impl CodecKind {
    pub const ALL: [CodecKind; 2] = [CodecKind::Gzip, CodecKind::Deflate];

    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Gzip => "gzip",
            CodecKind::Deflate => "deflate",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse error classes callers branch on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompressErrorKind {
    InvalidArgument,
    NotCompressed,
    Decompression,
    Config,
}

#[derive(Debug, Error)]
pub enum CompressError {
    /// A required byte view was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The caller asserted compression, but no installed codec recognizes the payload.
    #[error("payload is not compressed or uses an unknown compression format")]
    NotCompressed,

    /// The recognized codec's decoder hit corrupt, truncated or oversized data.
    #[error("{codec} decompression failed: {source}")]
    Decompression {
        codec: CodecKind,
        #[source]
        source: io::Error,
    },

    #[error("unsupported compression codec: {0}")]
    UnsupportedCodec(String),

    #[error("invalid compression config: {0}")]
    Config(String),
}

impl CompressError {
    pub fn kind(&self) -> CompressErrorKind {
        match self {
            CompressError::InvalidArgument(_) => CompressErrorKind::InvalidArgument,
            CompressError::NotCompressed => CompressErrorKind::NotCompressed,
            CompressError::Decompression { .. } => CompressErrorKind::Decompression,
            CompressError::UnsupportedCodec(_) | CompressError::Config(_) => {
                CompressErrorKind::Config
            }
        }
    }

    /// Underlying I/O error for decompression failures.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            CompressError::Decompression { source, .. } => Some(source),
            _ => None,
        }
    }

    pub(crate) fn decompression(codec: CodecKind, source: io::Error) -> Self {
        CompressError::Decompression { codec, source }
    }
}

impl From<CompressError> for io::Error {
    fn from(e: CompressError) -> Self {
        match e {
            CompressError::Decompression { source, .. } => source,
            other @ CompressError::InvalidArgument(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, other)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// A single compression format: recognizes its own magic header and decodes
/// payloads that carry it.
///
/// Implementations are immutable after construction and shared across threads.
pub trait Codec: Send + Sync + fmt::Debug {
    fn kind(&self) -> CodecKind;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Length of the magic signature inspected by `is_compressed`.
    fn header_len(&self) -> usize;

    /// Prefix-only check. Total over all views; too-short views yield `false`.
    fn is_compressed(&self, bytes: &ByteView) -> bool;

    /// Fully materialize the decompressed payload.
    ///
    /// Only defined for views where `is_compressed` returns `true`.
    fn decompress(&self, bytes: &ByteView) -> Result<ByteView, CompressError>;
}
