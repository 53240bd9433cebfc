//! compression/dispatcher.rs
//! Routes byte views to the single installed codec.
//!
//! Notes:
//! - Holds no mutable state; every call is a pure function of the input view.
//! - A payload must never be both compressed and structured content. The
//!   dispatcher cross-checks this with `debug_assert!` only, so release builds
//!   never branch on the sniffer.
//! - Decompression is only attempted on views the codec has already recognized.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::buffer::ByteView;
use crate::compression::registry::create_codec;
use crate::compression::types::{Codec, CompressError};
use crate::config::CompressionConfig;
use crate::xcontent::{ContentSniffer, XContentSniffer};

const ABSENT_INPUT: &str = "the byte view must not be absent";

#[derive(Debug)]
pub struct Dispatcher {
    codec: Box<dyn Codec>,
    sniffer: Arc<dyn ContentSniffer>,
    check_disjoint: bool,
}

impl Dispatcher {
    pub fn new(codec: Box<dyn Codec>, sniffer: Arc<dyn ContentSniffer>) -> Self {
        Self { codec, sniffer, check_disjoint: true }
    }

    /// Build the dispatcher described by `config`, with the default sniffer.
    pub fn from_config(config: &CompressionConfig) -> Result<Self, CompressError> {
        Self::from_config_with_sniffer(config, Arc::new(XContentSniffer))
    }

    pub fn from_config_with_sniffer(
        config: &CompressionConfig,
        sniffer: Arc<dyn ContentSniffer>,
    ) -> Result<Self, CompressError> {
        let codec = create_codec(config)?;
        debug!(codec = codec.name(), limit = ?config.max_decompressed_len, "compression dispatcher configured");
        Ok(Self { codec, sniffer, check_disjoint: config.check_disjoint })
    }

    /// The installed codec.
    pub fn codec(&self) -> &dyn Codec {
        self.codec.as_ref()
    }

    /// True iff the installed codec recognizes the view's header.
    pub fn is_compressed(&self, bytes: &ByteView) -> bool {
        self.codec_for(bytes).is_some()
    }

    /// The codec that produced `bytes`, or `None` for plain or foreign payloads.
    pub fn codec_for(&self, bytes: &ByteView) -> Option<&dyn Codec> {
        if !self.codec.is_compressed(bytes) {
            trace!(len = bytes.len(), "no codec recognizes payload");
            return None;
        }
        if cfg!(debug_assertions) && self.check_disjoint {
            let content = self.sniffer.sniff(bytes);
            debug_assert!(
                content.is_none(),
                "payload detected as both {} compressed and {:?} content",
                self.codec.name(),
                content
            );
        }
        trace!(codec = self.codec.name(), len = bytes.len(), "payload is compressed");
        Some(self.codec.as_ref())
    }

    /// Decompress when compressed; otherwise hand back the very same view.
    pub fn decompress_if_needed(&self, bytes: ByteView) -> Result<ByteView, CompressError> {
        match self.codec_for(&bytes) {
            None => Ok(bytes),
            Some(codec) => run(codec, &bytes),
        }
    }

    /// Decompress a payload the caller knows to be compressed.
    ///
    /// # Errors
    /// - `NotCompressed` when the installed codec does not recognize it.
    /// - `Decompression` when the codec fails to decode it.
    pub fn decompress(&self, bytes: &ByteView) -> Result<ByteView, CompressError> {
        let codec = self.codec_for(bytes).ok_or(CompressError::NotCompressed)?;
        run(codec, bytes)
    }

    // Entry points for callers holding a possibly absent view.

    pub fn try_is_compressed(&self, bytes: Option<&ByteView>) -> Result<bool, CompressError> {
        Ok(self.is_compressed(require(bytes)?))
    }

    pub fn try_codec_for(&self, bytes: Option<&ByteView>) -> Result<Option<&dyn Codec>, CompressError> {
        Ok(self.codec_for(require(bytes)?))
    }

    pub fn try_decompress_if_needed(&self, bytes: Option<ByteView>) -> Result<ByteView, CompressError> {
        self.decompress_if_needed(require(bytes)?)
    }

    pub fn try_decompress(&self, bytes: Option<&ByteView>) -> Result<ByteView, CompressError> {
        self.decompress(require(bytes)?)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(
            Box::new(crate::compression::codecs::GzipCodec::default()),
            Arc::new(XContentSniffer),
        )
    }
}

fn require<T>(bytes: Option<T>) -> Result<T, CompressError> {
    bytes.ok_or(CompressError::InvalidArgument(ABSENT_INPUT))
}

fn run(codec: &dyn Codec, bytes: &ByteView) -> Result<ByteView, CompressError> {
    match codec.decompress(bytes) {
        Ok(out) => {
            debug!(
                codec = codec.name(),
                len = bytes.len(),
                decompressed_len = out.len(),
                "decompressed payload"
            );
            Ok(out)
        }
        Err(e) => {
            warn!(codec = codec.name(), len = bytes.len(), error = %e, "decompression failed");
            Err(e)
        }
    }
}
