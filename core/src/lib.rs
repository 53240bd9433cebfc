//! compress-core
//!
//! Detects whether an opaque payload was compressed by the installed codec
//! and decompresses it, passing plain payloads through untouched.

#![forbid(unsafe_code)]

pub mod constants;
pub mod config;

pub mod buffer;
pub mod compression;
pub mod xcontent;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::buffer::ByteView;
    pub use crate::compression::{Codec, CodecKind, CompressError, CompressErrorKind, Dispatcher};
    pub use crate::config::CompressionConfig;
    pub use crate::xcontent::{ContentSniffer, XContentSniffer, XContentType};
}
