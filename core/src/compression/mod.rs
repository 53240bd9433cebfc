//! compression/mod.rs
//! Compression detection and decompression dispatch.
//!
//! Notes:
//! - Exactly one codec is installed per dispatcher; detection is a prefix check.
//! - This module never compresses.

pub mod codecs;
pub mod dispatcher;
pub mod registry;
pub mod types;

pub use dispatcher::*;
pub use registry::*;
pub use types::*;
