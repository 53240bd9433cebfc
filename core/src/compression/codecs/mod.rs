//! compression/codecs/mod.rs
//! Concrete codecs. Each decodes straight from the view's chunks.

pub mod deflate;
pub mod gzip;

pub use deflate::*;
pub use gzip::*;

use std::io::{self, Read};

use bytes::Buf;

use crate::buffer::ByteViewCursor;

/// Drain `decoder` into a buffer, failing once more than `limit` bytes come out.
pub(crate) fn read_bounded<R: Read>(mut decoder: R, limit: Option<usize>) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match limit {
        None => {
            decoder.read_to_end(&mut out)?;
        }
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            decoder.take(cap).read_to_end(&mut out)?;
            if out.len() > max {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("decompressed size exceeds limit of {} bytes", max),
                ));
            }
        }
    }
    Ok(out)
}

/// Reject bytes left over after the compressed stream ended.
pub(crate) fn ensure_consumed(rest: &bytes::buf::Reader<ByteViewCursor<'_>>) -> io::Result<()> {
    let left = rest.get_ref().remaining();
    if left > 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} trailing bytes after end of compressed stream", left),
        ));
    }
    Ok(())
}
