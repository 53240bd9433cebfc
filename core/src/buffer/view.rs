//! buffer/view.rs
//! Immutable, possibly non-contiguous view over bytes.
//!
//! Notes:
//! - Chunks are `bytes::Bytes`, so cloning a view never copies payload data.
//! - Empty chunks are dropped on construction; every stored chunk is non-empty.
//! - Equality is by content, independent of how the bytes are split.

use std::fmt;

use bytes::{Buf, Bytes};

/// Immutable byte sequence of known length, supporting positional reads.
#[derive(Clone, Default)]
pub struct ByteView {
    chunks: Vec<Bytes>,
    len: usize,
}

impl ByteView {
    /// Empty view.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Contiguous view over a single buffer.
    pub fn new(bytes: Bytes) -> Self {
        let len = bytes.len();
        let chunks = if len == 0 { Vec::new() } else { vec![bytes] };
        Self { chunks, len }
    }

    /// View stitched together from several buffers, in order.
    pub fn composite(parts: Vec<Bytes>) -> Self {
        let chunks: Vec<Bytes> = parts.into_iter().filter(|c| !c.is_empty()).collect();
        let len = chunks.iter().map(Bytes::len).sum();
        Self { chunks, len }
    }

    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(bytes))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the view spans more than one underlying buffer.
    pub fn is_composite(&self) -> bool {
        self.chunks.len() > 1
    }

    /// Underlying buffers, in order. Never contains an empty chunk.
    pub fn chunks(&self) -> &[Bytes] {
        &self.chunks
    }

    /// Byte at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        let mut offset = index;
        for chunk in &self.chunks {
            if offset < chunk.len() {
                return Some(chunk[offset]);
            }
            offset -= chunk.len();
        }
        None
    }

    /// Prefix match across chunk boundaries. A view shorter than `prefix` never matches.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        if prefix.len() > self.len {
            return false;
        }
        let mut rest = prefix;
        for chunk in &self.chunks {
            if rest.is_empty() {
                break;
            }
            let n = rest.len().min(chunk.len());
            if chunk[..n] != rest[..n] {
                return false;
            }
            rest = &rest[n..];
        }
        rest.is_empty()
    }

    /// Position and value of the first byte that is not ASCII whitespace,
    /// looking at no more than `limit` bytes.
    pub fn first_non_whitespace(&self, limit: usize) -> Option<(usize, u8)> {
        self.iter()
            .take(limit)
            .enumerate()
            .find(|(_, b)| !b.is_ascii_whitespace())
    }

    /// Iterate over every byte in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.chunks.iter().flat_map(|c| c.iter().copied())
    }

    /// `Buf` cursor positioned at the start of the view.
    pub fn cursor(&self) -> ByteViewCursor<'_> {
        ByteViewCursor {
            chunks: &self.chunks,
            chunk: 0,
            offset: 0,
            remaining: self.len,
        }
    }

    /// `Read + BufRead` adapter; reads straight out of the underlying chunks.
    pub fn reader(&self) -> bytes::buf::Reader<ByteViewCursor<'_>> {
        self.cursor().reader()
    }

    /// Contiguous bytes. Copies only when the view is composite.
    pub fn to_bytes(&self) -> Bytes {
        match self.chunks.as_slice() {
            [] => Bytes::new(),
            [single] => single.clone(),
            _ => {
                let mut cursor = self.cursor();
                cursor.copy_to_bytes(self.len)
            }
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// True when both views share the exact same buffers (no copy happened).
    pub fn ptr_eq(&self, other: &ByteView) -> bool {
        self.len == other.len
            && self.chunks.len() == other.chunks.len()
            && self
                .chunks
                .iter()
                .zip(&other.chunks)
                .all(|(a, b)| a.as_ptr() == b.as_ptr() && a.len() == b.len())
    }
}

impl PartialEq for ByteView {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ByteView {}

impl PartialEq<[u8]> for ByteView {
    fn eq(&self, other: &[u8]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<&[u8]> for ByteView {
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 16;
        let head: Vec<u8> = self.iter().take(PREVIEW).collect();
        f.debug_struct("ByteView")
            .field("len", &self.len)
            .field("chunks", &self.chunks.len())
            .field("head", &format_args!("{:02x?}", head))
            .finish()
    }
}

impl From<Bytes> for ByteView {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(v: Vec<u8>) -> Self {
        Self::new(Bytes::from(v))
    }
}

impl From<&'static [u8]> for ByteView {
    fn from(s: &'static [u8]) -> Self {
        Self::from_static(s)
    }
}

impl From<&'static str> for ByteView {
    fn from(s: &'static str) -> Self {
        Self::from_static(s.as_bytes())
    }
}

/// Forward-only cursor over a `ByteView`.
#[derive(Debug, Clone)]
pub struct ByteViewCursor<'a> {
    chunks: &'a [Bytes],
    chunk: usize,
    offset: usize,
    remaining: usize,
}

impl Buf for ByteViewCursor<'_> {
    fn remaining(&self) -> usize {
        self.remaining
    }

    fn chunk(&self) -> &[u8] {
        match self.chunks.get(self.chunk) {
            Some(c) => &c[self.offset..],
            None => &[],
        }
    }

    fn advance(&mut self, mut cnt: usize) {
        assert!(
            cnt <= self.remaining,
            "cannot advance past end: {} > {}",
            cnt,
            self.remaining
        );
        self.remaining -= cnt;
        while cnt > 0 {
            let avail = self.chunks[self.chunk].len() - self.offset;
            if cnt < avail {
                self.offset += cnt;
                return;
            }
            cnt -= avail;
            self.chunk += 1;
            self.offset = 0;
        }
    }
}
