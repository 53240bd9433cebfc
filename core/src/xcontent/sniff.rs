//! xcontent/sniff.rs
//! Magic-byte sniffer for JSON, SMILE, YAML and CBOR payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::ByteView;
use crate::constants::xcontent_magic::{CBOR_SELF_DESCRIBE, JSON_SCAN_LIMIT, SMILE, YAML};

/// Structured-content formats recognized by the sniffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XContentType {
    Json,
    Smile,
    Yaml,
    Cbor,
}

impl fmt::Display for XContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XContentType::Json => write!(f, "json"),
            XContentType::Smile => write!(f, "smile"),
            XContentType::Yaml => write!(f, "yaml"),
            XContentType::Cbor => write!(f, "cbor"),
        }
    }
}

/// Detects whether a payload is well-formed structured content.
pub trait ContentSniffer: Send + Sync + fmt::Debug {
    /// `None` when the payload is not recognized (including empty payloads).
    fn sniff(&self, bytes: &ByteView) -> Option<XContentType>;
}

/// Default sniffer, matching on leading bytes only.
#[derive(Debug, Default, Clone, Copy)]
pub struct XContentSniffer;

/// CBOR major type 5 (map), definite or indefinite length.
const CBOR_MAJOR_TYPE_MASK: u8 = 0xe0;
const CBOR_MAJOR_TYPE_MAP: u8 = 0xa0;

impl ContentSniffer for XContentSniffer {
    fn sniff(&self, bytes: &ByteView) -> Option<XContentType> {
        let first = bytes.get(0)?;

        if bytes.starts_with(&SMILE) {
            return Some(XContentType::Smile);
        }
        if bytes.starts_with(&YAML) {
            return Some(XContentType::Yaml);
        }
        if first & CBOR_MAJOR_TYPE_MASK == CBOR_MAJOR_TYPE_MAP
            || bytes.starts_with(&CBOR_SELF_DESCRIBE)
        {
            return Some(XContentType::Cbor);
        }
        if first == b'{' {
            return Some(XContentType::Json);
        }
        match bytes.first_non_whitespace(JSON_SCAN_LIMIT) {
            Some((_, b'{')) => Some(XContentType::Json),
            _ => None,
        }
    }
}
