/// Gzip member header: ID1, ID2 and CM = 8 (deflate). RFC 1952.
pub const GZIP_MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

/// Header of the stored-document deflate format: "DFL" + version 0, followed
/// by a raw (headerless) RFC 1951 deflate stream.
pub const DEFLATE_MAGIC: [u8; 4] = *b"DFL\0";

/// Structured-content signatures sniffed by `xcontent`.
pub mod xcontent_magic {
    /// SMILE binary JSON header ":)\n".
    pub const SMILE: [u8; 3] = [b':', b')', b'\n'];
    /// YAML document start.
    pub const YAML: [u8; 3] = *b"---";
    /// CBOR self-describe tag 55799.
    pub const CBOR_SELF_DESCRIBE: [u8; 3] = [0xd9, 0xd9, 0xf7];
    /// How far into the payload leading whitespace before `{` is tolerated.
    pub const JSON_SCAN_LIMIT: usize = 20;
}
