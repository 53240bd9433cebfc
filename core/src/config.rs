//! config.rs
//! Immutable compression configuration, built once and injected into the dispatcher.

use serde::{Deserialize, Serialize};

use crate::compression::{CodecKind, CompressError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressionConfig {
    /// The one installed codec.
    pub codec: CodecKind,
    /// Upper bound on decompressed output; `None` means unbounded.
    pub max_decompressed_len: Option<usize>,
    /// Cross-check detections against the structured-content sniffer.
    /// Only has an effect in builds with debug assertions.
    pub check_disjoint: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            codec: CodecKind::default(),
            max_decompressed_len: None,
            check_disjoint: true,
        }
    }
}

impl CompressionConfig {
    pub fn with_codec(codec: CodecKind) -> Self {
        Self { codec, ..Self::default() }
    }

    /// Parse and validate a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, CompressError> {
        let cfg: CompressionConfig =
            serde_json::from_str(s).map_err(|e| CompressError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), CompressError> {
        if self.max_decompressed_len == Some(0) {
            return Err(CompressError::Config(
                "max_decompressed_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
