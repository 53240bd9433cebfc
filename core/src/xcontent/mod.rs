//! xcontent/mod.rs
//! Structured-content (document/config markup) sniffing.
//!
//! The dispatcher only consults this to cross-check that a payload is never
//! both compressed and structured content.

pub mod sniff;

pub use sniff::*;
