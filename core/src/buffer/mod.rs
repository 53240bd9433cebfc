//! buffer/mod.rs
//! Immutable byte views over one or more reference-counted buffers.

pub mod view;

pub use view::*;
