//! `tv-hex` - Hex serialization of test vectors into `.mem` artifacts.
//!
//! This crate provides:
//! - Fixed-width lowercase hex rendering with selectable line grouping
//! - An atomic artifact writer (temp file + rename) so a partially written
//!   file is never observable under its final name

pub mod error;
pub mod render;
pub mod sink;

pub use error::{HexError, Result};
pub use render::{hex_token, render, token_digits, LineGrouping};
pub use sink::write_artifact;
