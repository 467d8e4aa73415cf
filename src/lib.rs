//! Conversion between torrent metainfo files and pretty-printed JSON.
//!
//! The Bencode codec itself lives in the `ben` crate. This crate maps its
//! values onto `serde_json` documents and back, and computes info hashes.

mod error;
pub mod json;
pub mod metainfo;

pub use error::{Error, Result};
