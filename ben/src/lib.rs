//! `ben` is an order-preserving Bencode codec.
//!
//! Decoding builds a [`Value`] tree with a single forward cursor over the
//! input. Encoding writes the tree back in its own order, so dictionaries
//! are never re-sorted and a decoded buffer re-encodes to identical bytes.
//!
//! [`decode_torrent`] and [`encode_torrent`] additionally convert the
//! `info.pieces` field of torrent metainfo between its binary wire form and a
//! list of hex strings.

pub mod decode;
mod encode;
mod error;
mod token;
pub mod torrent;
mod value;

pub use decode::{decode, Decoder};
pub use encode::{encode, encode_bytes, encode_int, DictEncoder, Encode, ListEncoder};
pub use error::{Error, ErrorKind, Result};
pub use torrent::{decode_torrent, encode_torrent, HASH_LEN};
pub use value::{Dict, DictIter, Value};
