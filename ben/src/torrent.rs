//! The `pieces` transform for torrent metainfo.
//!
//! On the wire `info.pieces` is one byte string holding the SHA-1 hashes of
//! all pieces back to back. The readable form is a list of hex strings, one
//! per hash.

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::decode::decode;
use crate::encode::Encode;
use crate::error::{Error, Result};
use crate::value::Value;

/// Length of a single piece hash.
pub const HASH_LEN: usize = 20;

/// Decode a torrent file, splitting `info.pieces` into hex encoded hashes.
///
/// # Examples
///
/// Basic usage:
/// ```
/// let mut buf = b"d4:infod6:pieces40:".to_vec();
/// buf.extend(&[0xab; 20]);
/// buf.extend(&[0x01; 20]);
/// buf.extend(b"ee");
///
/// let torrent = ben::decode_torrent(&buf).unwrap();
/// let info = torrent.as_dict().unwrap().get_dict("info").unwrap();
/// let pieces = info.get_list("pieces").unwrap();
/// assert_eq!(Some("abababababababababababababababababababab"), pieces[0].as_str());
/// assert_eq!(Some("0101010101010101010101010101010101010101"), pieces[1].as_str());
///
/// assert_eq!(buf, ben::encode_torrent(&torrent).unwrap());
/// ```
pub fn decode_torrent(buf: &[u8]) -> Result<Value> {
    if buf.first() != Some(&b'd') {
        return Err(Error::NotATorrent);
    }

    let mut torrent = decode(buf)?;
    split_pieces(&mut torrent)?;
    Ok(torrent)
}

/// Encode a torrent document, joining the hex encoded hashes of
/// `info.pieces` back into a single byte string.
///
/// The given document is left untouched.
pub fn encode_torrent(torrent: &Value) -> Result<Vec<u8>> {
    let mut torrent = torrent.clone();
    join_pieces(&mut torrent)?;
    Ok(torrent.encode_to_vec())
}

/// Replace the `info.pieces` byte string with a list of hex strings, one per
/// `HASH_LEN` chunk. A trailing chunk shorter than `HASH_LEN` is kept as is.
pub fn split_pieces(torrent: &mut Value) -> Result<()> {
    let pieces = pieces_mut(torrent)?;
    let blob = pieces
        .as_bytes()
        .ok_or(Error::TypeMismatch("`pieces` is not a byte string"))?;

    let hashes = blob
        .chunks(HASH_LEN)
        .map(|hash| Value::from(HEXLOWER.encode(hash)))
        .collect();

    *pieces = Value::List(hashes);
    Ok(())
}

/// Replace the `info.pieces` list of hex strings with the concatenation of
/// the hashes they encode.
pub fn join_pieces(torrent: &mut Value) -> Result<()> {
    let pieces = pieces_mut(torrent)?;
    let hashes = pieces
        .as_list()
        .ok_or(Error::TypeMismatch("`pieces` is not a list"))?;

    let mut blob = Vec::with_capacity(hashes.len() * HASH_LEN);
    for (index, hash) in hashes.iter().enumerate() {
        let hex = hash
            .as_bytes()
            .ok_or(Error::TypeMismatch("piece hash is not a string"))?;
        let bytes = HEXLOWER_PERMISSIVE
            .decode(hex)
            .map_err(|_| Error::InvalidHex { index })?;
        blob.extend(bytes);
    }

    *pieces = Value::ByteString(blob);
    Ok(())
}

fn pieces_mut(torrent: &mut Value) -> Result<&mut Value> {
    let root = torrent.as_dict_mut().ok_or(Error::NotATorrent)?;
    let info = root
        .get_mut("info")
        .ok_or(Error::MissingField("info"))?
        .as_dict_mut()
        .ok_or(Error::TypeMismatch("`info` is not a dictionary"))?;
    info.get_mut("pieces").ok_or(Error::MissingField("pieces"))
}
