use std::fmt;

use sha1::Sha1;

use crate::Result;

/// SHA-1 of the bencoded `info` dictionary, which identifies a torrent.
#[derive(Debug, Default, PartialEq)]
pub struct InfoHash([u8; 20]);

impl InfoHash {
    pub fn encode_url(&self) -> String {
        self.0.iter().map(|c| format!("%{:02X}", c)).collect()
    }

    pub fn encode_hex(&self) -> String {
        data_encoding::HEXLOWER.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex())
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(b: [u8; 20]) -> Self {
        Self(b)
    }
}

/// Compute the info hash of a raw torrent file.
///
/// The `info` dictionary is re-encoded in its original key order, which gives
/// back exactly the bytes the hash is defined over.
pub fn info_hash(buf: &[u8]) -> Result<InfoHash> {
    let torrent = ben::decode(buf)?;
    let info = torrent
        .as_dict()
        .ok_or(ben::Error::NotATorrent)?
        .get("info")
        .ok_or(ben::Error::MissingField("info"))?;

    let digest = Sha1::from(ben::encode(info)).digest().bytes();
    Ok(InfoHash(digest))
}
