use ben::{Dict, Value};
use serde_json::{Map, Value as Json};
use tracing::{trace, warn};

use crate::Result;

/// Decode a torrent file and render it as indented JSON.
///
/// `info.pieces` comes out as a list of hex encoded piece hashes.
pub fn torrent_to_json(buf: &[u8]) -> Result<String> {
    let torrent = ben::decode_torrent(buf)?;
    trace!("Decoded torrent: {:?}", torrent);
    Ok(serde_json::to_string_pretty(&to_json(&torrent))?)
}

/// Parse a JSON document produced by [`torrent_to_json`] and encode it back
/// into a torrent file.
pub fn json_to_torrent(text: &str) -> Result<Vec<u8>> {
    let json: Json = serde_json::from_str(text)?;
    let torrent = from_json(&json)?;
    Ok(ben::encode_torrent(&torrent)?)
}

/// Convert a Bencode value into JSON, keeping dictionary order.
///
/// Byte strings that are not valid UTF-8 cannot be represented exactly and
/// are replaced lossily.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Integer(n) => Json::from(*n),
        Value::ByteString(b) => Json::String(text(b)),
        Value::List(list) => Json::Array(list.iter().map(to_json).collect()),
        Value::Dict(dict) => Json::Object(
            dict.iter()
                .map(|(k, v)| (text(k), to_json(v)))
                .collect::<Map<_, _>>(),
        ),
    }
}

/// Convert a JSON document into a Bencode value, keeping object order.
///
/// Fails for JSON values without a Bencode counterpart: `null`, booleans,
/// fractional numbers and integers outside the `i64` range.
pub fn from_json(json: &Json) -> ben::Result<Value> {
    match json {
        Json::Number(n) => n
            .as_i64()
            .map(Value::Integer)
            .ok_or_else(|| ben::Error::Unsupported(format!("number {}", n))),
        Json::String(s) => Ok(Value::from(s.as_str())),
        Json::Array(items) => items
            .iter()
            .map(from_json)
            .collect::<ben::Result<Vec<_>>>()
            .map(Value::List),
        Json::Object(map) => {
            let mut dict = Dict::with_capacity(map.len());
            for (k, v) in map {
                dict.insert(k.as_str(), from_json(v)?);
            }
            Ok(Value::Dict(dict))
        }
        Json::Bool(b) => Err(ben::Error::Unsupported(format!("boolean {}", b))),
        Json::Null => Err(ben::Error::Unsupported("null".into())),
    }
}

fn text(b: &[u8]) -> String {
    match std::str::from_utf8(b) {
        Ok(s) => s.to_owned(),
        Err(_) => {
            warn!(len = b.len(), "Byte string is not UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(b).into_owned()
        }
    }
}
