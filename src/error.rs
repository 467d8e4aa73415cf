use std::borrow::Cow;
use std::fmt;

#[derive(Debug)]
pub struct Error {
    err: Cow<'static, str>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.err)
    }
}

impl From<ben::Error> for Error {
    fn from(e: ben::Error) -> Self {
        let kind = match e.kind() {
            ben::ErrorKind::Format => "Malformed bencode",
            ben::ErrorKind::Value => "Unexpected value",
        };
        Self {
            err: format!("{}: {}", kind, e).into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self {
            err: format!("Invalid JSON: {}", e).into(),
        }
    }
}
