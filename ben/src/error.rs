pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The buffer is not a full Bencode packet, more bytes expected
    #[error("Unexpected End of File")]
    Eof,

    /// Unexpected character at given position
    #[error("Unexpected character {ch:?} at {pos}")]
    Unexpected { ch: char, pos: usize },

    /// Invalid data at given position
    #[error("Invalid input at {pos}: {reason}")]
    Invalid { reason: &'static str, pos: usize },

    /// Integer or length prefix does not fit the target type
    #[error("Integer overflow at {pos}")]
    Overflow { pos: usize },

    /// Exceeded Depth limit
    #[error("Exceeded Depth limit of {limit}")]
    DepthLimit { limit: usize },

    /// Bytes left over after the root value
    #[error("Trailing data at {pos}")]
    TrailingData { pos: usize },

    /// Root value is not a dictionary
    #[error("Not a torrent file")]
    NotATorrent,

    /// A field required by the torrent layout is absent
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    /// Type mismatch
    #[error("Type mismatch: {0}")]
    TypeMismatch(&'static str),

    /// A piece hash is not valid hexadecimal
    #[error("Invalid hex in piece hash {index}")]
    InvalidHex { index: usize },

    /// Value with no Bencode counterpart
    #[error("Unsupported value: {0}")]
    Unsupported(String),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bytes do not follow the Bencode grammar.
    Format,

    /// The bytes are well formed but the value is not what was asked for.
    Value,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Eof
            | Self::Unexpected { .. }
            | Self::Invalid { .. }
            | Self::Overflow { .. }
            | Self::DepthLimit { .. }
            | Self::TrailingData { .. }
            | Self::NotATorrent => ErrorKind::Format,
            Self::MissingField(_)
            | Self::TypeMismatch(_)
            | Self::InvalidHex { .. }
            | Self::Unsupported(_) => ErrorKind::Value,
        }
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            "Unexpected character 'x' at 3",
            Error::Unexpected { ch: 'x', pos: 3 }.to_string()
        );
        assert_eq!("Missing field `info`", Error::MissingField("info").to_string());
    }

    #[test]
    fn kinds() {
        assert!(Error::Eof.is_format());
        assert!(Error::NotATorrent.is_format());
        assert_eq!(ErrorKind::Value, Error::InvalidHex { index: 0 }.kind());
        assert_eq!(ErrorKind::Value, Error::Unsupported("null".into()).kind());
    }
}
