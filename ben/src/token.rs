use crate::value::Value;

/// What the byte under the cursor announces.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum TokenKind {
    Dict,
    List,
    ByteStr,
    Int,
    End,
}

impl TokenKind {
    pub fn from_tag(c: u8) -> Option<Self> {
        match c {
            b'd' => Some(Self::Dict),
            b'l' => Some(Self::List),
            b'i' => Some(Self::Int),
            b'0'..=b'9' => Some(Self::ByteStr),
            b'e' => Some(Self::End),
            _ => None,
        }
    }
}

/// A single decoding step: a complete value, or the `e` closing the
/// enclosing list or dictionary.
#[derive(Debug, PartialEq)]
pub enum Token {
    Value(Value),
    End,
}
