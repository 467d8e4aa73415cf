use std::fmt;

mod dict;

pub use dict::{Dict, DictIter};

/// A decoded Bencode value.
///
/// Byte strings are kept as raw bytes whether or not they hold text. Use
/// [`Value::as_str`] to get a UTF-8 view when one exists.
#[derive(Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    ByteString(Vec<u8>),
    List(Vec<Value>),
    Dict(Dict),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::ByteString(b) => match std::str::from_utf8(b) {
                Ok(s) => write!(f, "{:?}", s),
                Err(_) => write!(f, "<{}>", data_encoding::HEXLOWER.encode(b)),
            },
            Self::List(list) => f.debug_list().entries(list).finish(),
            Self::Dict(dict) => fmt::Debug::fmt(dict, f),
        }
    }
}

impl Value {
    /// Returns true if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this value is a dictionary.
    pub fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(_))
    }

    /// Returns true if this value is a byte string.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::ByteString(_))
    }

    /// Returns true if this value is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Return this value as a `i64`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// let value = ben::decode(b"i123e").unwrap();
    /// assert_eq!(Some(123), value.as_int());
    /// ```
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Return this value as a byte slice.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// let value = ben::decode(b"3:abc").unwrap();
    /// assert_eq!(Some(&b"abc"[..]), value.as_bytes());
    /// ```
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::ByteString(b) => Some(b),
            _ => None,
        }
    }

    /// Return this value as a string slice.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are
    /// not valid UTF-8.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// let value = ben::decode(b"3:abc").unwrap();
    /// assert_eq!(Some("abc"), value.as_str());
    ///
    /// let value = ben::decode(b"2:\xff\xfe").unwrap();
    /// assert_eq!(None, value.as_str());
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()?).ok()
    }

    /// Return this value as a list slice.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// let value = ben::decode(b"l1:a2:bce").unwrap();
    /// let list = value.as_list().unwrap();
    /// assert_eq!(Some("a"), list[0].as_str());
    /// assert_eq!(Some("bc"), list[1].as_str());
    /// ```
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Return this value as a `Dict` which provides further
    /// dictionary operations such as `get`, `iter` etc.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// let value = ben::decode(b"d1:a2:bce").unwrap();
    /// let dict = value.as_dict().unwrap();
    /// assert_eq!(Some(&b"bc"[..]), dict.get_bytes("a"));
    /// ```
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::ByteString(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::ByteString(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::ByteString(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::ByteString(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Self::List(list)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Self::Dict(dict)
    }
}
