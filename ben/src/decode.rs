use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};
use crate::value::{Dict, Value};

mod int;

/// Decode a complete Bencode buffer into a `Value`.
///
/// The whole buffer must be consumed by the root value.
///
/// # Examples
///
/// Basic usage:
/// ```
/// use ben::Value;
///
/// let value = ben::decode(b"l4:spam4:eggse").unwrap();
/// assert_eq!(Value::List(vec!["spam".into(), "eggs".into()]), value);
/// ```
pub fn decode(buf: &[u8]) -> Result<Value> {
    Decoder::new().decode(buf)
}

/// Bencode decoder
pub struct Decoder {
    depth_limit: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            depth_limit: usize::MAX,
        }
    }
}

impl Decoder {
    /// Create a new Bencode decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a limit on depth of object nesting that is allowed during decoding.
    pub fn depth_limit(&mut self, depth_limit: usize) {
        self.depth_limit = depth_limit;
    }

    /// Decode a bencoded slice and return the root value.
    pub fn decode(&self, buf: &[u8]) -> Result<Value> {
        let (value, len) = self.decode_prefix(buf)?;
        if len == buf.len() {
            Ok(value)
        } else {
            Err(Error::TrailingData { pos: len })
        }
    }

    /// Decode one value from the beginning of given slice and return it along
    /// with the number of bytes processed.
    ///
    /// It's useful when there is trailing data after the bencoded bytes.
    pub fn decode_prefix(&self, buf: &[u8]) -> Result<(Value, usize)> {
        let mut state = DecoderState {
            buf,
            pos: 0,
            depth: 0,
            depth_limit: self.depth_limit,
        };

        let value = state.decode_value()?;
        Ok((value, state.pos))
    }
}

struct DecoderState<'a> {
    buf: &'a [u8],
    pos: usize,
    depth: usize,
    depth_limit: usize,
}

macro_rules! ensure {
    ($cond:expr, $reason:expr, $pos:expr) => {
        if !$cond {
            return Err(Error::Invalid {
                reason: $reason,
                pos: $pos,
            });
        }
    };
}

impl<'a> DecoderState<'a> {
    fn peek_char(&self) -> Result<u8> {
        self.buf.get(self.pos).copied().ok_or(Error::Eof)
    }

    fn next_char(&mut self) -> Result<u8> {
        let c = self.peek_char()?;
        self.pos += 1;
        Ok(c)
    }

    fn next_token(&mut self) -> Result<Token> {
        let c = self.peek_char()?;
        let kind = TokenKind::from_tag(c).ok_or(Error::Unexpected {
            ch: char::from(c),
            pos: self.pos,
        })?;

        let value = match kind {
            TokenKind::Int => self.decode_int()?,
            TokenKind::ByteStr => self.decode_bytes()?,
            TokenKind::List => self.decode_list()?,
            TokenKind::Dict => self.decode_dict()?,
            TokenKind::End => {
                self.pos += 1;
                return Ok(Token::End);
            }
        };

        Ok(Token::Value(value))
    }

    fn decode_value(&mut self) -> Result<Value> {
        let pos = self.pos;
        match self.next_token()? {
            Token::Value(value) => Ok(value),
            Token::End => Err(Error::Unexpected { ch: 'e', pos }),
        }
    }

    fn decode_int(&mut self) -> Result<Value> {
        // Consume the opening 'i'
        self.next_char()?;

        let start = self.pos;
        let mut c = self.next_char()?;

        if c == b'-' {
            c = self.next_char()?;
            ensure!(c != b'0', "negative zero", start);
        }

        ensure!(c.is_ascii_digit(), "integer without digits", start);

        if c == b'0' {
            c = self.next_char()?;
            ensure!(c == b'e', "leading zero in integer", start);
        } else {
            while c.is_ascii_digit() {
                c = self.next_char()?;
            }
            ensure!(c == b'e', "integer not terminated by 'e'", self.pos - 1);
        }

        let digits = &self.buf[start..self.pos - 1];
        let n = int::parse_i64(digits).ok_or(Error::Overflow { pos: start })?;
        Ok(Value::Integer(n))
    }

    fn decode_bytes(&mut self) -> Result<Value> {
        let start = self.pos;

        let mut c = self.next_char()?;
        if c == b'0' {
            c = self.next_char()?;
        } else {
            while c.is_ascii_digit() {
                c = self.next_char()?;
            }
        }

        ensure!(c == b':', "malformed string length", self.pos - 1);

        let len = int::parse_usize(&self.buf[start..self.pos - 1])
            .ok_or(Error::Overflow { pos: start })?;
        if len > self.buf.len() - self.pos {
            return Err(Error::Eof);
        }

        let payload = self.buf[self.pos..self.pos + len].to_vec();
        self.pos += len;
        Ok(Value::ByteString(payload))
    }

    fn decode_list(&mut self) -> Result<Value> {
        self.enter()?;

        let mut list = vec![];
        while let Token::Value(value) = self.next_token()? {
            list.push(value);
        }

        self.leave();
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self) -> Result<Value> {
        self.enter()?;

        let mut dict = Dict::new();
        loop {
            let key_pos = self.pos;
            let key = match self.next_token()? {
                Token::End => break,
                Token::Value(Value::ByteString(key)) => key,
                Token::Value(_) => {
                    return Err(Error::Invalid {
                        reason: "dictionary key is not a string",
                        pos: key_pos,
                    })
                }
            };

            let value = match self.next_token()? {
                Token::Value(value) => value,
                Token::End => {
                    return Err(Error::Invalid {
                        reason: "dictionary key without a value",
                        pos: key_pos,
                    })
                }
            };

            dict.insert(key, value);
        }

        self.leave();
        Ok(Value::Dict(dict))
    }

    /// Consumes the opening tag of a list or dictionary.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.depth_limit {
            return Err(Error::DepthLimit {
                limit: self.depth_limit,
            });
        }
        self.depth += 1;
        self.pos += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
