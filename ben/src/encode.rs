use itoa::Buffer;

use crate::value::{Dict, Value};

/// Encode a `Value` into a new vector of bytes.
///
/// Dictionaries are written in their iteration order, so a decoded buffer
/// encodes back to the exact same bytes.
///
/// # Examples
///
/// Basic usage:
/// ```
/// let value = ben::decode(b"d4:spam4:eggs3:cow3:mooe").unwrap();
/// assert_eq!(&b"d4:spam4:eggs3:cow3:mooe"[..], &ben::encode(&value)[..]);
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    value.encode_to_vec()
}

pub fn encode_int(buf: &mut Vec<u8>, value: i64) {
    buf.push(b'i');
    let mut fmt = Buffer::new();
    buf.extend(fmt.format(value).as_bytes());
    buf.push(b'e');
}

pub fn encode_bytes<I>(buf: &mut Vec<u8>, value: I)
where
    I: AsRef<[u8]>,
{
    let value = value.as_ref();
    let mut fmt = Buffer::new();
    buf.extend(fmt.format(value.len()).as_bytes());
    buf.push(b':');
    buf.extend(value);
}

/// A trait for objects that can be bencoded.
///
/// Types implementing `Encode` are encodable into given buffer.
pub trait Encode {
    /// Encode this value into given buffer.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Encode this value into a vector of bytes.
    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = vec![];
        self.encode(&mut buf);
        buf
    }
}

/// Bencode List representation.
pub struct ListEncoder<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> ListEncoder<'a> {
    /// Create a new list
    #[inline]
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        buf.push(b'l');
        Self { buf }
    }

    /// `Encode` a value in this list.
    #[inline]
    pub fn push<E: Encode>(&mut self, value: E) {
        value.encode(self.buf);
    }

    /// Create a new `ListEncoder` in this list.
    #[inline]
    pub fn push_list(&mut self) -> ListEncoder<'_> {
        self.buf.into()
    }

    /// Create a new `DictEncoder` in this list.
    #[inline]
    pub fn push_dict(&mut self) -> DictEncoder<'_> {
        self.buf.into()
    }

    /// Finish building this list.
    #[inline]
    pub fn finish(self) {}
}

impl Drop for ListEncoder<'_> {
    #[inline]
    fn drop(&mut self) {
        self.buf.push(b'e');
    }
}

/// Bencode Dictionary representation.
///
/// Keys are written in the order they are inserted. Neither ordering nor
/// uniqueness of keys is checked; both are up to the caller.
pub struct DictEncoder<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> DictEncoder<'a> {
    /// Create a new dict
    #[inline]
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        buf.push(b'd');
        Self { buf }
    }

    /// `Encode` the value for given key inside this dictionary.
    #[inline]
    pub fn insert<K, E>(&mut self, key: K, value: E)
    where
        K: AsRef<[u8]>,
        E: Encode,
    {
        encode_bytes(self.buf, key);
        value.encode(self.buf);
    }

    /// Create a new `ListEncoder` for given key inside this dictionary.
    #[inline]
    pub fn insert_list(&mut self, key: impl AsRef<[u8]>) -> ListEncoder<'_> {
        encode_bytes(self.buf, key);
        self.buf.into()
    }

    /// Create a new `DictEncoder` for given key inside this dictionary.
    #[inline]
    pub fn insert_dict(&mut self, key: impl AsRef<[u8]>) -> DictEncoder<'_> {
        encode_bytes(self.buf, key);
        self.buf.into()
    }

    /// Finish building this dictionary.
    #[inline]
    pub fn finish(self) {}
}

impl Drop for DictEncoder<'_> {
    #[inline]
    fn drop(&mut self) {
        self.buf.push(b'e');
    }
}

impl<'a> From<&'a mut Vec<u8>> for ListEncoder<'a> {
    fn from(buf: &'a mut Vec<u8>) -> Self {
        Self::new(buf)
    }
}

impl<'a> From<&'a mut Vec<u8>> for DictEncoder<'a> {
    fn from(buf: &'a mut Vec<u8>) -> Self {
        Self::new(buf)
    }
}

impl Encode for Value {
    fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Integer(n) => encode_int(buf, *n),
            Self::ByteString(b) => encode_bytes(buf, b),
            Self::List(list) => list.encode(buf),
            Self::Dict(dict) => dict.encode(buf),
        }
    }
}

impl Encode for Dict {
    fn encode(&self, buf: &mut Vec<u8>) {
        let mut dict = DictEncoder::new(buf);
        for (k, v) in self {
            dict.insert(k, v);
        }
        dict.finish();
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        (**self).encode(buf);
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        self[..].encode(buf);
    }
}

impl<T: Encode> Encode for [T] {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        let mut list = ListEncoder::new(buf);
        for t in self {
            list.push(t);
        }
        list.finish();
    }
}

impl Encode for [u8] {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        encode_bytes(buf, self);
    }
}

impl<const N: usize> Encode for [u8; N] {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        encode_bytes(buf, self);
    }
}

impl Encode for str {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        encode_bytes(buf, self);
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        encode_bytes(buf, self);
    }
}

impl Encode for i64 {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) {
        encode_int(buf, *self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_integer() {
        let buf = &mut vec![];
        encode_int(buf, 10);
        assert_eq!(b"i10e", &buf[..]);
    }

    #[test]
    fn encode_negative_and_zero() {
        assert_eq!(b"i-42e", &encode(&Value::Integer(-42))[..]);
        assert_eq!(b"i0e", &encode(&Value::Integer(0))[..]);
        assert_eq!(
            &b"i-9223372036854775808e"[..],
            &encode(&Value::Integer(i64::MIN))[..]
        );
    }

    #[test]
    fn encode_str() {
        let buf = &mut vec![];
        encode_bytes(buf, "1000");
        assert_eq!(b"4:1000", &buf[..]);
        assert_eq!(b"4:spam", &encode(&Value::from("spam"))[..]);
        assert_eq!(b"0:", &encode(&Value::from(""))[..]);
    }

    #[test]
    fn encode_str_counts_bytes() {
        // Two characters, four bytes.
        assert_eq!("4:éé".as_bytes(), &encode(&Value::from("éé"))[..]);
    }

    #[test]
    fn encode_binary() {
        let v = Value::from(b"\x00\xff".to_vec());
        assert_eq!(b"2:\x00\xff", &encode(&v)[..]);
    }

    #[test]
    fn encode_dict() {
        let buf = &mut vec![];
        let mut dict = DictEncoder::new(buf);
        dict.insert("Hello", "World");
        dict.finish();
        assert_eq!(b"d5:Hello5:Worlde", &buf[..]);
    }

    #[test]
    fn encode_dict_drop() {
        let buf = &mut vec![];
        let mut dict = DictEncoder::new(buf);
        dict.insert("Hello", "World");
        drop(dict);
        assert_eq!(b"d5:Hello5:Worlde", &buf[..]);
    }

    #[test]
    fn encode_dict_keeps_insertion_order() {
        let buf = &mut vec![];
        let mut dict = DictEncoder::new(buf);
        dict.insert("b", "Hello");
        dict.insert("a", "World");
        dict.finish();
        assert_eq!(b"d1:b5:Hello1:a5:Worlde", &buf[..]);

        let mut d = Dict::new();
        d.insert("spam", "eggs");
        d.insert("cow", "moo");
        assert_eq!(
            &b"d4:spam4:eggs3:cow3:mooe"[..],
            &encode(&Value::Dict(d))[..]
        );
    }

    #[test]
    fn encode_list() {
        let buf = &mut vec![];
        let mut list = ListEncoder::new(buf);
        list.push("Hello");
        list.push("World");
        list.push(123);
        list.finish();
        assert_eq!(b"l5:Hello5:Worldi123ee", &buf[..]);
    }

    #[test]
    fn encode_list_drop() {
        let buf = &mut vec![];
        let mut list = ListEncoder::new(buf);
        list.push("Hello");
        list.push("World");
        list.push(123);
        drop(list);
        assert_eq!(b"l5:Hello5:Worldi123ee", &buf[..]);
    }

    #[test]
    fn encode_nested_encoders() {
        let buf = &mut vec![];
        let mut list = ListEncoder::new(buf);
        list.push(100);
        let mut dict = list.push_dict();
        dict.insert("x", &b"y"[..]);
        dict.insert_list("z").push(1);
        dict.finish();
        list.push_list().finish();
        list.finish();
        assert_eq!(&b"li100ed1:x1:y1:zli1eeelee"[..], &buf[..]);
    }

    #[test]
    fn encode_value_tree() {
        let mut info = Dict::new();
        info.insert("name", "a.txt");
        info.insert("length", 12i64);

        let v = Value::List(vec![
            Value::Integer(1),
            Value::from("two"),
            Value::Dict(info),
            Value::List(vec![]),
        ]);
        assert_eq!(
            &b"li1e3:twod4:name5:a.txt6:lengthi12eelee"[..],
            &encode(&v)[..]
        );
    }

    #[test]
    fn encode_torrent_shaped_stream() {
        let buf = &mut vec![];
        let mut root = DictEncoder::new(buf);
        root.insert("announce", "udp://tracker:80");
        {
            let mut info = root.insert_dict("info");
            info.insert("name", "a.txt");
            info.insert("piece length", 16384i64);
            info.insert("pieces", [0xaau8; 20]);
            let mut files = info.insert_list("files");
            files.push(vec![Value::Integer(3)]);
        }
        root.insert("comment", String::from("x"));
        root.finish();

        let mut expected = b"d8:announce16:udp://tracker:804:infod4:name5:a.txt".to_vec();
        expected.extend(b"12:piece lengthi16384e6:pieces20:");
        expected.extend(&[0xaa; 20]);
        expected.extend(b"5:filesli3eeee7:comment1:xe");
        assert_eq!(expected, *buf);

        let value = crate::decode(buf).unwrap();
        let info = value.as_dict().unwrap().get_dict("info").unwrap();
        let keys: Vec<_> = info.iter().map(|(k, _)| k).collect();
        assert_eq!(
            vec![&b"name"[..], &b"piece length"[..], &b"pieces"[..], &b"files"[..]],
            keys
        );
    }
}
