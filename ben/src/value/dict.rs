use std::collections::HashMap;
use std::fmt;

use super::Value;

/// A Bencode dictionary.
///
/// Entries are kept in the order they were inserted and are encoded in that
/// same order. Keys are never sorted.
#[derive(Clone, Default, PartialEq)]
pub struct Dict {
    entries: Vec<(Vec<u8>, Value)>,
    // key -> position in `entries`
    index: HashMap<Vec<u8>, usize>,
}

struct Key<'a>(&'a [u8]);

impl fmt::Debug for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.0) {
            Ok(s) => write!(f, "{:?}", s),
            Err(_) => write!(f, "<{}>", data_encoding::HEXLOWER.encode(self.0)),
        }
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (Key(k), v)))
            .finish()
    }
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair and returns the previous value of the key.
    ///
    /// A key that is already present keeps its position; only the value is
    /// replaced.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// use ben::Dict;
    ///
    /// let mut dict = Dict::new();
    /// dict.insert("b", 1i64);
    /// dict.insert("a", 2i64);
    /// assert_eq!(Some(ben::Value::Integer(1)), dict.insert("b", 3i64));
    ///
    /// let keys: Vec<_> = dict.iter().map(|(k, _)| k).collect();
    /// assert_eq!(vec![&b"b"[..], &b"a"[..]], keys);
    /// assert_eq!(Some(3), dict.get_int("b"));
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<Vec<u8>>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes a key and returns its value, keeping the order of the rest.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Value> {
        let i = self.index.remove(key.as_ref())?;
        for pos in self.index.values_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(self.entries.remove(i).1)
    }

    /// Returns the `Value` for the given key.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let i = self.position(key.as_ref())?;
        Some(&self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Value> {
        let i = self.position(key.as_ref())?;
        Some(&mut self.entries[i].1)
    }

    /// Returns the `Dict` for the given key.
    pub fn get_dict(&self, key: impl AsRef<[u8]>) -> Option<&Dict> {
        self.get(key)?.as_dict()
    }

    /// Returns the list for the given key.
    pub fn get_list(&self, key: impl AsRef<[u8]>) -> Option<&[Value]> {
        self.get(key)?.as_list()
    }

    /// Returns the byte slice for the given key.
    pub fn get_bytes(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.get(key)?.as_bytes()
    }

    /// Returns the string slice for the given key.
    pub fn get_str(&self, key: impl AsRef<[u8]>) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Returns the integer for the given key.
    pub fn get_int(&self, key: impl AsRef<[u8]>) -> Option<i64> {
        self.get(key)?.as_int()
    }

    /// Gets an iterator over the entries of the dictionary, in order.
    pub fn iter(&self) -> DictIter<'_> {
        DictIter {
            iter: self.entries.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &[u8]) -> Option<usize> {
        self.index.get(key).copied()
    }
}

pub struct DictIter<'a> {
    iter: std::slice::Iter<'a, (Vec<u8>, Value)>,
}

impl<'a> Iterator for DictIter<'a> {
    type Item = (&'a [u8], &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.iter.next()?;
        Some((k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for DictIter<'_> {}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a [u8], &'a Value);
    type IntoIter = DictIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Dict {
    type Item = (Vec<u8>, Value);
    type IntoIter = std::vec::IntoIter<(Vec<u8>, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Dict
where
    K: Into<Vec<u8>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let dict: Dict = vec![("z", 1i64), ("a", 2), ("m", 3)].into_iter().collect();
        let keys: Vec<_> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(vec![&b"z"[..], &b"a"[..], &b"m"[..]], keys);
    }

    #[test]
    fn duplicate_key_last_wins() {
        let dict: Dict = vec![("a", 1i64), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(2, dict.len());
        assert_eq!(Some(3), dict.get_int("a"));
        assert_eq!(Some(&b"a"[..]), dict.iter().next().map(|(k, _)| k));
    }

    #[test]
    fn remove_keeps_order() {
        let mut dict: Dict = vec![("a", 1i64), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(Some(Value::Integer(2)), dict.remove("b"));
        assert_eq!(None, dict.remove("b"));
        let keys: Vec<_> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(vec![&b"a"[..], &b"c"[..]], keys);
    }

    #[test]
    fn remove_then_insert() {
        let mut dict: Dict = vec![("a", 1i64), ("b", 2), ("c", 3)].into_iter().collect();
        dict.remove("a");
        assert_eq!(Some(3), dict.get_int("c"));
        dict.insert("a", 4i64);
        dict.insert("c", 5i64);

        let entries: Vec<_> = dict.iter().map(|(k, v)| (k, v.as_int())).collect();
        assert_eq!(
            vec![(&b"b"[..], Some(2)), (&b"c"[..], Some(5)), (&b"a"[..], Some(4))],
            entries
        );
    }

    #[test]
    fn many_keys() {
        let n = 100_000i64;
        let mut dict = Dict::new();
        for i in 0..n {
            dict.insert(format!("{:08}", i), i);
        }
        for i in 0..n {
            dict.insert(format!("{:08}", i), -i);
        }
        assert_eq!(n as usize, dict.len());
        assert_eq!(Some(-777), dict.get_int("00000777"));
        assert_eq!(Some(&b"00000000"[..]), dict.iter().next().map(|(k, _)| k));
    }

    #[test]
    fn typed_getters() {
        let mut inner = Dict::new();
        inner.insert("x", "y");

        let mut dict = Dict::new();
        dict.insert("n", 7i64);
        dict.insert("s", "str");
        dict.insert("l", vec![Value::Integer(1)]);
        dict.insert("d", inner);

        assert_eq!(Some(7), dict.get_int("n"));
        assert_eq!(None, dict.get_str("n"));
        assert_eq!(Some("str"), dict.get_str("s"));
        assert_eq!(Some(&b"str"[..]), dict.get_bytes(b"s"));
        assert_eq!(1, dict.get_list("l").unwrap().len());
        assert_eq!(Some("y"), dict.get_dict("d").unwrap().get_str("x"));
        assert!(dict.get("missing").is_none());
    }

    #[test]
    fn get_mut_replaces_in_place() {
        let mut dict = Dict::new();
        dict.insert("a", 1i64);
        dict.insert("b", 2i64);
        *dict.get_mut("a").unwrap() = Value::from("one");
        assert_eq!(Some("one"), dict.get_str("a"));
        assert_eq!(Some(&b"a"[..]), dict.iter().next().map(|(k, _)| k));
    }
}
