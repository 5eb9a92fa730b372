//! TEXT segment parsing
//!
//! The first byte of the segment is the delimiter; the rest is a flat
//! `key<d>value<d>key<d>value...` sequence.
//!
//! FCS allows a doubled delimiter to stand for one literal delimiter inside a
//! keyword or value. That escape is NOT handled here: every delimiter byte is
//! a split point, so segments using the escape produce shifted key/value
//! pairs. Handling it would change which strings end up in the map for any
//! value containing the delimiter.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::{LxbError, Result};

/// Keyword/value metadata in encounter order
///
/// Re-inserting an existing key replaces its value and keeps its original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MetadataMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Exact-match lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Lookup parsed as a base-10 integer
    ///
    /// Surrounding whitespace is ignored; anything else that is not an integer
    /// yields `None`.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(parse_int)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no keywords
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate keywords in encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back into a TEXT segment using `delimiter`
    ///
    /// Keys and values are written verbatim, so any that contain the
    /// delimiter will not survive a re-parse.
    pub fn to_text_segment(&self, delimiter: u8) -> Vec<u8> {
        let mut out = vec![delimiter];
        for (key, value) in &self.entries {
            out.extend_from_slice(key.as_bytes());
            out.push(delimiter);
            out.extend_from_slice(value.as_bytes());
            out.push(delimiter);
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MetadataMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for MetadataMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Parse a trimmed base-10 integer
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parse a TEXT segment into keyword/value pairs
///
/// A trailing key without a value is dropped.
pub fn parse_text(text: &[u8]) -> Result<MetadataMap> {
    if text.len() < 2 {
        return Err(LxbError::SegmentTooSmall { size: text.len() });
    }

    let delimiter = text[0];
    let mut tokens = text[1..]
        .split(|&b| b == delimiter)
        .map(|t| String::from_utf8_lossy(t).into_owned());

    let mut map = MetadataMap::new();
    while let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
        map.insert(key, value);
    }
    Ok(map)
}
