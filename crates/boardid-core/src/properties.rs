//! Insertion-ordered dotted-key property maps.
//!
//! The shared value container for board configuration and runtime
//! identification input. Keys are dotted paths (`vid.0`, `upload.tool`),
//! values are plain strings. No matching logic lives here.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{CatalogError, Result};

/// An ordered mapping from dotted string keys to string values.
///
/// Keys are unique; re-inserting an existing key overwrites the value in
/// place, preserving the key's original position. Iteration follows
/// insertion order, which is what makes catalog enumeration (and
/// therefore identification output) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Create an empty property map.
    pub fn new() -> Self {
        PropertyMap::default()
    }

    /// Parse the dotted-key text format used by hardware definition files.
    ///
    /// One `key=value` pair per line. Lines starting with `#` and blank
    /// lines are ignored. Whitespace around the key is trimmed; the value
    /// is everything after the first `=`, taken verbatim.
    pub fn parse(input: &str) -> Result<Self> {
        let mut map = PropertyMap::new();
        for (idx, line) in input.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(CatalogError::MalformedLine {
                    line: idx + 1,
                    text: trimmed.to_string(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(CatalogError::MalformedLine {
                    line: idx + 1,
                    text: trimmed.to_string(),
                });
            }
            map.insert(key, value);
        }
        Ok(map)
    }

    /// Look up a value by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert a key/value pair.
    ///
    /// If the key already exists its value is replaced in place.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Extract the sub-map of keys under `prefix.`, with the prefix
    /// stripped, preserving order.
    ///
    /// `sub_tree("uno")` on `{uno.name=Uno, uno.vid.0=0x2341, nano.name=Nano}`
    /// yields `{name=Uno, vid.0=0x2341}`.
    pub fn sub_tree(&self, prefix: &str) -> PropertyMap {
        let mut sub = PropertyMap::new();
        for (key, value) in self.iter() {
            if let Some(rest) = key.strip_prefix(prefix) {
                if let Some(stripped) = rest.strip_prefix('.') {
                    if !stripped.is_empty() {
                        sub.insert(stripped, value);
                    }
                }
            }
        }
        sub
    }

    /// The ordered, deduplicated first dotted segments of all keys.
    ///
    /// For a boards definition file these are the board identifiers, in
    /// declaration order.
    pub fn first_level_keys(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for (key, _) in self.iter() {
            let first = key.split('.').next().unwrap_or(key);
            if !seen.contains(&first) {
                seen.push(first);
            }
        }
        seen
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
