//! Attribute system for stanza, node and graph metadata.
//!
//! OBO tags are either singular (one text value) or repeatable (an ordered list of
//! text values). The graph additionally stores whole stanza mappings as records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value stored under one attribute key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Value of a singular tag
    Text(String),
    /// Values of a repeatable tag, in file order, duplicates kept
    TextList(Vec<String>),
    /// Sequence of stanza mappings (typedefs, instances)
    Records(Vec<AttrMap>),
}

impl AttrValue {
    /// Consume the value as a single string.
    ///
    /// A list yields its last element, matching last-write-wins for singular tags.
    pub fn into_text(self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::TextList(mut list) => list.pop(),
            AttrValue::Records(_) => None,
        }
    }

    /// Consume the value as a list of strings.
    pub fn into_text_list(self) -> Vec<String> {
        match self {
            AttrValue::Text(s) => vec![s],
            AttrValue::TextList(list) => list,
            AttrValue::Records(_) => Vec::new(),
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Text(_) => "text",
            AttrValue::TextList(_) => "text list",
            AttrValue::Records(_) => "records",
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::TextList(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::TextList(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<AttrMap>> for AttrValue {
    fn from(value: Vec<AttrMap>) -> Self {
        AttrValue::Records(value)
    }
}

/// Key-value metadata keyed by tag name.
///
/// Provides a builder and type-safe getters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrMap {
    data: HashMap<String, AttrValue>,
}

impl AttrMap {
    /// Create a new empty attribute map.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Builder pattern: add an attribute and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Insert an attribute, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.data.insert(key.into(), value.into());
    }

    /// Append a text value to the list stored under `key`.
    ///
    /// The list is created on first use. A single text value already stored under
    /// the key becomes the first element of the list.
    pub fn push_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let slot = self
            .data
            .entry(key.into())
            .or_insert_with(|| AttrValue::TextList(Vec::new()));
        match slot {
            AttrValue::TextList(list) => list.push(value),
            AttrValue::Text(existing) => {
                let first = std::mem::take(existing);
                *slot = AttrValue::TextList(vec![first, value]);
            }
            AttrValue::Records(_) => *slot = AttrValue::TextList(vec![value]),
        }
    }

    /// Get an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.data.get(key)
    }

    /// Remove an attribute by key.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.data.remove(key)
    }

    /// Check if an attribute exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.data.iter()
    }

    /// Merge `other` into this map; values from `other` win.
    pub fn extend(&mut self, other: AttrMap) {
        self.data.extend(other.data);
    }

    /// Type-safe getter for singular text attributes.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.data.get(key) {
            Some(AttrValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Type-safe getter for repeatable text attributes.
    pub fn get_text_list(&self, key: &str) -> Option<&[String]> {
        match self.data.get(key) {
            Some(AttrValue::TextList(list)) => Some(list),
            _ => None,
        }
    }

    /// Type-safe getter for record sequences.
    pub fn get_records(&self, key: &str) -> Option<&[AttrMap]> {
        match self.data.get(key) {
            Some(AttrValue::Records(records)) => Some(records),
            _ => None,
        }
    }
}

impl FromIterator<(String, AttrValue)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
        Self {
            data: HashMap::from_iter(iter),
        }
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, AttrValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
