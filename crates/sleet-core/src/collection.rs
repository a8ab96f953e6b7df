//! Ordered key-value collections.
//!
//! Blueprint metadata and HTTP headers are both ordered lists of
//! `(name, value)` pairs where keys may repeat. Insertion order is kept
//! exactly and lookups are case-insensitive, returning the first match.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::identifier::eq_ignore_case;

/// A single `(name, value)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub name: String,
    pub value: String,
}

impl KeyValue {
    /// Create a new pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

macro_rules! key_value_collection {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Vec<KeyValue>);

        impl $name {
            /// Create an empty collection.
            pub fn new() -> Self {
                Self::default()
            }

            /// Append a pair, keeping any earlier pair with the same key.
            pub fn push(&mut self, entry: KeyValue) {
                self.0.push(entry);
            }

            /// Look up the value of `key`, ignoring case.
            ///
            /// When the key repeats, the first occurrence wins.
            pub fn get(&self, key: &str) -> Option<&str> {
                self.0
                    .iter()
                    .find(|entry| eq_ignore_case(&entry.name, key))
                    .map(|entry| entry.value.as_str())
            }

            /// Returns `true` if any pair has the given key, ignoring case.
            pub fn contains_key(&self, key: &str) -> bool {
                self.get(key).is_some()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, KeyValue> {
                self.0.iter()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn as_slice(&self) -> &[KeyValue] {
                &self.0
            }
        }

        impl Index<usize> for $name {
            type Output = KeyValue;

            fn index(&self, index: usize) -> &KeyValue {
                &self.0[index]
            }
        }

        impl FromIterator<KeyValue> for $name {
            fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a KeyValue;
            type IntoIter = std::slice::Iter<'a, KeyValue>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

key_value_collection!(
    /// Document-level `key: value` metadata, e.g. `FORMAT: 1A`.
    Metadata
);

key_value_collection!(
    /// HTTP headers of a payload.
    Headers
);

impl Headers {
    /// The `Content-Type` header value, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.get("Content-Type")
    }
}
