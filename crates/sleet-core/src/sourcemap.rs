//! Source maps: byte-range provenance for every AST field.
//!
//! The source-map tree has exactly the shape of the [AST](crate::ast): the
//! same node types, the same collection lengths and the same order. Each
//! scalar field of the AST corresponds to a [`SourceMap`], an ordered list of
//! [`SourceLocation`]s into the original source text. A field that did not
//! come from the source (for example an absent description) maps to an empty
//! list.
//!
//! A [`SourceLocation`] serializes as a two-element array
//! `[offset, length]`, so a field serializes as `[[offset, length], ...]`.

use serde::{Deserialize, Serialize};

/// A byte range into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct SourceLocation {
    pub offset: usize,
    pub length: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// The offset one past the last byte.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl From<(usize, usize)> for SourceLocation {
    fn from((offset, length): (usize, usize)) -> Self {
        Self { offset, length }
    }
}

impl From<SourceLocation> for (usize, usize) {
    fn from(location: SourceLocation) -> Self {
        (location.offset, location.length)
    }
}

/// The ordered source ranges one AST field was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceMap(Vec<SourceLocation>);

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location.
    ///
    /// Empty locations are dropped and a location starting where the previous
    /// one ends is merged into it.
    pub fn push(&mut self, location: SourceLocation) {
        if location.is_empty() {
            return;
        }
        match self.0.last_mut() {
            Some(last) if last.end() == location.offset => last.length += location.length,
            _ => self.0.push(location),
        }
    }

    /// Append every location of `other`.
    pub fn extend(&mut self, other: &SourceMap) {
        for location in other.iter() {
            self.push(*location);
        }
    }

    pub fn locations(&self) -> &[SourceLocation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceLocation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate the source text covered by this map.
    ///
    /// Locations outside `source` or not on character boundaries are skipped.
    pub fn text(&self, source: &str) -> String {
        self.0
            .iter()
            .filter_map(|location| source.get(location.offset..location.end()))
            .collect()
    }
}

impl From<SourceLocation> for SourceMap {
    fn from(location: SourceLocation) -> Self {
        let mut map = SourceMap::new();
        map.push(location);
        map
    }
}

impl FromIterator<SourceLocation> for SourceMap {
    fn from_iter<I: IntoIterator<Item = SourceLocation>>(iter: I) -> Self {
        let mut map = SourceMap::new();
        for location in iter {
            map.push(location);
        }
        map
    }
}

/// Source map of a [`Blueprint`](crate::ast::Blueprint).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlueprintSourceMap {
    /// One entry per metadata pair.
    pub metadata: Vec<SourceMap>,
    pub name: SourceMap,
    pub description: SourceMap,
    pub resource_groups: Vec<ResourceGroupSourceMap>,
}

/// Source map of a [`ResourceGroup`](crate::ast::ResourceGroup).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceGroupSourceMap {
    pub name: SourceMap,
    pub description: SourceMap,
    pub resources: Vec<ResourceSourceMap>,
}

/// Source map of a [`Resource`](crate::ast::Resource).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSourceMap {
    pub name: SourceMap,
    pub description: SourceMap,
    pub uri_template: SourceMap,
    pub model: PayloadSourceMap,
    pub parameters: Vec<ParameterSourceMap>,
    pub actions: Vec<ActionSourceMap>,
}

/// Source map of an [`Action`](crate::ast::Action).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionSourceMap {
    pub name: SourceMap,
    pub description: SourceMap,
    pub method: SourceMap,
    pub parameters: Vec<ParameterSourceMap>,
    pub examples: Vec<TransactionExampleSourceMap>,
}

/// Source map of a [`Parameter`](crate::ast::Parameter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSourceMap {
    pub name: SourceMap,
    pub description: SourceMap,
    #[serde(rename = "type")]
    pub type_name: SourceMap,
    #[serde(rename = "use")]
    pub usage: SourceMap,
    #[serde(rename = "default")]
    pub default_value: SourceMap,
    #[serde(rename = "example")]
    pub example_value: SourceMap,
    pub values: Vec<ParameterValueSourceMap>,
}

/// Source map of a [`ParameterValue`](crate::ast::ParameterValue).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterValueSourceMap {
    pub value: SourceMap,
}

/// Source map of a [`Payload`](crate::ast::Payload).
///
/// Unlike the AST, `reference` is always present and empty when the payload
/// does not refer to a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadSourceMap {
    pub name: SourceMap,
    pub description: SourceMap,
    /// One entry per header.
    pub headers: Vec<SourceMap>,
    pub body: SourceMap,
    pub schema: SourceMap,
    pub reference: SourceMap,
}

/// Source map of a [`TransactionExample`](crate::ast::TransactionExample).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionExampleSourceMap {
    pub name: SourceMap,
    pub description: SourceMap,
    pub requests: Vec<PayloadSourceMap>,
    pub responses: Vec<PayloadSourceMap>,
}
