//! The API Blueprint abstract syntax tree.
//!
//! The tree is rooted at [`Blueprint`] and owned top-down: every node is
//! exclusively owned by its parent. The only cross-link between nodes is a
//! [`Reference`], which names a resource model by identifier and is resolved
//! by lookup ([`Blueprint::find_model`]) rather than by pointer.
//!
//! Field names serialize to the camel-cased keys of the API Blueprint AST
//! media type. Keys that are optional in that format deserialize to their
//! empty default; `name`, `description`, `uriTemplate` and `method` are
//! required where they apply.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    collection::{Headers, Metadata},
    identifier::eq_ignore_case,
};

/// The root of a parsed API Blueprint document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    #[serde(default)]
    pub metadata: Metadata,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub resource_groups: Vec<ResourceGroup>,
}

impl Blueprint {
    /// Iterate over every resource of every group, in document order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resource_groups
            .iter()
            .flat_map(|group| group.resources.iter())
    }

    /// Find the model payload registered under `id`.
    ///
    /// Models are named after the resource that declares them; the lookup
    /// ignores case and returns the first declaration.
    pub fn find_model(&self, id: &str) -> Option<&Payload> {
        let model = self
            .resources()
            .filter(|resource| !resource.name.is_empty() && eq_ignore_case(&resource.name, id))
            .map(|resource| &resource.model)
            .find(|model| !model.is_empty());
        trace!(id, found = model.is_some(); "Model lookup");
        model
    }
}

/// A named group of resources.
///
/// Resources declared before any explicit group belong to an implicit group
/// with an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// An HTTP resource identified by a URI template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    pub description: String,
    /// RFC 6570 URI template. Always starts with `/` in a successful parse.
    pub uri_template: String,
    /// The resource model; an empty payload when none is declared.
    #[serde(default)]
    pub model: Payload,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// An HTTP transaction on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub name: String,
    pub description: String,
    /// HTTP method, as written in the source.
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub examples: Vec<TransactionExample>,
}

impl Action {
    /// Iterate over the responses of every transaction example.
    pub fn responses(&self) -> impl Iterator<Item = &Payload> {
        self.examples
            .iter()
            .flat_map(|example| example.responses.iter())
    }
}

/// Whether a URI parameter must be supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterUse {
    /// Neither `required` nor `optional` was written.
    ///
    /// API Blueprint treats an undefined parameter as required; the
    /// distinction is kept so consumers can tell the two apart.
    #[default]
    Undefined,
    Required,
    Optional,
}

/// A URI template parameter description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    /// Free-form type name, empty when the source gives none.
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(rename = "use", default)]
    pub usage: ParameterUse,
    #[serde(rename = "default", default)]
    pub default_value: String,
    #[serde(rename = "example", default)]
    pub example_value: String,
    /// Enumerated legal values, in declaration order.
    #[serde(default)]
    pub values: Vec<ParameterValue>,
}

impl Parameter {
    /// The declared type, falling back to `string` when none was given.
    pub fn type_or_default(&self) -> &str {
        if self.type_name.is_empty() {
            "string"
        } else {
            &self.type_name
        }
    }

    /// Returns `true` if `value` is allowed by the enumerated values.
    ///
    /// A parameter without enumerated values accepts anything.
    pub fn accepts(&self, value: &str) -> bool {
        self.values.is_empty() || self.values.iter().any(|v| v.value == value)
    }
}

/// One enumerated value of a [`Parameter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: String,
}

impl ParameterValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The role a [`Payload`] plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Model,
    Request,
    Response,
}

impl PayloadKind {
    /// The keyword that introduces this payload in a blueprint.
    pub fn keyword(&self) -> &'static str {
        match self {
            PayloadKind::Model => "Model",
            PayloadKind::Request => "Request",
            PayloadKind::Response => "Response",
        }
    }
}

/// A model, request or response body with its headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Request name, response status code or model name.
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub schema: String,
    /// Set when the payload only refers to a named model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

impl Payload {
    /// Returns `true` if nothing was declared for this payload.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.headers.is_empty()
            && self.body.is_empty()
            && self.schema.is_empty()
            && self.reference.is_none()
    }
}

/// A link to a resource model by its identifier, written `[Identifier][]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
}

impl Reference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A set of requests paired with the responses they produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionExample {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub requests: Vec<Payload>,
    #[serde(default)]
    pub responses: Vec<Payload>,
}
