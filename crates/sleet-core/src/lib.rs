//! Sleet Core Types
//!
//! This crate provides the data model shared by the sleet API Blueprint
//! parser and its consumers:
//!
//! - **AST**: the value tree of a parsed blueprint ([`ast`] module)
//! - **Identifiers**: the case-insensitive comparison used for names and keys ([`identifier`] module)
//! - **Collections**: ordered key-value lists for metadata and headers ([`collection`] module)
//! - **Source maps**: byte-range provenance mirroring the AST ([`sourcemap`] module)
//! - **Nodes**: a uniform, borrowing view over AST nodes ([`node`] module)
//!
//! Every type implements `serde::Serialize` and `serde::Deserialize` with the
//! camel-cased keys of the API Blueprint AST media type.

pub mod ast;
pub mod collection;
pub mod identifier;
pub mod node;
pub mod sourcemap;

/// Version of the AST serialization format produced by this crate.
pub const AST_VERSION: &str = "2.0";
