//! Signature grammars.
//!
//! A blueprint section is introduced by a one-line signature: a heading such
//! as `## Note [/notes/{id}]`, or the first line of a list item such as
//! `+ Response 200 (application/json)`. This module recognises those lines
//! and the short line grammars used inside sections (parameters, headers,
//! metadata, references and enumerated values).
//!
//! Every grammar works on a single, already-extracted line and must consume
//! it completely; a line that does not match is reported as unrecognised and
//! left to the section parser to diagnose.

use winnow::{
    ascii::{space0, space1},
    combinator::{alt, delimited, eof, opt, peek, preceded, separated_pair, terminated},
    prelude::*,
    token::{rest, take_till, take_while},
};

use sleet_core::ast::PayloadKind;

/// HTTP methods recognised in action signatures.
pub(crate) const HTTP_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "CONNECT", "TRACE", "LINK",
    "UNLINK",
];

/// What a heading introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadingSignature<'s> {
    /// `Group <name>`. The name is the full heading text.
    Group { name: &'s str },
    /// `<name> [<uri>]` or `/<uri>`. The template is not validated here.
    Resource { name: &'s str, uri: &'s str },
    /// `<METHOD> /<uri>`: a resource and its only action.
    ResourceAction { method: &'s str, uri: &'s str },
    /// `<METHOD>` or `<name> [<METHOD>]`, optionally `[<METHOD> <uri>]`.
    Action {
        name: &'s str,
        method: &'s str,
        uri: Option<&'s str>,
    },
    /// Any other heading.
    Other,
}

impl HeadingSignature<'_> {
    /// Returns `true` for headings that open a group, resource or action.
    pub fn is_section(&self) -> bool {
        !matches!(self, HeadingSignature::Other)
    }
}

/// What a list item introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemSignature<'s> {
    Payload {
        kind: PayloadKind,
        name: &'s str,
        media_type: Option<&'s str>,
    },
    Parameters,
    Values,
    Headers,
    Body,
    Schema,
    Other,
}

impl ItemSignature<'_> {
    pub fn is_keyword(&self) -> bool {
        !matches!(self, ItemSignature::Other)
    }
}

/// A parsed parameter line:
/// ``<name> [= `<default>`] [(<attributes>)] [... <description>]``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParameterSignature<'s> {
    pub name: &'s str,
    pub default_value: Option<&'s str>,
    pub attributes: Option<&'s str>,
    pub description: &'s str,
}

/// Classify the text of a heading.
pub(crate) fn heading(text: &str) -> HeadingSignature<'_> {
    let text = text.trim();
    alt((group, resource_action, method_only, named_bracket, bare_uri))
        .parse(text)
        .unwrap_or(HeadingSignature::Other)
}

/// Classify the text after a list marker.
pub(crate) fn item(text: &str) -> ItemSignature<'_> {
    let text = text.trim();
    alt((keyword_section, payload))
        .parse(text)
        .unwrap_or(ItemSignature::Other)
}

/// Parse a parameter line.
pub(crate) fn parameter(text: &str) -> Option<ParameterSignature<'_>> {
    parameter_line.parse(text.trim()).ok()
}

/// Parse a `Name: value` header line.
pub(crate) fn header(text: &str) -> Option<(&str, &str)> {
    header_line.parse(text.trim()).ok()
}

/// Parse a `key: value` metadata line.
pub(crate) fn metadata(text: &str) -> Option<(&str, &str)> {
    metadata_line.parse(text.trim()).ok()
}

/// Parse a model reference `[Identifier][]`.
pub(crate) fn reference(text: &str) -> Option<&str> {
    reference_line.parse(text.trim()).ok()
}

/// Parse a backtick-quoted enumerated value.
pub(crate) fn value(text: &str) -> Option<&str> {
    terminated(backticked, (space0, eof)).parse(text.trim()).ok()
}

/// Returns `true` if the text after a list marker starts with a payload
/// keyword, whether or not the rest of the signature is well formed.
pub(crate) fn is_payload_keyword(text: &str) -> bool {
    let mut input = text.trim();
    payload_kind(&mut input).is_ok()
}

/// Returns `true` if `text` is a recognised HTTP method.
pub(crate) fn is_http_method(text: &str) -> bool {
    HTTP_METHODS.contains(&text)
}

fn http_method<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_uppercase())
        .verify(|method: &str| is_http_method(method))
        .parse_next(input)
}

fn uri_token<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| !c.is_whitespace())
        .verify(|uri: &str| uri.starts_with('/'))
        .parse_next(input)
}

fn backticked<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited('`', take_till(0.., '`'), '`').parse_next(input)
}

fn header_line<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(
        take_while(1.., |c: char| c.is_ascii_graphic() && c != ':'),
        (':', space0),
        rest,
    )
    .map(|(name, value): (&str, &str)| (name, value.trim_end()))
    .parse_next(input)
}

fn metadata_line<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(
        take_while(1.., |c: char| !c.is_whitespace() && c != ':'),
        (':', space0),
        rest,
    )
    .map(|(key, value): (&str, &str)| (key, value.trim_end()))
    .parse_next(input)
}

fn reference_line<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(
        delimited('[', take_till(1.., ']'), ']'),
        ("[]", space0, eof),
    )
    .map(str::trim)
    .verify(|id: &str| !id.is_empty())
    .parse_next(input)
}

fn group<'s>(input: &mut &'s str) -> ModalResult<HeadingSignature<'s>> {
    ("Group", space1, rest)
        .take()
        .map(|name| HeadingSignature::Group { name })
        .parse_next(input)
}

fn resource_action<'s>(input: &mut &'s str) -> ModalResult<HeadingSignature<'s>> {
    terminated((http_method, space1, uri_token), eof)
        .map(|(method, _, uri)| HeadingSignature::ResourceAction { method, uri })
        .parse_next(input)
}

fn method_only<'s>(input: &mut &'s str) -> ModalResult<HeadingSignature<'s>> {
    terminated(http_method, eof)
        .map(|method| HeadingSignature::Action {
            name: "",
            method,
            uri: None,
        })
        .parse_next(input)
}

fn named_bracket<'s>(input: &mut &'s str) -> ModalResult<HeadingSignature<'s>> {
    (
        take_till(0.., '['),
        delimited('[', take_till(0.., ']'), ']'),
        space0,
        eof,
    )
        .map(|(name, contents, _, _): (&str, &str, &str, &str)| {
            bracket_signature(name.trim(), contents.trim())
        })
        .parse_next(input)
}

fn bracket_signature<'s>(name: &'s str, contents: &'s str) -> HeadingSignature<'s> {
    if is_http_method(contents) {
        return HeadingSignature::Action {
            name,
            method: contents,
            uri: None,
        };
    }
    if let Some((method, uri)) = contents.split_once(char::is_whitespace) {
        if is_http_method(method) {
            return HeadingSignature::Action {
                name,
                method,
                uri: Some(uri.trim()),
            };
        }
    }
    HeadingSignature::Resource {
        name,
        uri: contents,
    }
}

fn bare_uri<'s>(input: &mut &'s str) -> ModalResult<HeadingSignature<'s>> {
    terminated(uri_token, eof)
        .map(|uri| HeadingSignature::Resource { name: "", uri })
        .parse_next(input)
}

fn keyword_section<'s>(input: &mut &'s str) -> ModalResult<ItemSignature<'s>> {
    terminated(
        alt((
            "Parameters".value(ItemSignature::Parameters),
            "Values".value(ItemSignature::Values),
            "Headers".value(ItemSignature::Headers),
            "Body".value(ItemSignature::Body),
            "Schema".value(ItemSignature::Schema),
        )),
        eof,
    )
    .parse_next(input)
}

fn payload_kind(input: &mut &str) -> ModalResult<PayloadKind> {
    terminated(
        alt((
            "Request".value(PayloadKind::Request),
            "Response".value(PayloadKind::Response),
            "Model".value(PayloadKind::Model),
        )),
        peek(alt((eof, space1, "("))),
    )
    .parse_next(input)
}

fn payload<'s>(input: &mut &'s str) -> ModalResult<ItemSignature<'s>> {
    let kind = payload_kind(input)?;

    let (_, name, media_type, _, _) = (
        space0,
        take_till(0.., '('),
        opt(delimited('(', take_till(0.., ')'), ')')),
        space0,
        eof,
    )
        .parse_next(input)?;

    Ok(ItemSignature::Payload {
        kind,
        name: name.trim(),
        media_type: media_type.map(str::trim).filter(|media| !media.is_empty()),
    })
}

fn parameter_line<'s>(input: &mut &'s str) -> ModalResult<ParameterSignature<'s>> {
    let name = take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '%')
    })
    .parse_next(input)?;
    let default_value = opt(preceded((space0, '=', space0), backticked)).parse_next(input)?;
    let attributes = opt(preceded(space0, delimited('(', take_till(0.., ')'), ')')))
        .parse_next(input)?;
    let description = opt(preceded((space0, "..."), rest)).parse_next(input)?;
    (space0, eof).parse_next(input)?;

    Ok(ParameterSignature {
        name,
        default_value,
        attributes,
        description: description.map_or("", str::trim),
    })
}
