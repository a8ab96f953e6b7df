//! Unit tests for the section parsers.
//!
//! These tests run whole documents through [`crate::parse`] and check the
//! resulting AST, source map and diagnostics.

use sleet_core::{
    ast::{Blueprint, ParameterUse},
    sourcemap::{BlueprintSourceMap, SourceLocation, SourceMap},
};

use crate::{
    ParseOptions, ParseOutcome,
    error::{Diagnostic, ErrorCode, WarningCode},
    parse,
};

const FULL: &str = concat!(
    "FORMAT: 1A\n\n",
    "# My API\n",
    "**description**\n\n",
    "# Group Name\n",
    "_description_\n\n",
    "## My Resource [/resource]\n",
    "Resource description\n\n",
    "+ Model (text/plain)\n\n",
    "        Hello World\n\n",
    "### Retrieve Resource [GET]\n",
    "Method description\n\n",
    "+ Response 200 (text/plain)\n\n",
    "    Response description\n\n",
    "    + Headers\n\n",
    "            X-Response-Header: Fighter\n\n",
    "    + Body\n\n",
    "            Hello World\n",
);

/// Helper function to parse with the source map exported
fn parse_with_map(source: &str) -> (Blueprint, BlueprintSourceMap, ParseOutcome) {
    let outcome = parse(source, ParseOptions::default().with_export_sourcemap(true));
    let ast = outcome.ast.clone();
    let map = outcome
        .sourcemap
        .clone()
        .expect("source map should be exported");
    (ast, map, outcome)
}

/// Helper function to collect warning codes in emission order
fn warning_codes(outcome: &ParseOutcome) -> Vec<u32> {
    outcome
        .diagnostics
        .warnings
        .iter()
        .map(Diagnostic::code_value)
        .collect()
}

/// Helper function to assert a single warning with the given code
fn assert_single_warning(source: &str, code: WarningCode) -> Diagnostic {
    let outcome = parse(source, ParseOptions::default());
    assert!(outcome.diagnostics.is_ok(), "Unexpected error: {:?}", outcome.diagnostics.error);
    assert_eq!(
        warning_codes(&outcome),
        vec![code.value()],
        "Unexpected warnings: {:?}",
        outcome.diagnostics.warnings
    );
    outcome.diagnostics.warnings[0].clone()
}

fn map(pairs: &[(usize, usize)]) -> SourceMap {
    pairs
        .iter()
        .map(|&(offset, length)| SourceLocation::new(offset, length))
        .collect()
}

#[test]
fn test_full_document_ast() {
    let outcome = parse(FULL, ParseOptions::default());

    assert!(outcome.diagnostics.is_ok());
    assert!(outcome.diagnostics.warnings.is_empty(), "{:?}", outcome.diagnostics.warnings);

    let ast = &outcome.ast;
    assert_eq!(ast.metadata.get("FORMAT"), Some("1A"));
    assert_eq!(ast.name, "My API");
    assert_eq!(ast.description, "**description**\n\n");
    assert_eq!(ast.resource_groups.len(), 1);

    let group = &ast.resource_groups[0];
    assert_eq!(group.name, "Group Name");
    assert_eq!(group.description, "_description_\n\n");

    let resource = &group.resources[0];
    assert_eq!(resource.name, "My Resource");
    assert_eq!(resource.uri_template, "/resource");
    assert_eq!(resource.description, "Resource description\n\n");
    assert_eq!(resource.model.name, "My Resource");
    assert_eq!(resource.model.body, "Hello World\n");
    assert_eq!(resource.model.headers.content_type(), Some("text/plain"));

    let action = &resource.actions[0];
    assert_eq!(action.name, "Retrieve Resource");
    assert_eq!(action.method, "GET");
    assert_eq!(action.description, "Method description\n\n");
    assert_eq!(action.examples.len(), 1);

    let response = &action.examples[0].responses[0];
    assert_eq!(response.name, "200");
    assert_eq!(response.description, "Response description\n\n");
    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.headers.get("x-response-header"), Some("Fighter"));
    assert_eq!(response.body, "Hello World\n");
}

#[test]
fn test_full_document_sourcemap() {
    let (_, sourcemap, _) = parse_with_map(FULL);

    assert_eq!(sourcemap.metadata, vec![map(&[(0, 11)])]);
    assert_eq!(sourcemap.name, map(&[(12, 9)]));
    assert_eq!(sourcemap.description, map(&[(21, 17)]));

    let group = &sourcemap.resource_groups[0];
    assert_eq!(group.name, map(&[(38, 13)]));
    assert_eq!(group.description, map(&[(51, 15)]));

    let resource = &group.resources[0];
    assert_eq!(resource.name, map(&[(66, 27)]));
    assert_eq!(resource.uri_template, map(&[(66, 27)]));
    assert_eq!(resource.description, map(&[(93, 22)]));
    assert_eq!(resource.model.name, map(&[(66, 27)]));
    assert_eq!(resource.model.headers, vec![map(&[(117, 20)])]);
    assert_eq!(resource.model.body, map(&[(145, 12)]));

    let action = &resource.actions[0];
    assert_eq!(action.name, map(&[(158, 28)]));
    assert_eq!(action.method, map(&[(158, 28)]));
    assert_eq!(action.description, map(&[(186, 20)]));

    let response = &action.examples[0].responses[0];
    assert_eq!(response.name, map(&[(208, 27)]));
    assert_eq!(response.description, map(&[(239, 22)]));
    assert_eq!(response.headers, vec![map(&[(208, 27)]), map(&[(288, 27)])]);
    assert_eq!(response.body, map(&[(340, 12)]));
}

#[test]
fn test_sourcemap_reconstructs_descriptions_and_bodies() {
    let (ast, sourcemap, _) = parse_with_map(FULL);

    assert_eq!(sourcemap.description.text(FULL), ast.description);
    let resource = &ast.resource_groups[0].resources[0];
    let resource_map = &sourcemap.resource_groups[0].resources[0];
    assert_eq!(resource_map.description.text(FULL), resource.description);
    assert_eq!(resource_map.model.body.text(FULL), resource.model.body);
    assert!(resource_map.name.text(FULL).contains(&resource.name));
}

#[test]
fn test_sourcemap_not_exported_by_default() {
    let outcome = parse(FULL, ParseOptions::default());

    assert!(outcome.sourcemap.is_none());
}

#[test]
fn test_name_only() {
    let outcome = parse("# My API", ParseOptions::default());

    assert!(outcome.diagnostics.warnings.is_empty());
    assert_eq!(outcome.ast.name, "My API");
    assert_eq!(outcome.ast.description, "");
    assert!(outcome.ast.resource_groups.is_empty());
}

#[test]
fn test_description_only() {
    let warning = assert_single_warning("**description**\n", WarningCode::ApiName);
    assert_eq!(warning.message(), "expected API name, e.g. '# <API Name>'");

    let outcome = parse("**description**\n", ParseOptions::default());
    assert_eq!(outcome.ast.name, "");
    assert_eq!(outcome.ast.description, "**description**\n");
}

#[test]
fn test_require_blueprint_name() {
    let options = ParseOptions::default().with_require_blueprint_name(true);
    let outcome = parse("**description**\n", options);

    let error = outcome.diagnostics.error.expect("missing name is fatal");
    assert_eq!(error.code_value(), 2);
    assert_eq!(error.locations().collect::<Vec<_>>(), vec![crate::Span::new(0..16)]);
}

#[test]
fn test_require_blueprint_name_on_empty_document() {
    let options = ParseOptions::default().with_require_blueprint_name(true);

    for source in ["", "\n\n", "\n  \n"] {
        let outcome = parse(source, options);

        let error = outcome
            .diagnostics
            .error
            .unwrap_or_else(|| panic!("missing name should be fatal for {source:?}"));
        assert_eq!(error.code_value(), ErrorCode::Business.value());
        assert_eq!(
            error.locations().collect::<Vec<_>>(),
            vec![crate::Span::empty(source.len())]
        );
    }
}

#[test]
fn test_empty_document_has_no_diagnostics() {
    let outcome = parse("", ParseOptions::default());

    assert!(outcome.diagnostics.is_ok());
    assert!(outcome.diagnostics.warnings.is_empty());
    assert_eq!(outcome.ast, Blueprint::default());
}

#[test]
fn test_group_without_resources() {
    let outcome = parse("# Group Name\n_description_\n", ParseOptions::default());

    assert_eq!(outcome.ast.resource_groups.len(), 1);
    assert_eq!(outcome.ast.resource_groups[0].name, "Group Name");
    assert_eq!(outcome.ast.resource_groups[0].description, "_description_\n");
    assert_eq!(warning_codes(&outcome), vec![WarningCode::ApiName.value()]);
}

#[test]
fn test_metadata_order() {
    let outcome = parse("FORMAT: 1A\nA: 1\nB: 2\nC: 3\n\n# API\n", ParseOptions::default());

    let pairs: Vec<(&str, &str)> = outcome
        .ast
        .metadata
        .iter()
        .map(|entry| (entry.name.as_str(), entry.value.as_str()))
        .collect();
    assert_eq!(pairs, vec![("FORMAT", "1A"), ("A", "1"), ("B", "2"), ("C", "3")]);
}

#[test]
fn test_metadata_with_heading_and_description() {
    let outcome = parse(
        "meta: data\nfoo:bar\n#XXXX\ndescription for it",
        ParseOptions::default(),
    );

    assert_eq!(outcome.ast.metadata.len(), 2);
    assert_eq!(outcome.ast.metadata.get("foo"), Some("bar"));
    assert_eq!(outcome.ast.name, "XXXX");
    assert_eq!(outcome.ast.description, "description for it");
}

#[test]
fn test_duplicate_metadata_key() {
    let warning = assert_single_warning("A: 1\nA: 2\n\n# API\n", WarningCode::Duplicate);

    assert_eq!(warning.message(), "duplicate definition of 'A'");
}

#[test]
fn test_missing_response_location() {
    let warning = assert_single_warning("FORMAT: 1A\n# My API\n## GET /\n", WarningCode::EmptyDefinition);

    assert_eq!(warning.message(), "no response defined for 'GET /'");
    assert_eq!(
        warning.locations().collect::<Vec<_>>(),
        vec![crate::Span::new(20..29)]
    );
}

#[test]
fn test_resource_action_shorthand() {
    let outcome = parse("# API\n## GET /coupons/{id}\n+ Response 200\n", ParseOptions::default());

    let resource = &outcome.ast.resource_groups[0].resources[0];
    assert_eq!(resource.name, "");
    assert_eq!(resource.uri_template, "/coupons/{id}");
    assert_eq!(resource.actions[0].method, "GET");
    assert_eq!(outcome.ast.resource_groups[0].name, "");
}

#[test]
fn test_model_reference() {
    let source = concat!(
        "# API\n",
        "## My Resource [/resource]\n",
        "+ Model (text/plain)\n\n",
        "        Hello World\n\n",
        "### Retrieve [GET]\n",
        "+ Response 200\n\n",
        "    [My Resource][]\n",
    );
    let (ast, sourcemap, outcome) = parse_with_map(source);

    assert!(outcome.diagnostics.is_ok());
    assert!(outcome.diagnostics.warnings.is_empty(), "{:?}", outcome.diagnostics.warnings);

    let response = &ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    let reference = response.reference.as_ref().expect("reference");
    assert_eq!(reference.id, "My Resource");
    assert_eq!(response.body, "");
    assert_eq!(
        ast.find_model(&reference.id).map(|model| model.body.as_str()),
        Some("Hello World\n")
    );

    let response_map = &sourcemap.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response_map.reference.text(source), "[My Resource][]\n");
}

#[test]
fn test_unresolved_reference() {
    let outcome = parse(
        "# API\n## /a\n### GET\n+ Response 200\n\n    [Missing][]\n",
        ParseOptions::default(),
    );

    assert!(outcome.diagnostics.is_ok());
    assert_eq!(warning_codes(&outcome), vec![ErrorCode::Symbol.value()]);
    assert_eq!(
        outcome.diagnostics.warnings[0].message(),
        "undefined model reference 'Missing'"
    );
    assert_eq!(
        outcome.diagnostics.warnings[0].locations().collect::<Vec<_>>(),
        vec![crate::Span::new(40..52)]
    );
    let response = &outcome.ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response.reference.as_ref().map(|r| r.id.as_str()), Some("Missing"));
}

#[test]
fn test_forward_model_reference() {
    let source = concat!(
        "# API\n",
        "## /a\n",
        "### GET\n",
        "+ Response 200\n\n",
        "    [Later][]\n\n",
        "## Later [/later]\n",
        "+ Model (text/plain)\n\n",
        "        Hi\n",
    );
    let outcome = parse(source, ParseOptions::default());

    assert!(outcome.diagnostics.is_ok());
    assert!(outcome.diagnostics.warnings.is_empty(), "{:?}", outcome.diagnostics.warnings);
    let response = &outcome.ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response.reference.as_ref().map(|r| r.id.as_str()), Some("Later"));
    assert_eq!(
        outcome.ast.find_model("later").map(|model| model.body.as_str()),
        Some("Hi\n")
    );
}

#[test]
fn test_non_ascii_model_reference() {
    let source = concat!(
        "# API\n",
        "## Über [/u]\n",
        "+ Model\n\n",
        "        x\n\n",
        "## /a\n",
        "### GET\n",
        "+ Response 200\n\n",
        "    [über][]\n",
    );
    let outcome = parse(source, ParseOptions::default());

    assert!(outcome.diagnostics.warnings.is_empty(), "{:?}", outcome.diagnostics.warnings);
    let response = &outcome.ast.resource_groups[0].resources[1].actions[0].examples[0].responses[0];
    let id = &response.reference.as_ref().expect("reference").id;
    assert_eq!(id, "über");
    assert_eq!(outcome.ast.find_model(id).map(|model| model.body.as_str()), Some("x\n"));
}

const NOTE_MODEL: &str = "# API\n## Note [/notes]\n+ Model\n\n        x\n\n### GET\n+ Response 200\n\n";

/// Helper function to parse the note model followed by a response body
fn parse_note_response(body: &str) -> ParseOutcome {
    parse(&format!("{NOTE_MODEL}{body}"), ParseOptions::default())
}

#[test]
fn test_second_reference_is_ignored() {
    let outcome = parse_note_response("    [Note][]\n\n    [Other][]\n");

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ignoring.value()]);
    assert_eq!(
        outcome.diagnostics.warnings[0].message(),
        "ignoring reference to model 'Other', the payload already refers to 'Note'"
    );
    let response = &outcome.ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response.reference.as_ref().map(|r| r.id.as_str()), Some("Note"));
    assert_eq!(response.description, "");
}

#[test]
fn test_text_around_reference_is_ignored() {
    let outcome = parse_note_response("    [Note][]\n    see above\n");

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ignoring.value()]);
    let response = &outcome.ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response.reference.as_ref().map(|r| r.id.as_str()), Some("Note"));
    assert_eq!(response.description, "");
}

#[test]
fn test_content_after_reference_is_ignored() {
    let outcome = parse_note_response("    [Note][]\n\n    trailing prose\n");

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ignoring.value()]);
    assert_eq!(
        outcome.diagnostics.warnings[0].message(),
        "ignoring content after the reference to model 'Note'"
    );
    let response = &outcome.ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response.description, "");
}

#[test]
fn test_malformed_payload_signature() {
    let warning = assert_single_warning(
        "# API\n## /a\n### GET\n+ Response 200\n+ Response 201 (text/plain) extra\n",
        WarningCode::Formatting,
    );

    assert_eq!(
        warning.message(),
        "unable to parse payload signature 'Response 201 (text/plain) extra'"
    );
}

#[test]
fn test_parameter_with_values() {
    let source = concat!(
        "# API\n",
        "## Notes [/notes{?limit}]\n",
        "### List [GET]\n",
        "+ Parameters\n",
        "    + limit = `20` (optional, number, `42`) ... This is a limit\n\n",
        "        + Values\n",
        "            + `20`\n",
        "            + `42`\n",
        "            + `53`\n\n",
        "+ Response 200\n",
    );
    let (ast, sourcemap, outcome) = parse_with_map(source);

    assert!(outcome.diagnostics.warnings.is_empty(), "{:?}", outcome.diagnostics.warnings);

    let parameter = &ast.resource_groups[0].resources[0].actions[0].parameters[0];
    assert_eq!(parameter.name, "limit");
    assert_eq!(parameter.type_name, "number");
    assert_eq!(parameter.usage, ParameterUse::Optional);
    assert_eq!(parameter.default_value, "20");
    assert_eq!(parameter.example_value, "42");
    assert_eq!(parameter.description, "This is a limit");
    let values: Vec<&str> = parameter.values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, vec!["20", "42", "53"]);

    let parameter_map = &sourcemap.resource_groups[0].resources[0].actions[0].parameters[0];
    assert_eq!(parameter_map.values.len(), 3);
    assert_eq!(parameter_map.values[0].value.text(source), "+ `20`\n");
    assert!(parameter_map.name.text(source).starts_with("limit = `20`"));
    assert_eq!(parameter_map.usage, parameter_map.name);
}

#[test]
fn test_parameter_defaults_to_undefined_use() {
    let outcome = parse(
        "# API\n## /notes/{id}\n+ Parameters\n    + id (string) ... Note id\n",
        ParseOptions::default(),
    );

    let parameter = &outcome.ast.resource_groups[0].resources[0].parameters[0];
    assert_eq!(parameter.usage, ParameterUse::Undefined);
    assert_eq!(parameter.type_name, "string");
    assert!(outcome.diagnostics.warnings.is_empty());
}

#[test]
fn test_parameter_not_in_uri_template() {
    let warning = assert_single_warning(
        "# API\n## /a\n+ Parameters\n    + id\n",
        WarningCode::LogicalError,
    );

    assert_eq!(
        warning.message(),
        "URI parameter 'id' is not found within the URI template '/a'"
    );
}

#[test]
fn test_required_parameter_with_default() {
    assert_single_warning(
        "# API\n## /a/{id}\n+ Parameters\n    + id = `1` (required)\n",
        WarningCode::LogicalError,
    );
}

#[test]
fn test_unquoted_value() {
    assert_single_warning(
        "# API\n## /a/{id}\n+ Parameters\n    + id\n        + Values\n            + 1\n",
        WarningCode::Formatting,
    );
}

#[test]
fn test_empty_parameters() {
    assert_single_warning("# API\n## /a\n+ Parameters\n", WarningCode::EmptyDefinition);
}

#[test]
fn test_malformed_parameter() {
    assert_single_warning(
        "# API\n## /a/{id}\n+ Parameters\n    + id is the identifier\n",
        WarningCode::Formatting,
    );
}

#[test]
fn test_invalid_uri_template_is_fatal() {
    let outcome = parse(
        "# API\n## A [/a]\n### GET\n+ Response 200\n## B [b]\n## C [/c]\n",
        ParseOptions::default(),
    );

    let error = outcome.diagnostics.error.as_ref().expect("fatal error");
    assert_eq!(error.code_value(), 1);
    assert_eq!(outcome.ast.resource_groups[0].resources.len(), 1);
    assert_eq!(outcome.ast.resource_groups[0].resources[0].name, "A");
}

#[test]
fn test_missing_uri_template_is_fatal() {
    let outcome = parse("# API\n## Notes []\n", ParseOptions::default());

    assert!(!outcome.diagnostics.is_ok());
    assert_eq!(outcome.diagnostics.error_code(), 1);
}

#[test]
fn test_malformed_uri_template_warns() {
    assert_single_warning("# API\n## /a/{id\n", WarningCode::Uri);
}

#[test]
fn test_duplicate_resource() {
    assert_single_warning(
        "# API\n## /a\n### GET\n+ Response 200\n## /a\n### POST\n+ Response 201\n",
        WarningCode::Duplicate,
    );
}

#[test]
fn test_duplicate_action_method() {
    assert_single_warning(
        "# API\n## /a\n### GET\n+ Response 200\n### GET\n+ Response 201\n",
        WarningCode::Duplicate,
    );
}

#[test]
fn test_group_ambiguity() {
    let outcome = parse(
        "# API\n# Group A\n# Notes [/notes]\n",
        ParseOptions::default(),
    );

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ambiguity.value()]);
    assert_eq!(outcome.ast.resource_groups.len(), 1);
    assert_eq!(outcome.ast.resource_groups[0].resources.len(), 1);
}

#[test]
fn test_action_ambiguity() {
    let outcome = parse(
        "# API\n## /notes\n## GET\n+ Response 200\n",
        ParseOptions::default(),
    );

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ambiguity.value()]);
    assert_eq!(outcome.ast.resource_groups[0].resources[0].actions.len(), 1);
}

#[test]
fn test_action_outside_resource() {
    let outcome = parse("# API\n## GET\n+ Response 200\n", ParseOptions::default());

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ignoring.value()]);
    assert!(outcome.ast.resource_groups.is_empty());
}

#[test]
fn test_unrecognized_heading_inside_action() {
    let outcome = parse(
        "# API\n## /a\n### GET\n+ Response 200\n#### Notes\nsome text\n",
        ParseOptions::default(),
    );

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Ignoring.value()]);
}

#[test]
fn test_nested_heading_in_description() {
    let outcome = parse(
        "# API\n## /a\nIntro\n### Details\nMore\n### GET\n+ Response 200\n",
        ParseOptions::default(),
    );

    assert!(outcome.diagnostics.warnings.is_empty());
    let resource = &outcome.ast.resource_groups[0].resources[0];
    assert_eq!(resource.description, "Intro\n### Details\nMore\n");
    assert_eq!(resource.actions.len(), 1);
}

#[test]
fn test_deprecated_headers_section() {
    assert_single_warning(
        "# API\n## /a\n+ Headers\n\n        X: 1\n\n### GET\n+ Response 200\n",
        WarningCode::Deprecated,
    );
}

#[test]
fn test_request_after_response_starts_example() {
    let outcome = parse(
        "# API\n## /a\n### POST\n+ Request A\n+ Response 200\n+ Request B\n+ Response 201\n",
        ParseOptions::default(),
    );

    let action = &outcome.ast.resource_groups[0].resources[0].actions[0];
    assert_eq!(action.examples.len(), 2);
    assert_eq!(action.examples[1].requests[0].name, "B");
    assert_eq!(action.examples[1].name, "");
}

#[test]
fn test_no_content_response_with_body() {
    assert_single_warning(
        "# API\n## /a\n### DELETE\n+ Response 204\n\n        body\n",
        WarningCode::NotEmptyDefinition,
    );
}

#[test]
fn test_head_response_with_body() {
    assert_single_warning(
        "# API\n## /a\n### HEAD\n+ Response 200\n\n        body\n",
        WarningCode::NotEmptyDefinition,
    );
}

#[test]
fn test_non_numeric_status() {
    assert_single_warning("# API\n## /a\n### GET\n+ Response OK\n", WarningCode::Formatting);
}

#[test]
fn test_body_written_as_paragraph() {
    let outcome = parse(
        "# API\n## /a\n### GET\n+ Response 200\n    + Body\n\n        not code\n",
        ParseOptions::default(),
    );

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Indentation.value()]);
    let response = &outcome.ast.resource_groups[0].resources[0].actions[0].examples[0].responses[0];
    assert_eq!(response.body, "not code\n");
}

#[test]
fn test_malformed_header() {
    assert_single_warning(
        "# API\n## /a\n### GET\n+ Response 200\n    + Headers\n\n            garbage\n",
        WarningCode::Formatting,
    );
}

#[test]
fn test_unnamed_resource_model() {
    assert_single_warning(
        "# API\n## /a\n+ Model\n\n        x\n",
        WarningCode::LogicalError,
    );
}

#[test]
fn test_model_redefinition() {
    let outcome = parse(
        "# API\n## Note [/a]\n+ Model\n\n        x\n\n## note [/b]\n+ Model\n\n        y\n",
        ParseOptions::default(),
    );

    assert_eq!(warning_codes(&outcome), vec![WarningCode::Redefinition.value()]);
}

#[test]
fn test_render_descriptions() {
    let options = ParseOptions::default()
        .with_render_descriptions(true)
        .with_export_sourcemap(true);
    let outcome = parse("# API\n**bold**\n", options);

    assert_eq!(outcome.ast.description, "<p><strong>bold</strong></p>\n");
    let sourcemap = outcome.sourcemap.expect("source map");
    assert_eq!(sourcemap.description, map(&[(6, 9)]));
}
