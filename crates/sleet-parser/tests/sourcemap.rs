use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use sleet_core::ast::{Blueprint, Parameter, Payload};
use sleet_core::sourcemap::{
    BlueprintSourceMap, ParameterSourceMap, PayloadSourceMap, SourceMap,
};
use sleet_parser::{ParseOptions, parse};

/// Lines that exercise every section kind, combined at random.
const FRAGMENTS: &[&str] = &[
    "FORMAT: 1A",
    "# My API",
    "# Group Notes",
    "## Note [/notes/{id}]",
    "## /notes{?limit}",
    "## GET /coupons/{id}",
    "## Broken [notes]",
    "### Retrieve [GET]",
    "### HEAD",
    "#### Details",
    "Some *description* text.",
    "+ Model (text/plain)",
    "+ Parameters",
    "    + id (number, `1`) ... Identifier",
    "    + limit = `20` (optional)",
    "        + Values",
    "            + `20`",
    "            + 30",
    "+ Request Create (application/json)",
    "+ Response 200 (application/json)",
    "+ Response 204",
    "+ Headers",
    "    + Headers",
    "    + Body",
    "    + Schema",
    "            X-Header: value",
    "        Hello World",
    "    [Note][]",
    "    plain text",
    "---",
    "",
];

fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|lines| {
        let mut source = lines.join("\n");
        source.push('\n');
        source
    })
}

fn check_field(field: &str, value: &str, map: &SourceMap) -> Result<(), TestCaseError> {
    prop_assert!(
        value.is_empty() || !map.is_empty(),
        "field `{}` = {:?} has an empty source map",
        field,
        value
    );
    Ok(())
}

fn check_locations(source: &str, map: &SourceMap) -> Result<(), TestCaseError> {
    for location in map.iter() {
        prop_assert!(location.end() <= source.len());
        prop_assert!(source.is_char_boundary(location.offset));
        prop_assert!(source.is_char_boundary(location.end()));
    }
    Ok(())
}

fn check_payload(source: &str, payload: &Payload, map: &PayloadSourceMap) -> Result<(), TestCaseError> {
    check_field("payload.name", &payload.name, &map.name)?;
    check_field("payload.description", &payload.description, &map.description)?;
    check_field("payload.body", &payload.body, &map.body)?;
    check_field("payload.schema", &payload.schema, &map.schema)?;
    prop_assert_eq!(payload.headers.len(), map.headers.len());
    prop_assert_eq!(payload.reference.is_some(), !map.reference.is_empty());
    prop_assert_eq!(map.body.text(source), payload.body.clone());
    for header in &map.headers {
        check_locations(source, header)?;
    }
    Ok(())
}

fn check_parameters(
    source: &str,
    parameters: &[Parameter],
    maps: &[ParameterSourceMap],
) -> Result<(), TestCaseError> {
    prop_assert_eq!(parameters.len(), maps.len());
    for (parameter, map) in parameters.iter().zip(maps) {
        check_field("parameter.name", &parameter.name, &map.name)?;
        check_field("parameter.description", &parameter.description, &map.description)?;
        check_field("parameter.type", &parameter.type_name, &map.type_name)?;
        check_field("parameter.default", &parameter.default_value, &map.default_value)?;
        check_field("parameter.example", &parameter.example_value, &map.example_value)?;
        prop_assert_eq!(parameter.values.len(), map.values.len());
        check_locations(source, &map.name)?;
    }
    Ok(())
}

fn check_shape(source: &str, ast: &Blueprint, map: &BlueprintSourceMap) -> Result<(), TestCaseError> {
    prop_assert_eq!(ast.metadata.len(), map.metadata.len());
    check_field("name", &ast.name, &map.name)?;
    check_field("description", &ast.description, &map.description)?;
    prop_assert_eq!(map.description.text(source), ast.description.clone());
    prop_assert_eq!(ast.resource_groups.len(), map.resource_groups.len());

    for (group, group_map) in ast.resource_groups.iter().zip(&map.resource_groups) {
        check_field("group.name", &group.name, &group_map.name)?;
        check_field("group.description", &group.description, &group_map.description)?;
        prop_assert_eq!(group.resources.len(), group_map.resources.len());

        for (resource, resource_map) in group.resources.iter().zip(&group_map.resources) {
            check_field("resource.name", &resource.name, &resource_map.name)?;
            check_field("resource.uri", &resource.uri_template, &resource_map.uri_template)?;
            check_field("resource.description", &resource.description, &resource_map.description)?;
            check_locations(source, &resource_map.description)?;
            check_payload(source, &resource.model, &resource_map.model)?;
            check_parameters(source, &resource.parameters, &resource_map.parameters)?;
            prop_assert_eq!(resource.actions.len(), resource_map.actions.len());

            for (action, action_map) in resource.actions.iter().zip(&resource_map.actions) {
                check_field("action.method", &action.method, &action_map.method)?;
                check_field("action.name", &action.name, &action_map.name)?;
                check_field("action.description", &action.description, &action_map.description)?;
                check_parameters(source, &action.parameters, &action_map.parameters)?;
                prop_assert_eq!(action.examples.len(), action_map.examples.len());

                for (example, example_map) in action.examples.iter().zip(&action_map.examples) {
                    prop_assert_eq!(example.requests.len(), example_map.requests.len());
                    prop_assert_eq!(example.responses.len(), example_map.responses.len());
                    let payloads = example.requests.iter().zip(&example_map.requests).chain(
                        example.responses.iter().zip(&example_map.responses),
                    );
                    for (payload, payload_map) in payloads {
                        check_payload(source, payload, payload_map)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn check_document(source: &str) -> Result<(), TestCaseError> {
    let options = ParseOptions::default().with_export_sourcemap(true);
    let outcome = parse(source, options);
    let map = outcome
        .sourcemap
        .as_ref()
        .ok_or_else(|| TestCaseError::fail("source map missing"))?;

    check_shape(source, &outcome.ast, map)?;

    for diagnostic in outcome.diagnostics.warnings.iter().chain(&outcome.diagnostics.error) {
        for span in diagnostic.locations() {
            prop_assert!(span.end() <= source.len());
        }
    }

    let without_map = parse(source, ParseOptions::default());
    prop_assert_eq!(&without_map.ast, &outcome.ast);
    prop_assert!(without_map.sourcemap.is_none());
    Ok(())
}

proptest! {
    #[test]
    fn sourcemap_matches_ast(source in arb_document()) {
        check_document(&source)?;
    }

    #[test]
    fn parse_never_panics_on_arbitrary_text(source in "\\PC{0,200}") {
        let _ = parse(&source, ParseOptions::default().with_export_sourcemap(true));
    }
}

#[test]
fn test_fixture_sourcemap_shape() {
    let source = "# API\n## Note [/notes/{id}]\n+ Parameters\n    + id\n\n### GET\n+ Response 200\n";

    check_document(source).expect("shape should match");
}
