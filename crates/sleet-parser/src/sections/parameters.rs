//! URI parameters.
//!
//! ```text
//! + Parameters
//!     + limit = `20` (optional, number, `42`) ... Maximum number of notes
//!
//!         + Values
//!             + `20`
//!             + `42`
//! ```

use sleet_core::{
    ast::{Parameter, ParameterUse, ParameterValue},
    sourcemap::{ParameterSourceMap, ParameterValueSourceMap, SourceMap},
};

use crate::{
    block::{Block, BlockKind},
    context::Context,
    error::{Diagnostic, WarningCode},
    sections::{self, item_at, resource::ResourceScope},
    signature::{self, ItemSignature},
};

/// Parse the parameters item at the cursor into `parameters`.
///
/// A parameter named again replaces the earlier definition.
pub(crate) fn parse(
    cx: &mut Context<'_>,
    scope: &ResourceScope<'_>,
    parameters: &mut Vec<Parameter>,
    maps: &mut Vec<ParameterSourceMap>,
) {
    let Some(item) = cx.peek() else {
        return;
    };
    let end = cx.extent(cx.pos());
    cx.advance();

    let mut found = false;
    while cx.pos() < end {
        let Some(block) = cx.peek() else {
            break;
        };
        if block.kind != BlockKind::ListItem || block.depth != item.depth + 1 {
            sections::ignore_block(cx, "ignoring unrecognized block in parameters section");
            continue;
        }
        found = true;

        let Some((parameter, map)) = parameter(cx, &block) else {
            continue;
        };

        if let Some(index) = parameters.iter().position(|p| p.name == parameter.name) {
            cx.emit(
                Diagnostic::warning(format!(
                    "overshadowing previous definition of parameter '{}'",
                    parameter.name
                ))
                .with_code(WarningCode::Redefinition)
                .with_label(block.body, "parameter defined again"),
            );
            parameters.remove(index);
            maps.remove(index);
        }

        if !scope.template.contains(&parameter.name) {
            cx.emit(
                Diagnostic::warning(format!(
                    "URI parameter '{}' is not found within the URI template '{}'",
                    parameter.name, scope.uri
                ))
                .with_code(WarningCode::LogicalError)
                .with_label(block.body, "unknown URI parameter"),
            );
        }

        parameters.push(parameter);
        maps.push(map);
    }

    if !found {
        cx.emit(
            Diagnostic::warning("no parameters specified")
                .with_code(WarningCode::EmptyDefinition)
                .with_label(item.body, "empty 'Parameters' section")
                .with_help("add a nested list of parameters, one parameter per list item"),
        );
    }
}

/// Parse one parameter item at the cursor.
fn parameter(cx: &mut Context<'_>, item: &Block) -> Option<(Parameter, ParameterSourceMap)> {
    let end = cx.extent(cx.pos());
    let (text, signature_span) = item.item_signature(cx.source());

    let Some(signature) = signature::parameter(text) else {
        cx.emit(
            Diagnostic::warning(format!("unable to parse parameter specification '{text}'"))
                .with_code(WarningCode::Formatting)
                .with_label(item.body, "malformed parameter")
                .with_help(
                    "expected '<name> [= `<default>`] [(<type>, required | optional, `<example>`)] \
                     [... <description>]'",
                ),
        );
        cx.seek(end);
        return None;
    };

    let signature_map = SourceMap::from(signature_span);
    let mut parameter = Parameter {
        name: signature.name.to_string(),
        ..Parameter::default()
    };
    let mut map = ParameterSourceMap {
        name: signature_map.clone(),
        ..ParameterSourceMap::default()
    };

    if let Some(default_value) = signature.default_value {
        parameter.default_value = default_value.to_string();
        map.default_value = signature_map.clone();
    }

    for attribute in signature.attributes.unwrap_or_default().split(',') {
        let attribute = attribute.trim();
        match attribute {
            "" => {}
            "required" => {
                parameter.usage = ParameterUse::Required;
                map.usage = signature_map.clone();
            }
            "optional" => {
                parameter.usage = ParameterUse::Optional;
                map.usage = signature_map.clone();
            }
            _ => {
                if let Some(example) = signature::value(attribute) {
                    parameter.example_value = example.to_string();
                    map.example_value = signature_map.clone();
                } else if parameter.type_name.is_empty() {
                    parameter.type_name = attribute.to_string();
                    map.type_name = signature_map.clone();
                } else {
                    cx.emit(
                        Diagnostic::warning(format!(
                            "ignoring unrecognized attribute '{attribute}' of parameter '{}'",
                            parameter.name
                        ))
                        .with_code(WarningCode::Formatting)
                        .with_label(item.body, "unrecognized attribute"),
                    );
                }
            }
        }
    }

    let mut description = signature.description.to_string();
    if !description.is_empty() {
        map.description = signature_map;
    }
    cx.advance();

    while cx.pos() < end {
        let Some(block) = cx.peek() else {
            break;
        };
        if block.depth != item.depth + 1 {
            cx.advance();
            continue;
        }

        match item_at(cx, &block, item.depth + 1) {
            Some(ItemSignature::Values) => values(cx, &block, &mut parameter, &mut map),
            Some(_) => sections::ignore_block(cx, "ignoring unrecognized block in parameter"),
            None => {
                if !description.is_empty() {
                    description.push('\n');
                }
                description.push_str(&block.text(cx.source()));
                for line in block.stripped_lines(cx.source(), false) {
                    map.description.push(line.into());
                }
                cx.advance();
            }
        }
    }
    parameter.description = cx.render(description);

    check_values(cx, item, &parameter);
    cx.seek(end);
    Some((parameter, map))
}

/// Parse the `+ Values` item at the cursor.
fn values(cx: &mut Context<'_>, item: &Block, parameter: &mut Parameter, map: &mut ParameterSourceMap) {
    let end = cx.extent(cx.pos());
    cx.advance();

    let mut found = false;
    while cx.pos() < end {
        let Some(block) = cx.peek() else {
            break;
        };
        if block.kind != BlockKind::ListItem || block.depth != item.depth + 1 {
            sections::ignore_block(cx, "ignoring unrecognized block in values section");
            continue;
        }
        found = true;

        let (text, _) = block.item_signature(cx.source());
        match signature::value(text) {
            Some(value) => {
                parameter.values.push(ParameterValue::new(value));
                map.values.push(ParameterValueSourceMap {
                    value: SourceMap::from(block.item_line(cx.source())),
                });
            }
            None => cx.emit(
                Diagnostic::warning(format!(
                    "invalid value format '{text}' of parameter '{}'",
                    parameter.name
                ))
                .with_code(WarningCode::Formatting)
                .with_label(block.body, "value is not quoted")
                .with_help("quote every value in backticks, e.g. '+ `20`'"),
            ),
        }
        cx.seek(cx.extent(cx.pos()));
    }

    if !found {
        cx.emit(
            Diagnostic::warning(format!(
                "no values specified for parameter '{}'",
                parameter.name
            ))
            .with_code(WarningCode::EmptyDefinition)
            .with_label(item.body, "empty 'Values' section"),
        );
    }
}

/// Check default, example and use against each other.
fn check_values(cx: &mut Context<'_>, item: &Block, parameter: &Parameter) {
    let name = &parameter.name;
    if !parameter.default_value.is_empty() && !parameter.accepts(&parameter.default_value) {
        cx.emit(
            Diagnostic::warning(format!(
                "the default value '{}' of parameter '{name}' is not in its list of values",
                parameter.default_value
            ))
            .with_code(WarningCode::LogicalError)
            .with_label(item.body, "default value not allowed"),
        );
    }
    if !parameter.example_value.is_empty() && !parameter.accepts(&parameter.example_value) {
        cx.emit(
            Diagnostic::warning(format!(
                "the example value '{}' of parameter '{name}' is not in its list of values",
                parameter.example_value
            ))
            .with_code(WarningCode::LogicalError)
            .with_label(item.body, "example value not allowed"),
        );
    }
    if parameter.usage == ParameterUse::Required && !parameter.default_value.is_empty() {
        cx.emit(
            Diagnostic::warning(format!(
                "parameter '{name}' is required, its default value has no effect"
            ))
            .with_code(WarningCode::LogicalError)
            .with_label(item.body, "required parameter with a default")
            .with_help("declare the parameter as 'optional' to give it a default value"),
        );
    }
}
