//! Resource groups.
//!
//! An explicit group opens with a `Group <name>` heading. Resources that
//! appear before any group heading are collected into an implicit group
//! without a name.

use log::trace;

use sleet_core::{
    ast::ResourceGroup,
    sourcemap::{ResourceGroupSourceMap, SourceMap},
};

use crate::{
    context::Context,
    error::{Diagnostic, WarningCode},
    sections::{self, closes_section, heading_at, resource},
    signature::HeadingSignature,
};

/// Parse a group opened by the heading at the cursor.
pub(crate) fn parse(cx: &mut Context<'_>) -> (ResourceGroup, ResourceGroupSourceMap) {
    let mut group = ResourceGroup::default();
    let mut map = ResourceGroupSourceMap::default();

    let Some(block) = cx.peek() else {
        return (group, map);
    };
    let level = block.heading_level().unwrap_or(1);
    group.name = block.heading_text(cx.source()).to_string();
    map.name = SourceMap::from(block.body);
    cx.advance();
    trace!(name = group.name.as_str(), level; "Parsing resource group");

    (group.description, map.description) = sections::description(cx, |cx, block| {
        heading_at(cx, block)
            .is_some_and(|(heading_level, signature)| closes_section(level, heading_level, &signature))
    });

    resources(cx, Some(level), &mut group, &mut map);
    (group, map)
}

/// Parse the resources that precede the first group heading.
pub(crate) fn parse_implicit(cx: &mut Context<'_>) -> (ResourceGroup, ResourceGroupSourceMap) {
    let mut group = ResourceGroup::default();
    let mut map = ResourceGroupSourceMap::default();
    trace!("Parsing implicit resource group");

    resources(cx, None, &mut group, &mut map);
    (group, map)
}

fn resources(
    cx: &mut Context<'_>,
    level: Option<u8>,
    group: &mut ResourceGroup,
    map: &mut ResourceGroupSourceMap,
) {
    while let Some(block) = cx.peek() {
        if cx.aborted() {
            return;
        }
        let Some((heading_level, signature)) = heading_at(cx, &block) else {
            sections::ignore_until_heading(cx, "ignoring unrecognized block");
            continue;
        };

        match signature {
            HeadingSignature::Group { .. } => return,
            HeadingSignature::Resource { uri, .. } | HeadingSignature::ResourceAction { uri, .. } => {
                if level.is_some_and(|level| heading_level <= level) {
                    cx.emit(
                        Diagnostic::warning(format!(
                            "resource '{uri}' is not nested under its group heading, \
                             it is treated as part of group '{}'",
                            group.name
                        ))
                        .with_code(WarningCode::Ambiguity)
                        .with_label(block.body, "heading level is not deeper than the group's"),
                    );
                }
                match resource::parse(cx) {
                    Some((resource, resource_map)) => {
                        group.resources.push(resource);
                        map.resources.push(resource_map);
                    }
                    None => return,
                }
            }
            HeadingSignature::Action { method, .. } => {
                sections::action_outside_resource(cx, method);
            }
            HeadingSignature::Other => {
                if level.is_some_and(|level| heading_level <= level) {
                    return;
                }
                sections::ignore_until_heading(cx, "ignoring unrecognized block");
            }
        }
    }
}
