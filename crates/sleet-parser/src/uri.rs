//! URI template inspection.
//!
//! Resource URI templates follow RFC 6570 expressions such as
//! `/notes/{id}{?limit,page}`. The parser only needs the variable names (to
//! check parameters against them) and a list of problems worth a warning.

use winnow::{
    ascii::digit1,
    combinator::{alt, eof, opt, separated, terminated},
    prelude::*,
    token::{one_of, take_while},
};

/// Expression operators allowed after an opening brace.
const OPERATORS: [char; 8] = ['+', '#', '.', '/', ';', '?', '&', '='];

/// Variables and problems found in a URI template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UriTemplate {
    pub variables: Vec<String>,
    pub problems: Vec<String>,
}

impl UriTemplate {
    /// Inspect `template`.
    pub fn analyze(template: &str) -> Self {
        let mut result = Self::default();

        if template.chars().any(char::is_whitespace) {
            result
                .problems
                .push("URI template contains whitespace".to_string());
        }

        let mut rest = template;
        while let Some(index) = rest.find(['{', '}']) {
            if rest[index..].starts_with('}') {
                result
                    .problems
                    .push("URI template contains an unmatched '}'".to_string());
                rest = &rest[index + 1..];
                continue;
            }

            let after = &rest[index + 1..];
            match after.find(['{', '}']) {
                Some(close) if after[close..].starts_with('}') => {
                    result.expression(&after[..close]);
                    rest = &after[close + 1..];
                }
                Some(nested) => {
                    result
                        .problems
                        .push("URI template contains nested expressions".to_string());
                    rest = &after[nested..];
                }
                None => {
                    result
                        .problems
                        .push("URI template contains an unclosed expression".to_string());
                    break;
                }
            }
        }

        result
    }

    /// Returns `true` if `name` is one of the template variables.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.iter().any(|variable| variable == name)
    }

    fn expression(&mut self, body: &str) {
        match expression_variables.parse(body) {
            Ok(names) => self
                .variables
                .extend(names.into_iter().map(str::to_string)),
            Err(_) => self.problems.push(format!(
                "URI template expression '{{{body}}}' contains invalid variable names"
            )),
        }
    }
}

fn expression_variables<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    opt(one_of(OPERATORS)).parse_next(input)?;
    terminated(separated(1.., variable, ','), eof).parse_next(input)
}

fn variable<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    let name = take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '%' | '.')
    })
    .parse_next(input)?;
    opt(alt(("*".void(), (':', digit1).void()))).parse_next(input)?;
    Ok(name)
}
