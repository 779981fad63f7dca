//! Path templates.
//!
//! # Responsibilities
//! - Parse `/budgets/{budget_id}/investments/{id}` into literal and
//!   placeholder parts
//! - Render a template from an ordered parameter list
//!
//! # Design Decisions
//! - Placeholders are filled positionally, as named route helpers do
//! - Placeholder names must be unique and `[a-z0-9_]`
//! - Arity must match exactly; nothing is silently dropped or left empty

use std::fmt::{self, Display, Write};

use thiserror::Error;

/// Errors raised while parsing or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("unclosed placeholder at offset {0}")]
    UnclosedPlaceholder(usize),

    #[error("unexpected '}}' at offset {0}")]
    UnexpectedBrace(usize),

    #[error("invalid placeholder name '{0}'")]
    InvalidPlaceholder(String),

    #[error("placeholder '{0}' appears more than once")]
    DuplicatePlaceholder(String),

    #[error("expected {expected} parameters, got {actual}")]
    Arity { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Param(String),
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    parts: Vec<Part>,
}

impl PathTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        if !source.starts_with('/') {
            return Err(TemplateError::MissingLeadingSlash(source.to_string()));
        }

        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => return Err(TemplateError::UnclosedPlaceholder(offset)),
                        }
                    }
                    if !is_identifier(&name) {
                        return Err(TemplateError::InvalidPlaceholder(name));
                    }
                    if parts.iter().any(|p| matches!(p, Part::Param(n) if *n == name)) {
                        return Err(TemplateError::DuplicatePlaceholder(name));
                    }
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(Part::Param(name));
                }
                '}' => return Err(TemplateError::UnexpectedBrace(offset)),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::Param(name) => Some(name.as_str()),
            Part::Literal(_) => None,
        })
    }

    pub fn param_count(&self) -> usize {
        self.param_names().count()
    }

    /// Fill placeholders in order with `params`.
    pub fn render<T: Display>(&self, params: &[T]) -> Result<String, TemplateError> {
        let expected = self.param_count();
        if params.len() != expected {
            return Err(TemplateError::Arity {
                expected,
                actual: params.len(),
            });
        }

        let mut out = String::with_capacity(self.source.len());
        let mut params = params.iter();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Param(_) => {
                    if let Some(value) = params.next() {
                        // Writing to a String cannot fail.
                        let _ = write!(out, "{}", value);
                    }
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// `[a-z0-9_]+`, not starting with a digit.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let template = PathTemplate::parse("/budgets/{budget_id}/investments/{id}").unwrap();
        assert_eq!(
            template.param_names().collect::<Vec<_>>(),
            vec!["budget_id", "id"]
        );
        assert_eq!(template.render(&[3, 7]).unwrap(), "/budgets/3/investments/7");
    }

    #[test]
    fn test_render_arity() {
        let template = PathTemplate::parse("/questions/{id}").unwrap();
        assert_eq!(
            template.render::<u64>(&[]),
            Err(TemplateError::Arity {
                expected: 1,
                actual: 0
            })
        );
        assert!(template.render(&[1, 2]).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PathTemplate::parse("budgets/{id}"),
            Err(TemplateError::MissingLeadingSlash(_))
        ));
        assert_eq!(
            PathTemplate::parse("/budgets/{id"),
            Err(TemplateError::UnclosedPlaceholder(9))
        );
        assert_eq!(
            PathTemplate::parse("/budgets/id}"),
            Err(TemplateError::UnexpectedBrace(11))
        );
        assert_eq!(
            PathTemplate::parse("/budgets/{}"),
            Err(TemplateError::InvalidPlaceholder(String::new()))
        );
        assert_eq!(
            PathTemplate::parse("/a/{id}/b/{id}"),
            Err(TemplateError::DuplicatePlaceholder("id".into()))
        );
    }

    #[test]
    fn test_identifier() {
        assert!(is_identifier("budget_id"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("Budget"));
        assert!(!is_identifier("draft-version"));
    }
}
