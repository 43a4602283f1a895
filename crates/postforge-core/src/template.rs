//! Prompt template parsing and rendering.
//!
//! Templates are plain text with named placeholders (`{business_type}`).
//! `{{` and `}}` escape to literal braces. A template is parsed once into
//! segments and validated against its declared input variables, so a typo
//! in the template file fails at load time rather than mid-request.

use std::sync::Arc;

use postforge_types::error::TemplateError;

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed, validated prompt template.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
    variables: Vec<String>,
}

impl PromptTemplate {
    /// Parse a template and validate every placeholder is declared.
    pub fn new(template: &str, input_variables: &[&str]) -> Result<Self, TemplateError> {
        let segments = parse_segments(template)?;

        for segment in &segments {
            if let Segment::Placeholder(name) = segment {
                if !input_variables.contains(&name.as_str()) {
                    return Err(TemplateError::UnknownPlaceholder(name.clone()));
                }
            }
        }

        Ok(Self {
            segments,
            variables: input_variables.iter().map(|v| v.to_string()).collect(),
        })
    }

    /// Declared input variable names.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Substitute values into the template.
    ///
    /// `inputs` maps variable name to value; a placeholder with no
    /// matching input is a [`TemplateError::MissingVariable`].
    pub fn render(&self, inputs: &[(&str, String)]) -> Result<String, TemplateError> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = inputs
                        .iter()
                        .find(|(k, _)| k == name)
                        .map(|(_, v)| v.as_str())
                        .ok_or_else(|| TemplateError::MissingVariable(name.clone()))?;
                    out.push_str(value);
                }
            }
        }

        Ok(out)
    }
}

/// Source of the (process-lifetime cached) prompt template.
///
/// Implementations live in postforge-infra; the file-backed one loads
/// lazily and idempotently on first use.
pub trait TemplateSource: Send + Sync {
    fn template(
        &self,
    ) -> impl std::future::Future<Output = Result<Arc<PromptTemplate>, TemplateError>> + Send;
}

/// Tokenize a template into literal and placeholder segments.
fn parse_segments(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    return Err(TemplateError::UnclosedPlaceholder(pos));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name));
            }
            '}' => {
                // `}}` escapes to `}`; a lone `}` is kept literally.
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                literal.push('}');
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_basic() {
        let template = PromptTemplate::new("Write a {tone} caption for {platform}.", &["tone", "platform"])
            .unwrap();
        let rendered = template
            .render(&inputs(&[("tone", "casual"), ("platform", "Instagram")]))
            .unwrap();
        assert_eq!(rendered, "Write a casual caption for Instagram.");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let template = PromptTemplate::new("{name} and {name} again", &["name"]).unwrap();
        let rendered = template.render(&inputs(&[("name", "Acme")])).unwrap();
        assert_eq!(rendered, "Acme and Acme again");
    }

    #[test]
    fn test_undeclared_placeholder_rejected_at_parse() {
        let err = PromptTemplate::new("Hello {whoops}", &["name"]).unwrap_err();
        assert!(matches!(
            err,
            postforge_types::error::TemplateError::UnknownPlaceholder(name) if name == "whoops"
        ));
    }

    #[test]
    fn test_missing_variable_at_render() {
        let template = PromptTemplate::new("Hello {name}", &["name"]).unwrap();
        let err = template.render(&[]).unwrap_err();
        assert!(matches!(
            err,
            postforge_types::error::TemplateError::MissingVariable(name) if name == "name"
        ));
    }

    #[test]
    fn test_brace_escapes() {
        let template = PromptTemplate::new("{{\"json\": \"{value}\"}}", &["value"]).unwrap();
        let rendered = template.render(&inputs(&[("value", "x")])).unwrap();
        assert_eq!(rendered, "{\"json\": \"x\"}");
    }

    #[test]
    fn test_unclosed_placeholder() {
        let err = PromptTemplate::new("Hello {name", &["name"]).unwrap_err();
        assert!(matches!(
            err,
            postforge_types::error::TemplateError::UnclosedPlaceholder(6)
        ));
    }

    #[test]
    fn test_lone_closing_brace_is_literal() {
        let template = PromptTemplate::new("a } b", &[]).unwrap();
        assert_eq!(template.render(&[]).unwrap(), "a } b");
    }

    #[test]
    fn test_no_placeholders() {
        let template = PromptTemplate::new("static text only", &[]).unwrap();
        assert_eq!(template.render(&[]).unwrap(), "static text only");
    }

    #[test]
    fn test_variables_recorded() {
        let template = PromptTemplate::new("{a} {b}", &["a", "b"]).unwrap();
        assert_eq!(template.variables(), &["a".to_string(), "b".to_string()]);
    }
}
