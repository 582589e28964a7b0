//! Placeholder substitution engine for document templates.
//!
//! This is a deliberately small engine that performs placeholder
//! substitution in template text. It is used to render the collected
//! resume into the external LaTeX template.
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the scalar value of `name`
//! - `{{#section}}...{{/section}}` - Repeats its body once per element of
//!   the sequence `section`, in order
//! - Inside a string-list section, `{{item}}` is the current element
//! - Structured-entry sections expose the entry's fields by name; entry
//!   fields shadow outer values of the same name
//!
//! Single braces are plain text, which keeps LaTeX source untouched.
//!
//! # Error Handling
//!
//! The engine is fail-safe: an undefined placeholder causes an error
//! rather than silent substitution with empty text. This prevents subtle
//! bugs from typos in placeholder names.

use std::collections::HashMap;
use std::fmt;

/// The placeholder name bound to the current element of a string-list
/// section.
const ITEM_VAR: &str = "item";

/// Error type for template parsing and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A `{{` was found without a matching `}}`.
    UnclosedTag { position: usize },
    /// A tag with no name was found (e.g., `{{}}` or `{{#}}`).
    EmptyTag { position: usize },
    /// A `{{#section}}` was never closed.
    UnclosedSection { name: String, position: usize },
    /// A `{{/section}}` had no matching open section.
    UnexpectedSectionClose { name: String, position: usize },
    /// A placeholder was referenced but no value was provided.
    UndefinedPlaceholder { name: String },
    /// A section tag named a scalar value.
    NotASection { name: String },
    /// A scalar placeholder named a sequence value.
    NotAScalar { name: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnclosedTag { position } => {
                write!(f, "unclosed '{{{{' at byte {} in template", position)
            }
            EngineError::EmptyTag { position } => {
                write!(f, "empty tag at byte {} in template", position)
            }
            EngineError::UnclosedSection { name, position } => {
                write!(
                    f,
                    "section '{}' opened at byte {} is never closed",
                    name, position
                )
            }
            EngineError::UnexpectedSectionClose { name, position } => {
                write!(
                    f,
                    "close tag for '{}' at byte {} has no matching open section",
                    name, position
                )
            }
            EngineError::UndefinedPlaceholder { name } => {
                write!(f, "undefined placeholder '{}'", name)
            }
            EngineError::NotASection { name } => {
                write!(f, "'{}' is a scalar, not a section", name)
            }
            EngineError::NotAScalar { name } => {
                write!(f, "'{}' is a section, not a scalar", name)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// A value a placeholder can resolve to.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Scalar text, substituted by `{{name}}`.
    Text(String),
    /// A plain string list; each element renders the section body with the
    /// element bound as `{{item}}`.
    Items(Vec<String>),
    /// Structured entries, each carrying its own named fields.
    Entries(Vec<Scope>),
}

/// A set of named values available to placeholders.
pub type Scope = HashMap<String, Value>;

/// One node of a parsed template.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Placeholder(String),
    Section { name: String, body: Vec<Node> },
}

/// A parsed template, ready for repeated rendering.
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
}

/// Parse template source into an [`Ast`].
///
/// Parsing validates tag syntax and section nesting; placeholder names are
/// only resolved at render time.
pub fn parse(source: &str) -> Result<Ast, EngineError> {
    // Stack of open sections: name, open position, and the nodes collected
    // before the section opened.
    let mut open_sections: Vec<(String, usize, Vec<Node>)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();
    let mut rest = source;
    let mut offset = 0usize;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            current.push(Node::Text(rest[..open].to_string()));
        }
        let tag_start = offset + open;
        let after = &rest[open + 2..];

        let Some(close) = after.find("}}") else {
            return Err(EngineError::UnclosedTag { position: tag_start });
        };
        let tag = after[..close].trim();

        if let Some(name) = tag.strip_prefix('#') {
            let name = name.trim();
            if name.is_empty() {
                return Err(EngineError::EmptyTag { position: tag_start });
            }
            open_sections.push((name.to_string(), tag_start, std::mem::take(&mut current)));
        } else if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            match open_sections.pop() {
                Some((open_name, _, parent)) if open_name == name => {
                    let body = std::mem::replace(&mut current, parent);
                    current.push(Node::Section {
                        name: open_name,
                        body,
                    });
                }
                _ => {
                    return Err(EngineError::UnexpectedSectionClose {
                        name: name.to_string(),
                        position: tag_start,
                    });
                }
            }
        } else if tag.is_empty() {
            return Err(EngineError::EmptyTag { position: tag_start });
        } else {
            current.push(Node::Placeholder(tag.to_string()));
        }

        offset = tag_start + 2 + close + 2;
        rest = &after[close + 2..];
    }

    if !rest.is_empty() {
        current.push(Node::Text(rest.to_string()));
    }

    if let Some((name, position, _)) = open_sections.pop() {
        return Err(EngineError::UnclosedSection { name, position });
    }

    Ok(Ast { nodes: current })
}

impl Ast {
    /// Render against a scope of values.
    pub fn render(&self, scope: &Scope) -> Result<String, EngineError> {
        let mut out = String::new();
        render_nodes(&self.nodes, &[scope], &mut out)?;
        Ok(out)
    }
}

fn render_nodes(nodes: &[Node], scopes: &[&Scope], out: &mut String) -> Result<(), EngineError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Placeholder(name) => match lookup(scopes, name) {
                Some(Value::Text(value)) => out.push_str(value),
                Some(_) => return Err(EngineError::NotAScalar { name: name.clone() }),
                None => {
                    return Err(EngineError::UndefinedPlaceholder { name: name.clone() });
                }
            },
            Node::Section { name, body } => match lookup(scopes, name) {
                Some(Value::Items(items)) => {
                    for item in items {
                        let element =
                            Scope::from([(ITEM_VAR.to_string(), Value::Text(item.clone()))]);
                        render_in_child(body, scopes, &element, out)?;
                    }
                }
                Some(Value::Entries(entries)) => {
                    for entry in entries {
                        render_in_child(body, scopes, entry, out)?;
                    }
                }
                Some(Value::Text(_)) => {
                    return Err(EngineError::NotASection { name: name.clone() });
                }
                None => {
                    return Err(EngineError::UndefinedPlaceholder { name: name.clone() });
                }
            },
        }
    }
    Ok(())
}

/// Render a section body with a child scope pushed onto the chain. The
/// child's values shadow outer values of the same name.
fn render_in_child(
    body: &[Node],
    scopes: &[&Scope],
    child: &Scope,
    out: &mut String,
) -> Result<(), EngineError> {
    let mut chain: Vec<&Scope> = Vec::with_capacity(scopes.len() + 1);
    chain.extend_from_slice(scopes);
    chain.push(child);
    render_nodes(body, &chain, out)
}

fn lookup<'a>(scopes: &[&'a Scope], name: &str) -> Option<&'a Value> {
    scopes.iter().rev().find_map(|scope| scope.get(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(pairs: &[(&str, &str)]) -> Scope {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::Text(v.to_string())))
            .collect()
    }

    fn render(source: &str, scope: &Scope) -> Result<String, EngineError> {
        parse(source)?.render(scope)
    }

    #[test]
    fn plain_text_passes_through() {
        let result = render("Just plain text", &Scope::new()).unwrap();
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn empty_template_renders_empty() {
        let result = render("", &Scope::new()).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn simple_substitution() {
        let vars = scope(&[("name", "Alice"), ("greeting", "Hello")]);
        let result = render("{{greeting}}, {{name}}!", &vars).unwrap();
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn single_braces_are_plain_text() {
        let vars = scope(&[("name", "Alice")]);
        let result = render(r"\textbf{ {{name}} }", &vars).unwrap();
        assert_eq!(result, r"\textbf{ Alice }");
    }

    #[test]
    fn whitespace_in_tag_is_trimmed() {
        let vars = scope(&[("name", "Alice")]);
        let result = render("Hello {{ name }}!", &vars).unwrap();
        assert_eq!(result, "Hello Alice!");
    }

    #[test]
    fn multiple_occurrences() {
        let vars = scope(&[("x", "X")]);
        let result = render("{{x}}-{{x}}-{{x}}", &vars).unwrap();
        assert_eq!(result, "X-X-X");
    }

    #[test]
    fn undefined_placeholder_is_an_error() {
        let result = render("Hello {{name}}", &Scope::new());
        assert_eq!(
            result.unwrap_err(),
            EngineError::UndefinedPlaceholder {
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn unclosed_tag_is_an_error() {
        let result = parse("Hello {{name");
        assert_eq!(result.unwrap_err(), EngineError::UnclosedTag { position: 6 });
    }

    #[test]
    fn empty_tag_is_an_error() {
        let result = parse("Hello {{}}");
        assert_eq!(result.unwrap_err(), EngineError::EmptyTag { position: 6 });
    }

    #[test]
    fn empty_section_name_is_an_error() {
        let result = parse("{{#}}body{{/}}");
        assert!(matches!(result.unwrap_err(), EngineError::EmptyTag { .. }));
    }

    #[test]
    fn items_section_repeats_body_per_element() {
        let mut vars = Scope::new();
        vars.insert(
            "skills".to_string(),
            Value::Items(vec!["Rust".to_string(), "Go".to_string()]),
        );
        let result = render("{{#skills}}[{{item}}]{{/skills}}", &vars).unwrap();
        assert_eq!(result, "[Rust][Go]");
    }

    #[test]
    fn empty_items_section_renders_nothing() {
        let mut vars = Scope::new();
        vars.insert("skills".to_string(), Value::Items(Vec::new()));
        let result = render("before{{#skills}}[{{item}}]{{/skills}}after", &vars).unwrap();
        assert_eq!(result, "beforeafter");
    }

    #[test]
    fn entries_section_exposes_entry_fields() {
        let mut vars = Scope::new();
        vars.insert(
            "education".to_string(),
            Value::Entries(vec![
                scope(&[("institution", "MIT"), ("year", "2019")]),
                scope(&[("institution", "CMU"), ("year", "2021")]),
            ]),
        );
        let result = render(
            "{{#education}}{{institution}} ({{year}}); {{/education}}",
            &vars,
        )
        .unwrap();
        assert_eq!(result, "MIT (2019); CMU (2021); ");
    }

    #[test]
    fn entry_fields_shadow_outer_values() {
        let mut vars = scope(&[("location", "Springfield")]);
        vars.insert(
            "education".to_string(),
            Value::Entries(vec![scope(&[("location", "Cambridge")])]),
        );
        let result = render(
            "{{location}} | {{#education}}{{location}}{{/education}}",
            &vars,
        )
        .unwrap();
        assert_eq!(result, "Springfield | Cambridge");
    }

    #[test]
    fn outer_values_remain_visible_inside_sections() {
        let mut vars = scope(&[("name", "Alice")]);
        vars.insert(
            "projects".to_string(),
            Value::Entries(vec![scope(&[("title", "Alpha")])]),
        );
        let result = render("{{#projects}}{{name}}: {{title}}{{/projects}}", &vars).unwrap();
        assert_eq!(result, "Alice: Alpha");
    }

    #[test]
    fn nested_sections_stay_inside_their_entry() {
        // Two entries, each with its own bullet list; bullets must not leak
        // across entries.
        let mut first = Scope::new();
        first.insert("title".to_string(), Value::Text("Engineer".to_string()));
        first.insert(
            "bullets".to_string(),
            Value::Items(vec!["built it".to_string(), "shipped it".to_string()]),
        );
        let mut second = Scope::new();
        second.insert("title".to_string(), Value::Text("Lead".to_string()));
        second.insert(
            "bullets".to_string(),
            Value::Items(vec!["ran it".to_string()]),
        );

        let mut vars = Scope::new();
        vars.insert("experience".to_string(), Value::Entries(vec![first, second]));

        let result = render(
            "{{#experience}}<{{title}}:{{#bullets}} {{item}};{{/bullets}}>{{/experience}}",
            &vars,
        )
        .unwrap();
        assert_eq!(result, "<Engineer: built it; shipped it;><Lead: ran it;>");
    }

    #[test]
    fn section_over_scalar_is_an_error() {
        let vars = scope(&[("name", "Alice")]);
        let result = render("{{#name}}x{{/name}}", &vars);
        assert_eq!(
            result.unwrap_err(),
            EngineError::NotASection {
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn scalar_over_section_is_an_error() {
        let mut vars = Scope::new();
        vars.insert("skills".to_string(), Value::Items(vec!["Rust".to_string()]));
        let result = render("{{skills}}", &vars);
        assert_eq!(
            result.unwrap_err(),
            EngineError::NotAScalar {
                name: "skills".to_string()
            }
        );
    }

    #[test]
    fn unclosed_section_is_an_error() {
        let result = parse("{{#education}}{{institution}}");
        assert!(matches!(
            result.unwrap_err(),
            EngineError::UnclosedSection { name, .. } if name == "education"
        ));
    }

    #[test]
    fn mismatched_close_is_an_error() {
        let result = parse("{{#education}}{{/experience}}");
        assert!(matches!(
            result.unwrap_err(),
            EngineError::UnexpectedSectionClose { name, .. } if name == "experience"
        ));
    }

    #[test]
    fn stray_close_is_an_error() {
        let result = parse("text {{/education}}");
        assert!(matches!(
            result.unwrap_err(),
            EngineError::UnexpectedSectionClose { .. }
        ));
    }

    #[test]
    fn multiline_template() {
        let vars = scope(&[("title", "Resume"), ("body", "content")]);
        let result = render("% {{title}}\n\n{{body}}\n", &vars).unwrap();
        assert_eq!(result, "% Resume\n\ncontent\n");
    }

    #[test]
    fn unicode_in_template_and_values() {
        let vars = scope(&[("name", "渡辺"), ("city", "Zürich")]);
        let result = render("{{name}} — {{city}}", &vars).unwrap();
        assert_eq!(result, "渡辺 — Zürich");
    }

    #[test]
    fn error_display_is_descriptive() {
        let err = EngineError::UndefinedPlaceholder {
            name: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "undefined placeholder 'foo'");

        let err = EngineError::UnclosedTag { position: 5 };
        assert_eq!(err.to_string(), "unclosed '{{' at byte 5 in template");

        let err = EngineError::UnclosedSection {
            name: "education".to_string(),
            position: 12,
        };
        assert_eq!(
            err.to_string(),
            "section 'education' opened at byte 12 is never closed"
        );
    }
}
