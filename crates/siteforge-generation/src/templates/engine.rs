//! Template rendering
//!
//! Walks a parsed template against a render context. Substituted string
//! values are escaped according to the JavaScript quote context the
//! surrounding literal text has opened, so generated code stays
//! syntactically valid whatever the wizard input contains.

use serde_json::Value;
use tracing::debug;

use crate::context::RenderContext;
use crate::templates::error::TemplateError;
use crate::templates::parser::{Node, ParsedTemplate};

/// Output of one render pass
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Rendered file content
    pub content: String,
    /// Unresolved variable warnings, in encounter order
    pub warnings: Vec<String>,
}

/// Renders parsed templates
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Render a parsed template against a context
    ///
    /// Missing variables render as empty strings and are reported as
    /// warnings rather than failing the file. Iterating a non-array value
    /// is the one per-file fatal render error.
    pub fn render(
        &self,
        template: &ParsedTemplate,
        ctx: &RenderContext,
    ) -> Result<RenderResult, TemplateError> {
        let mut renderer = Renderer {
            output: String::new(),
            tracker: QuoteTracker::new(),
            warnings: Vec::new(),
        };
        renderer.render_nodes(&template.nodes, ctx)?;

        let content = if template.has_markup() {
            collapse_blank_lines(&renderer.output)
        } else {
            renderer.output
        };

        Ok(RenderResult {
            content,
            warnings: renderer.warnings,
        })
    }
}

struct Renderer {
    output: String,
    tracker: QuoteTracker,
    warnings: Vec<String>,
}

impl Renderer {
    fn render_nodes(&mut self, nodes: &[Node], ctx: &RenderContext) -> Result<(), TemplateError> {
        for node in nodes {
            match node {
                Node::Text(text) => {
                    // Only literal template text moves the quote state
                    self.tracker.feed(text);
                    self.output.push_str(text);
                }
                Node::Interpolation { path, line } => match ctx.resolve(path) {
                    Some(value) => {
                        let rendered = RenderContext::display(value);
                        self.output
                            .push_str(&escape_value(self.tracker.state(), &rendered));
                    }
                    None => {
                        debug!(path, line, "unresolved template variable");
                        self.warnings
                            .push(format!("Unresolved variable '{path}' at line {line}"));
                    }
                },
                Node::Conditional {
                    path,
                    negated,
                    body,
                    ..
                } => {
                    // A skipped branch is never evaluated, so its variables
                    // produce no warnings
                    if ctx.truthy(path) != *negated {
                        self.render_nodes(body, ctx)?;
                    }
                }
                Node::Loop { path, body, line } => {
                    match ctx.resolve(path) {
                        None | Some(Value::Null) => {}
                        Some(Value::Array(items)) => {
                            let last = items.len().saturating_sub(1);
                            for (index, item) in items.iter().enumerate() {
                                let scoped = ctx.overlay([
                                    ("item".to_string(), item.clone()),
                                    ("index".to_string(), Value::from(index)),
                                    ("first".to_string(), Value::Bool(index == 0)),
                                    ("last".to_string(), Value::Bool(index == last)),
                                ]);
                                self.render_nodes(body, &scoped)?;
                            }
                        }
                        Some(_) => {
                            return Err(TemplateError::NotAnArray {
                                path: path.clone(),
                                line: *line,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// JavaScript string quote context of the emitted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    None,
    Single,
    Double,
    Backtick,
}

/// Tracks open string literals across emitted text
///
/// Single and double quoted strings close at a newline because they cannot
/// span lines in JavaScript; template literals stay open.
struct QuoteTracker {
    state: QuoteState,
    escaped: bool,
}

impl QuoteTracker {
    fn new() -> Self {
        Self {
            state: QuoteState::None,
            escaped: false,
        }
    }

    fn state(&self) -> QuoteState {
        self.state
    }

    fn feed(&mut self, text: &str) {
        for c in text.chars() {
            if self.escaped {
                self.escaped = false;
                continue;
            }
            match (self.state, c) {
                (QuoteState::None, '\'') => self.state = QuoteState::Single,
                (QuoteState::None, '"') => self.state = QuoteState::Double,
                (QuoteState::None, '`') => self.state = QuoteState::Backtick,
                (QuoteState::None, _) => {}
                (_, '\\') => self.escaped = true,
                (QuoteState::Single, '\'') | (QuoteState::Single, '\n') => {
                    self.state = QuoteState::None
                }
                (QuoteState::Double, '"') | (QuoteState::Double, '\n') => {
                    self.state = QuoteState::None
                }
                (QuoteState::Backtick, '`') => self.state = QuoteState::None,
                _ => {}
            }
        }
    }
}

/// Escape a substituted value for the current quote context
fn escape_value(state: QuoteState, value: &str) -> String {
    match state {
        QuoteState::None => value.to_string(),
        QuoteState::Single | QuoteState::Double => {
            let quote = if state == QuoteState::Single { '\'' } else { '"' };
            let mut out = String::with_capacity(value.len());
            for c in value.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    c if c == quote => {
                        out.push('\\');
                        out.push(c);
                    }
                    c => out.push(c),
                }
            }
            out
        }
        QuoteState::Backtick => {
            let mut out = String::with_capacity(value.len());
            let mut chars = value.chars().peekable();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '`' => out.push_str("\\`"),
                    '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
                    c => out.push(c),
                }
            }
            out
        }
    }
}

/// Collapse runs of three or more newlines to exactly two
fn collapse_blank_lines(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut run = 0usize;
    for c in content.chars() {
        if c == '\n' {
            run += 1;
            if run <= 2 {
                out.push(c);
            }
        } else {
            run = 0;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::parser::Parser;
    use serde_json::json;

    fn render(source: &str, ctx: &RenderContext) -> RenderResult {
        let parsed = Parser::parse(source).unwrap();
        TemplateEngine::new().render(&parsed, ctx).unwrap()
    }

    fn ctx_with(pairs: &[(&str, Value)]) -> RenderContext {
        let mut ctx = RenderContext::new();
        for (key, value) in pairs {
            ctx.insert(*key, value.clone());
        }
        ctx
    }

    #[test]
    fn test_basic_interpolation() {
        let ctx = ctx_with(&[("businessName", json!("Acme"))]);
        let result = render("<h1>{{businessName}}</h1>", &ctx);
        assert_eq!(result.content, "<h1>Acme</h1>");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_variable_empty_with_warning() {
        let result = render("Hello {{nope}}!", &RenderContext::new());
        assert_eq!(result.content, "Hello !");
        assert_eq!(result.warnings, vec!["Unresolved variable 'nope' at line 1"]);
    }

    #[test]
    fn test_false_branch_produces_no_warnings() {
        let ctx = ctx_with(&[("show", json!(false))]);
        let result = render("{{#if show}}{{undefinedThing}}{{/if}}done", &ctx);
        assert_eq!(result.content, "done");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unless_renders_on_falsy() {
        let ctx = ctx_with(&[("sidebarEnabled", json!(false))]);
        let result = render("{{#unless sidebarEnabled}}full-width{{/unless}}", &ctx);
        assert_eq!(result.content, "full-width");
    }

    #[test]
    fn test_loop_bindings() {
        let ctx = ctx_with(&[("items", json!([{"label": "A"}, {"label": "B"}]))]);
        let result = render(
            "{{#each items}}{{item.label}}({{index}}{{#if first}},first{{/if}}{{#if last}},last{{/if}}){{/each}}",
            &ctx,
        );
        assert_eq!(result.content, "A(0,first)B(1,last)");
    }

    #[test]
    fn test_loop_outer_context_visible() {
        let ctx = ctx_with(&[("name", json!("Acme")), ("items", json!([1, 2]))]);
        let result = render("{{#each items}}{{name}}{{item}};{{/each}}", &ctx);
        assert_eq!(result.content, "Acme1;Acme2;");
    }

    #[test]
    fn test_empty_and_missing_loops_render_nothing() {
        let ctx = ctx_with(&[("items", json!([]))]);
        assert_eq!(render("[{{#each items}}x{{/each}}]", &ctx).content, "[]");
        let result = render("[{{#each absent}}x{{/each}}]", &RenderContext::new());
        assert_eq!(result.content, "[]");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_loop_over_non_array_fails() {
        let ctx = ctx_with(&[("count", json!(3))]);
        let parsed = Parser::parse("{{#each count}}x{{/each}}").unwrap();
        let err = TemplateEngine::new().render(&parsed, &ctx).unwrap_err();
        assert!(matches!(err, TemplateError::NotAnArray { path, line: 1 } if path == "count"));
    }

    #[test]
    fn test_escaping_in_single_quoted_string() {
        let ctx = ctx_with(&[("businessName", json!("O'Brien's Pub"))]);
        let result = render("const name = '{{businessName}}';", &ctx);
        assert_eq!(result.content, r"const name = 'O\'Brien\'s Pub';");
    }

    #[test]
    fn test_escaping_in_double_quoted_string() {
        let ctx = ctx_with(&[("quote", json!("say \"hi\""))]);
        let result = render(r#"const q = "{{quote}}";"#, &ctx);
        assert_eq!(result.content, r#"const q = "say \"hi\"";"#);
    }

    #[test]
    fn test_escaping_in_template_literal() {
        let ctx = ctx_with(&[("desc", json!("uses `code` and ${thing}"))]);
        let result = render("const d = `{{desc}}`;", &ctx);
        assert_eq!(result.content, "const d = `uses \\`code\\` and \\${thing}`;");
    }

    #[test]
    fn test_newline_value_escaped_inside_quotes() {
        let ctx = ctx_with(&[("text", json!("line1\nline2"))]);
        let result = render("const t = '{{text}}';", &ctx);
        assert_eq!(result.content, "const t = 'line1\\nline2';");
    }

    #[test]
    fn test_no_escaping_outside_strings() {
        let ctx = ctx_with(&[("name", json!("O'Brien"))]);
        let result = render("<h1>{{name}}</h1>", &ctx);
        assert_eq!(result.content, "<h1>O'Brien</h1>");
    }

    #[test]
    fn test_quote_closed_before_substitution() {
        let ctx = ctx_with(&[("name", json!("O'Brien"))]);
        let result = render("const a = 'x';\n// {{name}}\n", &ctx);
        assert_eq!(result.content, "const a = 'x';\n// O'Brien\n");
    }

    #[test]
    fn test_markup_free_template_is_byte_identical() {
        let source = "line one\n\n\n\n\nline two\n";
        let result = render(source, &RenderContext::new());
        assert_eq!(result.content, source);
    }

    #[test]
    fn test_cleanup_collapses_blank_runs_when_markup_present() {
        let ctx = ctx_with(&[("show", json!(false))]);
        let result = render("a\n{{#if show}}\nbody\n{{/if}}\n\n\n\nb\n", &ctx);
        assert_eq!(result.content, "a\n\nb\n");
    }
}
