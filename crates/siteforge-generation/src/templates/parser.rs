//! Template tokenizer and parser
//!
//! Source text is tokenized in a single pass and parsed by recursive descent
//! into a small AST. Only spans that lex as well-formed tags become markup;
//! any other `{{` is ordinary text, so JSX object literals such as
//! `style={{ padding: 4 }}` and emitted JavaScript `${...}` interpolations
//! pass through untouched.

use crate::templates::error::TemplateError;

/// Block tag kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    If,
    Unless,
    Each,
}

impl BlockKind {
    fn name(self) -> &'static str {
        match self {
            BlockKind::If => "if",
            BlockKind::Unless => "unless",
            BlockKind::Each => "each",
        }
    }
}

#[derive(Debug)]
enum Token {
    Text(String),
    Var {
        path: String,
        line: usize,
    },
    Open {
        kind: BlockKind,
        path: String,
        negated: bool,
        line: usize,
    },
    Close {
        kind: BlockKind,
        line: usize,
    },
}

/// One node of a parsed template
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, emitted verbatim
    Text(String),
    /// `{{path}}` variable substitution
    Interpolation {
        /// Dotted path into the render context
        path: String,
        /// Source line, for diagnostics
        line: usize,
    },
    /// `{{#if path}}` or `{{#unless path}}` block
    Conditional {
        /// Dotted path whose truthiness gates the body
        path: String,
        /// Inverted test (`#unless` or `#if !path`)
        negated: bool,
        /// Body nodes
        body: Vec<Node>,
        /// Source line of the opening tag
        line: usize,
    },
    /// `{{#each path}}` block
    Loop {
        /// Dotted path to the array to iterate
        path: String,
        /// Body nodes, rendered once per element
        body: Vec<Node>,
        /// Source line of the opening tag
        line: usize,
    },
}

/// A template parsed into its AST
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTemplate {
    /// Top-level nodes in source order
    pub nodes: Vec<Node>,
    has_markup: bool,
}

impl ParsedTemplate {
    /// Whether the source contained any recognized markup
    ///
    /// Markup-free templates are emitted byte for byte; post-render cleanup
    /// only applies when this is true.
    pub fn has_markup(&self) -> bool {
        self.has_markup
    }
}

/// Parses template source into a [`ParsedTemplate`]
pub struct Parser;

impl Parser {
    /// Parse template source
    pub fn parse(source: &str) -> Result<ParsedTemplate, TemplateError> {
        let (tokens, has_markup) = lex(source);

        struct Frame {
            kind: BlockKind,
            path: String,
            negated: bool,
            line: usize,
            nodes: Vec<Node>,
        }

        let mut stack: Vec<Frame> = Vec::new();
        let mut nodes: Vec<Node> = Vec::new();

        // Nodes accumulate into the innermost open frame, or the top level
        fn current<'a>(
            stack: &'a mut Vec<Frame>,
            nodes: &'a mut Vec<Node>,
        ) -> &'a mut Vec<Node> {
            match stack.last_mut() {
                Some(frame) => &mut frame.nodes,
                None => nodes,
            }
        }

        for token in tokens {
            match token {
                Token::Text(text) => {
                    current(&mut stack, &mut nodes).push(Node::Text(text));
                }
                Token::Var { path, line } => {
                    current(&mut stack, &mut nodes).push(Node::Interpolation { path, line });
                }
                Token::Open {
                    kind,
                    path,
                    negated,
                    line,
                } => {
                    stack.push(Frame {
                        kind,
                        path,
                        negated,
                        line,
                        nodes: Vec::new(),
                    });
                }
                Token::Close { kind, line } => {
                    let frame = stack.pop().ok_or(TemplateError::UnexpectedClose {
                        kind: kind.name(),
                        line,
                    })?;
                    if frame.kind != kind {
                        return Err(TemplateError::MismatchedClose {
                            expected: frame.kind.name(),
                            found: kind.name(),
                            line,
                        });
                    }
                    let node = match frame.kind {
                        BlockKind::If => Node::Conditional {
                            path: frame.path,
                            negated: frame.negated,
                            body: frame.nodes,
                            line: frame.line,
                        },
                        BlockKind::Unless => Node::Conditional {
                            path: frame.path,
                            negated: true,
                            body: frame.nodes,
                            line: frame.line,
                        },
                        BlockKind::Each => Node::Loop {
                            path: frame.path,
                            body: frame.nodes,
                            line: frame.line,
                        },
                    };
                    current(&mut stack, &mut nodes).push(node);
                }
            }
        }

        if let Some(frame) = stack.first() {
            return Err(TemplateError::UnterminatedBlock {
                kind: frame.kind.name(),
                line: frame.line,
            });
        }

        Ok(ParsedTemplate { nodes, has_markup })
    }
}

/// Tokenize source text
///
/// Returns the token stream and whether any tag (including comments) was
/// recognized. Invalid tag spans contribute their `{{` as literal text and
/// scanning resumes two characters later, so a valid tag nested inside an
/// invalid span is still found.
fn lex(source: &str) -> (Vec<Token>, bool) {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut has_markup = false;
    let mut line = 1usize;
    let mut rest = source;

    let flush = |text: &mut String, tokens: &mut Vec<Token>| {
        if !text.is_empty() {
            tokens.push(Token::Text(std::mem::take(text)));
        }
    };

    while let Some(open) = rest.find("{{") {
        let (before, after_open) = rest.split_at(open);
        text.push_str(before);
        line += before.matches('\n').count();

        let tag_body = &after_open[2..];
        let close = tag_body.find("}}");
        let classified = close.and_then(|end| classify(&tag_body[..end], line));

        match (close, classified) {
            (Some(end), Some(tag)) => {
                has_markup = true;
                if !matches!(tag, Tag::Comment) {
                    flush(&mut text, &mut tokens);
                    tokens.push(tag.into_token());
                }
                let consumed = &tag_body[..end];
                line += consumed.matches('\n').count();
                rest = &tag_body[end + 2..];
            }
            _ => {
                // Not a tag; keep the braces and rescan just past them
                text.push_str("{{");
                rest = tag_body;
            }
        }
    }

    text.push_str(rest);
    flush(&mut text, &mut tokens);
    (tokens, has_markup)
}

enum Tag {
    Comment,
    Var {
        path: String,
        line: usize,
    },
    Open {
        kind: BlockKind,
        path: String,
        negated: bool,
        line: usize,
    },
    Close {
        kind: BlockKind,
        line: usize,
    },
}

impl Tag {
    fn into_token(self) -> Token {
        match self {
            Tag::Comment => unreachable!("comments never become tokens"),
            Tag::Var { path, line } => Token::Var { path, line },
            Tag::Open {
                kind,
                path,
                negated,
                line,
            } => Token::Open {
                kind,
                path,
                negated,
                line,
            },
            Tag::Close { kind, line } => Token::Close { kind, line },
        }
    }
}

/// Classify the content between `{{` and `}}`, or `None` if it is not a tag
fn classify(content: &str, line: usize) -> Option<Tag> {
    let trimmed = content.trim();

    // Comments may contain anything except the closing braces
    if trimmed.starts_with('!') {
        return Some(Tag::Comment);
    }

    if let Some(rest) = trimmed.strip_prefix('#') {
        let (keyword, arg) = rest.split_once(char::is_whitespace)?;
        let arg = arg.trim();
        let kind = match keyword {
            "if" => BlockKind::If,
            "unless" => BlockKind::Unless,
            "each" => BlockKind::Each,
            _ => return None,
        };
        let (negated, path) = match (kind, arg.strip_prefix('!')) {
            (BlockKind::If, Some(stripped)) => (true, stripped),
            _ => (false, arg),
        };
        if !is_valid_path(path) {
            return None;
        }
        return Some(Tag::Open {
            kind,
            path: path.to_string(),
            negated,
            line,
        });
    }

    if let Some(rest) = trimmed.strip_prefix('/') {
        let kind = match rest {
            "if" => BlockKind::If,
            "unless" => BlockKind::Unless,
            "each" => BlockKind::Each,
            _ => return None,
        };
        return Some(Tag::Close { kind, line });
    }

    if is_valid_path(trimmed) {
        return Some(Tag::Var {
            path: trimmed.to_string(),
            line,
        });
    }

    None
}

/// A path is dot-separated identifier segments
fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && path.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
                _ => false,
            }
        })
}
