//! Template subsystem errors

use thiserror::Error;

/// Errors raised while loading, parsing, or rendering a single template
///
/// These are per-file failures. The generator turns them into an error stub
/// for the affected file and keeps processing the rest of the manifest.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template content exists for the requested id
    #[error("Template not found: {0}")]
    NotFound(String),

    /// A block tag was opened but never closed
    #[error("Unterminated {kind} block opened at line {line}")]
    UnterminatedBlock {
        /// Block kind (`if`, `unless`, `each`)
        kind: &'static str,
        /// Line the block was opened on
        line: usize,
    },

    /// A closing tag appeared with no matching open block
    #[error("Unexpected {{{{/{kind}}}}} at line {line}")]
    UnexpectedClose {
        /// Block kind named by the closing tag
        kind: &'static str,
        /// Line of the closing tag
        line: usize,
    },

    /// A closing tag closed a different block kind than the one open
    #[error("Mismatched close at line {line}: expected {{{{/{expected}}}}}, found {{{{/{found}}}}}")]
    MismatchedClose {
        /// Block kind of the innermost open block
        expected: &'static str,
        /// Block kind the closing tag named
        found: &'static str,
        /// Line of the closing tag
        line: usize,
    },

    /// A loop path resolved to a value that is not an array
    #[error("Cannot iterate over non-array value at '{path}' (line {line})")]
    NotAnArray {
        /// The dotted path the loop referenced
        path: String,
        /// Line of the loop tag
        line: usize,
    },

    /// Template content could not be read from disk
    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}
