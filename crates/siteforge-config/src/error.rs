//! Error types for configuration validation

use thiserror::Error;

/// Errors raised while validating a project configuration
///
/// Any of these aborts a generation run before any file work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is missing or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Two pages share the same id
    #[error("duplicate page id: {0}")]
    DuplicatePage(String),

    /// A page id contains characters that cannot form an output path
    #[error("invalid page id `{id}`: {reason}")]
    InvalidPageId {
        /// The offending page id
        id: String,
        /// Why the id was rejected
        reason: String,
    },

    /// A feature flag name is empty or malformed
    #[error("invalid feature flag: `{0}`")]
    InvalidFeature(String),

    /// A navigation menu item is structurally broken
    #[error("invalid menu item at position {index}: {reason}")]
    InvalidMenuItem {
        /// Zero-based position in the menu list
        index: usize,
        /// Why the item was rejected
        reason: String,
    },
}

/// Convenience alias for validation results
pub type Result<T> = std::result::Result<T, ConfigError>;
