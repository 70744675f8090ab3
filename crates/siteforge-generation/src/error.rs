//! Run-level error types
//!
//! Only configuration-scoped problems abort a generation run; anything scoped
//! to a single output file is isolated inside the generator and reported as
//! an error-status file instead (see `templates::error::TemplateError`).

use thiserror::Error;

/// Errors raised while resolving the output manifest
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Two active features both claim the same output path
    ///
    /// Features are additive and independent; a collision is a configuration
    /// error surfaced to the caller, never resolved by insertion order.
    #[error("features `{first}` and `{second}` both claim output path `{path}`")]
    FeatureCollision {
        /// The contested output path
        path: String,
        /// Feature that claimed the path first
        first: String,
        /// Feature that collided with it
        second: String,
    },
}

/// Fatal errors that abort a generation run with no files produced
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Configuration validation failed
    #[error(transparent)]
    Config(#[from] siteforge_config::ConfigError),

    /// Manifest resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
