//! Project generation pipeline
//!
//! Takes a validated configuration through manifest resolution, context
//! building, and template rendering, producing an in-memory report of
//! generated files and diagnostics. All state is carried in explicit
//! handles; a run touches no globals and two runs never interfere.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod generator;
pub mod models;
pub mod paths;
pub mod templates;

pub use context::{ContextBuilder, RenderContext};
pub use error::{GenerationError, ResolveError};
pub use generator::SiteGenerator;
pub use models::{
    Diagnostic, FileStatus, GeneratedFile, GenerationReport, Manifest, ManifestEntry, Severity,
};
pub use paths::{PathResolver, ProjectFamily};
pub use templates::{
    FsTemplateStore, MemoryTemplateStore, ParsedTemplate, Parser, RenderResult, TemplateCache,
    TemplateEngine, TemplateError, TemplateStore,
};
