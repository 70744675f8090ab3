//! Template loading, parsing, and rendering
//!
//! Templates are parsed once into an AST and rendered against a
//! [`RenderContext`](crate::context::RenderContext). Parsing and rendering
//! are separate steps so the cache can hand the same parsed template to
//! every file that references it.

pub mod cache;
pub mod engine;
pub mod error;
pub mod parser;
pub mod store;

pub use cache::TemplateCache;
pub use engine::{RenderResult, TemplateEngine};
pub use error::TemplateError;
pub use parser::{Node, ParsedTemplate, Parser};
pub use store::{FsTemplateStore, MemoryTemplateStore, TemplateStore};
