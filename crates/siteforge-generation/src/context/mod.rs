//! Render context: variable tree and context builder

pub mod builder;
pub mod tree;

pub use builder::ContextBuilder;
pub use tree::RenderContext;
