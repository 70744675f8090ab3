//! Output path resolution
//!
//! Turns a validated configuration into the file manifest for a run by
//! layering the base rule set, the project family overlay, enabled pages,
//! and feature rule sets in that order.

pub mod layers;
pub mod resolver;

pub use layers::ProjectFamily;
pub use resolver::PathResolver;
