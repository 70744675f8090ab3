//! Template content stores
//!
//! A store maps template ids to raw source text. The generator takes the
//! store as an explicit handle so tests can supply an in-memory set while
//! production loads from a directory tree.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::templates::error::TemplateError;

/// Source of raw template content, keyed by template id
pub trait TemplateStore: Send + Sync {
    /// Fetch the source text for a template id
    fn get(&self, id: &str) -> Result<String, TemplateError>;
}

/// In-memory template store
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl MemoryTemplateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template
    pub fn insert(&mut self, id: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(id.into(), source.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_template(mut self, id: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(id, source);
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn get(&self, id: &str) -> Result<String, TemplateError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }
}

/// Template store backed by a directory tree
///
/// Template ids are relative paths under the root, e.g.
/// `site/components/Header.js`.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    /// Create a store rooted at a directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for FsTemplateStore {
    fn get(&self, id: &str) -> Result<String, TemplateError> {
        match std::fs::read_to_string(self.root.join(id)) {
            Ok(source) => Ok(source),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(TemplateError::NotFound(id.to_string()))
            }
            Err(err) => Err(TemplateError::Io(err)),
        }
    }
}
