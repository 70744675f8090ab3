//! Parsed template cache
//!
//! Parsing happens at most once per template id per run. The cache is an
//! explicit value owned by the generator, scoped to a run, never global
//! state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::templates::error::TemplateError;
use crate::templates::parser::{ParsedTemplate, Parser};
use crate::templates::store::TemplateStore;

/// Per-run cache of parsed templates
#[derive(Debug, Default)]
pub struct TemplateCache {
    parsed: HashMap<String, Arc<ParsedTemplate>>,
}

impl TemplateCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a parsed template, loading and parsing on first use
    ///
    /// Load and parse failures are not cached; a later call retries.
    pub fn get_or_parse(
        &mut self,
        store: &dyn TemplateStore,
        id: &str,
    ) -> Result<Arc<ParsedTemplate>, TemplateError> {
        if let Some(parsed) = self.parsed.get(id) {
            return Ok(Arc::clone(parsed));
        }
        let source = store.get(id)?;
        let parsed = Arc::new(Parser::parse(&source)?);
        self.parsed.insert(id.to_string(), Arc::clone(&parsed));
        Ok(parsed)
    }

    /// Number of cached templates
    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }
}
