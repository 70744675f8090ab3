//! Variable tree with total dotted-path resolution
//!
//! The context is a tagged value tree (string, number, bool, array, object)
//! over `serde_json::Value`. Lookups are total: a missing path is an explicit
//! `None`, never a panic, and every value has a defined truthiness and text
//! form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Variable tree used to resolve interpolations and conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    root: Map<String, Value>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object; non-objects yield an empty context
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    /// Insert a top-level value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.root.insert(key.into(), value.into());
    }

    /// Resolve a dotted path by left-to-right field traversal
    ///
    /// Traversal only descends through objects; any miss along the way
    /// resolves to `None`.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Truthiness of the value at a path
    ///
    /// Missing and `null` are false; booleans are themselves; numbers are
    /// true when non-zero; strings and arrays are true when non-empty;
    /// objects are always true.
    pub fn truthy(&self, path: &str) -> bool {
        match self.resolve(path) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(_)) => true,
        }
    }

    /// Text form of a value for interpolation
    ///
    /// Strings pass through unquoted; numbers and booleans use their literal
    /// form; `null` renders empty; arrays and objects serialize to canonical
    /// JSON.
    pub fn display(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            // to_string on Value cannot fail for tree-shaped data
            other => serde_json::to_string(other).unwrap_or_default(),
        }
    }

    /// A copy of this context with extra top-level bindings layered on top
    ///
    /// Existing keys are overwritten, so the innermost loop bindings always
    /// win on name collision.
    pub fn overlay(&self, bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut root = self.root.clone();
        for (key, value) in bindings {
            root.insert(key, value);
        }
        Self { root }
    }
}
