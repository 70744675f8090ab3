//! Core data models for the generation pipeline

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One resolved manifest entry: output path backed by a template source id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Relative output path in the generated project
    pub output_path: String,
    /// Template source identifier in the template store
    pub template_id: String,
}

/// Ordered mapping of output path to template id for one generation run
///
/// Insertion order is preserved; inserting an existing path overwrites the
/// template id in place without moving the entry, so layered rule sets
/// produce a stable, duplicate-free ordering.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    index: HashMap<String, usize>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the template id for an output path
    pub fn insert(&mut self, output_path: impl Into<String>, template_id: impl Into<String>) {
        let output_path = output_path.into();
        let template_id = template_id.into();
        match self.index.get(&output_path) {
            Some(&pos) => self.entries[pos].template_id = template_id,
            None => {
                self.index.insert(output_path.clone(), self.entries.len());
                self.entries.push(ManifestEntry {
                    output_path,
                    template_id,
                });
            }
        }
    }

    /// Template id for an output path, if present
    pub fn get(&self, output_path: &str) -> Option<&str> {
        self.index
            .get(output_path)
            .map(|&pos| self.entries[pos].template_id.as_str())
    }

    /// Whether an output path is present
    pub fn contains(&self, output_path: &str) -> bool {
        self.index.contains_key(output_path)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Status of one generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    /// The file rendered successfully
    Ok,
    /// Rendering failed; the file content is an error stub
    Error {
        /// Why rendering failed
        message: String,
    },
}

/// One output file produced by a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative output path
    pub path: String,
    /// Rendered content, or an error stub when status is `Error`
    pub content: String,
    /// Render outcome
    pub status: FileStatus,
}

impl GeneratedFile {
    /// Whether the file rendered successfully
    pub fn is_ok(&self) -> bool {
        matches!(self.status, FileStatus::Ok)
    }
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Non-fatal; rendering proceeded
    Warning,
    /// A single file failed; the run continued
    Error,
}

/// One diagnostic collected during a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Output path the diagnostic is scoped to, if any
    pub file: Option<String>,
    /// Severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Build a warning scoped to an output file
    pub fn warning(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Build an error scoped to an output file
    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Build a run-level warning not tied to a file
    pub fn run_warning(message: impl Into<String>) -> Self {
        Self {
            file: None,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Result of a full generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generated files in manifest order
    pub files: Vec<GeneratedFile>,
    /// Aggregated warnings and per-file errors
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Number of files that rendered successfully
    pub fn ok_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    /// Number of files that failed
    pub fn error_count(&self) -> usize {
        self.files.len() - self.ok_count()
    }

    /// Number of warning diagnostics
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Find a generated file by output path
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}
