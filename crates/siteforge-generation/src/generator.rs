//! Generation orchestrator
//!
//! Runs the full pipeline for one configuration: validate, resolve the
//! manifest, build the context once, then render every manifest entry. A
//! file that fails to load, parse, or render becomes an error stub and the
//! run keeps going; only validation and manifest resolution abort the run.

use std::sync::Arc;

use tracing::{info, warn};

use siteforge_config::{ConfigValidator, ProjectConfig};

use crate::context::ContextBuilder;
use crate::error::GenerationError;
use crate::models::{Diagnostic, FileStatus, GeneratedFile, GenerationReport};
use crate::paths::{layers, PathResolver};
use crate::templates::{TemplateCache, TemplateEngine, TemplateError, TemplateStore};

/// Generates a complete project from a configuration
pub struct SiteGenerator {
    store: Arc<dyn TemplateStore>,
    context_builder: ContextBuilder,
    resolver: PathResolver,
    engine: TemplateEngine,
}

impl SiteGenerator {
    /// Create a generator backed by a template store
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self {
            store,
            context_builder: ContextBuilder::new(),
            resolver: PathResolver::new(),
            engine: TemplateEngine::new(),
        }
    }

    /// Replace the context builder, e.g. to pin the year in tests
    pub fn with_context_builder(mut self, builder: ContextBuilder) -> Self {
        self.context_builder = builder;
        self
    }

    /// Run the full generation pipeline
    ///
    /// Returns a report containing one entry per manifest path plus the
    /// diagnostics collected along the way. Fails only on invalid
    /// configuration or a feature path collision; per-file problems are
    /// isolated into error-status files.
    pub fn generate(&self, config: &ProjectConfig) -> Result<GenerationReport, GenerationError> {
        ConfigValidator::validate(config)?;
        let manifest = self.resolver.resolve(config)?;

        let mut diagnostics: Vec<Diagnostic> = config
            .features
            .iter()
            .filter(|f| !layers::is_known_feature(f))
            .map(|f| Diagnostic::run_warning(format!("Unknown feature '{f}' ignored")))
            .collect();

        // One context serves every file in the run
        let ctx = self.context_builder.build(config);
        let mut cache = TemplateCache::new();
        let mut files = Vec::with_capacity(manifest.len());

        for entry in manifest.iter() {
            let rendered = cache
                .get_or_parse(self.store.as_ref(), &entry.template_id)
                .and_then(|parsed| self.engine.render(&parsed, &ctx));

            match rendered {
                Ok(result) => {
                    for warning in result.warnings {
                        diagnostics.push(Diagnostic::warning(&entry.output_path, warning));
                    }
                    files.push(GeneratedFile {
                        path: entry.output_path.clone(),
                        content: result.content,
                        status: FileStatus::Ok,
                    });
                }
                Err(err) => {
                    warn!(
                        path = %entry.output_path,
                        template = %entry.template_id,
                        error = %err,
                        "file generation failed"
                    );
                    diagnostics.push(Diagnostic::error(&entry.output_path, err.to_string()));
                    files.push(error_stub(&entry.output_path, &err));
                }
            }
        }

        let report = GenerationReport { files, diagnostics };
        info!(
            files = report.files.len(),
            ok = report.ok_count(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "generation run complete"
        );
        Ok(report)
    }
}

fn error_stub(path: &str, err: &TemplateError) -> GeneratedFile {
    GeneratedFile {
        path: path.to_string(),
        content: format!("/* siteforge: generation failed: {err} */\n"),
        status: FileStatus::Error {
            message: err.to_string(),
        },
    }
}
