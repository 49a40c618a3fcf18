//! The run-scoped linter: traversal coordination and check dispatch.
//!
//! One [`Linter`] owns everything a run needs: the compiled rule registry,
//! the exclusion sets, and the growing diagnostic sequence. Nothing is
//! process-wide, so concurrent runs in a long-lived service stay isolated.

use crate::config::{Config, ConfigError};
use crate::dispatch::classify;
use crate::entity::{Entity, EntityKind};
use crate::exempt::is_exempt;
use crate::parser;
use crate::registry::RuleRegistry;
use crate::types::{Diagnostic, LintResult, Location};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Recognized source extension.
const SOURCE_EXTENSION: &str = ".rs";

/// Fatal errors for a lint run.
///
/// These are never accumulated as diagnostics: they mean the tool cannot
/// trust its inputs, so they abort the run immediately.
#[derive(Debug, Error)]
pub enum LintError {
    /// IO error reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Rust source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Invalid exclusion glob pattern.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error (malformed document or uncompilable pattern).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem traversal failure.
    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Naming-convention linter for one run over one project tree.
pub struct Linter {
    registry: RuleRegistry,
    short_names: Vec<String>,
    exclude_folders: Vec<glob::Pattern>,
    exclude_files: Vec<glob::Pattern>,
    result: LintResult,
}

impl Linter {
    /// Creates a linter from configuration.
    ///
    /// All rule patterns and exclusion globs are compiled here; any failure
    /// is fatal before the first check.
    ///
    /// # Errors
    ///
    /// Returns an error when a rule pattern or exclusion glob is invalid.
    pub fn new(config: &Config) -> Result<Self, LintError> {
        let registry = RuleRegistry::from_config(config)?;
        let exclude_folders = compile_globs(&config.exclusions.folders)?;
        let exclude_files = compile_globs(&config.exclusions.files)?;

        Ok(Self {
            registry,
            short_names: config.exemptions.short_names.clone(),
            exclude_folders,
            exclude_files,
            result: LintResult::new(),
        })
    }

    /// Walks the project tree depth-first and checks every eligible name.
    ///
    /// Directory entries are visited in file-name order, so repeated runs
    /// over an unchanged tree produce identical diagnostic sequences.
    ///
    /// # Errors
    ///
    /// Returns an error on IO failure or the first unparsable source file;
    /// the walk does not continue past either.
    pub fn lint_project(&mut self, root: &Path) -> Result<(), LintError> {
        info!("Linting {} with {} rules", root.display(), self.registry.len());

        let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative = relative_to(entry.path(), root);

            if entry.file_type().is_dir() {
                if matches_any(&self.exclude_folders, &name) {
                    debug!("Skipping excluded folder: {}", relative.display());
                    walker.skip_current_dir();
                    continue;
                }
                // The root itself is not a checkable folder name.
                if entry.depth() > 0 {
                    self.check_path_name(&name, EntityKind::Folder, relative);
                }
            } else if entry.file_type().is_file() {
                if matches_any(&self.exclude_files, &name) {
                    debug!("Skipping excluded file: {}", relative.display());
                    continue;
                }
                if name.ends_with(SOURCE_EXTENSION) {
                    self.check_path_name(&name, EntityKind::File, relative.clone());
                    self.check_source_file(entry.path(), relative)?;
                }
            }
        }

        let (errors, warnings) = self.result.count_by_severity();
        info!(
            "Lint complete: {} error(s), {} warning(s) in {} file(s)",
            errors, warnings, self.result.files_checked
        );

        Ok(())
    }

    /// Returns the accumulated result for this run.
    #[must_use]
    pub fn result(&self) -> &LintResult {
        &self.result
    }

    /// Consumes the linter, yielding the result.
    #[must_use]
    pub fn into_result(self) -> LintResult {
        self.result
    }

    /// True if at least one diagnostic was recorded.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.result.has_failures()
    }

    /// Checks a folder or file base name. Path names report line 1 column 1.
    fn check_path_name(&mut self, name: &str, kind: EntityKind, relative: PathBuf) {
        let entity = Entity::new(name, kind, true, Location::new(relative, 1, 1));
        self.check_entity(&entity);
    }

    /// Parses one source file and checks every declaration in it.
    fn check_source_file(&mut self, path: &Path, relative: PathBuf) -> Result<(), LintError> {
        debug!("Checking {}", relative.display());

        let content = std::fs::read_to_string(path)?;
        let entities =
            parser::declarations(&relative, &content).map_err(|e| LintError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for entity in &entities {
            self.check_entity(entity);
        }
        self.result.files_checked += 1;

        Ok(())
    }

    /// Classification, exemption, and matching for one entity.
    fn check_entity(&mut self, entity: &Entity) {
        let category = classify(entity.kind, &entity.name, self.registry.handler_suffix());

        // Absent rule means the category is unchecked.
        let Some(rule) = self.registry.lookup(category.key()) else {
            return;
        };

        if category.exported_only() && !entity.exported {
            return;
        }

        if is_exempt(entity, category, rule, &self.short_names) {
            return;
        }

        if rule.matches(&entity.name) {
            return;
        }

        let described = if rule.description.is_empty() {
            format!("pattern '{}'", rule.pattern)
        } else {
            rule.description.clone()
        };
        let mut diagnostic = Diagnostic::new(
            category.key(),
            rule.severity,
            entity.location.clone(),
            format!(
                "{} '{}' should match: {}",
                category.display_name(),
                entity.name,
                described
            ),
        );
        if let Some(suggestion) = &rule.suggestion {
            diagnostic = diagnostic.with_suggestion(suggestion.clone());
        }
        self.result.record(diagnostic);
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<glob::Pattern>, glob::PatternError> {
    patterns.iter().map(|p| glob::Pattern::new(p)).collect()
}

fn matches_any(patterns: &[glob::Pattern], name: &str) -> bool {
    patterns.iter().any(|p| p.matches(name))
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
