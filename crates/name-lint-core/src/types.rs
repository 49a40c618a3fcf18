//! Core types for naming diagnostics and run results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for naming diagnostics.
///
/// Severity is a property of the rule category, not of the individual
/// violation; it affects presentation only, never control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location of a checked name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File (or folder) path relative to the lint root.
    pub file: PathBuf,
    /// Line number (1-indexed; folders and file names report line 1).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }

    /// Creates a location from a `proc-macro2` span.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
        }
    }
}

/// One naming violation found during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category key of the violated rule (e.g. "function-naming").
    pub category: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Where the offending name was declared.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional rename suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic without a suggestion.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Formats the diagnostic for terminal output.
    ///
    /// Renders as `[SEVERITY] file:line:col - message` with an indented
    /// suggestion line when one is present.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "[{}] {}:{}:{} - {}",
            self.severity.to_string().to_uppercase(),
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.message,
        );
        if let Some(suggestion) = &self.suggestion {
            let _ = write!(output, "\n  Suggestion: {suggestion}");
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.category,
            self.message
        )
    }
}

/// Result of one lint run: an insertion-ordered diagnostic sequence.
///
/// Order is discovery order during the directory walk; no deduplication
/// and no truncation are applied.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of source files parsed and checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic to the sequence.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns true if at least one diagnostic was recorded.
    ///
    /// Both severities count toward failure; a warning-only run still fails.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Counts diagnostics by severity as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warnings = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        (errors, warnings)
    }

    /// Prints all diagnostics and a summary line to stdout.
    pub fn print_report(&self) {
        for diagnostic in &self.diagnostics {
            println!("{}", diagnostic.format());
        }

        let (errors, warnings) = self.count_by_severity();
        println!(
            "\nFound {} error(s), {} warning(s) in {} file(s)",
            errors, warnings, self.files_checked
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity) -> Diagnostic {
        Diagnostic::new(
            "function-naming",
            severity,
            Location::new(PathBuf::from("src/lib.rs"), 42, 10),
            "Function 'DoWork' should match: snake_case",
        )
    }

    #[test]
    fn format_renders_severity_and_location() {
        let d = make_diagnostic(Severity::Error);
        assert_eq!(
            d.format(),
            "[ERROR] src/lib.rs:42:10 - Function 'DoWork' should match: snake_case"
        );
    }

    #[test]
    fn format_appends_suggestion_line() {
        let d = make_diagnostic(Severity::Warning).with_suggestion("Use snake_case");
        let formatted = d.format();
        assert!(formatted.starts_with("[WARNING] "));
        assert!(formatted.ends_with("\n  Suggestion: Use snake_case"));
    }

    #[test]
    fn has_failures_counts_warnings_too() {
        let mut result = LintResult::new();
        assert!(!result.has_failures());
        result.record(make_diagnostic(Severity::Warning));
        assert!(result.has_failures());
    }

    #[test]
    fn record_preserves_insertion_order() {
        let mut result = LintResult::new();
        result.record(make_diagnostic(Severity::Warning));
        result.record(make_diagnostic(Severity::Error));
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);
        assert_eq!(result.diagnostics[1].severity, Severity::Error);
        assert_eq!(result.count_by_severity(), (1, 1));
    }
}
