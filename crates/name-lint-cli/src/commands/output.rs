//! Shared output formatting for lint results.

use anyhow::Result;
use name_lint_core::{LintResult, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        let severity_tag = match diagnostic.severity {
            Severity::Error => "\x1b[31mERROR\x1b[0m",
            Severity::Warning => "\x1b[33mWARNING\x1b[0m",
        };

        println!(
            "[{}] {}:{}:{} - {}",
            severity_tag,
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.message,
        );
        if let Some(suggestion) = &diagnostic.suggestion {
            println!("  Suggestion: {suggestion}");
        }
    }

    let (errors, warnings) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    if result.has_failures() {
        println!(
            "\n{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
            summary_color, errors, warnings, result.files_checked
        );
    } else {
        println!(
            "{}All naming checks passed ({} file(s))\x1b[0m",
            summary_color, result.files_checked
        );
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}
