//! Configuration types for name-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration: rule table plus traversal exclusions.
///
/// Loaded once per run and immutable thereafter. A missing configuration
/// file yields [`Config::default`]; a malformed one is a fatal load error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-category rule configurations, keyed by category name
    /// (e.g. "function-naming"). A category absent from this table is
    /// silently unchecked.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    /// Folder and file exclusion globs.
    #[serde(default)]
    pub exclusions: Exclusions,

    /// Built-in exemption overrides.
    #[serde(default)]
    pub exemptions: Exemptions,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

impl Default for Config {
    /// Built-in rules expressing common Rust conventions.
    fn default() -> Self {
        let mut rules = BTreeMap::new();

        rules.insert(
            "folder-naming".to_string(),
            RuleConfig {
                pattern: "^[a-z][a-z0-9_]*$".to_string(),
                description: "Folder names should be snake_case".to_string(),
                exceptions: vec![".git".to_string(), ".github".to_string()],
                suggestion: Some("Use lowercase_with_underscores".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "file-naming".to_string(),
            RuleConfig {
                pattern: "^[a-z][a-z0-9_]*\\.rs$".to_string(),
                description: "Source files should be snake_case".to_string(),
                suggestion: Some("Use lowercase_with_underscores.rs".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "handler-naming".to_string(),
            RuleConfig {
                pattern: "^[a-z][a-z0-9_]*_handler$".to_string(),
                description: "Handler functions should be snake_case and end with '_handler'"
                    .to_string(),
                suffix: Some("_handler".to_string()),
                suggestion: Some("Use snake_case ending with '_handler'".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "function-naming".to_string(),
            RuleConfig {
                pattern: "^[a-z][a-z0-9_]*$".to_string(),
                description: "Public functions should be snake_case".to_string(),
                exceptions: vec!["main".to_string()],
                suggestion: Some("Use snake_case for public functions".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "variable-naming".to_string(),
            RuleConfig {
                // Leading underscore marks deliberately unused bindings;
                // the UPPER_SNAKE alternative covers statics.
                pattern: "^(_?[a-z][a-z0-9_]*|[A-Z][A-Z0-9_]*)$".to_string(),
                description: "Variables should be snake_case (statics UPPER_SNAKE_CASE)"
                    .to_string(),
                exceptions: vec!["i".to_string(), "j".to_string(), "k".to_string()],
                suggestion: Some("Use snake_case".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "constant-naming".to_string(),
            RuleConfig {
                pattern: "^[A-Z][A-Z0-9_]*$".to_string(),
                description: "Constants should be UPPER_SNAKE_CASE".to_string(),
                suggestion: Some("Use UPPERCASE_WITH_UNDERSCORES".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "struct-naming".to_string(),
            RuleConfig {
                pattern: "^[A-Z][a-zA-Z0-9]*$".to_string(),
                description: "Structs should be PascalCase".to_string(),
                suggestion: Some("Use PascalCase".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            "interface-naming".to_string(),
            RuleConfig {
                pattern: "^[A-Z][a-zA-Z0-9]*$".to_string(),
                description: "Traits should be PascalCase".to_string(),
                suggestion: Some("Use PascalCase".to_string()),
                ..RuleConfig::default()
            },
        );

        Self {
            rules,
            exclusions: Exclusions::default(),
            exemptions: Exemptions::default(),
        }
    }
}

/// One category's rule: pattern plus metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Regular expression the name must match. The pattern must account
    /// for anchors itself; matching is not implicitly anchored.
    pub pattern: String,

    /// Human-readable description shown in diagnostics.
    #[serde(default)]
    pub description: String,

    /// Literal names exempted unconditionally (exact, case-sensitive).
    #[serde(default)]
    pub exceptions: Vec<String>,

    /// Suffix that reclassifies functions into this category. Only
    /// meaningful on suffix-triggered categories; empty or absent disables
    /// reclassification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Severity override; defaults to the category's built-in severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Suggestion text attached to diagnostics from this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Glob exclusions consulted during traversal, matched against base names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exclusions {
    /// Folder base-name globs whose entire subtree is skipped.
    #[serde(default)]
    pub folders: Vec<String>,

    /// File base-name globs that are skipped entirely.
    #[serde(default)]
    pub files: Vec<String>,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            folders: vec![
                "target".to_string(),
                ".git".to_string(),
                "vendor".to_string(),
                "node_modules".to_string(),
                "dist".to_string(),
                "build".to_string(),
            ],
            files: vec!["*.gen.rs".to_string(), "*_generated.rs".to_string()],
        }
    }
}

/// Overrides for the built-in exemption policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exemptions {
    /// Conventionally short identifiers exempted when unexported, in the
    /// variable/constant categories only. Single-character names are always
    /// exempt there regardless of this list.
    #[serde(default = "default_short_names")]
    pub short_names: Vec<String>,
}

impl Default for Exemptions {
    fn default() -> Self {
        Self {
            short_names: default_short_names(),
        }
    }
}

fn default_short_names() -> Vec<String> {
    ["id", "db", "ok", "err"].map(String::from).to_vec()
}

/// Configuration errors. All are fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule with an empty pattern is invalid.
    #[error("Rule '{category}' has an empty pattern")]
    EmptyPattern {
        /// Category whose pattern is empty.
        category: String,
    },

    /// A rule pattern failed to compile.
    #[error("Rule '{category}' has an invalid pattern: {source}")]
    Pattern {
        /// Category whose pattern failed.
        category: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_all_builtin_categories() {
        let config = Config::default();
        for key in [
            "folder-naming",
            "file-naming",
            "handler-naming",
            "function-naming",
            "variable-naming",
            "constant-naming",
            "struct-naming",
            "interface-naming",
        ] {
            assert!(config.rules.contains_key(key), "missing {key}");
        }
        assert!(config.exclusions.folders.contains(&"target".to_string()));
        assert_eq!(config.exemptions.short_names, ["id", "db", "ok", "err"]);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
[rules.folder-naming]
pattern = "^[a-z]+$"
description = "lowercase folders"
exceptions = [".git"]

[rules.handler-naming]
pattern = "^[A-Za-z][a-zA-Z0-9]*Handler$"
description = "PascalCase handlers"
suffix = "Handler"
severity = "warning"

[exclusions]
folders = ["target"]
files = ["*.gen.rs"]

[exemptions]
short_names = ["id", "tx"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.rules.len(), 2);
        let handler = &config.rules["handler-naming"];
        assert_eq!(handler.suffix.as_deref(), Some("Handler"));
        assert_eq!(handler.severity, Some(Severity::Warning));
        assert_eq!(config.exclusions.folders, ["target"]);
        assert_eq!(config.exemptions.short_names, ["id", "tx"]);
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        let err = Config::parse("rules = 3").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_sections_default() {
        let config = Config::parse("").expect("empty config is valid");
        assert!(config.rules.is_empty());
        assert_eq!(config.exemptions.short_names, ["id", "db", "ok", "err"]);
    }
}
