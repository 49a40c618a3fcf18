//! Rule registry: compiled per-category rules.
//!
//! Patterns are compiled exactly once when the registry is built from
//! configuration; an uncompilable or empty pattern is a load-time
//! [`ConfigError`], never a per-check fault. The compiled [`Regex`] held by
//! each rule doubles as the match cache required for repeated checks.

use crate::config::{Config, ConfigError, RuleConfig};
use crate::dispatch::Category;
use crate::types::Severity;
use regex::Regex;
use std::collections::HashMap;

/// A validated, compiled naming rule for one category.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Original pattern source, for diagnostics.
    pub pattern: String,
    /// Compiled pattern; full-string semantics are the pattern's own
    /// responsibility (no implicit anchoring).
    regex: Regex,
    /// Human-readable description shown in messages.
    pub description: String,
    /// Names exempted unconditionally.
    pub exceptions: Vec<String>,
    /// Category-defining suffix, non-empty only for suffix-triggered rules.
    pub suffix: Option<String>,
    /// Severity attached to diagnostics from this rule.
    pub severity: Severity,
    /// Suggestion text attached to diagnostics from this rule.
    pub suggestion: Option<String>,
}

impl Rule {
    /// Compiles a rule from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPattern`] or [`ConfigError::Pattern`]
    /// when the pattern is empty or fails to compile.
    pub fn compile(
        category: &str,
        cfg: &RuleConfig,
        default_severity: Severity,
    ) -> Result<Self, ConfigError> {
        if cfg.pattern.is_empty() {
            return Err(ConfigError::EmptyPattern {
                category: category.to_string(),
            });
        }
        let regex = Regex::new(&cfg.pattern).map_err(|source| ConfigError::Pattern {
            category: category.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: cfg.pattern.clone(),
            regex,
            description: cfg.description.clone(),
            exceptions: cfg.exceptions.clone(),
            suffix: cfg.suffix.clone(),
            severity: cfg.severity.unwrap_or(default_severity),
            suggestion: cfg.suggestion.clone(),
        })
    }

    /// Evaluates the compiled pattern against a name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Returns the suffix if it is configured non-empty.
    #[must_use]
    pub fn active_suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }
}

/// Mapping from category name to compiled rule.
///
/// Built once from configuration, read-only for the run's duration. A
/// category with no configured rule is unchecked: every lookup for it
/// returns `None` and the caller treats the check as a no-op.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Builds the registry from configuration, compiling every pattern.
    ///
    /// # Errors
    ///
    /// Returns the first pattern compile failure; configuration with any
    /// invalid rule is rejected before use.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut rules = HashMap::new();
        for (category, rule_cfg) in &config.rules {
            let default_severity = Self::builtin_category(category)
                .map_or(Severity::Error, Category::default_severity);
            let rule = Rule::compile(category, rule_cfg, default_severity)?;
            rules.insert(category.clone(), rule);
        }
        Ok(Self { rules })
    }

    /// Looks up the rule for a category, if one is configured.
    #[must_use]
    pub fn lookup(&self, category: &str) -> Option<&Rule> {
        self.rules.get(category)
    }

    /// Returns the handler suffix if the handler rule is configured with a
    /// non-empty one.
    #[must_use]
    pub fn handler_suffix(&self) -> Option<&str> {
        self.lookup(Category::Handler.key())
            .and_then(Rule::active_suffix)
    }

    /// Number of configured rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn builtin_category(key: &str) -> Option<Category> {
        [
            Category::Folder,
            Category::File,
            Category::Handler,
            Category::Function,
            Category::Struct,
            Category::Interface,
            Category::Constant,
            Category::Variable,
        ]
        .into_iter()
        .find(|c| c.key() == key)
    }
}
