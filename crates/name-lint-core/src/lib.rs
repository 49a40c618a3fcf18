//! # name-lint-core
//!
//! Core engine for naming-convention linting of Rust projects.
//!
//! The engine classifies syntactic entities (functions, types, variables,
//! constants, files, folders) and validates each name against the regex
//! rule configured for its category:
//!
//! - [`RuleRegistry`] holds compiled per-category rules
//! - [`classify`] resolves the single category an entity must satisfy
//! - [`is_exempt`] decides unconditional exemptions before matching
//! - [`Linter`] walks a project tree and accumulates a [`LintResult`]
//!
//! ## Example
//!
//! ```ignore
//! use name_lint_core::{Config, Linter};
//!
//! let config = Config::default();
//! let mut linter = Linter::new(&config)?;
//! linter.lint_project(std::path::Path::new("."))?;
//! linter.result().print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dispatch;
mod entity;
mod exempt;
mod linter;
mod parser;
mod registry;
mod types;

pub use config::{Config, ConfigError, Exclusions, Exemptions, RuleConfig};
pub use dispatch::{classify, Category};
pub use entity::{Entity, EntityKind};
pub use exempt::is_exempt;
pub use linter::{LintError, Linter};
pub use registry::{Rule, RuleRegistry};
pub use types::{Diagnostic, LintResult, Location, Severity};
