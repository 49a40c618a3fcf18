//! Category dispatch: mapping declaration kinds to rule categories.
//!
//! Several categories can apply to the same physical syntax node (a function
//! may be a handler, a value declaration may be a constant), so dispatch is
//! a fixed-priority pure function over `(kind, suffix state)`. The suffix
//! check runs first for functions: a configured handler suffix reclassifies
//! the function before the generic function category is considered.

use crate::entity::EntityKind;
use crate::types::Severity;

/// A rule category: one named class of syntactic entity with its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Directory names.
    Folder,
    /// Source file names.
    File,
    /// Functions reclassified by the handler suffix.
    Handler,
    /// Plain functions and methods.
    Function,
    /// Struct declarations.
    Struct,
    /// Trait declarations.
    Interface,
    /// Constant declarations.
    Constant,
    /// Variable declarations and local bindings.
    Variable,
}

impl Category {
    /// Registry key for this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Folder => "folder-naming",
            Self::File => "file-naming",
            Self::Handler => "handler-naming",
            Self::Function => "function-naming",
            Self::Struct => "struct-naming",
            Self::Interface => "interface-naming",
            Self::Constant => "constant-naming",
            Self::Variable => "variable-naming",
        }
    }

    /// Default severity for diagnostics in this category.
    ///
    /// Structural categories (folders, files, local variables) default to
    /// warnings; API-surface categories default to errors. Overridable per
    /// rule in configuration.
    #[must_use]
    pub fn default_severity(self) -> Severity {
        match self {
            Self::Folder | Self::File | Self::Variable => Severity::Warning,
            Self::Handler | Self::Function | Self::Struct | Self::Interface | Self::Constant => {
                Severity::Error
            }
        }
    }

    /// Whether this category checks exported names only.
    ///
    /// Unexported functions and constants are local implementation detail
    /// and are never validated against their rule.
    #[must_use]
    pub fn exported_only(self) -> bool {
        matches!(self, Self::Function | Self::Constant)
    }

    /// Whether the unexported short-identifier exemption applies.
    #[must_use]
    pub fn allows_short_names(self) -> bool {
        matches!(self, Self::Variable | Self::Constant)
    }

    /// Human-readable word used in diagnostic messages.
    ///
    /// Reflects the resolved category, not the raw declaration kind: a
    /// function reclassified as a handler reads "Handler" in its message.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::File => "File",
            Self::Handler => "Handler",
            Self::Function => "Function",
            Self::Struct => "Struct",
            Self::Interface => "Trait",
            Self::Constant => "Constant",
            Self::Variable => "Variable",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Classifies an entity into the single category it must satisfy.
///
/// `handler_suffix` is the suffix configured on the handler rule, if any.
/// An empty suffix disables handler reclassification entirely: every
/// function falls through to [`Category::Function`], it never matches
/// everything.
#[must_use]
pub fn classify(kind: EntityKind, name: &str, handler_suffix: Option<&str>) -> Category {
    match kind {
        EntityKind::Folder => Category::Folder,
        EntityKind::File => Category::File,
        EntityKind::HandlerFunction => Category::Handler,
        EntityKind::Function => match handler_suffix {
            Some(suffix) if !suffix.is_empty() && name.ends_with(suffix) => Category::Handler,
            _ => Category::Function,
        },
        EntityKind::Struct => Category::Struct,
        EntityKind::Interface => Category::Interface,
        EntityKind::Constant => Category::Constant,
        EntityKind::Variable => Category::Variable,
    }
}
