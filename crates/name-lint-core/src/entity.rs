//! Syntactic entities under naming check.

use crate::types::Location;

/// Declaration kind of a checked entity.
///
/// This is the closed set of syntactic shapes the dispatcher knows how to
/// route to a rule category. `HandlerFunction` is normally produced by the
/// dispatcher itself (a function reclassified by suffix), but a parser that
/// already knows the suffix may tag entities with it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A directory name encountered during traversal.
    Folder,
    /// A source file name.
    File,
    /// A free function or method.
    Function,
    /// A function whose name carries the configured handler suffix.
    HandlerFunction,
    /// A `static` item or `let` binding.
    Variable,
    /// A `const` item.
    Constant,
    /// A `struct` declaration.
    Struct,
    /// A `trait` declaration.
    Interface,
}

/// One syntactic construct under test.
///
/// Entities are produced transiently during traversal and never persisted;
/// each one is classified, possibly exempted, matched, and dropped.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Identifier text.
    pub name: String,
    /// Declaration kind.
    pub kind: EntityKind,
    /// Whether the declaration has non-inherited visibility.
    pub exported: bool,
    /// Where the name was declared.
    pub location: Location,
}

impl Entity {
    /// Creates a new entity.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: EntityKind,
        exported: bool,
        location: Location,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            exported,
            location,
        }
    }
}
