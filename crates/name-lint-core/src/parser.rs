//! Declaration extraction from Rust source via `syn`.
//!
//! This is the boundary to the external parser: it turns one source file
//! into the flat sequence of named declarations the dispatcher classifies.
//! Declarations surfaced:
//!
//! - free functions and impl methods (function kind),
//! - `struct` declarations (struct kind),
//! - `trait` declarations (interface kind),
//! - `const` items at module and impl level (constant kind),
//! - `static` items and `let` bindings (variable kind).
//!
//! Trait-item signatures are not surfaced separately; their implementations
//! are, which avoids reporting the same name twice per trait.
//!
//! A parse failure is returned to the caller, which treats it as fatal for
//! the whole run.

use crate::entity::{Entity, EntityKind};
use crate::types::Location;
use std::path::{Path, PathBuf};
use syn::visit::{self, Visit};
use syn::{
    ImplItemConst, ImplItemFn, ItemConst, ItemFn, ItemStatic, ItemStruct, ItemTrait, Local, Pat,
    Visibility,
};

/// Extracts all named declarations from one source file.
///
/// `file` is the path recorded in entity locations (typically relative to
/// the lint root).
///
/// # Errors
///
/// Returns the `syn` error when the source does not parse.
pub fn declarations(file: &Path, content: &str) -> Result<Vec<Entity>, syn::Error> {
    let ast = syn::parse_file(content)?;
    let mut visitor = DeclarationVisitor {
        file: file.to_path_buf(),
        entities: Vec::new(),
    };
    visitor.visit_file(&ast);
    Ok(visitor.entities)
}

struct DeclarationVisitor {
    file: PathBuf,
    entities: Vec<Entity>,
}

impl DeclarationVisitor {
    fn push(&mut self, ident: &syn::Ident, kind: EntityKind, vis: Option<&Visibility>) {
        let exported = vis.is_some_and(|v| !matches!(v, Visibility::Inherited));
        let location = Location::from_span(self.file.clone(), ident.span());
        self.entities
            .push(Entity::new(ident.to_string(), kind, exported, location));
    }

    /// Collects bound identifiers from a `let` pattern, descending through
    /// type ascriptions and tuples.
    fn push_pattern_idents(&mut self, pat: &Pat) {
        match pat {
            Pat::Ident(p) => self.push(&p.ident, EntityKind::Variable, None),
            Pat::Type(p) => self.push_pattern_idents(&p.pat),
            Pat::Tuple(p) => {
                for elem in &p.elems {
                    self.push_pattern_idents(elem);
                }
            }
            Pat::Reference(p) => self.push_pattern_idents(&p.pat),
            _ => {}
        }
    }
}

impl<'ast> Visit<'ast> for DeclarationVisitor {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        self.push(&node.sig.ident, EntityKind::Function, Some(&node.vis));
        visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast ImplItemFn) {
        self.push(&node.sig.ident, EntityKind::Function, Some(&node.vis));
        visit::visit_impl_item_fn(self, node);
    }

    fn visit_item_struct(&mut self, node: &'ast ItemStruct) {
        self.push(&node.ident, EntityKind::Struct, Some(&node.vis));
        visit::visit_item_struct(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast ItemTrait) {
        self.push(&node.ident, EntityKind::Interface, Some(&node.vis));
        visit::visit_item_trait(self, node);
    }

    fn visit_item_const(&mut self, node: &'ast ItemConst) {
        self.push(&node.ident, EntityKind::Constant, Some(&node.vis));
        visit::visit_item_const(self, node);
    }

    fn visit_impl_item_const(&mut self, node: &'ast ImplItemConst) {
        self.push(&node.ident, EntityKind::Constant, Some(&node.vis));
        visit::visit_impl_item_const(self, node);
    }

    fn visit_item_static(&mut self, node: &'ast ItemStatic) {
        self.push(&node.ident, EntityKind::Variable, Some(&node.vis));
        visit::visit_item_static(self, node);
    }

    fn visit_local(&mut self, node: &'ast Local) {
        self.push_pattern_idents(&node.pat);
        visit::visit_local(self, node);
    }
}
