//! Exemption policy: names that bypass pattern matching unconditionally.
//!
//! Evaluated before the matcher; an exempt name never reaches pattern
//! evaluation and can never produce a diagnostic. Two exemptions exist, in
//! priority order:
//!
//! 1. The name appears in the rule's exception list (exact, case-sensitive).
//! 2. The entity is unexported and the name is a conventionally short
//!    identifier (single character, or in the short-name set). This applies
//!    only to the variable/constant categories; short throwaway names are
//!    idiomatic for local bindings, not for types or functions.

use crate::dispatch::Category;
use crate::entity::Entity;
use crate::registry::Rule;

/// Decides whether an entity bypasses pattern checking for its rule.
#[must_use]
pub fn is_exempt(entity: &Entity, category: Category, rule: &Rule, short_names: &[String]) -> bool {
    if rule.exceptions.iter().any(|e| e == &entity.name) {
        return true;
    }

    if !entity.exported
        && category.allows_short_names()
        && (entity.name.chars().count() == 1 || short_names.iter().any(|s| s == &entity.name))
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::entity::EntityKind;
    use crate::types::{Location, Severity};
    use std::path::PathBuf;

    fn rule_with_exceptions(exceptions: &[&str]) -> Rule {
        Rule::compile(
            "variable-naming",
            &RuleConfig {
                pattern: "^[a-z][a-z0-9_]*$".to_string(),
                exceptions: exceptions.iter().map(ToString::to_string).collect(),
                ..RuleConfig::default()
            },
            Severity::Warning,
        )
        .expect("test rule compiles")
    }

    fn entity(name: &str, kind: EntityKind, exported: bool) -> Entity {
        Entity::new(
            name,
            kind,
            exported,
            Location::new(PathBuf::from("src/lib.rs"), 1, 1),
        )
    }

    fn short_names() -> Vec<String> {
        ["id", "db", "ok", "err"].map(String::from).to_vec()
    }

    #[test]
    fn exception_list_exempts_exactly() {
        let rule = rule_with_exceptions(&["XMLParser"]);
        let e = entity("XMLParser", EntityKind::Variable, true);
        assert!(is_exempt(&e, Category::Variable, &rule, &short_names()));

        // Case-sensitive: a different casing is not exempt.
        let e = entity("xmlparser", EntityKind::Variable, true);
        assert!(!is_exempt(&e, Category::Variable, &rule, &short_names()));
    }

    #[test]
    fn unexported_short_names_exempt_for_variables() {
        let rule = rule_with_exceptions(&[]);
        for name in ["x", "id", "db", "ok", "err"] {
            let e = entity(name, EntityKind::Variable, false);
            assert!(
                is_exempt(&e, Category::Variable, &rule, &short_names()),
                "{name} should be exempt"
            );
        }
    }

    #[test]
    fn unexported_short_names_exempt_for_constants() {
        let rule = rule_with_exceptions(&[]);
        let e = entity("db", EntityKind::Constant, false);
        assert!(is_exempt(&e, Category::Constant, &rule, &short_names()));
    }

    #[test]
    fn exported_short_names_are_not_exempt() {
        let rule = rule_with_exceptions(&[]);
        let e = entity("id", EntityKind::Variable, true);
        assert!(!is_exempt(&e, Category::Variable, &rule, &short_names()));
    }

    #[test]
    fn short_name_exemption_does_not_apply_to_types_or_functions() {
        let rule = rule_with_exceptions(&[]);
        for (kind, category) in [
            (EntityKind::Function, Category::Function),
            (EntityKind::Struct, Category::Struct),
            (EntityKind::Interface, Category::Interface),
        ] {
            let e = entity("id", kind, false);
            assert!(
                !is_exempt(&e, category, &rule, &short_names()),
                "{category} must not get the short-name exemption"
            );
        }
    }

    #[test]
    fn configured_short_name_set_is_respected() {
        let rule = rule_with_exceptions(&[]);
        let custom = vec!["tx".to_string()];

        let e = entity("tx", EntityKind::Variable, false);
        assert!(is_exempt(&e, Category::Variable, &rule, &custom));

        // The built-in names are gone once overridden.
        let e = entity("db", EntityKind::Variable, false);
        assert!(!is_exempt(&e, Category::Variable, &rule, &custom));
    }

    #[test]
    fn single_character_exempt_regardless_of_set() {
        let rule = rule_with_exceptions(&[]);
        let e = entity("n", EntityKind::Variable, false);
        assert!(is_exempt(&e, Category::Variable, &rule, &[]));
    }
}
