//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r##"# name-lint configuration
# Each [rules.<category>] table defines the naming rule for one category.
# Removing a table disables checking for that category entirely.

[rules.folder-naming]
pattern = "^[a-z][a-z0-9_]*$"
description = "Folder names should be snake_case"
exceptions = [".git", ".github"]
suggestion = "Use lowercase_with_underscores"

[rules.file-naming]
pattern = "^[a-z][a-z0-9_]*\\.rs$"
description = "Source files should be snake_case"
suggestion = "Use lowercase_with_underscores.rs"

[rules.handler-naming]
# An empty suffix disables handler reclassification.
pattern = "^[a-z][a-z0-9_]*_handler$"
description = "Handler functions should be snake_case and end with '_handler'"
suffix = "_handler"
suggestion = "Use snake_case ending with '_handler'"

[rules.function-naming]
pattern = "^[a-z][a-z0-9_]*$"
description = "Public functions should be snake_case"
exceptions = ["main"]
suggestion = "Use snake_case for public functions"

[rules.variable-naming]
# Leading underscore marks deliberately unused bindings; the UPPER_SNAKE
# alternative covers statics.
pattern = "^(_?[a-z][a-z0-9_]*|[A-Z][A-Z0-9_]*)$"
description = "Variables should be snake_case (statics UPPER_SNAKE_CASE)"
exceptions = ["i", "j", "k"]
suggestion = "Use snake_case"
# severity = "error"  # Override the default severity

[rules.constant-naming]
pattern = "^[A-Z][A-Z0-9_]*$"
description = "Constants should be UPPER_SNAKE_CASE"
suggestion = "Use UPPERCASE_WITH_UNDERSCORES"

[rules.struct-naming]
pattern = "^[A-Z][a-zA-Z0-9]*$"
description = "Structs should be PascalCase"
suggestion = "Use PascalCase"

[rules.interface-naming]
pattern = "^[A-Z][a-zA-Z0-9]*$"
description = "Traits should be PascalCase"
suggestion = "Use PascalCase"

[exclusions]
# Globs matched against base names, not full paths. An excluded folder
# skips its entire subtree.
folders = ["target", ".git", "vendor", "node_modules", "dist", "build"]
files = ["*.gen.rs", "*_generated.rs"]

[exemptions]
# Unexported variables/constants with these names (or any single-character
# name) are never checked.
short_names = ["id", "db", "ok", "err"]
"##;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("name-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created name-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit name-lint.toml to adjust rules");
    println!("  2. Run: name-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use name_lint_core::{Config, RuleRegistry};

    #[test]
    fn default_config_template_parses_and_compiles() {
        let config = Config::parse(DEFAULT_CONFIG).expect("template parses");
        assert_eq!(config.rules.len(), 8);
        let registry = RuleRegistry::from_config(&config).expect("patterns compile");
        assert_eq!(registry.handler_suffix(), Some("_handler"));
    }

    #[test]
    fn template_matches_builtin_defaults() {
        let from_template = Config::parse(DEFAULT_CONFIG).expect("template parses");
        let builtin = Config::default();

        for (category, rule) in &builtin.rules {
            let templated = &from_template.rules[category];
            assert_eq!(templated.pattern, rule.pattern, "pattern for {category}");
            assert_eq!(templated.suffix, rule.suffix, "suffix for {category}");
        }
        assert_eq!(from_template.exclusions.folders, builtin.exclusions.folders);
        assert_eq!(
            from_template.exemptions.short_names,
            builtin.exemptions.short_names
        );
    }
}
