//! Install-hook command: wires name-lint into git pre-commit.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Hook script used when the project does not ship its own
/// `pre-commit-hook.sh`.
const DEFAULT_HOOK: &str = r#"#!/bin/sh
# Installed by `name-lint install-hook`.
name-lint check .
"#;

/// Runs the install-hook command.
///
/// Installs `{root}/pre-commit-hook.sh` (or the built-in script when the
/// project has none) as `.git/hooks/pre-commit`, executable on Unix.
pub fn run(root: &Path) -> Result<()> {
    let hooks_dir = root.join(".git").join("hooks");
    if !hooks_dir.is_dir() {
        bail!(
            "{} is not a git repository (no .git/hooks directory)",
            root.display()
        );
    }

    let source = root.join("pre-commit-hook.sh");
    let content = if source.exists() {
        std::fs::read_to_string(&source)
            .with_context(|| format!("Failed to read hook script {}", source.display()))?
    } else {
        DEFAULT_HOOK.to_string()
    };

    let target = hooks_dir.join("pre-commit");
    std::fs::write(&target, content)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to make {} executable", target.display()))?;
    }

    println!("Installed pre-commit hook at {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn refuses_outside_git_repository() {
        let tmp = TempDir::new().unwrap();
        let err = run(tmp.path()).expect_err("no .git directory");
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn installs_builtin_hook_when_no_script_present() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git/hooks")).unwrap();

        run(tmp.path()).expect("install succeeds");

        let installed = fs::read_to_string(tmp.path().join(".git/hooks/pre-commit")).unwrap();
        assert_eq!(installed, DEFAULT_HOOK);
    }

    #[test]
    fn prefers_project_hook_script() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git/hooks")).unwrap();
        fs::write(
            tmp.path().join("pre-commit-hook.sh"),
            "#!/bin/sh\necho custom\n",
        )
        .unwrap();

        run(tmp.path()).expect("install succeeds");

        let installed = fs::read_to_string(tmp.path().join(".git/hooks/pre-commit")).unwrap();
        assert!(installed.contains("echo custom"));
    }

    #[cfg(unix)]
    #[test]
    fn installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git/hooks")).unwrap();

        run(tmp.path()).expect("install succeeds");

        let mode = fs::metadata(tmp.path().join(".git/hooks/pre-commit"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
