//! Context-file discovery (`AGENTS.md`-style instruction files).
//!
//! Discovers persistent instruction files from a hierarchy — user-global
//! config, project root, `.promptweave/` directory, and local overrides —
//! and reports both the ordered list of filenames that were found and their
//! concatenated content. The filename list feeds the prompt's enumeration
//! sections; the content is what callers typically pass as the user-memory
//! argument of [`PromptProvider::build`](crate::PromptProvider::build).
//!
//! This is the only module in the crate that touches the filesystem. The
//! composition engine itself stays pure.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename used when no custom context filenames are configured or found.
pub const DEFAULT_CONTEXT_FILENAME: &str = "AGENTS.md";

/// Result of a discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFiles {
    /// Filenames with at least one match, in discovery order. Never empty:
    /// [`DEFAULT_CONTEXT_FILENAME`] is substituted when nothing was found.
    pub filenames: Vec<String>,
    /// Concatenated content of every file found, in discovery order.
    pub content: String,
}

/// Discover context files for the given configured filenames.
///
/// For each name, in order, the hierarchy is probed:
///
/// 1. `~/.config/promptweave/{name}` (user-global)
/// 2. `{root}/{name}`
/// 3. `{root}/.promptweave/{name}`
/// 4. `{root}/{stem}.local.{ext}` (e.g. `AGENTS.local.md`)
///
/// A name is recorded once if any of its candidates exists; content from all
/// existing candidates is concatenated. With `project_root = None` only the
/// user-global location is probed.
pub fn discover(project_root: Option<&Path>, names: &[String]) -> ContextFiles {
    let mut filenames: Vec<String> = Vec::new();
    let mut parts: Vec<String> = Vec::new();

    for name in names {
        let mut found = false;
        for path in candidate_paths(project_root, name) {
            if let Some(content) = read_optional(&path) {
                debug!(path = %path.display(), "loaded context file");
                parts.push(content.trim().to_string());
                found = true;
            }
        }
        if found {
            filenames.push(name.clone());
        }
    }

    if filenames.is_empty() {
        filenames.push(DEFAULT_CONTEXT_FILENAME.to_string());
    }

    ContextFiles {
        filenames,
        content: parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn candidate_paths(project_root: Option<&Path>, name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = home_dir() {
        candidates.push(home.join(".config/promptweave").join(name));
    }
    if let Some(root) = project_root {
        candidates.push(root.join(name));
        candidates.push(root.join(".promptweave").join(name));
        candidates.push(root.join(local_variant(name)));
    }
    candidates
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Read a file if it exists and is readable.
fn read_optional(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Local-override variant of a filename: `AGENTS.md` → `AGENTS.local.md`.
fn local_variant(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}.local.{ext}"),
        None => format!("{name}.local"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn nothing_found_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover(Some(dir.path()), &["MISSING.md".to_string()]);
        assert_eq!(found.filenames, [DEFAULT_CONTEXT_FILENAME]);
        assert!(found.content.is_empty());
    }

    #[test]
    fn finds_file_at_project_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AGENTS.md"), "Be concise.").unwrap();

        let found = discover(Some(dir.path()), &["AGENTS.md".to_string()]);
        assert_eq!(found.filenames, ["AGENTS.md"]);
        assert_eq!(found.content, "Be concise.");
    }

    #[test]
    fn concatenates_hierarchy_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("AGENTS.md"), "Base rules.").unwrap();
        fs::create_dir_all(root.join(".promptweave")).unwrap();
        fs::write(root.join(".promptweave/AGENTS.md"), "Project rules.").unwrap();
        fs::write(root.join("AGENTS.local.md"), "Local rules.").unwrap();

        let found = discover(Some(root), &["AGENTS.md".to_string()]);
        assert_eq!(found.filenames, ["AGENTS.md"]);
        assert_eq!(found.content, "Base rules.\n\nProject rules.\n\nLocal rules.");
    }

    #[test]
    fn filename_order_follows_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("CUSTOM.md"), "Custom.").unwrap();
        fs::write(root.join("AGENTS.md"), "Agents.").unwrap();

        let found = discover(
            Some(root),
            &["CUSTOM.md".to_string(), "AGENTS.md".to_string()],
        );
        assert_eq!(found.filenames, ["CUSTOM.md", "AGENTS.md"]);
        assert_eq!(found.content, "Custom.\n\nAgents.");
    }

    #[test]
    fn missing_names_are_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AGENTS.md"), "Rules.").unwrap();

        let found = discover(
            Some(dir.path()),
            &["MISSING.md".to_string(), "AGENTS.md".to_string()],
        );
        assert_eq!(found.filenames, ["AGENTS.md"]);
    }

    #[test]
    fn local_variant_inserts_before_extension() {
        assert_eq!(local_variant("AGENTS.md"), "AGENTS.local.md");
        assert_eq!(local_variant("CONTEXT"), "CONTEXT.local");
    }
}
