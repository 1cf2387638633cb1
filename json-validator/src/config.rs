//! Configuration types for a validation run.

use std::path::PathBuf;

/// Substrings excluded by default: dependency cache, lock file, VCS metadata.
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", "package-lock.json", ".git"];

/// File name suffix that marks a candidate.
pub const TARGET_EXTENSION: &str = ".json";

/// Options controlling how the tree under `root` is walked.
///
/// Ignore patterns are plain substrings matched against the whole absolute
/// path, so `.git` also excludes `.github/`. Callers that want segment-based
/// matching must filter the walk output themselves.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct WalkConfig {
    /// Directory to scan. Relative paths are resolved against the current
    /// working directory.
    pub root: PathBuf,
    /// Substrings that exclude a path (and, for directories, the whole subtree).
    pub ignore: Vec<String>,
    /// Follow symbolic links, treating each entry the way `stat` sees it
    /// (default: `true`). A dangling link then aborts the walk.
    pub follow_links: bool,
    /// Sort siblings by file name instead of using the OS listing order
    /// (default: `false`).
    pub sort: bool,
}

impl WalkConfig {
    /// Config for `root` with the default ignore list.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Whether `path` contains any ignore pattern as a substring.
    #[must_use]
    pub fn is_ignored(&self, path: &std::path::Path) -> bool {
        let path_str = path.to_string_lossy();
        self.ignore
            .iter()
            .any(|pattern| path_str.contains(pattern.as_str()))
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore: DEFAULT_IGNORE.iter().map(|s| (*s).to_owned()).collect(),
            follow_links: true,
            sort: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_ignore_list() {
        let cfg = WalkConfig::default();
        assert_eq!(cfg.ignore, vec!["node_modules", "package-lock.json", ".git"]);
        assert!(cfg.follow_links);
        assert!(!cfg.sort);
    }

    #[test]
    fn test_is_ignored_substring_anywhere() {
        let cfg = WalkConfig::new("/repo");
        assert!(cfg.is_ignored(Path::new("/repo/node_modules/x/package.json")));
        assert!(cfg.is_ignored(Path::new("/repo/package-lock.json")));
        assert!(cfg.is_ignored(Path::new("/repo/.git")));
        // Substring semantics: `.github` contains `.git`.
        assert!(cfg.is_ignored(Path::new("/repo/.github/workflow.json")));
        assert!(!cfg.is_ignored(Path::new("/repo/src/data.json")));
    }

    #[test]
    fn test_empty_ignore_list_matches_nothing() {
        let mut cfg = WalkConfig::new("/repo");
        cfg.ignore.clear();
        assert!(!cfg.is_ignored(Path::new("/repo/node_modules/a.json")));
    }
}
