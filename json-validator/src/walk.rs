//! Tree walker.
//!
//! Enumerates candidate files under the scan root:
//! - Directories whose path contains an ignore pattern are pruned with their subtree
//! - Regular files are kept when the name ends with `.json` and the path is not ignored
//! - Any listing or stat failure aborts the walk; no partial result is returned
//!
//! Order is depth-first pre-order. Siblings come in OS listing order unless
//! `WalkConfig::sort` is set.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::{TARGET_EXTENSION, WalkConfig};
use crate::error::WalkError;

/// Resolve `root` to an absolute path and check that it is a directory.
///
/// The path is made absolute lexically; symlinks in it are kept, so
/// reported paths stay under the root the caller named.
///
/// # Errors
///
/// Returns [`WalkError::RootNotFound`], [`WalkError::RootNotDirectory`] or
/// [`WalkError::Resolve`].
pub fn resolve_root(root: &Path) -> Result<PathBuf, WalkError> {
    let absolute = std::path::absolute(root).map_err(|source| WalkError::Resolve {
        path: root.to_path_buf(),
        source,
    })?;

    match std::fs::metadata(&absolute) {
        Ok(meta) if meta.is_dir() => Ok(absolute),
        Ok(_) => Err(WalkError::RootNotDirectory(absolute)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(WalkError::RootNotFound(absolute))
        }
        Err(source) => Err(WalkError::Resolve {
            path: absolute,
            source,
        }),
    }
}

/// Whether the entry's file name ends with the target extension.
///
/// Compared on raw bytes, so non-UTF-8 names are handled and a file named
/// exactly `.json` qualifies.
fn has_target_extension(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .as_encoded_bytes()
        .ends_with(TARGET_EXTENSION.as_bytes())
}

/// Enumerate all candidate files under `config.root`.
///
/// Returned paths are absolute and unique.
///
/// # Errors
///
/// Fails if the root cannot be resolved, or on the first entry that cannot be
/// listed or stat'ed (permission denied, dangling symlink, symlink loop).
pub fn walk(config: &WalkConfig) -> Result<Vec<PathBuf>, WalkError> {
    let root = resolve_root(&config.root)?;
    walk_resolved(&root, config)
}

/// Same as [`walk`] for a root already returned by [`resolve_root`].
///
/// # Errors
///
/// Fails on the first entry that cannot be listed or stat'ed.
pub fn walk_resolved(root: &Path, config: &WalkConfig) -> Result<Vec<PathBuf>, WalkError> {
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(config.follow_links);
    if config.sort {
        walker = walker.sort_by_file_name();
    }

    // The root itself is never tested against the ignore list.
    let keep = |entry: &DirEntry| {
        if entry.depth() == 0 || !config.is_ignored(entry.path()) {
            return true;
        }
        if entry.file_type().is_dir() {
            debug!(path = %entry.path().display(), "skipping ignored directory");
        }
        false
    };

    let mut files = Vec::new();
    for entry_result in walker.into_iter().filter_entry(keep) {
        let entry = entry_result.map_err(|source| WalkError::Traversal {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;

        if entry.file_type().is_file() && has_target_extension(&entry) {
            trace!(path = %entry.path().display(), "candidate");
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "walk finished");
    Ok(files)
}
