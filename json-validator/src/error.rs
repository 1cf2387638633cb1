//! Error types for tree traversal.
//!
//! Only traversal failures are errors. A file that fails to read, decode or
//! parse is reported through [`crate::ValidationResult`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal failure while enumerating candidate files. Aborts the whole run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WalkError {
    /// The scan root does not exist.
    #[error("Root path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("Root path is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    /// The root could not be resolved to an absolute path.
    #[error("Failed to resolve root path {}: {source}", .path.display())]
    Resolve {
        /// The root as given.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Listing or stat failed somewhere under the root (permission denied,
    /// dangling symlink, symlink loop, ...).
    #[error("Directory traversal error at {}: {source}", .path.display())]
    Traversal {
        /// Entry that failed, or the root when walkdir reports none.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },
}

impl WalkError {
    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound(path)
            | Self::RootNotDirectory(path)
            | Self::Resolve { path, .. }
            | Self::Traversal { path, .. } => path,
        }
    }
}
