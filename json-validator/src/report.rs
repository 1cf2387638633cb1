//! Validation report types.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::validator::ValidationResult;

/// Paths are serialized as strings; non-UTF-8 bytes become U+FFFD, as in
/// `Path::display`.
fn serialize_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

/// Result for one candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Absolute path of the file.
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    /// Path relative to the scan root, used for display.
    #[serde(serialize_with = "serialize_lossy")]
    pub relative_path: PathBuf,
    /// Validation verdict.
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl FileOutcome {
    /// Pair `result` with `path`, computing the root-relative display path.
    #[must_use]
    pub fn new(root: &Path, path: PathBuf, result: ValidationResult) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.clone(), Path::to_path_buf);
        Self {
            path,
            relative_path,
            result,
        }
    }

    /// Whether the file passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result.valid
    }
}

/// Aggregate result of a validation run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Absolute scan root.
    #[serde(serialize_with = "serialize_lossy")]
    pub root: PathBuf,
    /// Number of candidate files validated.
    pub total_files: usize,
    /// Number of candidate files that failed validation.
    pub invalid_files: usize,
    /// `true` when no file failed (including when there were no files).
    pub ok: bool,
    /// Per-file outcomes in processing order.
    pub files: Vec<FileOutcome>,
}

impl ValidationReport {
    /// Empty report for `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            total_files: 0,
            invalid_files: 0,
            ok: true,
            files: Vec::new(),
        }
    }

    /// Fold one outcome into the totals.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.total_files += 1;
        if !outcome.is_valid() {
            self.invalid_files += 1;
            self.ok = false;
        }
        self.files.push(outcome);
    }

    /// Outcomes that failed validation.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_valid())
    }
}
