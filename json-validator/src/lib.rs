//! # json-validator
//!
//! Recursively finds `.json` files under a directory and checks that each one
//! is syntactically well-formed JSON (strict grammar, no schema checks).
//!
//! The run has two stages. The **tree walker** ([`walk`]) enumerates
//! candidate files and prunes ignored paths. The **validator**
//! ([`validate_file`]) parses each candidate. [`validate_tree`] composes
//! them and streams per-file [`Event`]s to the caller in processing order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use json_validator::{Event, WalkConfig, validate_tree};
//!
//! let config = WalkConfig::new(".");
//! let report = validate_tree(&config, |event| {
//!     if let Event::File(outcome) = event {
//!         println!("{} -> {}", outcome.relative_path.display(), outcome.is_valid());
//!     }
//! })
//! .unwrap();
//! println!("Files: {}, invalid: {}", report.total_files, report.invalid_files);
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod validator;
mod walk;

pub use config::{DEFAULT_IGNORE, TARGET_EXTENSION, WalkConfig};
pub use error::WalkError;
pub use report::{FileOutcome, ValidationReport};
pub use validator::{ValidationResult, validate_bytes, validate_file};
pub use walk::{resolve_root, walk};

use tracing::{debug, info};

/// Progress notifications emitted by [`validate_tree`].
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum Event<'a> {
    /// The walk finished and `total` candidates will be validated.
    Started {
        /// Absolute scan root.
        root: &'a std::path::Path,
        /// Number of candidates.
        total: usize,
    },
    /// One candidate was validated.
    File(&'a FileOutcome),
    /// All candidates were validated.
    Finished(&'a ValidationReport),
}

/// Walk `config.root` and validate every candidate, in walk order.
///
/// `observer` sees `Started` once, then one `File` per candidate as it is
/// validated, then `Finished`. Per-file failures are recorded in the report
/// and never abort the run.
///
/// # Errors
///
/// Returns a [`WalkError`] if the root is missing or any entry cannot be
/// listed or stat'ed. No events are emitted in that case.
pub fn validate_tree<F>(
    config: &WalkConfig,
    mut observer: F,
) -> Result<ValidationReport, WalkError>
where
    F: FnMut(Event<'_>),
{
    let root = resolve_root(&config.root)?;
    let files = walk::walk_resolved(&root, config)?;

    info!(root = %root.display(), count = files.len(), "validating JSON files");
    observer(Event::Started {
        root: &root,
        total: files.len(),
    });

    let mut report = ValidationReport::new(root);
    for path in files {
        let result = validate_file(&path);
        if let Some(error) = &result.error {
            debug!(path = %path.display(), %error, "invalid JSON");
        }
        let outcome = FileOutcome::new(&report.root, path, result);
        observer(Event::File(&outcome));
        report.record(outcome);
    }

    info!(
        total = report.total_files,
        invalid = report.invalid_files,
        "validation finished"
    );
    observer(Event::Finished(&report));
    Ok(report)
}

/// [`validate_tree`] without progress notifications.
///
/// # Errors
///
/// Same as [`validate_tree`].
pub fn validate_tree_collect(config: &WalkConfig) -> Result<ValidationReport, WalkError> {
    validate_tree(config, |_| {})
}
