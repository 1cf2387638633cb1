//! Human-readable console output.
//!
//! Passes go to stdout and failures to stderr, one line per file in
//! processing order.

use std::io::Write;

use colored::{Color, Colorize};
use json_validator::{FileOutcome, ValidationReport};

const PASS: &str = "\u{2713}";
const FAIL: &str = "\u{2717}";
const ALL_VALID: &str = "\u{2705} All JSON files are valid!";
const SOME_INVALID: &str = "\u{274c} Some JSON files are invalid!";

/// Forces `colored` on while alive. Per-stream color is decided by the caller.
struct ForceColor;

impl ForceColor {
    fn new() -> Self {
        colored::control::set_override(true);
        Self
    }
}

impl Drop for ForceColor {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

pub struct HumanRenderer {
    color_stdout: bool,
    color_stderr: bool,
    _force_color: Option<ForceColor>,
}

impl HumanRenderer {
    #[must_use]
    pub fn new(color_stdout: bool, color_stderr: bool) -> Self {
        Self {
            color_stdout,
            color_stderr,
            _force_color: (color_stdout || color_stderr).then(ForceColor::new),
        }
    }

    /// `Validating <N> JSON files...` followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn header(total: usize, stdout: &mut dyn Write) -> std::io::Result<()> {
        writeln!(stdout, "Validating {total} JSON files...")?;
        writeln!(stdout)
    }

    /// `✓ <path>` on stdout, or `✗ <path>: <error>` on stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn file(
        &self,
        outcome: &FileOutcome,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> std::io::Result<()> {
        let path = outcome.relative_path.display();
        match &outcome.result.error {
            None => writeln!(stdout, "{} {path}", paint(PASS, Color::Green, self.color_stdout)),
            Some(error) => writeln!(
                stderr,
                "{} {path}: {error}",
                paint(FAIL, Color::Red, self.color_stderr)
            ),
        }
    }

    /// Blank line and the overall verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn footer(
        &self,
        report: &ValidationReport,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> std::io::Result<()> {
        if report.ok {
            writeln!(stdout)?;
            writeln!(stdout, "{}", paint(ALL_VALID, Color::Green, self.color_stdout))
        } else {
            writeln!(stderr)?;
            writeln!(stderr, "{}", paint(SOME_INVALID, Color::Red, self.color_stderr))
        }
    }
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use json_validator::ValidationResult;
    use std::path::{Path, PathBuf};

    fn outcome(rel: &str, result: ValidationResult) -> FileOutcome {
        let root = Path::new("/repo");
        FileOutcome::new(root, root.join(rel), result)
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        let mut out = Vec::new();
        HumanRenderer::header(3, &mut out).unwrap();
        assert_eq!(text(out), "Validating 3 JSON files...\n\n");
    }

    #[test]
    fn test_pass_goes_to_stdout() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        HumanRenderer::new(false, false)
            .file(&outcome("a.json", ValidationResult::ok()), &mut out, &mut err)
            .unwrap();
        assert_eq!(text(out), "\u{2713} a.json\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_failure_goes_to_stderr() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        HumanRenderer::new(false, false)
            .file(
                &outcome("bad.json", ValidationResult::invalid("key must be a string")),
                &mut out,
                &mut err,
            )
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(text(err), "\u{2717} bad.json: key must be a string\n");
    }

    #[test]
    fn test_footer_success_and_failure() {
        let mut report = ValidationReport::new(PathBuf::from("/repo"));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let renderer = HumanRenderer::new(false, false);
        renderer.footer(&report, &mut out, &mut err).unwrap();
        assert_eq!(text(out), "\n\u{2705} All JSON files are valid!\n");
        assert!(err.is_empty());

        report.record(outcome("x.json", ValidationResult::invalid("boom")));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        renderer.footer(&report, &mut out, &mut err).unwrap();
        assert!(out.is_empty());
        assert_eq!(text(err), "\n\u{274c} Some JSON files are invalid!\n");
    }

    #[test]
    fn test_colored_marker_keeps_text_and_restores_override() {
        let before = colored::control::SHOULD_COLORIZE.should_colorize();
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let renderer = HumanRenderer::new(true, true);
            renderer
                .file(&outcome("a.json", ValidationResult::ok()), &mut out, &mut err)
                .unwrap();
        }
        let line = text(out);
        assert!(line.contains("\u{1b}["), "expected ANSI codes: {line:?}");
        assert!(line.ends_with(" a.json\n"));
        assert_eq!(colored::control::SHOULD_COLORIZE.should_colorize(), before);

        let _plain = HumanRenderer::new(false, false);
        assert_eq!(colored::control::SHOULD_COLORIZE.should_colorize(), before);
    }
}
