use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use json_validator::{Event, WalkConfig, output, validate_tree};
use tracing::debug;

use crate::render::HumanRenderer;

/// Exit status when every file is valid (including when there are none).
pub const EXIT_OK: i32 = 0;
/// Exit status when at least one file is invalid.
pub const EXIT_INVALID: i32 = 1;
/// Exit status when the run aborted before producing a summary.
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per file plus a summary line
    Human,
    /// Full report as pretty JSON on stdout
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when the stream is a terminal and `NO_COLOR` is unset
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Recursively check that every `.json` file under a directory is well-formed.
#[derive(Debug, Parser)]
#[command(name = "validate-json", version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Additional substring to exclude; any path containing it is skipped (repeatable)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Do not apply the built-in ignore list
    #[arg(long)]
    pub no_default_ignore: bool,

    /// Visit directory entries in file-name order instead of OS listing order
    #[arg(long)]
    pub sort: bool,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// When to color the pass/fail markers
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the walk configuration from the command line.
    #[must_use]
    pub fn walk_config(&self) -> WalkConfig {
        let mut config = WalkConfig::new(self.root.clone().unwrap_or_else(|| PathBuf::from(".")));
        if self.no_default_ignore {
            config.ignore.clear();
        }
        config.ignore.extend(self.ignore.iter().cloned());
        config.follow_links = !self.no_follow_links;
        config.sort = self.sort;
        config
    }
}

/// Run a validation and write its output.
///
/// Returns the process exit status: [`EXIT_OK`] or [`EXIT_INVALID`].
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or output cannot be written.
/// Callers should exit with [`EXIT_FATAL`].
pub fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> anyhow::Result<i32> {
    let config = cli.walk_config();
    debug!(root = %config.root.display(), ignore = ?config.ignore, "walk configuration");

    let report = match cli.format {
        OutputFormat::Human => {
            let renderer = HumanRenderer::new(
                cli.color.enabled(std::io::stdout().is_terminal()),
                cli.color.enabled(std::io::stderr().is_terminal()),
            );
            let mut write_result = Ok(());
            let report = validate_tree(&config, |event| {
                if write_result.is_ok() {
                    write_result = render_event(&renderer, event, stdout, stderr);
                }
            })
            .with_context(|| format!("Failed to scan {}", config.root.display()))?;
            write_result.context("Failed to write output")?;
            report
        }
        OutputFormat::Json => {
            let report = validate_tree(&config, |_| {})
                .with_context(|| format!("Failed to scan {}", config.root.display()))?;
            output::write_json(&report, stdout).context("Failed to write report")?;
            report
        }
    };

    Ok(if report.ok { EXIT_OK } else { EXIT_INVALID })
}

fn render_event(
    renderer: &HumanRenderer,
    event: Event<'_>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> std::io::Result<()> {
    match event {
        Event::Started { total, .. } => HumanRenderer::header(total, stdout),
        Event::File(outcome) => renderer.file(outcome, stdout, stderr),
        Event::Finished(report) => renderer.footer(report, stdout, stderr),
        _ => Ok(()),
    }
}
