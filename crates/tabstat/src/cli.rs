//! Command-line interface.
//!
//! Settings resolve in order: command-line flags, then the YAML file given
//! with `--config`, then the detected terminal width, then the defaults.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tabstat_render::{
    terminal_width, ConfigError, RenderConfig, SequenceOverflow, DEFAULT_CONSOLE_WIDTH,
};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::input::{load_file, load_reader, STDIN_NAME};
use crate::report::{Report, ReportLayout};
use crate::stats::Summary;

/// Descriptive statistics for lists of integers, as terminal tables.
#[derive(Debug, Parser)]
#[command(name = "tabstat", version)]
pub struct Args {
    /// Files of whitespace- or comma-separated integers ("-" reads stdin)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Values given inline
    #[arg(short = 'n', long = "number", value_name = "N", allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// YAML render configuration
    #[arg(short, long, value_name = "PATH", env = "TABSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fractional digits
    #[arg(long, value_name = "D")]
    pub precision: Option<usize>,

    /// Sequence wrap threshold
    #[arg(long, value_name = "N")]
    pub wrap: Option<usize>,

    /// Truncate long sequences with ", ..." instead of wrapping
    #[arg(long)]
    pub truncate: bool,

    /// Console width (default: config, then detected terminal width)
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Do not center tables in the console width
    #[arg(long)]
    pub no_center: bool,

    /// Also write the report to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Resolve the render configuration and report layout.
    pub fn render_settings(&self) -> Result<(RenderConfig, ReportLayout), ConfigError> {
        let (mut config, detected_width) = match &self.config {
            Some(path) => {
                let config = RenderConfig::from_path(path)?;
                (config, config.console_width)
            }
            None => (
                RenderConfig::default(),
                terminal_width().unwrap_or(DEFAULT_CONSOLE_WIDTH),
            ),
        };

        if let Some(digits) = self.precision {
            config.float_digits = digits;
        }
        if let Some(threshold) = self.wrap {
            config.wrap_threshold = threshold;
        }
        if self.truncate {
            config.overflow = SequenceOverflow::Truncate;
        }
        config.console_width = self.width.unwrap_or(detected_width);

        debug!(?config, centered = !self.no_center, "resolved render settings");
        let layout = ReportLayout {
            console_width: config.console_width,
            centered: !self.no_center,
        };
        Ok((config, layout))
    }

    /// Collect every value from `--number`, the files and stdin.
    ///
    /// Stdin is read when a file is named `-`, or when no files and no
    /// inline numbers are given. It is read at most once.
    pub fn load_values<R: Read>(&self, stdin: R) -> Result<Vec<i64>, LoadError> {
        let mut values = self.numbers.clone();
        let mut stdin = Some(stdin);

        for path in &self.files {
            if path.as_os_str() == "-" {
                if let Some(reader) = stdin.take() {
                    values.extend(load_reader(reader, STDIN_NAME)?);
                }
            } else {
                values.extend(load_file(path)?);
            }
        }

        if self.files.is_empty() && self.numbers.is_empty() {
            if let Some(reader) = stdin.take() {
                values.extend(load_reader(reader, STDIN_NAME)?);
            }
        }
        Ok(values)
    }
}

/// Run with the process's stdin and stdout.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, stdin.lock(), &mut stdout.lock())
}

/// Load, summarize and print the report to `out`.
pub fn run_with<R: Read, W: Write>(args: &Args, stdin: R, out: &mut W) -> anyhow::Result<()> {
    let (config, layout) = args
        .render_settings()
        .context("Failed to load render configuration")?;
    let values = args.load_values(stdin)?;
    let summary = Summary::from_values(&values)?;
    info!(count = summary.count(), "summarized dataset");

    let mut report = Report::new(&summary, &config, layout);
    report.write_to(out)?;
    out.flush()?;

    if let Some(path) = &args.output {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        report
            .write_to(&mut file)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "wrote report");
    }
    Ok(())
}
