//! `check-project`: report deviations from the template conventions.

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::BoolishValueParser;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checks::{CheckOptions, run_all};
use crate::core::ProjectError;
use crate::diagnostics::Report;
use crate::utils::fs::path_exists;

/// Check a generated Python project against the template's conventions.
///
/// One line is printed per deviation, prefixed with a stable code such as
/// `E0013`. The exit status is 0 whether or not anything was found.
#[derive(Parser, Debug)]
#[command(name = "check-project", version)]
pub struct CheckCli {
    /// Root directory of the project to check.
    #[arg(default_value = ".")]
    workdir: PathBuf,

    /// The project does not patch pluggy's typing marker: expect no
    /// `fix-pluggy` script and a `mypy` script that runs mypy directly.
    #[arg(
        short = 'P',
        long,
        env = "CHECK_PROJECT_NO_PLUGGY",
        value_parser = BoolishValueParser::new()
    )]
    no_pluggy: bool,

    /// Log debug output to stderr (`RUST_LOG` takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

impl CheckCli {
    /// Whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Options for the checks.
    #[must_use]
    pub const fn options(&self) -> CheckOptions {
        CheckOptions {
            no_pluggy: self.no_pluggy,
        }
    }

    /// Validate the working directory, run every check and print the report.
    ///
    /// Diagnostics found before a read failure are printed before the error
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is missing or not a
    /// directory, or if a project file cannot be read.
    pub fn execute(self) -> Result<()> {
        let workdir = resolve_workdir(&self.workdir)?;
        let mut report = Report::new();
        let outcome = run_all(&workdir, &self.options(), &mut report);

        let stdout = std::io::stdout();
        print_report(&report, &mut stdout.lock())?;
        outcome
    }
}

fn resolve_workdir(workdir: &Path) -> Result<PathBuf> {
    if !path_exists(workdir)? {
        return Err(ProjectError::WorkdirNotFound {
            path: workdir.display().to_string(),
        }
        .into());
    }
    if !workdir.is_dir() {
        return Err(ProjectError::NotADirectory {
            path: workdir.display().to_string(),
        }
        .into());
    }

    workdir
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", workdir.display()))
}

/// Write one line per diagnostic, the code highlighted.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_report(report: &Report, out: &mut impl Write) -> Result<()> {
    for diagnostic in report.diagnostics() {
        writeln!(out, "{}: {}", diagnostic.code().yellow().bold(), diagnostic.message())
            .context("Failed to write diagnostics")?;
    }
    Ok(())
}
