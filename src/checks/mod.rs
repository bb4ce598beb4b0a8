//! Project convention checks.
//!
//! Each submodule validates one file (or, for [`files`], the presence of a
//! fixed set of files) and pushes [`Diagnostic`](crate::diagnostics::Diagnostic)s
//! into a shared [`Report`]. Validators never modify the project and do not
//! depend on each other's results; [`run_all`] simply runs them in a fixed
//! order so the output is stable:
//!
//! 1. [`files`]: expected and deprecated files
//! 2. [`cspell`]: `.vscode/cspell.json`
//! 3. [`vscode`]: `.vscode/settings.json`
//! 4. [`markdownlint`]: `.markdownlint.json`
//! 5. [`docs_conf`]: `docs/conf.py`
//! 6. [`package_json`]: `package.json` and its version against `pyproject.toml`
//! 7. [`pyproject`]: `pyproject.toml`
//! 8. [`pylint`]: leftover Pylint configuration
//!
//! A configuration file that does not exist is only reported by [`files`].
//!
//! The report is owned by the caller. When a file cannot be read, the run stops
//! with an error but the diagnostics found before it stay in the report.
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_check::checks::{CheckOptions, run_all};
//! use project_check::diagnostics::Report;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut report = Report::new();
//! run_all(Path::new("."), &CheckOptions::default(), &mut report)?;
//! for line in report.to_lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cspell;
pub mod docs_conf;
pub mod files;
pub mod markdownlint;
pub mod package_json;
pub mod pylint;
pub mod pyproject;
pub mod rules;
pub mod vscode;

use anyhow::Result;
use std::path::Path;

use crate::diagnostics::Report;

/// Switches that change what the checks expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// The project does not patch pluggy's typing marker, so there is no
    /// `fix-pluggy` script and `mypy` runs without it.
    pub no_pluggy: bool,
}

/// Run every check against `workdir`, appending diagnostics to `report`.
///
/// # Errors
///
/// Returns an error when the file system cannot be read. Convention
/// violations are never errors; they go into `report`, which keeps whatever
/// was found before the failure.
pub fn run_all(workdir: &Path, options: &CheckOptions, report: &mut Report) -> Result<()> {
    tracing::debug!(target: "check", "checking {}", workdir.display());

    files::check_expected_files(workdir, report)?;
    cspell::check_cspell_json(workdir, report)?;
    vscode::check_vscode_settings_json(workdir, report)?;
    markdownlint::check_markdownlint_json(workdir, report)?;
    docs_conf::check_docs_conf_py(workdir, report)?;
    package_json::check_package_json(workdir, options.no_pluggy, report)?;
    pyproject::check_pyproject_toml(workdir, report)?;
    pylint::check_pylint(workdir, report)?;

    tracing::debug!(target: "check", "{} diagnostic(s)", report.len());
    Ok(())
}
