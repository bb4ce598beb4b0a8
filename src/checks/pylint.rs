//! Detection of leftover Pylint configuration.

use anyhow::Result;
use std::path::Path;

use super::pyproject::PYPROJECT_TOML;
use crate::diagnostics::{Diagnostic, Report};
use crate::document::{load_toml, lookup};
use crate::key_path;
use crate::utils::fs::path_exists;

/// Standalone Pylint configuration file.
pub const PYLINTRC: &str = ".pylintrc";

/// Report Pylint settings, at most once.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read.
pub fn check_pylint(workdir: &Path, report: &mut Report) -> Result<()> {
    if path_exists(&workdir.join(PYLINTRC))? {
        report.push(Diagnostic::MigrateToRuff);
        return Ok(());
    }

    if let Some(doc) = load_toml(workdir, PYPROJECT_TOML)?.into_document() {
        if lookup(&doc, &key_path!["tool", "pylint"]).is_some() {
            report.push(Diagnostic::MigrateToRuff);
        }
    }

    Ok(())
}
