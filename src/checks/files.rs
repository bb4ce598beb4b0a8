//! Presence of expected files and absence of deprecated ones.

use anyhow::Result;
use std::path::Path;

use crate::diagnostics::{Diagnostic, Report};
use crate::utils::fs::path_exists;

/// Files every generated project carries, relative to its root.
pub const EXPECTED_FILES: &[&str] = &[
    ".github/workflows/close-inactive.yml",
    ".github/workflows/qa.yml",
    ".gitignore",
    ".markdownlint.json",
    ".prettierignore",
    ".readthedocs.yaml",
    ".rtfd-requirements.txt",
    ".vscode/cspell.json",
    ".vscode/dictionary.txt",
    ".vscode/extensions.json",
    ".vscode/launch.json",
    ".vscode/settings.json",
    "CHANGELOG.md",
    "LICENSE.txt",
    "README.md",
    "_config.yml",
    "docs/conf.py",
    "docs/index.rst",
    "package.json",
    "poetry.lock",
    "pyproject.toml",
    "tests/conftest.py",
    "yarn.lock",
];

/// Legacy files and the file their settings moved to.
pub const DEPRECATED_FILES: &[(&str, &str)] = &[
    (".prettierrc", "package.json"),
    (".style.yapf", "pyproject.toml"),
    ("mypy.ini", "pyproject.toml"),
];

/// Report missing expected files and present deprecated files.
///
/// # Errors
///
/// Returns an error if a path's existence cannot be determined.
pub fn check_expected_files(workdir: &Path, report: &mut Report) -> Result<()> {
    for file in EXPECTED_FILES {
        if !path_exists(&workdir.join(file))? {
            report.push(Diagnostic::FileNotFound {
                path: (*file).to_string(),
            });
        }
    }

    for (file, new_location) in DEPRECATED_FILES {
        if path_exists(&workdir.join(file))? {
            report.push(Diagnostic::DeprecatedFile {
                path: (*file).to_string(),
                new_location: (*new_location).to_string(),
            });
        }
    }

    Ok(())
}
