//! `pyproject.toml` checks.

use anyhow::Result;
use std::path::Path;

use super::rules::{Rule, evaluate};
use crate::diagnostics::{Diagnostic, Report};
use crate::document::{load_toml_reported, lookup};
use crate::key_path;

/// Path of the project manifest.
pub const PYPROJECT_TOML: &str = "pyproject.toml";

const TOOL_SECTIONS: &[Rule] = &[
    Rule::Present(key_path!["tool", "poetry"]),
    Rule::Present(key_path!["tool", "mypy"]),
    Rule::Present(key_path!["tool", "pytest"]),
    Rule::Present(key_path!["tool", "ruff"]),
    Rule::Present(key_path!["tool", "yapf"]),
];

const POETRY_KEYS: &[Rule] = &[
    Rule::Present(key_path!["tool", "poetry", "authors"]),
    Rule::Present(key_path!["tool", "poetry", "classifiers"]),
    Rule::Present(key_path!["tool", "poetry", "description"]),
    Rule::Present(key_path!["tool", "poetry", "documentation"]),
    Rule::Present(key_path!["tool", "poetry", "homepage"]),
    Rule::Present(key_path!["tool", "poetry", "keywords"]),
    Rule::Present(key_path!["tool", "poetry", "license"]),
    Rule::Present(key_path!["tool", "poetry", "name"]),
    Rule::Present(key_path!["tool", "poetry", "packages"]),
    Rule::Present(key_path!["tool", "poetry", "readme"]),
    Rule::Present(key_path!["tool", "poetry", "version"]),
];

/// Check `pyproject.toml` for the tool sections and Poetry metadata.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn check_pyproject_toml(workdir: &Path, report: &mut Report) -> Result<()> {
    let Some(doc) = load_toml_reported(workdir, PYPROJECT_TOML, report)? else {
        return Ok(());
    };

    if !lookup(&doc, &key_path!["tool"]).is_some_and(serde_json::Value::is_object) {
        report.push(Diagnostic::KeyNotPresentOrInvalid {
            file: PYPROJECT_TOML.to_string(),
            key: "tool".to_string(),
        });
        return Ok(());
    }

    evaluate(report, PYPROJECT_TOML, &doc, TOOL_SECTIONS);
    if lookup(&doc, &key_path!["tool", "poetry"]).is_some() {
        evaluate(report, PYPROJECT_TOML, &doc, POETRY_KEYS);
    }

    Ok(())
}
