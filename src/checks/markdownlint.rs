//! `.markdownlint.json` checks.

use anyhow::Result;
use std::path::Path;

use super::rules::{Expected, Rule, evaluate};
use crate::diagnostics::Report;
use crate::document::load_json_reported;
use crate::key_path;

/// Path of the markdownlint configuration.
pub const MARKDOWNLINT_JSON: &str = ".markdownlint.json";

const MARKDOWNLINT_RULES: &[Rule] = &[
    Rule::Equals(key_path!["default"], Expected::Bool(true)),
    Rule::Equals(
        key_path!["line-length"],
        Expected::Map(&[
            ("code_blocks", Expected::Bool(false)),
            ("line_length", Expected::Int(100)),
        ]),
    ),
];

/// Check the markdownlint configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn check_markdownlint_json(workdir: &Path, report: &mut Report) -> Result<()> {
    if let Some(doc) = load_json_reported(workdir, MARKDOWNLINT_JSON, report)? {
        evaluate(report, MARKDOWNLINT_JSON, &doc, MARKDOWNLINT_RULES);
    }
    Ok(())
}
