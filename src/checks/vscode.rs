//! `.vscode/settings.json` checks.

use anyhow::Result;
use std::path::Path;

use super::rules::{Expected, Rule, evaluate};
use crate::diagnostics::Report;
use crate::document::load_json_reported;
use crate::key_path;

/// Path of the editor settings.
pub const SETTINGS_JSON: &str = ".vscode/settings.json";

/// Required editor settings followed by settings that must be removed.
pub const SETTINGS_RULES: &[Rule] = &[
    Rule::Equals(
        key_path!["[python]"],
        Expected::Map(&[
            ("editor.defaultFormatter", Expected::Str("eeyore.yapf")),
            ("editor.tabSize", Expected::Int(4)),
        ]),
    ),
    Rule::Equals(key_path!["cSpell.enabled"], Expected::Bool(true)),
    Rule::Equals(key_path!["editor.defaultFormatter"], Expected::Str("esbenp.prettier-vscode")),
    Rule::Equals(key_path!["editor.formatOnPaste"], Expected::Bool(true)),
    Rule::Equals(key_path!["editor.formatOnSave"], Expected::Bool(true)),
    Rule::Equals(key_path!["editor.formatOnType"], Expected::Bool(true)),
    Rule::Equals(key_path!["editor.inlayHints.enabled"], Expected::Str("offUnlessPressed")),
    Rule::Equals(key_path!["editor.insertSpaces"], Expected::Bool(true)),
    Rule::Equals(key_path!["editor.rulers"], Expected::List(&[Expected::Int(100)])),
    Rule::Equals(key_path!["editor.tabSize"], Expected::Int(2)),
    Rule::Equals(key_path!["editor.wordWrapColumn"], Expected::Int(100)),
    Rule::Equals(key_path!["eslint.lintTask.enable"], Expected::Bool(true)),
    Rule::Equals(key_path!["files.insertFinalNewline"], Expected::Bool(true)),
    Rule::Equals(key_path!["files.trimFinalNewlines"], Expected::Bool(true)),
    Rule::Equals(key_path!["files.trimTrailingWhitespace"], Expected::Bool(true)),
    Rule::Equals(key_path!["python.analysis.autoImportCompletions"], Expected::Bool(true)),
    Rule::Equals(key_path!["python.analysis.completeFunctionParens"], Expected::Bool(true)),
    Rule::Equals(key_path!["python.analysis.importFormat"], Expected::Str("relative")),
    Rule::Equals(key_path!["python.analysis.indexing"], Expected::Bool(true)),
    Rule::Equals(key_path!["python.analysis.inlayHints.functionReturnTypes"], Expected::Bool(true)),
    Rule::Equals(key_path!["python.analysis.inlayHints.pytestParameters"], Expected::Bool(true)),
    Rule::Equals(key_path!["python.analysis.inlayHints.variableTypes"], Expected::Bool(true)),
    Rule::Equals(
        key_path!["python.analysis.packageIndexDepths"],
        Expected::List(&[Expected::Map(&[
            ("depth", Expected::Int(100)),
            ("name", Expected::Str("")),
        ])]),
    ),
    Rule::Equals(key_path!["python.analysis.stubPath"], Expected::Str(".stubs")),
    Rule::Equals(key_path!["python.analysis.typeCheckingMode"], Expected::Str("strict")),
    Rule::Equals(key_path!["python.languageServer"], Expected::Str("Pylance")),
    Rule::Equals(key_path!["yaml.format.printWidth"], Expected::Int(100)),
    Rule::Absent(key_path!["python.formatting.provider"]),
    Rule::Absent(key_path!["python.linting.flake8Enabled"]),
    Rule::Absent(key_path!["python.linting.pylintEnabled"]),
];

/// Check the editor settings against [`SETTINGS_RULES`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn check_vscode_settings_json(workdir: &Path, report: &mut Report) -> Result<()> {
    if let Some(doc) = load_json_reported(workdir, SETTINGS_JSON, report)? {
        evaluate(report, SETTINGS_JSON, &doc, SETTINGS_RULES);
    }
    Ok(())
}
