//! `.vscode/cspell.json` checks.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use super::rules::{Expected, Rule, evaluate, expect_equals, expect_members};
use crate::diagnostics::{Diagnostic, Report};
use crate::document::{KeyPath, Segment, is_empty_value, load_json_reported, lookup};
use crate::key_path;

/// Path of the spell-check configuration.
pub const CSPELL_JSON: &str = ".vscode/cspell.json";

const REQUIRED_KEYS: &[Rule] = &[
    Rule::Present(key_path!["dictionaryDefinitions"]),
    Rule::Present(key_path!["enableGlobDot"]),
    Rule::Present(key_path!["enabledLanguageIds"]),
    Rule::Present(key_path!["ignorePaths"]),
    Rule::Present(key_path!["languageSettings"]),
];

/// Paths spell checking must skip.
pub const EXPECTED_IGNORE_PATHS: &[Expected] = &[
    Expected::Str("*.log"),
    Expected::Str(".coverage"),
    Expected::Str(".directory"),
    Expected::Str(".git"),
    Expected::Str(".mypy_cache"),
    Expected::Str(".vscode/extensions.json"),
    Expected::Str("__pycache__"),
    Expected::Str("_build/**"),
    Expected::Str("build/**"),
    Expected::Str("dist/**"),
    Expected::Str("htmlcov/**"),
];

const DICTIONARY_NAME: KeyPath<'static> = KeyPath(&[
    Segment::Key("dictionaryDefinitions"),
    Segment::Index(0),
    Segment::Key("name"),
]);
const DICTIONARY_PATH: KeyPath<'static> = KeyPath(&[
    Segment::Key("dictionaryDefinitions"),
    Segment::Index(0),
    Segment::Key("path"),
]);
const LANGUAGE_DICTIONARIES: KeyPath<'static> = KeyPath(&[
    Segment::Key("languageSettings"),
    Segment::Index(0),
    Segment::Key("dictionaries"),
]);
const LANGUAGE_ID: KeyPath<'static> = KeyPath(&[
    Segment::Key("languageSettings"),
    Segment::Index(0),
    Segment::Key("languageId"),
]);

/// Check the spell-check configuration.
///
/// Beyond the required keys, the first dictionary definition must be the
/// project dictionary and the first language setting must apply it to every
/// language.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn check_cspell_json(workdir: &Path, report: &mut Report) -> Result<()> {
    let Some(doc) = load_json_reported(workdir, CSPELL_JSON, report)? else {
        return Ok(());
    };
    check_document(&doc, report);
    Ok(())
}

fn check_document(doc: &Value, report: &mut Report) {
    evaluate(report, CSPELL_JSON, doc, REQUIRED_KEYS);

    if lookup(doc, &key_path!["enableGlobDot"]).is_some_and(is_empty_value) {
        report.push(Diagnostic::KeyNotPresentOrInvalid {
            file: CSPELL_JSON.to_string(),
            key: "enableGlobDot".to_string(),
        });
    }

    if lookup(doc, &key_path!["dictionaryDefinitions"]).is_some() {
        unexpected_unless(doc, &DICTIONARY_NAME, Expected::Str("main"), report);
        unexpected_unless(doc, &DICTIONARY_PATH, Expected::Str("dictionary.txt"), report);
    }

    let ignore_paths = key_path!["ignorePaths"];
    if let Some(list) = lookup(doc, &ignore_paths) {
        let items: Vec<Value> = EXPECTED_IGNORE_PATHS.iter().map(Expected::to_value).collect();
        expect_members(report, CSPELL_JSON, Some(list), &ignore_paths, &items);
    }

    if lookup(doc, &key_path!["enabledLanguageIds"]).is_some_and(is_empty_value) {
        report.push(Diagnostic::UnexpectedEmpty {
            file: CSPELL_JSON.to_string(),
            key: "enabledLanguageIds".to_string(),
        });
    }

    if let Some(settings) = lookup(doc, &key_path!["languageSettings"]) {
        if is_empty_value(settings) {
            report.push(Diagnostic::UnexpectedEmpty {
                file: CSPELL_JSON.to_string(),
                key: "languageSettings".to_string(),
            });
            return;
        }

        match lookup(doc, &LANGUAGE_DICTIONARIES) {
            None => missing(&LANGUAGE_DICTIONARIES, report),
            Some(list) => expect_members(
                report,
                CSPELL_JSON,
                Some(list),
                &LANGUAGE_DICTIONARIES,
                &[Value::from("main")],
            ),
        }

        match lookup(doc, &LANGUAGE_ID) {
            None => missing(&LANGUAGE_ID, report),
            Some(_) => expect_equals(report, CSPELL_JSON, doc, &LANGUAGE_ID, &Value::from("*")),
        }
    }
}

/// Positional entries report a wrong or missing value the same way.
fn unexpected_unless(doc: &Value, path: &KeyPath<'_>, expected: Expected, report: &mut Report) {
    let expected = expected.to_value();
    if lookup(doc, path) != Some(&expected) {
        report.push(Diagnostic::UnexpectedValue {
            file: CSPELL_JSON.to_string(),
            key: path.to_string(),
            expected: super::rules::render(&expected),
        });
    }
}

fn missing(path: &KeyPath<'_>, report: &mut Report) {
    report.push(Diagnostic::KeyNotPresent {
        file: CSPELL_JSON.to_string(),
        key: path.to_string(),
        expected: None,
    });
}
