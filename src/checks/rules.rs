//! Expectation tables and the engine that walks them.
//!
//! Tables are `const` slices of [`Rule`]s. Expected values are [`Expected`],
//! a `Copy` mirror of the JSON data model that can live in a `const`; it is
//! turned into a [`Value`] when compared or printed. Comparison is deep
//! structural equality, so key order inside mappings never matters.
//!
//! ```rust
//! use project_check::checks::rules::{evaluate, Expected, Rule};
//! use project_check::diagnostics::Report;
//! use project_check::key_path;
//! use serde_json::json;
//!
//! const RULES: &[Rule] = &[
//!     Rule::Equals(key_path!["default"], Expected::Bool(true)),
//!     Rule::Absent(key_path!["legacy"]),
//! ];
//!
//! let mut report = Report::new();
//! evaluate(&mut report, "demo.json", &json!({"default": false, "legacy": 1}), RULES);
//! assert_eq!(
//!     report.to_lines(),
//!     vec![
//!         "E0009: demo.json: Expected \"default\" to be `true`",
//!         "E0015: demo.json: \"legacy\" key should not be present.",
//!     ]
//! );
//! ```

use serde_json::{Map, Value};
use std::fmt;

use crate::diagnostics::{Diagnostic, Report};
use crate::document::{KeyPath, list_contains, lookup};

/// A constant expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// JSON boolean
    Bool(bool),
    /// JSON integer
    Int(i64),
    /// JSON string
    Str(&'static str),
    /// JSON array
    List(&'static [Expected]),
    /// JSON object
    Map(&'static [(&'static str, Expected)]),
}

impl Expected {
    /// Convert to a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match *self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::from(i),
            Self::Str(s) => Value::String(s.to_string()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), v.to_value()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

/// Renders as compact JSON, the form used in diagnostics.
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.to_value()))
    }
}

/// One entry of an expectation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The key must exist; its value is not checked.
    Present(KeyPath<'static>),
    /// The key must exist and equal the value.
    Equals(KeyPath<'static>, Expected),
    /// The key must be a list holding each of the values.
    Contains(KeyPath<'static>, &'static [Expected]),
    /// The key must not exist.
    Absent(KeyPath<'static>),
}

/// Walk `rules` over `doc` in order, pushing a diagnostic per deviation.
pub fn evaluate(report: &mut Report, file: &str, doc: &Value, rules: &[Rule]) {
    for rule in rules {
        match rule {
            Rule::Present(path) => {
                expect_present(report, file, doc, path);
            }
            Rule::Equals(path, expected) => {
                expect_equals(report, file, doc, path, &expected.to_value());
            }
            Rule::Contains(path, items) => {
                let items: Vec<Value> = items.iter().map(Expected::to_value).collect();
                expect_members(report, file, lookup(doc, path), path, &items);
            }
            Rule::Absent(path) => expect_absent(report, file, doc, path),
        }
    }
}

/// Require `path` to exist. Returns the value when it does.
pub fn expect_present<'v>(
    report: &mut Report,
    file: &str,
    doc: &'v Value,
    path: &KeyPath<'_>,
) -> Option<&'v Value> {
    let value = lookup(doc, path);
    if value.is_none() {
        report.push(Diagnostic::KeyNotPresent {
            file: file.to_string(),
            key: path.to_string(),
            expected: None,
        });
    }
    value
}

/// Require `path` to exist and equal `expected`.
///
/// A missing key is reported together with the expected value.
pub fn expect_equals(
    report: &mut Report,
    file: &str,
    doc: &Value,
    path: &KeyPath<'_>,
    expected: &Value,
) {
    match lookup(doc, path) {
        None => report.push(Diagnostic::KeyNotPresent {
            file: file.to_string(),
            key: path.to_string(),
            expected: Some(render(expected)),
        }),
        Some(actual) if actual != expected => report.push(Diagnostic::UnexpectedValue {
            file: file.to_string(),
            key: path.to_string(),
            expected: render(expected),
        }),
        Some(_) => {}
    }
}

/// Require `list` to hold every one of `items` (subset, order ignored).
///
/// Anything that is not a list holds nothing, so each item is reported.
pub fn expect_members(
    report: &mut Report,
    file: &str,
    list: Option<&Value>,
    path: &KeyPath<'_>,
    items: &[Value],
) {
    for item in items {
        if !list.is_some_and(|list| list_contains(list, item)) {
            report.push(Diagnostic::ListMissingValue {
                file: file.to_string(),
                key: path.to_string(),
                value: item.as_str().map_or_else(|| render(item), ToString::to_string),
            });
        }
    }
}

/// Require `path` to be absent.
pub fn expect_absent(report: &mut Report, file: &str, doc: &Value, path: &KeyPath<'_>) {
    if lookup(doc, path).is_some() {
        report.push(Diagnostic::UnexpectedKey {
            file: file.to_string(),
            key: path.to_string(),
        });
    }
}

/// Canonical one-line representation of a value.
#[must_use]
pub fn render(value: &Value) -> String {
    value.to_string()
}
