//! Loading JSON and TOML files into [`Value`] trees.
//!
//! Loading distinguishes four outcomes ([`Loaded`]). A missing file is a
//! separate, silent outcome: reporting absent files belongs to the presence
//! check, and repeating it here would double every "file not found".

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use super::is_empty_value;
use crate::diagnostics::{Diagnostic, Report};
use crate::utils::fs::{path_exists, read_text_file};

/// Outcome of loading one configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    /// The file does not exist.
    Absent,
    /// The file exists but is not valid for its format.
    ParseFailed(String),
    /// The file parsed to an empty document.
    Empty,
    /// The file parsed to a non-empty document.
    Document(Value),
}

impl Loaded {
    /// The document, if one was loaded.
    #[must_use]
    pub fn into_document(self) -> Option<Value> {
        match self {
            Self::Document(value) => Some(value),
            _ => None,
        }
    }
}

/// Load `workdir/file` as strict JSON.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_json(workdir: &Path, file: &str) -> Result<Loaded> {
    let path = workdir.join(file);
    if !path_exists(&path)? {
        tracing::debug!(target: "check", "{file} not present, skipping");
        return Ok(Loaded::Absent);
    }

    let content = read_text_file(&path)?;
    Ok(match serde_json::from_str::<Value>(&content) {
        Err(e) => Loaded::ParseFailed(e.to_string()),
        Ok(value) if is_empty_value(&value) => Loaded::Empty,
        Ok(value) => Loaded::Document(value),
    })
}

/// Load `workdir/file` as TOML and convert it to a [`Value`] tree.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_toml(workdir: &Path, file: &str) -> Result<Loaded> {
    let path = workdir.join(file);
    if !path_exists(&path)? {
        tracing::debug!(target: "check", "{file} not present, skipping");
        return Ok(Loaded::Absent);
    }

    let content = read_text_file(&path)?;
    Ok(match toml::from_str::<toml::Table>(&content) {
        Err(e) => Loaded::ParseFailed(e.to_string()),
        Ok(table) if table.is_empty() => Loaded::Empty,
        Ok(table) => Loaded::Document(toml_to_json(toml::Value::Table(table))),
    })
}

/// [`load_json`], reporting parse failures and empty documents.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_json_reported(
    workdir: &Path,
    file: &str,
    report: &mut Report,
) -> Result<Option<Value>> {
    Ok(match load_json(workdir, file)? {
        Loaded::Absent => None,
        Loaded::ParseFailed(reason) => {
            tracing::debug!(target: "check", "{file}: {reason}");
            report.push(Diagnostic::CannotParseJson {
                file: file.to_string(),
            });
            None
        }
        Loaded::Empty => {
            report.push(Diagnostic::UnexpectedEmptyJson {
                file: file.to_string(),
            });
            None
        }
        Loaded::Document(value) => Some(value),
    })
}

/// [`load_toml`], reporting parse failures and empty documents.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_toml_reported(
    workdir: &Path,
    file: &str,
    report: &mut Report,
) -> Result<Option<Value>> {
    Ok(match load_toml(workdir, file)? {
        Loaded::Absent => None,
        Loaded::ParseFailed(reason) => {
            tracing::debug!(target: "check", "{file}: {reason}");
            report.push(Diagnostic::CannotParseToml {
                file: file.to_string(),
            });
            None
        }
        Loaded::Empty => {
            report.push(Diagnostic::UnexpectedEmptyToml {
                file: file.to_string(),
            });
            None
        }
        Loaded::Document(value) => Some(value),
    })
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect())
        }
    }
}
