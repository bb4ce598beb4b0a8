//! Parsed configuration documents and safe lookups into them.
//!
//! JSON and TOML files are both represented as a [`serde_json::Value`] tree.
//! TOML is converted on load (datetimes become strings), which lets a single
//! lookup API serve every validator.
//!
//! Lookups take a [`KeyPath`], a sequence of [`Segment`]s, and return
//! `Option<&Value>`: a missing key, an index out of range, or descending into
//! a scalar all yield `None` rather than an error.
//!
//! A VS Code setting such as `editor.tabSize` is a single key that happens to
//! contain a dot, so paths are built from segments, not parsed from strings:
//!
//! ```rust
//! use project_check::document::{lookup, KeyPath, Segment};
//! use project_check::key_path;
//! use serde_json::json;
//!
//! let settings = json!({"editor.tabSize": 2});
//! assert_eq!(lookup(&settings, &key_path!["editor.tabSize"]), Some(&json!(2)));
//!
//! let cspell = json!({"languageSettings": [{"languageId": "*"}]});
//! let path = KeyPath(&[
//!     Segment::Key("languageSettings"),
//!     Segment::Index(0),
//!     Segment::Key("languageId"),
//! ]);
//! assert_eq!(path.to_string(), "languageSettings[0].languageId");
//! assert_eq!(lookup(&cspell, &path), Some(&json!("*")));
//! ```

mod loader;

pub use loader::{Loaded, load_json, load_json_reported, load_toml, load_toml_reported};

use serde_json::Value;
use std::fmt;

/// One step of a [`KeyPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Member of a mapping
    Key(&'a str),
    /// Element of a sequence
    Index(usize),
}

/// A path into a document, displayed in dot/bracket notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPath<'a>(pub &'a [Segment<'a>]);

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Build a [`KeyPath`] of mapping keys, usable in `const` tables.
///
/// ```rust
/// use project_check::key_path;
///
/// assert_eq!(key_path!["tool", "poetry", "version"].to_string(), "tool.poetry.version");
/// ```
#[macro_export]
macro_rules! key_path {
    ($($key:literal),+ $(,)?) => {
        $crate::document::KeyPath(&[$($crate::document::Segment::Key($key)),+])
    };
}

/// Resolve `path` inside `root`.
#[must_use]
pub fn lookup<'v>(root: &'v Value, path: &KeyPath<'_>) -> Option<&'v Value> {
    path.0.iter().try_fold(root, |node, segment| match segment {
        Segment::Key(key) => node.as_object()?.get(*key),
        Segment::Index(index) => node.as_array()?.get(*index),
    })
}

/// Whether a value counts as empty: `null`, `false`, zero, `""`, `[]` or `{}`.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Whether `list` is a sequence holding an element equal to `item`.
#[must_use]
pub fn list_contains(list: &Value, item: &Value) -> bool {
    list.as_array().is_some_and(|items| items.contains(item))
}
