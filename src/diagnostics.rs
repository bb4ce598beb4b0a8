//! Coded diagnostics emitted by the checker.
//!
//! A [`Diagnostic`] is one deviation from the template conventions. It renders
//! as a single line, `CODE: message`, e.g.
//!
//! ```text
//! E0001: File not found: .vscode/cspell.json
//! E0013: .vscode/settings.json: "editor.tabSize" key is not present. Should be: `2`
//! ```
//!
//! Diagnostics are collected into a [`Report`] in the order the checks run.
//! The codes are stable identifiers; note that `E0011` is shared by the empty
//! TOML document and the invalid-key diagnostics.

use std::fmt;

/// One deviation found by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An expected file is missing.
    FileNotFound {
        /// Path relative to the project root
        path: String,
    },
    /// A file whose settings belong elsewhere exists.
    DeprecatedFile {
        /// Path relative to the project root
        path: String,
        /// Where its settings should live instead
        new_location: String,
    },
    /// A list lacks an expected member.
    ListMissingValue {
        /// File the list lives in
        file: String,
        /// Key path of the list
        key: String,
        /// The missing element
        value: String,
    },
    /// A value that must not be empty is empty.
    UnexpectedEmpty {
        /// File the value lives in
        file: String,
        /// Key path of the value
        key: String,
    },
    /// A JSON file could not be parsed.
    CannotParseJson {
        /// File name
        file: String,
    },
    /// A JSON file parsed to an empty document.
    UnexpectedEmptyJson {
        /// File name
        file: String,
    },
    /// `docs/conf.py` has no line starting with the given text.
    DocsConfMissingLine {
        /// Expected line prefix
        line: String,
    },
    /// `docs/conf.py` has no line containing the given text.
    DocsConfMissingLineContaining {
        /// Expected fragment
        fragment: String,
    },
    /// A key holds a different value than expected.
    UnexpectedValue {
        /// File name
        file: String,
        /// Key path
        key: String,
        /// Expected value, serialized
        expected: String,
    },
    /// A TOML file could not be parsed.
    CannotParseToml {
        /// File name
        file: String,
    },
    /// A TOML file parsed to an empty table.
    UnexpectedEmptyToml {
        /// File name
        file: String,
    },
    /// A key is missing or holds an unusable value.
    KeyNotPresentOrInvalid {
        /// File name
        file: String,
        /// Key path
        key: String,
    },
    /// `package.json` and `pyproject.toml` disagree on the version.
    VersionMismatch,
    /// A required key is missing.
    KeyNotPresent {
        /// File name
        file: String,
        /// Key path
        key: String,
        /// Expected value, serialized, when the key has one
        expected: Option<String>,
    },
    /// Pylint configuration is still present.
    MigrateToRuff,
    /// A key that must not be set is present.
    UnexpectedKey {
        /// File name
        file: String,
        /// Key path
        key: String,
    },
}

impl Diagnostic {
    /// The stable identifier of this diagnostic.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "E0001",
            Self::DeprecatedFile { .. } => "E0002",
            Self::ListMissingValue { .. } => "E0003",
            Self::UnexpectedEmpty { .. } => "E0004",
            Self::CannotParseJson { .. } => "E0005",
            Self::UnexpectedEmptyJson { .. } => "E0006",
            Self::DocsConfMissingLine { .. } => "E0007",
            Self::DocsConfMissingLineContaining { .. } => "E0008",
            Self::UnexpectedValue { .. } => "E0009",
            Self::CannotParseToml { .. } => "E0010",
            Self::UnexpectedEmptyToml { .. } | Self::KeyNotPresentOrInvalid { .. } => "E0011",
            Self::VersionMismatch => "E0012",
            Self::KeyNotPresent { .. } => "E0013",
            Self::MigrateToRuff => "E0014",
            Self::UnexpectedKey { .. } => "E0015",
        }
    }

    /// The human-readable part, without the code.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => format!("File not found: {path}"),
            Self::DeprecatedFile { path, new_location } => {
                format!("File should not exist: {path}. Move these settings to {new_location}")
            }
            Self::ListMissingValue { file, key, value } => {
                format!("{file}: {key} missing \"{value}\"")
            }
            Self::UnexpectedEmpty { file, key } => format!("{file}: {key} is empty"),
            Self::CannotParseJson { file } => format!(
                "{file}: failed to parse JSON. Comments in JSON files are not allowed."
            ),
            Self::UnexpectedEmptyJson { file } => format!("{file}: Unexpected empty JSON file."),
            Self::DocsConfMissingLine { line } => {
                format!("docs/conf.py: expected to have line \"{line}\"")
            }
            Self::DocsConfMissingLineContaining { fragment } => {
                format!("docs/conf.py: expected to have line containing \"{fragment}\"")
            }
            Self::UnexpectedValue { file, key, expected } => {
                format!("{file}: Expected \"{key}\" to be `{expected}`")
            }
            Self::CannotParseToml { file } => format!("{file}: failed to parse TOML."),
            Self::UnexpectedEmptyToml { file } => format!("{file}: Unexpected empty TOML file."),
            Self::KeyNotPresentOrInvalid { file, key } => {
                format!("{file}: \"{key}\" key is not present or is invalid.")
            }
            Self::VersionMismatch => {
                "package.json version and pyproject.toml version differ.".to_string()
            }
            Self::KeyNotPresent {
                file,
                key,
                expected: None,
            } => format!("{file}: \"{key}\" key is not present."),
            Self::KeyNotPresent {
                file,
                key,
                expected: Some(expected),
            } => format!("{file}: \"{key}\" key is not present. Should be: `{expected}`"),
            Self::MigrateToRuff => "Pylint settings detected. Migrate to Ruff.".to_string(),
            Self::UnexpectedKey { file, key } => {
                format!("{file}: \"{key}\" key should not be present.")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Ordered collection of diagnostics from one checker run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(target: "check", "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// All diagnostics in emission order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the run found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics carrying the given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code() == code)
    }

    /// Render every diagnostic, one per line.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}
