//! Error handling for project-check
//!
//! Two kinds of failure exist in this crate:
//!
//! - **Diagnostics** (see [`crate::diagnostics`]) describe deviations from the
//!   template conventions. They are plain values collected into a report and
//!   never abort a run.
//! - **Errors** ([`ProjectError`]) describe an environment that cannot be worked
//!   with: an unreadable directory, a tool missing from `PATH`, a subprocess
//!   exiting non-zero, an invalid module name handed to the hooks.
//!
//! Errors travel as [`anyhow::Error`] with added context and are rendered once,
//! at the top of each binary, by [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_check::core::{ProjectError, user_friendly_error};
//!
//! let err = anyhow::Error::from(ProjectError::ToolNotFound {
//!     tool: "poetry".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for project-check operations.
///
/// None of these variants is produced by a configuration mismatch; those are
/// [`Diagnostic`](crate::diagnostics::Diagnostic)s.
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    /// The working directory passed to the checker does not exist.
    #[error("Directory does not exist: {path}")]
    WorkdirNotFound {
        /// The path as given on the command line
        path: String,
    },

    /// The working directory passed to the checker is a file.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The path as given on the command line
        path: String,
    },

    /// The template module name is not a valid Python identifier.
    ///
    /// The name must start with a letter or underscore, continue with word
    /// characters, and be at least two characters long.
    #[error("{name} is not a valid Python module name!")]
    InvalidModuleName {
        /// The rejected module name
        name: String,
    },

    /// An external program needed by the hooks is not on `PATH`.
    #[error("{tool} is not installed or not found in PATH")]
    ToolNotFound {
        /// Program name, e.g. `poetry`
        tool: String,
    },

    /// An external program exited unsuccessfully.
    #[error("Command failed: {command}")]
    CommandFailed {
        /// The full command line that was run
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// Catch-all with a free-form message.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error wrapper carrying user-facing details and a suggestion.
///
/// Built by [`user_friendly_error`] and printed with [`display`](Self::display)
/// right before a binary exits with status 1.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ProjectError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: ProjectError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error block to stderr.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known.
///
/// Recognizes [`ProjectError`] and [`std::io::Error`] anywhere in the context
/// chain. Anything else is shown with its full context chain as the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(project_error) = error.downcast_ref::<ProjectError>() {
        return create_error_context(project_error.clone());
    }

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            let suggestion = match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check the ownership and permissions of the project files"
                }
                std::io::ErrorKind::NotFound => {
                    "Check that the file or directory exists and the path is correct"
                }
                std::io::ErrorKind::InvalidData => "Make sure the file is valid UTF-8 text",
                _ => continue,
            };
            return ErrorContext::new(ProjectError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion(suggestion);
        }
    }

    ErrorContext::new(ProjectError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: ProjectError) -> ErrorContext {
    match &error {
        ProjectError::WorkdirNotFound { .. } | ProjectError::NotADirectory { .. } => {
            ErrorContext::new(error).with_suggestion(
                "Pass the root directory of a generated project, or omit it to use the current directory",
            )
        }
        ProjectError::InvalidModuleName { .. } => ErrorContext::new(error)
            .with_details("Module names must start with a letter or underscore and contain only letters, digits and underscores")
            .with_suggestion("Regenerate the project with a different module_name"),
        ProjectError::ToolNotFound { tool } => {
            let suggestion = match tool.as_str() {
                "poetry" => "Install Poetry from https://python-poetry.org/",
                "yarn" => "Install Yarn with 'corepack enable' or from https://yarnpkg.com/",
                "git" => "Install git from https://git-scm.com/",
                _ => "Install the missing tool and make sure it is on PATH",
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        ProjectError::CommandFailed { code, .. } => {
            let details = match code {
                Some(code) => format!("The process exited with status {code}"),
                None => "The process was terminated by a signal".to_string(),
            };
            ErrorContext::new(error).with_details(details).with_suggestion(
                "The generated directory is left as-is; delete it and generate the project again",
            )
        }
        _ => ErrorContext::new(error),
    }
}
