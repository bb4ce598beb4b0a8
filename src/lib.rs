//! project-check - conventions checker and generation hooks for templated Python projects
//!
//! Projects generated from the template share a set of configuration files:
//! editor and spell-check settings, markdown lint rules, the Sphinx
//! configuration, `package.json` scripts and `pyproject.toml` metadata. Over
//! time those files drift from the template. This crate provides two tools:
//!
//! - **`check-project`** walks a project directory and prints one coded line
//!   per deviation from the conventions. It never changes a file.
//! - **`project-hooks`** runs around project generation: `pre-gen` validates
//!   the module name and `post-gen` installs dependencies, formats the project,
//!   updates the spell-check dictionary and creates the first git commit.
//!
//! ```text
//! E0001: File not found: .readthedocs.yaml
//! E0013: .vscode/settings.json: "editor.tabSize" key is not present. Should be: `2`
//! E0012: package.json version and pyproject.toml version differ.
//! ```
//!
//! # Core Modules
//!
//! - [`checks`] - The individual validators and [`checks::run_all`]
//! - [`diagnostics`] - Coded diagnostics and the [`diagnostics::Report`] they are collected in
//! - [`document`] - JSON/TOML loading and panic-free key path lookups
//! - [`hooks`] - Pre- and post-generation hooks
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line interfaces of both binaries
//! - [`core`] - Error types and user-facing error rendering
//! - [`utils`] - File system helpers and logging setup
//!
//! # Diagnostics vs. errors
//!
//! A convention violation is a [`diagnostics::Diagnostic`]: a value that is
//! printed, never an error. Only an environment the tools cannot work with (an
//! unreadable file, a missing directory, a failed subprocess, an invalid
//! module name) is an error; the binaries print it with a suggestion and exit
//! with status 1.
//!
//! # Example
//!
//! ```rust,no_run
//! use project_check::checks::{CheckOptions, run_all};
//! use project_check::diagnostics::Report;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut report = Report::new();
//! run_all(Path::new("my-project"), &CheckOptions { no_pluggy: true }, &mut report)?;
//! for line in report.to_lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod cli;
pub mod core;
pub mod diagnostics;
pub mod document;
pub mod hooks;
pub mod utils;

// test_utils is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
