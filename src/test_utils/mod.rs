//! Test utilities for project-check
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite:
//!
//! - [`init_test_logging`] wires `tracing` output into the test harness
//! - [`ProjectFixture`] writes a generated project to disk
//! - [`RecordingRunner`] stands in for real subprocesses in hook tests
//!
//! # Example
//!
//! ```rust,no_run
//! use project_check::checks::{CheckOptions, run_all};
//! use project_check::diagnostics::Report;
//! use project_check::test_utils::ProjectFixture;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! ProjectFixture::valid().write_to(temp.path()).unwrap();
//! let mut report = Report::new();
//! run_all(temp.path(), &CheckOptions::default(), &mut report).unwrap();
//! assert!(report.is_empty());
//! ```

pub mod fixtures;

pub use fixtures::ProjectFixture;

use anyhow::Result;
use std::sync::{Mutex, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::core::ProjectError;
use crate::hooks::command::{CommandRunner, ToolCommand};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off. Only the first call has an effect.
///
/// ```bash
/// RUST_LOG=check=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A [`CommandRunner`] that records commands instead of running them.
///
/// With [`failing_on`](Self::failing_on), the first command whose rendering
/// starts with the given prefix is recorded and then fails as if it exited
/// with status 1.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: Mutex<Vec<ToolCommand>>,
    fail_prefix: Option<String>,
}

impl RecordingRunner {
    /// A runner on which every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner on which commands starting with `prefix` fail.
    pub fn failing_on(prefix: impl Into<String>) -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
            fail_prefix: Some(prefix.into()),
        }
    }

    /// Commands received so far, in order.
    pub fn commands(&self) -> Vec<ToolCommand> {
        self.commands.lock().map(|commands| commands.clone()).unwrap_or_default()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ToolCommand) -> Result<()> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.clone());
        }

        match &self.fail_prefix {
            Some(prefix) if command.to_string().starts_with(prefix.as_str()) => {
                Err(ProjectError::CommandFailed {
                    command: command.to_string(),
                    code: Some(1),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}
