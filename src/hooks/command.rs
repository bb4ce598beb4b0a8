//! External program invocation for the hooks.
//!
//! A [`ToolCommand`] is a plain description of one program run: the program
//! name, its arguments and the directory to run it in. Describing commands as
//! data keeps the post-generation plan inspectable; running them is the job of
//! a [`CommandRunner`].

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::core::ProjectError;

/// Builder describing a single external program run.
///
/// # Examples
///
/// ```rust
/// use project_check::hooks::command::ToolCommand;
///
/// let cmd = ToolCommand::new("git").args(["commit", "-m", "Start of project", "--signoff"]);
/// assert_eq!(cmd.to_string(), "git commit -m 'Start of project' --signoff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Start describing a run of `program`, looked up on `PATH` when executed.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the program in `dir` instead of the current directory.
    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments in order.
    #[must_use]
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Working directory, if one was set.
    #[must_use]
    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Program followed by its arguments.
    #[must_use]
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str)).collect()
    }

    /// Resolve the program on `PATH`, run it with inherited stdio and wait.
    ///
    /// # Errors
    ///
    /// - [`ProjectError::ToolNotFound`] if the program is not on `PATH`
    /// - [`ProjectError::CommandFailed`] if it exits unsuccessfully
    /// - an I/O error if it cannot be spawned
    pub async fn execute_success(&self) -> Result<()> {
        let resolved = which::which(&self.program).map_err(|_| ProjectError::ToolNotFound {
            tool: self.program.clone(),
        })?;

        tracing::debug!(target: "hooks", "Executing command: {} ({})", self, resolved.display());

        let mut cmd = Command::new(&resolved);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.with_context(|| format!("Failed to execute {self}"))?;

        if !status.success() {
            tracing::debug!(target: "hooks", "Command failed with exit code: {:?}", status.code());
            return Err(ProjectError::CommandFailed {
                command: self.to_string(),
                code: status.code(),
            }
            .into());
        }

        tracing::debug!(target: "hooks", "Command completed successfully");
        Ok(())
    }
}

/// Shell-like rendering; arguments with spaces are single-quoted.
impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Something that can run a [`ToolCommand`] to completion.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `command`, failing if it does not succeed.
    async fn run(&self, command: &ToolCommand) -> Result<()>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ToolCommand) -> Result<()> {
        command.execute_success().await
    }
}
