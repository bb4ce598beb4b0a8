//! Common test utilities and fixtures for project-check integration tests

// Not every test module uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use project_check::test_utils::ProjectFixture;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A generated project in a temporary directory.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestProject {
    /// An empty project directory named `my-project`.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("my-project");
        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&bin_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            bin_dir,
        })
    }

    /// A project populated from `fixture`.
    pub fn with_fixture(fixture: &ProjectFixture) -> Result<Self> {
        let project = Self::new()?;
        fixture.write_to(&project.project_dir)?;
        Ok(project)
    }

    /// Get the project directory path
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Directory that holds fake tools; it is the whole `PATH` of hook runs.
    pub fn bin_path(&self) -> &Path {
        &self.bin_dir
    }

    /// File the fake tools append their command lines to.
    pub fn tool_log_path(&self) -> PathBuf {
        self.bin_dir.join("tools.log")
    }

    /// Write a file below the project directory
    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let full = self.project_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content).with_context(|| format!("Failed to write {}", full.display()))
    }

    /// Delete a file below the project directory
    pub fn remove_file(&self, path: &str) -> Result<()> {
        let full = self.project_dir.join(path);
        fs::remove_file(&full).with_context(|| format!("Failed to remove {}", full.display()))
    }

    /// Read a file below the project directory
    pub fn read_file(&self, path: &str) -> Result<String> {
        let full = self.project_dir.join(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }

    /// Install a fake `name` on the hook `PATH` that logs its arguments and
    /// exits with `exit_code`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, exit_code: i32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"{name} $*\" >> \"{}\"\nexit {exit_code}\n",
            self.tool_log_path().display()
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    /// Command lines the fake tools were called with.
    pub fn tool_log(&self) -> Vec<String> {
        fs::read_to_string(self.tool_log_path())
            .map(|log| log.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Run `check-project` with the project directory as working directory
    pub fn run_check(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(env!("CARGO_BIN_EXE_check-project"))
            .args(args)
            .current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env_remove("CHECK_PROJECT_NO_PLUGGY")
            .env_remove("RUST_LOG")
            .output()
            .context("Failed to run check-project")?;
        Ok(CommandOutput::from(output))
    }

    /// Run `project-hooks` in the project directory with only the fake tools on `PATH`
    pub fn run_hooks(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(env!("CARGO_BIN_EXE_project-hooks"))
            .args(args)
            .current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env("PATH", &self.bin_dir)
            .env_remove("RUST_LOG")
            .env_remove("PROJECT_MODULE_NAME")
            .env_remove("PROJECT_DIRECTORY_NAME")
            .env_remove("PROJECT_GITHUB_USERNAME")
            .env_remove("PROJECT_WANT_MAIN")
            .env_remove("PROJECT_WANT_REQUESTS")
            .env_remove("PROJECT_DIR")
            .output()
            .context("Failed to run project-hooks")?;
        Ok(CommandOutput::from(output))
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl CommandOutput {
    /// Stdout split into lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    /// Assert the command exited with status 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(self.code, Some(1), "Expected exit status 1\nStderr: {}", self.stderr);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}

/// File assertion helpers
pub struct FileAssert;

impl FileAssert {
    /// Assert a file exists
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert a file does not exist
    pub fn not_exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(!path.exists(), "Expected file to not exist: {}", path.display());
    }

    /// Assert a file has exact content
    pub fn equals(path: impl AsRef<Path>, expected: &str) {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        assert_eq!(content, expected, "File {} content mismatch", path.display());
    }
}
