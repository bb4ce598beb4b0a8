//! File system helpers with consistent error context.
//!
//! Every helper attaches the path to its error so that a failure deep inside a
//! check still tells the user which file was involved. Errors are never
//! swallowed here; callers decide whether a condition is a diagnostic or a
//! fatal error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_check::utils::fs::{atomic_write, path_exists, read_text_file};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let path = Path::new(".vscode/dictionary.txt");
//! if path_exists(path)? {
//!     let words = read_text_file(path)?;
//!     atomic_write(path, words.as_bytes())?;
//! }
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the path exists but is not a directory, or creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path_exists(path)? {
        if !path.is_dir() {
            return Err(anyhow::anyhow!(
                "Path exists but is not a directory: {}",
                path.display()
            ));
        }
        return Ok(());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Checks whether a path exists, propagating errors such as a permission failure
/// on a parent directory instead of treating them as "absent".
///
/// # Errors
///
/// Returns an error if the existence of the path cannot be determined.
pub fn path_exists(path: &Path) -> Result<bool> {
    path.try_exists()
        .with_context(|| format!("Failed to access path: {}", path.display()))
}

/// Reads a whole text file.
///
/// # Errors
///
/// Returns an error with context if the file cannot be read or is not UTF-8.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Write content to a temporary file (`.tmp` extension)
/// 2. Sync the temporary file to disk
/// 3. Rename the temporary file over the target path
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns an error if any step fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Removes a single file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be removed.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("Failed to remove file: {}", path.display()))
}
