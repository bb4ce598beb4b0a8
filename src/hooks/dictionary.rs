//! Maintenance of the project spell-check dictionary.

use anyhow::Result;
use std::path::Path;

use crate::utils::fs::{atomic_write, path_exists, read_text_file};

/// Dictionary file, relative to the project root.
pub const DICTIONARY_TXT: &str = ".vscode/dictionary.txt";

/// Characters that end the name part of a dependency specifier.
const SPECIFIER_DELIMITERS: &[char] = &['<', '>', '=', '!', '~', '[', ';', ' '];

/// The distribution name of a dependency specifier, e.g. `click` for
/// `click>=8.1.3,!=8.1.4`.
#[must_use]
pub fn dependency_name(specifier: &str) -> &str {
    specifier.split(SPECIFIER_DELIMITERS).next().unwrap_or(specifier).trim()
}

/// Merge `words` into the existing word list.
///
/// The result is sorted case-insensitively (ties broken by the exact text),
/// has no blank lines or exact duplicates, and ends with a newline unless
/// it is empty.
#[must_use]
pub fn merge_words<S: AsRef<str>>(existing: &str, words: &[S]) -> String {
    let mut all: Vec<&str> = existing
        .lines()
        .chain(words.iter().map(|word| word.as_ref()))
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    all.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    all.dedup();
    if all.is_empty() {
        return String::new();
    }

    let mut merged = all.join("\n");
    merged.push('\n');
    merged
}

/// Add `words` to the dictionary at `path`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn update_dictionary<S: AsRef<str>>(path: &Path, words: &[S]) -> Result<()> {
    let existing = if path_exists(path)? {
        read_text_file(path)?
    } else {
        String::new()
    };

    let merged = merge_words(&existing, words);
    tracing::debug!(
        target: "hooks",
        "Writing {} word(s) to {}",
        merged.lines().count(),
        path.display()
    );
    atomic_write(path, merged.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dependency_name() {
        assert_eq!(dependency_name("click>=8.1.3,!=8.1.4"), "click");
        assert_eq!(dependency_name("pytest-mock"), "pytest-mock");
        assert_eq!(dependency_name("uvicorn[standard]"), "uvicorn");
        assert_eq!(dependency_name("toml~=0.10"), "toml");
    }

    #[test]
    fn test_merge_sorts_and_dedups() {
        let merged = merge_words("yapf\nLoguru\n\nmypy\n", &["loguru", "mypy", "Abc"]);
        assert_eq!(merged, "Abc\nLoguru\nloguru\nmypy\nyapf\n");
    }

    #[test]
    fn test_merge_into_empty() {
        assert_eq!(merge_words("", &["b", "a"]), "a\nb\n");
        assert_eq!(merge_words::<&str>("\n\n", &[]), "");
    }

    #[test]
    fn test_update_creates_and_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DICTIONARY_TXT);

        update_dictionary(&path, &["someone", "mymodule"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "mymodule\nsomeone\n");

        update_dictionary(&path, &["someone", "mymodule"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "mymodule\nsomeone\n");
    }

    #[test]
    fn test_update_keeps_existing_words() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dictionary.txt");
        fs::write(&path, "pytest\ncspell\r\n").unwrap();

        update_dictionary(&path, &["loguru"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "cspell\nloguru\npytest\n");
    }
}
