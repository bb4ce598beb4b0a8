//! `docs/conf.py` checks.
//!
//! The file is treated as plain text and never executed.

use anyhow::Result;
use std::path::Path;

use crate::diagnostics::{Diagnostic, Report};
use crate::utils::fs::{path_exists, read_text_file};

/// Path of the Sphinx configuration.
pub const DOCS_CONF_PY: &str = "docs/conf.py";

/// Lines `docs/conf.py` must carry. A leading `^` anchors the rest to the
/// start of a line; anything else may appear anywhere within a line.
pub const EXPECTED_LINES: &[&str] = &[
    "^import toml",
    "with open(f'{dirname(__file__)}/../pyproject.toml') as f:",
    "^copyright: Final[str] = str(datetime.now().year)",
    "^project: Final[str] = PROJECT['tool']['poetry']['name']",
    "^version: Final[str] = PROJECT['tool']['poetry']['version']",
    "^release: Final[str] = f'v{version}'",
    "['sphinx_click'] if PROJECT['tool']['poetry'].get('scripts') else [])",
];

/// Check `docs/conf.py` for each of [`EXPECTED_LINES`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn check_docs_conf_py(workdir: &Path, report: &mut Report) -> Result<()> {
    let path = workdir.join(DOCS_CONF_PY);
    if !path_exists(&path)? {
        tracing::debug!(target: "check", "{DOCS_CONF_PY} not present, skipping");
        return Ok(());
    }

    let content = read_text_file(&path)?;
    check_lines(&content, report);
    Ok(())
}

fn check_lines(content: &str, report: &mut Report) {
    for expected in EXPECTED_LINES {
        if let Some(prefix) = expected.strip_prefix('^') {
            if !content.lines().any(|line| line.starts_with(prefix)) {
                report.push(Diagnostic::DocsConfMissingLine {
                    line: prefix.to_string(),
                });
            }
        } else if !content.lines().any(|line| line.contains(expected)) {
            report.push(Diagnostic::DocsConfMissingLineContaining {
                fragment: (*expected).to_string(),
            });
        }
    }
}
