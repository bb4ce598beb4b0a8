//! Fixtures for generated projects
//!
//! A [`ProjectFixture`] is a set of files, keyed by path relative to the
//! project root. [`ProjectFixture::valid`] follows every convention the
//! checker knows about, so a test can start from a clean project and break
//! exactly the thing it is interested in.

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::checks::files::EXPECTED_FILES;
use crate::checks::package_json::expected_scripts;
use crate::checks::rules::Rule;
use crate::checks::vscode::SETTINGS_RULES;

/// `docs/conf.py` carrying every expected line.
pub const DOCS_CONF_PY: &str = "\
from datetime import datetime
from os.path import dirname
from typing import Final
import toml

with open(f'{dirname(__file__)}/../pyproject.toml') as f:
    PROJECT = toml.load(f)

copyright: Final[str] = str(datetime.now().year)
project: Final[str] = PROJECT['tool']['poetry']['name']
version: Final[str] = PROJECT['tool']['poetry']['version']
release: Final[str] = f'v{version}'
extensions = (['sphinx.ext.autodoc', 'sphinx.ext.napoleon'] +
              (['sphinx_click'] if PROJECT['tool']['poetry'].get('scripts') else []))
";

/// `pyproject.toml` with all tool sections and Poetry metadata.
pub const PYPROJECT_TOML: &str = r#"[build-system]
build-backend = "poetry.core.masonry.api"
requires = ["poetry-core"]

[tool.poetry]
authors = ["Someone <someone@example.com>"]
classifiers = ["Programming Language :: Python :: 3"]
description = "A generated project."
documentation = "https://my-project.readthedocs.org"
homepage = "https://github.com/someone/my-project"
keywords = ["example"]
license = "MIT"
name = "my-project"
packages = [{ include = "mymodule" }]
readme = "README.md"
version = "0.0.1"

[tool.mypy]
strict = true

[tool.pytest.ini_options]
mock_use_standalone_module = true

[tool.ruff]
line-length = 100

[tool.yapf]
column_limit = 100
"#;

/// A generated project as a set of files.
#[derive(Clone, Debug)]
pub struct ProjectFixture {
    files: BTreeMap<String, String>,
}

impl ProjectFixture {
    /// A project that produces no diagnostics.
    pub fn valid() -> Self {
        Self::valid_with(false)
    }

    /// A valid project that does not patch pluggy (checked with `--no-pluggy`).
    pub fn valid_no_pluggy() -> Self {
        Self::valid_with(true)
    }

    fn valid_with(no_pluggy: bool) -> Self {
        let mut files: BTreeMap<String, String> =
            EXPECTED_FILES.iter().map(|path| ((*path).to_string(), String::new())).collect();

        files.insert(".vscode/cspell.json".to_string(), pretty(&cspell_json()));
        files.insert(".vscode/settings.json".to_string(), pretty(&settings_json()));
        files.insert(
            ".markdownlint.json".to_string(),
            pretty(&json!({
                "default": true,
                "line-length": {"code_blocks": false, "line_length": 100}
            })),
        );
        files.insert("package.json".to_string(), pretty(&package_json(no_pluggy)));
        files.insert("pyproject.toml".to_string(), PYPROJECT_TOML.to_string());
        files.insert("docs/conf.py".to_string(), DOCS_CONF_PY.to_string());
        files.insert(".vscode/dictionary.txt".to_string(), "loguru\nmymodule\n".to_string());

        Self { files }
    }

    /// Replace or add a file.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.files.insert(path.to_string(), content.into());
        self
    }

    /// Drop a file.
    #[must_use]
    pub fn without(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    /// Write every file below `root`.
    pub fn write_to(&self, root: &Path) -> Result<()> {
        for (path, content) in &self.files {
            let full = root.join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&full, content)
                .with_context(|| format!("Failed to write {}", full.display()))?;
        }
        Ok(())
    }
}

fn pretty(value: &Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.push('\n');
    text
}

/// Spell-check configuration satisfying every check.
pub fn cspell_json() -> Value {
    json!({
        "dictionaryDefinitions": [{"name": "main", "path": "dictionary.txt"}],
        "enableGlobDot": true,
        "enabledLanguageIds": ["git-commit", "markdown", "python", "toml"],
        "ignorePaths": [
            "*.log", ".coverage", ".directory", ".git", ".mypy_cache",
            ".vscode/extensions.json", "__pycache__", "_build/**", "build/**",
            "dist/**", "htmlcov/**", "node_modules/**", "poetry.lock", "yarn.lock"
        ],
        "languageSettings": [{"dictionaries": ["main"], "languageId": "*"}]
    })
}

/// Editor settings holding exactly the required values.
pub fn settings_json() -> Value {
    let settings: Map<String, Value> = SETTINGS_RULES
        .iter()
        .filter_map(|rule| match rule {
            Rule::Equals(path, expected) => Some((path.to_string(), expected.to_value())),
            _ => None,
        })
        .collect();
    Value::Object(settings)
}

/// Package manifest with the expected scripts and plugins.
pub fn package_json(no_pluggy: bool) -> Value {
    let scripts: Map<String, Value> = expected_scripts(no_pluggy)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, command)| (name.to_string(), Value::String(command)))
        .collect();

    json!({
        "contributors": ["Someone <someone@example.com>"],
        "devDependencies": {
            "@prettier/plugin-xml": "^3.0.0",
            "cspell": "^6.31.1",
            "markdownlint-cli2": "^0.7.1",
            "prettier": "^2.8.8",
            "prettier-plugin-ini": "^1.1.0",
            "prettier-plugin-sort-json": "^1.0.0",
            "prettier-plugin-toml": "^0.3.1"
        },
        "license": "MIT",
        "name": "my-project",
        "prettier": {
            "plugins": [
                "@prettier/plugin-xml",
                "prettier-plugin-ini",
                "prettier-plugin-sort-json",
                "prettier-plugin-toml"
            ]
        },
        "repository": "git@github.com:someone/my-project.git",
        "scripts": scripts,
        "version": "0.0.1"
    })
}
