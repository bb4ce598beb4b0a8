//! `package.json` checks, including the version cross-check against
//! `pyproject.toml`.

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use std::path::Path;

use super::pyproject::PYPROJECT_TOML;
use super::rules::{Expected, Rule, evaluate, expect_equals, expect_members};
use crate::diagnostics::{Diagnostic, Report};
use crate::document::{KeyPath, Segment, load_json_reported, load_toml, lookup};
use crate::key_path;

/// Path of the package manifest.
pub const PACKAGE_JSON: &str = "package.json";

const REQUIRED_KEYS: &[Rule] = &[
    Rule::Present(key_path!["contributors"]),
    Rule::Present(key_path!["devDependencies"]),
    Rule::Present(key_path!["license"]),
    Rule::Present(key_path!["name"]),
    Rule::Present(key_path!["prettier"]),
    Rule::Present(key_path!["repository"]),
    Rule::Present(key_path!["scripts"]),
    Rule::Present(key_path!["version"]),
];

/// Package scripts and the exact command each must run.
pub const EXPECTED_SCRIPTS: &[(&str, &str)] = &[
    (
        "check-formatting",
        "yarn prettier -c . && poetry run yapf -prd . && markdownlint-cli2 '**/*.md' '#node_modules'",
    ),
    ("check-spelling", "cspell --no-progress ."),
    (
        "clean-dict",
        r#"r=(); while IFS=$\n read -r w; do ! rg --no-config -qi. -g '!.vscode/dictionary.txt' -m 1 "$w" . && r+=("$w"); done < ./.vscode/dictionary.txt; j=$(printf "|%s" "${r[@]}"); j="^(${j:1})$"; grep -Ev "${j}" ./.vscode/dictionary.txt > new && mv new ./.vscode/dictionary.txt"#,
    ),
    (
        "fix-pluggy",
        r#"touch "$(poetry run python -c 'import inspect, os, pluggy; print(os.path.dirname(inspect.getabsfile(pluggy)))')/py.typed""#,
    ),
    (
        "format",
        "yarn prettier -w . && poetry run yapf -pri . && markdownlint-cli2 --fix '**/*.md' '#node_modules'",
    ),
    ("mypy", "yarn fix-pluggy && poetry run mypy ."),
    ("qa", "yarn mypy && yarn ruff && yarn check-spelling && yarn check-formatting"),
    ("ruff", "poetry run ruff ."),
    ("test", "poetry run pytest"),
];

/// Prettier plugins the project formats with.
pub const EXPECTED_PRETTIER_PLUGINS: &[Expected] = &[
    Expected::Str("@prettier/plugin-xml"),
    Expected::Str("prettier-plugin-ini"),
    Expected::Str("prettier-plugin-sort-json"),
    Expected::Str("prettier-plugin-toml"),
];

const PRETTIER_PLUGINS: KeyPath<'static> = key_path!["prettier", "plugins"];
const PACKAGE_VERSION: KeyPath<'static> = key_path!["version"];
const POETRY_VERSION: KeyPath<'static> = key_path!["tool", "poetry", "version"];

/// The script table in effect.
///
/// Without pluggy there is no `fix-pluggy` script, and `mypy` runs directly.
///
/// # Errors
///
/// Returns an error if the rewrite pattern fails to compile.
pub fn expected_scripts(no_pluggy: bool) -> Result<Vec<(&'static str, String)>> {
    if !no_pluggy {
        return Ok(EXPECTED_SCRIPTS
            .iter()
            .map(|(name, command)| (*name, (*command).to_string()))
            .collect());
    }

    let fix_pluggy_prefix = Regex::new(r"^yarn fix-pluggy && ").context("Invalid script pattern")?;
    Ok(EXPECTED_SCRIPTS
        .iter()
        .filter(|(name, _)| *name != "fix-pluggy")
        .map(|(name, command)| {
            let command = if *name == "mypy" {
                fix_pluggy_prefix.replace(command, "").into_owned()
            } else {
                (*command).to_string()
            };
            (*name, command)
        })
        .collect())
}

/// Check `package.json`.
///
/// # Errors
///
/// Returns an error if `package.json` or `pyproject.toml` exists but cannot be
/// read.
pub fn check_package_json(workdir: &Path, no_pluggy: bool, report: &mut Report) -> Result<()> {
    let Some(doc) = load_json_reported(workdir, PACKAGE_JSON, report)? else {
        return Ok(());
    };

    evaluate(report, PACKAGE_JSON, &doc, REQUIRED_KEYS);

    if lookup(&doc, &key_path!["scripts"]).is_some() {
        for (name, command) in expected_scripts(no_pluggy)? {
            let path = KeyPath(&[Segment::Key("scripts"), Segment::Key(name)]);
            expect_equals(report, PACKAGE_JSON, &doc, &path, &Value::String(command));
        }
    }

    match lookup(&doc, &PRETTIER_PLUGINS) {
        None => report.push(Diagnostic::KeyNotPresent {
            file: PACKAGE_JSON.to_string(),
            key: PRETTIER_PLUGINS.to_string(),
            expected: None,
        }),
        Some(plugins) => {
            let items: Vec<Value> =
                EXPECTED_PRETTIER_PLUGINS.iter().map(Expected::to_value).collect();
            expect_members(report, PACKAGE_JSON, Some(plugins), &PRETTIER_PLUGINS, &items);
        }
    }

    // pyproject.toml parse problems are reported by its own check
    if let Some(pyproject) = load_toml(workdir, PYPROJECT_TOML)?.into_document() {
        check_versions_match(&doc, &pyproject, report);
    }

    Ok(())
}

fn check_versions_match(package: &Value, pyproject: &Value, report: &mut Report) {
    let package_version = lookup(package, &PACKAGE_VERSION).filter(|v| !v.is_null());
    let poetry_version = lookup(pyproject, &POETRY_VERSION).filter(|v| !v.is_null());

    if let (Some(package_version), Some(poetry_version)) = (package_version, poetry_version) {
        if package_version != poetry_version {
            tracing::debug!(
                target: "check",
                "package.json version {package_version} != pyproject.toml version {poetry_version}"
            );
            report.push(Diagnostic::VersionMismatch);
        }
    }
}
