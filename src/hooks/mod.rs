//! Template generation hooks.
//!
//! The template runs two hooks around project generation:
//!
//! - **pre-gen** only validates the chosen module name.
//! - **post-gen** validates, then bootstraps the freshly generated directory:
//!   dependencies are added and installed with Poetry, the Node tooling is
//!   added and the project formatted with Yarn, the spell-check dictionary is
//!   updated, and a git repository is initialized with a first commit.
//!
//! Bootstrapping is described as a list of [`Step`]s by
//! [`PostGenHook::plan`] before anything runs. Steps execute strictly one
//! after another and the first failure aborts the hook. Nothing is rolled
//! back: the target is a brand-new directory that can simply be regenerated.
//!
//! A [`PostGenHook`] can only be built from parameters whose module name is
//! valid, so an invalid name never reaches the point where a process starts.

pub mod command;
pub mod dictionary;

use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::ProjectError;
use crate::utils::fs::remove_file;
use command::{CommandRunner, ToolCommand};
use dictionary::{DICTIONARY_TXT, dependency_name, update_dictionary};

/// A module name: a letter or underscore, then at least one word character.
pub const MODULE_NAME_PATTERN: &str = r"^[_a-zA-Z][_a-zA-Z0-9]+$";

/// Message of the first commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Start of project";

const PACKAGES: &[&str] = &["loguru"];
const DEV_PACKAGES: &[&str] = &["mypy", "pylint", "pylint-quotes", "rope", "toml", "yapf"];
const DOCS_PACKAGES: &[&str] = &["docutils", "esbonio", "sphinx", "toml"];
const TEST_PACKAGES: &[&str] = &["coveralls", "mock", "pytest", "pytest-mock"];

const YARN_DEV_PACKAGES: &[&str] =
    &["cspell", "markdownlint-cli2", "prettier-plugin-sort-json", "prettier-plugin-toml"];

/// Template variables the hooks act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookParams {
    /// Python package name of the project
    pub module_name: String,
    /// Name of the generated directory and of the GitHub repository
    pub directory_name: String,
    /// Owner of the GitHub repository
    pub github_username: String,
    /// Whether the project has a command line entry point
    pub want_main: bool,
    /// Whether the project uses `requests`
    pub want_requests: bool,
    /// The generated project directory
    pub project_dir: PathBuf,
}

/// Check `name` against [`MODULE_NAME_PATTERN`].
///
/// # Errors
///
/// Returns [`ProjectError::InvalidModuleName`] when the name does not match.
pub fn validate_module_name(name: &str) -> Result<()> {
    let pattern = Regex::new(MODULE_NAME_PATTERN).context("Invalid module name pattern")?;
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(ProjectError::InvalidModuleName {
            name: name.to_string(),
        }
        .into())
    }
}

/// The pre-generation hook.
///
/// # Errors
///
/// Returns [`ProjectError::InvalidModuleName`] for an invalid module name.
pub fn pre_gen(module_name: &str) -> Result<()> {
    validate_module_name(module_name)?;
    tracing::debug!(target: "hooks", "module name {module_name} is valid");
    Ok(())
}

/// Python dependencies per Poetry group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGroups {
    /// Runtime dependencies
    pub packages: Vec<String>,
    /// `dev` group
    pub dev: Vec<String>,
    /// `docs` group
    pub docs: Vec<String>,
    /// `tests` group
    pub tests: Vec<String>,
}

impl DependencyGroups {
    /// The dependencies for a project with the given options.
    #[must_use]
    pub fn for_options(want_main: bool, want_requests: bool) -> Self {
        let owned = |names: &[&str]| names.iter().map(ToString::to_string).collect::<Vec<_>>();
        let mut groups = Self {
            packages: owned(PACKAGES),
            dev: owned(DEV_PACKAGES),
            docs: owned(DOCS_PACKAGES),
            tests: owned(TEST_PACKAGES),
        };

        if want_main {
            groups.packages.push("click>=8.1.3,!=8.1.4".to_string());
            groups.docs.push("sphinx-click".to_string());
        }
        if want_requests {
            groups.dev.push("types-requests".to_string());
            groups.packages.push("requests".to_string());
            groups.tests.push("requests-mock".to_string());
        }

        groups
    }

    /// `(group, dependencies)` pairs in install order; the runtime group is `None`.
    #[must_use]
    pub fn by_group(&self) -> [(Option<&'static str>, &[String]); 4] {
        [
            (None, self.packages.as_slice()),
            (Some("dev"), self.dev.as_slice()),
            (Some("docs"), self.docs.as_slice()),
            (Some("tests"), self.tests.as_slice()),
        ]
    }
}

/// One unit of post-generation work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Delete a generated file.
    RemoveFile(PathBuf),
    /// Run an external program.
    Run(ToolCommand),
    /// Merge words into the spell-check dictionary.
    UpdateDictionary {
        /// Dictionary file
        path: PathBuf,
        /// Words to add
        words: Vec<String>,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveFile(path) => write!(f, "remove {}", path.display()),
            Self::Run(command) => write!(f, "{command}"),
            Self::UpdateDictionary { path, words } => {
                write!(f, "add {} word(s) to {}", words.len(), path.display())
            }
        }
    }
}

/// The post-generation hook for parameters that passed validation.
#[derive(Debug, Clone)]
pub struct PostGenHook {
    params: HookParams,
}

impl PostGenHook {
    /// Validate `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::InvalidModuleName`] for an invalid module name.
    pub fn new(params: HookParams) -> Result<Self> {
        validate_module_name(&params.module_name)?;
        Ok(Self { params })
    }

    /// The validated parameters.
    #[must_use]
    pub const fn params(&self) -> &HookParams {
        &self.params
    }

    /// SSH address of the project's GitHub repository.
    #[must_use]
    pub fn repository_uri(&self) -> String {
        format!(
            "git@github.com:{}/{}.git",
            self.params.github_username, self.params.directory_name
        )
    }

    /// Dependencies for this project.
    #[must_use]
    pub fn dependency_groups(&self) -> DependencyGroups {
        DependencyGroups::for_options(self.params.want_main, self.params.want_requests)
    }

    /// Words the spell checker must accept in a fresh project: the module
    /// name, the repository owner and every dependency name.
    #[must_use]
    pub fn dictionary_words(&self) -> Vec<String> {
        let groups = self.dependency_groups();
        let dependencies = groups
            .by_group()
            .into_iter()
            .flat_map(|(_, deps)| deps.iter().map(|d| dependency_name(d)));

        [self.params.module_name.as_str(), self.params.github_username.as_str()]
            .into_iter()
            .chain(dependencies)
            .filter(|word| !word.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Every step of the hook, in execution order.
    #[must_use]
    pub fn plan(&self) -> Vec<Step> {
        let dir = self.params.project_dir.as_path();
        let run = |program: &str, args: &[&str]| {
            Step::Run(ToolCommand::new(program).args(args.iter().copied()).current_dir(dir))
        };
        let mut steps = Vec::new();

        if !self.params.want_main {
            steps.push(Step::RemoveFile(dir.join(&self.params.module_name).join("main.py")));
        }

        for (group, deps) in self.dependency_groups().by_group() {
            let mut command = ToolCommand::new("poetry").arg("add");
            if let Some(group) = group {
                command = command.args(["-G", group]);
            }
            steps.push(Step::Run(command.args(deps.iter().cloned()).current_dir(dir)));
        }
        steps.push(run("poetry", &["install", "--with=dev", "--with=docs", "--with=tests"]));

        let yarn_add: Vec<&str> =
            ["add", "-D"].into_iter().chain(YARN_DEV_PACKAGES.iter().copied()).collect();
        steps.push(run("yarn", yarn_add.as_slice()));
        steps.push(run("yarn", &["format"]));

        steps.push(Step::UpdateDictionary {
            path: dir.join(DICTIONARY_TXT),
            words: self.dictionary_words(),
        });

        let uri = self.repository_uri();
        steps.push(run("git", &["init"]));
        steps.push(run("git", &["add", "."]));
        steps.push(run("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE, "--signoff"]));
        steps.push(run("git", &["remote", "add", "origin", uri.as_str()]));

        steps
    }

    /// Execute [`plan`](Self::plan), stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails.
    pub async fn run<R: CommandRunner>(&self, runner: &R) -> Result<()> {
        let steps = self.plan();
        let total = steps.len();

        for (index, step) in steps.iter().enumerate() {
            tracing::info!(target: "hooks", "[{}/{}] {}", index + 1, total, step);
            execute_step(step, runner).await?;
        }

        tracing::info!(target: "hooks", "project {} is ready", self.params.directory_name);
        Ok(())
    }
}

async fn execute_step<R: CommandRunner>(step: &Step, runner: &R) -> Result<()> {
    match step {
        Step::RemoveFile(path) => remove_file(path),
        Step::Run(command) => runner.run(command).await,
        Step::UpdateDictionary { path, words } => update_dictionary(path, words.as_slice()),
    }
}

/// Project directory to use when none is given.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn default_project_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current directory")
}

/// Whether `dir` looks like a generated project root.
#[must_use]
pub fn is_project_root(dir: &Path) -> bool {
    dir.join("pyproject.toml").is_file()
}
