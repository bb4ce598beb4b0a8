//! `project-hooks`: the template's pre- and post-generation hooks.

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::ProjectError;
use crate::hooks::command::SystemRunner;
use crate::hooks::{HookParams, PostGenHook, default_project_dir, is_project_root, pre_gen};

/// Run the template generation hooks.
#[derive(Parser, Debug)]
#[command(name = "project-hooks", version)]
pub struct HooksCli {
    /// The hook to run.
    #[command(subcommand)]
    command: HookCommand,

    /// Log debug output to stderr (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available hooks.
#[derive(Subcommand, Debug)]
pub enum HookCommand {
    /// Validate the template variables before generation.
    PreGen(PreGenArgs),
    /// Bootstrap the generated project: dependencies, formatting, dictionary, git.
    PostGen(PostGenArgs),
}

/// Options of `pre-gen`.
#[derive(Args, Debug)]
pub struct PreGenArgs {
    /// Python package name of the project.
    #[arg(long, env = "PROJECT_MODULE_NAME")]
    pub module_name: String,
}

/// Options of `post-gen`.
#[derive(Args, Debug)]
pub struct PostGenArgs {
    /// Python package name of the project.
    #[arg(long, env = "PROJECT_MODULE_NAME")]
    pub module_name: String,

    /// Repository name; defaults to the name of the project directory.
    #[arg(long, env = "PROJECT_DIRECTORY_NAME")]
    pub directory_name: Option<String>,

    /// Owner of the GitHub repository.
    #[arg(long, env = "PROJECT_GITHUB_USERNAME")]
    pub github_username: String,

    /// The project has a command line entry point.
    #[arg(long, env = "PROJECT_WANT_MAIN", value_parser = BoolishValueParser::new())]
    pub want_main: bool,

    /// The project uses `requests`.
    #[arg(long, env = "PROJECT_WANT_REQUESTS", value_parser = BoolishValueParser::new())]
    pub want_requests: bool,

    /// The generated project; defaults to the current directory.
    #[arg(long, env = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,
}

impl HooksCli {
    /// Whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the selected hook.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid module name, a missing project
    /// directory, or the first failing post-generation step.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            HookCommand::PreGen(args) => pre_gen(&args.module_name),
            HookCommand::PostGen(args) => {
                let hook = PostGenHook::new(args.into_params()?)?;
                let project_dir = &hook.params().project_dir;

                if !project_dir.is_dir() {
                    return Err(ProjectError::WorkdirNotFound {
                        path: project_dir.display().to_string(),
                    }
                    .into());
                }
                if !is_project_root(project_dir) {
                    tracing::warn!(
                        target: "hooks",
                        "{} has no pyproject.toml; is this the generated project?",
                        project_dir.display()
                    );
                }

                hook.run(&SystemRunner).await
            }
        }
    }
}

impl PostGenArgs {
    /// Resolve defaults into [`HookParams`].
    ///
    /// # Errors
    ///
    /// Returns an error if no project directory was given and the current
    /// directory cannot be determined.
    pub fn into_params(self) -> Result<HookParams> {
        let project_dir = match self.project_dir {
            Some(dir) => dir,
            None => default_project_dir()?,
        };
        let directory_name = self.directory_name.unwrap_or_else(|| {
            project_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Ok(HookParams {
            module_name: self.module_name,
            directory_name,
            github_username: self.github_username,
            want_main: self.want_main,
            want_requests: self.want_requests,
            project_dir,
        })
    }
}
