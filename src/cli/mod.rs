//! Command-line interfaces of the two binaries.
//!
//! - [`CheckCli`] backs `check-project`, the convention checker.
//! - [`HooksCli`] backs `project-hooks`, the template generation hooks.
//!
//! Every option can also be set through an environment variable, which is how
//! a template engine passes its variables to the hooks:
//!
//! | Option | Environment variable |
//! |---|---|
//! | `check-project --no-pluggy` | `CHECK_PROJECT_NO_PLUGGY` |
//! | `--module-name` | `PROJECT_MODULE_NAME` |
//! | `--directory-name` | `PROJECT_DIRECTORY_NAME` |
//! | `--github-username` | `PROJECT_GITHUB_USERNAME` |
//! | `--want-main` | `PROJECT_WANT_MAIN` |
//! | `--want-requests` | `PROJECT_WANT_REQUESTS` |
//! | `--project-dir` | `PROJECT_DIR` |
//!
//! Boolean variables accept `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`.
//!
//! # Examples
//!
//! ```bash
//! check-project                      # check the current directory
//! check-project ../my-project -P     # a project without the pluggy patch
//! project-hooks pre-gen --module-name my_module
//! project-hooks post-gen --module-name my_module --github-username someone --want-main
//! ```

mod check;
mod hooks;

pub use check::CheckCli;
pub use hooks::{HookCommand, HooksCli, PostGenArgs, PreGenArgs};
