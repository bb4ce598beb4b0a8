//! project-hooks entry point
//!
//! Runs the template's pre- or post-generation hook. Any failure is printed
//! with a suggestion and ends the process with status 1.

use clap::Parser;
use project_check::cli::HooksCli;
use project_check::core::user_friendly_error;
use project_check::utils::init_logging;

#[tokio::main]
async fn main() {
    let cli = HooksCli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    init_logging(cli.verbose());

    if let Err(e) = cli.execute().await {
        user_friendly_error(e).display();
        std::process::exit(1);
    }
}
