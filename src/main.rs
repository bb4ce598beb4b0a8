//! check-project entry point
//!
//! Parses arguments, runs every convention check against the project
//! directory and prints the diagnostics. Exits with status 1 only when the
//! checks cannot run at all.

use clap::Parser;
use project_check::cli::CheckCli;
use project_check::core::user_friendly_error;
use project_check::utils::init_logging;

fn main() {
    let cli = CheckCli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    init_logging(cli.verbose());

    if let Err(e) = cli.execute() {
        user_friendly_error(e).display();
        std::process::exit(1);
    }
}
