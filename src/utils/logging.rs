//! Logging setup for the binaries.
//!
//! Output goes to stderr so that stdout carries nothing but diagnostics.
//! Verbosity is controlled with `RUST_LOG` (default `warn`, or `debug` with
//! `--verbose`):
//!
//! ```bash
//! RUST_LOG=debug check-project path/to/project
//! RUST_LOG=hooks=info project-hooks post-gen --module-name my_pkg
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used by `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Install the global fmt subscriber.
///
/// `RUST_LOG` always wins over `verbose`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .try_init();
}
