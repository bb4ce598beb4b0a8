//! Shared utilities.
//!
//! - [`fs`] - file helpers with path context on every error
//! - [`logging`] - tracing subscriber setup for the binaries

pub mod fs;
pub mod logging;

pub use fs::{atomic_write, ensure_dir, path_exists, read_text_file, remove_file};
pub use logging::init_logging;
