//! Integration test suite for project-check
//!
//! End-to-end tests that run the `check-project` and `project-hooks` binaries
//! against projects written to temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **check**: diagnostics, exit status and options of `check-project`
//! - **hooks**: `pre-gen` and `post-gen`, run against fake tools on `PATH`

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod check;
mod hooks;
