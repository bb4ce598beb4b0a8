//! Core types shared by the checker and the hooks.
//!
//! - [`ProjectError`] - environment failures that abort a run
//! - [`ErrorContext`] - user-facing wrapper with details and suggestions
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] for display

pub mod error;

pub use error::{ErrorContext, ProjectError, user_friendly_error};
