//! Git command execution layer
//!
//! This module handles acquiring a readable repository, executing git
//! commands, and parsing their output.

mod acquire;
pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use acquire::{AcquiredRepo, clone_or_reuse, fetch_shallow};
pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
