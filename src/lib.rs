//! Githist - Git commit history exporter
//!
//! Extracts the commit history of a Git repository (cloned locally or
//! shallow-fetched from a remote) and exports it to a tabular file format.
//!
//! This library provides:
//! - [`cli`]: Command-line interface definition
//! - [`git`]: Git command execution and parsing
//! - [`export`]: Format exporters
//! - [`model`]: Domain models

pub mod cli;
pub mod export;
pub mod git;
pub mod model;
