//! Git-specific constants
//!
//! Centralized definitions for git command names, flags, and the
//! history log format contract.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const CLONE: &str = "clone";
    pub const INIT: &str = "init";
    pub const REMOTE: &str = "remote";
    pub const REMOTE_ADD: &str = "add";
    pub const FETCH: &str = "fetch";
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Specify repository path (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Show version
    pub const VERSION: &str = "--version";
    /// One line per commit: full hash, author name, date, subject,
    /// `|`-separated. This exact string is the output contract; changing
    /// it changes every exported artifact.
    pub const PRETTY_HISTORY: &str = "--pretty=format:%H|%an|%ad|%s";
    /// ISO 8601 dates with offset in log output
    pub const DATE_ISO: &str = "--date=iso";
    /// Fetch only the tip commit
    pub const DEPTH_1: &str = "--depth=1";
}

/// Special git values
pub mod special {
    /// Remote name registered for transient fetches
    pub const ORIGIN: &str = "origin";

    /// Ref holding the tip of the last fetch.
    ///
    /// A shallow fetch into a fresh init leaves HEAD unborn, so the
    /// fetched history is only reachable through this ref.
    pub const FETCH_HEAD: &str = "FETCH_HEAD";

    /// Version output prefix (e.g., "git version 2.43.0")
    pub const VERSION_PREFIX: &str = "git version ";
}

/// Field delimiter in history log lines
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in a history log line.
///
/// The subject is free text and may contain the delimiter, so parsing
/// caps the split at this count.
pub const LOG_FIELD_COUNT: usize = 4;
