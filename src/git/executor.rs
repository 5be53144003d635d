//! Git command executor
//!
//! Handles running git commands and capturing their output.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use super::GitError;
use super::constants::{self, commands, flags, special};

/// Executor for git commands
#[derive(Debug, Clone, Default)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(constants::GIT_COMMAND);
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }
        cmd.args(args);
        cmd
    }

    fn spawn_error(error: io::Error) -> GitError {
        if error.kind() == io::ErrorKind::NotFound {
            GitError::GitNotFound
        } else {
            GitError::IoError(error)
        }
    }

    /// Run a git command with the given arguments, capturing output.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!("running git {}", args.join(" "));
        let output = self.command(args).output().map_err(Self::spawn_error)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);
            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run a git command with inherited stdio.
    ///
    /// Used for clone, whose progress output should stay visible. On
    /// failure the diagnostic has already reached the terminal, so the
    /// error carries only the exit code.
    pub fn run_inherit(&self, args: &[&str]) -> Result<(), GitError> {
        debug!("running git {} (inherited stdio)", args.join(" "));
        let status = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(Self::spawn_error)?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommandFailed {
                stderr: String::new(),
                exit_code: status.code().unwrap_or(-1),
            })
        }
    }

    /// Get the git version
    pub fn version(&self) -> Result<String, GitError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "git version 2.43.0"
        let trimmed = output.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }

    /// Run the history log command, returning raw stdout.
    ///
    /// Invokes `git log --pretty=format:%H|%an|%ad|%s --date=iso`, plus
    /// an optional revision when the repository has no usable HEAD.
    ///
    /// The exit status of this one call is deliberately ignored: git
    /// exits non-zero for a repository with no commits, and an empty
    /// history is a valid result, not an error. stdout is empty in that
    /// case and parses to zero records.
    pub fn log_history(&self, revision: Option<&str>) -> Result<String, GitError> {
        let mut args = vec![commands::LOG, flags::PRETTY_HISTORY, flags::DATE_ISO];
        if let Some(rev) = revision {
            args.push(rev);
        }

        debug!("running git {}", args.join(" "));
        let output = self.command(&args).output().map_err(Self::spawn_error)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run `git clone <url> <dest>` with visible progress
    pub fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        let dest = dest.to_string_lossy().into_owned();
        self.run_inherit(&[commands::CLONE, url, dest.as_str()])
    }

    /// Run `git init <dir>` quietly
    pub fn init(&self, dir: &Path) -> Result<(), GitError> {
        let dir = dir.to_string_lossy().into_owned();
        self.run(&[commands::INIT, dir.as_str()])?;
        Ok(())
    }

    /// Run `git remote add origin <url>` quietly
    pub fn remote_add_origin(&self, url: &str) -> Result<(), GitError> {
        self.run(&[commands::REMOTE, commands::REMOTE_ADD, special::ORIGIN, url])?;
        Ok(())
    }

    /// Run `git fetch --depth=1 origin` quietly
    pub fn fetch_depth1(&self) -> Result<(), GitError> {
        self.run(&[commands::FETCH, flags::DEPTH_1, special::ORIGIN])?;
        Ok(())
    }
}
