//! Repository acquisition
//!
//! Obtains a readable repository: a full local clone (created or
//! reused), or a transient shallow fetch that is deleted after use.

use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use super::GitError;
use super::constants::special;
use super::executor::GitExecutor;
use super::parser::Parser;
use crate::model::CommitRecord;

/// A repository acquired for a single history read.
#[derive(Debug)]
pub enum AcquiredRepo {
    /// A persistent clone at a caller-chosen destination.
    Clone(PathBuf),
    /// A transient shallow fetch; the directory is removed on drop,
    /// on every exit path.
    Transient(TempDir),
}

impl AcquiredRepo {
    /// Path to run the log command against.
    pub fn path(&self) -> &Path {
        match self {
            Self::Clone(path) => path,
            Self::Transient(dir) => dir.path(),
        }
    }

    /// Revision to log from.
    ///
    /// A shallow fetch into a fresh init leaves HEAD unborn, so the
    /// fetched tip is only reachable through FETCH_HEAD. A clone logs
    /// from its HEAD as usual.
    fn log_revision(&self) -> Option<&str> {
        match self {
            Self::Clone(_) => None,
            Self::Transient(_) => Some(special::FETCH_HEAD),
        }
    }

    /// Read the commit history of this repository.
    pub fn read_history(&self) -> Result<Vec<CommitRecord>, GitError> {
        let executor = GitExecutor::with_repo_path(self.path().to_path_buf());
        let output = executor.log_history(self.log_revision())?;
        Ok(Parser::parse_log(&output))
    }
}

/// Clone `url` into `dest`, or reuse `dest` as-is if it already exists.
///
/// Reuse performs no fetch or staleness check: an existing clone is
/// read exactly as it sits on disk.
pub fn clone_or_reuse(url: &str, dest: &Path) -> Result<AcquiredRepo, GitError> {
    if dest.exists() {
        println!(
            "Repository {} already exists. Skipping cloning.",
            dest.display()
        );
    } else {
        GitExecutor::new().clone_repo(url, dest)?;
    }
    Ok(AcquiredRepo::Clone(dest.to_path_buf()))
}

/// Shallow-fetch the tip of `url` (depth 1) into a transient directory.
///
/// Initializes an empty repository, registers `url` as origin, and
/// fetches with depth 1. History beyond the tip commit is unavailable
/// in this mode. Any failing step drops (and thus removes) the
/// directory before the error propagates.
pub fn fetch_shallow(url: &str) -> Result<AcquiredRepo, GitError> {
    let dir = TempDir::new()?;
    debug!("shallow fetch of {} into {}", url, dir.path().display());

    GitExecutor::new().init(dir.path())?;
    let executor = GitExecutor::with_repo_path(dir.path().to_path_buf());
    executor.remote_add_origin(url)?;
    executor.fetch_depth1()?;

    Ok(AcquiredRepo::Transient(dir))
}
