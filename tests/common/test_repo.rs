//! TestRepo helper for integration tests.
//!
//! Provides a temporary Git repository for testing githist operations.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary Git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new Git repository in a temporary directory.
    ///
    /// Commit identity is configured locally so tests do not depend on
    /// global git configuration.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("git")
            .arg("init")
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute git init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("git init failed: {}", stderr);
        }

        let repo = Self { dir };
        repo.git(&["config", "user.name", "Test Author"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Get the repository path as a URL-ish string for clone/fetch.
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Get a file:// URL for this repository.
    ///
    /// Plain local paths use git's local transport, which ignores
    /// `--depth`; shallow fetches need the file:// form.
    pub fn file_url(&self) -> String {
        format!("file://{}", self.dir.path().display())
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Execute a git command, returning Result instead of panicking.
    ///
    /// Use this when testing error cases or when failure is expected.
    pub fn git_result(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(String::from_utf8_lossy(&output.stderr).into_owned())
        }
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Stage everything and commit with the given subject.
    pub fn commit(&self, subject: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "--allow-empty", "-m", subject]);
    }

    /// Write a file and commit it in one step.
    pub fn commit_file(&self, name: &str, content: &str, subject: &str) {
        self.write_file(name, content);
        self.commit(subject);
    }

    /// Full hash of HEAD.
    pub fn head_hash(&self) -> String {
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }

    /// Full hashes of all commits, newest first.
    pub fn commit_hashes(&self) -> Vec<String> {
        self.git(&["log", "--pretty=format:%H"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Subject of HEAD.
    pub fn head_subject(&self) -> String {
        self.git(&["log", "-1", "--pretty=format:%s"])
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
