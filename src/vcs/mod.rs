//! Git and GitHub operations.
//!
//! All operations shell out to `git` / `gh` with fixed argv lists and
//! return the captured result; callers decide whether a failure aborts
//! or degrades to a warning.

use std::path::Path;

use crate::error::Result;
use crate::shell::{execute_quiet, CommandResult};

/// Visibility of a GitHub repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    /// The `gh repo create` flag for this visibility.
    pub fn flag(&self) -> &'static str {
        match self {
            Visibility::Private => "--private",
            Visibility::Public => "--public",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

/// Initialize a git repository in the project directory.
pub fn init_repo(path: &Path) -> Result<CommandResult> {
    execute_quiet("git", &["init"], Some(path))
}

/// Stage all files.
pub fn stage_all(path: &Path) -> Result<CommandResult> {
    execute_quiet("git", &["add", "."], Some(path))
}

/// Create the initial commit.
pub fn initial_commit(path: &Path) -> Result<CommandResult> {
    execute_quiet("git", &["commit", "-m", "Initial commit"], Some(path))
}

/// Create a GitHub repository from the local one and push.
///
/// Uses the GitHub CLI so authentication and remote wiring come for
/// free: `gh repo create <name> <visibility> --source . --remote
/// origin --push`.
pub fn create_remote(name: &str, path: &Path, visibility: Visibility) -> Result<CommandResult> {
    execute_quiet(
        "gh",
        &[
            "repo",
            "create",
            name,
            visibility.flag(),
            "--source",
            ".",
            "--remote",
            "origin",
            "--push",
        ],
        Some(path),
    )
}
