//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitStagerError`] which covers the failure modes of
//! git-stager operations. It uses `thiserror` for ergonomic error definitions
//! and includes constructors for variants carrying context.
//!
//! # Public API
//! - [`GitStagerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitStagerError>`
//!
//! # Error Categories
//! - **Startup**: git binary missing (fatal, terminates the process)
//! - **Repository**: not inside a git working tree
//! - **Staging**: the external `git add` invocation failed
//! - **I/O**: forwarded `std::io::Error`
//!
//! Selection-level problems (bad indices, malformed input, cancellation) are
//! deliberately NOT errors: the selection presenters resolve them locally and
//! return `None`, so they never cross this boundary.

use thiserror::Error;

/// Domain-specific error types for git-stager
#[derive(Error, Debug)]
pub enum GitStagerError {
    #[error("Git is not installed! Please install Git and try again.")]
    GitNotInstalled,

    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to stage files: {detail}")]
    StageFailed { detail: String },
}

/// Convenience type alias for Results using GitStagerError
pub type Result<T> = std::result::Result<T, GitStagerError>;

impl GitStagerError {
    /// Create a stage failure error carrying the external tool's message
    pub fn stage_failed(detail: impl Into<String>) -> Self {
        Self::StageFailed {
            detail: detail.into(),
        }
    }
}
