//! Error types for mkpy operations.
//!
//! This module defines [`MkpyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MkpyError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MkpyError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mkpy operations.
#[derive(Debug, Error)]
pub enum MkpyError {
    /// A required external tool is not installed.
    #[error("{tool} is not installed\n{hint}")]
    ToolMissing { tool: String, hint: String },

    /// The requested project name is not usable.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The target directory already exists.
    #[error("A project already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    /// An external command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A scaffold stage failed and the sequence cannot continue.
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },

    /// A prompt was required but cannot be shown.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mkpy operations.
pub type Result<T> = std::result::Result<T, MkpyError>;
