//! Error handling for RepoMesh
//!
//! This module provides the error taxonomy used across the CLI and the
//! user-facing rendering of those errors. The system is built around two types:
//! - [`RepoMeshError`] - Enumerated failure cases raised by the library
//! - [`ErrorContext`] - Wrapper adding details and a suggestion for CLI users
//!
//! # Error Categories
//!
//! - **Uninitialized state**: [`RepoMeshError::NotInitialized`]
//! - **Missing artifact**: [`RepoMeshError::ComposeFileMissing`]
//! - **Transport failure**: [`RepoMeshError::Api`] (network errors and non-2xx responses)
//! - **Local state**: [`RepoMeshError::ConfigParse`], [`RepoMeshError::FileSystem`]
//!
//! External-process failures are deliberately absent: the compose tool's exit
//! code is returned as data and becomes the CLI's own exit status.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repomesh_cli::core::{RepoMeshError, user_friendly_error};
//!
//! let err = anyhow::Error::from(RepoMeshError::NotInitialized {
//!     command: "repomesh init".to_string(),
//! });
//! let ctx = user_friendly_error(err);
//! ctx.display(); // error: RepoMesh is not initialized. Run `repomesh init` first.
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for RepoMesh operations.
///
/// Variants carry enough structure for callers to branch on them via
/// `anyhow::Error::downcast_ref`, while their `Display` output is the exact
/// one-line message shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoMeshError {
    /// Configuration or credential file is missing.
    ///
    /// Raised by read-only loads; the message names the bootstrap command.
    #[error("RepoMesh is not initialized. Run `{command}` first.")]
    NotInitialized {
        /// Command that creates the missing state
        command: String,
    },

    /// The compose artifact expected under the repository root is absent.
    #[error("Compose file not found: {path}")]
    ComposeFileMissing {
        /// Resolved path where the compose file was expected
        path: String,
    },

    /// Outbound API call failed.
    ///
    /// Covers both network-level failures (`status` is `None`) and non-2xx
    /// responses. The message is either the remote `error.message` or a generic
    /// message embedding the status code.
    #[error("{message}")]
    Api {
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Normalized message
        message: String,
    },

    /// A persisted document could not be parsed.
    #[error("Invalid RepoMesh state in {file}: {reason}")]
    ConfigParse {
        /// File that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// A filesystem operation failed.
    #[error("File system error: {operation} on {path}")]
    FileSystem {
        /// Operation that failed (e.g. "create directory")
        operation: String,
        /// Path involved
        path: String,
    },
}

impl RepoMeshError {
    /// HTTP status for API failures, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

/// Error wrapper with optional details and a suggestion.
///
/// The CLI prints only the one-line error; details and suggestion are emitted
/// through `tracing` so `--verbose` surfaces them.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error, already rendered
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr as a single line.
    pub fn display(&self) {
        if let Some(details) = &self.details {
            tracing::debug!("details: {details}");
        }
        if let Some(suggestion) = &self.suggestion {
            tracing::debug!("suggestion: {suggestion}");
        }
        eprintln!("{}: {}", "error".red().bold(), self.message);
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] for CLI display.
///
/// Known [`RepoMeshError`] variants get a suggestion; I/O errors get a
/// filesystem hint; everything else keeps its top-level message. The message
/// itself is never rewritten, so API errors surface exactly as the remote sent
/// them.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(err) = error.downcast_ref::<RepoMeshError>() {
        return create_error_context(err);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let ctx = ErrorContext::new(error.to_string());
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => ctx
                .with_suggestion("Check ownership of the repository and its .repomesh directory"),
            std::io::ErrorKind::NotFound => {
                ctx.with_suggestion("Check that the repository path is correct")
            }
            _ => ctx,
        };
    }

    let details = error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>();
    let ctx = ErrorContext::new(error.to_string());
    if details.is_empty() {
        ctx
    } else {
        ctx.with_details(details.join(": "))
    }
}

fn create_error_context(error: &RepoMeshError) -> ErrorContext {
    let ctx = ErrorContext::new(error.to_string());
    match error {
        RepoMeshError::NotInitialized { command } => ctx
            .with_suggestion(format!("Run `{command}` in the repository root"))
            .with_details("Both .repomesh/config.yml and .repomesh/token are required"),
        RepoMeshError::ComposeFileMissing { .. } => {
            ctx.with_suggestion("Run the command from the RepoMesh repository root or pass --repo")
        }
        RepoMeshError::Api { status: None, .. } => {
            ctx.with_suggestion("Check that the API is running with `repomesh status`")
        }
        RepoMeshError::Api { status: Some(401), .. } => ctx.with_suggestion(
            "The stored token was rejected; check LOCAL_TOKEN in infra/docker/.env",
        ),
        RepoMeshError::ConfigParse { .. } => {
            ctx.with_suggestion("Fix or delete the file, then run `repomesh init` again")
        }
        RepoMeshError::FileSystem { .. } => {
            ctx.with_suggestion("Move the conflicting file out of the way and retry")
        }
        RepoMeshError::Api { .. } => ctx,
    }
}
