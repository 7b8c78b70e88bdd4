//! Error types for workspace resolution, safety checks, and shadow repository addressing.

use crate::types::ProtectedDirectoryKind;
use std::path::PathBuf;
use thiserror::Error;

/// Hint shown to users when no workspace could be detected.
pub const OPEN_WORKSPACE_HINT: &str =
    "Try opening a folder or workspace in your editor before creating checkpoints.";

/// Errors surfaced to the checkpoint engine.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("No workspace detected. Please open a folder or workspace to use checkpoints. {hint}")]
    NoWorkspaceDetected { hint: String },

    #[error(
        "Cannot access workspace directory {}. Please ensure the editor has permission to access your workspace. Error: {source}",
        path.display()
    )]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot use checkpoints in {kind} directory")]
    ProtectedDirectory {
        kind: ProtectedDirectoryKind,
        path: PathBuf,
    },

    #[error("Persistent storage root is invalid")]
    InvalidStorageRoot,

    #[error("Working directory path cannot be empty")]
    EmptyPath,

    #[error("Failed to create checkpoint directory {}: {source}", path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CheckpointError {
    /// Build the terminal resolution failure with the standard hint.
    pub fn no_workspace() -> Self {
        CheckpointError::NoWorkspaceDetected {
            hint: OPEN_WORKSPACE_HINT.to_string(),
        }
    }
}

impl From<config::ConfigError> for CheckpointError {
    fn from(err: config::ConfigError) -> Self {
        CheckpointError::ConfigError(err.to_string())
    }
}
