//! Shadowgit: Workspace Checkpoint Addressing
//!
//! Detects the user's active project directory, refuses directories where
//! snapshotting would be meaningless or destructive, and computes where the
//! isolated shadow repository for that project lives on disk.

pub mod config;
pub mod error;
pub mod hasher;
pub mod locator;
pub mod logging;
pub mod safety;
pub mod tooling;
pub mod types;
pub mod workspace;

pub use error::CheckpointError;
pub use hasher::{hash_working_dir, hash_workspace_path};
pub use locator::{shadow_git_path, ShadowRepositoryLocator};
pub use safety::PathSafetyValidator;
pub use types::{DirectoryHash, ProtectedDirectoryKind, ShadowRepositoryPath};
pub use workspace::{
    DetectionStrategy, EditorSnapshot, ResolvedWorkspace, WorkspaceEnvironment, WorkspaceResolver,
};
