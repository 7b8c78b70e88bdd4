//! Shadow repository location: the entry point used by the checkpoint engine.
//!
//! Layout: `{storage_root}/checkpoints/{directory_hash}/.git`. The parent chain
//! is created on demand; the `.git` leaf belongs to the version-control engine.

use crate::error::CheckpointError;
use crate::hasher::hash_workspace_path;
use crate::safety::PathSafetyValidator;
use crate::types::{DirectoryHash, ShadowRepositoryPath};
use crate::workspace::{DetectionStrategy, WorkspaceEnvironment, WorkspaceResolver};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Directory under the storage root that holds every shadow repository.
pub const CHECKPOINTS_DIR: &str = "checkpoints";

/// Name of the shadow repository's git directory.
pub const SHADOW_GIT_DIR: &str = ".git";

/// Resolves, validates, and hashes the workspace, then materializes its checkpoint directory.
pub struct ShadowRepositoryLocator {
    resolver: WorkspaceResolver,
    validator: PathSafetyValidator,
}

impl ShadowRepositoryLocator {
    pub fn new(env: Arc<dyn WorkspaceEnvironment>, home_dir: &Path) -> Self {
        Self {
            resolver: WorkspaceResolver::new(env),
            validator: PathSafetyValidator::new(home_dir),
        }
    }

    /// Locate the shadow repository for the current workspace.
    pub async fn locate(&self, storage_root: &Path) -> Result<ShadowRepositoryPath, CheckpointError> {
        self.locate_with_strategy(storage_root)
            .await
            .map(|(located, _)| located)
    }

    /// Like [`locate`](Self::locate), also reporting which detection strategy found the workspace.
    pub async fn locate_with_strategy(
        &self,
        storage_root: &Path,
    ) -> Result<(ShadowRepositoryPath, DetectionStrategy), CheckpointError> {
        ensure_storage_root(storage_root)?;
        let resolved = self.resolver.resolve_detailed().await?;
        let located = self
            .locate_for_workspace(storage_root, resolved.path)
            .await?;
        Ok((located, resolved.strategy))
    }

    /// Locate the shadow repository for an already-resolved workspace.
    pub async fn locate_for_workspace(
        &self,
        storage_root: &Path,
        workspace: PathBuf,
    ) -> Result<ShadowRepositoryPath, CheckpointError> {
        ensure_storage_root(storage_root)?;
        let workspace = self.validator.validate(workspace).await?;
        let hash = hash_workspace_path(&workspace)?;
        let git_dir = shadow_git_path(storage_root, &hash).await?;
        let checkpoints_dir = checkpoints_dir(storage_root, &hash);

        Ok(ShadowRepositoryPath {
            git_dir,
            checkpoints_dir,
            workspace,
            hash,
        })
    }
}

/// `{storage_root}/checkpoints/{hash}` without touching the filesystem.
pub fn checkpoints_dir(storage_root: &Path, hash: &DirectoryHash) -> PathBuf {
    storage_root.join(CHECKPOINTS_DIR).join(hash)
}

/// Create `{storage_root}/checkpoints/{hash}` if missing and return its `.git` child.
///
/// Creating an existing directory is not an error, so concurrent callers converge.
pub async fn shadow_git_path(
    storage_root: &Path,
    hash: &DirectoryHash,
) -> Result<PathBuf, CheckpointError> {
    ensure_storage_root(storage_root)?;
    let dir = checkpoints_dir(storage_root, hash);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| CheckpointError::StorageIo {
            path: dir.clone(),
            source,
        })?;
    debug!(checkpoints_dir = %dir.display(), "Checkpoint directory ready");
    Ok(dir.join(SHADOW_GIT_DIR))
}

fn ensure_storage_root(storage_root: &Path) -> Result<(), CheckpointError> {
    if storage_root.as_os_str().is_empty() {
        return Err(CheckpointError::InvalidStorageRoot);
    }
    Ok(())
}
