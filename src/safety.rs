//! Workspace safety gate.
//!
//! Rejects workspaces that cannot be read and workspaces that are exactly one
//! of the broad personal directories (home, Desktop, Documents, Downloads).
//! The protected check is exact equality: `~/Documents/project` passes.

use crate::error::CheckpointError;
use crate::types::ProtectedDirectoryKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The four protected locations resolved against one home directory.
#[derive(Debug, Clone)]
pub struct ProtectedDirectorySet {
    entries: Vec<(ProtectedDirectoryKind, PathBuf)>,
}

impl ProtectedDirectorySet {
    pub fn for_home(home: &Path) -> Self {
        let entries = ProtectedDirectoryKind::ALL
            .iter()
            .map(|kind| (*kind, kind.path_under(home)))
            .collect();
        Self { entries }
    }

    /// Return the kind of protected directory `path` is exactly equal to, if any.
    pub fn match_exact(&self, path: &Path) -> Option<ProtectedDirectoryKind> {
        self.entries
            .iter()
            .find(|(_, protected)| protected.as_path() == path)
            .map(|(kind, _)| *kind)
    }
}

/// Validates resolved workspaces before they are used as checkpoint keys.
#[derive(Debug, Clone)]
pub struct PathSafetyValidator {
    protected: ProtectedDirectorySet,
}

impl PathSafetyValidator {
    pub fn new(home_dir: &Path) -> Self {
        Self {
            protected: ProtectedDirectorySet::for_home(home_dir),
        }
    }

    /// Validate `path`, returning it unchanged when usable.
    pub async fn validate(&self, path: PathBuf) -> Result<PathBuf, CheckpointError> {
        if let Err(source) = check_readable(&path).await {
            warn!(workspace = %path.display(), error = %source, "Workspace directory is not readable");
            return Err(CheckpointError::PermissionDenied { path, source });
        }

        if let Some(kind) = self.protected.match_exact(&path) {
            warn!(workspace = %path.display(), %kind, "Refusing protected directory");
            return Err(CheckpointError::ProtectedDirectory { kind, path });
        }

        Ok(path)
    }
}

async fn check_readable(path: &Path) -> std::io::Result<()> {
    tokio::fs::read_dir(path).await.map(|_| ())
}
