//! Ordered workspace detection.
//!
//! Strategies run from most to least confident and the first answer wins:
//! declared root, active document, any open document, then an upward search
//! from the active document for a project marker.

use super::environment::WorkspaceEnvironment;
use super::markers::is_project_marker;
use crate::error::CheckpointError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Which detection strategy produced the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStrategy {
    DeclaredRoot,
    ActiveDocument,
    OpenDocument,
    ProjectMarker,
}

impl fmt::Display for DetectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectionStrategy::DeclaredRoot => "declared_root",
            DetectionStrategy::ActiveDocument => "active_document",
            DetectionStrategy::OpenDocument => "open_document",
            DetectionStrategy::ProjectMarker => "project_marker",
        };
        f.write_str(name)
    }
}

/// A resolved workspace and how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWorkspace {
    pub path: PathBuf,
    pub strategy: DetectionStrategy,
}

/// Detects the user's workspace directory from environment state.
pub struct WorkspaceResolver {
    env: Arc<dyn WorkspaceEnvironment>,
}

impl WorkspaceResolver {
    pub fn new(env: Arc<dyn WorkspaceEnvironment>) -> Self {
        Self { env }
    }

    /// Resolve the workspace directory.
    pub async fn resolve(&self) -> Result<PathBuf, CheckpointError> {
        self.resolve_detailed().await.map(|resolved| resolved.path)
    }

    /// Resolve the workspace directory, reporting the winning strategy.
    pub async fn resolve_detailed(&self) -> Result<ResolvedWorkspace, CheckpointError> {
        let found = if let Some(path) = self.from_declared_root() {
            Some((path, DetectionStrategy::DeclaredRoot))
        } else if let Some(path) = self.from_active_document() {
            Some((path, DetectionStrategy::ActiveDocument))
        } else if let Some(path) = self.from_open_documents() {
            Some((path, DetectionStrategy::OpenDocument))
        } else {
            self.from_project_markers()
                .await
                .map(|path| (path, DetectionStrategy::ProjectMarker))
        };

        match found {
            Some((path, strategy)) => {
                info!(workspace = %path.display(), %strategy, "Workspace detected");
                Ok(ResolvedWorkspace { path, strategy })
            }
            None => Err(CheckpointError::no_workspace()),
        }
    }

    fn from_declared_root(&self) -> Option<PathBuf> {
        self.env
            .declared_roots()
            .into_iter()
            .next()
            .filter(|root| !root.as_os_str().is_empty())
    }

    fn from_active_document(&self) -> Option<PathBuf> {
        let active = self.env.active_document()?;
        if !active.is_absolute() {
            return None;
        }
        containing_dir(&active)
    }

    fn from_open_documents(&self) -> Option<PathBuf> {
        self.env
            .open_documents()
            .iter()
            .filter(|document| document.is_absolute())
            .find_map(|document| containing_dir(document))
    }

    async fn from_project_markers(&self) -> Option<PathBuf> {
        let active = self.env.active_document()?;
        let mut current = active.parent()?.to_path_buf();

        // The filesystem root itself is never inspected.
        while let Some(parent) = current.parent() {
            match self.env.list_directory(&current).await {
                Ok(names) => {
                    if names.iter().any(|name| is_project_marker(name)) {
                        return Some(current);
                    }
                }
                Err(e) => {
                    debug!(dir = %current.display(), error = %e, "Skipping unreadable directory");
                }
            }
            current = parent.to_path_buf();
        }

        None
    }
}

fn containing_dir(document: &Path) -> Option<PathBuf> {
    document.parent().map(Path::to_path_buf)
}
