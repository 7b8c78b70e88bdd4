//! Environment capability: what the host editor knows about the user's workspace.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Read-only view of the host environment used for workspace resolution.
#[async_trait]
pub trait WorkspaceEnvironment: Send + Sync {
    /// Explicitly opened workspace folders, in the order the host reports them.
    fn declared_roots(&self) -> Vec<PathBuf>;

    /// Path of the focused document, if any.
    fn active_document(&self) -> Option<PathBuf>;

    /// Paths of all visible documents, in the order the host reports them.
    fn open_documents(&self) -> Vec<PathBuf>;

    /// Names of the immediate children of `dir`.
    async fn list_directory(&self, dir: &Path) -> std::io::Result<Vec<OsString>>;
}

/// Point-in-time editor state backed by the real filesystem for listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorSnapshot {
    #[serde(default)]
    pub workspace_folders: Vec<PathBuf>,
    #[serde(default)]
    pub active_document: Option<PathBuf>,
    #[serde(default)]
    pub open_documents: Vec<PathBuf>,
}

impl EditorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.workspace_folders.push(folder.into());
        self
    }

    pub fn with_active_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.active_document = Some(document.into());
        self
    }

    pub fn with_open_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.open_documents.push(document.into());
        self
    }
}

#[async_trait]
impl WorkspaceEnvironment for EditorSnapshot {
    fn declared_roots(&self) -> Vec<PathBuf> {
        self.workspace_folders.clone()
    }

    fn active_document(&self) -> Option<PathBuf> {
        self.active_document.clone()
    }

    fn open_documents(&self) -> Vec<PathBuf> {
        self.open_documents.clone()
    }

    async fn list_directory(&self, dir: &Path) -> std::io::Result<Vec<OsString>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name());
        }
        Ok(names)
    }
}
