use async_trait::async_trait;
use shadowgit::{
    CheckpointError, DetectionStrategy, EditorSnapshot, WorkspaceEnvironment, WorkspaceResolver,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Environment whose active document is relative, with listings rooted at `base`.
struct RootedEnvironment {
    base: PathBuf,
    active: PathBuf,
}

#[async_trait]
impl WorkspaceEnvironment for RootedEnvironment {
    fn declared_roots(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn active_document(&self) -> Option<PathBuf> {
        Some(self.active.clone())
    }

    fn open_documents(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    async fn list_directory(&self, dir: &Path) -> std::io::Result<Vec<OsString>> {
        EditorSnapshot::new().list_directory(&self.base.join(dir)).await
    }
}

#[tokio::test]
async fn declared_root_wins_over_active_document() {
    let snapshot = EditorSnapshot::new()
        .with_workspace_folder("/projects/declared")
        .with_active_document("/projects/other/src/main.rs")
        .with_open_document("/projects/third/notes.md");

    let resolved = WorkspaceResolver::new(Arc::new(snapshot))
        .resolve_detailed()
        .await
        .unwrap();
    assert_eq!(resolved.path, PathBuf::from("/projects/declared"));
    assert_eq!(resolved.strategy, DetectionStrategy::DeclaredRoot);
}

#[tokio::test]
async fn open_document_used_when_nothing_focused() {
    let snapshot = EditorSnapshot::new()
        .with_open_document("/projects/first/a.py")
        .with_open_document("/projects/second/b.py");

    let resolved = WorkspaceResolver::new(Arc::new(snapshot))
        .resolve_detailed()
        .await
        .unwrap();
    assert_eq!(resolved.path, PathBuf::from("/projects/first"));
    assert_eq!(resolved.strategy, DetectionStrategy::OpenDocument);
}

#[tokio::test]
async fn marker_search_finds_nearest_project_root() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("repo/src/nested")).unwrap();
    std::fs::write(temp.path().join("repo/go.mod"), "module example\n").unwrap();

    let env = RootedEnvironment {
        base: temp.path().to_path_buf(),
        active: PathBuf::from("repo/src/nested/lib.go"),
    };
    let resolved = WorkspaceResolver::new(Arc::new(env))
        .resolve_detailed()
        .await
        .unwrap();
    assert_eq!(resolved.path, PathBuf::from("repo"));
    assert_eq!(resolved.strategy, DetectionStrategy::ProjectMarker);
}

#[tokio::test]
async fn marker_search_skips_levels_that_cannot_be_listed() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("repo")).unwrap();
    std::fs::create_dir(temp.path().join("repo/.git")).unwrap();

    // repo/src/missing does not exist on disk; listing it fails.
    let env = RootedEnvironment {
        base: temp.path().to_path_buf(),
        active: PathBuf::from("repo/src/missing/file.txt"),
    };
    let resolved = WorkspaceResolver::new(Arc::new(env)).resolve().await.unwrap();
    assert_eq!(resolved, PathBuf::from("repo"));
}

#[tokio::test]
async fn marker_search_exhausts_without_marker() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("plain/dir")).unwrap();
    std::fs::write(temp.path().join("plain/README.md"), "").unwrap();

    let env = RootedEnvironment {
        base: temp.path().to_path_buf(),
        active: PathBuf::from("plain/dir/notes.txt"),
    };
    let err = WorkspaceResolver::new(Arc::new(env))
        .resolve()
        .await
        .unwrap_err();
    assert!(matches!(err, CheckpointError::NoWorkspaceDetected { .. }));
}
