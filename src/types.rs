//! Core types for checkpoint addressing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum number of decimal digits kept in a [`DirectoryHash`].
pub const DIRECTORY_HASH_MAX_DIGITS: usize = 13;

/// DirectoryHash: deterministic decimal key derived from a workspace path.
///
/// At most [`DIRECTORY_HASH_MAX_DIGITS`] digits, never zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryHash(String);

impl DirectoryHash {
    pub(crate) fn from_digits(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectoryHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for DirectoryHash {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Broad personal directories that must never key a shadow repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtectedDirectoryKind {
    Home,
    Desktop,
    Documents,
    Downloads,
}

impl ProtectedDirectoryKind {
    pub const ALL: [ProtectedDirectoryKind; 4] = [
        ProtectedDirectoryKind::Home,
        ProtectedDirectoryKind::Desktop,
        ProtectedDirectoryKind::Documents,
        ProtectedDirectoryKind::Downloads,
    ];

    /// Resolve this kind to a concrete path under `home`.
    pub fn path_under(self, home: &Path) -> PathBuf {
        match self {
            ProtectedDirectoryKind::Home => home.to_path_buf(),
            ProtectedDirectoryKind::Desktop => home.join("Desktop"),
            ProtectedDirectoryKind::Documents => home.join("Documents"),
            ProtectedDirectoryKind::Downloads => home.join("Downloads"),
        }
    }
}

impl fmt::Display for ProtectedDirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtectedDirectoryKind::Home => "home",
            ProtectedDirectoryKind::Desktop => "Desktop",
            ProtectedDirectoryKind::Documents => "Documents",
            ProtectedDirectoryKind::Downloads => "Downloads",
        };
        f.write_str(name)
    }
}

/// Result of a successful locate: where the shadow repository lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowRepositoryPath {
    /// `{storage_root}/checkpoints/{hash}/.git`; the `.git` leaf is not created here.
    pub git_dir: PathBuf,
    /// `{storage_root}/checkpoints/{hash}`; guaranteed to exist after locate.
    pub checkpoints_dir: PathBuf,
    pub workspace: PathBuf,
    pub hash: DirectoryHash,
}
