//! Well-known names whose presence marks a directory as a project root.

use std::ffi::OsStr;

/// Version-control metadata, dependency manifests, editor config, build manifests.
pub const PROJECT_MARKERS: [&str; 7] = [
    ".git",
    "package.json",
    ".vscode",
    "tsconfig.json",
    "Cargo.toml",
    "go.mod",
    ".project",
];

/// True when `name` is one of [`PROJECT_MARKERS`]. Matching is exact and case-sensitive.
pub fn is_project_marker(name: &OsStr) -> bool {
    PROJECT_MARKERS.iter().any(|marker| OsStr::new(marker) == name)
}
