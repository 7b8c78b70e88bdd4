//! Workspace domain: environment capability, project markers, and resolution.

mod environment;
mod markers;
mod resolver;

pub use environment::{EditorSnapshot, WorkspaceEnvironment};
pub use markers::{is_project_marker, PROJECT_MARKERS};
pub use resolver::{DetectionStrategy, ResolvedWorkspace, WorkspaceResolver};
