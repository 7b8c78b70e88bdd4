//! StorageConfig: persistent storage root and home directory resolution.

use crate::config::xdg;
use crate::error::CheckpointError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Persistent storage root holding `checkpoints/`; None means the platform data dir
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Home directory used for protected-directory checks; None means the current user's
    #[serde(default)]
    pub home: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the persistent storage root.
    pub fn resolve_root(&self) -> Result<PathBuf, CheckpointError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => xdg::default_storage_root(),
        }
    }

    /// Resolve the home directory for the protected set.
    pub fn resolve_home(&self) -> Result<PathBuf, CheckpointError> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => xdg::home_dir(),
        }
    }
}
