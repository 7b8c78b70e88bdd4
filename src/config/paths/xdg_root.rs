//! Platform directory utilities: config home, default storage root, user home.

use crate::error::CheckpointError;
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Result<PathBuf, CheckpointError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    Ok(home_dir()?.join(".config"))
}

/// Path of the global config file: `$XDG_CONFIG_HOME/shadowgit/config.toml`
pub fn global_config_path() -> Result<PathBuf, CheckpointError> {
    Ok(config_home()?.join("shadowgit").join("config.toml"))
}

/// Default persistent storage root: the platform data directory for shadowgit.
pub fn default_storage_root() -> Result<PathBuf, CheckpointError> {
    let project_dirs = directories::ProjectDirs::from("", "shadowgit", "shadowgit").ok_or_else(
        || {
            CheckpointError::ConfigError(
                "Could not determine platform data directory for checkpoints".to_string(),
            )
        },
    )?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf, CheckpointError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| {
            CheckpointError::ConfigError("Could not determine home directory".to_string())
        })
}
