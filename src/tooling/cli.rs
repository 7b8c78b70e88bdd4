//! CLI Tooling
//!
//! Command-line interface for inspecting checkpoint addressing: hash a path,
//! run the safety gate, or run the full locate pipeline against editor state
//! supplied via flags or a JSON snapshot.

use crate::config::{ConfigLoader, ShadowgitConfig};
use crate::error::CheckpointError;
use crate::hasher::hash_working_dir;
use crate::locator::ShadowRepositoryLocator;
use crate::safety::PathSafetyValidator;
use crate::types::ShadowRepositoryPath;
use crate::workspace::{DetectionStrategy, EditorSnapshot};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Shadowgit CLI - shadow repository addressing for workspace checkpoints
#[derive(Parser)]
#[command(name = "shadowgit")]
#[command(about = "Locate and validate shadow repositories for workspace checkpoints")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, both, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the directory hash for a workspace path
    Hash {
        /// Absolute workspace path, hashed exactly as given
        path: String,
    },
    /// Check whether a directory may be used as a checkpoint workspace
    Validate {
        /// Directory to check
        path: PathBuf,
        /// Home directory for the protected set (default: current user's)
        #[arg(long)]
        home: Option<PathBuf>,
    },
    /// Resolve the workspace and print its shadow repository path
    Locate {
        /// Persistent storage root (default: configured or platform data dir)
        #[arg(long)]
        storage: Option<PathBuf>,
        /// Home directory for the protected set (default: configured or current user's)
        #[arg(long)]
        home: Option<PathBuf>,
        /// Declared workspace folder (repeatable; first wins)
        #[arg(long = "workspace-folder")]
        workspace_folders: Vec<PathBuf>,
        /// Focused document path
        #[arg(long)]
        active: Option<PathBuf>,
        /// Visible document path (repeatable, in editor order)
        #[arg(long = "open")]
        open_documents: Vec<PathBuf>,
        /// JSON editor snapshot file instead of the individual flags
        #[arg(long, conflicts_with_all = ["workspace_folders", "active", "open_documents"])]
        snapshot: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI context: loaded configuration shared by all commands.
pub struct CliContext {
    config: ShadowgitConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, CheckpointError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Create a context from an already-built configuration.
    pub fn with_config(config: ShadowgitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShadowgitConfig {
        &self.config
    }

    /// Execute a command, returning the text to print on stdout.
    pub async fn execute(&self, command: &Commands) -> Result<String, CheckpointError> {
        match command {
            Commands::Hash { path } => Ok(hash_working_dir(path)?.to_string()),
            Commands::Validate { path, home } => {
                let home = self.home_dir(home.as_ref())?;
                let validated = PathSafetyValidator::new(&home).validate(path.clone()).await?;
                Ok(format!("ok: {}", validated.display()))
            }
            Commands::Locate {
                storage,
                home,
                workspace_folders,
                active,
                open_documents,
                snapshot,
                format,
            } => {
                let snapshot = match snapshot {
                    Some(path) => load_snapshot(path).await?,
                    None => EditorSnapshot {
                        workspace_folders: workspace_folders.clone(),
                        active_document: active.clone(),
                        open_documents: open_documents.clone(),
                    },
                };
                let storage_root = match storage {
                    Some(root) => root.clone(),
                    None => self.config.storage.resolve_root()?,
                };
                let home = self.home_dir(home.as_ref())?;
                self.locate(snapshot, storage_root, home, format).await
            }
        }
    }

    async fn locate(
        &self,
        snapshot: EditorSnapshot,
        storage_root: PathBuf,
        home: PathBuf,
        format: &str,
    ) -> Result<String, CheckpointError> {
        let (located, strategy) = ShadowRepositoryLocator::new(Arc::new(snapshot), &home)
            .locate_with_strategy(&storage_root)
            .await?;
        info!(
            %strategy,
            git_dir = %located.git_dir.display(),
            "Shadow repository located"
        );

        match format {
            "json" => {
                let body = LocateOutput {
                    strategy,
                    location: &located,
                };
                serde_json::to_string_pretty(&body).map_err(|e| {
                    CheckpointError::ConfigError(format!("Failed to serialize output: {}", e))
                })
            }
            "text" => Ok(format_location_text(&located, strategy)),
            other => Err(CheckpointError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn home_dir(&self, flag: Option<&PathBuf>) -> Result<PathBuf, CheckpointError> {
        match flag {
            Some(home) => Ok(home.clone()),
            None => self.config.storage.resolve_home(),
        }
    }
}

/// JSON body for `locate --format json`.
#[derive(Serialize)]
struct LocateOutput<'a> {
    strategy: DetectionStrategy,
    #[serde(flatten)]
    location: &'a ShadowRepositoryPath,
}

async fn load_snapshot(path: &Path) -> Result<EditorSnapshot, CheckpointError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        CheckpointError::ConfigError(format!(
            "Failed to read editor snapshot {}: {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        CheckpointError::ConfigError(format!(
            "Failed to parse editor snapshot {}: {}",
            path.display(),
            e
        ))
    })
}

fn format_location_text(located: &ShadowRepositoryPath, strategy: DetectionStrategy) -> String {
    format!(
        "workspace:  {}\ndetected:   {}\nhash:       {}\nshadow git: {}",
        located.workspace.display(),
        strategy,
        located.hash,
        located.git_dir.display()
    )
}
