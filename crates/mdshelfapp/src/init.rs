//! # Context Initialization
//!
//! Wires configuration, data directory and store together for a client.
//!
//! ## Data Directory Resolution
//!
//! The first of these wins:
//! 1. `data_override` (the CLI's `--data` flag).
//! 2. The `MDSHELF_DATA` environment variable. Used by tests to isolate state.
//! 3. `data_dir` from the configuration.
//! 4. The OS-appropriate data directory (via the `directories` crate).
//!
//! ## Config Files
//!
//! When the data directory is explicit (1 or 2), an `mdshelf.toml` inside it is read
//! first, then the global `mdshelf.toml` in the OS config directory. Environment
//! variables override both. See [`crate::config`].

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::api::ShelfApi;
use crate::config::{ShelfConfig, CONFIG_FILE_NAME};
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;

/// Environment variable that overrides the data directory.
pub const DATA_ENV: &str = "MDSHELF_DATA";

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "mdshelf", "mdshelf")
}

/// Path of the global config file, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Initialize the mdshelf context: load configuration and open the store.
///
/// # Examples
///
/// ```ignore
/// // Platform data directory
/// let ctx = initialize(None)?;
///
/// // Explicit data directory
/// let ctx = initialize(Some(PathBuf::from("/tmp/shelf")))?;
/// ```
pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let explicit_dir = data_override.or_else(|| std::env::var_os(DATA_ENV).map(PathBuf::from));

    let mut config_files = Vec::new();
    if let Some(dir) = &explicit_dir {
        config_files.push(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(global) = global_config_path() {
        config_files.push(global);
    }
    let config = ShelfConfig::load(&config_files)?;

    let data_dir = explicit_dir
        .or_else(|| config.data_dir.clone())
        .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))?;

    log::info!("using data directory {}", data_dir.display());

    let api = ShelfApi::open(FsBackend::new(data_dir.clone()), config.clone());
    Ok(ShelfContext {
        api,
        config,
        data_dir,
    })
}
