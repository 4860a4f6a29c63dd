//! # Configuration
//!
//! mdshelf configuration is loaded with [`confique`] from TOML files and environment
//! variables.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `MDSHELF_DATA_DIR`, `MDSHELF_DEFAULT_CATEGORY`, etc.
//! 2. **Shelf config**: `<data_dir>/mdshelf.toml`, when the data directory was given
//!    explicitly (`--data` or `MDSHELF_DATA`).
//! 3. **Global config**: `mdshelf.toml` in the OS-appropriate config directory (via
//!    `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | platform data dir | Where snapshots are stored |
//! | `default_category` | `uncategorized` | Category for manual entries left blank |
//! | `import_category` | `imported` | Category for imports left blank |
//! | `preview_length` | `150` | Characters shown in list previews |
//! | `recent_limit` | `5` | Entries in the recent list |
//! | `import_extensions` | `[".md", ".markdown", ".txt"]` | Files accepted by `import` |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::format::DEFAULT_PREVIEW_LENGTH;
use crate::import::SUPPORTED_EXTENSIONS;
use crate::model::{DEFAULT_CATEGORY, DEFAULT_IMPORT_CATEGORY};
use crate::store::doc_store::DEFAULT_RECENT_LIMIT;
use crate::store::StoreDefaults;

/// Name of the configuration file, both globally and inside a data directory.
pub const CONFIG_FILE_NAME: &str = "mdshelf.toml";

/// Configuration for mdshelf, stored in `mdshelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding the snapshots. Platform data directory when absent.
    #[config(env = "MDSHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Category given to manual entries that leave it blank.
    #[config(env = "MDSHELF_DEFAULT_CATEGORY", default = "uncategorized")]
    pub default_category: String,

    /// Category given to imported files that leave it blank.
    #[config(env = "MDSHELF_IMPORT_CATEGORY", default = "imported")]
    pub import_category: String,

    #[config(env = "MDSHELF_PREVIEW_LENGTH", default = 150)]
    pub preview_length: usize,

    #[config(env = "MDSHELF_RECENT_LIMIT", default = 5)]
    pub recent_limit: usize,

    /// Extensions accepted by `import`.
    /// When absent, defaults to [".md", ".markdown", ".txt"].
    pub import_extensions: Option<Vec<String>>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_category: DEFAULT_CATEGORY.to_string(),
            import_category: DEFAULT_IMPORT_CATEGORY.to_string(),
            preview_length: DEFAULT_PREVIEW_LENGTH,
            recent_limit: DEFAULT_RECENT_LIMIT,
            import_extensions: None,
        }
    }
}

impl ShelfConfig {
    /// Loads the configuration from the environment and `files`, earlier files winning.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Loads a single TOML file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Get import extensions, normalized to start with a dot.
    pub fn import_extensions(&self) -> Vec<String> {
        match &self.import_extensions {
            Some(exts) => exts
                .iter()
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.clone()
                    } else {
                        format!(".{}", ext)
                    }
                })
                .collect(),
            None => SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn store_defaults(&self) -> StoreDefaults {
        StoreDefaults {
            category: self.default_category.clone(),
            import_category: self.import_category.clone(),
            import_extensions: self.import_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.default_category, "uncategorized");
        assert_eq!(config.import_category, "imported");
        assert_eq!(config.preview_length, 150);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.import_extensions(), vec![".md", ".markdown", ".txt"]);
    }

    #[test]
    fn test_import_extensions_normalized() {
        let config = ShelfConfig {
            import_extensions: Some(vec!["md".to_string(), ".rst".to_string()]),
            ..Default::default()
        };
        assert_eq!(config.import_extensions(), vec![".md", ".rst"]);
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "default_category = \"inbox\"\nrecent_limit = 3\nimport_extensions = [\".md\"]\n",
        )
        .unwrap();

        let config = ShelfConfig::from_file(&path).unwrap();
        assert_eq!(config.default_category, "inbox");
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.import_category, "imported");
        assert_eq!(config.import_extensions(), vec![".md"]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "recent_limit = \"many\"").unwrap();

        assert!(matches!(
            ShelfConfig::from_file(&path),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn test_store_defaults_follow_config() {
        let config = ShelfConfig {
            import_category: "inbox".into(),
            ..Default::default()
        };
        assert_eq!(config.store_defaults().import_category, "inbox");
        assert_eq!(config.store_defaults().category, "uncategorized");
        assert_eq!(
            config.store_defaults().import_extensions,
            vec![".md", ".markdown", ".txt"]
        );
    }
}
