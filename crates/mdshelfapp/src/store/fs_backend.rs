use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem storage backend: each key is a `<key>.json` file under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ShelfError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let target_path = self.key_path(key)?;
        self.ensure_dir(&self.root)?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(ShelfError::Io)?;
        fs::rename(&tmp_path, target_path).map_err(ShelfError::Io)?;

        log::debug!("wrote {} bytes to key '{}'", value.len(), key);
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert_eq!(backend.get("documents").unwrap(), None);
    }

    #[test]
    fn test_set_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("shelf");
        let backend = FsBackend::new(root.clone());

        backend.set("theme", "\"dark\"").unwrap();

        assert!(root.join("theme.json").exists());
        assert_eq!(backend.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());

        assert!(matches!(
            backend.set("../escape", "x"),
            Err(ShelfError::Store(_))
        ));
        assert!(matches!(backend.get(""), Err(ShelfError::Store(_))));
    }
}
