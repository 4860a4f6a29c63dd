use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `DocumentStore` handles the "what" (snapshots, validation, ordering).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing was ever stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
