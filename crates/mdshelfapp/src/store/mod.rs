//! # Storage Layer
//!
//! The shelf persists through a deliberately small interface: a key-value store of
//! string values ([`backend::StorageBackend`]). Everything above it works on whole
//! snapshots.
//!
//! ## Snapshot Model
//!
//! The document collection lives in memory inside [`doc_store::DocumentStore`] and is
//! written back as **one** serialized JSON array under [`DOCUMENTS_KEY`]:
//!
//! - **No partial writes**: every mutation re-serializes the full collection and
//!   overwrites the stored value.
//! - **Rollback on failure**: if the write fails, the in-memory change is undone, so the
//!   collection always matches the last successful snapshot.
//! - **Seeding**: a missing or unparseable snapshot is replaced by the built-in
//!   [`seed`] documents. Loading never fails.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `documents` | JSON array of [`crate::model::Document`] |
//! | `theme` | JSON string, `"light"` or `"dark"` |
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key in a data directory, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Concurrent Writers
//!
//! There is no versioning or compare-and-swap. Two processes writing the same data
//! directory resolve as last-writer-wins.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── documents.json   # Document snapshot
//! └── theme.json       # Current theme
//! ```

pub mod backend;
pub mod doc_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod seed;

pub use backend::StorageBackend;
pub use doc_store::{DocumentStore, ImportReport, StoreDefaults};

/// Key of the document collection snapshot.
pub const DOCUMENTS_KEY: &str = "documents";

/// Key of the persisted theme name.
pub const THEME_KEY: &str = "theme";
