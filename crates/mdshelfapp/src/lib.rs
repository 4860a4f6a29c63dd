//! # mdshelf Architecture
//!
//! mdshelf is a **UI-agnostic Markdown document shelf**: a library that keeps a collection
//! of Markdown documents, with a command-line client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/mdshelf)                                       │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves references (positions, id prefixes) to ids      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns structured CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore: the collection and its snapshot           │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Next to the layers sit pure helpers with no storage access: [`filter`] (view
//! projections), [`nav`] (category and tag lists), [`images`] (image-link rewriting),
//! [`format`] (dates, sizes, previews) and [`render`] (Markdown to HTML).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the process and
//! never assumes a terminal. Diagnostics go through the `log` facade; the client decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`model`]: `Document`, `ImageRef`, `DocumentFields`
//! - [`store`]: Storage backends and the document store
//! - [`commands`]: Business logic per operation
//! - [`api`]: Facade for clients
//! - [`index`]: Document references (positions and id prefixes)
//! - [`import`]: Reading files for import
//! - [`state`]: Explicit view state for interactive clients
//! - [`theme`]: Light/dark theme
//! - [`config`]: Configuration
//! - [`init`]: Context setup for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod images;
pub mod import;
pub mod index;
pub mod init;
pub mod model;
pub mod nav;
pub mod render;
pub mod state;
pub mod store;
pub mod theme;
