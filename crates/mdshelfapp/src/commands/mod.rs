//! # Command Layer
//!
//! This module contains the **core business logic** of mdshelf. Each command lives in
//! its own submodule and implements plain Rust functions over the document store.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout, stderr or formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_docs`: Documents created or modified, with their position
//! - `listed_docs`: Documents to display, with their position
//! - `nav_entries`: Category or tag names with document counts
//! - `html`: Rendered document body (for `render`)
//! - `theme`: Current theme (for `theme`)
//! - `messages`: Structured messages with levels (info, success, warning, error)
//!
//! ## Command Modules
//!
//! - [`create`]: Create a document from manual input
//! - [`import`]: Import files as documents
//! - [`edit`]: Modify an existing document
//! - [`list`]: List documents through a view filter
//! - [`view`]: Retrieve or render a single document
//! - [`nav`]: Categories, tags and recent documents
//! - [`theme`]: Show or toggle the theme

use crate::index::DisplayDoc;
use crate::theme::Theme;
use serde::Serialize;

pub mod create;
pub mod edit;
pub mod import;
pub mod list;
pub mod nav;
pub mod theme;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A category or tag with the number of documents under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_docs: Vec<DisplayDoc>,
    pub listed_docs: Vec<DisplayDoc>,
    pub nav_entries: Vec<NavEntry>,
    pub html: Option<String>,
    pub theme: Option<Theme>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_docs(mut self, docs: Vec<DisplayDoc>) -> Self {
        self.affected_docs = docs;
        self
    }

    pub fn with_listed_docs(mut self, docs: Vec<DisplayDoc>) -> Self {
        self.listed_docs = docs;
        self
    }

    pub fn with_nav_entries(mut self, entries: Vec<NavEntry>) -> Self {
        self.nav_entries = entries;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
