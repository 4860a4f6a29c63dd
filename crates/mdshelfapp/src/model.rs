//! # Domain Model: Documents
//!
//! This module defines the core data structures for mdshelf: [`Document`], [`ImageRef`]
//! and [`DocumentFields`], the user-editable subset of a document.
//!
//! ## The Document Record
//!
//! A document is a Markdown text with a title, one category and an ordered list of tags.
//! The whole collection is persisted as a single JSON array, so the record layout is also
//! the on-disk format:
//!
//! ```text
//! {
//!   "id": "5f0c…",            <-- opaque, immutable
//!   "title": "CSS Grid",
//!   "category": "notes",
//!   "tags": ["css", "layout"],
//!   "content": "# CSS Grid …",
//!   "images": [ … ],          <-- only present for imported files with local images
//!   "createdAt": "2024-01-08T00:00:00.000Z",
//!   "updatedAt": "2024-01-08T00:00:00.000Z"
//! }
//! ```
//!
//! Keys are camelCase and timestamps RFC 3339, which keeps snapshots written by earlier
//! browser-based versions of the shelf loadable as-is. Ids are plain strings for the same
//! reason: new documents get a UUID v4, but legacy snapshots carry ids such as `"1"`.
//!
//! ## Field Normalization
//!
//! Form input is normalized before it reaches a document:
//!
//! 1. **Title / Content**: trimmed; both must be non-empty ([`DocumentFields::validate`]).
//! 2. **Category**: trimmed; empty falls back to a sentinel chosen by the caller
//!    (`uncategorized` for manual entries, `imported` for imports by default).
//! 3. **Tags**: a comma-separated input is split, each part trimmed, empties dropped
//!    ([`parse_tags`]). Order is kept and duplicates are allowed.
//!
//! ## Timestamps
//!
//! `created_at` is set once. `updated_at` is bumped by every edit and never goes below
//! `created_at`, even if the system clock went backwards in between.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ShelfError};

/// Category used when a manual entry leaves the category empty.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Category used when an import leaves the category empty.
pub const DEFAULT_IMPORT_CATEGORY: &str = "imported";

/// A local image link found in an imported file, and where it was pointed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub original_path: String,
    pub new_path: String,
    #[serde(alias = "altText")]
    pub alt: String,
    pub image_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Builds a fresh document from already normalized fields.
    pub fn new(fields: DocumentFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            category: fields.category,
            tags: fields.tags,
            content: fields.content,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_images(mut self, images: Vec<ImageRef>) -> Self {
        self.images = images;
        self
    }

    /// Replaces the editable fields and bumps `updated_at`.
    ///
    /// `id`, `created_at` and `images` are left alone.
    pub fn apply_fields(&mut self, fields: DocumentFields) {
        self.title = fields.title;
        self.category = fields.category;
        self.tags = fields.tags;
        self.content = fields.content;
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Returns the editable fields of this document, e.g. to pre-fill an edit form.
    pub fn fields(&self) -> DocumentFields {
        DocumentFields {
            title: self.title.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            content: self.content.clone(),
        }
    }
}

/// The user-editable part of a document, as submitted by a form or a CLI invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFields {
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl DocumentFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets tags from a comma-separated input such as `"rust, cli,,notes"`.
    pub fn with_tags_input(mut self, input: &str) -> Self {
        self.tags = parse_tags(input);
        self
    }

    /// Checks that title and content are non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [("title", &self.title), ("content", &self.content)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ShelfError::Validation(format!(
                "{} must not be empty",
                missing.join(" and ")
            )))
        }
    }

    /// Trims every field, applies the category fallback and drops empty tags.
    pub fn normalized(self, fallback_category: &str) -> Self {
        let category = self.category.trim();
        Self {
            title: self.title.trim().to_string(),
            category: if category.is_empty() {
                fallback_category.to_string()
            } else {
                category.to_string()
            },
            tags: self
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            content: self.content.trim().to_string(),
        }
    }
}

/// Splits a comma-separated tag input, trimming each tag and dropping empty ones.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
