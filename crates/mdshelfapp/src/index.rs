//! # Document References: Ids vs Positions
//!
//! Documents are identified by an opaque string id (a UUID for new documents). Typing
//! UUIDs is cumbersome, so clients may also refer to a document by:
//!
//! 1. **Position**: its 1-based place in the full, unfiltered collection (`3` or `#3`).
//!    The collection is newest-first, so `1` is the most recently added document.
//! 2. **Id prefix**: any prefix of the id that matches exactly one document.
//!
//! Positions are always computed on the whole collection, never on a filtered view, so
//! `view 2` targets the same document whatever list was printed last.
//!
//! Input made only of digits (with an optional leading `#`) is a position. Everything
//! else is matched against ids: an exact match wins, otherwise the prefix must be unique.
//!
//! - [`index_documents`]: Attaches positions to a list of documents
//! - [`DocRef`]: A parsed user reference
//! - [`resolve`]: Maps a reference to an id

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShelfError};
use crate::model::Document;

/// A document together with its canonical position.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDoc {
    pub doc: Document,
    pub index: usize,
}

/// Assigns 1-based positions in collection order.
pub fn index_documents(docs: &[Document]) -> Vec<DisplayDoc> {
    docs.iter()
        .enumerate()
        .map(|(i, doc)| DisplayDoc {
            doc: doc.clone(),
            index: i + 1,
        })
        .collect()
}

/// Keeps the canonical positions of the documents in `visible`.
pub fn index_visible(all: &[Document], visible: &[&Document]) -> Vec<DisplayDoc> {
    visible
        .iter()
        .filter_map(|doc| {
            all.iter()
                .position(|d| d.id == doc.id)
                .map(|i| DisplayDoc {
                    doc: (*doc).clone(),
                    index: i + 1,
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocRef {
    Position(usize),
    Id(String),
}

impl fmt::Display for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocRef::Position(i) => write!(f, "#{}", i),
            DocRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for DocRef {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShelfError::Api("Empty document reference".to_string()));
        }

        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            let position: usize = digits
                .parse()
                .map_err(|_| ShelfError::Api(format!("Invalid position: {}", s)))?;
            if position == 0 {
                return Err(ShelfError::Api("Positions start at 1".to_string()));
            }
            return Ok(DocRef::Position(position));
        }
        if s.starts_with('#') {
            return Err(ShelfError::Api(format!("Invalid position: {}", s)));
        }

        Ok(DocRef::Id(s.to_string()))
    }
}

/// Maps `reference` to the id of a document in `docs`.
pub fn resolve(docs: &[Document], reference: &DocRef) -> Result<String> {
    match reference {
        DocRef::Position(position) => position
            .checked_sub(1)
            .and_then(|i| docs.get(i))
            .map(|d| d.id.clone())
            .ok_or_else(|| ShelfError::NotFound(format!("#{}", position))),
        DocRef::Id(id) => {
            if let Some(doc) = docs.iter().find(|d| &d.id == id) {
                return Ok(doc.id.clone());
            }
            let matches: Vec<&Document> = docs
                .iter()
                .filter(|d| d.id.starts_with(id.as_str()))
                .collect();
            match matches.as_slice() {
                [] => Err(ShelfError::NotFound(id.clone())),
                [doc] => Ok(doc.id.clone()),
                many => Err(ShelfError::Api(format!(
                    "Ambiguous reference '{}' matches {} documents",
                    id,
                    many.len()
                ))),
            }
        }
    }
}

/// Parses every input and resolves it against `docs`.
pub fn resolve_all<S: AsRef<str>>(docs: &[Document], inputs: &[S]) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| {
            let reference: DocRef = input.as_ref().parse()?;
            resolve(docs, &reference)
        })
        .collect()
}
