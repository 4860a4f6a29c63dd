//! # View-Filter Engine
//!
//! Pure projections over the document collection. Every function borrows the collection
//! and returns the matching documents in collection order; nothing here mutates or
//! caches. Call again whenever the collection or the criterion changes.
//!
//! At most one criterion is active at a time ([`ViewFilter`]):
//!
//! | Criterion | Match |
//! |-----------|-------|
//! | Text | case-insensitive substring of title, content, category or any tag |
//! | Category | exact, case-sensitive; [`ALL_CATEGORIES`] matches everything |
//! | Tag | exact membership in `tags`; selecting the active tag again clears it |

use crate::model::Document;

/// Category entry that selects the whole collection.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    None,
    Text(String),
    Category(String),
    Tag(String),
}

impl ViewFilter {
    pub fn is_none(&self) -> bool {
        matches!(self, ViewFilter::None)
    }
}

pub fn filter_by_text<'a>(docs: &'a [Document], query: &str) -> Vec<&'a Document> {
    let query = query.trim();
    if query.is_empty() {
        return docs.iter().collect();
    }
    let needle = query.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&needle);

    docs.iter()
        .filter(|d| {
            hit(d.title.as_str())
                || hit(d.content.as_str())
                || hit(d.category.as_str())
                || d.tags.iter().any(|t| hit(t.as_str()))
        })
        .collect()
}

pub fn filter_by_category<'a>(docs: &'a [Document], category: &str) -> Vec<&'a Document> {
    if category == ALL_CATEGORIES {
        return docs.iter().collect();
    }
    docs.iter().filter(|d| d.category == category).collect()
}

/// Selects documents tagged `tag`, toggling off when `tag` is already `active`.
///
/// Returns the projection and the tag that is active afterwards.
pub fn filter_by_tag<'a>(
    docs: &'a [Document],
    tag: &str,
    active: Option<&str>,
) -> (Vec<&'a Document>, Option<String>) {
    if active == Some(tag) {
        return (docs.iter().collect(), None);
    }
    let selected = docs
        .iter()
        .filter(|d| d.tags.iter().any(|t| t == tag))
        .collect();
    (selected, Some(tag.to_string()))
}

/// Projects `docs` through the active criterion.
pub fn apply<'a>(docs: &'a [Document], filter: &ViewFilter) -> Vec<&'a Document> {
    match filter {
        ViewFilter::None => docs.iter().collect(),
        ViewFilter::Text(query) => filter_by_text(docs, query),
        ViewFilter::Category(category) => filter_by_category(docs, category),
        ViewFilter::Tag(tag) => filter_by_tag(docs, tag, None).0,
    }
}
