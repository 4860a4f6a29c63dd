//! Navigation lists derived from the collection: categories and tags.
//!
//! Both keep first-appearance order, which for a newest-first collection means the
//! most recently added category or tag comes first.

use crate::model::Document;

/// Distinct categories in first-appearance order.
pub fn categories(docs: &[Document]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for doc in docs {
        if !seen.contains(&doc.category.as_str()) {
            seen.push(&doc.category);
        }
    }
    seen
}

/// Distinct tags in first-appearance order.
pub fn tags(docs: &[Document]) -> Vec<&str> {
    tag_counts(docs).into_iter().map(|(tag, _)| tag).collect()
}

/// Distinct tags with the number of documents carrying each.
///
/// A tag listed twice on one document counts that document once.
pub fn tag_counts(docs: &[Document]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for doc in docs {
        let mut own: Vec<&str> = Vec::new();
        for tag in doc.tags.iter().map(String::as_str) {
            if own.contains(&tag) {
                continue;
            }
            own.push(tag);
            match counts.iter_mut().find(|(t, _)| *t == tag) {
                Some((_, n)) => *n += 1,
                None => counts.push((tag, 1)),
            }
        }
    }
    counts
}
