use crate::commands::{CmdResult, NavEntry};
use crate::error::Result;
use crate::index::index_visible;
use crate::nav;
use crate::store::{DocumentStore, StorageBackend};

/// Categories in first-appearance order, with document counts.
pub fn categories<B: StorageBackend>(store: &DocumentStore<B>) -> Result<CmdResult> {
    let docs = store.documents();
    let entries = nav::categories(docs)
        .into_iter()
        .map(|name| NavEntry {
            name: name.to_string(),
            count: docs.iter().filter(|d| d.category == name).count(),
        })
        .collect();
    Ok(CmdResult::default().with_nav_entries(entries))
}

/// Tags in first-appearance order, with document counts.
pub fn tags<B: StorageBackend>(store: &DocumentStore<B>) -> Result<CmdResult> {
    let entries = nav::tag_counts(store.documents())
        .into_iter()
        .map(|(name, count)| NavEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    Ok(CmdResult::default().with_nav_entries(entries))
}

/// The `limit` most recently updated documents.
pub fn recent<B: StorageBackend>(store: &DocumentStore<B>, limit: usize) -> Result<CmdResult> {
    let recent = store.recent(limit);
    let listed = index_visible(store.documents(), &recent);
    Ok(CmdResult::default().with_listed_docs(listed))
}
