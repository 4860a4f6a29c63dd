use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, ViewFilter};
use crate::index::index_visible;
use crate::store::{DocumentStore, StorageBackend};

/// Lists the documents matching `filter`, keeping their canonical positions.
pub fn run<B: StorageBackend>(store: &DocumentStore<B>, filter: &ViewFilter) -> Result<CmdResult> {
    let docs = store.documents();
    let visible = filter::apply(docs, filter);

    let mut result = CmdResult::default();
    if visible.is_empty() {
        let message = match filter {
            ViewFilter::None => "No documents yet.".to_string(),
            ViewFilter::Text(query) => format!("No documents match \"{}\".", query.trim()),
            ViewFilter::Category(category) => format!("No documents in category {}.", category),
            ViewFilter::Tag(tag) => format!("No documents tagged {}.", tag),
        };
        result.add_message(CmdMessage::info(message));
    }

    Ok(result.with_listed_docs(index_visible(docs, &visible)))
}
