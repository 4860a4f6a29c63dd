use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayDoc;
use crate::model::DocumentFields;
use crate::store::{DocumentStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut DocumentStore<B>,
    fields: DocumentFields,
) -> Result<CmdResult> {
    let doc = store.create(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document created: {}",
        doc.title
    )));
    // New documents are prepended, so they always take position 1
    result.affected_docs.push(DisplayDoc { doc, index: 1 });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ShelfError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_creates_document_at_position_one() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            DocumentFields::new("Title", "Body").with_tags_input("a,b"),
        )
        .unwrap();

        assert_eq!(store.documents().len(), 4);
        assert_eq!(result.affected_docs.len(), 1);
        assert_eq!(result.affected_docs[0].index, 1);
        assert_eq!(result.affected_docs[0].doc.id, store.documents()[0].id);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Title"));
    }

    #[test]
    fn test_missing_title_is_validation_error() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, DocumentFields::new("", "Body"));

        assert!(matches!(result, Err(ShelfError::Validation(_))));
        assert_eq!(store.documents().len(), 3);
    }
}
