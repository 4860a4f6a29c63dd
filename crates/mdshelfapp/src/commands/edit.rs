use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::index::DisplayDoc;
use crate::model::DocumentFields;
use crate::store::{DocumentStore, StorageBackend};

/// Changes to apply to a document. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentEdit {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub content: Option<String>,
}

impl DocumentEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.content.is_none()
    }

    /// Overlays the changes on `current`.
    pub fn apply_to(self, current: DocumentFields) -> DocumentFields {
        DocumentFields {
            title: self.title.unwrap_or(current.title),
            category: self.category.unwrap_or(current.category),
            tags: self.tags.unwrap_or(current.tags),
            content: self.content.unwrap_or(current.content),
        }
    }
}

impl From<DocumentFields> for DocumentEdit {
    fn from(fields: DocumentFields) -> Self {
        Self {
            title: Some(fields.title),
            category: Some(fields.category),
            tags: Some(fields.tags),
            content: Some(fields.content),
        }
    }
}

pub fn run<B: StorageBackend>(
    store: &mut DocumentStore<B>,
    id: &str,
    edit: DocumentEdit,
) -> Result<CmdResult> {
    let current = store
        .get(id)
        .ok_or_else(|| ShelfError::NotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    if edit.is_empty() {
        let index = store.position(id).map(|i| i + 1).unwrap_or(1);
        result.add_message(CmdMessage::info("Nothing to change"));
        result.affected_docs.push(DisplayDoc {
            doc: current.clone(),
            index,
        });
        return Ok(result);
    }

    let fields = edit.apply_to(current.fields());
    let doc = store.edit(id, fields)?;
    let index = store.position(&doc.id).map(|i| i + 1).unwrap_or(1);

    result.add_message(CmdMessage::success(format!(
        "Document updated: {}",
        doc.title
    )));
    result.affected_docs.push(DisplayDoc { doc, index });
    Ok(result)
}
