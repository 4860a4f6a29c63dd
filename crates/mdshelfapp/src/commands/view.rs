use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::index::DisplayDoc;
use crate::render::{render_markdown, Highlighter};
use crate::store::{DocumentStore, StorageBackend};

fn display_doc<B: StorageBackend>(store: &DocumentStore<B>, id: &str) -> Result<DisplayDoc> {
    let index = store
        .position(id)
        .ok_or_else(|| ShelfError::NotFound(id.to_string()))?;
    Ok(DisplayDoc {
        doc: store.documents()[index].clone(),
        index: index + 1,
    })
}

/// Returns the document with `id`.
pub fn run<B: StorageBackend>(store: &DocumentStore<B>, id: &str) -> Result<CmdResult> {
    let doc = display_doc(store, id)?;
    Ok(CmdResult::default().with_listed_docs(vec![doc]))
}

/// Returns the document with `id` together with its content rendered as HTML.
pub fn render<B: StorageBackend>(
    store: &DocumentStore<B>,
    id: &str,
    highlighter: &dyn Highlighter,
) -> Result<CmdResult> {
    let doc = display_doc(store, id)?;
    let html = render_markdown(&doc.doc.content, highlighter);

    let mut result = CmdResult::default().with_listed_docs(vec![doc]);
    result.html = Some(html);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainHighlighter;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_view_returns_document_with_position() {
        let store = InMemoryStore::new();
        let result = run(&store, "3").unwrap();

        assert_eq!(result.listed_docs.len(), 1);
        assert_eq!(result.listed_docs[0].index, 3);
        assert_eq!(result.listed_docs[0].doc.title, "CSS Grid 布局完全指南");
        assert!(result.html.is_none());
    }

    #[test]
    fn test_view_unknown_id() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store, "x"), Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn test_render_produces_html() {
        let store = InMemoryStore::new();
        let result = render(&store, "1", &PlainHighlighter).unwrap();

        let html = result.html.unwrap();
        assert!(html.contains("<h1>JavaScript 高级技巧</h1>"));
        assert!(html.contains("<pre><code class=\"language-javascript\">"));
    }
}
