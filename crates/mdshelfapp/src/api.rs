//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every UI client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: document references (`3`, `#3`, an id prefix) become ids,
//!   see [`crate::index`]
//! - **Applies configuration**: import extensions, recent-list length
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation**: No stdout, stderr or formatting
//!
//! ## Generic Over StorageBackend
//!
//! `ShelfApi<B: StorageBackend>` works the same over any backend:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use std::path::PathBuf;

use crate::commands::{self, edit::DocumentEdit, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::filter::ViewFilter;
use crate::import::read_files;
use crate::index::{resolve, DocRef};
use crate::model::DocumentFields;
use crate::render::Highlighter;
use crate::store::doc_store::ImportDefaults;
use crate::store::{DocumentStore, StorageBackend};

/// The main API facade for mdshelf operations.
pub struct ShelfApi<B: StorageBackend> {
    store: DocumentStore<B>,
    config: ShelfConfig,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(store: DocumentStore<B>, config: ShelfConfig) -> Self {
        Self { store, config }
    }

    /// Opens a store over `backend` using the defaults from `config`.
    pub fn open(backend: B, config: ShelfConfig) -> Self {
        let store = DocumentStore::with_defaults(backend, config.store_defaults());
        Self::new(store, config)
    }

    pub fn store(&self) -> &DocumentStore<B> {
        &self.store
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Maps a user reference (`3`, `#3`, an id or id prefix) to a document id.
    pub fn resolve(&self, reference: &str) -> Result<String> {
        let reference: DocRef = reference.parse()?;
        resolve(self.store.documents(), &reference)
    }

    pub fn create_document(&mut self, fields: DocumentFields) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    /// Reads `paths` and imports every supported file as one batch.
    pub fn import_files(
        &mut self,
        paths: &[PathBuf],
        defaults: &ImportDefaults,
    ) -> Result<CmdResult> {
        let outcomes = read_files(paths, &self.config.import_extensions());
        commands::import::run(&mut self.store, outcomes, defaults)
    }

    pub fn edit_document(&mut self, reference: &str, edit: DocumentEdit) -> Result<CmdResult> {
        let id = self.resolve(reference)?;
        commands::edit::run(&mut self.store, &id, edit)
    }

    pub fn list_documents(&self, filter: &ViewFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_document(&self, reference: &str) -> Result<CmdResult> {
        let id = self.resolve(reference)?;
        commands::view::run(&self.store, &id)
    }

    pub fn render_document(
        &self,
        reference: &str,
        highlighter: &dyn Highlighter,
    ) -> Result<CmdResult> {
        let id = self.resolve(reference)?;
        commands::view::render(&self.store, &id, highlighter)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::nav::categories(&self.store)
    }

    pub fn tags(&self) -> Result<CmdResult> {
        commands::nav::tags(&self.store)
    }

    pub fn recent(&self) -> Result<CmdResult> {
        commands::nav::recent(&self.store, self.config.recent_limit)
    }

    pub fn theme(&self) -> Result<CmdResult> {
        commands::theme::show(self.store.backend())
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(self.store.backend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::render::PlainHighlighter;
    use crate::store::mem_backend::MemBackend;
    use crate::theme::Theme;

    fn api() -> ShelfApi<MemBackend> {
        ShelfApi::open(MemBackend::new(), ShelfConfig::default())
    }

    #[test]
    fn test_view_by_position_and_id() {
        let api = api();
        let by_position = api.view_document("#2").unwrap();
        let by_id = api.view_document(&by_position.listed_docs[0].doc.id).unwrap();
        assert_eq!(by_position.listed_docs[0].doc, by_id.listed_docs[0].doc);
    }

    #[test]
    fn test_create_uses_configured_category() {
        let config = ShelfConfig {
            default_category: "inbox".into(),
            ..Default::default()
        };
        let mut api = ShelfApi::open(MemBackend::new(), config);

        let result = api.create_document(DocumentFields::new("T", "C")).unwrap();
        assert_eq!(result.affected_docs[0].doc.category, "inbox");
    }

    #[test]
    fn test_edit_by_position() {
        let mut api = api();
        let edit = DocumentEdit {
            category: Some("moved".into()),
            ..Default::default()
        };
        let result = api.edit_document("1", edit).unwrap();
        assert_eq!(result.affected_docs[0].doc.category, "moved");
    }

    #[test]
    fn test_edit_unknown_reference() {
        let mut api = api();
        assert!(matches!(
            api.edit_document("99", DocumentEdit::default()),
            Err(ShelfError::NotFound(_))
        ));
    }

    #[test]
    fn test_import_title_drops_configured_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.rst");
        std::fs::write(&path, "Some text").unwrap();

        let config = ShelfConfig {
            import_extensions: Some(vec!["rst".into()]),
            ..Default::default()
        };
        let mut api = ShelfApi::open(MemBackend::new(), config);
        let result = api
            .import_files(&[path], &ImportDefaults::default())
            .unwrap();

        assert_eq!(result.affected_docs[0].doc.title, "notes");
    }

    #[test]
    fn test_recent_uses_configured_limit() {
        let config = ShelfConfig {
            recent_limit: 2,
            ..Default::default()
        };
        let api = ShelfApi::open(MemBackend::new(), config);
        assert_eq!(api.recent().unwrap().listed_docs.len(), 2);
    }

    #[test]
    fn test_render_dispatch() {
        let api = api();
        let result = api.render_document("2", &PlainHighlighter).unwrap();
        assert!(result.html.unwrap().contains("<h1>"));
    }

    #[test]
    fn test_theme_toggle_dispatch() {
        let mut api = api();
        assert_eq!(api.theme().unwrap().theme, Some(Theme::Light));
        assert_eq!(api.toggle_theme().unwrap().theme, Some(Theme::Dark));
    }

    #[test]
    fn test_list_and_nav_dispatch() {
        let api = api();
        assert_eq!(
            api.list_documents(&ViewFilter::Tag("CSS".into()))
                .unwrap()
                .listed_docs
                .len(),
            1
        );
        assert_eq!(api.categories().unwrap().nav_entries.len(), 2);
        assert_eq!(api.tags().unwrap().nav_entries.len(), 9);
    }
}
