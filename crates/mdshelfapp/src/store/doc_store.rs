use super::backend::StorageBackend;
use super::seed::seed_documents;
use super::DOCUMENTS_KEY;
use crate::error::{Result, ShelfError};
use crate::import::{title_from_file_name, ImportedFile, SUPPORTED_EXTENSIONS};
use crate::model::{Document, DocumentFields, DEFAULT_CATEGORY, DEFAULT_IMPORT_CATEGORY};

/// Default number of entries in the "recent documents" list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Category sentinels applied when a submission leaves the category empty, and the
/// extensions stripped from file names to form import titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDefaults {
    pub category: String,
    pub import_category: String,
    pub import_extensions: Vec<String>,
}

impl Default for StoreDefaults {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            import_category: DEFAULT_IMPORT_CATEGORY.to_string(),
            import_extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Form values shared by every file of an import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDefaults {
    /// Overrides the file-name title for every file when non-blank.
    pub title: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
}

/// Outcome of [`DocumentStore::import_batch`].
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Created documents, in file-list order.
    pub imported: Vec<Document>,
    /// Files rejected by validation, with the reason.
    pub skipped: Vec<(String, ShelfError)>,
}

impl ImportReport {
    pub fn image_count(&self) -> usize {
        self.imported.iter().map(|d| d.images.len()).sum()
    }
}

/// Owns the document collection and keeps it in sync with its backend snapshot.
///
/// The collection is ordered newest-first: new documents are prepended.
pub struct DocumentStore<B: StorageBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    docs: Vec<Document>,
    defaults: StoreDefaults,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn open(backend: B) -> Self {
        Self::with_defaults(backend, StoreDefaults::default())
    }

    pub fn with_defaults(backend: B, defaults: StoreDefaults) -> Self {
        let docs = Self::load(&backend);
        Self {
            backend,
            docs,
            defaults,
        }
    }

    /// Reads the snapshot, falling back to the seed set when it is missing or unreadable.
    ///
    /// Never fails: read and parse errors are logged and treated like an empty store.
    pub fn load(backend: &B) -> Vec<Document> {
        let raw = match backend.get(DOCUMENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no snapshot at {}, seeding", backend.location(DOCUMENTS_KEY).display());
                return seed_documents();
            }
            Err(e) => {
                log::warn!("{}, seeding", ShelfError::StorageRead(e.to_string()));
                return seed_documents();
            }
        };

        match serde_json::from_str::<Vec<Document>>(&raw) {
            Ok(docs) => docs,
            Err(e) => {
                let err = ShelfError::StorageRead(format!(
                    "{}: {}",
                    backend.location(DOCUMENTS_KEY).display(),
                    e
                ));
                log::warn!("{}, seeding", err);
                seed_documents()
            }
        }
    }

    /// Replaces the in-memory collection with whatever the backend holds now.
    pub fn reload(&mut self) {
        self.docs = Self::load(&self.backend);
    }

    /// Serializes the whole collection and overwrites the snapshot.
    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.docs)?;
        self.backend.set(DOCUMENTS_KEY, &raw)?;
        log::debug!("saved {} documents", self.docs.len());
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn defaults(&self) -> &StoreDefaults {
        &self.defaults
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// Index of the document with `id` in collection order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.docs.iter().position(|d| d.id == id)
    }

    /// Creates a document from manual input and persists it.
    pub fn create(&mut self, fields: DocumentFields) -> Result<Document> {
        fields.validate()?;
        let doc = Document::new(fields.normalized(&self.defaults.category));
        self.prepend_and_save(vec![doc.clone()])?;
        Ok(doc)
    }

    /// Creates a document from an imported file and persists it.
    pub fn create_from_import(
        &mut self,
        file: &ImportedFile,
        defaults: &ImportDefaults,
    ) -> Result<Document> {
        let doc = self.document_from_import(file, defaults)?;
        self.prepend_and_save(vec![doc.clone()])?;
        Ok(doc)
    }

    /// Imports every file, then saves once.
    ///
    /// Files that fail validation are skipped and listed in the report. Documents are
    /// prepended in file-list order, so the last file ends up first. If nothing was
    /// imported the snapshot is left untouched.
    pub fn import_batch(
        &mut self,
        files: &[ImportedFile],
        defaults: &ImportDefaults,
    ) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for file in files {
            match self.document_from_import(file, defaults) {
                Ok(doc) => report.imported.push(doc),
                Err(e) => {
                    log::warn!("skipping {}: {}", file.name, e);
                    report.skipped.push((file.name.clone(), e));
                }
            }
        }

        if !report.imported.is_empty() {
            self.prepend_and_save(report.imported.clone())?;
        }
        Ok(report)
    }

    /// Replaces the editable fields of the document with `id`.
    ///
    /// An unknown id is reported before the fields are validated; either way the
    /// collection is left untouched.
    pub fn edit(&mut self, id: &str, fields: DocumentFields) -> Result<Document> {
        let idx = self
            .position(id)
            .ok_or_else(|| ShelfError::NotFound(id.to_string()))?;
        fields.validate()?;

        let previous = self.docs[idx].clone();
        self.docs[idx].apply_fields(fields.normalized(&self.defaults.category));

        if let Err(e) = self.save() {
            self.docs[idx] = previous;
            return Err(e);
        }
        Ok(self.docs[idx].clone())
    }

    /// The `limit` most recently updated documents; ties keep collection order.
    pub fn recent(&self, limit: usize) -> Vec<&Document> {
        let mut docs: Vec<&Document> = self.docs.iter().collect();
        docs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        docs.truncate(limit);
        docs
    }

    fn document_from_import(
        &self,
        file: &ImportedFile,
        defaults: &ImportDefaults,
    ) -> Result<Document> {
        let title = defaults
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                title_from_file_name(&file.name, &self.defaults.import_extensions)
            });

        let fields = DocumentFields::new(title, file.content.clone())
            .with_category(defaults.category.clone())
            .with_tags(defaults.tags.clone());
        fields.validate()?;

        let mut fields = fields.normalized(&self.defaults.import_category);
        // Imported text is stored exactly as rewritten.
        fields.content = file.content.clone();

        Ok(Document::new(fields).with_images(file.images.clone()))
    }

    /// Prepends `docs` one by one (so the last ends up first) and saves.
    /// Restores the previous collection if the save fails.
    fn prepend_and_save(&mut self, docs: Vec<Document>) -> Result<()> {
        let previous_len = self.docs.len();
        let added = docs.len();
        for doc in docs {
            self.docs.insert(0, doc);
        }

        if let Err(e) = self.save() {
            self.docs.drain(..added);
            debug_assert_eq!(self.docs.len(), previous_len);
            return Err(e);
        }
        Ok(())
    }
}
