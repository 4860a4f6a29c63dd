use super::doc_store::DocumentStore;
use super::mem_backend::MemBackend;
use super::DOCUMENTS_KEY;

pub type InMemoryStore = DocumentStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// An in-memory store holding the seed documents.
    pub fn new() -> Self {
        DocumentStore::open(MemBackend::new())
    }

    /// An in-memory store with an empty collection.
    pub fn empty() -> Self {
        DocumentStore::open(MemBackend::new().with_value(DOCUMENTS_KEY, "[]"))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::DocumentFields;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::empty(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_docs(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = DocumentFields::new(
                    format!("Test Doc {}", i + 1),
                    format!("Content for doc {}", i + 1),
                );
                self.store.create(fields).unwrap();
            }
            self
        }

        pub fn with_doc(mut self, title: &str, category: &str, tags: &str) -> Self {
            let fields = DocumentFields::new(title, "Some content")
                .with_category(category)
                .with_tags_input(tags);
            self.store.create(fields).unwrap();
            self
        }
    }
}
