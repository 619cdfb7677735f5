use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::document::{DocumentError, MapDocument};

/// Asset-storage boundary for decoded grid documents. The loading layer
/// fills it at startup; the simulation only ever reads from it.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, MapDocument>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, document: MapDocument) {
        self.documents.insert(name.into(), document);
    }

    pub fn load_from_path(
        &mut self,
        name: impl Into<String>,
        path: &Path,
    ) -> Result<(), DocumentError> {
        let name = name.into();
        let document = MapDocument::load_from_path(path)?;
        info!(name = %name, path = %path.display(), "document_stored");
        self.documents.insert(name, document);
        Ok(())
    }

    pub fn document(&self, name: &str) -> Option<&MapDocument> {
        self.documents.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&MapDocument, DocumentError> {
        self.documents
            .get(name)
            .ok_or_else(|| DocumentError::Missing {
                name: name.to_string(),
            })
    }
}
