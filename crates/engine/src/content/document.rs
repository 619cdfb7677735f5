use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse document json: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse document json at {json_path}: {source}")]
    ParseAt {
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("document dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: i32, height: i32 },
    #[error("document has no layers")]
    NoLayers,
    #[error("layer {layer} tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },
    #[error("no document named '{name}' in store")]
    Missing { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapLayer {
    #[serde(default)]
    pub name: String,
    pub data: Vec<i32>,
}

/// Rectangular grid document: declared dimensions plus one or more flat
/// row-major layers of 1-based tile indices (0 = empty). Both the tilemap
/// and the parallel solid-map ship in this shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapDocument {
    pub width: i32,
    pub height: i32,
    pub layers: Vec<MapLayer>,
}

impl MapDocument {
    pub fn from_json_str(raw: &str) -> Result<Self, DocumentError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let document =
            match serde_path_to_error::deserialize::<_, MapDocument>(&mut deserializer) {
                Ok(document) => document,
                Err(error) => {
                    let json_path = error.path().to_string();
                    let source = error.into_inner();
                    if json_path.is_empty() || json_path == "." {
                        return Err(DocumentError::Parse { source });
                    }
                    return Err(DocumentError::ParseAt { json_path, source });
                }
            };
        document.validate()?;
        Ok(document)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, DocumentError> {
        let raw = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json_str(&raw)?;
        debug!(
            path = %path.display(),
            width = document.width,
            height = document.height,
            layers = document.layers.len(),
            "document_loaded"
        );
        Ok(document)
    }

    pub fn layer_data(&self, index: usize) -> Option<&[i32]> {
        self.layers.get(index).map(|layer| layer.data.as_slice())
    }

    pub fn layer_named(&self, name: &str) -> Option<&[i32]> {
        self.layers
            .iter()
            .find(|layer| layer.name == name)
            .map(|layer| layer.data.as_slice())
    }

    fn validate(&self) -> Result<(), DocumentError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(DocumentError::EmptyDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.layers.is_empty() {
            return Err(DocumentError::NoLayers);
        }
        let expected = self.width as usize * self.height as usize;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.data.len() != expected {
                return Err(DocumentError::TileCountMismatch {
                    layer: index,
                    expected,
                    actual: layer.data.len(),
                });
            }
        }
        Ok(())
    }
}
