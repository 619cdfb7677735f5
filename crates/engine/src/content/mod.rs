mod document;
mod store;

pub use document::{DocumentError, MapDocument, MapLayer};
pub use store::DocumentStore;
