pub mod app;
pub mod content;

pub use app::{
    BitmapKey, Camera, DrawCall, InputAction, InputSnapshot, RecordingRenderer, Renderer, Vec2,
    CAMERA_HEIGHT, CAMERA_WIDTH,
};
pub use content::{DocumentError, DocumentStore, MapDocument, MapLayer};
