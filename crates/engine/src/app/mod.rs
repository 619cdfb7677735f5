mod camera;
mod input;
mod math;
mod rendering;

pub use camera::{Camera, CAMERA_HEIGHT, CAMERA_WIDTH};
pub use input::{InputAction, InputSnapshot};
pub use math::Vec2;
pub use rendering::{BitmapKey, DrawCall, RecordingRenderer, Renderer};
