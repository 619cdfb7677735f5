/// Decoded bitmaps the simulation can ask the renderer to blit from.
/// Decoding and atlas layout belong to the asset layer, not the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmapKey {
    Font,
    Player,
    Sword,
    Hud,
    Bow,
    Tileset,
    Water,
    Enemies,
    Items,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub bitmap: BitmapKey,
    pub src_x: i32,
    pub src_y: i32,
    pub width: i32,
    pub height: i32,
    pub dst_x: i32,
    pub dst_y: i32,
}

/// Blitting boundary. The core only ever copies rectangular regions out of
/// named bitmaps; it never touches pixels.
pub trait Renderer {
    #[allow(clippy::too_many_arguments)]
    fn draw_region(
        &mut self,
        bitmap: BitmapKey,
        src_x: i32,
        src_y: i32,
        width: i32,
        height: i32,
        dst_x: i32,
        dst_y: i32,
    );
}

/// Renderer that records draw calls instead of producing pixels. Backs the
/// headless binary and the draw-order tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_region(
        &mut self,
        bitmap: BitmapKey,
        src_x: i32,
        src_y: i32,
        width: i32,
        height: i32,
        dst_x: i32,
        dst_y: i32,
    ) {
        self.calls.push(DrawCall {
            bitmap,
            src_x,
            src_y,
            width,
            height,
            dst_x,
            dst_y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_renderer_preserves_call_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.draw_region(BitmapKey::Tileset, 0, 0, 16, 16, 32, 48);
        renderer.draw_region(BitmapKey::Player, 16, 0, 16, 16, 100, 80);

        let calls = renderer.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].bitmap, BitmapKey::Tileset);
        assert_eq!(calls[1].bitmap, BitmapKey::Player);
        assert_eq!(calls[1].dst_x, 100);

        renderer.clear();
        assert!(renderer.calls().is_empty());
    }
}
