use tracing::debug;

use super::math::Vec2;

pub const CAMERA_WIDTH: f32 = 160.0;
pub const CAMERA_HEIGHT: f32 = 144.0;

// Fraction of a room scroll covered per tick at the reference frame rate.
const TRANSITION_STEP: f32 = 1.0 / 20.0;

#[derive(Debug, Clone, Copy)]
struct RoomTransition {
    from: Vec2,
    target_col: i32,
    target_row: i32,
    progress: f32,
}

/// Fixed-size room window addressed by grid cell. While a transition is in
/// flight the window pans between rooms and `is_transitioning` reports true;
/// gameplay simulation is expected to freeze for that duration.
#[derive(Debug, Clone)]
pub struct Camera {
    col: i32,
    row: i32,
    virtual_position: Vec2,
    transition: Option<RoomTransition>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            col: 0,
            row: 0,
            virtual_position: Vec2::zero(),
            transition: None,
        }
    }

    pub fn grid_position(&self) -> (i32, i32) {
        (self.col, self.row)
    }

    pub fn virtual_position(&self) -> Vec2 {
        self.virtual_position
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Snaps the window to a grid cell, cancelling any transition in flight.
    pub fn set_grid_position(&mut self, col: i32, row: i32) {
        self.col = col;
        self.row = row;
        self.virtual_position = Self::room_origin(col, row);
        self.transition = None;
    }

    /// Begins panning toward the given room. Ignored while already panning.
    pub fn start_transition(&mut self, col: i32, row: i32) {
        if self.transition.is_some() || (col == self.col && row == self.row) {
            return;
        }
        debug!(
            from_col = self.col,
            from_row = self.row,
            to_col = col,
            to_row = row,
            "camera_transition_start"
        );
        self.transition = Some(RoomTransition {
            from: self.virtual_position,
            target_col: col,
            target_row: row,
            progress: 0.0,
        });
    }

    pub fn update(&mut self, delta_time: f32) {
        let Some(mut transition) = self.transition else {
            return;
        };
        transition.progress += TRANSITION_STEP * delta_time;
        if transition.progress >= 1.0 {
            self.set_grid_position(transition.target_col, transition.target_row);
            return;
        }
        let target = Self::room_origin(transition.target_col, transition.target_row);
        let t = transition.progress;
        self.virtual_position = Vec2 {
            x: transition.from.x + (target.x - transition.from.x) * t,
            y: transition.from.y + (target.y - transition.from.y) * t,
        };
        self.transition = Some(transition);
    }

    /// Expanded-bounds containment test against the current window. The
    /// margins widen the window so entities straddling a room edge still
    /// count as visible.
    pub fn contains(&self, x: f32, y: f32, margin_x: f32, margin_y: f32) -> bool {
        let p = self.virtual_position;
        x + margin_x >= p.x
            && x - margin_x <= p.x + CAMERA_WIDTH
            && y + margin_y >= p.y
            && y - margin_y <= p.y + CAMERA_HEIGHT
    }

    fn room_origin(col: i32, row: i32) -> Vec2 {
        Vec2 {
            x: col as f32 * CAMERA_WIDTH,
            y: row as f32 * CAMERA_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_grid_position_snaps_window() {
        let mut camera = Camera::new();
        camera.set_grid_position(2, 1);
        assert_eq!(camera.grid_position(), (2, 1));
        assert_eq!(
            camera.virtual_position(),
            Vec2::new(2.0 * CAMERA_WIDTH, CAMERA_HEIGHT)
        );
        assert!(!camera.is_transitioning());
    }

    #[test]
    fn transition_pans_and_completes() {
        let mut camera = Camera::new();
        camera.start_transition(1, 0);
        assert!(camera.is_transitioning());

        camera.update(1.0);
        let mid = camera.virtual_position();
        assert!(mid.x > 0.0 && mid.x < CAMERA_WIDTH);

        // Enough ticks to cover the whole scroll.
        for _ in 0..40 {
            camera.update(1.0);
        }
        assert!(!camera.is_transitioning());
        assert_eq!(camera.grid_position(), (1, 0));
        assert_eq!(camera.virtual_position(), Vec2::new(CAMERA_WIDTH, 0.0));
    }

    #[test]
    fn transition_to_current_room_is_ignored() {
        let mut camera = Camera::new();
        camera.start_transition(0, 0);
        assert!(!camera.is_transitioning());
    }

    #[test]
    fn contains_respects_margins() {
        let camera = Camera::new();
        assert!(camera.contains(80.0, 72.0, 0.0, 0.0));
        assert!(!camera.contains(-10.0, 72.0, 8.0, 8.0));
        assert!(camera.contains(-4.0, 72.0, 8.0, 8.0));
        assert!(camera.contains(CAMERA_WIDTH + 4.0, 72.0, 8.0, 8.0));
    }
}
