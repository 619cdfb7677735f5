#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WallContact {
    pub(crate) edge_x: f32,
    pub(crate) edge_y: f32,
    pub(crate) side: WallSide,
}

/// Per-entity motion state: linear easing of velocity toward a target the
/// owner sets once per tick, plus directional resolution against a single
/// axis-aligned wall edge. The collision rectangle is centered at
/// `position - center_offset` with half extents `extent`.
#[derive(Debug, Clone)]
pub(crate) struct MotionBody {
    position: Vec2,
    velocity: Vec2,
    target_velocity: Vec2,
    total_speed: f32,
    extent: Vec2,
    center_offset: Vec2,
    acceleration: f32,
    alive: bool,
    in_camera: bool,
    collidable: bool,
    projectile_kind: bool,
    swim_capable: bool,
    carries_key: bool,
}

impl MotionBody {
    pub(crate) fn new(x: f32, y: f32, extent: Vec2) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::zero(),
            target_velocity: Vec2::zero(),
            total_speed: 0.0,
            extent,
            center_offset: Vec2::zero(),
            acceleration: DEFAULT_ACCELERATION,
            alive: true,
            in_camera: false,
            collidable: true,
            projectile_kind: false,
            swim_capable: false,
            carries_key: false,
        }
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[cfg(test)]
    pub(crate) fn target_velocity(&self) -> Vec2 {
        self.target_velocity
    }

    #[cfg(test)]
    pub(crate) fn total_speed(&self) -> f32 {
        self.total_speed
    }

    pub(crate) fn extent(&self) -> Vec2 {
        self.extent
    }

    pub(crate) fn collision_center(&self) -> Vec2 {
        Vec2::new(
            self.position.x - self.center_offset.x,
            self.position.y - self.center_offset.y,
        )
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn is_in_camera(&self) -> bool {
        self.in_camera
    }

    pub(crate) fn is_collidable(&self) -> bool {
        self.collidable
    }

    pub(crate) fn is_projectile_kind(&self) -> bool {
        self.projectile_kind
    }

    pub(crate) fn is_swim_capable(&self) -> bool {
        self.swim_capable
    }

    pub(crate) fn carries_key(&self) -> bool {
        self.carries_key
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.total_speed = velocity.length();
    }

    pub(crate) fn set_target_velocity(&mut self, target: Vec2) {
        self.target_velocity = target;
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub(crate) fn set_in_camera(&mut self, in_camera: bool) {
        self.in_camera = in_camera;
    }

    /// Linear per-axis easing toward the target velocity, clamped so the
    /// target is never overshot, then position integration. `delta_time` is
    /// the per-frame time scale, nominally 1.0 at the reference frame rate.
    pub(crate) fn advance(&mut self, delta_time: f32) {
        self.velocity.x = Self::eased_axis(
            self.velocity.x,
            self.target_velocity.x,
            self.acceleration,
            delta_time,
        );
        self.velocity.y = Self::eased_axis(
            self.velocity.y,
            self.target_velocity.y,
            self.acceleration,
            delta_time,
        );
        self.total_speed = self.velocity.length();
        self.position.x += self.velocity.x * delta_time;
        self.position.y += self.velocity.y * delta_time;
    }

    fn eased_axis(speed: f32, target: f32, acceleration: f32, delta_time: f32) -> f32 {
        let mut speed = speed;
        if speed < target {
            speed += acceleration * delta_time;
            if speed > target {
                speed = target;
            }
        } else if speed > target {
            speed -= acceleration * delta_time;
            if speed < target {
                speed = target;
            }
        }
        speed
    }

    /// Directional resolution against one wall edge segment. `side` names
    /// which face of this body the edge blocks. The hit window scales with
    /// approach velocity so fast bodies cannot tunnel through the edge in a
    /// single tick, while a resting body just outside it never snaps.
    pub(crate) fn resolve_wall(
        &mut self,
        edge_x: f32,
        edge_y: f32,
        edge_length: f32,
        side: WallSide,
        delta_time: f32,
    ) -> Option<WallContact> {
        if !self.alive {
            return None;
        }

        let center = self.collision_center();
        let half_w = self.extent.x;
        let half_h = self.extent.y;

        let horizontal_overlap =
            center.x + half_w >= edge_x && center.x - half_w <= edge_x + edge_length;
        let vertical_overlap =
            center.y + half_h > edge_y && center.y - half_h < edge_y + edge_length;

        let near = WALL_MARGIN_NEAR_PX * delta_time;
        let collided = match side {
            WallSide::Top => {
                self.velocity.y > 0.0
                    && horizontal_overlap
                    && center.y + half_h >= edge_y - near
                    && center.y + half_h
                        <= edge_y + (self.velocity.y + WALL_MARGIN_FAR_PX) * delta_time
            }
            WallSide::Bottom => {
                self.velocity.y < 0.0
                    && horizontal_overlap
                    && center.y - half_h <= edge_y + near
                    && center.y - half_h
                        >= edge_y + (self.velocity.y - WALL_MARGIN_FAR_PX) * delta_time
            }
            WallSide::Left => {
                self.velocity.x > 0.0
                    && vertical_overlap
                    && center.x + half_w >= edge_x - near
                    && center.x + half_w
                        <= edge_x + (self.velocity.x + WALL_MARGIN_FAR_PX) * delta_time
            }
            WallSide::Right => {
                self.velocity.x < 0.0
                    && vertical_overlap
                    && center.x - half_w <= edge_x + near
                    && center.x - half_w
                        >= edge_x + (self.velocity.x - WALL_MARGIN_FAR_PX) * delta_time
            }
        };
        if !collided {
            return None;
        }

        match side {
            WallSide::Top => self.position.y = edge_y - half_h + self.center_offset.y,
            WallSide::Bottom => self.position.y = edge_y + half_h + self.center_offset.y,
            WallSide::Left => self.position.x = edge_x - half_w + self.center_offset.x,
            WallSide::Right => self.position.x = edge_x + half_w + self.center_offset.x,
        }

        Some(WallContact {
            edge_x,
            edge_y,
            side,
        })
    }

    /// Axis-aligned rectangle overlap against another body's rectangle.
    pub(crate) fn overlaps(&self, other: &MotionBody) -> bool {
        self.overlaps_rect(other.collision_center(), other.extent)
    }

    pub(crate) fn overlaps_rect(&self, center: Vec2, extent: Vec2) -> bool {
        let own = self.collision_center();
        (own.x - center.x).abs() < self.extent.x + extent.x
            && (own.y - center.y).abs() < self.extent.y + extent.y
    }
}
