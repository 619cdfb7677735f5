#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    fn sprite_column(self) -> i32 {
        match self {
            Facing::Down => 0,
            Facing::Up => 1,
            Facing::Left => 2,
            Facing::Right => 3,
        }
    }
}

/// Read-only view of player state handed to enemy AI once per tick, so no
/// enemy ever holds a live reference into the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlayerSnapshot {
    pub(crate) position: Vec2,
    pub(crate) attacking: bool,
}

pub(crate) struct Player {
    body: MotionBody,
    facing: Facing,
    sword_timer: f32,
    hurt_timer: f32,
    health: i32,
}

impl Player {
    pub(crate) fn new(x: f32, y: f32) -> Self {
        Self {
            body: MotionBody::new(x, y, PLAYER_EXTENT),
            facing: Facing::Down,
            sword_timer: 0.0,
            hurt_timer: 0.0,
            health: PLAYER_MAX_HEALTH,
        }
    }

    pub(crate) fn body(&self) -> &MotionBody {
        &self.body
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.body.set_position(x, y);
    }

    pub(crate) fn health(&self) -> i32 {
        self.health
    }

    pub(crate) fn is_attacking(&self) -> bool {
        self.sword_timer > 0.0
    }

    pub(crate) fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.body.position(),
            attacking: self.is_attacking(),
        }
    }

    /// World rectangle the sword covers mid-swing, in front of the player.
    pub(crate) fn sword_hitbox(&self) -> Option<(Vec2, Vec2)> {
        if !self.is_attacking() {
            return None;
        }
        let reach = self.facing.unit().scaled(PLAYER_SWORD_REACH_PX);
        let center = self.body.collision_center();
        Some((
            Vec2::new(center.x + reach.x, center.y + reach.y),
            PLAYER_SWORD_EXTENT,
        ))
    }

    pub(crate) fn update(
        &mut self,
        input: &InputSnapshot,
        camera: &mut Camera,
        arrows: &mut [Arrow],
        delta_time: f32,
    ) {
        if !self.body.is_alive() {
            return;
        }
        self.control(input, arrows);
        self.body.advance(delta_time);
        self.check_room_edges(camera);

        if self.sword_timer > 0.0 {
            self.sword_timer -= delta_time;
        }
        if self.hurt_timer > 0.0 {
            self.hurt_timer -= delta_time;
        }
    }

    fn control(&mut self, input: &InputSnapshot, arrows: &mut [Arrow]) {
        if self.is_attacking() {
            // Feet planted for the whole swing.
            self.body.set_target_velocity(Vec2::zero());
        } else {
            let mut axis = Vec2::zero();
            if input.is_down(InputAction::MoveRight) {
                axis.x += 1.0;
            }
            if input.is_down(InputAction::MoveLeft) {
                axis.x -= 1.0;
            }
            if input.is_down(InputAction::MoveDown) {
                axis.y += 1.0;
            }
            if input.is_down(InputAction::MoveUp) {
                axis.y -= 1.0;
            }
            let direction = axis.normalized_or_zero();
            self.body
                .set_target_velocity(direction.scaled(PLAYER_WALK_SPEED));
            self.update_facing(axis);

            if input.was_pressed(InputAction::Attack) {
                self.sword_timer = PLAYER_SWORD_TICKS;
                debug!("sword_swing");
            }
        }

        if input.was_pressed(InputAction::Fire) {
            self.fire_arrow(arrows);
        }
    }

    fn update_facing(&mut self, axis: Vec2) {
        if axis.x.abs() > axis.y.abs() {
            self.facing = if axis.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
        } else if axis.y.abs() > 0.0 {
            self.facing = if axis.y > 0.0 {
                Facing::Down
            } else {
                Facing::Up
            };
        }
    }

    fn fire_arrow(&mut self, arrows: &mut [Arrow]) {
        let Some(arrow) = arrows.iter_mut().find(|arrow| !arrow.is_alive()) else {
            debug!("arrow_pool_exhausted");
            return;
        };
        arrow.spawn(self.body.position(), self.facing.unit());
        debug!(
            facing = ?self.facing,
            x = self.body.position().x,
            y = self.body.position().y,
            "arrow_fired"
        );
    }

    /// Crossing the camera window edge asks the camera for a room scroll;
    /// simulation freezes until the scroll lands.
    fn check_room_edges(&self, camera: &mut Camera) {
        if camera.is_transitioning() {
            return;
        }
        let (col, row) = camera.grid_position();
        let view = camera.virtual_position();
        let position = self.body.position();
        if position.x > view.x + CAMERA_WIDTH {
            camera.start_transition(col + 1, row);
        } else if position.x < view.x {
            camera.start_transition(col - 1, row);
        } else if position.y > view.y + CAMERA_HEIGHT {
            camera.start_transition(col, row + 1);
        } else if position.y < view.y {
            camera.start_transition(col, row - 1);
        }
    }

    pub(crate) fn hurt(&mut self, damage: i32, from: Vec2) {
        if self.hurt_timer > 0.0 || !self.body.is_alive() {
            return;
        }
        self.health = (self.health - damage).max(0);
        self.hurt_timer = PLAYER_HURT_TICKS;
        let position = self.body.position();
        let away = Vec2::new(position.x - from.x, position.y - from.y).normalized_or_zero();
        self.body
            .set_velocity(away.scaled(PLAYER_KNOCKBACK_SPEED));
        if self.health == 0 {
            warn!("player_down");
        } else {
            info!(health = self.health, "player_hurt");
        }
    }

    pub(crate) fn draw_shadow(&self, renderer: &mut dyn Renderer) {
        let position = self.body.position();
        renderer.draw_region(
            BitmapKey::Player,
            0,
            64,
            16,
            8,
            (position.x - 8.0).round() as i32,
            (position.y + 2.0).round() as i32,
        );
    }

    pub(crate) fn draw(&self, renderer: &mut dyn Renderer) {
        let position = self.body.position();
        let dst_x = (position.x - 8.0).round() as i32;
        let dst_y = (position.y - 12.0).round() as i32;
        renderer.draw_region(
            BitmapKey::Player,
            self.facing.sprite_column() * 16,
            0,
            16,
            16,
            dst_x,
            dst_y,
        );
        if self.is_attacking() {
            let reach = self.facing.unit().scaled(PLAYER_SWORD_REACH_PX);
            renderer.draw_region(
                BitmapKey::Sword,
                self.facing.sprite_column() * 16,
                0,
                16,
                16,
                (position.x - 8.0 + reach.x).round() as i32,
                (position.y - 12.0 + reach.y).round() as i32,
            );
        }
    }
}

impl StageCollider for Player {
    fn body(&self) -> &MotionBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut MotionBody {
        &mut self.body
    }
}

/// Static warp pad linked to a destination point. A pad arms only once
/// the player has been observed off it, so spawning or arriving on a pad
/// never fires it immediately.
pub(crate) struct Teleporter {
    position: Vec2,
    destination: Vec2,
    in_camera: bool,
    armed: bool,
    anim_timer: f32,
    frame: i32,
}

impl Teleporter {
    pub(crate) fn new(x: f32, y: f32, dest_x: f32, dest_y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            destination: Vec2::new(dest_x, dest_y),
            in_camera: false,
            armed: false,
            anim_timer: 0.0,
            frame: 0,
        }
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn destination(&self) -> Vec2 {
        self.destination
    }

    pub(crate) fn is_in_camera(&self) -> bool {
        self.in_camera
    }

    pub(crate) fn camera_check(&mut self, camera: &Camera) {
        self.in_camera = camera.contains(self.position.x, self.position.y, 16.0, 16.0);
    }

    /// Idle animation: the rest frame lingers, the rest of the cycle runs
    /// fast.
    pub(crate) fn update(&mut self, delta_time: f32) {
        if !self.in_camera {
            return;
        }
        let hold = if self.frame == 0 {
            TELEPORT_ANIM_SLOW_TICKS
        } else {
            TELEPORT_ANIM_FAST_TICKS
        };
        self.anim_timer += delta_time;
        if self.anim_timer >= hold {
            self.anim_timer -= hold;
            self.frame = (self.frame + 1) % TELEPORT_FRAME_COUNT;
        }
    }

    pub(crate) fn covers_player(&self, player: &Player) -> bool {
        let center = player.body().collision_center();
        let dx = center.x - self.position.x;
        let dy = center.y - self.position.y;
        (dx * dx + dy * dy).sqrt() < TELEPORT_RADIUS_PX
    }

    pub(crate) fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.in_camera {
            return;
        }
        renderer.draw_region(
            BitmapKey::Items,
            self.frame * 32,
            0,
            32,
            32,
            (self.position.x - 16.0).round() as i32,
            (self.position.y - 16.0).round() as i32,
        );
    }
}

/// Pool-allocated projectile. Slots start dead and are revived by `spawn`;
/// death is the usual soft flag flip so pool indices stay stable.
pub(crate) struct Arrow {
    body: MotionBody,
    heading: Vec2,
}

impl Arrow {
    pub(crate) fn new() -> Self {
        let mut body = MotionBody::new(0.0, 0.0, ARROW_EXTENT);
        body.set_alive(false);
        body.projectile_kind = true;
        Self {
            body,
            heading: Vec2::new(0.0, 1.0),
        }
    }

    pub(crate) fn body(&self) -> &MotionBody {
        &self.body
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub(crate) fn spawn(&mut self, position: Vec2, direction: Vec2) {
        self.body.set_alive(true);
        self.body.set_position(position.x, position.y);
        let velocity = direction.normalized_or_zero().scaled(ARROW_SPEED);
        self.body.set_velocity(velocity);
        self.body.set_target_velocity(velocity);
        self.heading = direction;
    }

    pub(crate) fn update(&mut self, camera: &Camera, delta_time: f32) {
        if !self.body.is_alive() {
            return;
        }
        let position = self.body.position();
        if !camera.contains(
            position.x,
            position.y,
            ARROW_CAMERA_MARGIN_PX,
            ARROW_CAMERA_MARGIN_PX,
        ) {
            self.body.set_alive(false);
            return;
        }
        self.body.advance(delta_time);
    }

    pub(crate) fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.body.is_alive() {
            return;
        }
        let position = self.body.position();
        let src_x = if self.heading.x.abs() > self.heading.y.abs() {
            8
        } else {
            0
        };
        renderer.draw_region(
            BitmapKey::Bow,
            src_x,
            16,
            8,
            8,
            (position.x - 4.0).round() as i32,
            (position.y - 4.0).round() as i32,
        );
    }
}

impl StageCollider for Arrow {
    fn body(&self) -> &MotionBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut MotionBody {
        &mut self.body
    }

    fn on_wall_contact(&mut self, contact: WallContact) {
        self.body.set_alive(false);
        debug!(
            side = ?contact.side,
            edge_x = contact.edge_x,
            edge_y = contact.edge_y,
            "arrow_broke"
        );
    }
}
