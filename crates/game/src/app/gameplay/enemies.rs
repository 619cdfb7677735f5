#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnemyKind {
    Bee,
    Slug,
}

impl EnemyKind {
    fn sprite_row(self) -> i32 {
        match self {
            EnemyKind::Bee => 0,
            EnemyKind::Slug => 1,
        }
    }
}

/// One enemy instance. Variants share all motion, collision and combat
/// plumbing; only the per-tick target-velocity function and the player-sync
/// event differ, dispatched on `kind`.
#[derive(Debug, Clone)]
pub(crate) struct Enemy {
    body: MotionBody,
    kind: EnemyKind,
    health: i32,
    hurt_timer: f32,
    dying_timer: f32,
    // AI state.
    phase_angle: f32,
    cached_player_position: Vec2,
    aggressive: bool,
    wait_timer: f32,
    lunge_timer: f32,
}

impl Enemy {
    pub(crate) fn new(kind: EnemyKind, x: f32, y: f32) -> Self {
        let mut body = match kind {
            EnemyKind::Bee => MotionBody::new(x, y, Vec2::new(6.0, 6.0)),
            EnemyKind::Slug => {
                let mut body = MotionBody::new(x, y, Vec2::new(6.0, 5.0));
                body.acceleration = 0.1;
                body
            }
        };
        if kind == EnemyKind::Bee {
            // Bees fly over other bodies; they never push or get pushed.
            body.collidable = false;
        }
        let health = match kind {
            EnemyKind::Bee => 1,
            EnemyKind::Slug => 2,
        };
        Self {
            body,
            kind,
            health,
            hurt_timer: 0.0,
            dying_timer: 0.0,
            phase_angle: 0.0,
            cached_player_position: Vec2::zero(),
            aggressive: false,
            wait_timer: match kind {
                EnemyKind::Bee => 0.0,
                EnemyKind::Slug => SLUG_WAIT_TICKS,
            },
            lunge_timer: 0.0,
        }
    }

    pub(crate) fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub(crate) fn body(&self) -> &MotionBody {
        &self.body
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub(crate) fn is_in_camera(&self) -> bool {
        self.body.is_in_camera()
    }

    pub(crate) fn is_dying(&self) -> bool {
        self.dying_timer > 0.0
    }

    #[cfg(test)]
    pub(crate) fn health(&self) -> i32 {
        self.health
    }

    /// Marks this enemy as the room's key carrier; the drop is reported
    /// when its dying window runs out.
    pub(crate) fn grant_key(&mut self) {
        self.body.carries_key = true;
    }

    pub(crate) fn camera_check(&mut self, camera: &Camera) {
        let position = self.body.position();
        self.body.set_in_camera(camera.contains(
            position.x,
            position.y,
            ENEMY_CAMERA_MARGIN_PX,
            ENEMY_CAMERA_MARGIN_PX,
        ));
    }

    pub(crate) fn update(&mut self, delta_time: f32) {
        if !self.body.is_alive() {
            return;
        }
        if self.is_dying() {
            self.dying_timer -= delta_time;
            self.body.set_target_velocity(Vec2::zero());
            self.body.advance(delta_time);
            if self.dying_timer <= 0.0 {
                self.dying_timer = 0.0;
                self.body.set_alive(false);
                if self.body.carries_key() {
                    let position = self.body.position();
                    info!(x = position.x, y = position.y, "key_dropped");
                }
                debug!(kind = ?self.kind, "enemy_expired");
            }
            return;
        }
        if self.hurt_timer > 0.0 {
            self.hurt_timer -= delta_time;
        }
        self.update_ai(delta_time);
        self.body.advance(delta_time);
    }

    fn update_ai(&mut self, delta_time: f32) {
        match self.kind {
            EnemyKind::Bee => self.update_bee(delta_time),
            EnemyKind::Slug => self.update_slug(delta_time),
        }
    }

    /// Orbiting pursuit: chase a point circling the cached player position
    /// rather than the player directly. The orbit radius widens while the
    /// player holds an attacking stance.
    fn update_bee(&mut self, delta_time: f32) {
        self.phase_angle += BEE_PHASE_DELTA * delta_time;
        if self.phase_angle >= TAU {
            self.phase_angle -= TAU;
        }

        let radius = if self.aggressive {
            BEE_ORBIT_FAR_PX
        } else {
            BEE_ORBIT_NEAR_PX
        };
        let orbit_x = self.cached_player_position.x + self.phase_angle.cos() * radius;
        let orbit_y = self.cached_player_position.y + self.phase_angle.sin() * radius;

        let position = self.body.position();
        let bearing = (position.y - orbit_y).atan2(position.x - orbit_x);
        self.body.set_target_velocity(Vec2::new(
            -bearing.cos() * BEE_SPEED,
            -bearing.sin() * BEE_SPEED,
        ));
    }

    /// Burst walker: rest in place, then lunge straight at the cached
    /// player position for a short window.
    fn update_slug(&mut self, delta_time: f32) {
        if self.lunge_timer > 0.0 {
            self.lunge_timer -= delta_time;
            if self.lunge_timer <= 0.0 {
                self.lunge_timer = 0.0;
                self.wait_timer = SLUG_WAIT_TICKS;
                self.body.set_target_velocity(Vec2::zero());
            }
            return;
        }
        self.wait_timer -= delta_time;
        self.body.set_target_velocity(Vec2::zero());
        if self.wait_timer <= 0.0 {
            let position = self.body.position();
            let direction = Vec2::new(
                self.cached_player_position.x - position.x,
                self.cached_player_position.y - position.y,
            )
            .normalized_or_zero();
            self.body
                .set_target_velocity(direction.scaled(SLUG_LUNGE_SPEED));
            self.lunge_timer = SLUG_LUNGE_TICKS;
        }
    }

    /// Per-variant cache refresh from the per-tick player snapshot.
    fn sync_player(&mut self, snapshot: PlayerSnapshot) {
        match self.kind {
            EnemyKind::Bee => {
                self.cached_player_position = snapshot.position;
                self.aggressive = snapshot.attacking;
            }
            EnemyKind::Slug => {
                self.cached_player_position = snapshot.position;
            }
        }
    }

    /// Refreshes cached player state, then resolves contact damage both
    /// ways: the sword hurts this enemy, body contact hurts the player.
    pub(crate) fn on_player_collision(&mut self, player: &mut Player, _delta_time: f32) {
        if !self.body.is_alive() {
            return;
        }
        self.sync_player(player.snapshot());
        if self.is_dying() {
            return;
        }

        if let Some((sword_center, sword_extent)) = player.sword_hitbox() {
            if self.body.overlaps_rect(sword_center, sword_extent) {
                let from = player.position();
                self.hurt(1, from);
                return;
            }
        }

        if self.body.overlaps(player.body()) {
            self.hurt_player(player);
        }
    }

    fn hurt_player(&mut self, player: &mut Player) {
        player.hurt(1, self.body.position());
    }

    /// Radial push-apart: nudge this body half the overlap away from the
    /// other. The mirrored pass pushes the other half.
    pub(crate) fn on_enemy_collision(&mut self, other: &Enemy) {
        if !self.body.is_alive()
            || !other.body.is_alive()
            || !self.body.is_collidable()
            || !other.body.is_collidable()
            || other.is_dying()
        {
            return;
        }
        let position = self.body.position();
        let other_position = other.body.position();
        let dx = position.x - other_position.x;
        let dy = position.y - other_position.y;
        let distance = (dx * dx + dy * dy).sqrt().max(0.001);
        let min_distance = self.body.extent().x + other.body.extent().x;
        let overlap = min_distance - distance;
        if overlap > 0.0 {
            self.body.set_position(
                position.x + (dx / distance) * overlap * 0.5,
                position.y + (dy / distance) * overlap * 0.5,
            );
        }
    }

    pub(crate) fn on_arrow_collision(&mut self, arrow: &mut Arrow) {
        if !self.body.is_alive() || self.is_dying() || !arrow.is_alive() {
            return;
        }
        if !self
            .body
            .overlaps_rect(arrow.body().collision_center(), arrow.body().extent())
        {
            return;
        }
        let from = arrow.position();
        arrow.body_mut().set_alive(false);
        self.hurt(1, from);
    }

    pub(crate) fn hurt(&mut self, damage: i32, from: Vec2) {
        if self.hurt_timer > 0.0 || self.is_dying() {
            return;
        }
        self.health -= damage;
        self.hurt_timer = ENEMY_HURT_TICKS;
        let position = self.body.position();
        let away = Vec2::new(position.x - from.x, position.y - from.y).normalized_or_zero();
        self.body
            .set_velocity(away.scaled(ENEMY_KNOCKBACK_SPEED));
        if self.health <= 0 {
            self.kill();
        } else {
            debug!(kind = ?self.kind, health = self.health, "enemy_hurt");
        }
    }

    /// Enters the terminal dying window; the body goes fully dead when it
    /// runs out.
    pub(crate) fn kill(&mut self) {
        if self.is_dying() {
            return;
        }
        self.dying_timer = ENEMY_DYING_TICKS;
        self.body.set_target_velocity(Vec2::zero());
        debug!(kind = ?self.kind, "enemy_killed");
    }

    pub(crate) fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.body.is_alive() {
            return;
        }
        let position = self.body.position();
        // Dying enemies show the burst frame at the end of the row.
        let src_x = if self.is_dying() { 48 } else { 0 };
        renderer.draw_region(
            BitmapKey::Enemies,
            src_x,
            self.kind.sprite_row() * 16,
            16,
            16,
            (position.x - 8.0).round() as i32,
            (position.y - 8.0).round() as i32,
        );
    }
}

impl StageCollider for Enemy {
    fn body(&self) -> &MotionBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut MotionBody {
        &mut self.body
    }
}
