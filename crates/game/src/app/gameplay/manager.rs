#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickPhase {
    PlayerUpdate,
    PlayerStageCollision,
    CameraVisibility,
    EnemySimulation,
    ProjectileSimulation,
}

/// Per-tick phase order. This sequence is a correctness requirement: the
/// player resolves before enemies read its state, and motion integration
/// precedes stage collision so positions are clamped before any later
/// phase reads them.
const TICK_PHASE_ORDER: [TickPhase; 5] = [
    TickPhase::PlayerUpdate,
    TickPhase::PlayerStageCollision,
    TickPhase::CameraVisibility,
    TickPhase::EnemySimulation,
    TickPhase::ProjectileSimulation,
];

/// Owns every simulated entity and drives one tick of the world. All
/// collections are arena-style: entities die by flag flip, never by
/// removal, so indices stay stable across the pairwise passes.
pub(crate) struct ObjectManager {
    player: Player,
    arrows: Vec<Arrow>,
    enemies: Vec<Enemy>,
    teleporters: Vec<Teleporter>,
}

impl ObjectManager {
    pub(crate) fn new(player_x: f32, player_y: f32) -> Self {
        Self {
            player: Player::new(player_x, player_y),
            arrows: (0..ARROW_COUNT).map(|_| Arrow::new()).collect(),
            enemies: Vec::new(),
            teleporters: Vec::new(),
        }
    }

    pub(crate) fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub(crate) fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    #[cfg(test)]
    pub(crate) fn teleporters(&self) -> &[Teleporter] {
        &self.teleporters
    }

    pub(crate) fn add_teleporter(&mut self, teleporter: Teleporter) {
        debug!(
            x = teleporter.position().x,
            y = teleporter.position().y,
            dest_x = teleporter.destination().x,
            dest_y = teleporter.destination().y,
            "teleporter_added"
        );
        self.teleporters.push(teleporter);
    }

    pub(crate) fn add_enemy(&mut self, enemy: Enemy) {
        debug!(kind = ?enemy.kind(), x = enemy.position().x, y = enemy.position().y, "enemy_added");
        self.enemies.push(enemy);
    }

    /// Places the player and snaps the camera to the containing room.
    pub(crate) fn set_player_location(&mut self, x: f32, y: f32, camera: &mut Camera) {
        self.player.set_position(x, y);
        let col = (x / CAMERA_WIDTH).floor() as i32;
        let row = (y / CAMERA_HEIGHT).floor() as i32;
        camera.set_grid_position(col, row);
    }

    pub(crate) fn tick(
        &mut self,
        input: &InputSnapshot,
        camera: &mut Camera,
        stage: &Stage,
        delta_time: f32,
    ) {
        for phase in TICK_PHASE_ORDER {
            self.run_phase(phase, input, camera, stage, delta_time);
        }
    }

    fn run_phase(
        &mut self,
        phase: TickPhase,
        input: &InputSnapshot,
        camera: &mut Camera,
        stage: &Stage,
        delta_time: f32,
    ) {
        match phase {
            TickPhase::PlayerUpdate => {
                self.player
                    .update(input, camera, &mut self.arrows, delta_time);
                if !camera.is_transitioning() {
                    self.check_teleporters(camera, delta_time);
                }
            }
            TickPhase::PlayerStageCollision => {
                stage.query_collision(&mut self.player, delta_time);
            }
            TickPhase::CameraVisibility => {
                // Runs even mid-transition so visibility stays current.
                for enemy in &mut self.enemies {
                    enemy.camera_check(camera);
                }
                for teleporter in &mut self.teleporters {
                    teleporter.camera_check(camera);
                }
            }
            TickPhase::EnemySimulation => {
                if camera.is_transitioning() {
                    return;
                }
                self.run_enemy_simulation(stage, delta_time);
            }
            TickPhase::ProjectileSimulation => {
                if camera.is_transitioning() {
                    return;
                }
                for arrow in &mut self.arrows {
                    stage.query_collision(arrow, delta_time);
                    arrow.update(camera, delta_time);
                }
            }
        }
    }

    /// Fires at most one armed pad the player stands on, warping the
    /// player and snapping the camera to the destination room. The re-arm
    /// pass runs against the post-warp position, so the destination pad
    /// never bounces the player straight back.
    fn check_teleporters(&mut self, camera: &mut Camera, delta_time: f32) {
        let mut warp = None;
        for teleporter in &self.teleporters {
            if teleporter.is_in_camera()
                && teleporter.armed
                && teleporter.covers_player(&self.player)
            {
                warp = Some(teleporter.destination());
                break;
            }
        }
        if let Some(destination) = warp {
            info!(x = destination.x, y = destination.y, "player_teleported");
            self.player.set_position(destination.x, destination.y);
            let col = (destination.x / CAMERA_WIDTH).floor() as i32;
            let row = (destination.y / CAMERA_HEIGHT).floor() as i32;
            camera.set_grid_position(col, row);
        }
        for teleporter in &mut self.teleporters {
            teleporter.armed = !teleporter.covers_player(&self.player);
            teleporter.update(delta_time);
        }
    }

    fn run_enemy_simulation(&mut self, stage: &Stage, delta_time: f32) {
        for index in 0..self.enemies.len() {
            if !self.enemies[index].is_alive() || !self.enemies[index].is_in_camera() {
                continue;
            }

            self.enemies[index].update(delta_time);
            self.enemies[index].on_player_collision(&mut self.player, delta_time);
            stage.query_collision(&mut self.enemies[index], delta_time);

            if self.enemies[index].is_dying() {
                continue;
            }
            for other in 0..self.enemies.len() {
                if other == index {
                    continue;
                }
                let (enemy, neighbor) = Self::pair_mut(&mut self.enemies, index, other);
                enemy.on_enemy_collision(neighbor);
            }
            let enemy = &mut self.enemies[index];
            for arrow in &mut self.arrows {
                enemy.on_arrow_collision(arrow);
            }
        }
    }

    /// Splits a mutable slice into one mutable element and one shared
    /// element at distinct indices.
    fn pair_mut(enemies: &mut [Enemy], index: usize, other: usize) -> (&mut Enemy, &Enemy) {
        if index < other {
            let (left, right) = enemies.split_at_mut(other);
            (&mut left[index], &right[0])
        } else {
            let (left, right) = enemies.split_at_mut(index);
            (&mut right[0], &left[other])
        }
    }

    /// Paint order: teleporter pads flat on the ground, the player shadow,
    /// then enemies, the player, and arrows on top.
    pub(crate) fn draw(&self, renderer: &mut dyn Renderer) {
        for teleporter in &self.teleporters {
            teleporter.draw(renderer);
        }
        self.player.draw_shadow(renderer);
        for enemy in &self.enemies {
            enemy.draw(renderer);
        }
        self.player.draw(renderer);
        for arrow in &self.arrows {
            arrow.draw(renderer);
        }
    }
}
