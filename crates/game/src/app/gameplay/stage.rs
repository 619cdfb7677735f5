/// Seam between the stage broad-phase and the entities it clamps. The wall
/// contact hook is a capability: variants that react to wall hits override
/// it, everything else keeps the no-op default.
pub(crate) trait StageCollider {
    fn body(&self) -> &MotionBody;
    fn body_mut(&mut self) -> &mut MotionBody;
    fn on_wall_contact(&mut self, _contact: WallContact) {}
}

/// Static tile grid plus the parallel solidity classification, immutable
/// after load. All spatial queries are total: out-of-range coordinates
/// resolve to empty/passable, never an error.
pub(crate) struct Stage {
    width: i32,
    height: i32,
    tile_ids: Vec<i32>,
    solid_class: Vec<i32>,
    water_offset: f32,
}

impl Stage {
    /// Builds the stage from the decoded tilemap and solid-map documents.
    /// Layer 0 of the tilemap is the visual grid; layer 0 of the solid map
    /// is the per-tile-type class table indexed by `tile_id - 1`.
    pub(crate) fn from_documents(
        map: &MapDocument,
        solid: &MapDocument,
    ) -> Result<Self, String> {
        let tile_ids = map
            .layer_data(0)
            .ok_or_else(|| "tilemap document has no layer 0".to_string())?
            .to_vec();
        let solid_class = solid
            .layer_data(0)
            .ok_or_else(|| "solid-map document has no layer 0".to_string())?
            .to_vec();
        info!(
            width = map.width,
            height = map.height,
            "stage_loaded"
        );
        Ok(Self {
            width: map.width,
            height: map.height,
            tile_ids,
            solid_class,
            water_offset: 0.0,
        })
    }

    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    /// Visual tile index at a cell; 0 (empty) outside the map.
    pub(crate) fn tile_at(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0;
        }
        self.tile_ids[(y * self.width + x) as usize]
    }

    /// Effective solidity of a cell for a querying entity. Swim-required
    /// tiles count as walls for non-swimmers and as water for swimmers;
    /// unknown tile types resolve to passable.
    pub(crate) fn solid_class_at(&self, x: i32, y: i32, swim_capable: bool) -> i32 {
        let tile = self.tile_at(x, y);
        if tile <= 0 {
            return SOLID_NONE;
        }
        let class = self
            .solid_class
            .get((tile - 1) as usize)
            .copied()
            .unwrap_or(SOLID_NONE);
        if class == SOLID_WATER && !swim_capable {
            return SOLID_WALL;
        }
        class
    }

    /// Broad-phase wall resolution for one entity: scan the fixed-radius
    /// window around its cell in row-major order and resolve only the
    /// exposed edges of each solid tile, so runs of solid tiles act as one
    /// surface instead of over-constraining on their internal seams.
    pub(crate) fn query_collision<C>(&self, entity: &mut C, delta_time: f32)
    where
        C: StageCollider + ?Sized,
    {
        if !entity.body().is_alive() {
            return;
        }
        // Projectiles fly over water; only walls stop them.
        let swim = entity.body().is_swim_capable() || entity.body().is_projectile_kind();
        let position = entity.body().position();
        let start_x = (position.x / TILE_SIZE).floor() as i32 - COLLISION_SCAN_RADIUS;
        let start_y = (position.y / TILE_SIZE).floor() as i32 - COLLISION_SCAN_RADIUS;
        let end_x = start_x + COLLISION_SCAN_RADIUS * 2 + 1;
        let end_y = start_y + COLLISION_SCAN_RADIUS * 2 + 1;

        for y in start_y..=end_y {
            for x in start_x..=end_x {
                if self.solid_class_at(x, y, swim) != SOLID_WALL {
                    continue;
                }
                let world_x = x as f32 * TILE_SIZE;
                let world_y = y as f32 * TILE_SIZE;

                if self.solid_class_at(x, y - 1, swim) != SOLID_WALL {
                    Self::resolve_edge(entity, world_x, world_y, WallSide::Top, delta_time);
                }
                if self.solid_class_at(x, y + 1, swim) != SOLID_WALL {
                    Self::resolve_edge(
                        entity,
                        world_x,
                        world_y + TILE_SIZE,
                        WallSide::Bottom,
                        delta_time,
                    );
                }
                if self.solid_class_at(x - 1, y, swim) != SOLID_WALL {
                    Self::resolve_edge(entity, world_x, world_y, WallSide::Left, delta_time);
                }
                if self.solid_class_at(x + 1, y, swim) != SOLID_WALL {
                    Self::resolve_edge(
                        entity,
                        world_x + TILE_SIZE,
                        world_y,
                        WallSide::Right,
                        delta_time,
                    );
                }
            }
        }
    }

    fn resolve_edge<C>(entity: &mut C, edge_x: f32, edge_y: f32, side: WallSide, delta_time: f32)
    where
        C: StageCollider + ?Sized,
    {
        if let Some(contact) =
            entity
                .body_mut()
                .resolve_wall(edge_x, edge_y, TILE_SIZE, side, delta_time)
        {
            entity.on_wall_contact(contact);
        }
    }

    pub(crate) fn update(&mut self, delta_time: f32) {
        self.water_offset =
            (self.water_offset + WATER_SCROLL_PX_PER_TICK * delta_time) % TILE_SIZE;
    }

    #[cfg(test)]
    pub(crate) fn water_offset(&self) -> f32 {
        self.water_offset
    }

    /// Blits the tile window visible through the camera. Water tiles scroll
    /// by sampling the water bitmap at the animated offset.
    pub(crate) fn draw(&self, renderer: &mut dyn Renderer, camera: &Camera) {
        let view = camera.virtual_position();
        let start_x = (view.x / TILE_SIZE).floor() as i32 - 1;
        let start_y = (view.y / TILE_SIZE).floor() as i32 - 1;
        let end_x = start_x + (CAMERA_WIDTH / TILE_SIZE) as i32 + 2;
        let end_y = start_y + (CAMERA_HEIGHT / TILE_SIZE) as i32 + 2;

        let water_step = ((self.water_offset / WATER_FRAME_DIV) as i32) as f32 * WATER_FRAME_DIV;
        let water_src = (TILE_SIZE - water_step) as i32;
        let tile_px = TILE_SIZE as i32;

        for y in start_y..=end_y {
            for x in start_x..=end_x {
                let tile = self.tile_at(x, y);
                if tile <= 0 {
                    continue;
                }
                if tile == WATER_TILE_ID {
                    renderer.draw_region(
                        BitmapKey::Water,
                        water_src,
                        water_src,
                        tile_px,
                        tile_px,
                        x * tile_px,
                        y * tile_px,
                    );
                } else {
                    let index = tile - 1;
                    let src_x = index % TILESET_COLUMNS;
                    let src_y = index / TILESET_COLUMNS;
                    renderer.draw_region(
                        BitmapKey::Tileset,
                        src_x * tile_px,
                        src_y * tile_px,
                        tile_px,
                        tile_px,
                        x * tile_px,
                        y * tile_px,
                    );
                }
            }
        }
    }
}
