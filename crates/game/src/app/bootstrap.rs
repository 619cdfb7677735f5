use std::path::Path;

use engine::{Camera, DocumentStore, MapDocument, MapLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay::{Enemy, EnemyKind, ObjectManager, Stage, Teleporter};

const ASSET_DIR_ENV_VAR: &str = "THORNBOW_ASSETS";

const DEMO_MAP_WIDTH: i32 = 20;
const DEMO_MAP_HEIGHT: i32 = 9;
const TILE_FLOOR: i32 = 1;
const TILE_WALL: i32 = 2;
const TILE_WATER: i32 = 26;

// Spawn-marker layer of the tilemap document: cell codes, not tiles.
const MARKER_LAYER_NAME: &str = "markers";
const MARKER_PLAYER_START: i32 = 1;
const MARKER_BEE: i32 = 2;
const MARKER_SLUG: i32 = 3;
const MARKER_KEY_SLUG: i32 = 4;
const MARKER_TELEPORTER: i32 = 5;

const CELL_PX: f32 = 16.0;
const DEFAULT_PLAYER_START: (f32, f32) = (104.0, 88.0);

pub(crate) struct WorldWiring {
    pub(crate) stage: Stage,
    pub(crate) objects: ObjectManager,
    pub(crate) camera: Camera,
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub(crate) fn build_world() -> Result<WorldWiring, String> {
    let mut store = DocumentStore::new();
    load_documents(&mut store)?;

    let map = store.require("map").map_err(|error| error.to_string())?;
    let solid = store.require("solid").map_err(|error| error.to_string())?;
    let stage = Stage::from_documents(map, solid)?;

    let mut camera = Camera::new();
    let objects = spawn_world_objects(map, &mut camera);

    info!(
        stage_width = stage.width(),
        stage_height = stage.height(),
        "world_ready"
    );
    Ok(WorldWiring {
        stage,
        objects,
        camera,
    })
}

/// Reads the spawn-marker layer of the tilemap document and populates the
/// world from it: player start, enemy spawns, key carrier, teleporter
/// pads. A map without the layer still boots with the default player
/// start and an empty world.
fn spawn_world_objects(map: &MapDocument, camera: &mut Camera) -> ObjectManager {
    let mut player_start = None;
    let mut enemies = Vec::new();
    let mut teleporter_cells: Vec<(f32, f32)> = Vec::new();

    if let Some(markers) = map.layer_named(MARKER_LAYER_NAME) {
        for (index, &marker) in markers.iter().enumerate() {
            if marker == 0 {
                continue;
            }
            let x = (index as i32 % map.width) as f32 * CELL_PX + CELL_PX / 2.0;
            let y = (index as i32 / map.width) as f32 * CELL_PX + CELL_PX / 2.0;
            match marker {
                MARKER_PLAYER_START => {
                    if player_start.is_some() {
                        warn!(x, y, "extra_player_marker_ignored");
                    } else {
                        player_start = Some((x, y));
                    }
                }
                MARKER_BEE => enemies.push(Enemy::new(EnemyKind::Bee, x, y)),
                MARKER_SLUG => enemies.push(Enemy::new(EnemyKind::Slug, x, y)),
                MARKER_KEY_SLUG => {
                    let mut slug = Enemy::new(EnemyKind::Slug, x, y);
                    slug.grant_key();
                    enemies.push(slug);
                }
                MARKER_TELEPORTER => teleporter_cells.push((x, y)),
                other => warn!(marker = other, x, y, "unknown_spawn_marker"),
            }
        }
    } else {
        warn!(layer = MARKER_LAYER_NAME, "map_has_no_marker_layer");
    }

    let (player_x, player_y) = player_start.unwrap_or(DEFAULT_PLAYER_START);
    let mut objects = ObjectManager::new(player_x, player_y);
    objects.set_player_location(player_x, player_y, camera);
    for enemy in enemies {
        objects.add_enemy(enemy);
    }
    // Teleporter markers pair up in document order, each warping to the
    // other pad of its pair.
    for pair in teleporter_cells.chunks(2) {
        if let [a, b] = pair {
            objects.add_teleporter(Teleporter::new(a.0, a.1, b.0, b.1));
            objects.add_teleporter(Teleporter::new(b.0, b.1, a.0, a.1));
        } else {
            warn!(x = pair[0].0, y = pair[0].1, "unpaired_teleporter_marker_ignored");
        }
    }
    objects
}

fn load_documents(store: &mut DocumentStore) -> Result<(), String> {
    if let Ok(asset_dir) = std::env::var(ASSET_DIR_ENV_VAR) {
        let dir = Path::new(&asset_dir);
        store
            .load_from_path("map", &dir.join("map.json"))
            .map_err(|error| error.to_string())?;
        store
            .load_from_path("solid", &dir.join("solid.json"))
            .map_err(|error| error.to_string())?;
        return Ok(());
    }
    store.insert("map", build_demo_map());
    store.insert("solid", build_demo_solid());
    Ok(())
}

/// Two side-by-side rooms with a wall ring, a small pond and a short
/// interior wall, enough to exercise every collision path headlessly.
fn build_demo_map() -> MapDocument {
    let width = DEMO_MAP_WIDTH;
    let height = DEMO_MAP_HEIGHT;
    let mut data = vec![TILE_FLOOR; (width * height) as usize];
    let mut set = |x: i32, y: i32, tile: i32| {
        data[(y * width + x) as usize] = tile;
    };
    for x in 0..width {
        set(x, 0, TILE_WALL);
        set(x, height - 1, TILE_WALL);
    }
    for y in 0..height {
        set(0, y, TILE_WALL);
        set(width - 1, y, TILE_WALL);
    }
    for y in 3..6 {
        for x in 14..17 {
            set(x, y, TILE_WATER);
        }
    }
    set(5, 4, TILE_WALL);
    set(6, 4, TILE_WALL);

    let mut markers = vec![0; (width * height) as usize];
    let mut mark = |x: i32, y: i32, marker: i32| {
        markers[(y * width + x) as usize] = marker;
    };
    mark(6, 5, MARKER_PLAYER_START);
    mark(3, 3, MARKER_BEE);
    mark(13, 6, MARKER_SLUG);
    mark(12, 6, MARKER_KEY_SLUG);
    mark(2, 7, MARKER_TELEPORTER);
    mark(17, 7, MARKER_TELEPORTER);

    MapDocument {
        width,
        height,
        layers: vec![
            MapLayer {
                name: "base".to_string(),
                data,
            },
            MapLayer {
                name: MARKER_LAYER_NAME.to_string(),
                data: markers,
            },
        ],
    }
}

/// Class table parallel to the tile ids: floor passable, wall solid,
/// water solid-unless-swimmer.
fn build_demo_solid() -> MapDocument {
    let width = DEMO_MAP_WIDTH;
    let height = DEMO_MAP_HEIGHT;
    let mut data = vec![0; (width * height) as usize];
    data[(TILE_WALL - 1) as usize] = 1;
    data[(TILE_WATER - 1) as usize] = 2;
    MapDocument {
        width,
        height,
        layers: vec![MapLayer {
            name: "classes".to_string(),
            data,
        }],
    }
}
