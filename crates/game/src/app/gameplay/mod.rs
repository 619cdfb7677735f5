use std::f32::consts::TAU;

use engine::{
    BitmapKey, Camera, InputAction, InputSnapshot, MapDocument, Renderer, Vec2, CAMERA_HEIGHT,
    CAMERA_WIDTH,
};
use tracing::{debug, info, warn};

const TILE_SIZE: f32 = 16.0;
const TILESET_COLUMNS: i32 = 16;
const WATER_TILE_ID: i32 = 26;
const WATER_SCROLL_PX_PER_TICK: f32 = 0.1;
const WATER_FRAME_DIV: f32 = 2.0;

const SOLID_NONE: i32 = 0;
const SOLID_WALL: i32 = 1;
const SOLID_WATER: i32 = 2;

const COLLISION_SCAN_RADIUS: i32 = 2;
// Empirically tuned tolerance band for the wall penetration window.
const WALL_MARGIN_NEAR_PX: f32 = 0.0;
const WALL_MARGIN_FAR_PX: f32 = 2.0;

const DEFAULT_ACCELERATION: f32 = 0.2;

const PLAYER_WALK_SPEED: f32 = 1.25;
const PLAYER_EXTENT: Vec2 = Vec2::new(4.0, 6.0);
const PLAYER_MAX_HEALTH: i32 = 3;
const PLAYER_SWORD_TICKS: f32 = 20.0;
const PLAYER_HURT_TICKS: f32 = 60.0;
const PLAYER_SWORD_REACH_PX: f32 = 14.0;
const PLAYER_SWORD_EXTENT: Vec2 = Vec2::new(8.0, 8.0);
const PLAYER_KNOCKBACK_SPEED: f32 = 2.0;

const TELEPORT_RADIUS_PX: f32 = 12.0;
const TELEPORT_ANIM_FAST_TICKS: f32 = 8.0;
const TELEPORT_ANIM_SLOW_TICKS: f32 = 30.0;
const TELEPORT_FRAME_COUNT: i32 = 4;

const ARROW_COUNT: usize = 8;
const ARROW_SPEED: f32 = 3.0;
const ARROW_EXTENT: Vec2 = Vec2::new(2.0, 2.0);
const ARROW_CAMERA_MARGIN_PX: f32 = 8.0;

const ENEMY_HURT_TICKS: f32 = 30.0;
const ENEMY_DYING_TICKS: f32 = 30.0;
const ENEMY_KNOCKBACK_SPEED: f32 = 2.0;
const ENEMY_CAMERA_MARGIN_PX: f32 = 16.0;

const BEE_SPEED: f32 = 1.0;
const BEE_PHASE_DELTA: f32 = 0.025;
const BEE_ORBIT_NEAR_PX: f32 = 32.0;
const BEE_ORBIT_FAR_PX: f32 = 64.0;

const SLUG_WAIT_TICKS: f32 = 60.0;
const SLUG_LUNGE_TICKS: f32 = 30.0;
const SLUG_LUNGE_SPEED: f32 = 1.5;

include!("motion.rs");
include!("stage.rs");
include!("objects.rs");
include!("enemies.rs");
include!("manager.rs");
