/// Gameplay tuning.  World units are pixels; velocities are pixels/second.

use std::time::Duration;

pub const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Fixed physics timestep, one per rendered frame.
pub const DT: f32 = 0.033;

// ── Terminal mapping ──────────────────────────────────────────────────────────

/// World pixels covered by one terminal cell at a pixel ratio of 1.0.
pub const CELL_WIDTH_PX: f32 = 24.0;
pub const CELL_HEIGHT_PX: f32 = 32.0;

// ── Physics ───────────────────────────────────────────────────────────────────

pub const WORLD_GRAVITY_Y: f32 = 300.0;

/// Rebounds slower than this settle to rest instead of jittering.
pub const REST_SPEED: f32 = 30.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 450.0;
pub const PLAYER_SCALE: f32 = 2.0;
pub const PLAYER_BOUNCE: f32 = 0.2;
pub const PLAYER_GRAVITY_Y: f32 = 300.0;
pub const PLAYER_RUN_SPEED: f32 = 160.0;
pub const PLAYER_JUMP_SPEED: f32 = 500.0;
pub const DEATH_TINT: u32 = 0xFF0000;

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Centres of the floating `ground` platforms.
pub const LEDGES: [(f32, f32); 5] = [
    (900.0, 450.0),
    (1300.0, 250.0),
    (1600.0, 550.0),
    (300.0, 350.0),
    (600.0, 620.0),
];

/// The ground slab is centred this far above the bottom edge.
pub const GROUND_OFFSET: f32 = 50.0;

// ── Collectibles ──────────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 14;
pub const STAR_FIRST_X: f32 = 120.0;
pub const STAR_STEP_X: f32 = 120.0;
pub const STAR_BOUNCE_MIN: f32 = 0.4;
pub const STAR_BOUNCE_MAX: f32 = 0.8;
pub const SCORE_PER_STAR: u32 = 10;

// ── Hazards ───────────────────────────────────────────────────────────────────

/// Player x below this sends the next hazard to the right half, and vice versa.
pub const ARENA_SPLIT_X: i32 = 400;
pub const ARENA_SPAWN_MAX_X: i32 = 800;
pub const HAZARD_SPAWN_Y: f32 = 16.0;
pub const HAZARD_MAX_DRIFT_X: i32 = 200;
pub const HAZARD_FALL_SPEED: f32 = 20.0;
pub const HAZARD_BOUNCE: f32 = 1.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const SCORE_TEXT_POS: (f32, f32) = (16.0, 16.0);
pub const GAME_OVER_TEXT_Y: f32 = 350.0;
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RESTART_CAPTION: &str = "[ R ] Restart";
