//! Endless Dash - deterministic endless-runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, scoring)
//! - `session`: Frame-driven host that feeds the simulation and dispatches its events
//! - `persistence`: Best-score storage
//! - `audio`: Fire-and-forget cue interface
//! - `platform`: Browser bindings
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use audio::{Cue, CuePlayer};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Logical world dimensions, independent of display scaling
    pub const WORLD_WIDTH: f32 = 960.0;
    pub const WORLD_HEIGHT: f32 = 360.0;
    /// Distance of the ground line from the bottom edge
    pub const GROUND_OFFSET: f32 = 56.0;
    /// Ground baseline (y grows toward the ground)
    pub const GROUND_Y: f32 = WORLD_HEIGHT - GROUND_OFFSET;

    /// World scroll speed (px/s)
    pub const MIN_SPEED: f32 = 320.0;
    pub const MAX_SPEED: f32 = 560.0;
    /// Speed ramp (px/s²)
    pub const SPEED_ACCEL: f32 = 16.0;

    /// Spawn interval at minimum speed (seconds)
    pub const MAX_SPAWN_INTERVAL: f32 = 1.15;
    /// Spawn interval at maximum speed (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.65;
    pub const SPAWN_JITTER_MIN: f32 = 0.75;
    pub const SPAWN_JITTER_MAX: f32 = 1.25;
    /// Countdown before the first obstacle of a run
    pub const INITIAL_SPAWN_DELAY: f32 = 1.0;

    /// Player column (hitbox center)
    pub const PLAYER_X: f32 = 96.0;
    pub const PLAYER_STAND_WIDTH: f32 = 44.0;
    pub const PLAYER_STAND_HEIGHT: f32 = 48.0;
    pub const PLAYER_DUCK_WIDTH: f32 = 60.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 28.0;

    /// Downward acceleration (px/s²)
    pub const GRAVITY: f32 = 2600.0;
    /// Vertical velocity applied at launch (negative = up)
    pub const JUMP_VELOCITY: f32 = -820.0;
    /// Extra upward acceleration while jump is held (px/s²)
    pub const JUMP_HOLD_ACCEL: f32 = 1500.0;
    /// Maximum time the hold boost can accrue per jump (seconds)
    pub const JUMP_HOLD_CAP: f32 = 0.20;

    /// Cluster piece size at scale 1
    pub const CLUSTER_PIECE_WIDTH: f32 = 18.0;
    pub const CLUSTER_PIECE_HEIGHT: f32 = 36.0;
    pub const CLUSTER_PIECE_GAP: f32 = 4.0;
    pub const CLUSTER_SCALES: [f32; 2] = [1.0, 1.3];
    pub const CLUSTER_MAX_PIECES: u32 = 3;
    pub const CLUSTER_CHANCE: f32 = 0.6;

    pub const FLYER_WIDTH: f32 = 42.0;
    pub const FLYER_HEIGHT: f32 = 26.0;
    /// Height of a resting flyer's top edge above the ground line
    pub const FLYER_BANDS: [f32; 3] = [24.0, 60.0, 100.0];
    pub const FLYER_OSCILLATE_CHANCE: f32 = 0.5;
    pub const FLYER_MIN_AMPLITUDE: f32 = 6.0;
    pub const FLYER_MAX_AMPLITUDE: f32 = 16.0;
    /// Peak vertical speed of an oscillating flyer (px/s)
    pub const FLYER_MAX_VSPEED: f32 = 90.0;

    /// How far past the left edge an obstacle travels before removal
    pub const DESPAWN_MARGIN: f32 = 80.0;

    /// A score cue fires every this many points
    pub const SCORE_CUE_EVERY: u64 = 5;

    /// Animation frame rates for presentation (frames per second)
    pub const RUN_ANIM_FPS: f32 = 10.0;
    pub const FLAP_ANIM_FPS: f32 = 6.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalize `value` within `[min, max]` to `[0, 1]`
#[inline]
pub fn normalize_in_range(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}
