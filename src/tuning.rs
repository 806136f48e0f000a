//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes from a [`Tuning`].
//! Defaults mirror [`crate::consts`]; a JSON document may override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Balance parameters for one simulation context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_offset: f32,
    pub max_frame_dt: f32,

    // === Speed ramp ===
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_accel: f32,

    // === Spawning ===
    pub max_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub spawn_jitter_min: f32,
    pub spawn_jitter_max: f32,
    pub initial_spawn_delay: f32,
    pub cluster_chance: f32,
    pub cluster_max_pieces: u32,
    pub cluster_piece_width: f32,
    pub cluster_piece_height: f32,
    pub cluster_piece_gap: f32,
    pub cluster_scales: [f32; 2],
    pub flyer_width: f32,
    pub flyer_height: f32,
    pub flyer_bands: [f32; 3],
    pub flyer_oscillate_chance: f32,
    pub flyer_min_amplitude: f32,
    pub flyer_max_amplitude: f32,
    pub flyer_max_vspeed: f32,
    pub despawn_margin: f32,

    // === Player ===
    pub player_x: f32,
    pub stand_size: [f32; 2],
    pub duck_size: [f32; 2],
    pub gravity: f32,
    pub jump_velocity: f32,
    pub jump_hold_accel: f32,
    pub jump_hold_cap: f32,

    // === Scoring ===
    pub score_cue_every: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_offset: GROUND_OFFSET,
            max_frame_dt: MAX_FRAME_DT,

            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            speed_accel: SPEED_ACCEL,

            max_spawn_interval: MAX_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_jitter_min: SPAWN_JITTER_MIN,
            spawn_jitter_max: SPAWN_JITTER_MAX,
            initial_spawn_delay: INITIAL_SPAWN_DELAY,
            cluster_chance: CLUSTER_CHANCE,
            cluster_max_pieces: CLUSTER_MAX_PIECES,
            cluster_piece_width: CLUSTER_PIECE_WIDTH,
            cluster_piece_height: CLUSTER_PIECE_HEIGHT,
            cluster_piece_gap: CLUSTER_PIECE_GAP,
            cluster_scales: CLUSTER_SCALES,
            flyer_width: FLYER_WIDTH,
            flyer_height: FLYER_HEIGHT,
            flyer_bands: FLYER_BANDS,
            flyer_oscillate_chance: FLYER_OSCILLATE_CHANCE,
            flyer_min_amplitude: FLYER_MIN_AMPLITUDE,
            flyer_max_amplitude: FLYER_MAX_AMPLITUDE,
            flyer_max_vspeed: FLYER_MAX_VSPEED,
            despawn_margin: DESPAWN_MARGIN,

            player_x: PLAYER_X,
            stand_size: [PLAYER_STAND_WIDTH, PLAYER_STAND_HEIGHT],
            duck_size: [PLAYER_DUCK_WIDTH, PLAYER_DUCK_HEIGHT],
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            jump_hold_accel: JUMP_HOLD_ACCEL,
            jump_hold_cap: JUMP_HOLD_CAP,

            score_cue_every: SCORE_CUE_EVERY,
        }
    }
}

impl Tuning {
    /// Parse an override document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Ground baseline in logical coordinates
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.world_height - self.ground_offset
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return invalid("world dimensions must be positive");
        }
        if self.ground_offset < 0.0 || self.ground_offset >= self.world_height {
            return invalid("ground offset must lie inside the world");
        }
        if self.max_frame_dt <= 0.0 {
            return invalid("max_frame_dt must be positive");
        }
        if self.min_speed <= 0.0 || self.max_speed < self.min_speed {
            return invalid("speed range must be positive and ordered");
        }
        if self.min_spawn_interval <= 0.0 || self.max_spawn_interval < self.min_spawn_interval {
            return invalid("spawn interval range must be positive and ordered");
        }
        if self.spawn_jitter_min <= 0.0 || self.spawn_jitter_max < self.spawn_jitter_min {
            return invalid("spawn jitter range must be positive and ordered");
        }
        if !(0.0..=1.0).contains(&self.cluster_chance)
            || !(0.0..=1.0).contains(&self.flyer_oscillate_chance)
        {
            return invalid("probabilities must lie in [0, 1]");
        }
        if self.cluster_max_pieces == 0 {
            return invalid("clusters need at least one piece");
        }
        if self.flyer_min_amplitude <= 0.0 || self.flyer_max_amplitude < self.flyer_min_amplitude {
            return invalid("flyer amplitude range must be positive and ordered");
        }
        if self.gravity <= 0.0 || self.jump_velocity >= 0.0 {
            return invalid("gravity must pull down and launch must go up");
        }
        if self.jump_hold_cap < 0.0 || self.jump_hold_accel < 0.0 {
            return invalid("jump hold parameters must be non-negative");
        }
        if self.score_cue_every == 0 {
            return invalid("score_cue_every must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ground_y(), GROUND_Y);
    }

    #[test]
    fn test_partial_override() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 600.0, "gravity": 3000.0 }"#).unwrap();
        assert_eq!(tuning.max_speed, 600.0);
        assert_eq!(tuning.gravity, 3000.0);
        // Untouched fields keep their defaults
        assert_eq!(tuning.min_speed, MIN_SPEED);
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let err = Tuning::from_json(r#"{ "max_speed": 100.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }
}
