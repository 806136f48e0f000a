//! Obstacle spawner
//!
//! A countdown gates spawning. Each time it runs out exactly one obstacle is
//! created at the right edge and the countdown is reloaded with an interval
//! that shrinks as the world speeds up.
//!
//! Random draw order per spawn (fixed for replay parity):
//! 1. kind roll (`< cluster_chance` = cluster)
//! 2. cluster: piece count, 3. scale
//! 2. flyer: band, 3. oscillation roll, 4. amplitude, 5. direction
//! 6. interval jitter

use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind, Oscillation};
use super::random::RandomSource;
use crate::tuning::Tuning;
use crate::{lerp, normalize_in_range};

/// Base spawn interval for a world speed, before jitter
///
/// Linear in normalized speed: `max_spawn_interval` at `min_speed`,
/// `min_spawn_interval` at `max_speed`.
pub fn base_interval(speed: f32, tuning: &Tuning) -> f32 {
    let t = normalize_in_range(speed, tuning.min_speed, tuning.max_speed);
    lerp(tuning.max_spawn_interval, tuning.min_spawn_interval, t)
}

/// Spawn cadence state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds until the next spawn
    pub countdown: f32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            countdown: tuning.initial_spawn_delay,
        }
    }

    /// Count down and spawn at most one obstacle
    ///
    /// `next_id` supplies the id for a new obstacle.
    pub fn maybe_spawn(
        &mut self,
        dt: f32,
        speed: f32,
        tuning: &Tuning,
        rng: &mut dyn RandomSource,
        next_id: impl FnOnce() -> u32,
    ) -> Option<Obstacle> {
        self.countdown -= dt;
        if self.countdown > 0.0 {
            return None;
        }

        let obstacle = build_obstacle(next_id(), tuning, rng);
        let jitter = rng.range(tuning.spawn_jitter_min, tuning.spawn_jitter_max);
        self.countdown = base_interval(speed, tuning) * jitter;
        Some(obstacle)
    }
}

/// Roll a new obstacle positioned at the right edge of the world
fn build_obstacle(id: u32, tuning: &Tuning, rng: &mut dyn RandomSource) -> Obstacle {
    let x = tuning.world_width;
    let ground_y = tuning.ground_y();

    if rng.chance(tuning.cluster_chance) {
        let pieces = rng.index(tuning.cluster_max_pieces as usize) as u32 + 1;
        let scale = tuning.cluster_scales[rng.index(tuning.cluster_scales.len())];
        let piece_width = tuning.cluster_piece_width * scale;
        let width = piece_width * pieces as f32 + tuning.cluster_piece_gap * (pieces - 1) as f32;
        log::debug!("spawn #{id}: cluster x{pieces} scale {scale}");
        Obstacle {
            id,
            x,
            y: ground_y,
            width,
            height: tuning.cluster_piece_height * scale,
            scored: false,
            kind: ObstacleKind::Cluster { pieces, scale },
        }
    } else {
        let band = tuning.flyer_bands[rng.index(tuning.flyer_bands.len())];
        // Bands place the top edge; `y` tracks the bottom edge
        let base_y = ground_y - band + tuning.flyer_height;
        let oscillation = if rng.chance(tuning.flyer_oscillate_chance) {
            let amplitude = rng.range(tuning.flyer_min_amplitude, tuning.flyer_max_amplitude);
            let direction = if rng.chance(0.5) { -1.0 } else { 1.0 };
            Some(Oscillation {
                amplitude,
                rate: direction * tuning.flyer_max_vspeed / amplitude,
            })
        } else {
            None
        };
        log::debug!("spawn #{id}: flyer band {band} oscillating={}", oscillation.is_some());
        Obstacle {
            id,
            x,
            y: base_y,
            width: tuning.flyer_width,
            height: tuning.flyer_height,
            scored: false,
            kind: ObstacleKind::Flying {
                base_y,
                oscillation,
            },
        }
    }
}
