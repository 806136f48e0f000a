//! Collision detection between the player and live obstacles
//!
//! Everything in the runner is an axis-aligned box in logical coordinates,
//! so a single overlap test covers every obstacle variant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;

/// Axis-aligned bounding box (y grows toward the ground)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size
    pub fn from_top_left(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Box whose bottom edge sits at `base_y`
    pub fn from_base(x: f32, base_y: f32, width: f32, height: f32) -> Self {
        Self::from_top_left(x, base_y - height, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap: boxes that only touch along an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Index of the first obstacle (in creation order) overlapping `player`
///
/// Short-circuits on the first match, so a frame with several simultaneous
/// overlaps still reports exactly one hit.
pub fn first_hit(player: &Aabb, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| player.overlaps(&obstacle.bounds()))
}
