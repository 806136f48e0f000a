//! Player controller
//!
//! Owns the runner's physical state and the jump/duck state machine over
//! {grounded, airborne} x {ducking, standing}. The presentation pose is
//! derived from those flags, never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Presentation pose, derived each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Running,
    Jumping,
    Ducking,
    Hit,
}

/// What a jump press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Left the ground
    Launched,
    /// Already airborne; hold re-armed without relaunching
    Held,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// `x` is the fixed hitbox center, `y` the foot position
    pub pos: Vec2,
    /// Only `vel.y` drives gameplay
    pub vel: Vec2,
    pub ducking: bool,
    pub grounded: bool,
    pub jump_held: bool,
    /// Time the hold boost has accrued during the current jump
    pub hold_time: f32,
    /// Animation clock (seconds)
    pub anim_time: f32,
    stand_size: Vec2,
    duck_size: Vec2,
    ground_y: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let ground_y = tuning.ground_y();
        Self {
            pos: Vec2::new(tuning.player_x, ground_y),
            vel: Vec2::ZERO,
            ducking: false,
            grounded: true,
            jump_held: false,
            hold_time: 0.0,
            anim_time: 0.0,
            stand_size: Vec2::from_array(tuning.stand_size),
            duck_size: Vec2::from_array(tuning.duck_size),
            ground_y,
        }
    }

    /// Hitbox size for the current stance; ducking only counts on the ground
    pub fn size(&self) -> Vec2 {
        if self.grounded && self.ducking {
            self.duck_size
        } else {
            self.stand_size
        }
    }

    /// Current hitbox, anchored at the feet and centered on the fixed column
    pub fn hitbox(&self) -> Aabb {
        let size = self.size();
        Aabb::from_base(self.pos.x - size.x / 2.0, self.pos.y, size.x, size.y)
    }

    /// Pose derived from the physical flags
    pub fn pose(&self, game_over: bool) -> Pose {
        if game_over {
            Pose::Hit
        } else if !self.grounded {
            Pose::Jumping
        } else if self.ducking {
            Pose::Ducking
        } else {
            Pose::Running
        }
    }

    /// Jump pressed
    pub fn on_jump_press(&mut self, tuning: &Tuning) -> JumpOutcome {
        self.jump_held = true;
        if !self.grounded {
            return JumpOutcome::Held;
        }
        self.vel.y = tuning.jump_velocity;
        self.grounded = false;
        self.ducking = false;
        self.hold_time = 0.0;
        JumpOutcome::Launched
    }

    /// Jump released; the hold boost stops accruing
    pub fn on_jump_release(&mut self) {
        self.jump_held = false;
    }

    /// Duck pressed; ignored while airborne
    pub fn on_duck_press(&mut self) {
        if self.grounded {
            self.ducking = true;
        }
    }

    /// Duck released; ignored while airborne
    pub fn on_duck_release(&mut self) {
        if self.grounded {
            self.ducking = false;
        }
    }

    /// Integrate one step. Returns `true` on the frame the player lands.
    pub fn step(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.anim_time += dt;
        if self.grounded {
            return false;
        }

        // Variable jump height: extra lift while held, capped per jump
        if self.jump_held && self.hold_time < tuning.jump_hold_cap {
            let boost = (tuning.jump_hold_cap - self.hold_time).min(dt);
            self.vel.y -= tuning.jump_hold_accel * boost;
            self.hold_time += boost;
        }

        self.vel.y += tuning.gravity * dt;
        self.pos.y += self.vel.y * dt;

        if self.vel.y >= 0.0 && self.pos.y >= self.ground_y {
            self.pos.y = self.ground_y;
            self.vel.y = 0.0;
            self.grounded = true;
            return true;
        }
        false
    }

    /// Height of the feet above the ground line
    pub fn height_above_ground(&self) -> f32 {
        self.ground_y - self.pos.y
    }
}
