//! Read-only presentation snapshot
//!
//! Renderers and HUDs consume this instead of touching [`GameState`].

use serde::Serialize;

use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Pose;
use super::state::{GamePhase, GameState};
use crate::consts::{FLAP_ANIM_FPS, RUN_ANIM_FPS};

/// Player as the presentation layer sees it
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub pose: Pose,
    /// Two-frame run cycle index
    pub frame: u32,
    pub anim_time: f32,
}

/// Variant-specific presentation data
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityKindView {
    Cluster { pieces: u32, scale: f32 },
    Flying { flap_frame: u32 },
}

/// One obstacle; `y` is the top of its box
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(flatten)]
    pub kind: EntityKindView,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub time: f32,
    pub speed: f32,
    pub distance: f32,
    pub score: u64,
    pub best: u64,
    pub ground_y: f32,
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        let hitbox = player.hitbox();
        let pose = state.player_pose();
        let frame = match pose {
            Pose::Running | Pose::Ducking => anim_frame(player.anim_time, RUN_ANIM_FPS),
            Pose::Jumping | Pose::Hit => 0,
        };

        Self {
            phase: state.phase,
            time: state.time,
            speed: state.speed,
            distance: state.distance,
            score: state.score,
            best: state.best,
            ground_y: state.tuning.ground_y(),
            player: PlayerView {
                x: hitbox.min.x,
                y: hitbox.min.y,
                width: hitbox.width(),
                height: hitbox.height(),
                pose,
                frame,
                anim_time: player.anim_time,
            },
            entities: state
                .obstacles
                .as_slice()
                .iter()
                .map(|o| entity_view(o, state.time))
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn entity_view(obstacle: &Obstacle, time: f32) -> EntityView {
    let bounds = obstacle.bounds();
    let kind = match obstacle.kind {
        ObstacleKind::Cluster { pieces, scale } => EntityKindView::Cluster { pieces, scale },
        ObstacleKind::Flying { .. } => EntityKindView::Flying {
            flap_frame: anim_frame(time, FLAP_ANIM_FPS),
        },
    };
    EntityView {
        id: obstacle.id,
        x: bounds.min.x,
        y: bounds.min.y,
        width: bounds.width(),
        height: bounds.height(),
        kind,
    }
}

#[inline]
fn anim_frame(time: f32, fps: f32) -> u32 {
    (time * fps) as u32 % 2
}
