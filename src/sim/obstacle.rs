//! Obstacles and the entity store
//!
//! Obstacles enter at the right edge, scroll left with the world, score once
//! their trailing edge passes the left edge, and are removed a margin later.

use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Vertical bobbing of a flyer around its base height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    pub amplitude: f32,
    /// Angular rate (rad/s); sign sets the initial direction
    pub rate: f32,
}

/// Variant-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Abutting ground pieces sharing one scale
    Cluster { pieces: u32, scale: f32 },
    /// Airborne obstacle at one of the fixed bands
    Flying {
        base_y: f32,
        oscillation: Option<Oscillation>,
    },
}

/// A live obstacle. `y` is the base (bottom edge) of its box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once when the trailing edge crosses the left edge
    pub scored: bool,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Collision box; the anchor is the base, so the top is `y - height`
    pub fn bounds(&self) -> Aabb {
        Aabb::from_base(self.x, self.y, self.width, self.height)
    }

    /// Right edge in world coordinates
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Scroll left and update the oscillation phase
    ///
    /// Phase comes from absolute simulation time, so every flyer shares one
    /// oscillation reference regardless of when it spawned.
    fn advance(&mut self, dt: f32, speed: f32, sim_time: f32) {
        self.x -= speed * dt;
        match self.kind {
            ObstacleKind::Cluster { .. } => {}
            ObstacleKind::Flying {
                base_y,
                oscillation: Some(osc),
            } => {
                self.y = base_y + (sim_time * osc.rate).sin() * osc.amplitude;
            }
            ObstacleKind::Flying {
                oscillation: None, ..
            } => {}
        }
    }
}

/// Ordered collection of live obstacles (creation order)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    obstacles: Vec<Obstacle>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly spawned obstacle
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Advance every obstacle, then score, then expire
    ///
    /// Returns how many obstacles scored this step. An obstacle scores when
    /// its trailing edge first goes negative and is removed only once that
    /// edge is more than `despawn_margin` past the left edge; scoring is
    /// checked first so no obstacle can leave unscored.
    pub fn step(&mut self, dt: f32, speed: f32, sim_time: f32, despawn_margin: f32) -> u32 {
        let mut scored = 0;
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt, speed, sim_time);
            if !obstacle.scored && obstacle.trailing_edge() < 0.0 {
                obstacle.scored = true;
                scored += 1;
            }
        }
        self.obstacles
            .retain(|o| !(o.scored && o.trailing_edge() < -despawn_margin));
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn cluster(id: u32, x: f32) -> Obstacle {
        Obstacle {
            id,
            x,
            y: GROUND_Y,
            width: 18.0,
            height: 36.0,
            scored: false,
            kind: ObstacleKind::Cluster {
                pieces: 1,
                scale: 1.0,
            },
        }
    }

    fn flyer(id: u32, base_y: f32, amplitude: f32) -> Obstacle {
        Obstacle {
            id,
            x: 500.0,
            y: base_y,
            width: FLYER_WIDTH,
            height: FLYER_HEIGHT,
            scored: false,
            kind: ObstacleKind::Flying {
                base_y,
                oscillation: Some(Oscillation {
                    amplitude,
                    rate: FLYER_MAX_VSPEED / amplitude,
                }),
            },
        }
    }

    #[test]
    fn test_scroll_with_world_speed() {
        let mut store = EntityStore::new();
        store.push(cluster(1, 500.0));
        store.step(0.5, 320.0, 0.5, DESPAWN_MARGIN);
        assert_eq!(store.as_slice()[0].x, 340.0);
    }

    #[test]
    fn test_scores_once_then_removed() {
        let mut store = EntityStore::new();
        store.push(cluster(1, 0.0));

        let mut total = 0;
        let mut scored_frame = None;
        let mut removed_frame = None;
        for frame in 0..200 {
            total += store.step(0.01, 320.0, 0.0, DESPAWN_MARGIN);
            if scored_frame.is_none() && total == 1 {
                scored_frame = Some(frame);
            }
            if store.is_empty() {
                removed_frame = Some(frame);
                break;
            }
        }
        assert_eq!(total, 1);
        assert!(scored_frame.unwrap() < removed_frame.unwrap());
    }

    #[test]
    fn test_score_and_removal_in_same_step_still_counts() {
        // A huge step can carry an obstacle past both thresholds at once
        let mut store = EntityStore::new();
        store.push(cluster(1, 10.0));
        let scored = store.step(1.0, 500.0, 1.0, DESPAWN_MARGIN);
        assert_eq!(scored, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_oscillation_uses_global_time() {
        let mut store = EntityStore::new();
        store.push(flyer(1, 200.0, 10.0));
        store.push(flyer(2, 200.0, 10.0));
        let t = 0.37;
        store.step(0.0, 320.0, t, DESPAWN_MARGIN);
        let expected = 200.0 + (t * FLYER_MAX_VSPEED / 10.0).sin() * 10.0;
        for o in store.as_slice() {
            assert!((o.y - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_keeps_creation_order() {
        let mut store = EntityStore::new();
        store.push(cluster(1, 900.0));
        store.push(cluster(2, 950.0));
        store.push(cluster(3, 990.0));
        store.step(0.016, 320.0, 0.016, DESPAWN_MARGIN);
        let ids: Vec<u32> = store.as_slice().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
