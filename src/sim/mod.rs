//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous step per frame, clamped dt
//! - Injected randomness only
//! - Stable iteration order (creation order)
//! - No rendering, audio or platform dependencies

pub mod clock;
pub mod collision;
pub mod obstacle;
pub mod player;
pub mod random;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::{FrameClock, clamp_dt};
pub use collision::{Aabb, first_hit};
pub use obstacle::{EntityStore, Obstacle, ObstacleKind, Oscillation};
pub use player::{JumpOutcome, Player, Pose};
pub use random::{RandomSource, ReplayRandom, seeded};
pub use snapshot::{EntityKindView, EntityView, PlayerView, Snapshot};
pub use spawner::{Spawner, base_interval};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
