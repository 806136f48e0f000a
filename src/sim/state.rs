//! Simulation context and core state types
//!
//! One [`GameState`] lives for a whole session. It is reset in place on
//! restart, never rebuilt, so the best score carries across runs.

use serde::{Deserialize, Serialize};

use super::obstacle::EntityStore;
use super::player::{Player, Pose};
use super::random::RandomSource;
use super::spawner::Spawner;
use crate::audio::Cue;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump press
    Ready,
    /// Active run
    Running,
    /// Run suspended; nothing advances
    Paused,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Something that happened during a tick, for audio/persistence/UI consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Score went up by one; `milestone` on every cue interval
    Point { score: u64, milestone: bool },
    /// Player hit an obstacle and the run ended
    Hit { score: u64 },
    /// Best score improved; should be persisted
    NewBest { best: u64 },
}

impl GameEvent {
    /// Audio cue for this event, if any
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::Jump => Some(Cue::Jump),
            GameEvent::Point { milestone: true, .. } => Some(Cue::Score),
            GameEvent::Point { .. } => None,
            GameEvent::Hit { .. } => Some(Cue::Hit),
            GameEvent::NewBest { .. } => None,
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance parameters
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Simulated seconds in this run (frozen while paused)
    pub time: f32,
    /// Cumulative world scroll
    pub distance: f32,
    /// Current scroll speed (px/s)
    pub speed: f32,
    /// Obstacles passed this run
    pub score: u64,
    /// Best score across runs
    pub best: u64,
    pub spawner: Spawner,
    pub obstacles: EntityStore,
    pub player: Player,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh context in the `Ready` phase
    ///
    /// Tuning that fails validation is replaced by the defaults.
    pub fn new(tuning: Tuning, best: u64) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning, using defaults: {}", e);
                Tuning::default()
            }
        };
        Self {
            phase: GamePhase::Ready,
            time: 0.0,
            distance: 0.0,
            speed: tuning.min_speed,
            score: 0,
            best,
            spawner: Spawner::new(&tuning),
            obstacles: EntityStore::new(),
            player: Player::new(&tuning),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Reset every per-run field in place and start running
    ///
    /// `best` is kept; it is never reloaded from storage here.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.time = 0.0;
        self.distance = 0.0;
        self.speed = self.tuning.min_speed;
        self.score = 0;
        self.spawner = Spawner::new(&self.tuning);
        self.obstacles.clear();
        self.player = Player::new(&self.tuning);
        self.events.clear();
        log::info!("Run restarted (best {})", self.best);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        take_id(&mut self.next_id)
    }

    /// Count down the spawner and append whatever it produces
    pub fn run_spawner(&mut self, dt: f32, rng: &mut dyn RandomSource) {
        let next_id = &mut self.next_id;
        let spawned = self
            .spawner
            .maybe_spawn(dt, self.speed, &self.tuning, rng, || take_id(next_id));
        if let Some(obstacle) = spawned {
            self.obstacles.push(obstacle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player pose for presentation
    pub fn player_pose(&self) -> Pose {
        self.player.pose(self.is_game_over())
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn take_id(next: &mut u32) -> u32 {
    let id = *next;
    *next += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(Tuning::default(), 12);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.speed, MIN_SPEED);
        assert_eq!(state.best, 12);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player_pose(), Pose::Running);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(Tuning::default(), 0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_spawned_ids_share_the_counter() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.phase = GamePhase::Running;
        let before = state.next_entity_id();
        state.spawner.countdown = 0.0;
        let mut rng = crate::sim::ReplayRandom::new(vec![0.0, 0.0, 0.0, 0.5]);
        state.run_spawner(1.0 / 60.0, &mut rng);
        let spawned = state.obstacles.as_slice()[0].id;
        assert_eq!(spawned, before + 1);
        assert_eq!(state.next_entity_id(), spawned + 1);
    }

    #[test]
    fn test_invalid_tuning_falls_back_to_defaults() {
        let tuning = Tuning {
            cluster_max_pieces: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(tuning, 0);
        assert_eq!(state.tuning.cluster_max_pieces, CLUSTER_MAX_PIECES);

        // Spawning a cluster must not panic
        state.phase = GamePhase::Running;
        state.spawner.countdown = 0.0;
        let mut rng = crate::sim::ReplayRandom::new(vec![0.0, 0.99, 0.99, 0.5]);
        state.run_spawner(1.0 / 60.0, &mut rng);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_event_cues() {
        assert_eq!(GameEvent::Jump.cue(), Some(Cue::Jump));
        assert_eq!(GameEvent::Point { score: 4, milestone: false }.cue(), None);
        assert_eq!(GameEvent::Point { score: 5, milestone: true }.cue(), Some(Cue::Score));
        assert_eq!(GameEvent::Hit { score: 3 }.cue(), Some(Cue::Hit));
        assert_eq!(GameEvent::NewBest { best: 3 }.cue(), None);
    }
}
