//! Endless Dash headless runner
//!
//! Plays a session with a simple look-ahead autopilot at a fixed 60 Hz and
//! prints the final snapshot as JSON.
//!
//! Usage: `endless-dash [seed] [seconds] [best-score-dir]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use endless_dash::audio::CueLog;
    use endless_dash::persistence::FileStore;
    use endless_dash::sim::seeded;
    use endless_dash::{Cue, Session, Tuning};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let dir = args.next().unwrap_or_else(|| ".".to_string());

    log::info!("Endless Dash (headless) seed={} seconds={}", seed, seconds);

    let store = FileStore::in_dir(&dir);
    let mut session = Session::new(Tuning::default(), seeded(seed), store, CueLog::new());

    let frame_ms = 1000.0 / 60.0;
    let frames = (seconds * 60.0) as u64;
    let mut pilot = autopilot::Autopilot::default();

    for frame in 0..frames {
        let input = pilot.decide(session.state());
        session.frame(frame as f64 * frame_ms, &input);
        if session.state().is_game_over() {
            log::info!("Run over after {} frames", frame);
            break;
        }
    }

    let audio = session.audio();
    log::info!(
        "Cues: {} jump, {} score, {} hit",
        audio.count(Cue::Jump),
        audio.count(Cue::Score),
        audio.count(Cue::Hit)
    );

    match session.snapshot().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Snapshot serialization failed: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use endless_dash::sim::{GameState, ObstacleKind, TickInput};

    /// Seconds of warning the pilot wants before an obstacle arrives
    const LOOKAHEAD_SECS: f32 = 0.22;

    /// Jumps over ground obstacles, ducks under high flyers
    #[derive(Default)]
    pub struct Autopilot {
        ducking: bool,
        holding: bool,
    }

    impl Autopilot {
        pub fn decide(&mut self, state: &GameState) -> TickInput {
            let mut input = TickInput::default();
            if state.is_game_over() {
                return input;
            }

            let player = state.player.hitbox();
            let reach = player.max.x + state.speed * LOOKAHEAD_SECS;
            let threat = state
                .obstacles
                .as_slice()
                .iter()
                .filter(|o| o.trailing_edge() > player.min.x && o.x < reach)
                .min_by(|a, b| a.x.total_cmp(&b.x));

            let (want_jump, want_duck) = match threat.map(|o| (o.kind, o.bounds())) {
                Some((ObstacleKind::Cluster { .. }, _)) => (true, false),
                Some((ObstacleKind::Flying { .. }, bounds)) => {
                    let duck_top = state.tuning.ground_y() - state.tuning.duck_size[1];
                    // Low flyers are jumped, high ones ducked under
                    if bounds.max.y > duck_top {
                        (true, false)
                    } else {
                        (false, true)
                    }
                }
                None => (false, false),
            };

            // Grounded means any earlier press has already landed
            if want_jump && state.player.grounded {
                input.jump_pressed = true;
                self.holding = true;
            } else if self.holding && !want_jump {
                input.jump_released = true;
                self.holding = false;
            }

            if want_duck && !self.ducking {
                input.duck_pressed = true;
                self.ducking = true;
            } else if !want_duck && self.ducking {
                input.duck_released = true;
                self.ducking = false;
            }
            // Duck presses are dropped while airborne; retry on landing
            if self.ducking && !state.player.ducking && state.player.grounded {
                input.duck_pressed = true;
            }

            // Starts the run from the Ready phase
            if !state.is_running() && !state.is_paused() {
                input.jump_pressed = true;
            }
            input
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use endless_dash::Tuning;
        use endless_dash::consts::*;
        use endless_dash::sim::{GamePhase, Obstacle};

        fn running_with_cluster(x: f32) -> GameState {
            let mut state = GameState::new(Tuning::default(), 0);
            state.phase = GamePhase::Running;
            state.obstacles.push(Obstacle {
                id: 1,
                x,
                y: GROUND_Y,
                width: 18.0,
                height: 36.0,
                scored: false,
                kind: ObstacleKind::Cluster {
                    pieces: 1,
                    scale: 1.0,
                },
            });
            state
        }

        #[test]
        fn test_presses_again_after_landing_while_holding() {
            let state = running_with_cluster(PLAYER_X + 60.0);
            let mut pilot = Autopilot {
                ducking: false,
                holding: true,
            };
            let input = pilot.decide(&state);
            assert!(input.jump_pressed);
            assert!(pilot.holding);
        }

        #[test]
        fn test_releases_once_clear() {
            let mut state = running_with_cluster(PLAYER_X + 60.0);
            let mut pilot = Autopilot::default();
            assert!(pilot.decide(&state).jump_pressed);

            state.obstacles.clear();
            state.player.grounded = false;
            let input = pilot.decide(&state);
            assert!(input.jump_released);
            assert!(!pilot.holding);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
