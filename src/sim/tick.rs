//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by one frame. Order is fixed:
//! time, speed ramp, scroll, spawner, player, obstacles, collision.

use super::clock::clamp_dt;
use super::collision::first_hit;
use super::player::JumpOutcome;
use super::random::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete input events collected since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub duck_pressed: bool,
    pub duck_released: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart request (honored only after game over)
    pub restart: bool,
}

impl TickInput {
    pub fn jump() -> Self {
        Self {
            jump_pressed: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut dyn RandomSource) {
    let dt = clamp_dt(dt, state.tuning.max_frame_dt);

    if input.restart && state.phase == GamePhase::GameOver {
        state.restart();
    }

    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                log::info!("Paused at {:.2}s", state.time);
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    apply_input(state, input);

    // Don't advance unless running
    if state.phase != GamePhase::Running {
        return;
    }

    state.time += dt;
    state.speed = (state.speed + state.tuning.speed_accel * dt).min(state.tuning.max_speed);
    state.distance += state.speed * dt;

    state.run_spawner(dt, rng);

    state.player.step(dt, &state.tuning);

    let scored = state
        .obstacles
        .step(dt, state.speed, state.time, state.tuning.despawn_margin);
    for _ in 0..scored {
        state.score += 1;
        let milestone = state.score % state.tuning.score_cue_every == 0;
        state.events.push(GameEvent::Point {
            score: state.score,
            milestone,
        });
    }

    resolve_collision(state);
}

/// Apply discrete input events for this frame
///
/// Presses go before releases: a tap that starts and ends between two
/// frames arrives as both flags and must end up released.
fn apply_input(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    if input.jump_pressed && state.phase == GamePhase::Ready {
        state.phase = GamePhase::Running;
        log::info!("Run started (best {})", state.best);
    }

    if state.phase == GamePhase::Running {
        if input.jump_pressed
            && state.player.on_jump_press(&state.tuning) == JumpOutcome::Launched
        {
            state.events.push(GameEvent::Jump);
        }
        if input.duck_pressed {
            state.player.on_duck_press();
        }
    }

    // Releases only clear held state, so they apply even while paused
    if input.jump_released {
        state.player.on_jump_release();
    }
    if input.duck_released {
        state.player.on_duck_release();
    }
}

/// End the run on the first overlapping obstacle, if any
fn resolve_collision(state: &mut GameState) {
    let hitbox = state.player.hitbox();
    let Some(index) = first_hit(&hitbox, state.obstacles.as_slice()) else {
        return;
    };

    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::Hit { score: state.score });
    log::info!(
        "Game over: hit obstacle #{} at {:.2}s, score {}",
        state.obstacles.as_slice()[index].id,
        state.time,
        state.score
    );

    if state.score > state.best {
        state.best = state.score;
        state.events.push(GameEvent::NewBest { best: state.best });
        log::info!("New best score: {}", state.best);
    }
}
