//! Frame-driven session host
//!
//! Owns the simulation context and its collaborators. An external scheduler
//! (requestAnimationFrame, a native loop, a test) calls [`Session::frame`]
//! once per frame; the session turns the timestamp into a clamped delta, runs
//! exactly one tick and dispatches the tick's events to audio and storage.

use crate::audio::CuePlayer;
use crate::persistence::BestScoreStore;
use crate::sim::{FrameClock, GameEvent, GameState, RandomSource, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

pub struct Session<R, S, A> {
    state: GameState,
    clock: FrameClock,
    rng: R,
    store: S,
    audio: A,
    /// Last value successfully written to the store
    persisted_best: Option<u64>,
}

impl<R, S, A> Session<R, S, A>
where
    R: RandomSource,
    S: BestScoreStore,
    A: CuePlayer,
{
    /// Build a session, reading the stored best score once
    pub fn new(tuning: Tuning, rng: R, store: S, audio: A) -> Self {
        let stored = match store.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Could not load best score, starting from 0: {}", e);
                None
            }
        };
        let best = stored.unwrap_or(0);
        log::info!("Session ready (best {})", best);

        Self {
            clock: FrameClock::new(tuning.max_frame_dt),
            state: GameState::new(tuning, best),
            rng,
            store,
            audio,
            persisted_best: stored,
        }
    }

    /// Run one frame at timestamp `now_ms`; returns the events it produced
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> Vec<GameEvent> {
        let dt = self.clock.advance(now_ms);
        // Render-only frame while not running
        let dt = if self.state.is_running() { dt } else { 0.0 };
        self.step(dt, input)
    }

    /// Run one tick with an explicit delta (seconds)
    pub fn step(&mut self, dt: f32, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input, dt, &mut self.rng);
        let events = self.state.drain_events();
        for event in &events {
            self.dispatch(event);
        }
        events
    }

    fn dispatch(&mut self, event: &GameEvent) {
        if let Some(cue) = event.cue() {
            self.audio.play(cue);
        }
        if let GameEvent::NewBest { best } = *event {
            self.persist_best(best);
        }
    }

    /// Failed writes are logged and retried on the next improvement
    fn persist_best(&mut self, best: u64) {
        match self.store.save(best) {
            Ok(()) => self.persisted_best = Some(best),
            Err(e) => log::warn!("Best score {} not persisted: {}", best, e),
        }
    }

    /// Restart after game over (ignored otherwise)
    pub fn restart(&mut self) {
        if self.state.is_game_over() {
            self.state.restart();
            self.clock.reset();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best(&self) -> u64 {
        self.state.best
    }

    /// Last best score the store accepted
    pub fn persisted_best(&self) -> Option<u64> {
        self.persisted_best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
