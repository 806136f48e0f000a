//! WASM bindings for the browser host
//!
//! JavaScript forwards DOM input events and calls `frame` from
//! `requestAnimationFrame`. Rendering and audio stay on the JS side: the
//! snapshot is handed out as JSON and cues are drained as names.

use js_sys::Array;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::audio::{Cue, CuePlayer};
use crate::persistence::LocalStorageStore;
use crate::session::Session;
use crate::sim::{TickInput, seeded};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Endless Dash starting...");
}

/// Cues waiting for the JS audio layer
#[derive(Debug, Default)]
struct CueQueue {
    pending: Vec<Cue>,
}

impl CuePlayer for CueQueue {
    fn play(&mut self, cue: Cue) {
        self.pending.push(cue);
    }
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session<Pcg32, LocalStorageStore, CueQueue>,
    /// One-shot inputs collected since the last frame
    input: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> WebGame {
        let tuning = match tuning_json.as_deref().map(Tuning::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        WebGame {
            session: Session::new(tuning, seeded(seed), LocalStorageStore, CueQueue::default()),
            input: TickInput::default(),
        }
    }

    pub fn jump_down(&mut self) {
        self.input.jump_pressed = true;
    }

    pub fn jump_up(&mut self) {
        self.input.jump_released = true;
    }

    pub fn duck_down(&mut self) {
        self.input.duck_pressed = true;
    }

    pub fn duck_up(&mut self) {
        self.input.duck_released = true;
    }

    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Advance one animation frame
    pub fn frame(&mut self, now_ms: f64) {
        let input = std::mem::take(&mut self.input);
        self.session.frame(now_ms, &input);
    }

    /// Presentation snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        self.session.snapshot().to_json().unwrap_or_else(|e| {
            log::warn!("Snapshot serialization failed: {}", e);
            String::from("{}")
        })
    }

    /// Drain cue names ("jump", "score", "hit") fired since the last call
    pub fn take_cues(&mut self) -> Array {
        self.session
            .audio_mut()
            .pending
            .drain(..)
            .map(|cue| JsValue::from_str(cue.as_str()))
            .collect()
    }

    pub fn best(&self) -> f64 {
        self.session.best() as f64
    }
}
