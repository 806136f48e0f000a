//! Audio cue interface
//!
//! The simulation only names its cues. Whatever plays them implements
//! [`CuePlayer`]; playback is fire-and-forget and never feeds back into state.

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Player left the ground
    Jump,
    /// Every fifth point
    Score,
    /// Run ended on an obstacle
    Hit,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Jump => "jump",
            Cue::Score => "score",
            Cue::Hit => "hit",
        }
    }
}

/// Something that can play cues
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Used when no audio backend is available
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl CuePlayer for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Records cues in order (headless runs, tests)
#[derive(Debug, Default, Clone)]
pub struct CueLog {
    pub played: Vec<Cue>,
    muted: bool,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute; muted cues are dropped
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }
}

impl CuePlayer for CueLog {
    fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        log::trace!("cue: {}", cue.as_str());
        self.played.push(cue);
    }
}
