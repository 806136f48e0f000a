//! Frame clock
//!
//! Turns animation-frame timestamps into the clamped delta the simulation
//! consumes. One delta per frame, never more than `max_dt`.

use crate::consts::MAX_FRAME_DT;

/// Sanitize a raw frame delta (seconds)
///
/// Negative, NaN and infinite inputs become zero advance; anything else is
/// capped at `max_dt` so a suspended tab or slow frame cannot destabilize
/// integration.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

/// Converts successive frame timestamps (milliseconds) into deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Delta (seconds) since the previous timestamp, clamped
    ///
    /// The first call only primes the clock and returns zero. Timestamps
    /// that go backwards also yield zero.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms.is_finite() => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        clamp_dt(dt, self.max_dt)
    }

    /// Forget the previous timestamp (after a restart or resume from background)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
