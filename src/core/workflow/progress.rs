//! Cosmetic perceived-progress animation.
//!
//! The generation service reports no real progress, so the indicator advances
//! by random increments on a fixed tick while the request is in flight,
//! capped at 100%. Completion is driven solely by the request settling; the
//! animation never gates it.

use std::time::Duration;

use rand::Rng;

/// Tick interval of the animation.
pub(crate) const PROGRESS_TICK: Duration = Duration::from_millis(300);

/// Upper bound of one random increment, in percentage points.
const MAX_STEP: f32 = 15.0;

/// Monotonically advancing fake progress value.
#[derive(Debug, Default)]
pub struct ProgressAnimation {
    percent: f32,
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value (0–100).
    #[inline]
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Advance by a random step and return the new value.
    pub fn tick(&mut self) -> f32 {
        let step = rand::thread_rng().gen_range(0.0..MAX_STEP);
        self.percent = (self.percent + step).min(100.0);
        self.percent
    }
}
