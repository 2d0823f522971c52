use std::time::Duration;

use rand::Rng;

/// How often the task loop advances the simulated progress.
pub const PROGRESS_TICK: Duration = Duration::from_millis(200);

/// The simulator never passes this on its own; only `complete()` reaches 100.
pub const PROGRESS_CEILING: f32 = 99.0;

const MAX_STEP: f32 = 1.2;

/// Simulated progress for user feedback while a prediction request is in
/// flight. Values are monotonically non-decreasing, capped at 99 until the
/// real result settles, and hit exactly 100 once via `complete()`. Timing
/// lives with the caller; this is just the state machine.
#[derive(Debug, Default)]
pub struct ProgressSimulator {
    value: f32,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advances by a random increment, saturating at the ceiling.
    pub fn advance(&mut self) -> f32 {
        if self.value < PROGRESS_CEILING {
            let step = rand::rng().random_range(0.0..MAX_STEP);
            self.value = (self.value + step).min(PROGRESS_CEILING);
        }
        self.value
    }

    /// Forces completion once the real request has settled.
    pub fn complete(&mut self) -> f32 {
        self.value = 100.0;
        self.value
    }
}
