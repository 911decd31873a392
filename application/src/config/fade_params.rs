//! Fade parameters — brightness sweep control.
//!
//! [`FadeParams`] groups the user-facing knobs that control how
//! [`AdjustBrightnessUseCase`](crate::use_cases::adjust_brightness::AdjustBrightnessUseCase)
//! spreads a change over time. They resolve into a domain
//! [`FadePlan`] before use.

use acpilight_domain::FadePlan;
use serde::{Deserialize, Serialize};

/// Default fading period in milliseconds
pub const DEFAULT_FADE_TIME_MS: u64 = 200;

/// Fade control parameters.
///
/// `steps` and `fps` are alternatives: a non-zero `fps` derives the step
/// count from the fading period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeParams {
    /// Fading period in milliseconds.
    pub time: u64,
    /// Number of writes used to reach the target.
    pub steps: u32,
    /// Frame rate used to derive `steps` from `time`.
    pub fps: u32,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            time: DEFAULT_FADE_TIME_MS,
            steps: 0,
            fps: 0,
        }
    }
}

impl FadeParams {
    // ==================== Builder Methods ====================

    pub fn with_time(mut self, millis: u64) -> Self {
        self.time = millis;
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self.fps = 0;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self.steps = 0;
        self
    }

    /// Resolve into a domain plan
    pub fn plan(&self) -> FadePlan {
        FadePlan::new(self.time, self.steps, self.fps)
    }
}
