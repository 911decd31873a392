//! Fade progress port
//!
//! Defines the interface for observing a brightness sweep.

use acpilight_domain::{ControllerInfo, FadePlan};

/// Callback for progress updates while a fade runs
///
/// Implementations live in the presentation layer.
pub trait FadeProgressNotifier: Send + Sync {
    /// Called once before the first write
    fn on_fade_start(&self, _controller: &ControllerInfo, _plan: &FadePlan, _from: f64, _to: f64) {
    }

    /// Called after each write; `step` is 1-based
    fn on_step(&self, step: usize, total: usize, percent: f64, raw: u64);

    /// Called after the last write
    fn on_fade_complete(&self, _controller: &ControllerInfo) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FadeProgressNotifier for NoProgress {
    fn on_step(&self, _step: usize, _total: usize, _percent: f64, _raw: u64) {}
}
