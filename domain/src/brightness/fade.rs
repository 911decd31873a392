//! Fade planning
//!
//! A fade reaches a target brightness through `steps` evenly spaced writes
//! spread over `time`. The last write is always the exact target.

use std::time::Duration;

/// Resolved fade parameters (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePlan {
    steps: u32,
    time: Duration,
}

impl FadePlan {
    /// Build a plan from the user-facing triple.
    ///
    /// A non-zero `fps` overrides `steps` with `fps / 1000 * time_ms`,
    /// truncated.
    pub fn new(time_ms: u64, steps: u32, fps: u32) -> Self {
        let steps = if fps > 0 {
            let derived = u64::from(fps).saturating_mul(time_ms) / 1000;
            u32::try_from(derived).unwrap_or(u32::MAX)
        } else {
            steps
        };

        Self {
            steps,
            time: Duration::from_millis(time_ms),
        }
    }

    /// A plan that writes the target in one go
    pub fn instant() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn time(&self) -> Duration {
        self.time
    }

    /// Whether the change should be written directly, without sweeping
    pub fn is_instant(&self) -> bool {
        self.steps <= 1 || self.time < Duration::from_millis(1)
    }

    /// Pause between two consecutive writes
    pub fn step_delay(&self) -> Duration {
        if self.steps == 0 {
            return Duration::ZERO;
        }
        self.time / self.steps
    }

    /// The sequence of percentages to write to go from `current` to `target`.
    pub fn values(&self, current: f64, target: f64) -> FadeSteps {
        FadeSteps {
            current,
            target,
            steps: u64::from(self.steps.max(1)),
            next: 1,
        }
    }
}

/// Iterator over the intermediate values of a fade, ending on the target
#[derive(Debug, Clone)]
pub struct FadeSteps {
    current: f64,
    target: f64,
    steps: u64,
    next: u64,
}

impl Iterator for FadeSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.steps {
            return None;
        }
        let step = self.next;
        self.next += 1;

        if step == self.steps {
            Some(self.target)
        } else {
            let delta = self.target - self.current;
            Some(self.current + delta * step as f64 / self.steps as f64)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FadeSteps {}
