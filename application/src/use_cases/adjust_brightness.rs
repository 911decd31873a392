//! Adjust Brightness use case.
//!
//! Sets, increases or decreases a controller's brightness, optionally
//! fading through evenly spaced intermediate values:
//!
//! 1. Resolve the target from the current brightness (clamped to 0..=100)
//! 2. Do nothing when the target equals the current brightness
//! 3. Write the target directly when the fade is instant
//! 4. Otherwise write each [`FadePlan`] step, sleeping `time / steps` after each

use crate::config::FadeParams;
use crate::ports::brightness_device::{BrightnessDevice, DeviceError};
use crate::ports::controller_registry::ControllerRegistry;
use crate::ports::progress::{FadeProgressNotifier, NoProgress};
use acpilight_domain::{Adjustment, ControllerInfo, FadePlan};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the [`AdjustBrightnessUseCase`].
#[derive(Debug, Clone)]
pub struct AdjustBrightnessInput {
    /// Controller name; `None` selects the first controller found.
    pub controller: Option<String>,
    /// The requested change.
    pub adjustment: Adjustment,
    /// How the change is spread over time.
    pub fade: FadeParams,
}

impl AdjustBrightnessInput {
    pub fn new(adjustment: Adjustment) -> Self {
        Self {
            controller: None,
            adjustment,
            fade: FadeParams::default(),
        }
    }

    pub fn with_controller(mut self, name: impl Into<String>) -> Self {
        self.controller = Some(name.into());
        self
    }

    pub fn with_fade(mut self, fade: FadeParams) -> Self {
        self.fade = fade;
        self
    }
}

/// What the use case did.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustBrightnessOutput {
    pub controller: ControllerInfo,
    /// Percent brightness before the change.
    pub from: f64,
    /// Clamped percent target.
    pub target: f64,
    /// Number of writes performed (0 when already at target).
    pub writes: usize,
}

/// Use case for changing a controller's brightness
pub struct AdjustBrightnessUseCase {
    registry: Arc<dyn ControllerRegistry>,
}

impl AdjustBrightnessUseCase {
    pub fn new(registry: Arc<dyn ControllerRegistry>) -> Self {
        Self { registry }
    }

    /// Execute without progress reporting
    pub async fn execute(
        &self,
        input: AdjustBrightnessInput,
    ) -> Result<AdjustBrightnessOutput, DeviceError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks for every write
    pub async fn execute_with_progress(
        &self,
        input: AdjustBrightnessInput,
        progress: &dyn FadeProgressNotifier,
    ) -> Result<AdjustBrightnessOutput, DeviceError> {
        let device = self.registry.open_named(input.controller.as_deref())?;
        let plan = input.fade.plan();
        adjust(device.as_ref(), input.adjustment, plan, progress).await
    }
}

async fn adjust(
    device: &dyn BrightnessDevice,
    adjustment: Adjustment,
    plan: FadePlan,
    progress: &dyn FadeProgressNotifier,
) -> Result<AdjustBrightnessOutput, DeviceError> {
    let controller = device.info().clone();
    let from = device.brightness()?;
    let target = adjustment.target_from(from);

    let mut output = AdjustBrightnessOutput {
        controller,
        from,
        target,
        writes: 0,
    };

    if from == target {
        debug!("{}: already at {:.2}%", output.controller, target);
        return Ok(output);
    }

    let plan = if plan.is_instant() {
        FadePlan::instant()
    } else {
        plan
    };

    info!(
        "{}: {:.2}% -> {:.2}% ({} steps over {:?})",
        output.controller,
        from,
        target,
        plan.steps().max(1),
        plan.time()
    );
    progress.on_fade_start(&output.controller, &plan, from, target);

    let delay = plan.step_delay();
    let steps = plan.values(from, target);
    let total = steps.len();
    for (index, value) in steps.enumerate() {
        let raw = device.set_brightness(value)?;
        output.writes += 1;
        debug!("step {}/{}: {:.2}% (raw {})", index + 1, total, value, raw);
        progress.on_step(index + 1, total, value, raw);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    progress.on_fade_complete(&output.controller);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::testing::{MemoryDevice, MemoryRegistry, RecordingProgress};

    fn use_case(device: &MemoryDevice) -> AdjustBrightnessUseCase {
        AdjustBrightnessUseCase::new(Arc::new(MemoryRegistry::new(vec![device.clone()])))
    }

    #[tokio::test]
    async fn test_instant_set() {
        let device = MemoryDevice::new("intel_backlight", 20, 100);
        let output = use_case(&device)
            .execute(AdjustBrightnessInput::new(Adjustment::Set(75.0)))
            .await
            .unwrap();

        assert_eq!(device.writes(), vec![75]);
        assert_eq!(output.writes, 1);
        assert_eq!(output.from, 20.0);
        assert_eq!(output.target, 75.0);
    }

    #[tokio::test]
    async fn test_nan_request_leaves_device_untouched() {
        let device = MemoryDevice::new("intel_backlight", 50, 100);
        let output = use_case(&device)
            .execute(AdjustBrightnessInput::new(Adjustment::Set(f64::NAN)))
            .await
            .unwrap();

        assert!(device.writes().is_empty());
        assert_eq!(output.writes, 0);
        assert_eq!(output.target, 50.0);
    }

    #[tokio::test]
    async fn test_noop_when_already_at_target() {
        let device = MemoryDevice::new("intel_backlight", 50, 100);
        let output = use_case(&device)
            .execute(AdjustBrightnessInput::new(Adjustment::Set(50.0)))
            .await
            .unwrap();

        assert!(device.writes().is_empty());
        assert_eq!(output.writes, 0);
    }

    #[tokio::test]
    async fn test_increase_is_clamped() {
        let device = MemoryDevice::new("intel_backlight", 90, 100);
        use_case(&device)
            .execute(AdjustBrightnessInput::new(Adjustment::Increase(30.0)))
            .await
            .unwrap();

        assert_eq!(device.writes(), vec![100]);
    }

    #[tokio::test]
    async fn test_decrease_below_zero_is_clamped() {
        let device = MemoryDevice::new("intel_backlight", 10, 100);
        use_case(&device)
            .execute(AdjustBrightnessInput::new(Adjustment::Decrease(25.0)))
            .await
            .unwrap();

        assert_eq!(device.writes(), vec![0]);
    }

    #[tokio::test]
    async fn test_fade_with_steps() {
        let device = MemoryDevice::new("intel_backlight", 20, 100);
        let progress = RecordingProgress::default();
        let input = AdjustBrightnessInput::new(Adjustment::Set(60.0))
            .with_fade(FadeParams::default().with_time(4).with_steps(4));

        let output = use_case(&device)
            .execute_with_progress(input, &progress)
            .await
            .unwrap();

        assert_eq!(device.writes(), vec![30, 40, 50, 60]);
        assert_eq!(output.writes, 4);
        let steps = progress.steps.lock().unwrap().clone();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3], (4, 4, 60.0));
        assert!(*progress.completed.lock().unwrap());
    }

    #[tokio::test]
    async fn test_fade_with_fps() {
        let device = MemoryDevice::new("intel_backlight", 0, 100);
        let input = AdjustBrightnessInput::new(Adjustment::Set(100.0))
            .with_fade(FadeParams::default().with_time(20).with_fps(600));

        let output = use_case(&device).execute(input).await.unwrap();

        let writes = device.writes();
        assert_eq!(writes.len(), 12);
        assert_eq!(output.writes, 12);
        assert_eq!(writes.last(), Some(&100));
        assert!(writes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_zero_time_is_instant() {
        let device = MemoryDevice::new("intel_backlight", 0, 100);
        let input = AdjustBrightnessInput::new(Adjustment::Set(40.0))
            .with_fade(FadeParams::default().with_time(0).with_steps(10));

        use_case(&device).execute(input).await.unwrap();

        assert_eq!(device.writes(), vec![40]);
    }

    #[tokio::test]
    async fn test_named_controller() {
        let backlight = MemoryDevice::new("intel_backlight", 10, 100);
        let keyboard = MemoryDevice::new("tpacpi::kbd_backlight", 0, 2);
        let registry = Arc::new(MemoryRegistry::new(vec![
            backlight.clone(),
            keyboard.clone(),
        ]));

        AdjustBrightnessUseCase::new(registry)
            .execute(
                AdjustBrightnessInput::new(Adjustment::Set(100.0))
                    .with_controller("tpacpi::kbd_backlight"),
            )
            .await
            .unwrap();

        assert!(backlight.writes().is_empty());
        assert_eq!(keyboard.writes(), vec![2]);
    }
}
