//! Get Brightness use case.

use crate::ports::brightness_device::DeviceError;
use crate::ports::controller_registry::ControllerRegistry;
use acpilight_domain::{ControllerInfo, percent_from_raw};
use std::sync::Arc;
use tracing::debug;

/// A snapshot of one controller's brightness
#[derive(Debug, Clone, PartialEq)]
pub struct BrightnessReading {
    pub controller: ControllerInfo,
    pub raw: u64,
    pub max: u64,
}

impl BrightnessReading {
    /// Brightness as a percentage of the maximum
    pub fn percent(&self) -> f64 {
        percent_from_raw(self.raw, self.max)
    }
}

/// Use case for reading the current brightness
pub struct GetBrightnessUseCase {
    registry: Arc<dyn ControllerRegistry>,
}

impl GetBrightnessUseCase {
    pub fn new(registry: Arc<dyn ControllerRegistry>) -> Self {
        Self { registry }
    }

    /// Read the named controller, or the first one when `controller` is `None`.
    pub fn execute(&self, controller: Option<&str>) -> Result<BrightnessReading, DeviceError> {
        let device = self.registry.open_named(controller)?;
        let raw = device.raw_brightness()?;
        let max = device.max_brightness();
        debug!("{}: raw brightness {}/{}", device.info(), raw, max);

        Ok(BrightnessReading {
            controller: device.info().clone(),
            raw,
            max,
        })
    }
}
