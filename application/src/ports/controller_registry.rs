//! Controller registry port
//!
//! Defines how controllers are discovered and opened.

use super::brightness_device::{BrightnessDevice, DeviceError};
use acpilight_domain::ControllerInfo;

/// Source of brightness controllers
///
/// Implementations live in the infrastructure layer (sysfs).
pub trait ControllerRegistry: Send + Sync {
    /// All controllers, in discovery order
    fn controllers(&self) -> Result<Vec<ControllerInfo>, DeviceError>;

    /// Open a discovered controller for reading and writing
    fn open(&self, info: &ControllerInfo) -> Result<Box<dyn BrightnessDevice>, DeviceError>;

    /// Pick a controller by name, or the first one when `name` is `None`.
    fn select(&self, name: Option<&str>) -> Result<ControllerInfo, DeviceError> {
        let controllers = self.controllers()?;

        match name {
            Some(name) => controllers
                .into_iter()
                .find(|c| c.name() == name)
                .ok_or_else(|| DeviceError::UnknownController(name.to_string())),
            None => controllers
                .into_iter()
                .next()
                .ok_or(DeviceError::NoControllers),
        }
    }

    /// Select and open in one go
    fn open_named(&self, name: Option<&str>) -> Result<Box<dyn BrightnessDevice>, DeviceError> {
        let info = self.select(name)?;
        self.open(&info)
    }
}
