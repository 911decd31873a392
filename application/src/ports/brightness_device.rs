//! Brightness device port
//!
//! Defines the interface to a single brightness controller.

use acpilight_domain::{ControllerInfo, clamp_raw, percent_from_raw, raw_from_percent};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or driving a controller
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Permission denied writing {}; install the acpilight udev rules and join the 'video' group",
        path.display()
    )]
    PermissionDenied { path: PathBuf },

    #[error("Cannot parse '{content}' read from {}", path.display())]
    Parse { path: PathBuf, content: String },

    #[error("Controller at {} reports a maximum brightness of 0", path.display())]
    ZeroMaxBrightness { path: PathBuf },

    #[error("{0} is not amongst the valid controllers. Please specify a valid name.")]
    UnknownController(String),

    #[error("No backlight or LED controllers found")]
    NoControllers,
}

impl DeviceError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            DeviceError::PermissionDenied { path }
        } else {
            DeviceError::Io { path, source }
        }
    }
}

/// A single brightness controller
///
/// Implementations only provide raw access; percent handling and clamping
/// are shared through the provided methods.
pub trait BrightnessDevice: Send + Sync {
    /// Identity of the controller
    fn info(&self) -> &ControllerInfo;

    /// Maximum raw value, read once when the device is opened
    fn max_brightness(&self) -> u64;

    /// Current raw value
    fn raw_brightness(&self) -> Result<u64, DeviceError>;

    /// Store a raw value as-is. Callers go through [`set_raw_brightness`].
    ///
    /// [`set_raw_brightness`]: BrightnessDevice::set_raw_brightness
    fn write_raw_brightness(&self, raw: u64) -> Result<(), DeviceError>;

    /// Clamp `raw` into `0..=max` and store it, returning the stored value.
    fn set_raw_brightness(&self, raw: i64) -> Result<u64, DeviceError> {
        let value = clamp_raw(raw, self.max_brightness());
        self.write_raw_brightness(value)?;
        Ok(value)
    }

    /// Current brightness as a percentage of the maximum
    fn brightness(&self) -> Result<f64, DeviceError> {
        Ok(percent_from_raw(
            self.raw_brightness()?,
            self.max_brightness(),
        ))
    }

    /// Store a percentage, truncated to the controller's resolution.
    fn set_brightness(&self, percent: f64) -> Result<u64, DeviceError> {
        self.set_raw_brightness(raw_from_percent(percent, self.max_brightness()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::testing::MemoryDevice;

    #[test]
    fn test_set_raw_brightness_clamps() {
        let device = MemoryDevice::new("acpi_video0", 5, 100);
        assert_eq!(device.set_raw_brightness(15).unwrap(), 15);
        assert_eq!(device.raw_brightness().unwrap(), 15);

        assert_eq!(device.set_raw_brightness(250).unwrap(), 100);
        assert_eq!(device.set_raw_brightness(-4).unwrap(), 0);
    }

    #[test]
    fn test_percent_round_trip_truncates() {
        let device = MemoryDevice::new("intel_backlight", 0, 937);
        assert_eq!(device.set_brightness(50.0).unwrap(), 468);
        let percent = device.brightness().unwrap();
        assert!((percent - 49.946).abs() < 0.001);
    }

    #[test]
    fn test_io_permission_denied_is_mapped() {
        let err = DeviceError::io(
            "/sys/class/backlight/x/brightness",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, DeviceError::PermissionDenied { .. }));
        assert!(err.to_string().contains("video"));
    }

    #[test]
    fn test_unknown_controller_message() {
        let err = DeviceError::UnknownController("foo".to_string());
        assert_eq!(
            err.to_string(),
            "foo is not amongst the valid controllers. Please specify a valid name."
        );
    }
}
