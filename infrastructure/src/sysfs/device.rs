//! A single sysfs controller

use super::{BRIGHTNESS_FILE, MAX_BRIGHTNESS_FILE};
use acpilight_application::{BrightnessDevice, DeviceError};
use acpilight_domain::ControllerInfo;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Controller backed by the `brightness` / `max_brightness` files of a
/// sysfs device directory.
///
/// `max_brightness` is read once on [`open`](SysfsController::open); the
/// current brightness is re-read on every access since other tools (or the
/// firmware, on hotkeys) change it behind our back.
#[derive(Debug)]
pub struct SysfsController {
    info: ControllerInfo,
    brightness_path: PathBuf,
    max_brightness: u64,
}

impl SysfsController {
    /// Open the controller described by `info`.
    pub fn open(info: ControllerInfo) -> Result<Self, DeviceError> {
        let max_path = info.path().join(MAX_BRIGHTNESS_FILE);
        let max_brightness = read_value(&max_path)?;
        if max_brightness == 0 {
            return Err(DeviceError::ZeroMaxBrightness {
                path: info.path().to_path_buf(),
            });
        }

        let brightness_path = info.path().join(BRIGHTNESS_FILE);
        debug!(
            "Opened {} (max_brightness {})",
            brightness_path.display(),
            max_brightness
        );

        Ok(Self {
            info,
            brightness_path,
            max_brightness,
        })
    }
}

impl BrightnessDevice for SysfsController {
    fn info(&self) -> &ControllerInfo {
        &self.info
    }

    fn max_brightness(&self) -> u64 {
        self.max_brightness
    }

    fn raw_brightness(&self) -> Result<u64, DeviceError> {
        read_value(&self.brightness_path)
    }

    fn write_raw_brightness(&self, raw: u64) -> Result<(), DeviceError> {
        fs::write(&self.brightness_path, raw.to_string())
            .map_err(|e| DeviceError::io(&self.brightness_path, e))
    }
}

fn read_value(path: &Path) -> Result<u64, DeviceError> {
    let content = fs::read_to_string(path).map_err(|e| DeviceError::io(path, e))?;
    content.trim().parse().map_err(|_| DeviceError::Parse {
        path: path.to_path_buf(),
        content: content.trim().to_string(),
    })
}
