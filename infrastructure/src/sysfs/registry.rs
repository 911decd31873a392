//! Controller discovery over a list of sysfs class directories

use super::{DEFAULT_CONTROLLER_ROOTS, SysfsController};
use acpilight_application::{BrightnessDevice, ControllerRegistry, DeviceError};
use acpilight_domain::ControllerInfo;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Registry that treats every entry of its root directories as a controller.
///
/// Roots are searched in order. Entries of a single root are sorted by name.
/// When two roots contain the same name, the later path wins but the name
/// keeps the position it was first seen at.
#[derive(Debug, Clone)]
pub struct SysfsControllerRegistry {
    roots: Vec<PathBuf>,
}

impl SysfsControllerRegistry {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl Default for SysfsControllerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLLER_ROOTS.iter().map(PathBuf::from).collect())
    }
}

impl ControllerRegistry for SysfsControllerRegistry {
    fn controllers(&self) -> Result<Vec<ControllerInfo>, DeviceError> {
        let mut controllers: Vec<ControllerInfo> = Vec::new();

        for root in &self.roots {
            if !root.is_dir() {
                debug!("Skipping missing controller root {}", root.display());
                continue;
            }

            let mut entries = fs::read_dir(root)
                .map_err(|e| DeviceError::io(root, e))?
                .map(|entry| entry.map(|e| (e.file_name(), e.path())))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| DeviceError::io(root, e))?;
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            for (name, path) in entries {
                let name = name.to_string_lossy().into_owned();
                trace!("Found controller {} at {}", name, path.display());
                let info = ControllerInfo::new(name, path);
                match controllers.iter_mut().find(|c| c.name() == info.name()) {
                    Some(existing) => *existing = info,
                    None => controllers.push(info),
                }
            }
        }

        Ok(controllers)
    }

    fn open(&self, info: &ControllerInfo) -> Result<Box<dyn BrightnessDevice>, DeviceError> {
        Ok(Box::new(SysfsController::open(info.clone())?))
    }
}
