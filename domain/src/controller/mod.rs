//! Controller identity

use std::path::{Path, PathBuf};

/// A discovered brightness controller (Entity)
///
/// `name` is the sysfs directory name (`intel_backlight`,
/// `tpacpi::kbd_backlight`) and is what users pass to `-ctrl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerInfo {
    name: String,
    path: PathBuf,
}

impl ControllerInfo {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for ControllerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_name() {
        let info = ControllerInfo::new("intel_backlight", "/sys/class/backlight/intel_backlight");
        assert_eq!(info.to_string(), "intel_backlight");
        assert_eq!(
            info.path(),
            Path::new("/sys/class/backlight/intel_backlight")
        );
    }
}
