//! Controller configuration from TOML (`[controllers]` section)

use crate::sysfs::DEFAULT_CONTROLLER_ROOTS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw controller configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileControllersConfig {
    /// Directories searched for controllers, in order
    pub roots: Vec<PathBuf>,
    /// Controller used when `-ctrl` is not given
    pub default: Option<String>,
}

impl Default for FileControllersConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_CONTROLLER_ROOTS.iter().map(PathBuf::from).collect(),
            default: None,
        }
    }
}
