//! Infrastructure layer for acpilight
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the sysfs controller registry and
//! configuration file loading.

pub mod config;
pub mod sysfs;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileControllersConfig, FileOutputConfig, Severity,
};
pub use sysfs::{
    BRIGHTNESS_FILE, DEFAULT_CONTROLLER_ROOTS, MAX_BRIGHTNESS_FILE, SysfsController,
    SysfsControllerRegistry,
};
