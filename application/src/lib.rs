//! Application layer for acpilight
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_FADE_TIME_MS, FadeParams};
pub use ports::{
    brightness_device::{BrightnessDevice, DeviceError},
    controller_registry::ControllerRegistry,
    progress::{FadeProgressNotifier, NoProgress},
};
pub use use_cases::adjust_brightness::{
    AdjustBrightnessInput, AdjustBrightnessOutput, AdjustBrightnessUseCase,
};
pub use use_cases::get_brightness::{BrightnessReading, GetBrightnessUseCase};
pub use use_cases::list_controllers::ListControllersUseCase;
