//! Linux sysfs adapters.
//!
//! Backlight panels live under `/sys/class/backlight`, keyboard and other
//! LEDs under `/sys/class/leds`. Every entry of those directories is a
//! controller exposing a `brightness` and a `max_brightness` file.

mod device;
mod registry;

pub use device::SysfsController;
pub use registry::SysfsControllerRegistry;

/// Directories searched for controllers, in order
pub const DEFAULT_CONTROLLER_ROOTS: [&str; 2] = ["/sys/class/backlight", "/sys/class/leds"];

/// File holding the current raw brightness
pub const BRIGHTNESS_FILE: &str = "brightness";

/// File holding the maximum raw brightness
pub const MAX_BRIGHTNESS_FILE: &str = "max_brightness";
