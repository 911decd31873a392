//! Console output formatter
//!
//! stdout carries bare values so scripts can consume them; diagnostics go to
//! stderr and may be colored.

use acpilight_application::BrightnessReading;
use acpilight_domain::ControllerInfo;
use colored::Colorize;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable colors for everything this process prints
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    pub fn format_brightness(reading: &BrightnessReading) -> String {
        format!("{:.0}", reading.percent())
    }

    pub fn format_fractional(reading: &BrightnessReading) -> String {
        format!("{:.2}", reading.percent())
    }

    pub fn format_controllers(controllers: &[ControllerInfo]) -> String {
        controllers
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Error line for stderr: `xbacklight: <message>`
    pub fn format_error(message: &dyn std::fmt::Display) -> String {
        format!("{} {}", "xbacklight:".red().bold(), message)
    }

    /// Warning line for stderr: `xbacklight: warning: <message>`
    pub fn format_warning(message: &dyn std::fmt::Display) -> String {
        format!(
            "{} {} {}",
            "xbacklight:".bold(),
            "warning:".yellow().bold(),
            message
        )
    }
}
