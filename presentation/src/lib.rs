//! Presentation layer for acpilight
//!
//! This crate contains the xbacklight-compatible CLI definition and
//! output formatters and fade progress reporting.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Action, Cli};
pub use cli::legacy::normalize_args;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::FadeReporter;
