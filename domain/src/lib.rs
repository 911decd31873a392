//! Domain layer for acpilight
//!
//! This crate contains the brightness arithmetic, the `[=+-]PERCENT`
//! request grammar and fade planning. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Controller
//!
//! A controller is a sysfs device directory exposing a `brightness` and a
//! `max_brightness` file. Its *raw* brightness is an integer in
//! `0..=max_brightness`; its *percent* brightness is `raw / max * 100`.
//!
//! ## Adjustment
//!
//! A request to set, increase or decrease the percent brightness, parsed
//! from the same grammar `xbacklight` accepts (`=50`, `+10`, `-5`, `75`).
//!
//! ## Fade
//!
//! Brightness changes can be spread over a period as a sequence of evenly
//! spaced writes. [`FadePlan`] resolves the user's time/steps/fps triple
//! into a step count and yields the intermediate values.

pub mod brightness;
pub mod controller;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use brightness::{
    MAXIMUM_PERCENT, MINIMUM_PERCENT, MINIMUM_RAW_BRIGHTNESS,
    adjustment::{Adjustment, parse_amount},
    clamp_raw,
    fade::{FadePlan, FadeSteps},
    percent_from_raw, raw_from_percent,
};
pub use controller::ControllerInfo;
pub use core::error::DomainError;
pub use util::normalize;
