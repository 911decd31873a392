//! Application-level configuration.
//!
//! - [`FadeParams`] — how a brightness change is spread over time

pub mod fade_params;

pub use fade_params::{DEFAULT_FADE_TIME_MS, FadeParams};
