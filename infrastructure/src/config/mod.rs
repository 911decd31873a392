//! Configuration file loading for acpilight
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `ACPILIGHT_<SECTION>__<KEY>` (e.g. `ACPILIGHT_FADE__TIME=300`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./acpilight.toml` or `./.acpilight.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/acpilight/config.toml`
//! 5. Default values
//!
//! Command-line flags override all of these; the binary applies them.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileControllersConfig, FileOutputConfig, Severity,
};
pub use loader::ConfigLoader;
