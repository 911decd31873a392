//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where appropriate.

mod controllers;
mod output;

pub use controllers::FileControllersConfig;
pub use output::FileOutputConfig;

use acpilight_application::FadeParams;
use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Controller discovery settings
    pub controllers: FileControllersConfig,
    /// Fade defaults (`time` in milliseconds, `steps`, `fps`)
    pub fade: FadeParams,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.controllers.roots.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                message: "controllers.roots is empty: no controller can be found".to_string(),
            });
        }

        if let Some(name) = &self.controllers.default
            && name.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                message: "controllers.default is empty, using the first controller found"
                    .to_string(),
            });
        }

        if self.fade.steps > 0 && self.fade.fps > 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                message: format!(
                    "fade.steps ({}) and fade.fps ({}) are both set; fps takes precedence",
                    self.fade.steps, self.fade.fps
                ),
            });
        }

        issues
    }

    /// The configured default controller, ignoring blank names
    pub fn default_controller(&self) -> Option<&str> {
        self.controllers
            .default
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[controllers]
roots = ["/tmp/backlight"]
default = "intel_backlight"

[fade]
time = 300
fps = 60

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.controllers.roots, vec![PathBuf::from("/tmp/backlight")]);
        assert_eq!(config.default_controller(), Some("intel_backlight"));
        assert_eq!(config.fade.time, 300);
        assert_eq!(config.fade.fps, 60);
        assert_eq!(config.fade.steps, 0);
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[fade]
steps = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fade.steps, 10);
        // Defaults should apply
        assert_eq!(config.fade.time, 200);
        assert_eq!(config.controllers.roots.len(), 2);
        assert!(config.controllers.default.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_empty_roots() {
        let mut config = FileConfig::default();
        config.controllers.roots.clear();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_validate_steps_and_fps() {
        let mut config = FileConfig::default();
        config.fade.steps = 5;
        config.fade.fps = 30;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("fps takes precedence"));
    }

    #[test]
    fn test_blank_default_controller() {
        let mut config = FileConfig::default();
        config.controllers.default = Some("  ".to_string());
        assert_eq!(config.default_controller(), None);
        assert_eq!(config.validate()[0].severity, Severity::Warning);
    }
}
