//! CLI command definitions

use super::legacy::normalize_args;
use acpilight_application::FadeParams;
use acpilight_domain::{Adjustment, parse_amount};
use clap::{ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Print the configuration sources and exit
    ShowConfig,
    /// Print every controller name
    List,
    /// Print the brightness rounded to an integer
    Get,
    /// Print the brightness with two decimals
    GetFractional,
    /// Change the brightness
    Adjust(Adjustment),
}

/// CLI arguments for xbacklight
///
/// Options are spelled with a single dash (`-set 50`) for compatibility with
/// the X11 `xbacklight`; the double-dash form is accepted as well.
#[derive(Parser, Debug)]
#[command(name = "xbacklight")]
#[command(version, about = "Control backlight brightness")]
#[command(long_about = r#"
Control backlight and LED brightness on Linux using the sys filesystem,
with a user interface compatible with xbacklight.

Controllers are searched in /sys/class/backlight and /sys/class/leds.

Configuration files are loaded from (in priority order):
1. ACPILIGHT_<SECTION>__<KEY>   Environment overrides
2. -config <path>               Explicit config file
3. ./acpilight.toml             Project-level config
4. ~/.config/acpilight/config.toml   Global config

Example:
  xbacklight -get
  xbacklight -set 50
  xbacklight -inc 10 -time 300 -fps 60
  xbacklight -ctrl tpacpi::kbd_backlight =100
  xbacklight -- -10
"#)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["list", "getf", "get", "set", "inc", "dec", "percent", "show_config"])
))]
#[command(group(ArgGroup::new("fade_steps").args(["steps", "fps"])))]
pub struct Cli {
    /// List controllers
    #[arg(long)]
    pub list: bool,

    /// Get fractional brightness
    #[arg(long)]
    pub getf: bool,

    /// Get brightness
    #[arg(long)]
    pub get: bool,

    /// Set brightness
    #[arg(
        long,
        value_name = "PERCENT",
        allow_negative_numbers = true,
        value_parser = parse_percent
    )]
    pub set: Option<f64>,

    /// Increase brightness
    #[arg(
        long,
        value_name = "PERCENT",
        allow_negative_numbers = true,
        value_parser = parse_percent
    )]
    pub inc: Option<f64>,

    /// Decrease brightness
    #[arg(
        long,
        value_name = "PERCENT",
        allow_negative_numbers = true,
        value_parser = parse_percent
    )]
    pub dec: Option<f64>,

    /// [=+-]PERCENT to set, increase, decrease brightness
    #[arg(
        value_name = "PERCENT",
        allow_negative_numbers = true,
        value_parser = parse_adjustment
    )]
    pub percent: Option<Adjustment>,

    /// Set the controller to use
    #[arg(long, value_name = "NAME")]
    pub ctrl: Option<String>,

    /// Fading period (in milliseconds) [default: 200]
    #[arg(long, value_name = "MILLISECS")]
    pub time: Option<u64>,

    /// Fading steps [default: 0]
    #[arg(long, value_name = "N")]
    pub steps: Option<u32>,

    /// Fading frame rate [default: 0]
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Ignored
    #[arg(long, value_name = "DISPLAY")]
    pub display: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_percent(s: &str) -> Result<f64, String> {
    parse_amount(s).map_err(|e| e.to_string())
}

fn parse_adjustment(s: &str) -> Result<Adjustment, String> {
    s.parse().map_err(|e: acpilight_domain::DomainError| e.to_string())
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long options
    pub fn parse_legacy() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse the given arguments (first item is the program name)
    pub fn try_parse_legacy_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// The selected action; `None` only if clap's group check was bypassed
    pub fn action(&self) -> Option<Action> {
        if self.show_config {
            Some(Action::ShowConfig)
        } else if self.list {
            Some(Action::List)
        } else if self.getf {
            Some(Action::GetFractional)
        } else if self.get {
            Some(Action::Get)
        } else if let Some(v) = self.set {
            Some(Action::Adjust(Adjustment::Set(v)))
        } else if let Some(v) = self.inc {
            Some(Action::Adjust(Adjustment::Increase(v)))
        } else if let Some(v) = self.dec {
            Some(Action::Adjust(Adjustment::Decrease(v)))
        } else {
            self.percent.map(Action::Adjust)
        }
    }

    /// Apply `-time`, `-steps` and `-fps` on top of configured defaults
    pub fn fade_params(&self, base: FadeParams) -> FadeParams {
        let mut params = base;
        if let Some(time) = self.time {
            params = params.with_time(time);
        }
        if let Some(steps) = self.steps {
            params = params.with_steps(steps);
        }
        if let Some(fps) = self.fps {
            params = params.with_fps(fps);
        }
        params
    }
}
