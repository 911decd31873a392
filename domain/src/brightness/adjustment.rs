//! Adjustment value object and the `[=+-]PERCENT` grammar

use super::{MAXIMUM_PERCENT, MINIMUM_PERCENT};
use crate::core::error::DomainError;
use crate::util::normalize;

/// A requested brightness change, in percent (Value Object)
///
/// Parsed from the positional `xbacklight` argument:
///
/// | input  | adjustment        |
/// |--------|-------------------|
/// | `=40`  | `Set(40.0)`       |
/// | `40`   | `Set(40.0)`       |
/// | `+10`  | `Increase(10.0)`  |
/// | `-10`  | `Decrease(10.0)`  |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Set(f64),
    Increase(f64),
    Decrease(f64),
}

impl Adjustment {
    /// The sign character used by the textual form
    pub fn sign(&self) -> char {
        match self {
            Adjustment::Set(_) => '=',
            Adjustment::Increase(_) => '+',
            Adjustment::Decrease(_) => '-',
        }
    }

    /// The percentage carried by this adjustment
    pub fn amount(&self) -> f64 {
        match self {
            Adjustment::Set(v) | Adjustment::Increase(v) | Adjustment::Decrease(v) => *v,
        }
    }

    /// Resolve the target percentage from the `current` one, clamped to 0..=100.
    ///
    /// A NaN amount leaves the brightness where it is.
    pub fn target_from(&self, current: f64) -> f64 {
        let target = match self {
            Adjustment::Set(v) => *v,
            Adjustment::Increase(v) => current + v,
            Adjustment::Decrease(v) => current - v,
        };
        let target = if target.is_nan() { current } else { target };
        normalize(target, MINIMUM_PERCENT, MAXIMUM_PERCENT)
    }
}

/// Parse the unsigned part of a request as a finite percentage.
pub fn parse_amount(s: &str) -> Result<f64, DomainError> {
    s.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DomainError::InvalidPercentValue(s.to_string()))
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.sign(), self.amount())
    }
}

impl std::str::FromStr for Adjustment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(DomainError::EmptyPercent)?;

        let (sign, rest) = match first {
            '=' | '+' | '-' => (first, &s[1..]),
            c if c.is_ascii_digit() => ('=', s),
            _ => return Err(DomainError::InvalidPercentPrefix(s.to_string())),
        };

        let value =
            parse_amount(rest).map_err(|_| DomainError::InvalidPercentValue(s.to_string()))?;

        Ok(match sign {
            '+' => Adjustment::Increase(value),
            '-' => Adjustment::Decrease(value),
            _ => Adjustment::Set(value),
        })
    }
}
