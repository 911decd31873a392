//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Empty brightness request, expected [=+-]PERCENT")]
    EmptyPercent,

    #[error("Invalid brightness request '{0}': must start with '=', '+', '-' or a digit")]
    InvalidPercentPrefix(String),

    #[error("Invalid brightness request '{0}': not a finite number")]
    InvalidPercentValue(String),
}
