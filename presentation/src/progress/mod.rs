//! Fade progress reporting

pub mod reporter;
