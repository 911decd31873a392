//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod brightness_device;
pub mod controller_registry;
pub mod progress;

#[cfg(test)]
pub(crate) mod testing;
