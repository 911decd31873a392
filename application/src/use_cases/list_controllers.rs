//! List Controllers use case.

use crate::ports::brightness_device::DeviceError;
use crate::ports::controller_registry::ControllerRegistry;
use acpilight_domain::ControllerInfo;
use std::sync::Arc;
use tracing::debug;

/// Use case for enumerating every known controller
pub struct ListControllersUseCase {
    registry: Arc<dyn ControllerRegistry>,
}

impl ListControllersUseCase {
    pub fn new(registry: Arc<dyn ControllerRegistry>) -> Self {
        Self { registry }
    }

    /// Controllers in discovery order. An empty list is not an error here.
    pub fn execute(&self) -> Result<Vec<ControllerInfo>, DeviceError> {
        let controllers = self.registry.controllers()?;
        debug!("Found {} controllers", controllers.len());
        Ok(controllers)
    }
}
