//! In-memory port implementations shared by the unit tests.

use super::brightness_device::{BrightnessDevice, DeviceError};
use super::controller_registry::ControllerRegistry;
use super::progress::FadeProgressNotifier;
use acpilight_domain::ControllerInfo;
use std::sync::{Arc, Mutex};

/// Device backed by a shared cell that records every write
#[derive(Clone)]
pub struct MemoryDevice {
    info: ControllerInfo,
    max: u64,
    raw: Arc<Mutex<u64>>,
    writes: Arc<Mutex<Vec<u64>>>,
}

impl MemoryDevice {
    pub fn new(name: &str, raw: u64, max: u64) -> Self {
        Self {
            info: ControllerInfo::new(name, format!("/memory/{name}")),
            max,
            raw: Arc::new(Mutex::new(raw)),
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn writes(&self) -> Vec<u64> {
        self.writes.lock().unwrap().clone()
    }
}

impl BrightnessDevice for MemoryDevice {
    fn info(&self) -> &ControllerInfo {
        &self.info
    }

    fn max_brightness(&self) -> u64 {
        self.max
    }

    fn raw_brightness(&self) -> Result<u64, DeviceError> {
        Ok(*self.raw.lock().unwrap())
    }

    fn write_raw_brightness(&self, raw: u64) -> Result<(), DeviceError> {
        *self.raw.lock().unwrap() = raw;
        self.writes.lock().unwrap().push(raw);
        Ok(())
    }
}

/// Registry over a fixed list of memory devices
pub struct MemoryRegistry {
    devices: Vec<MemoryDevice>,
}

impl MemoryRegistry {
    pub fn new(devices: Vec<MemoryDevice>) -> Self {
        Self { devices }
    }
}

impl ControllerRegistry for MemoryRegistry {
    fn controllers(&self) -> Result<Vec<ControllerInfo>, DeviceError> {
        Ok(self.devices.iter().map(|d| d.info.clone()).collect())
    }

    fn open(&self, info: &ControllerInfo) -> Result<Box<dyn BrightnessDevice>, DeviceError> {
        self.devices
            .iter()
            .find(|d| d.info == *info)
            .map(|d| Box::new(d.clone()) as Box<dyn BrightnessDevice>)
            .ok_or_else(|| DeviceError::UnknownController(info.name().to_string()))
    }
}

/// Progress notifier that records the percentages it sees
#[derive(Default)]
pub struct RecordingProgress {
    pub steps: Mutex<Vec<(usize, usize, f64)>>,
    pub completed: Mutex<bool>,
}

impl FadeProgressNotifier for RecordingProgress {
    fn on_step(&self, step: usize, total: usize, percent: f64, _raw: u64) {
        self.steps.lock().unwrap().push((step, total, percent));
    }

    fn on_fade_complete(&self, _controller: &ControllerInfo) {
        *self.completed.lock().unwrap() = true;
    }
}
