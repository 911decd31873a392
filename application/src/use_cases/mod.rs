pub mod adjust_brightness;
pub mod get_brightness;
pub mod list_controllers;
