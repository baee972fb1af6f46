//! Configuration domain module

mod app_config;
mod interval;

pub use app_config::{AppConfig, LocationConfig, DEFAULT_CAMERA_DEVICE, DEFAULT_MODEL};
pub use interval::{Interval, DEFAULT_MAX_DICTATION_SECS, DEFAULT_POLL_SECS};
