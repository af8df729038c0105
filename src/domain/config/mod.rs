//! Configuration domain module

mod app_config;
mod duration;

pub use app_config::{AppConfig, LinuxConfig, WindowsConfig, DEFAULT_LOG_LEVEL};
pub use duration::{Duration, DEFAULT_CACHE_TTL_SECS};
