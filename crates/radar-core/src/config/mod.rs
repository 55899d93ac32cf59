//! Radar configuration.

pub mod radar_config;

pub use radar_config::RadarConfig;
