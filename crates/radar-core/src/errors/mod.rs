//! Error handling for Radar.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod belief_error;
pub mod compare_error;
pub mod config_error;
pub mod storage_error;

pub use belief_error::BeliefError;
pub use compare_error::CompareError;
pub use config_error::ConfigError;
pub use storage_error::StorageError;
