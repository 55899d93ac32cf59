//! Core foundation for the Radar belief engine: configuration, error
//! types, and collection aliases shared by the analysis and storage crates.

pub mod config;
pub mod errors;
pub mod types;
