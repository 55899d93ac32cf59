//! Engine configuration with 3-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default directory for belief snapshots, relative to the project root.
pub const DEFAULT_DATA_DIR: &str = "data/beliefs";

/// Configuration for the belief engine.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RADAR_DATA_DIR`)
/// 2. Project config (`radar.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Directory where belief snapshots are written and scanned.
    pub data_dir: PathBuf,
    /// Paired posterior draws per Monte Carlo comparison.
    pub comparison_samples: usize,
    /// Certainty floor for the default effectiveness ranking.
    pub min_certainty: f64,
    /// Certainty floor for the overhype ranking.
    pub overhype_min_certainty: f64,
    /// Default result count for top-k queries.
    pub default_top_k: usize,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            comparison_samples: 10_000,
            min_certainty: 0.1,
            overhype_min_certainty: 0.3,
            default_top_k: 10,
        }
    }
}

impl RadarConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// Reads `radar.toml` from `root` if present, then applies
    /// environment overrides on top. A missing config file is not an
    /// error; a malformed one is.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config = root.join("radar.toml");
        if project_config.exists() {
            let raw = std::fs::read_to_string(&project_config)?;
            config = toml::from_str(&raw)?;
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `RADAR_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("RADAR_DATA_DIR") {
            if !dir.is_empty() {
                self.data_dir = PathBuf::from(dir);
            }
        }
    }
}
