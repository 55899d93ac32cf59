//! Snapshot save/load for the belief store.
//!
//! Filenames embed a fixed-width UTC timestamp
//! (`beliefs_YYYYMMDD_HHMMSS.json`) so the lexicographic maximum of the
//! directory listing is the most recent snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use radar_analysis::beliefs::{BeliefTracker, Evidence, TechniqueBelief};
use radar_core::config::RadarConfig;
use radar_core::errors::StorageError;

const SNAPSHOT_PREFIX: &str = "beliefs_";
const SNAPSHOT_SUFFIX: &str = ".json";
const FILENAME_STAMP: &str = "%Y%m%d_%H%M%S";

/// One persisted belief. Derived quantities are computed at save time for
/// external consumers of the file; the loader rebuilds them from
/// alpha/beta and ignores the stored copies.
#[derive(Debug, Serialize, Deserialize)]
struct BeliefRecord {
    technique: String,
    alpha: f64,
    beta_param: f64,
    last_updated: DateTime<Utc>,
    evidence_count: u64,
    mean_effectiveness: f64,
    variance: f64,
    certainty: f64,
}

impl BeliefRecord {
    fn from_belief(belief: &TechniqueBelief) -> Self {
        Self {
            technique: belief.technique.clone(),
            alpha: belief.alpha,
            beta_param: belief.beta,
            last_updated: belief.last_updated,
            evidence_count: belief.evidence_count,
            mean_effectiveness: belief.mean_effectiveness(),
            variance: belief.variance(),
            certainty: belief.certainty(),
        }
    }

    fn into_belief(self) -> TechniqueBelief {
        TechniqueBelief {
            technique: self.technique,
            alpha: self.alpha,
            beta: self.beta_param,
            last_updated: self.last_updated,
            evidence_count: self.evidence_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotMetadata {
    total_techniques: usize,
    total_evidence: usize,
    last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    beliefs: BTreeMap<String, BeliefRecord>,
    evidence_history: Vec<Evidence>,
    metadata: SnapshotMetadata,
}

/// Saves and loads belief snapshots under a data directory.
#[derive(Debug)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    /// Open a store rooted at `data_dir`, creating the directory if it
    /// does not exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Open the store at the configured data directory.
    pub fn from_config(config: &RadarConfig) -> Result<Self, StorageError> {
        Self::new(config.data_dir.clone())
    }

    /// Directory the store reads and writes.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Serialize the full belief store to a new timestamped snapshot,
    /// returning its path.
    ///
    /// The file is written to a `.tmp` sibling first and renamed into
    /// place, so readers never observe a partial snapshot.
    pub fn save(&self, tracker: &BeliefTracker) -> Result<PathBuf, StorageError> {
        let now = Utc::now();
        let snapshot = SnapshotFile {
            beliefs: tracker
                .beliefs()
                .map(|b| (b.technique.clone(), BeliefRecord::from_belief(b)))
                .collect(),
            evidence_history: tracker.evidence_log().to_vec(),
            metadata: SnapshotMetadata {
                total_techniques: tracker.technique_count(),
                total_evidence: tracker.evidence_count(),
                last_updated: now,
            },
        };

        let filename = format!(
            "{SNAPSHOT_PREFIX}{}{SNAPSHOT_SUFFIX}",
            now.format(FILENAME_STAMP)
        );
        let path = self.data_dir.join(&filename);
        let tmp_path = self.data_dir.join(format!("{filename}.tmp"));

        let raw = serde_json::to_vec_pretty(&snapshot)?;
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &path)?;

        info!(
            path = %path.display(),
            techniques = tracker.technique_count(),
            evidence = tracker.evidence_count(),
            "belief snapshot saved"
        );
        Ok(path)
    }

    /// Path of the most recent snapshot, if any.
    ///
    /// Candidates are matched by the `beliefs_*.json` naming pattern and
    /// ordered by filename; the fixed-width timestamp makes lexicographic
    /// order chronological.
    pub fn latest_snapshot(&self) -> Result<Option<PathBuf>, StorageError> {
        let mut latest: Option<String> = None;
        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            // Non-UTF-8 names can never match the snapshot pattern.
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with(SNAPSHOT_PREFIX) || !name.ends_with(SNAPSHOT_SUFFIX) {
                continue;
            }
            if latest.as_deref().map_or(true, |current| name > current) {
                latest = Some(name.to_string());
            }
        }
        Ok(latest.map(|name| self.data_dir.join(name)))
    }

    /// Fully deserialize the most recent snapshot into a tracker.
    ///
    /// Returns `Ok(None)` when no snapshot exists; any read or parse
    /// failure surfaces as a typed error for the caller to degrade on.
    pub fn load_latest(&self) -> Result<Option<BeliefTracker>, StorageError> {
        let Some(path) = self.latest_snapshot()? else {
            return Ok(None);
        };

        let raw = fs::read_to_string(&path)?;
        let snapshot: SnapshotFile = serde_json::from_str(&raw)?;

        let tracker = BeliefTracker::from_parts(
            snapshot.beliefs.into_values().map(BeliefRecord::into_belief),
            snapshot.evidence_history,
        );

        info!(
            path = %path.display(),
            techniques = tracker.technique_count(),
            evidence = tracker.evidence_count(),
            "belief snapshot loaded"
        );
        Ok(Some(tracker))
    }

    /// Load the most recent snapshot, degrading to an empty store on any
    /// failure. Missing state is normal at first start; a corrupt
    /// snapshot is logged and skipped rather than propagated.
    pub fn load_or_default(&self) -> BeliefTracker {
        match self.load_latest() {
            Ok(Some(tracker)) => tracker,
            Ok(None) => {
                debug!(data_dir = %self.data_dir.display(), "no prior snapshot, starting empty");
                BeliefTracker::new()
            }
            Err(error) => {
                warn!(
                    data_dir = %self.data_dir.display(),
                    error = %error,
                    "could not load previous beliefs, starting empty"
                );
                BeliefTracker::new()
            }
        }
    }
}
