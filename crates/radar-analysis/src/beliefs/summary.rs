//! Aggregated belief summary for downstream reporting.

use radar_core::config::RadarConfig;
use serde::Serialize;

use super::ranking::RankedTechnique;
use super::tracker::BeliefTracker;

/// Techniques listed per highlight category.
const HIGHLIGHT_K: usize = 5;

/// One-shot aggregation of the current belief state — everything the
/// report layer needs in a single structure.
#[derive(Debug, Clone, Serialize)]
pub struct BeliefSummary {
    pub total_techniques: usize,
    pub total_evidence: usize,
    pub most_promising: Vec<String>,
    pub most_overhyped: Vec<String>,
    pub most_uncertain: Vec<String>,
    pub top_ranking: Vec<RankedTechnique>,
}

impl BeliefTracker {
    /// Summarize the current belief state under the default thresholds.
    pub fn generate_summary(&self) -> BeliefSummary {
        self.generate_summary_with_config(&RadarConfig::default())
    }

    /// Summarize the current belief state under host-configured
    /// certainty floors and ranking depth.
    pub fn generate_summary_with_config(&self, config: &RadarConfig) -> BeliefSummary {
        BeliefSummary {
            total_techniques: self.technique_count(),
            total_evidence: self.evidence_count(),
            most_promising: self.most_promising_above(config.min_certainty, HIGHLIGHT_K),
            most_overhyped: self
                .most_overhyped_above(config.overhype_min_certainty, HIGHLIGHT_K),
            most_uncertain: self.uncertain(HIGHLIGHT_K),
            top_ranking: self
                .ranking(config.min_certainty)
                .into_iter()
                .take(config.default_top_k)
                .collect(),
        }
    }
}
