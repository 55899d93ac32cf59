//! Evidence model — one observation about one technique.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use radar_core::errors::BeliefError;
use serde::{Deserialize, Serialize};

/// Source category of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    /// Reported result in a published paper.
    PaperResult,
    /// Repository popularity signals (stars, forks, activity).
    RepoPopularity,
    /// Adoption across the practitioner community.
    CommunityAdoption,
    /// Score on a standard benchmark.
    BenchmarkScore,
    /// Judgement from a domain expert.
    ExpertOpinion,
}

impl EvidenceType {
    /// Wire tag as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PaperResult => "paper_result",
            Self::RepoPopularity => "repo_popularity",
            Self::CommunityAdoption => "community_adoption",
            Self::BenchmarkScore => "benchmark_score",
            Self::ExpertOpinion => "expert_opinion",
        }
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One timestamped, sourced observation about a technique's effectiveness.
///
/// Immutable once constructed: the tracker appends evidence to its log and
/// never mutates or removes entries. `value` is the effectiveness signal
/// (1.0 = maximally positive), `confidence` the reliability weight of the
/// observation. Both are expected in `[0, 1]` and checked by
/// [`Evidence::validate`] at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    /// Technique identifier (e.g. "PPO").
    pub technique: String,
    /// Source category.
    pub evidence_type: EvidenceType,
    /// Effectiveness signal in `[0, 1]`.
    pub value: f64,
    /// Reliability weight in `[0, 1]`.
    pub confidence: f64,
    /// Free-text provenance (paper title, repository name, ...).
    pub source: String,
    /// When the evidence was observed or published.
    pub timestamp: DateTime<Utc>,
    /// Auxiliary metadata from the upstream analyzer (URLs, star counts,
    /// author lists). Opaque to the engine.
    #[serde(default)]
    pub context: BTreeMap<String, serde_json::Value>,
}

impl Evidence {
    /// Build evidence with an empty context map.
    pub fn new(
        technique: impl Into<String>,
        evidence_type: EvidenceType,
        value: f64,
        confidence: f64,
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            technique: technique.into(),
            evidence_type,
            value,
            confidence,
            source: source.into(),
            timestamp,
            context: BTreeMap::new(),
        }
    }

    /// Attach auxiliary metadata.
    pub fn with_context(mut self, context: BTreeMap<String, serde_json::Value>) -> Self {
        self.context = context;
        self
    }

    /// Check the ingestion contract: non-empty technique, `value` and
    /// `confidence` in `[0, 1]`.
    pub fn validate(&self) -> Result<(), BeliefError> {
        if self.technique.is_empty() {
            return Err(BeliefError::EmptyTechnique);
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.value) {
            return Err(BeliefError::ValueOutOfRange {
                technique: self.technique.clone(),
                value: self.value,
            });
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(BeliefError::ConfidenceOutOfRange {
                technique: self.technique.clone(),
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64, confidence: f64) -> Evidence {
        Evidence::new(
            "PPO",
            EvidenceType::PaperResult,
            value,
            confidence,
            "Paper: test",
            Utc::now(),
        )
    }

    #[test]
    fn wire_tags_are_snake_case() {
        let json = serde_json::to_string(&EvidenceType::PaperResult).unwrap();
        assert_eq!(json, "\"paper_result\"");
        let back: EvidenceType = serde_json::from_str("\"repo_popularity\"").unwrap();
        assert_eq!(back, EvidenceType::RepoPopularity);
        assert_eq!(EvidenceType::ExpertOpinion.name(), "expert_opinion");
    }

    #[test]
    fn validate_accepts_boundary_values() {
        assert!(sample(0.0, 0.0).validate().is_ok());
        assert!(sample(1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(matches!(
            sample(1.5, 0.5).validate(),
            Err(BeliefError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            sample(0.5, -0.1).validate(),
            Err(BeliefError::ConfidenceOutOfRange { .. })
        ));
        assert!(matches!(
            sample(f64::NAN, 0.5).validate(),
            Err(BeliefError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_technique() {
        let mut ev = sample(0.5, 0.5);
        ev.technique.clear();
        assert!(matches!(ev.validate(), Err(BeliefError::EmptyTechnique)));
    }

    #[test]
    fn context_defaults_to_empty_on_deserialize() {
        let json = r#"{
            "technique": "PPO",
            "evidence_type": "benchmark_score",
            "value": 0.7,
            "confidence": 0.9,
            "source": "Atari suite",
            "timestamp": "2024-05-01T12:00:00Z"
        }"#;
        let ev: Evidence = serde_json::from_str(json).unwrap();
        assert!(ev.context.is_empty());
        assert_eq!(ev.evidence_type, EvidenceType::BenchmarkScore);
    }
}
