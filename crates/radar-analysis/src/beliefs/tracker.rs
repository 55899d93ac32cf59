//! Belief store and update engine.

use chrono::Utc;
use radar_core::errors::BeliefError;
use radar_core::types::collections::FxHashMap;
use tracing::debug;

use super::belief::TechniqueBelief;
use super::evidence::Evidence;

/// Tracks Beta posteriors over technique effectiveness.
///
/// Plain owned data with no interior locking: the intended topology is a
/// single evidence-processing loop that writes, with reads after each
/// cycle completes. Beliefs are created lazily at the Beta(2, 2) prior
/// and never deleted; the evidence log is append-only.
#[derive(Debug, Default)]
pub struct BeliefTracker {
    beliefs: FxHashMap<String, TechniqueBelief>,
    evidence_log: Vec<Evidence>,
}

impl BeliefTracker {
    /// An empty store with no prior state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted beliefs and evidence history.
    ///
    /// Beliefs are keyed by their own technique identifier; the evidence
    /// log keeps its stored order (chronological application order).
    pub fn from_parts(
        beliefs: impl IntoIterator<Item = TechniqueBelief>,
        evidence_log: Vec<Evidence>,
    ) -> Self {
        let beliefs = beliefs
            .into_iter()
            .map(|b| (b.technique.clone(), b))
            .collect();
        Self {
            beliefs,
            evidence_log,
        }
    }

    /// Apply one evidence record, returning the updated belief.
    ///
    /// Validates the record, lazily creates the belief at the prior, then
    /// applies the pseudo-count update. The split is asymmetric around
    /// the 0.5 midpoint: above it, alpha gains the margin over 0.5 and
    /// beta the distance from 1.0; at or below it, alpha gains the value
    /// itself and beta the shortfall below 0.5. A 0.5 observation
    /// therefore still feeds alpha by the confidence weight while beta
    /// stays put.
    pub fn update(&mut self, evidence: Evidence) -> Result<&TechniqueBelief, BeliefError> {
        evidence.validate()?;

        let now = Utc::now();
        let belief = self
            .beliefs
            .entry(evidence.technique.clone())
            .or_insert_with(|| TechniqueBelief::at_prior(evidence.technique.clone(), now));

        let weight = evidence.confidence;
        let (alpha_delta, beta_delta) = if evidence.value > 0.5 {
            (
                weight * (evidence.value - 0.5) * 2.0,
                weight * (1.0 - evidence.value) * 2.0,
            )
        } else {
            (
                weight * evidence.value * 2.0,
                weight * (0.5 - evidence.value) * 2.0,
            )
        };

        belief.alpha += alpha_delta;
        belief.beta += beta_delta;
        belief.last_updated = now;
        belief.evidence_count += 1;

        debug!(
            technique = %belief.technique,
            effectiveness = belief.mean_effectiveness(),
            certainty = belief.certainty(),
            evidence_count = belief.evidence_count,
            "belief updated"
        );

        self.evidence_log.push(evidence);
        Ok(&*belief)
    }

    /// Apply a batch of evidence records in order, returning how many were
    /// applied. Stops at the first invalid record.
    pub fn update_batch(
        &mut self,
        batch: impl IntoIterator<Item = Evidence>,
    ) -> Result<usize, BeliefError> {
        let mut applied = 0;
        for evidence in batch {
            self.update(evidence)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Current belief for a technique, if any evidence has been seen.
    pub fn belief(&self, technique: &str) -> Option<&TechniqueBelief> {
        self.beliefs.get(technique)
    }

    /// All tracked beliefs, in unspecified order.
    pub fn beliefs(&self) -> impl Iterator<Item = &TechniqueBelief> {
        self.beliefs.values()
    }

    /// Number of distinct techniques observed.
    pub fn technique_count(&self) -> usize {
        self.beliefs.len()
    }

    /// Full evidence log, in application order.
    pub fn evidence_log(&self) -> &[Evidence] {
        &self.evidence_log
    }

    /// Total evidence records applied across all techniques.
    pub fn evidence_count(&self) -> usize {
        self.evidence_log.len()
    }
}
