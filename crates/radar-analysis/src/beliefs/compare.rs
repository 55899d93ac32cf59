//! Comparison engine — Monte Carlo head-to-head between two posteriors.

use radar_core::config::RadarConfig;
use radar_core::errors::CompareError;
use rand_distr::{Beta, Distribution};
use serde::Serialize;

use super::belief::TechniqueBelief;
use super::tracker::BeliefTracker;

/// Paired posterior draws per comparison. At this sample count the win
/// probability estimate is stable to roughly ±1%.
pub const DEFAULT_COMPARISON_SAMPLES: usize = 10_000;

/// Outcome of a head-to-head comparison between two techniques.
///
/// `p_a_better` is a Monte Carlo estimate of P(effectiveness_A >
/// effectiveness_B); `p_b_better` is its exact complement. Means and
/// certainties of both sides ride along for display.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub technique_a: String,
    pub technique_b: String,
    pub mean_effectiveness_a: f64,
    pub mean_effectiveness_b: f64,
    pub certainty_a: f64,
    pub certainty_b: f64,
    pub p_a_better: f64,
    pub p_b_better: f64,
}

impl BeliefTracker {
    /// Estimate P(A > B) with the default sample count.
    pub fn compare(&self, a: &str, b: &str) -> Result<ComparisonResult, CompareError> {
        self.compare_with_samples(a, b, DEFAULT_COMPARISON_SAMPLES)
    }

    /// Estimate P(A > B) with the host-configured sample count.
    pub fn compare_with_config(
        &self,
        a: &str,
        b: &str,
        config: &RadarConfig,
    ) -> Result<ComparisonResult, CompareError> {
        self.compare_with_samples(a, b, config.comparison_samples)
    }

    /// Estimate P(A > B) from `samples` paired draws of each posterior.
    ///
    /// Stochastic: repeated calls on an unchanged store agree within Monte
    /// Carlo noise but are not bit-identical.
    pub fn compare_with_samples(
        &self,
        a: &str,
        b: &str,
        samples: usize,
    ) -> Result<ComparisonResult, CompareError> {
        let belief_a = self.belief(a).ok_or_else(|| CompareError::TechniqueNotFound {
            technique: a.to_string(),
        })?;
        let belief_b = self.belief(b).ok_or_else(|| CompareError::TechniqueNotFound {
            technique: b.to_string(),
        })?;

        let dist_a = posterior(belief_a)?;
        let dist_b = posterior(belief_b)?;

        let mut rng = rand::rng();
        let wins = (0..samples)
            .filter(|_| dist_a.sample(&mut rng) > dist_b.sample(&mut rng))
            .count();

        let p_a_better = wins as f64 / samples as f64;

        Ok(ComparisonResult {
            technique_a: belief_a.technique.clone(),
            technique_b: belief_b.technique.clone(),
            mean_effectiveness_a: belief_a.mean_effectiveness(),
            mean_effectiveness_b: belief_b.mean_effectiveness(),
            certainty_a: belief_a.certainty(),
            certainty_b: belief_b.certainty(),
            p_a_better,
            p_b_better: 1.0 - p_a_better,
        })
    }
}

/// Sampling distribution for a belief's posterior.
///
/// The prior floor keeps parameters at 2.0 or above, so construction only
/// fails on states that never arise from the update path.
fn posterior(belief: &TechniqueBelief) -> Result<Beta<f64>, CompareError> {
    Beta::new(belief.alpha, belief.beta).map_err(|_| CompareError::DegeneratePosterior {
        technique: belief.technique.clone(),
    })
}
