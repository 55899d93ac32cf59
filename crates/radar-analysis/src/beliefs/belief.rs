//! Per-technique Beta posterior over "true effectiveness".
//!
//! Prior: Beta(2, 2) — weakly informative, symmetric around 0.5.
//! Derived quantities (mean, variance, certainty, credible interval) are
//! pure functions of alpha/beta and are never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF};

/// Prior pseudo-successes for an unseen technique.
pub const PRIOR_ALPHA: f64 = 2.0;
/// Prior pseudo-failures for an unseen technique.
pub const PRIOR_BETA: f64 = 2.0;

/// Evidence mass at which certainty saturates to 1.0.
const CERTAINTY_SCALE: f64 = 100.0;

/// Current belief about one technique's effectiveness.
///
/// Mutated only by the tracker's update path; parameters never drop below
/// the Beta(2, 2) prior floor because updates add non-negative increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueBelief {
    /// Technique identifier, same namespace as `Evidence::technique`.
    pub technique: String,
    /// Beta shape parameter — accumulated positive pseudo-evidence.
    pub alpha: f64,
    /// Beta shape parameter — accumulated negative pseudo-evidence.
    #[serde(rename = "beta_param")]
    pub beta: f64,
    /// Timestamp of the most recent applied evidence.
    pub last_updated: DateTime<Utc>,
    /// Number of evidence records applied to this belief.
    pub evidence_count: u64,
}

impl TechniqueBelief {
    /// A fresh belief at the weakly-informative prior.
    pub fn at_prior(technique: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            technique: technique.into(),
            alpha: PRIOR_ALPHA,
            beta: PRIOR_BETA,
            last_updated: now,
            evidence_count: 0,
        }
    }

    /// Posterior mean: alpha / (alpha + beta).
    pub fn mean_effectiveness(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Posterior variance: alpha*beta / ((alpha+beta)^2 * (alpha+beta+1)).
    pub fn variance(&self) -> f64 {
        let total = self.alpha + self.beta;
        (self.alpha * self.beta) / (total * total * (total + 1.0))
    }

    /// Saturating measure of accumulated evidence mass in `[0, 1]`.
    ///
    /// Monotonically non-decreasing under updates, since updates only add
    /// non-negative increments to alpha and beta.
    pub fn certainty(&self) -> f64 {
        ((self.alpha + self.beta) / CERTAINTY_SCALE).min(1.0)
    }

    /// Credible interval at the given level (e.g. 0.95) via the Beta
    /// inverse CDF.
    ///
    /// Returns `(low, high)` quantiles. Guards against parameters outside
    /// what the quantile function handles numerically.
    pub fn credible_interval(&self, level: f64) -> (f64, f64) {
        credible_interval(self.alpha, self.beta, level)
    }
}

/// Compute the `[(1-level)/2, 1-(1-level)/2]` quantile range of
/// Beta(alpha, beta).
///
/// Guards against invalid or extreme parameters rather than panicking:
/// an unusable distribution degrades to the full `(0, 1)` interval.
pub fn credible_interval(alpha: f64, beta: f64, level: f64) -> (f64, f64) {
    if alpha <= 0.0 || beta <= 0.0 || !alpha.is_finite() || !beta.is_finite() {
        return (0.0, 1.0);
    }

    // Very large shape parameters make the inverse CDF numerically
    // unstable; the distribution is effectively a point mass at the mean.
    if alpha > 1e6 || beta > 1e6 {
        let mean = alpha / (alpha + beta);
        let epsilon = 1e-6;
        return ((mean - epsilon).max(0.0), (mean + epsilon).min(1.0));
    }

    let tail = (1.0 - level) / 2.0;

    match Beta::new(alpha, beta) {
        Ok(dist) => {
            let low = dist.inverse_cdf(tail);
            let high = dist.inverse_cdf(1.0 - tail);
            let low = if low.is_finite() { low.clamp(0.0, 1.0) } else { 0.0 };
            let high = if high.is_finite() { high.clamp(0.0, 1.0) } else { 1.0 };
            (low, high)
        }
        Err(_) => (0.0, 1.0),
    }
}
