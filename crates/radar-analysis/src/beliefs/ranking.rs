//! Ranking engine — orderings derived from the belief store.

use serde::Serialize;

use super::tracker::BeliefTracker;

/// Certainty floor for the default effectiveness ranking.
pub const DEFAULT_MIN_CERTAINTY: f64 = 0.1;

/// Certainty floor for the overhype ranking: a technique can only be
/// called overhyped once its evidence base is substantial.
pub const OVERHYPE_MIN_CERTAINTY: f64 = 0.3;

/// One row of the effectiveness ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTechnique {
    pub technique: String,
    pub mean_effectiveness: f64,
    pub certainty: f64,
}

impl BeliefTracker {
    /// Techniques with `certainty >= min_certainty`, ordered descending by
    /// mean effectiveness, then by certainty, with the technique name as
    /// the final deterministic tiebreak.
    pub fn ranking(&self, min_certainty: f64) -> Vec<RankedTechnique> {
        let mut ranked: Vec<RankedTechnique> = self
            .beliefs()
            .filter(|b| b.certainty() >= min_certainty)
            .map(|b| RankedTechnique {
                technique: b.technique.clone(),
                mean_effectiveness: b.mean_effectiveness(),
                certainty: b.certainty(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.mean_effectiveness
                .total_cmp(&a.mean_effectiveness)
                .then(b.certainty.total_cmp(&a.certainty))
                .then(a.technique.cmp(&b.technique))
        });
        ranked
    }

    /// Names of the top `k` techniques under the default certainty floor.
    pub fn most_promising(&self, k: usize) -> Vec<String> {
        self.most_promising_above(DEFAULT_MIN_CERTAINTY, k)
    }

    /// Names of the top `k` techniques above an explicit certainty floor.
    pub fn most_promising_above(&self, min_certainty: f64, k: usize) -> Vec<String> {
        self.ranking(min_certainty)
            .into_iter()
            .take(k)
            .map(|r| r.technique)
            .collect()
    }

    /// Names of the top `k` overhyped techniques: well-evidenced
    /// (`certainty >= 0.3`) yet judged ineffective, scored by
    /// `certainty * (1 - mean_effectiveness)`.
    pub fn most_overhyped(&self, k: usize) -> Vec<String> {
        self.most_overhyped_above(OVERHYPE_MIN_CERTAINTY, k)
    }

    /// Overhype ranking above an explicit certainty floor.
    pub fn most_overhyped_above(&self, min_certainty: f64, k: usize) -> Vec<String> {
        let mut scored: Vec<(String, f64)> = self
            .beliefs()
            .filter(|b| b.certainty() >= min_certainty)
            .map(|b| {
                let score = b.certainty() * (1.0 - b.mean_effectiveness());
                (b.technique.clone(), score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.into_iter().take(k).map(|(name, _)| name).collect()
    }

    /// Names of the `k` techniques with the least accumulated evidence,
    /// ascending by certainty — the ones most in need of more evidence.
    pub fn uncertain(&self, k: usize) -> Vec<String> {
        let mut scored: Vec<(String, f64)> = self
            .beliefs()
            .map(|b| (b.technique.clone(), b.certainty()))
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        scored.into_iter().take(k).map(|(name, _)| name).collect()
    }
}
