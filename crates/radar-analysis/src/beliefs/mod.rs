//! Bayesian Belief Tracking — Beta distribution posteriors over technique
//! effectiveness.
//!
//! Every effectiveness estimate in Radar flows through this system:
//! upstream analyzers produce [`Evidence`], the tracker folds it into
//! per-technique Beta posteriors, and downstream reporting reads rankings,
//! comparisons, and summaries.

pub mod belief;
pub mod compare;
pub mod evidence;
pub mod ranking;
pub mod summary;
pub mod tracker;

pub use belief::{TechniqueBelief, PRIOR_ALPHA, PRIOR_BETA};
pub use compare::{ComparisonResult, DEFAULT_COMPARISON_SAMPLES};
pub use evidence::{Evidence, EvidenceType};
pub use ranking::{RankedTechnique, DEFAULT_MIN_CERTAINTY, OVERHYPE_MIN_CERTAINTY};
pub use summary::BeliefSummary;
pub use tracker::BeliefTracker;
