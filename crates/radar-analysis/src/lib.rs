//! Analysis engine for Radar: evidence ingestion, Bayesian technique
//! beliefs, ranking, and Monte Carlo comparison.

pub mod beliefs;
