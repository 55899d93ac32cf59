//! End-to-end belief update scenarios and engine invariants.

use chrono::Utc;
use proptest::prelude::*;
use radar_analysis::beliefs::{BeliefTracker, Evidence, EvidenceType};

fn evidence(technique: &str, value: f64, confidence: f64) -> Evidence {
    Evidence::new(
        technique,
        EvidenceType::PaperResult,
        value,
        confidence,
        "Paper: test",
        Utc::now(),
    )
}

/// Positive evidence above the midpoint: value=0.8, confidence=0.9 on a
/// fresh prior gives alpha=2.54, beta=2.36, mean ≈ 0.5184.
#[test]
fn test_positive_evidence_scenario() {
    let mut tracker = BeliefTracker::new();
    tracker.update(evidence("PPO", 0.8, 0.9)).unwrap();

    let belief = tracker.belief("PPO").unwrap();
    assert!((belief.alpha - 2.54).abs() < 1e-12, "alpha = {}", belief.alpha);
    assert!((belief.beta - 2.36).abs() < 1e-12, "beta = {}", belief.beta);
    assert!((belief.mean_effectiveness() - 0.5184).abs() < 1e-3);
}

/// Negative evidence below the midpoint: value=0.3, confidence=0.7 on a
/// fresh prior gives alpha=2.42, beta=2.28, mean ≈ 0.5149.
#[test]
fn test_negative_evidence_scenario() {
    let mut tracker = BeliefTracker::new();
    tracker.update(evidence("DQN", 0.3, 0.7)).unwrap();

    let belief = tracker.belief("DQN").unwrap();
    assert!((belief.alpha - 2.42).abs() < 1e-12, "alpha = {}", belief.alpha);
    assert!((belief.beta - 2.28).abs() < 1e-12, "beta = {}", belief.beta);
    assert!((belief.mean_effectiveness() - 0.5149).abs() < 1e-3);
}

/// A single observation leaves certainty below the 0.1 ranking floor, so
/// the certainty gate excludes the technique from the default ranking.
#[test]
fn test_certainty_gate_excludes_lightly_evidenced() {
    let mut tracker = BeliefTracker::new();
    tracker.update(evidence("PPO", 0.8, 0.9)).unwrap();

    let belief = tracker.belief("PPO").unwrap();
    // alpha + beta = 4.90 → certainty 0.049
    assert!((belief.certainty() - 0.049).abs() < 1e-12);
    assert!(tracker.ranking(0.1).is_empty());
}

/// Evidence for one technique never touches another's belief.
#[test]
fn test_updates_are_isolated_per_technique() {
    let mut tracker = BeliefTracker::new();
    tracker.update(evidence("PPO", 0.9, 1.0)).unwrap();
    tracker.update(evidence("DQN", 0.1, 1.0)).unwrap();

    let ppo = tracker.belief("PPO").unwrap();
    let dqn = tracker.belief("DQN").unwrap();
    assert!(ppo.mean_effectiveness() > 0.5);
    assert!(dqn.mean_effectiveness() < 0.5);
    assert_eq!(ppo.evidence_count, 1);
    assert_eq!(dqn.evidence_count, 1);
    assert_eq!(tracker.evidence_count(), 2);
}

/// The evidence log preserves application order across techniques.
#[test]
fn test_evidence_log_is_append_only_in_order() {
    let mut tracker = BeliefTracker::new();
    for (tech, value) in [("PPO", 0.8), ("DQN", 0.3), ("PPO", 0.6), ("SAC", 0.9)] {
        tracker.update(evidence(tech, value, 0.5)).unwrap();
    }

    let log: Vec<&str> = tracker
        .evidence_log()
        .iter()
        .map(|e| e.technique.as_str())
        .collect();
    assert_eq!(log, vec!["PPO", "DQN", "PPO", "SAC"]);
}

proptest! {
    /// Mean effectiveness stays strictly inside (0, 1) for any sequence
    /// of in-range evidence.
    #[test]
    fn prop_mean_stays_in_open_unit_interval(
        observations in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 1..60)
    ) {
        let mut tracker = BeliefTracker::new();
        for (value, confidence) in observations {
            tracker.update(evidence("PPO", value, confidence)).unwrap();
            let mean = tracker.belief("PPO").unwrap().mean_effectiveness();
            prop_assert!(mean > 0.0 && mean < 1.0);
        }
    }

    /// Certainty never decreases as evidence accumulates.
    #[test]
    fn prop_certainty_is_monotone(
        observations in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 1..60)
    ) {
        let mut tracker = BeliefTracker::new();
        let mut previous = 0.0;
        for (value, confidence) in observations {
            tracker.update(evidence("PPO", value, confidence)).unwrap();
            let certainty = tracker.belief("PPO").unwrap().certainty();
            prop_assert!(certainty >= previous);
            previous = certainty;
        }
    }

    /// Parameters never drop below the Beta(2, 2) prior floor, and the
    /// per-technique count matches the number of applied records.
    #[test]
    fn prop_prior_floor_and_counts_hold(
        observations in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 1..40)
    ) {
        let mut tracker = BeliefTracker::new();
        let total = observations.len() as u64;
        for (value, confidence) in observations {
            tracker.update(evidence("PPO", value, confidence)).unwrap();
        }
        let belief = tracker.belief("PPO").unwrap();
        prop_assert!(belief.alpha >= 2.0);
        prop_assert!(belief.beta >= 2.0);
        prop_assert_eq!(belief.evidence_count, total);
    }
}
