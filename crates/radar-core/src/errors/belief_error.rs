//! Evidence ingestion errors.

/// Errors raised when validating evidence before a belief update.
///
/// The update formula assumes `value` and `confidence` lie in `[0, 1]`;
/// rejecting out-of-range inputs here keeps the Beta parameters inside
/// their invariant range.
#[derive(Debug, thiserror::Error)]
pub enum BeliefError {
    #[error("evidence technique must be a non-empty identifier")]
    EmptyTechnique,

    #[error("evidence value {value} for '{technique}' is outside [0, 1]")]
    ValueOutOfRange { technique: String, value: f64 },

    #[error("evidence confidence {confidence} for '{technique}' is outside [0, 1]")]
    ConfidenceOutOfRange { technique: String, confidence: f64 },
}
