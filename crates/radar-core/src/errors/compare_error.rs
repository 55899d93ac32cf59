//! Comparison errors.

/// Errors raised by the Monte Carlo comparison engine.
/// These degrade to "comparison unavailable" at the caller, never a crash.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("technique '{technique}' not found in belief store")]
    TechniqueNotFound { technique: String },

    #[error("posterior for '{technique}' is not a valid Beta distribution")]
    DegeneratePosterior { technique: String },
}
