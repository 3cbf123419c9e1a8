//! Error types for the GuardRail facade.

use guardrail_detect::PatternError;
use guardrail_score::RiskLevel;
use thiserror::Error;

use crate::monitor::Stage;

/// Core error type for GuardRail operations.
#[derive(Debug, Error)]
pub enum GuardrailError {
    /// The pattern registry failed to load. Fatal at startup; never
    /// raised per scan.
    #[error("pattern registry failed to load: {0}")]
    Pattern(#[from] PatternError),

    /// The monitor blocked execution. This is the distinguished blocking
    /// signal, not an internal failure: hosts catch it to halt the
    /// pipeline.
    #[error("blocked {level} risk at {stage} (score {score}): {recommendation}")]
    Blocked {
        /// Pipeline stage where the block fired.
        stage: Stage,
        /// Risk band of the blocked text.
        level: RiskLevel,
        /// Risk score of the blocked text.
        score: u8,
        /// Operator-facing recommendation.
        recommendation: String,
    },
}
