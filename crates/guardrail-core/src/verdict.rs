//! Verdict types for gating decisions.

use guardrail_score::{RiskLevel, ScoreResult};
use serde::{Deserialize, Serialize};

/// The host-facing gating decision for one text.
///
/// Derived deterministically from the risk band:
/// - LOW → `Allow`: forward the text to the agent
/// - MEDIUM → `Review`: hold the text for a human decision
/// - HIGH / CRITICAL → `Block`: do not forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Text passed the risk gate. Safe to forward.
    Allow,

    /// Text needs a human decision before forwarding.
    Review {
        /// Risk score that landed in the review band.
        score: u8,
        /// Itemized score breakdown.
        reasons: Vec<String>,
    },

    /// Text failed the risk gate. Do not forward.
    Block {
        /// Risk score that landed in the blocking band.
        score: u8,
        /// Operator-facing recommendation.
        recommendation: String,
    },
}

impl Verdict {
    /// Derive the verdict from a score result. Blocking wins over review
    /// in the HIGH band.
    pub fn from_result(result: &ScoreResult) -> Self {
        match result.level {
            RiskLevel::Low => Self::Allow,
            RiskLevel::Medium => Self::Review {
                score: result.score,
                reasons: result.reasons.clone(),
            },
            RiskLevel::High | RiskLevel::Critical => Self::Block {
                score: result.score,
                recommendation: result.recommendation.clone(),
            },
        }
    }

    /// Returns true if this is an Allow verdict.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns true if this is a Block verdict.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Returns true if this requires review.
    pub fn requires_review(&self) -> bool {
        matches!(self, Self::Review { .. })
    }
}
