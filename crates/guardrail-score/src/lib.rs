//! # GuardRail Score - Risk Scoring and Review Queue
//!
//! Second layer of the GuardRail security core. Turns a set of detected
//! threats plus the raw text into a 0-100 risk score, a risk band, and a
//! recommendation; borderline results land in an append-only human review
//! queue.
//!
//! ## Scoring Model
//!
//! | Contribution | Default weight |
//! |--------------|----------------|
//! | CRITICAL threat | +60 |
//! | HIGH threat | +40 |
//! | MEDIUM threat | +20 |
//! | LOW threat | +10 |
//! | Aggravating keyword | +11 each |
//! | Mitigating phrase | -15 each |
//!
//! The total is clamped to 0-100 and mapped to LOW (0-30), MEDIUM (31-60),
//! HIGH (61-80), or CRITICAL (81-100). MEDIUM and HIGH require human
//! review; HIGH and CRITICAL should be blocked.

mod review;
mod scorer;

pub use review::{ReviewItem, ReviewQueue, ReviewStatus, ReviewSummary};
pub use scorer::{RiskLevel, RiskScorer, ScoreResult, ScoringConfig};
