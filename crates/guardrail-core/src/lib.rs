//! # GuardRail Core
//!
//! Unified security facade for text destined for autonomous agents.
//! Orchestrates pattern detection, risk scoring, pipeline monitoring,
//! and adversarial scanning.
//!
//! ## Threat Coverage
//!
//! | Layer | Component | Threats Covered |
//! |-------|-----------|-----------------|
//! | Detection | Pattern Registry | Injection, jailbreaks, tool misuse, exfiltration |
//! | Scoring | Risk Scorer | Context-weighted risk, 0-100 with bands |
//! | Monitoring | Pipeline Monitor | Per-stage interception, audit trail, blocking |
//! | Auditing | Security Scanner | Payload probes, multi-step attack chains |
//!
//! ## Usage
//!
//! ```rust
//! use guardrail_core::{Guardrail, GuardrailConfig, Stage, Verdict};
//!
//! let mut guardrail = Guardrail::new(GuardrailConfig::default())?;
//!
//! // Gate an inbound text
//! match guardrail.verdict("Please summarize this document") {
//!     Verdict::Allow => { /* forward to the agent */ }
//!     Verdict::Review { .. } => { /* hold for a human */ }
//!     Verdict::Block { .. } => { /* refuse */ }
//! }
//!
//! // Or intercept inside the pipeline; blocked texts come back as errors
//! let gate = guardrail.check(Stage::ToolStart, "DROP TABLE users; --");
//! assert!(gate.is_err());
//! # Ok::<(), guardrail_core::GuardrailError>(())
//! ```
//!
//! ## Security Notes
//!
//! - Scoring is deterministic: same text, same threats, same verdict.
//! - The blocking signal is a distinguished error, not a panic.
//! - Pattern compilation failures abort startup; scans never fail.

mod config;
mod error;
mod guardrail;
mod monitor;
mod verdict;

pub use config::{GuardrailConfig, MonitorConfig};
pub use error::GuardrailError;
pub use guardrail::Guardrail;
pub use monitor::{Monitor, SecurityEvent, Stage, ThreatSummary};
pub use verdict::Verdict;

// Re-export component types for convenience
pub use guardrail_detect::{Category, PatternError, PatternRegistry, Severity, Threat, ThreatDetector};
pub use guardrail_scan::{
    AttackChain, AttackResult, CannedResponder, ChainEvaluator, ChainOutcome, ChainScanReport,
    Grade, Responder, ScanReport, SecurityScanner,
};
pub use guardrail_score::{
    ReviewItem, ReviewQueue, ReviewStatus, ReviewSummary, RiskLevel, RiskScorer, ScoreResult,
    ScoringConfig,
};

/// Core result type for GuardRail operations.
pub type Result<T> = std::result::Result<T, GuardrailError>;
