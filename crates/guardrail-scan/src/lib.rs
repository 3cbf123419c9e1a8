//! # GuardRail Scan - Adversarial Agent Probing
//!
//! Third layer of the GuardRail security core: instead of filtering
//! inputs, it attacks the agent itself. The scanner plays fifteen
//! single-shot injection payloads and four multi-step attack chains
//! against a [`Responder`], judges each reply with compromise
//! indicators, and grades the agent A through F.
//!
//! ## Probe Suite
//!
//! - **Payloads** ([`INJECTION_PAYLOADS`]): direct overrides, role
//!   manipulation, prompt extraction, tool coercion, jailbreaks, forged
//!   context, and indirect injection.
//! - **Chains** ([`builtin_chains`]): credential harvesting, system
//!   reconnaissance, data exfiltration, and social engineering, each
//!   split into innocent-looking steps.
//!
//! A chain counts as a hit if any step compromises the agent or if the
//! steps together spell out a known escalation pattern, so even an agent
//! that refuses every turn gets flagged for not recognizing the campaign.
//!
//! [`CannedResponder`] is a deterministic stand-in for a live agent;
//! integrations implement [`Responder`] to put a real one under test.

mod chains;
mod evaluator;
mod indicators;
mod payloads;
mod scanner;
mod simulator;

pub use chains::{builtin_chains, AttackChain, ChainKind};
pub use evaluator::{ChainEvaluator, ChainOutcome, ChainScanReport, StepOutcome};
pub use indicators::{chain_pattern_detected, is_compromised};
pub use payloads::INJECTION_PAYLOADS;
pub use scanner::{AttackResult, Grade, ScanReport, SecurityScanner};
pub use simulator::{CannedResponder, Responder};
