//! Additive risk scoring over detected threats.
//!
//! The score is a deterministic function of the threat set and the raw
//! text: severity points per threat, a flat bonus per aggravating keyword,
//! a flat reduction per mitigating phrase, clamped to 0-100. Context
//! matters both ways, so the same threat can land in different risk bands
//! depending on the words around it.

use guardrail_detect::{Severity, Threat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Risk band derived from the numeric score.
///
/// Band boundaries are inclusive: LOW is 0-30, MEDIUM 31-60, HIGH 61-80,
/// CRITICAL 81-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Map a clamped score to its band.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => Self::Low,
            31..=60 => Self::Medium,
            61..=80 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Operator-facing recommendation for this band.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Low => "ALLOW - Low risk, safe to proceed",
            Self::Medium => "REVIEW - Moderate risk, human review recommended",
            Self::High => "BLOCK - High risk, block with manual override option",
            Self::Critical => "BLOCK - Critical risk, always block",
        }
    }

    /// Uppercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable weights and keyword lists for the scorer.
///
/// The defaults are the calibrated production weights; deployments with a
/// different risk appetite can swap any part without touching detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points added per CRITICAL threat.
    pub critical_points: u32,
    /// Points added per HIGH threat.
    pub high_points: u32,
    /// Points added per MEDIUM threat.
    pub medium_points: u32,
    /// Points added per LOW threat.
    pub low_points: u32,
    /// Points added per aggravating keyword present in the text.
    pub keyword_bonus: u32,
    /// Points removed per mitigating phrase present in the text.
    pub mitigation_reduction: u32,
    /// Action words that escalate risk when they co-occur with threats.
    pub aggravating_keywords: Vec<String>,
    /// Phrases signalling a legitimate session reset.
    pub mitigating_phrases: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            critical_points: 60,
            high_points: 40,
            medium_points: 20,
            low_points: 10,
            keyword_bonus: 11,
            mitigation_reduction: 15,
            aggravating_keywords: [
                "email",
                "send",
                "execute",
                "delete",
                "drop",
                "reveal",
                "exfiltrate",
                "steal",
                "hack",
                "bypass",
                "exploit",
                "secret",
                "password",
                "credential",
                "token",
                "key",
            ]
            .map(str::to_string)
            .to_vec(),
            mitigating_phrases: [
                "start fresh",
                "reset",
                "clear history",
                "begin again",
                "new session",
                "start over",
                "clear context",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}

impl ScoringConfig {
    fn severity_points(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical_points,
            Severity::High => self.high_points,
            Severity::Medium => self.medium_points,
            Severity::Low => self.low_points,
        }
    }
}

/// Outcome of scoring one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final score, clamped to 0-100.
    pub score: u8,
    /// Risk band for the score.
    pub level: RiskLevel,
    /// Threats the score was computed from, in detection order.
    pub threats: Vec<Threat>,
    /// Itemized score breakdown, one line per contribution.
    pub reasons: Vec<String>,
    /// Operator-facing recommendation for the band.
    pub recommendation: String,
    /// Whether the result belongs in a human review queue.
    pub requires_review: bool,
}

impl ScoreResult {
    /// Whether the input should be blocked outright (HIGH or CRITICAL).
    pub fn should_block(&self) -> bool {
        self.level >= RiskLevel::High
    }
}

/// Additive risk scorer.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    /// Scorer with the default production weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom weights and keyword lists.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a text given the threats detected in it.
    ///
    /// The computation is order-independent and pure: severity points per
    /// threat, one keyword bonus line, one mitigation line, then the total
    /// is floored at 0 and capped at 100.
    pub fn score(&self, text: &str, threats: &[Threat]) -> ScoreResult {
        let lowered = text.to_lowercase();
        let mut total: i64 = 0;
        let mut reasons = Vec::new();

        for threat in threats {
            let points = self.config.severity_points(threat.severity);
            total += i64::from(points);
            reasons.push(format!("+{points}: {}", threat.description));
        }

        let matched_keywords: Vec<&str> = self
            .config
            .aggravating_keywords
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .map(String::as_str)
            .collect();
        if !matched_keywords.is_empty() {
            let bonus = self.config.keyword_bonus as i64 * matched_keywords.len() as i64;
            total += bonus;
            reasons.push(format!(
                "+{bonus}: Malicious keywords: {}",
                matched_keywords.join(", ")
            ));
        }

        let matched_phrases: Vec<&str> = self
            .config
            .mitigating_phrases
            .iter()
            .filter(|phrase| lowered.contains(phrase.as_str()))
            .map(String::as_str)
            .collect();
        if !matched_phrases.is_empty() {
            let reduction = self.config.mitigation_reduction as i64 * matched_phrases.len() as i64;
            total -= reduction;
            reasons.push(format!(
                "-{reduction}: Legitimate intent: {}",
                matched_phrases.join(", ")
            ));
        }

        let score = total.clamp(0, 100) as u8;
        let level = RiskLevel::from_score(score);

        debug!(score, level = %level, threats = threats.len(), "risk scored");

        ScoreResult {
            score,
            level,
            threats: threats.to_vec(),
            reasons,
            recommendation: level.recommendation().to_string(),
            requires_review: matches!(level, RiskLevel::Medium | RiskLevel::High),
        }
    }
}
