//! Core types for threat detection.
//!
//! The taxonomy follows the OWASP LLM Top 10 and the OWASP Top 15 Agentic
//! AI Threats: each [`Category`] is a distinct attack class with its own
//! signature rules, and each detected [`Threat`] references exactly one
//! rule from the registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attack category a detection rule belongs to.
///
/// Serialized with snake_case names (`prompt_injection`, `sql_injection`,
/// ...) so results can be consumed by non-Rust tooling unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Direct instruction override, role reassignment, prompt extraction.
    PromptInjection,
    /// Safety bypass attempts: DAN personas, developer mode, framing tricks.
    Jailbreak,
    /// Fake conversation boundaries and injected system tags.
    ContextManipulation,
    /// Coercing agent tools into destructive or credential-seeking actions.
    ToolMisuse,
    /// SQL injection fragments (CWE-89).
    SqlInjection,
    /// Shell command injection fragments (CWE-77).
    CommandInjection,
    /// Path traversal and sensitive file access (CWE-22).
    FileManipulation,
    /// Network scanning, shells, tunneling (CWE-918).
    NetworkExploit,
    /// Moving sensitive data out of the agent's trust boundary.
    DataExfiltration,
}

impl Category {
    /// Snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PromptInjection => "prompt_injection",
            Self::Jailbreak => "jailbreak",
            Self::ContextManipulation => "context_manipulation",
            Self::ToolMisuse => "tool_misuse",
            Self::SqlInjection => "sql_injection",
            Self::CommandInjection => "command_injection",
            Self::FileManipulation => "file_manipulation",
            Self::NetworkExploit => "network_exploit",
            Self::DataExfiltration => "data_exfiltration",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule severity, totally ordered: LOW < MEDIUM < HIGH < CRITICAL.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
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

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule match against a scanned text.
///
/// A scan yields at most one `Threat` per registry rule, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    /// Id of the rule that fired, e.g. "PI-004".
    pub id: String,
    /// Attack category of the rule.
    pub category: Category,
    /// Severity of the rule.
    pub severity: Severity,
    /// Human-readable summary of what the rule detects.
    pub description: String,
    /// Source text of the rule's regular expression.
    pub pattern: String,
}

/// Errors raised while loading the pattern registry.
///
/// All variants are configuration errors: they abort startup and are never
/// produced per scan.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A rule's pattern failed to compile as a regular expression.
    #[error("rule {id}: pattern failed to compile: {source}")]
    InvalidPattern {
        /// Id of the offending rule.
        id: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Two rules share the same id.
    #[error("duplicate rule id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let parsed: Severity = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Severity::High);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::SqlInjection).unwrap();
        assert_eq!(json, "\"sql_injection\"");
        assert_eq!(Category::PromptInjection.as_str(), "prompt_injection");
    }

    #[test]
    fn test_threat_round_trip() {
        let threat = Threat {
            id: "PI-001".to_string(),
            category: Category::PromptInjection,
            severity: Severity::High,
            description: "Instruction override attempt".to_string(),
            pattern: r"ignore\s+all".to_string(),
        };
        let json = serde_json::to_string(&threat).unwrap();
        let parsed: Threat = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, threat);
    }
}
