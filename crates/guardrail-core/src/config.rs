//! Configuration types for the GuardRail facade.

use guardrail_score::{RiskLevel, ScoringConfig};
use serde::{Deserialize, Serialize};

/// Configuration for the GuardRail security facade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardrailConfig {
    /// Risk scorer weights and keyword lists.
    pub scoring: ScoringConfig,

    /// Pipeline monitor behavior.
    pub monitor: MonitorConfig,
}

/// Pipeline monitor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Whether the monitor blocks execution or only records events.
    pub block_threats: bool,

    /// Minimum risk band that triggers a block.
    pub block_level: RiskLevel,

    /// Whether MEDIUM/HIGH results are placed on the review queue.
    pub enqueue_reviews: bool,

    /// Maximum characters of the scanned text kept in each event.
    pub excerpt_chars: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            block_threats: true,
            block_level: RiskLevel::High,
            enqueue_reviews: true,
            excerpt_chars: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_block_high() {
        let config = GuardrailConfig::default();
        assert!(config.monitor.block_threats);
        assert_eq!(config.monitor.block_level, RiskLevel::High);
        assert!(config.monitor.enqueue_reviews);
    }

    #[test]
    fn test_config_round_trip() {
        let config = GuardrailConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GuardrailConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.monitor.excerpt_chars, 100);
        assert_eq!(parsed.scoring.critical_points, 60);
    }
}
