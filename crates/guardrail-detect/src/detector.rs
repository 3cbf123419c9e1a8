//! The detection engine: exhaustive pattern matching over the registry.

use crate::models::Threat;
use crate::registry::{PatternRegistry, Rule};

/// Pattern-based threat detector for agent inputs and outputs.
///
/// The detector is referentially transparent: given the same registry and
/// the same text it always produces the same threats, in registry order,
/// and mutates nothing. One detector can serve any number of scans.
#[derive(Debug, Clone)]
pub struct ThreatDetector {
    registry: PatternRegistry,
}

impl ThreatDetector {
    /// Create a detector over the given registry.
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    /// Scan text for threats.
    ///
    /// Empty input is the degenerate no-threat case, not an error. Every
    /// rule is evaluated against the full text; each rule fires at most
    /// once, and results follow registry order.
    pub fn scan(&self, text: &str) -> Vec<Threat> {
        if text.is_empty() {
            return Vec::new();
        }

        self.registry
            .rules()
            .iter()
            .filter(|rule| rule.matches(text))
            .map(Self::threat_from)
            .collect()
    }

    /// Scan optional text; `None` yields no threats.
    pub fn scan_opt(&self, text: Option<&str>) -> Vec<Threat> {
        text.map_or_else(Vec::new, |t| self.scan(t))
    }

    /// The registry this detector scans against.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    fn threat_from(rule: &Rule) -> Threat {
        Threat {
            id: rule.id.clone(),
            category: rule.category,
            severity: rule.severity,
            description: rule.description.clone(),
            pattern: rule.pattern.clone(),
        }
    }
}

impl Default for ThreatDetector {
    /// Build a detector over the built-in rule tables.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables fail to compile, which is covered by
    /// registry load tests; fallible callers should use
    /// [`PatternRegistry::load`] and [`ThreatDetector::new`].
    fn default() -> Self {
        Self::new(PatternRegistry::load().expect("built-in patterns compile"))
    }
}
