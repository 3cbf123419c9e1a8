//! The pattern registry: an immutable, ordered catalog of detection rules.
//!
//! Patterns compile exactly once, at load. A malformed pattern is a
//! configuration error that aborts startup; it is never deferred to scan
//! time. Registry order is insertion order and never affects which rules
//! fire, only the order threats are reported in.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::models::{Category, PatternError, Severity};
use crate::patterns::{self, RuleDef};

/// Compiled regex sizes are bounded so a pathological pattern is rejected
/// at load instead of degrading every scan.
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// A single compiled detection rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique short code, e.g. "PI-004".
    pub id: String,
    /// Attack category.
    pub category: Category,
    /// Rule severity.
    pub severity: Severity,
    /// Human-readable summary.
    pub description: String,
    /// Source text of the pattern.
    pub pattern: String,
    /// Compiled case-insensitive regex.
    regex: Regex,
}

impl Rule {
    fn compile(def: &RuleDef) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(def.pattern)
            .case_insensitive(true)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|source| PatternError::InvalidPattern {
                id: def.id.to_string(),
                source,
            })?;

        Ok(Self {
            id: def.id.to_string(),
            category: def.category,
            severity: def.severity,
            description: def.description.to_string(),
            pattern: def.pattern.to_string(),
            regex,
        })
    }

    /// Whether this rule matches anywhere in `text` (substring search,
    /// case-insensitive).
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Immutable, ordered catalog of detection rules.
///
/// Matching against the registry is exhaustive: every rule is evaluated
/// independently, so registry order never changes the result set.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<Rule>,
}

impl PatternRegistry {
    /// Load and compile the built-in rule tables.
    ///
    /// # Errors
    ///
    /// Fails fast on the first malformed pattern or duplicate rule id.
    pub fn load() -> Result<Self, PatternError> {
        Self::from_defs(&patterns::all())
    }

    /// Load and compile a caller-supplied rule table.
    pub fn from_defs(defs: &[RuleDef]) -> Result<Self, PatternError> {
        let mut seen = HashSet::with_capacity(defs.len());
        let mut rules = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.id) {
                return Err(PatternError::DuplicateId {
                    id: def.id.to_string(),
                });
            }
            rules.push(Rule::compile(def)?);
        }

        Ok(Self { rules })
    }

    /// All rules, in registry order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules belonging to one category, in registry order.
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    /// Number of rules in the registry.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
