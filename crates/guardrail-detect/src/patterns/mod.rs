//! Built-in detection rule tables.
//!
//! Rules are plain data: static arrays of [`RuleDef`] grouped by attack
//! family. New rules are added by extending these tables, not by adding
//! detection logic. Every pattern is compiled once by
//! [`PatternRegistry::load`](crate::PatternRegistry::load), which rejects
//! the whole table if any single pattern is malformed.

mod injection;
mod tool_misuse;

use crate::models::{Category, Severity};

/// Source definition of a detection rule, before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Unique short code, e.g. "PI-004".
    pub id: &'static str,
    /// Attack category.
    pub category: Category,
    /// Regular expression source. Compiled case-insensitively.
    pub pattern: &'static str,
    /// Rule severity.
    pub severity: Severity,
    /// Human-readable summary.
    pub description: &'static str,
}

/// All built-in rules, in registry order.
pub fn all() -> Vec<RuleDef> {
    let mut rules = Vec::with_capacity(
        injection::RULES.len() + tool_misuse::RULES.len(),
    );
    rules.extend_from_slice(injection::RULES);
    rules.extend_from_slice(tool_misuse::RULES);
    rules
}
