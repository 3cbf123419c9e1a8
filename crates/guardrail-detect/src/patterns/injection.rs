//! Prompt injection, jailbreak, and context manipulation rules.
//!
//! Signatures for adversarial text aimed at the agent itself: overriding
//! its instructions, extracting its system prompt, switching its persona,
//! or forging conversation boundaries. Based on real-world attacks
//! (Perez & Ribeiro 2022, Shen et al. 2023) and the OWASP LLM01 class.

use super::RuleDef;
use crate::models::{Category, Severity};

pub(super) const RULES: &[RuleDef] = &[
    // Direct instruction override
    RuleDef {
        id: "PI-001",
        category: Category::PromptInjection,
        pattern: r"\bignore\s+(all|previous|prior)\b",
        severity: Severity::High,
        description: "Instruction override attempt",
    },
    RuleDef {
        id: "PI-002",
        category: Category::PromptInjection,
        pattern: r"\bignore\s+(your\s+|my\s+|the\s+)?(instructions?|rules?|directives?|guidelines?|safety)",
        severity: Severity::High,
        description: "Ignore instructions directive",
    },
    RuleDef {
        id: "PI-003",
        category: Category::PromptInjection,
        pattern: r"disregard\s+(all\s+)?(your\s+)?(previous\s+|prior\s+)?(instructions?|rules?|directives?|guidelines?)",
        severity: Severity::High,
        description: "Disregard instructions directive",
    },
    RuleDef {
        id: "PI-004",
        category: Category::PromptInjection,
        pattern: r"forget\s+(everything|all|what)\s+(you|i)\b",
        severity: Severity::High,
        description: "Memory wipe request",
    },
    // Role manipulation
    RuleDef {
        id: "PI-005",
        category: Category::PromptInjection,
        pattern: r"you\s+are\s+(now|no\s+longer)\b",
        severity: Severity::High,
        description: "Role reassignment attempt",
    },
    RuleDef {
        id: "PI-006",
        category: Category::PromptInjection,
        pattern: r"pretend\s+(to\s+be|you\s+are|you'?re)",
        severity: Severity::High,
        description: "Persona adoption request",
    },
    // System prompt extraction
    RuleDef {
        id: "PI-007",
        category: Category::PromptInjection,
        pattern: r"(reveal|show|display|print|repeat|output)\s+(me\s+)?(your\s+)?(system\s+prompt|initial\s+(instructions?|prompt)|hidden\s+instructions?)",
        severity: Severity::Critical,
        description: "System prompt extraction attempt",
    },
    RuleDef {
        id: "PI-008",
        category: Category::PromptInjection,
        pattern: r"what\s+(was|were|are|is)\s+(your?|the)\b.{0,40}(instruct|prompt|allowed)",
        severity: Severity::High,
        description: "System prompt probing question",
    },

    // Jailbreaking
    RuleDef {
        id: "JB-001",
        category: Category::Jailbreak,
        pattern: r"\b(DAN|do\s+anything\s+now)\b",
        severity: Severity::High,
        description: "DAN-style jailbreak persona",
    },
    RuleDef {
        id: "JB-002",
        category: Category::Jailbreak,
        pattern: r"(developer|debug|god|sudo|admin)\s+mode",
        severity: Severity::High,
        description: "Privileged mode request",
    },
    RuleDef {
        id: "JB-003",
        category: Category::Jailbreak,
        pattern: r"(no|without|zero)\s+(restrictions?|limitations?|filters?)",
        severity: Severity::High,
        description: "Restriction removal request",
    },
    RuleDef {
        id: "JB-004",
        category: Category::Jailbreak,
        pattern: r"rules\s+(don'?t|do\s+not)\s+apply",
        severity: Severity::High,
        description: "Rules suspension framing",
    },
    RuleDef {
        id: "JB-005",
        category: Category::Jailbreak,
        pattern: r"bypass\s+(your\s+)?(safety|security|restrictions?|guidelines?|filters?|programming)",
        severity: Severity::Critical,
        description: "Safety bypass request",
    },
    RuleDef {
        id: "JB-006",
        category: Category::Jailbreak,
        pattern: r"for\s+(educational|research)\s+purposes\s+only",
        severity: Severity::Medium,
        description: "Educational-purposes framing",
    },
    RuleDef {
        id: "JB-007",
        category: Category::Jailbreak,
        pattern: r"jail\s*break",
        severity: Severity::High,
        description: "Explicit jailbreak reference",
    },
    RuleDef {
        id: "JB-008",
        category: Category::Jailbreak,
        pattern: r"(uncensored|unfiltered)\s+(mode|version|response)",
        severity: Severity::High,
        description: "Unfiltered output request",
    },

    // Context manipulation
    RuleDef {
        id: "CM-001",
        category: Category::ContextManipulation,
        pattern: r"system\s+override",
        severity: Severity::High,
        description: "Fake system override marker",
    },
    RuleDef {
        id: "CM-002",
        category: Category::ContextManipulation,
        pattern: r"end\s+of\s+(conversation|system\s+prompt|context)",
        severity: Severity::High,
        description: "Forged conversation boundary",
    },
    RuleDef {
        id: "CM-003",
        category: Category::ContextManipulation,
        pattern: r"new\s+session\s*:",
        severity: Severity::High,
        description: "Forged session restart",
    },
    RuleDef {
        id: "CM-004",
        category: Category::ContextManipulation,
        pattern: r"\[\s*system\s*\]|<\s*system\s*>",
        severity: Severity::High,
        description: "Injected system tag",
    },
    RuleDef {
        id: "CM-005",
        category: Category::ContextManipulation,
        pattern: r"<!--.{0,80}(instruction|override|ignore)",
        severity: Severity::High,
        description: "Hidden instruction in markup comment",
    },
    RuleDef {
        id: "CM-006",
        category: Category::ContextManipulation,
        pattern: r"\bnew\s+instructions?\s*:",
        severity: Severity::High,
        description: "Injected replacement instructions",
    },
];
