//! Tool misuse rules: injection payloads aimed at agent tools.
//!
//! Covers SQL injection (CWE-89), command injection (CWE-77), file
//! manipulation (CWE-22), network exploitation (CWE-918), coerced tool
//! calls, and data exfiltration. Aligned with OWASP LLM02/LLM06/LLM07.

use super::RuleDef;
use crate::models::{Category, Severity};

pub(super) const RULES: &[RuleDef] = &[
    // SQL injection
    RuleDef {
        id: "TM-001",
        category: Category::SqlInjection,
        pattern: r"(delete|drop)\s+(from|table)\s+\w+",
        severity: Severity::Critical,
        description: "SQL DELETE/DROP command detected",
    },
    RuleDef {
        id: "TM-002",
        category: Category::SqlInjection,
        pattern: r";\s*(drop|delete|truncate)\s+(table|database)",
        severity: Severity::Critical,
        description: "SQL injection with destructive command",
    },
    RuleDef {
        id: "TM-003",
        category: Category::SqlInjection,
        pattern: r"(union|or)\s+\d+\s*=\s*\d+",
        severity: Severity::High,
        description: "SQL injection union/boolean attack",
    },
    RuleDef {
        id: "TM-004",
        category: Category::SqlInjection,
        pattern: r"--\s*$",
        severity: Severity::Medium,
        description: "SQL comment injection",
    },
    RuleDef {
        id: "TM-005",
        category: Category::SqlInjection,
        pattern: r";\s*exec\s*\(",
        severity: Severity::Critical,
        description: "SQL stored procedure execution attempt",
    },

    // Command injection
    RuleDef {
        id: "TM-006",
        category: Category::CommandInjection,
        pattern: r";\s*(rm|del|format|mkfs)\s",
        severity: Severity::Critical,
        description: "Destructive shell command injection",
    },
    RuleDef {
        id: "TM-007",
        category: Category::CommandInjection,
        pattern: r"\|\s*(curl|wget|nc|netcat)",
        severity: Severity::Critical,
        description: "Network tool injection for exfiltration",
    },
    RuleDef {
        id: "TM-008",
        category: Category::CommandInjection,
        pattern: r"`[^`]+`",
        severity: Severity::High,
        description: "Backtick command substitution",
    },
    RuleDef {
        id: "TM-009",
        category: Category::CommandInjection,
        pattern: r"\$\([^\)]+\)",
        severity: Severity::High,
        description: "Command substitution syntax",
    },
    RuleDef {
        id: "TM-010",
        category: Category::CommandInjection,
        pattern: r"&&\s*(rm|del|dd|format)",
        severity: Severity::Critical,
        description: "Chained destructive command",
    },

    // File system manipulation
    RuleDef {
        id: "TM-011",
        category: Category::FileManipulation,
        pattern: r"(read|open|cat)\s+/etc/(passwd|shadow|hosts)",
        severity: Severity::Critical,
        description: "System file access attempt",
    },
    RuleDef {
        id: "TM-012",
        category: Category::FileManipulation,
        pattern: r"(delete|remove|unlink)\s+.{0,50}\.(log|conf|config|env)",
        severity: Severity::High,
        description: "Critical file deletion attempt",
    },
    RuleDef {
        id: "TM-013",
        category: Category::FileManipulation,
        pattern: r"\.\./\.\.",
        severity: Severity::High,
        description: "Path traversal attempt",
    },
    RuleDef {
        id: "TM-014",
        category: Category::FileManipulation,
        pattern: r"(write|modify|chmod)\s+.{0,50}(/bin|/sbin|/usr/bin)",
        severity: Severity::Critical,
        description: "System binary modification attempt",
    },
    RuleDef {
        id: "TM-015",
        category: Category::FileManipulation,
        pattern: r"(upload|write)\s+.{0,50}\.(exe|sh|bat|ps1)",
        severity: Severity::High,
        description: "Executable file upload attempt",
    },

    // Network exploitation
    RuleDef {
        id: "TM-016",
        category: Category::NetworkExploit,
        pattern: r"(scan|nmap|probe)\s+(all\s+)?(ports?|network|hosts?)",
        severity: Severity::High,
        description: "Network scanning attempt",
    },
    RuleDef {
        id: "TM-017",
        category: Category::NetworkExploit,
        pattern: r"(connect|bind|listen)\s+(to|on)\s+(port|socket)",
        severity: Severity::High,
        description: "Network socket manipulation",
    },
    RuleDef {
        id: "TM-018",
        category: Category::NetworkExploit,
        pattern: r"(reverse|bind)\s+shell",
        severity: Severity::Critical,
        description: "Reverse/bind shell attempt",
    },
    RuleDef {
        id: "TM-019",
        category: Category::NetworkExploit,
        pattern: r"(exfiltrate|send|post)\s+to\s+\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
        severity: Severity::Critical,
        description: "Data exfiltration to IP address",
    },
    RuleDef {
        id: "TM-020",
        category: Category::NetworkExploit,
        pattern: r"(proxy|tunnel|forward)\s+(through|via)",
        severity: Severity::Medium,
        description: "Network tunneling attempt",
    },

    // Coerced tool calls
    RuleDef {
        id: "TU-001",
        category: Category::ToolMisuse,
        pattern: r"(use|call|invoke)\s+(your\s+)?\w+\s+tool",
        severity: Severity::High,
        description: "Direct tool coercion",
    },
    RuleDef {
        id: "TU-002",
        category: Category::ToolMisuse,
        pattern: r"execute\s*(command)?\s*:?\s*(delete|drop|remove|rm|format)\b",
        severity: Severity::Critical,
        description: "Destructive execution request",
    },
    RuleDef {
        id: "TU-003",
        category: Category::ToolMisuse,
        pattern: r"(find|search|list|dump)\s+.{0,30}(passwords?|credentials?|secrets?|api\s+keys?)",
        severity: Severity::High,
        description: "Credential discovery via tools",
    },
    RuleDef {
        id: "TU-004",
        category: Category::CommandInjection,
        pattern: r"\brm\s+-rf?\b",
        severity: Severity::Critical,
        description: "Recursive filesystem deletion",
    },
    RuleDef {
        id: "TU-005",
        category: Category::ToolMisuse,
        pattern: r"transfer\s+\$?\d",
        severity: Severity::High,
        description: "Unverified financial transfer instruction",
    },

    // Data exfiltration
    RuleDef {
        id: "DE-001",
        category: Category::DataExfiltration,
        pattern: r"(send|upload|transmit|exfiltrate|forward|copy)\s+(all\s+)?(the\s+)?(user\s+|sensitive\s+)?(data|files?|records?|credentials?|secrets?|information)",
        severity: Severity::High,
        description: "Bulk data export request",
    },
    RuleDef {
        id: "DE-002",
        category: Category::DataExfiltration,
        pattern: r"(email|mail)\s+.{0,30}(secrets?|passwords?|credentials?|keys?|data)",
        severity: Severity::High,
        description: "Sensitive data sent via email",
    },
    RuleDef {
        id: "DE-003",
        category: Category::DataExfiltration,
        pattern: r"to\s+(external|remote)\s+(server|host|endpoint)",
        severity: Severity::Medium,
        description: "Transfer to external destination",
    },
    RuleDef {
        id: "DE-004",
        category: Category::DataExfiltration,
        pattern: r"(reveal|leak|expose)\s+.{0,30}(secrets?|credentials?|keys?|passwords?)",
        severity: Severity::High,
        description: "Secret disclosure request",
    },
    RuleDef {
        id: "DE-005",
        category: Category::DataExfiltration,
        pattern: r"(steal|harvest)\s+.{0,30}(data|credentials?|tokens?|cookies?|keys?)",
        severity: Severity::High,
        description: "Credential theft request",
    },
];
