//! GuardRail CLI - Command-line interface for the security core

use anyhow::Context;
use clap::Parser;
use guardrail_core::{Guardrail, GuardrailConfig};

const DEFAULT_PROMPT: &str = "You are a helpful assistant.";

#[derive(Parser)]
#[command(name = "guardrail")]
#[command(about = "GuardRail - Threat detection and risk scoring for AI agents")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Scan a text for threats and score its risk
    Detect {
        /// The text to analyze
        text: String,
        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the full adversarial scan against an agent prompt
    Scan {
        /// The agent's system prompt to test
        #[arg(default_value = DEFAULT_PROMPT)]
        prompt: String,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play only the multi-step attack chains against an agent prompt
    Chains {
        /// The agent's system prompt to test
        #[arg(default_value = DEFAULT_PROMPT)]
        prompt: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    let guardrail = Guardrail::new(GuardrailConfig::default())?;

    match cli.command {
        Some(Commands::Detect { text, json }) => detect(&guardrail, &text, json)?,
        Some(Commands::Scan { prompt, json }) => scan(&guardrail, &prompt, json)?,
        Some(Commands::Chains { prompt }) => chains(&guardrail, &prompt),
        None => {
            println!("GuardRail v0.1.0 - Use --help for commands");
        }
    }

    Ok(())
}

fn detect(guardrail: &Guardrail, text: &str, json: bool) -> anyhow::Result<()> {
    let result = guardrail.score(text);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serializing score result")?
        );
        return Ok(());
    }

    println!("Risk score: {}/100 ({})", result.score, result.level);
    println!("Recommendation: {}", result.recommendation);
    if result.threats.is_empty() {
        println!("No threats detected.");
    } else {
        println!("Threats ({}):", result.threats.len());
        for threat in &result.threats {
            println!(
                "  [{}] {} ({}): {}",
                threat.severity, threat.id, threat.category, threat.description
            );
        }
    }
    for reason in &result.reasons {
        println!("  {reason}");
    }

    Ok(())
}

fn scan(guardrail: &Guardrail, prompt: &str, json: bool) -> anyhow::Result<()> {
    let report = guardrail.run_scan(prompt);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing scan report")?
        );
        return Ok(());
    }

    println!("Security scan complete");
    println!(
        "  Tests: {} | Vulnerable: {} | Safe: {}",
        report.total_tests, report.vulnerable, report.safe
    );
    println!("  Grade: {}", report.security_score);
    for finding in &report.findings {
        println!("  [{}] {}", finding.attack_name, finding.description);
    }

    Ok(())
}

fn chains(guardrail: &Guardrail, prompt: &str) {
    let report = guardrail.run_chain_scan(prompt);

    println!(
        "Chains: {} | Vulnerable: {} | Safe: {}",
        report.total_chains, report.vulnerable_chains, report.safe_chains
    );
    for outcome in &report.outcomes {
        let status = if outcome.vulnerable { "VULNERABLE" } else { "SAFE" };
        println!(
            "  {status}: {} ({}/{} steps, pattern match: {})",
            outcome.name,
            outcome.vulnerable_steps(),
            outcome.steps.len(),
            outcome.pattern_match
        );
    }
}
