//! Attack chain evaluation.
//!
//! Plays each chain against a [`Responder`] step by step. A chain is
//! vulnerable if any single step compromises the agent, or if the steps
//! taken together match a known escalation pattern even though each
//! reply looked harmless.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chains::{builtin_chains, AttackChain, ChainKind};
use crate::indicators;
use crate::simulator::Responder;

/// One step of a chain and how the agent handled it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The user turn sent to the agent.
    pub step: String,
    /// The agent's reply.
    pub response: String,
    /// Whether the reply compromised the agent.
    pub vulnerable: bool,
}

/// Verdict for one chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainOutcome {
    /// Chain display name.
    pub name: String,
    /// Chain escalation summary.
    pub description: String,
    /// The chain's objective.
    pub kind: ChainKind,
    /// Per-step results, in chain order.
    pub steps: Vec<StepOutcome>,
    /// Whether the steps collectively matched an escalation pattern.
    pub pattern_match: bool,
    /// Whether the chain succeeded against the agent.
    pub vulnerable: bool,
}

impl ChainOutcome {
    /// Number of individually compromising steps.
    pub fn vulnerable_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.vulnerable).count()
    }
}

/// Aggregate over all evaluated chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainScanReport {
    pub total_chains: usize,
    pub vulnerable_chains: usize,
    pub safe_chains: usize,
    /// Only the chains that succeeded, in scan order.
    pub chain_findings: Vec<ChainOutcome>,
    /// Per-chain verdicts, in scan order.
    pub outcomes: Vec<ChainOutcome>,
}

/// Evaluates multi-step attack chains against an agent.
#[derive(Debug, Clone)]
pub struct ChainEvaluator {
    chains: Vec<AttackChain>,
}

impl Default for ChainEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainEvaluator {
    /// Evaluator over the built-in chain scenarios.
    pub fn new() -> Self {
        Self {
            chains: builtin_chains(),
        }
    }

    /// Evaluator over a custom chain set.
    pub fn with_chains(chains: Vec<AttackChain>) -> Self {
        Self { chains }
    }

    /// The chains this evaluator plays.
    pub fn chains(&self) -> &[AttackChain] {
        &self.chains
    }

    /// Play every chain against the agent.
    pub fn evaluate(&self, responder: &dyn Responder, agent_prompt: &str) -> ChainScanReport {
        let outcomes: Vec<ChainOutcome> = self
            .chains
            .iter()
            .map(|chain| Self::evaluate_chain(chain, responder, agent_prompt))
            .collect();

        let chain_findings: Vec<ChainOutcome> =
            outcomes.iter().filter(|o| o.vulnerable).cloned().collect();
        ChainScanReport {
            total_chains: outcomes.len(),
            vulnerable_chains: chain_findings.len(),
            safe_chains: outcomes.len() - chain_findings.len(),
            chain_findings,
            outcomes,
        }
    }

    fn evaluate_chain(
        chain: &AttackChain,
        responder: &dyn Responder,
        agent_prompt: &str,
    ) -> ChainOutcome {
        let steps: Vec<StepOutcome> = chain
            .steps
            .iter()
            .map(|step| {
                let response = responder.respond(agent_prompt, step);
                let vulnerable = indicators::is_compromised(agent_prompt, &response);
                StepOutcome {
                    step: step.clone(),
                    response,
                    vulnerable,
                }
            })
            .collect();

        let pattern_match = indicators::chain_pattern_detected(&chain.steps);
        let vulnerable = pattern_match || steps.iter().any(|s| s.vulnerable);

        debug!(chain = %chain.name, vulnerable, pattern_match, "chain evaluated");

        ChainOutcome {
            name: chain.name.clone(),
            description: chain.description.clone(),
            kind: chain.kind,
            steps,
            pattern_match,
            vulnerable,
        }
    }
}
