use crate::agent::Agent;
use agentic_core::AgentSettings;
use log::{info, warn};
use std::sync::OnceLock;
use tooling::builtin;

/// The name hosts search for when loading this agent.
pub const ROOT_AGENT_NAME: &str = "root_agent";

static ROOT_AGENT: OnceLock<Agent> = OnceLock::new();

/// The agent this crate exports. Built on first access, then shared for the
/// rest of the process.
pub fn root_agent() -> &'static Agent {
    ROOT_AGENT.get_or_init(|| {
        let agent = agent_or_defaults(&AgentSettings::default().with_env_overrides());
        info!(
            "Initialising {} '{}' on model {}",
            ROOT_AGENT_NAME,
            agent.name(),
            agent.model()
        );
        agent
    })
}

pub fn create_agent() -> &'static Agent {
    root_agent()
}

/// Settings that fail validation are discarded in favour of the defaults.
fn agent_or_defaults(settings: &AgentSettings) -> Agent {
    match Agent::from_settings(settings) {
        Ok(agent) => agent,
        Err(e) => {
            warn!("Ignoring invalid agent settings ({:#}), using defaults", e);
            default_agent()
        }
    }
}

fn default_agent() -> Agent {
    let settings = AgentSettings::default();
    Agent {
        name: settings.name,
        model: settings.model,
        global_instruction: settings.global_instruction,
        instruction: settings.instruction,
        tools: builtin::default_tools().into_iter().collect(),
    }
}
