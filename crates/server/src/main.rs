use agent::{root_agent, Agent};
use agentic_core::{Config, ServerConfig};
use anyhow::Context;
use log::{info, warn};
use server::errors::AgentError;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set default log level if not already set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let loaded = Config::load_optional_from_env()
        .map_err(|e| AgentError::ConfigError(format!("{:#}", e)))?;

    let (agent, server_config) = match loaded {
        Some(config) => {
            let config = config.with_env_overrides();
            let agent = Agent::from_settings(&config.agent)
                .map_err(|e| AgentError::ConfigError(format!("{:#}", e)))?;
            (Arc::new(agent), config.server)
        }
        None => {
            warn!(
                "No config file at {}, serving the default agent",
                std::env::var("CONFIG_PATH").unwrap_or_else(|_| Config::default_config_path())
            );
            (
                Arc::new(root_agent().clone()),
                ServerConfig::default().with_env_overrides(),
            )
        }
    };

    let app = server::create_app(Arc::clone(&agent));

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", server_config.bind_address))?;

    info!(
        "Serving agent '{}' ({} tools) on http://{}",
        agent.name(),
        agent.tools().tool_count(),
        server_config.bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
