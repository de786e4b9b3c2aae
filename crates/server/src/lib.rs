//! HTTP surface through which a host discovers the agent and calls its tools.

use agent::{Agent, AgentManifest};
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, info};
use serde_json::{json, Value};
use std::sync::Arc;
use tooling::{ToolInput, ToolOutput};

pub mod errors;
pub mod models;

use errors::AgentError;
use models::{InvokeToolRequest, ToolListResponse};

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn describe_agent(State(agent): State<Arc<Agent>>) -> Json<AgentManifest> {
    Json(agent.manifest())
}

async fn list_tools(State(agent): State<Arc<Agent>>) -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: agent.tools().get_all_schemas(),
    })
}

async fn invoke_tool(
    State(agent): State<Arc<Agent>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolOutput>, AgentError> {
    if !agent.tools().is_registered(&name) {
        return Err(AgentError::ToolNotFound(name));
    }

    let request: InvokeToolRequest = if body.iter().all(u8::is_ascii_whitespace) {
        InvokeToolRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| AgentError::ValidationError(e.to_string()))?
    };

    debug!("Invoking tool '{}' with {:?}", name, request.arguments);
    let output = agent
        .call_tool(ToolInput::new(name.clone()).with_arguments(request.arguments))
        .await?;
    info!("Tool '{}' finished (success: {})", name, output.success);

    Ok(Json(output))
}

pub fn create_app(agent: Arc<Agent>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/agent", get(describe_agent))
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(invoke_tool))
        .with_state(agent)
}
