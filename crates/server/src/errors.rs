use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool execution error: {0}")]
    ToolError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request: {0}")]
    ValidationError(String),
}

impl AgentError {
    /// Returns the appropriate HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            AgentError::ToolNotFound(_) => 404,
            AgentError::ToolError(_) => 400,
            AgentError::ConfigError(_) => 500,
            AgentError::ValidationError(_) => 400,
        }
    }

    /// Returns true if the error is potentially recoverable with a retry
    pub fn is_retryable(&self) -> bool {
        match self {
            AgentError::ToolNotFound(_) => false,
            AgentError::ToolError(_) => true, // the caller may fix its arguments
            AgentError::ConfigError(_) => false,
            AgentError::ValidationError(_) => false,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "error": self.to_string(),
            "retryable": self.is_retryable()
        })
    }
}

impl From<tooling::ToolError> for AgentError {
    fn from(error: tooling::ToolError) -> Self {
        AgentError::ToolError(error.to_string())
    }
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_correct_http_status_codes() {
        assert_eq!(
            AgentError::ToolNotFound("x".to_string()).http_status_code(),
            404
        );
        assert_eq!(
            AgentError::ToolError("test".to_string()).http_status_code(),
            400
        );
        assert_eq!(
            AgentError::ConfigError("test".to_string()).http_status_code(),
            500
        );
        assert_eq!(
            AgentError::ValidationError("test".to_string()).http_status_code(),
            400
        );
    }

    #[test]
    fn should_return_correct_retryable_flags() {
        assert!(!AgentError::ToolNotFound("x".to_string()).is_retryable());
        assert!(AgentError::ToolError("test".to_string()).is_retryable());
        assert!(!AgentError::ConfigError("test".to_string()).is_retryable());
        assert!(!AgentError::ValidationError("test".to_string()).is_retryable());
    }

    #[test]
    fn should_render_json_body() {
        let body = AgentError::ToolNotFound("launch_rockets".to_string()).to_json();

        assert_eq!(body["error"], "Tool not found: launch_rockets");
        assert_eq!(body["retryable"], false);
    }

    #[test]
    fn should_convert_tool_errors() {
        let error: AgentError = tooling::ToolError::new("say_hello", "boom", false).into();

        assert_eq!(
            error.to_string(),
            "Tool execution error: Tool 'say_hello' error: boom"
        );
    }

    #[test]
    fn should_map_to_http_response() {
        let response = AgentError::ValidationError("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
