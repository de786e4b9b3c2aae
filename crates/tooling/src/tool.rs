use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single tool call as requested by the host: the tool name plus its
/// JSON arguments keyed by parameter name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolInput {
    pub name: String,
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_argument<T: Serialize>(mut self, key: &str, value: T) -> Result<Self> {
        let json_value = serde_json::to_value(value)?;
        self.arguments.insert(key.to_string(), json_value);
        Ok(self)
    }

    pub fn with_arguments(mut self, arguments: HashMap<String, serde_json::Value>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    /// Raw access, for tools that validate arguments themselves.
    pub fn argument(&self, key: &str) -> Option<&serde_json::Value> {
        self.arguments.get(key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolOutput {
    pub success: bool,
    pub result: serde_json::Value,
    pub error_message: Option<String>,
}

impl ToolOutput {
    /// Plain-text tool result. Every builtin tool answers with a string.
    pub fn text(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: serde_json::Value::String(result.into()),
            error_message: None,
        }
    }

    /// A failure reported back to the model as text rather than raised.
    pub fn text_error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            result: serde_json::Value::String(message.clone()),
            error_message: Some(message),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        self.result.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    pub tool_name: String,
    pub message: String,
    pub recoverable: bool,
}

impl ToolError {
    pub fn new(
        tool_name: impl Into<String>,
        message: impl Into<String>,
        recoverable: bool,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            message: message.into(),
            recoverable,
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tool '{}' error: {}", self.tool_name, self.message)
    }
}

impl std::error::Error for ToolError {}

/// A callable exposed to the model. `name`, `description` and `parameters`
/// are what the host builds its calling schema from, so they must stay stable.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> serde_json::Value;

    async fn execute(&self, input: ToolInput) -> Result<ToolOutput, ToolError>;

    fn validate_input(&self, input: &ToolInput) -> Result<(), ToolError> {
        if input.name != self.name() {
            return Err(ToolError::new(
                self.name(),
                format!("Expected tool '{}', got '{}'", self.name(), input.name),
                false,
            ));
        }
        Ok(())
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": self.parameters()
        })
    }
}
