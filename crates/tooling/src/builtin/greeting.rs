use crate::tool::{Tool, ToolError, ToolInput, ToolOutput};
use async_trait::async_trait;
use serde_json::json;

pub const NAME: &str = "say_hello";
pub const GREETING: &str = "Hello from your ADK Agent!";

pub fn say_hello() -> String {
    GREETING.to_string()
}

pub struct GreetingTool;

#[async_trait]
impl Tool for GreetingTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Returns a simple greeting message."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, input: ToolInput) -> Result<ToolOutput, ToolError> {
        self.validate_input(&input)?;
        Ok(ToolOutput::text(say_hello()))
    }
}
