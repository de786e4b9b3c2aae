use crate::tool::{Tool, ToolError, ToolInput, ToolOutput};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use serde_json::json;

pub const NAME: &str = "get_current_time";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const PREFIX: &str = "The current date and time is: ";

pub fn get_current_time() -> String {
    current_time_at(Local::now().naive_local())
}

pub fn current_time_at(now: NaiveDateTime) -> String {
    format!("{}{}", PREFIX, now.format(TIMESTAMP_FORMAT))
}

/// Reads the wall clock in the host's local timezone.
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Returns the current date and time."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, input: ToolInput) -> Result<ToolOutput, ToolError> {
        self.validate_input(&input)?;
        Ok(ToolOutput::text(get_current_time()))
    }
}
