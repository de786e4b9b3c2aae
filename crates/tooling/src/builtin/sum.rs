use crate::number::Number;
use crate::tool::{Tool, ToolError, ToolInput, ToolOutput};
use async_trait::async_trait;
use log::debug;
use serde_json::json;

pub const NAME: &str = "calculate_sum";
pub const INVALID_NUMBERS_MESSAGE: &str = "Error: Please provide valid numbers for calculation.";

pub fn calculate_sum(num1: Number, num2: Number) -> String {
    format!("The sum of {} and {} is {}.", num1, num2, num1 + num2)
}

/// Adds two numbers. Arguments are checked before the addition; anything
/// that is not a number is answered with [`INVALID_NUMBERS_MESSAGE`] instead
/// of an error, so the model can correct itself.
pub struct SumTool;

impl SumTool {
    fn operands(input: &ToolInput) -> Option<(Number, Number)> {
        let num1 = Number::from_json(input.argument("num1")?)?;
        let num2 = Number::from_json(input.argument("num2")?)?;
        Some((num1, num2))
    }
}

#[async_trait]
impl Tool for SumTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Calculates the sum of two numbers. Returns a sentence stating the sum."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "num1": {"type": "number", "description": "The first number."},
                "num2": {"type": "number", "description": "The second number."}
            },
            "required": ["num1", "num2"]
        })
    }

    async fn execute(&self, input: ToolInput) -> Result<ToolOutput, ToolError> {
        self.validate_input(&input)?;

        match Self::operands(&input) {
            Some((num1, num2)) => Ok(ToolOutput::text(calculate_sum(num1, num2))),
            None => {
                debug!("Rejected sum arguments: {:?}", input.arguments);
                Ok(ToolOutput::text_error(INVALID_NUMBERS_MESSAGE))
            }
        }
    }
}
