//! The tools this agent ships with.

pub mod greeting;
pub mod sum;
pub mod time;

pub use greeting::{say_hello, GreetingTool, GREETING};
pub use sum::{calculate_sum, SumTool, INVALID_NUMBERS_MESSAGE};
pub use time::{current_time_at, get_current_time, CurrentTimeTool};

use crate::registry::BoxedTool;

/// Resolves a builtin by the name it is registered under.
pub fn by_name(name: &str) -> Option<BoxedTool> {
    match name {
        time::NAME => Some(Box::new(CurrentTimeTool)),
        sum::NAME => Some(Box::new(SumTool)),
        greeting::NAME => Some(Box::new(GreetingTool)),
        _ => None,
    }
}

/// Names of every builtin, in declaration order.
pub fn names() -> [&'static str; 3] {
    [time::NAME, sum::NAME, greeting::NAME]
}

pub fn default_tools() -> Vec<BoxedTool> {
    vec![
        Box::new(CurrentTimeTool),
        Box::new(SumTool),
        Box::new(GreetingTool),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_every_builtin_by_name() {
        for name in names() {
            let tool = by_name(name).unwrap();
            assert_eq!(tool.name(), name);
        }
        assert!(by_name("file_summarizer").is_none());
    }

    #[test]
    fn should_list_default_tools_in_declaration_order() {
        let tools: Vec<String> = default_tools()
            .iter()
            .map(|tool| tool.name().to_string())
            .collect();

        assert_eq!(tools, vec!["get_current_time", "calculate_sum", "say_hello"]);
    }
}
