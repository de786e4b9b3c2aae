pub mod builtin;
pub mod number;
pub mod registry;
pub mod tool;

pub use builtin::{CurrentTimeTool, GreetingTool, SumTool};
pub use number::Number;
pub use registry::{BoxedTool, ToolRegistry};
pub use tool::{Tool, ToolError, ToolInput, ToolOutput};
