//! The hello-world agent declaration.
//!
//! A host looks for [`root_agent`] (exported under [`ROOT_AGENT_NAME`]),
//! reads its identity, instructions and tool schemas, and invokes the tools
//! by name when the model asks for them.

pub mod agent;
pub mod root;

pub use agent::{Agent, AgentBuilder, AgentManifest};
pub use root::{create_agent, root_agent, ROOT_AGENT_NAME};
