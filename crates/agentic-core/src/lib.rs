//! Configuration shared by the agent crates.

pub mod config;

pub use config::{AgentSettings, Config, ServerConfig};
