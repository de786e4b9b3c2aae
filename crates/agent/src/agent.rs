use crate::root::ROOT_AGENT_NAME;
use agentic_core::AgentSettings;
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use tooling::{builtin, BoxedTool, ToolError, ToolInput, ToolOutput, ToolRegistry};

/// A configured agent: identity, model reference, instructions and the tools
/// it may call. Immutable once built.
#[derive(Debug, Clone)]
pub struct Agent {
    pub(crate) name: String,
    pub(crate) model: String,
    pub(crate) global_instruction: String,
    pub(crate) instruction: String,
    pub(crate) tools: ToolRegistry,
}

/// What a host reads to discover the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    pub export: String,
    pub name: String,
    pub model: String,
    pub global_instruction: String,
    pub instruction: String,
    pub tools: Vec<serde_json::Value>,
}

impl Agent {
    pub fn builder(name: impl Into<String>, model: impl Into<String>) -> AgentBuilder {
        AgentBuilder {
            name: name.into(),
            model: model.into(),
            global_instruction: String::new(),
            instruction: String::new(),
            tools: Vec::new(),
        }
    }

    pub fn from_settings(settings: &AgentSettings) -> Result<Self> {
        let mut builder = Agent::builder(&settings.name, &settings.model)
            .global_instruction(&settings.global_instruction)
            .instruction(&settings.instruction);

        for tool_name in &settings.tools {
            let tool = builtin::by_name(tool_name).with_context(|| {
                format!(
                    "Unknown tool '{}' (available: {})",
                    tool_name,
                    builtin::names().join(", ")
                )
            })?;
            builder = builder.tool(tool);
        }

        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn global_instruction(&self) -> &str {
        &self.global_instruction
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub async fn call_tool(&self, input: ToolInput) -> Result<ToolOutput, ToolError> {
        self.tools.execute_tool(input).await
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest {
            export: ROOT_AGENT_NAME.to_string(),
            name: self.name.clone(),
            model: self.model.clone(),
            global_instruction: self.global_instruction.clone(),
            instruction: self.instruction.clone(),
            tools: self.tools.get_all_schemas(),
        }
    }
}

pub struct AgentBuilder {
    name: String,
    model: String,
    global_instruction: String,
    instruction: String,
    tools: Vec<BoxedTool>,
}

impl AgentBuilder {
    pub fn global_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.global_instruction = instruction.into();
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn tool(mut self, tool: BoxedTool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn build(self) -> Result<Agent> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Agent name must not be empty");
        }
        if self.model.trim().is_empty() {
            anyhow::bail!("Agent '{}' has no model configured", self.name);
        }

        let mut tools = ToolRegistry::new();
        for tool in self.tools {
            tools
                .register(tool)
                .with_context(|| format!("Invalid tool list for agent '{}'", self.name))?;
        }

        info!(
            "Configured agent '{}' on model {} with tools {:?}",
            self.name,
            self.model,
            tools.list_tools()
        );

        Ok(Agent {
            name: self.name,
            model: self.model,
            global_instruction: self.global_instruction,
            instruction: self.instruction,
            tools,
        })
    }
}
