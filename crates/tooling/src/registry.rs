use crate::tool::{Tool, ToolError, ToolInput, ToolOutput};
use anyhow::Result;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

pub type BoxedTool = Box<dyn Tool>;

/// Name-indexed tool table that remembers registration order, since the
/// agent's tool list is an ordered sequence.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<BoxedTool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: BoxedTool) -> Result<()> {
        let name = tool.name().to_string();

        if self.index.contains_key(&name) {
            anyhow::bail!("Tool '{}' is already registered", name);
        }

        debug!("Registering tool '{}'", name);
        self.index.insert(name, self.tools.len());
        self.tools.push(Arc::new(tool));
        Ok(())
    }

    pub fn get_tool(&self, name: &str) -> Option<Arc<BoxedTool>> {
        self.index.get(name).map(|&i| Arc::clone(&self.tools[i]))
    }

    pub fn list_tools(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.name().to_string()).collect()
    }

    pub fn get_tool_schema(&self, name: &str) -> Option<serde_json::Value> {
        self.get_tool(name).map(|tool| tool.schema())
    }

    pub fn get_all_schemas(&self) -> Vec<serde_json::Value> {
        self.tools.iter().map(|tool| tool.schema()).collect()
    }

    pub async fn execute_tool(&self, input: ToolInput) -> Result<ToolOutput, ToolError> {
        let tool = self.get_tool(&input.name).ok_or_else(|| {
            ToolError::new(
                input.name.clone(),
                format!("Tool '{}' not found in registry", input.name),
                false,
            )
        })?;

        debug!("Executing tool '{}'", input.name);
        tool.execute(input).await
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn remove_tool(&mut self, name: &str) -> Option<Arc<BoxedTool>> {
        let position = self.index.remove(name)?;
        let removed = self.tools.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        Some(removed)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Later tools with an already registered name are skipped.
impl FromIterator<BoxedTool> for ToolRegistry {
    fn from_iter<I: IntoIterator<Item = BoxedTool>>(iter: I) -> Self {
        let mut registry = ToolRegistry::new();
        for tool in iter {
            if let Err(e) = registry.register(tool) {
                warn!("{}", e);
            }
        }
        registry
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.list_tools()).finish()
    }
}
