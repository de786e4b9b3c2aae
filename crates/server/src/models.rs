use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of `POST /tools/:name`. An empty body means no arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeToolRequest {
    #[serde(default)]
    pub arguments: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<Value>,
}
