// SPDX-License-Identifier: MIT

use crate::toolkit::error::Error;
use crate::toolkit::tool::{ApiResult, Tool};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn register(&self, tool: Arc<dyn Tool>) {
        let mut tools = self.tools.write().await;
        if tools.insert(tool.name().to_string(), tool.clone()).is_some() {
            log::warn!("Tool '{}' registered twice, keeping the latest", tool.name());
        }
    }

    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// Registered tool names, sorted
    pub async fn names(&self) -> Vec<String> {
        let tools = self.tools.read().await;
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Function definitions of every registered tool, sorted by name
    pub async fn definitions(&self) -> Vec<Value> {
        let tools = self.tools.read().await;
        let mut sorted: Vec<&Arc<dyn Tool>> = tools.values().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted.into_iter().map(|t| t.definition()).collect()
    }

    /// Look up a tool and run it
    pub async fn call(&self, name: &str, input: Value) -> Result<ApiResult, Error> {
        let tool = self
            .get(name)
            .await
            .ok_or_else(|| Error::tool_not_found(name))?;
        Ok(tool.execute(input).await)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use once_cell::sync::Lazy;

    static MOCK_SCHEMA: Lazy<Value> = Lazy::new(|| {
        json!({
            "type": "object",
            "properties": {}
        })
    });

    /// A mock tool for testing
    struct MockTool {
        name: String,
        description: String,
    }

    impl MockTool {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                description: format!("Mock tool: {}", name),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn schema(&self) -> &Value {
            &MOCK_SCHEMA
        }

        async fn execute(&self, input: Value) -> ApiResult {
            ApiResult::Success(json!({ "echo": input }))
        }
    }

    #[tokio::test]
    async fn test_register_and_get_tool() {
        let registry = ToolRegistry::new();
        let tool = Arc::new(MockTool::new("test_tool"));

        registry.register(tool).await;

        let retrieved = registry.get("test_tool").await;
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name(), "test_tool");
    }

    #[tokio::test]
    async fn test_get_nonexistent_tool() {
        let registry = ToolRegistry::new();

        let retrieved = registry.get("nonexistent").await;
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_register_overwrites_existing() {
        let registry = ToolRegistry::new();

        registry
            .register(Arc::new(MockTool::new("same_name")))
            .await;
        registry
            .register(Arc::new(MockTool::new("same_name")))
            .await;

        assert_eq!(registry.names().await, vec!["same_name".to_string()]);
    }

    #[tokio::test]
    async fn test_registry_is_clone() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("tool1"))).await;

        let cloned = registry.clone();
        assert!(cloned.get("tool1").await.is_some());

        // Registering on clone should be visible to original
        cloned.register(Arc::new(MockTool::new("tool2"))).await;
        assert!(registry.get("tool2").await.is_some());
    }

    #[tokio::test]
    async fn test_definitions_sorted_by_name() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("zeta"))).await;
        registry.register(Arc::new(MockTool::new("alpha"))).await;

        let defs = registry.definitions().await;
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0]["type"], "function");
        assert_eq!(defs[0]["function"]["name"], "alpha");
        assert_eq!(defs[0]["function"]["description"], "Mock tool: alpha");
        assert_eq!(defs[1]["function"]["name"], "zeta");
        assert_eq!(defs[1]["function"]["parameters"]["type"], "object");
    }

    #[tokio::test]
    async fn test_call_runs_tool() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("echo"))).await;

        let result = registry.call("echo", json!({"a": 1})).await.unwrap();
        assert_eq!(result, ApiResult::Success(json!({"echo": {"a": 1}})));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = ToolRegistry::new();

        let err = registry.call("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { ref name } if name == "missing"));
    }
}
