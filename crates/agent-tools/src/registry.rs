//! Tool registry: the name → tool mapping an agent dispatches through

use crate::Tool;
use agent_core::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Immutable set of tools keyed by name
///
/// Built once from an ordered list. When two tools share a name the later
/// one wins but keeps the position of the first in [`list_tools`](Self::list_tools).
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create a registry from an ordered list of tools
    pub fn new(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        let mut registry = Self::default();
        for tool in tools {
            let name = tool.name().to_string();
            if registry.tools.insert(name.clone(), tool).is_none() {
                registry.order.push(name);
            } else {
                debug!("Tool '{}' registered twice, keeping the later one", name);
            }
        }
        registry
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check whether a tool with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Execute the named tool with `params`
    ///
    /// Fails with [`Error::ToolNotFound`] when the name is absent; otherwise
    /// the tool's own result or error is returned unmodified.
    pub async fn call(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;

        debug!("Calling tool: {}", name);
        tool.execute(params).await
    }

    /// List all tools in registration order
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name).cloned())
            .collect()
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct ConstTool {
        name: &'static str,
        value: i64,
    }

    #[async_trait]
    impl Tool for ConstTool {
        async fn execute(&self, _params: Value) -> Result<Value> {
            Ok(json!(self.value))
        }

        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Returns a constant"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }
    }

    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        async fn execute(&self, _params: Value) -> Result<Value> {
            Err(Error::InvalidValue("nope".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }
    }

    fn constant(name: &'static str, value: i64) -> Arc<dyn Tool> {
        Arc::new(ConstTool { name, value })
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("anything").is_none());
    }

    #[test]
    fn test_keeps_registration_order() {
        let registry = ToolRegistry::new(vec![constant("b", 1), constant("a", 2)]);
        assert_eq!(registry.names(), vec!["b", "a"]);
        assert_eq!(registry.list_tools()[0].name(), "b");
        assert!(registry.contains("a"));
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let registry = ToolRegistry::new(vec![
            constant("calc", 1),
            constant("other", 2),
            constant("calc", 3),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["calc", "other"]);

        let result = tokio_test::block_on(registry.call("calc", json!({}))).unwrap();
        assert_eq!(result, json!(3));
    }

    #[test]
    fn test_call_unknown_tool_fails() {
        let registry = ToolRegistry::new(vec![constant("calc", 1)]);

        for params in [json!({}), json!({ "x": 1 }), Value::Null] {
            let err = tokio_test::block_on(registry.call("nonexistent", params)).unwrap_err();
            assert!(matches!(err, Error::ToolNotFound(ref name) if name == "nonexistent"));
        }
    }

    #[test]
    fn test_call_propagates_tool_error() {
        let registry = ToolRegistry::new(vec![Arc::new(FailingTool) as Arc<dyn Tool>]);
        let err = tokio_test::block_on(registry.call("failing", json!({}))).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(ref msg) if msg == "nope"));
    }
}
