//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools that agents can execute
///
/// Tools are constructed once and hold no per-call state, so the same
/// instance can serve concurrent callers.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with a named-argument bag
    ///
    /// # Arguments
    ///
    /// * `params` - JSON object of named arguments (should match `input_schema`)
    ///
    /// # Returns
    ///
    /// A string, number or structured JSON value. Value-domain problems
    /// (e.g. division by zero) are reported as `Err`.
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Used as the dispatch key; must be unique within a ToolRegistry.
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// Informational only: `execute` decodes its own arguments.
    fn input_schema(&self) -> Value;
}
