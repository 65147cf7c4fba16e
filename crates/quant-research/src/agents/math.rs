//! Arithmetic agent

use agent_core::{Agent, Context, Result};
use agent_tools::{Tool, ToolRegistry};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use crate::tools::CalculatorTool;

/// Reply for queries that are not `<operation> <number> <number>`
pub const USAGE_HINT: &str = "Usage: <operation> <number> <number> (e.g. add 2 3)";

/// Reply for queries whose operands do not parse
pub const INVALID_NUMBERS: &str = "Invalid numbers. Use numeric values.";

/// Agent answering `<operation> <a> <b>` queries through the `calculator` tool
///
/// Malformed queries are answered with a hint string; calculator failures
/// such as division by zero are returned as errors.
pub struct MathAgent {
    tools: ToolRegistry,
}

impl MathAgent {
    /// Create an agent over an injected tool set
    pub fn new(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        Self {
            tools: ToolRegistry::new(tools),
        }
    }

    /// Tools available to this agent
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Dispatch `params` to the named tool
    pub async fn call_tool(&self, name: &str, params: Value) -> Result<Value> {
        self.tools.call(name, params).await
    }
}

impl Default for MathAgent {
    fn default() -> Self {
        Self::new([Arc::new(CalculatorTool::new()) as Arc<dyn Tool>])
    }
}

#[async_trait]
impl Agent for MathAgent {
    async fn run(&self, query: &str, _context: &Context) -> Result<String> {
        let query = query.trim().to_lowercase();
        let parts: Vec<&str> = query.split_whitespace().collect();

        let [operation, a, b] = parts.as_slice() else {
            return Ok(USAGE_HINT.to_string());
        };

        let (Some(a), Some(b)) = (parse_operand(a), parse_operand(b)) else {
            return Ok(INVALID_NUMBERS.to_string());
        };

        debug!(operation, a, b, "Dispatching to calculator");
        let result = self
            .call_tool("calculator", json!({ "operation": operation, "a": a, "b": b }))
            .await?;

        Ok(match result.as_f64() {
            Some(value) => format_number(value),
            None => result.to_string(),
        })
    }

    fn name(&self) -> &str {
        "math_agent"
    }
}

/// Parse a finite operand; `inf`, `nan` and overflowing literals count as invalid
fn parse_operand(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Shortest round-trip rendering with a signed, two-digit exponent
///
/// Integral values keep a trailing `.0` (`5.0`); very large or small ones
/// switch to exponent form (`1e+16`, `1.5e-05`).
fn format_number(value: f64) -> String {
    let rendered = format!("{value:?}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Error;

    async fn run(query: &str) -> Result<String> {
        MathAgent::default().run(query, &Context::new()).await
    }

    #[tokio::test]
    async fn test_arithmetic() {
        assert_eq!(run("add 2 3").await.unwrap(), "5.0");
        assert_eq!(run("subtract 2 3").await.unwrap(), "-1.0");
        assert_eq!(run("multiply 2.5 4").await.unwrap(), "10.0");
        assert_eq!(run("divide 15 3").await.unwrap(), "5.0");
        assert_eq!(run("divide 1 4").await.unwrap(), "0.25");
    }

    #[tokio::test]
    async fn test_query_is_normalized() {
        assert_eq!(run("  ADD   2   3 ").await.unwrap(), "5.0");
    }

    #[tokio::test]
    async fn test_wrong_token_count_returns_usage() {
        for query in ["bogus", "", "add 2", "add 2 3 4"] {
            let reply = run(query).await.unwrap();
            assert!(reply.contains("Usage"), "{query:?} -> {reply}");
        }
    }

    #[tokio::test]
    async fn test_bad_numbers_return_hint() {
        let reply = run("add foo bar").await.unwrap();
        assert!(reply.contains("Invalid") && reply.contains("numeric"));
        assert_eq!(run("add 1 x").await.unwrap(), INVALID_NUMBERS);
    }

    #[tokio::test]
    async fn test_non_finite_operands_return_hint() {
        for query in ["add inf 1", "add nan 1", "add 1e400 1", "subtract 1 -infinity"] {
            assert_eq!(run(query).await.unwrap(), INVALID_NUMBERS, "{query:?}");
        }
    }

    #[tokio::test]
    async fn test_exponent_formatting() {
        assert_eq!(run("multiply 1e8 1e8").await.unwrap(), "1e+16");
        assert_eq!(run("add 0.00001 0").await.unwrap(), "1e-05");
        assert_eq!(run("divide 3 200000").await.unwrap(), "1.5e-05");
        assert_eq!(run("multiply 2e10 1e10").await.unwrap(), "2e+20");
        assert_eq!(run("add 0.0001 0").await.unwrap(), "0.0001");
        assert_eq!(run("divide 1 3").await.unwrap(), "0.3333333333333333");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1.2345e123), "1.2345e+123");
    }

    #[tokio::test]
    async fn test_division_by_zero_is_an_error() {
        let err = run("divide 1 0").await.unwrap_err();
        assert!(matches!(err, Error::InvalidValue(ref msg) if msg == "Division by zero"));
    }

    #[tokio::test]
    async fn test_unknown_operation_is_an_error() {
        let err = run("power 2 3").await.unwrap_err();
        assert!(err.to_string().starts_with("Unknown operation: power"));
    }

    #[tokio::test]
    async fn test_without_calculator() {
        let agent = MathAgent::new(Vec::new());
        let err = agent.run("add 2 3", &Context::new()).await.unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(ref name) if name == "calculator"));
        assert_eq!(agent.name(), "math_agent");
    }

    #[tokio::test]
    async fn test_call_tool_unknown_name() {
        let agent = MathAgent::default();
        let err = agent.call_tool("nope", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(_)));
        assert_eq!(agent.tools().names(), vec!["calculator"]);
    }
}
