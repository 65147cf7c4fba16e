//! Four-function calculator tool

use agent_core::{Error, Result};
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

/// Tool performing `add`, `subtract`, `multiply` and `divide`
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorTool;

#[derive(Debug, Deserialize)]
struct CalculatorParams {
    operation: String,
    a: f64,
    b: f64,
}

impl CalculatorTool {
    /// Create a new calculator tool
    pub fn new() -> Self {
        Self
    }
}

/// Apply `operation` to `a` and `b`
///
/// The operation name is matched case-insensitively after trimming.
pub fn calculate(operation: &str, a: f64, b: f64) -> Result<f64> {
    let result = match operation.trim().to_lowercase().as_str() {
        "add" => a + b,
        "subtract" => a - b,
        "multiply" => a * b,
        "divide" => {
            if b == 0.0 {
                return Err(Error::InvalidValue("Division by zero".to_string()));
            }
            a / b
        }
        _ => {
            return Err(Error::InvalidValue(format!(
                "Unknown operation: {operation}. Use add, subtract, multiply, divide."
            )));
        }
    };

    if !result.is_finite() {
        return Err(Error::InvalidValue(format!(
            "Result of {operation} is not a finite number"
        )));
    }

    Ok(result)
}

#[async_trait]
impl Tool for CalculatorTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: CalculatorParams = serde_json::from_value(params)
            .map_err(|e| Error::InvalidArguments(e.to_string()))?;

        calculate(&params.operation, params.a, params.b).map(|result| json!(result))
    }

    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs add, subtract, multiply, divide. Use operation and two numbers."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "operation": schema::string_enum(
                    "Arithmetic operation",
                    &["add", "subtract", "multiply", "divide"],
                ),
                "a": schema::number("First operand"),
                "b": schema::number("Second operand"),
            }),
            &["operation", "a", "b"],
        )
    }
}
