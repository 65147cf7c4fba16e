//! Helpers to build JSON schemas for tool inputs

use serde_json::{Value, json};

/// Create a JSON schema for an object with properties
///
/// # Example
///
/// ```
/// use agent_tools::schema;
/// use serde_json::json;
///
/// let schema = schema::object(
///     json!({
///         "symbol": schema::string("Ticker symbol"),
///         "limit": schema::number("Maximum results"),
///     }),
///     &["symbol"],
/// );
/// assert_eq!(schema["required"][0], "symbol");
/// ```
pub fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// String property schema
pub fn string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
    })
}

/// String property restricted to a set of values
pub fn string_enum(description: &str, values: &[&str]) -> Value {
    json!({
        "type": "string",
        "description": description,
        "enum": values,
    })
}

/// Number property schema
pub fn number(description: &str) -> Value {
    json!({
        "type": "number",
        "description": description,
    })
}
