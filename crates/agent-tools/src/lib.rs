//! Tool contract and dispatch for QuantGPT agents
//!
//! A [`Tool`] is a named, stateless capability. Agents receive their tools
//! through a [`ToolRegistry`] built at construction time and dispatch to them
//! by name.

pub mod registry;
pub mod schema;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::Tool;
