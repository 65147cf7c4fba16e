//! Sequential state pipelines for QuantGPT agents
//!
//! A [`Workflow`] threads one state value through an ordered list of
//! [`Stage`]s. Each stage reads the state and returns a delta which the
//! workflow merges before moving on, so stages never mutate shared data.

pub mod stage;
pub mod workflow;

// Re-export for convenience
pub use stage::{Stage, WorkflowState};
pub use workflow::{Workflow, WorkflowBuilder};
