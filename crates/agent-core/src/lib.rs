//! Core abstractions for the QuantGPT agent framework
//!
//! This crate defines the agent contract, the per-call context bag and the
//! error taxonomy shared by tools, workflows and the hosting layer.

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::Context;
pub use error::{Error, Result};
