//! Core Agent trait definition

use crate::{Context, Result};
use async_trait::async_trait;

/// Core trait that all agents must implement
///
/// An agent binds a fixed set of capabilities at construction time and
/// exposes a single textual entry point. Input and output stay plain strings
/// so the hosting layer (HTTP, CLI) never needs to know which agent it talks to.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Answer `query`, optionally reading extra values from `context`
    ///
    /// Recoverable input problems are reported as a returned string by
    /// convention; `Err` is reserved for failures the caller must handle.
    async fn run(&self, query: &str, context: &Context) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;
}
