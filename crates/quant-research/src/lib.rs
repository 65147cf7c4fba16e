//! QuantGPT research domain
//!
//! This crate wires the generic agent framework to a small investment
//! research assistant:
//!
//! - Tools: a calculator, a market news fetcher and a sentiment scorer
//! - Providers: the news source and sentiment scorer the tools delegate to
//! - `MathAgent`: parses `<operation> <a> <b>` and dispatches to the calculator
//! - `ResearchAgent`: a fetch → analyze → summarize pipeline ending in an LLM call
//! - Naive analytics (price forecast, equal-weight portfolio)
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_core::{Agent, Context};
//! use quant_research::{ResearchAgent, ResearchConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ResearchConfig::from_env()?;
//!     let agent = ResearchAgent::from_config(&config)?;
//!
//!     let insight = agent.run("AAPL", &Context::new()).await?;
//!     println!("{insight}");
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod analytics;
pub mod config;
pub mod error;
pub mod prompts;
pub mod providers;
pub mod tools;

// Re-export main types for convenience
pub use agents::{MathAgent, ResearchAgent, ResearchState, ResearchUpdate};
pub use analytics::{PriceForecaster, optimize_portfolio};
pub use config::{ModelInfo, ResearchConfig, available_models};
pub use error::{ResearchError, Result};
pub use providers::{LexiconScorer, NewsSource, SentimentScorer, StaticNewsSource};
pub use tools::{CalculatorTool, FetchMarketNewsTool, SentimentTool};
