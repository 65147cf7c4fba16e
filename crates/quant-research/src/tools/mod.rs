//! Research tools
//!
//! Each tool is stateless across calls; the news and sentiment tools only
//! hold a shared handle to the provider they delegate to.

pub mod calculator;
pub mod news;
pub mod sentiment;

pub use calculator::CalculatorTool;
pub use news::FetchMarketNewsTool;
pub use sentiment::SentimentTool;
