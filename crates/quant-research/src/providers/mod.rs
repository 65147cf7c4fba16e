//! Data providers behind the research tools
//!
//! Tools never hold data or scoring logic themselves. They delegate to a
//! [`NewsSource`] or a [`SentimentScorer`], which can be swapped for a live
//! feed or another model without touching the tools or the agents.

pub mod news;
pub mod sentiment;

pub use news::{NewsSource, StaticNewsSource};
pub use sentiment::{LexiconScorer, SentimentScorer};

#[cfg(test)]
pub use news::MockNewsSource;
#[cfg(test)]
pub use sentiment::MockSentimentScorer;
