//! Research agents

pub mod math;
pub mod research;

pub use math::MathAgent;
pub use research::{
    AnalyzeSentimentStage, FetchNewsStage, ResearchAgent, ResearchState, ResearchUpdate,
    SummarizeStage,
};
