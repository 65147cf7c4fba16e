//! Sentiment analysis tool

use crate::providers::{LexiconScorer, SentimentScorer};
use agent_core::Result;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

/// Tool scoring the sentiment of `text` on a `[-1, 1]` scale
pub struct SentimentTool {
    scorer: Arc<dyn SentimentScorer>,
}

impl SentimentTool {
    /// Create a tool delegating to `scorer`
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    /// Score `text`. Blank text is exactly neutral.
    pub fn analyze(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let score = self.scorer.score(text);
        if score.is_finite() {
            score.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for SentimentTool {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }
}

#[async_trait]
impl Tool for SentimentTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let text = params.get("text").and_then(Value::as_str).unwrap_or_default();
        Ok(json!(self.analyze(text)))
    }

    fn name(&self) -> &str {
        "analyze_sentiment"
    }

    fn description(&self) -> &str {
        "Analyzes sentiment of text; returns score -1 to 1 (negative to positive)."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "text": schema::string("Text to score") }),
            &["text"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockSentimentScorer;

    #[tokio::test]
    async fn test_blank_text_is_zero() {
        let tool = SentimentTool::default();
        for params in [json!({}), json!({ "text": "" }), json!({ "text": "  \n " })] {
            let score = tool.execute(params).await.unwrap();
            assert_eq!(score.as_f64(), Some(0.0));
        }
    }

    #[test]
    fn test_blank_text_skips_scorer() {
        let mut scorer = MockSentimentScorer::new();
        scorer.expect_score().never();

        let tool = SentimentTool::new(Arc::new(scorer));
        assert_eq!(tool.analyze("   "), 0.0);
    }

    #[tokio::test]
    async fn test_polarity() {
        let tool = SentimentTool::default();

        let positive = tool
            .execute(json!({ "text": "Great results, strong growth and record profit!" }))
            .await
            .unwrap();
        assert!(positive.as_f64().unwrap() > 0.0);

        let negative = tool
            .execute(json!({ "text": "Terrible losses, weak demand and a looming recession." }))
            .await
            .unwrap();
        assert!(negative.as_f64().unwrap() < 0.0);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let mut scorer = MockSentimentScorer::new();
        scorer.expect_score().returning(|text| match text {
            "up" => 4.2,
            "down" => -7.0,
            _ => f64::NAN,
        });

        let tool = SentimentTool::new(Arc::new(scorer));
        assert_eq!(tool.analyze("up"), 1.0);
        assert_eq!(tool.analyze("down"), -1.0);
        assert_eq!(tool.analyze("???"), 0.0);
    }

    #[test]
    fn test_metadata() {
        let tool = SentimentTool::default();
        assert_eq!(tool.name(), "analyze_sentiment");
        assert!(tool.description().contains("-1 to 1"));
    }
}
