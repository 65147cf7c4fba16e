//! Market news tool

use crate::providers::{NewsSource, StaticNewsSource};
use agent_core::Result;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// Key used when nothing more specific matches
pub const MARKET_KEY: &str = "market";

const NO_NEWS: &str = "No market news available.";

/// Tool returning newline-joined headlines for a symbol or topic
///
/// Lookup order: the full key, then its first word, then the general
/// market entry. The result is never empty.
pub struct FetchMarketNewsTool {
    source: Arc<dyn NewsSource>,
}

impl FetchMarketNewsTool {
    /// Create a tool reading from `source`
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    /// Headlines for the first non-empty of `symbol` and `topic`
    pub fn fetch(&self, symbol: Option<&str>, topic: Option<&str>) -> String {
        let key = resolve_key(symbol, topic);

        let headlines = self
            .lookup(&key)
            .or_else(|| {
                let first_word = key.split_whitespace().next()?;
                (first_word != key).then(|| self.lookup(first_word)).flatten()
            })
            .or_else(|| self.lookup(MARKET_KEY));

        match headlines {
            Some(headlines) => headlines.join("\n"),
            None => {
                debug!("No headlines for '{}' and no market fallback", key);
                NO_NEWS.to_string()
            }
        }
    }

    fn lookup(&self, key: &str) -> Option<Vec<String>> {
        self.source
            .headlines(key)
            .filter(|headlines| headlines.iter().any(|h| !h.trim().is_empty()))
    }
}

impl Default for FetchMarketNewsTool {
    fn default() -> Self {
        Self::new(Arc::new(StaticNewsSource::default()))
    }
}

fn resolve_key(symbol: Option<&str>, topic: Option<&str>) -> String {
    let raw = [symbol, topic]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or(MARKET_KEY);

    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        MARKET_KEY.to_string()
    } else {
        key
    }
}

#[async_trait]
impl Tool for FetchMarketNewsTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let symbol = params.get("symbol").and_then(Value::as_str);
        let topic = params.get("topic").and_then(Value::as_str);

        Ok(Value::String(self.fetch(symbol, topic)))
    }

    fn name(&self) -> &str {
        "fetch_market_news"
    }

    fn description(&self) -> &str {
        "Fetches market news for a stock symbol or topic. Use symbol or topic."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "symbol": schema::string("Stock ticker symbol, e.g. AAPL"),
                "topic": schema::string("Free-text market topic"),
            }),
            &[],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockNewsSource;
    use mockall::predicate::eq;

    fn market_headlines() -> String {
        StaticNewsSource::default()
            .headlines(MARKET_KEY)
            .unwrap()
            .join("\n")
    }

    #[tokio::test]
    async fn test_no_arguments_returns_market() {
        let tool = FetchMarketNewsTool::default();
        let result = tool.execute(json!({})).await.unwrap();
        assert_eq!(result.as_str().unwrap(), market_headlines());
    }

    #[test]
    fn test_blank_arguments_return_market() {
        let tool = FetchMarketNewsTool::default();
        assert_eq!(tool.fetch(Some(""), Some("")), market_headlines());
        assert_eq!(tool.fetch(Some("   "), None), market_headlines());
        assert_eq!(tool.fetch(None, Some("\t")), market_headlines());
    }

    #[test]
    fn test_symbol_lookup_is_case_insensitive() {
        let tool = FetchMarketNewsTool::default();
        let news = tool.fetch(Some(" AAPL "), None);
        assert!(news.contains("Apple"));
        assert_eq!(news.lines().count(), 3);
    }

    #[test]
    fn test_symbol_wins_over_topic() {
        let tool = FetchMarketNewsTool::default();
        assert!(tool.fetch(Some("msft"), Some("aapl")).contains("Microsoft"));
        assert!(tool.fetch(Some(""), Some("aapl")).contains("Apple"));
    }

    #[test]
    fn test_first_word_retry() {
        let tool = FetchMarketNewsTool::default();
        assert!(tool.fetch(None, Some("AAPL earnings outlook")).contains("Apple"));
    }

    #[test]
    fn test_unknown_symbol_falls_back() {
        let tool = FetchMarketNewsTool::default();
        for symbol in ["TSLA", "zzz", "some long topic"] {
            let news = tool.fetch(Some(symbol), None);
            assert!(!news.is_empty());
            assert_eq!(news, market_headlines());
        }
    }

    #[tokio::test]
    async fn test_non_string_arguments_ignored() {
        let tool = FetchMarketNewsTool::default();
        let result = tool.execute(json!({ "symbol": 42, "topic": null })).await.unwrap();
        assert_eq!(result.as_str().unwrap(), market_headlines());
    }

    #[test]
    fn test_lookup_chain_against_source() {
        let mut source = MockNewsSource::new();
        source
            .expect_headlines()
            .with(eq("nvda chips"))
            .times(1)
            .returning(|_| None);
        source
            .expect_headlines()
            .with(eq("nvda"))
            .times(1)
            .returning(|_| Some(vec!["Nvidia unveils new GPUs.".to_string()]));

        let tool = FetchMarketNewsTool::new(Arc::new(source));
        assert_eq!(tool.fetch(None, Some("NVDA chips")), "Nvidia unveils new GPUs.");
    }

    #[test]
    fn test_source_without_market_entry() {
        let mut source = MockNewsSource::new();
        source.expect_headlines().returning(|_| None);

        let tool = FetchMarketNewsTool::new(Arc::new(source));
        assert_eq!(tool.fetch(Some("anything"), None), NO_NEWS);
    }

    #[test]
    fn test_empty_entry_treated_as_miss() {
        let source = StaticNewsSource::from_entries([
            ("ghost", vec![]),
            ("market", vec!["Markets flat."]),
        ]);
        let tool = FetchMarketNewsTool::new(Arc::new(source));
        assert_eq!(tool.fetch(Some("ghost"), None), "Markets flat.");
    }
}
