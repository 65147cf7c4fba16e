//! Keyed market headline lookup

use std::collections::HashMap;

/// Source of market headlines keyed by symbol or topic
#[cfg_attr(test, mockall::automock)]
pub trait NewsSource: Send + Sync {
    /// Headlines stored under exactly `key`, if any
    fn headlines(&self, key: &str) -> Option<Vec<String>>;
}

/// In-memory headline store
///
/// The default instance carries a fixed mock data set for `aapl`, `msft`
/// and the general `market` topic.
#[derive(Debug, Clone)]
pub struct StaticNewsSource {
    entries: HashMap<String, Vec<String>>,
}

impl StaticNewsSource {
    /// Build a store from `(key, headlines)` pairs. Keys are lower-cased.
    pub fn from_entries<K, H>(entries: impl IntoIterator<Item = (K, H)>) -> Self
    where
        K: AsRef<str>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, headlines)| {
                (
                    key.as_ref().trim().to_lowercase(),
                    headlines.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}

impl Default for StaticNewsSource {
    fn default() -> Self {
        Self::from_entries([
            (
                "aapl",
                [
                    "Apple Inc. reports strong Q4 earnings, beats analyst expectations.",
                    "iPhone 16 sales exceed projections in key markets.",
                    "Apple announces new AI features for upcoming devices.",
                ],
            ),
            (
                "msft",
                [
                    "Microsoft Azure expands cloud services in Asia-Pacific.",
                    "Microsoft and OpenAI deepen partnership for AI development.",
                    "Windows 11 adoption continues to grow.",
                ],
            ),
            (
                "market",
                [
                    "Fed signals potential rate cuts in 2025.",
                    "Global markets show mixed signals amid economic data.",
                    "Tech sector leads gains as broader market consolidates.",
                ],
            ),
        ])
    }
}

impl NewsSource for StaticNewsSource {
    fn headlines(&self, key: &str) -> Option<Vec<String>> {
        self.entries.get(key).cloned()
    }
}
