//! Research agent: fetch news, score sentiment, ask the LLM for an insight
//!
//! The pipeline is a fixed three-stage [`Workflow`] over a
//! [`ResearchState`] created fresh for every query:
//!
//! 1. [`FetchNewsStage`] reads `query` and writes `news`
//! 2. [`AnalyzeSentimentStage`] reads `news` and writes `sentiment_score`
//! 3. [`SummarizeStage`] reads both and writes `insight`
//!
//! The first two stages never fail; a broken tool degrades to an empty
//! string or a neutral score. The summarize stage is the only place where
//! an LLM failure becomes [`Error::Unavailable`].

use agent_core::{Agent, Context, Error, Result};
use agent_llm::providers::{OllamaConfig, OllamaProvider};
use agent_llm::{CompletionRequest, LLMProvider, Message};
use agent_tools::{Tool, ToolRegistry};
use agent_workflow::{Stage, Workflow, WorkflowState};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ResearchConfig;
use crate::prompts::insight_prompt;
use crate::tools::{FetchMarketNewsTool, SentimentTool, news::MARKET_KEY};

const NEWS_TOOL: &str = "fetch_market_news";
const SENTIMENT_TOOL: &str = "analyze_sentiment";

/// State threaded through the research pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchState {
    /// The caller's query
    pub query: String,
    /// Headlines produced by the fetch stage
    pub news: Option<String>,
    /// Score in `[-1, 1]` produced by the sentiment stage
    pub sentiment_score: Option<f64>,
    /// LLM answer produced by the summarize stage
    pub insight: Option<String>,
}

impl ResearchState {
    /// Fresh state seeded with `query`
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Delta returned by a research stage
#[derive(Debug, Clone, PartialEq)]
pub enum ResearchUpdate {
    News(String),
    Sentiment(f64),
    Insight(String),
}

impl WorkflowState for ResearchState {
    type Update = ResearchUpdate;

    fn apply(&mut self, update: ResearchUpdate) {
        match update {
            ResearchUpdate::News(news) => self.news = Some(news),
            ResearchUpdate::Sentiment(score) => self.sentiment_score = Some(score),
            ResearchUpdate::Insight(insight) => self.insight = Some(insight),
        }
    }
}

/// Stage 1: look up headlines for the query
pub struct FetchNewsStage {
    tools: ToolRegistry,
}

impl FetchNewsStage {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl Stage<ResearchState> for FetchNewsStage {
    fn name(&self) -> &str {
        "fetch_news"
    }

    async fn execute(&self, state: &ResearchState) -> Result<ResearchUpdate> {
        let topic = match state.query.trim() {
            "" => MARKET_KEY,
            query => query,
        };

        let news = match self.tools.call(NEWS_TOOL, json!({ "topic": topic })).await {
            Ok(Value::String(news)) => news,
            Ok(other) => other.to_string(),
            Err(e) => {
                warn!(error = %e, "News fetch failed, continuing without news");
                String::new()
            }
        };

        debug!(topic, headlines = news.lines().count(), "Fetched news");
        Ok(ResearchUpdate::News(news))
    }
}

/// Stage 2: score the sentiment of the fetched headlines
pub struct AnalyzeSentimentStage {
    tools: ToolRegistry,
}

impl AnalyzeSentimentStage {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl Stage<ResearchState> for AnalyzeSentimentStage {
    fn name(&self) -> &str {
        "analyze_sentiment"
    }

    async fn execute(&self, state: &ResearchState) -> Result<ResearchUpdate> {
        let text = state.news.as_deref().unwrap_or_default();

        let score = match self.tools.call(SENTIMENT_TOOL, json!({ "text": text })).await {
            Ok(value) => value.as_f64().filter(|s| s.is_finite()).unwrap_or_else(|| {
                warn!(%value, "Sentiment tool returned a non-numeric score");
                0.0
            }),
            Err(e) => {
                warn!(error = %e, "Sentiment analysis failed, using a neutral score");
                0.0
            }
        };

        let score = score.clamp(-1.0, 1.0);
        debug!(score, "Scored sentiment");
        Ok(ResearchUpdate::Sentiment(score))
    }
}

/// Stage 3: ask the LLM for a short investment insight
pub struct SummarizeStage {
    provider: Arc<dyn LLMProvider>,
    config: ResearchConfig,
}

impl SummarizeStage {
    pub fn new(provider: Arc<dyn LLMProvider>, config: ResearchConfig) -> Self {
        Self { provider, config }
    }
}

#[async_trait]
impl Stage<ResearchState> for SummarizeStage {
    fn name(&self) -> &str {
        "summarize"
    }

    async fn execute(&self, state: &ResearchState) -> Result<ResearchUpdate> {
        let news = state.news.as_deref().unwrap_or_default();
        let score = state.sentiment_score.unwrap_or(0.0);

        let request = CompletionRequest::builder(&self.config.ollama_model)
            .add_message(Message::user(insight_prompt(news, score)))
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build();

        debug!(provider = self.provider.name(), model = %self.config.ollama_model, "Requesting insight");
        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| Error::unavailable(self.config.unavailable_hint(), e))?;

        Ok(ResearchUpdate::Insight(response.text()))
    }
}

/// Agent producing an investment insight for a symbol or topic
///
/// # Example
///
/// ```rust,no_run
/// use agent_core::{Agent, Context};
/// use quant_research::{ResearchAgent, ResearchConfig};
///
/// # async fn example() -> agent_core::Result<()> {
/// let agent = ResearchAgent::from_config(&ResearchConfig::default())?;
/// let state = agent.research("MSFT").await?;
/// println!("{:?} -> {:?}", state.sentiment_score, state.insight);
/// # Ok(())
/// # }
/// ```
pub struct ResearchAgent {
    tools: ToolRegistry,
    workflow: Workflow<ResearchState>,
}

impl ResearchAgent {
    /// Create an agent over injected tools and an LLM provider
    ///
    /// The tool set must contain `fetch_market_news` and `analyze_sentiment`.
    pub fn new(
        tools: impl IntoIterator<Item = Arc<dyn Tool>>,
        provider: Arc<dyn LLMProvider>,
        config: ResearchConfig,
    ) -> Result<Self> {
        let tools = ToolRegistry::new(tools);

        for required in [NEWS_TOOL, SENTIMENT_TOOL] {
            if !tools.contains(required) {
                return Err(Error::InitializationFailed(format!(
                    "research agent requires the '{required}' tool"
                )));
            }
        }

        let workflow = Workflow::<ResearchState>::builder()
            .add_stage(FetchNewsStage::new(tools.clone()))
            .add_stage(AnalyzeSentimentStage::new(tools.clone()))
            .add_stage(SummarizeStage::new(provider, config))
            .build()?;

        Ok(Self { tools, workflow })
    }

    /// Create an agent with the default tools talking to Ollama
    ///
    /// A provider that cannot be constructed is reported as
    /// [`Error::Unavailable`], the same as one that cannot be reached.
    pub fn from_config(config: &ResearchConfig) -> Result<Self> {
        config.validate()?;

        let provider = OllamaProvider::with_config(
            OllamaConfig::new(&config.ollama_base_url)
                .with_timeout(config.request_timeout.as_secs().max(1)),
        )
        .map_err(|e| Error::unavailable(config.unavailable_hint(), e))?;

        Self::new(Self::default_tools(), Arc::new(provider), config.clone())
    }

    /// The news and sentiment tools backed by the built-in providers
    pub fn default_tools() -> Vec<Arc<dyn Tool>> {
        vec![
            Arc::new(FetchMarketNewsTool::default()),
            Arc::new(SentimentTool::default()),
        ]
    }

    /// Run the pipeline and return the full final state
    pub async fn research(&self, query: &str) -> Result<ResearchState> {
        self.workflow.execute(ResearchState::new(query)).await
    }

    /// Tools available to this agent
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Dispatch `params` to the named tool
    pub async fn call_tool(&self, name: &str, params: Value) -> Result<Value> {
        self.tools.call(name, params).await
    }

    /// Pipeline stage names in execution order
    pub fn stages(&self) -> Vec<&str> {
        self.workflow.stage_names()
    }
}

#[async_trait]
impl Agent for ResearchAgent {
    async fn run(&self, query: &str, context: &Context) -> Result<String> {
        info!(
            query,
            request_id = context.request_id().unwrap_or("-"),
            "Running research pipeline"
        );

        let state = self.research(query).await?;
        Ok(state.insight.unwrap_or_default())
    }

    fn name(&self) -> &str {
        "research_agent"
    }
}
