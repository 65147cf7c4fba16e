//! Command-line interface for QuantGPT

use agent_core::{Agent, Context};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use quant_api::{AppState, ServerConfig};
use quant_research::{
    MathAgent, ModelInfo, PriceForecaster, ResearchAgent, ResearchConfig, SentimentTool,
    available_models, optimize_portfolio,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "quantgpt")]
#[command(about = "AI-powered investment research assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate `<operation> <a> <b>`, e.g. `math add 2 3`
    Math {
        /// Operation followed by two numbers
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        query: Vec<String>,
    },
    /// Fetch news, score sentiment and ask the LLM for an insight
    Research {
        /// Symbol or topic, e.g. AAPL
        query: String,
        /// Override the Ollama model
        #[arg(long)]
        model: Option<String>,
        /// Override the Ollama base URL
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Score the sentiment of a text
    Sentiment {
        /// Text to analyze
        text: String,
    },
    /// Naive price forecast
    Forecast {
        /// Observed prices, oldest first
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        prices: Vec<f64>,
        /// Number of steps to forecast
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },
    /// Equal-weight allocation over the given asset prices
    Portfolio {
        /// One price per asset
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        prices: Vec<f64>,
    },
    /// List available LLM models
    Models,
    /// Run the HTTP API
    Serve {
        /// Interface to bind (default: QUANTGPT_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default: QUANTGPT_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    agent_utils::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Math { query } => {
            let reply = MathAgent::default()
                .run(&query.join(" "), &Context::new())
                .await?;
            println!("{reply}");
        }
        Commands::Research {
            query,
            model,
            base_url,
        } => {
            let config = research_config(model, base_url)?;
            let agent = ResearchAgent::from_config(&config)?;

            info!(model = %config.ollama_model, "Running research for '{}'", query);
            let state = agent.research(&query).await?;

            println!("News:\n{}\n", state.news.unwrap_or_default());
            println!("Sentiment: {:.2}\n", state.sentiment_score.unwrap_or(0.0));
            println!("Insight:\n{}", state.insight.unwrap_or_default());
        }
        Commands::Sentiment { text } => {
            println!("Sentiment score: {}", SentimentTool::default().analyze(&text));
        }
        Commands::Forecast { prices, steps } => {
            let forecast = PriceForecaster::new(prices).forecast(steps)?;
            println!("{forecast:?}");
        }
        Commands::Portfolio { prices } => {
            println!("{:?}", optimize_portfolio(&prices)?);
        }
        Commands::Models => {
            println!("{}", models_table(&available_models()));
        }
        Commands::Serve { host, port } => {
            let mut server = ServerConfig::from_env();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let state = AppState::from_config(&research_config(None, None)?)?;
            quant_api::serve(&server, state)
                .await
                .with_context(|| format!("server on {} failed", server.addr()))?;
        }
    }

    Ok(())
}

/// Research configuration from the environment with command-line overrides
fn research_config(
    model: Option<String>,
    base_url: Option<String>,
) -> anyhow::Result<ResearchConfig> {
    let mut config = ResearchConfig::from_env()?;
    if let Some(model) = model {
        config.ollama_model = model;
    }
    if let Some(base_url) = base_url {
        config.ollama_base_url = base_url;
    }
    config.validate()?;
    Ok(config)
}

fn models_table(models: &[ModelInfo]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Provider"]);

    for model in models {
        table.add_row(vec![&model.id, &model.name, &model.provider]);
    }
    table
}
