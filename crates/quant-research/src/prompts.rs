//! Prompt templates used by the research agent

/// Prompt asking the LLM for a short investment insight
///
/// The sentiment score is rendered with two decimals next to its range so
/// the model can interpret it.
pub fn insight_prompt(news: &str, sentiment: f64) -> String {
    format!(
        "Given this market news and sentiment score ({sentiment:.2}, range -1 to 1):\n\n\
         News:\n{news}\n\n\
         Provide a brief investment insight (2-3 sentences). Be concise."
    )
}
