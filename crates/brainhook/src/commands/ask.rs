use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use claude_brains::{get_brain_atom, AnthropicClient, AskInput};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub async fn execute(
    prompt: String,
    system: Option<String>,
    schema: Option<PathBuf>,
    model: Option<String>,
    config: &Config,
) -> Result<()> {
    let slug = model.unwrap_or_else(|| config.llm.model.clone());

    let schema = match schema {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .context(format!("Failed to read schema file: {:?}", path))?;
            let schema = serde_json::from_str::<serde_json::Value>(&content)
                .context("Failed to parse schema JSON")?;
            Some(schema)
        }
        None => None,
    };

    let api_key = std::env::var(&config.llm.api_key_env)
        .map_err(|_| anyhow!("{} is not set", config.llm.api_key_env))?;
    let transport = Arc::new(AnthropicClient::new(&api_key)?);

    let atom = get_brain_atom(&slug, transport)
        .ok_or_else(|| anyhow!("unknown model slug '{}'", slug))?
        .with_max_tokens(config.llm.max_tokens)
        .with_temperature(config.llm.temperature);

    info!(slug = %slug, model = atom.spec().model_id, "Asking brain atom");

    let answer = atom
        .ask(AskInput {
            system,
            prompt,
            schema,
            history: Vec::new(),
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&answer.output)?);
    info!(
        input_tokens = answer.usage.input_tokens,
        output_tokens = answer.usage.output_tokens,
        "Brain atom usage"
    );
    Ok(())
}
